use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use mutscreen_io::validate_curated_dir;

pub fn run_validate(matches: &ArgMatches) -> Result<()> {
    let dir = matches
        .get_one::<String>("mutation_dir")
        .context("A mutation directory is required.")?;

    let files = validate_curated_dir(Path::new(dir))?;
    info!("All {} mutation files passed validation.", files.len());

    Ok(())
}
