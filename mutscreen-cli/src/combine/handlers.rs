use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use mutscreen_io::combine_summaries;

pub fn run_combine(matches: &ArgMatches) -> Result<()> {
    let input_dir = matches
        .get_one::<String>("input-dir")
        .context("An input directory is required.")?;
    let output_dir = matches
        .get_one::<String>("output-dir")
        .context("An output directory is required.")?;

    combine_summaries(Path::new(input_dir), Path::new(output_dir))?;

    Ok(())
}
