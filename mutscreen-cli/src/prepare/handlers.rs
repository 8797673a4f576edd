use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;

use mutscreen_io::prepare_fasta_dir;

pub fn run_prepare(matches: &ArgMatches) -> Result<()> {
    let input_dir = matches
        .get_one::<String>("input_dir")
        .context("An input directory is required.")?;
    let output_dir = matches
        .get_one::<String>("output_dir")
        .context("An output directory is required.")?;

    let written = prepare_fasta_dir(Path::new(input_dir), Path::new(output_dir))?;
    if written.is_empty() {
        warn!("No FASTA files found in {}", input_dir);
    }

    Ok(())
}
