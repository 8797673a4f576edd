use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use mutscreen_io::screen_files;

pub fn run_screen(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a sample table is required.")?;
    let output = matches
        .get_one::<String>("output")
        .context("An output prefix is required.")?;
    let mutations = matches.get_one::<String>("mutations").map(Path::new);

    let outputs = screen_files(Path::new(input), mutations, output)
        .with_context(|| format!("Failed to screen {}", input))?;

    info!("Summary saved to {}", outputs.summary_path.display());
    info!("Frequency summary saved to {}", outputs.freq_path.display());

    Ok(())
}
