use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, warn};

use mutscreen_io::clean_tsv_dir;

pub fn run_clean(matches: &ArgMatches) -> Result<()> {
    let input_dir = matches
        .get_one::<String>("input_dir")
        .context("An input directory is required.")?;
    let output_dir = matches
        .get_one::<String>("output_dir")
        .context("An output directory is required.")?;

    let written = clean_tsv_dir(Path::new(input_dir), Path::new(output_dir))?;
    if written.is_empty() {
        warn!("No TSV files with data rows found in {}", input_dir);
    } else {
        info!("Cleaned {} files into {}", written.len(), output_dir);
    }

    Ok(())
}
