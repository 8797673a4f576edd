use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use mutscreen_io::{resolve_datasets, run_batch as screen_datasets};

fn required_dir<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a Path> {
    matches
        .get_one::<String>(name)
        .map(Path::new)
        .with_context(|| format!("--{} is required.", name))
}

pub fn run_batch(matches: &ArgMatches) -> Result<()> {
    let tsv_dir = required_dir(matches, "tsv-dir")?;
    let mutations_dir = required_dir(matches, "mutations-dir")?;
    let datasets_dir = required_dir(matches, "datasets")?;
    let output_dir = required_dir(matches, "output-dir")?;

    let jobs = resolve_datasets(tsv_dir, mutations_dir, datasets_dir, output_dir)?;
    info!("Found {} datasets in {}", jobs.len(), datasets_dir.display());

    let outputs = screen_datasets(&jobs, output_dir)?;
    info!(
        "Wrote {} summary pairs to {}",
        outputs.len(),
        output_dir.display()
    );

    Ok(())
}
