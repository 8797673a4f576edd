use std::path::{Path, PathBuf};

use log::info;

use mutscreen_core::models::CuratedList;
use mutscreen_core::{CohortSummary, screen_cohort};

use crate::curated::read_curated_list;
use crate::error::Result;
use crate::samples::read_samples;
use crate::summary::{summary_paths, write_frequency_summary, write_sample_summary};

///
/// Screen one sample table against one curated table and write both
/// summaries next to `output_prefix`.
///
/// Both inputs are read and checked before anything is written, so a schema
/// error leaves no partial output behind.
///
/// # Arguments:
/// - `samples_path`: tab-separated sample table
/// - `curated_path`: curated table; without one every sample is screened
///   against an empty list
/// - `output_prefix`: prefix of the `_summary.csv` / `_freq_summary.csv` pair
///
pub fn screen_files(
    samples_path: &Path,
    curated_path: Option<&Path>,
    output_prefix: &str,
) -> Result<ScreenOutputs> {
    let curated = match curated_path {
        Some(path) => read_curated_list(path)?,
        None => CuratedList::default(),
    };
    let samples = read_samples(samples_path)?;

    let summary = screen_cohort(&samples, &curated);

    let (summary_path, freq_path) = summary_paths(output_prefix);
    write_sample_summary(&summary_path, &summary.records)?;
    write_frequency_summary(&freq_path, &summary.frequencies)?;

    info!(
        "Screened {} samples from {}",
        summary.records.len(),
        samples_path.display()
    );

    Ok(ScreenOutputs {
        summary,
        summary_path,
        freq_path,
    })
}

#[derive(Debug)]
pub struct ScreenOutputs {
    pub summary: CohortSummary,
    pub summary_path: PathBuf,
    pub freq_path: PathBuf,
}
