//! Screening several datasets in one go.
//!
//! Each dataset is named by a subdirectory of the datasets directory. Its
//! sample table and curated table are the files whose names contain the
//! dataset name. Datasets share nothing, so they are screened in parallel.
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use rayon::prelude::*;

use crate::error::{Result, ScreenIoError};
use crate::pipeline::{ScreenOutputs, screen_files};
use crate::utils::{file_name, list_files, list_subdirectories};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetJob {
    pub dataset: String,
    pub samples: PathBuf,
    pub curated: PathBuf,
    pub output_prefix: String,
}

///
/// Pick the single file whose name contains `dataset`.
///
pub fn find_matching_file(dataset: &str, files: &[PathBuf], kind: &str) -> Result<PathBuf> {
    let matches: Vec<&PathBuf> = files
        .iter()
        .filter(|path| file_name(path).contains(dataset))
        .collect();

    match matches.as_slice() {
        [] => Err(ScreenIoError::NoDatasetMatch {
            dataset: dataset.to_string(),
            kind: kind.to_string(),
        }),
        [single] => Ok((*single).clone()),
        _ => Err(ScreenIoError::AmbiguousDatasetMatch {
            dataset: dataset.to_string(),
            kind: kind.to_string(),
            matches: matches.iter().map(|p| file_name(p).to_string()).collect(),
        }),
    }
}

///
/// Resolve every dataset to its inputs before any screening starts.
///
pub fn resolve_datasets(
    tsv_dir: &Path,
    mutations_dir: &Path,
    datasets_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<DatasetJob>> {
    let tsv_files = list_files(tsv_dir)?;
    let mutation_files = list_files(mutations_dir)?;

    list_subdirectories(datasets_dir)?
        .iter()
        .map(|dir| {
            let dataset = file_name(dir).to_string();
            let samples = find_matching_file(&dataset, &tsv_files, "TSV")?;
            let curated = find_matching_file(&dataset, &mutation_files, "mutation list")?;
            let output_prefix = output_dir.join(&dataset).display().to_string();
            Ok(DatasetJob {
                dataset,
                samples,
                curated,
                output_prefix,
            })
        })
        .collect()
}

///
/// Screen every resolved dataset, creating the output directory first.
///
pub fn run_batch(jobs: &[DatasetJob], output_dir: &Path) -> Result<Vec<ScreenOutputs>> {
    fs::create_dir_all(output_dir)?;

    jobs.par_iter()
        .map(|job| {
            info!(
                "Processing {} with {}",
                job.samples.display(),
                job.curated.display()
            );
            screen_files(&job.samples, Some(&job.curated), &job.output_prefix).map_err(|err| {
                ScreenIoError::Dataset {
                    dataset: job.dataset.clone(),
                    source: Box::new(err),
                }
            })
        })
        .collect()
}
