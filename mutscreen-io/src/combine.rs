//! Merging per-dataset summaries into cohort-wide tables.
use std::fs;
use std::path::{Path, PathBuf};

use csv::{Reader, Writer};
use log::info;

use crate::consts::{
    FREQ_SUMMARY_SUFFIX, FREQUENCY_COLUMNS, MUTATION_COUNTS_FILE, MUTATION_LIST_COL,
    MUTATION_LIST_FILE, SUMMARY_COLUMNS, SUMMARY_SUFFIX,
};
use crate::error::{Result, ScreenIoError};
use crate::utils::{file_name, list_files, require_columns};

/// Per-sample summaries, excluding frequency summaries.
pub fn find_sample_summaries(dir: &Path) -> Result<Vec<PathBuf>> {
    find_with_suffix(dir, SUMMARY_SUFFIX, Some(FREQ_SUMMARY_SUFFIX))
}

pub fn find_frequency_summaries(dir: &Path) -> Result<Vec<PathBuf>> {
    find_with_suffix(dir, FREQ_SUMMARY_SUFFIX, None)
}

fn find_with_suffix(dir: &Path, suffix: &str, exclude: Option<&str>) -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = list_files(dir)?
        .into_iter()
        .filter(|path| {
            let name = file_name(path);
            name.ends_with(suffix) && !exclude.is_some_and(|ex| name.ends_with(ex))
        })
        .collect();

    if files.is_empty() {
        return Err(ScreenIoError::NoSummaryFiles {
            dir: dir.display().to_string(),
            suffix: suffix.to_string(),
        });
    }
    Ok(files)
}

///
/// Dataset name of a summary file: its file name without `suffix`.
///
pub fn dataset_name(path: &Path, suffix: &str) -> String {
    let name = file_name(path);
    name.strip_suffix(suffix).unwrap_or(name).to_string()
}

///
/// Write `Mutation_List.csv` and `Mutation_Counts.csv` into `output_dir`
/// from every summary pair found in `input_dir`.
///
/// # Returns:
/// - paths of the mutation list and mutation counts tables
///
pub fn combine_summaries(input_dir: &Path, output_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let summaries = find_sample_summaries(input_dir)?;
    let frequencies = find_frequency_summaries(input_dir)?;

    fs::create_dir_all(output_dir)?;
    let list_path = output_dir.join(MUTATION_LIST_FILE);
    let counts_path = output_dir.join(MUTATION_COUNTS_FILE);

    // Mutation_List: summary columns, then the dataset
    let mut header: Vec<&str> = SUMMARY_COLUMNS.to_vec();
    header.push(MUTATION_LIST_COL);
    let mut writer = Writer::from_path(&list_path)?;
    writer.write_record(&header)?;
    for path in &summaries {
        let dataset = dataset_name(path, SUMMARY_SUFFIX);
        copy_columns(path, SUMMARY_COLUMNS, &mut writer, |fields| {
            fields.push(dataset.clone())
        })?;
    }
    writer.flush()?;
    info!("Mutation List saved to: {}", list_path.display());

    // Mutation_Counts: the dataset, then frequency columns
    let mut header: Vec<&str> = vec![MUTATION_LIST_COL];
    header.extend(FREQUENCY_COLUMNS);
    let mut writer = Writer::from_path(&counts_path)?;
    writer.write_record(&header)?;
    for path in &frequencies {
        let dataset = dataset_name(path, FREQ_SUMMARY_SUFFIX);
        copy_columns(path, FREQUENCY_COLUMNS, &mut writer, |fields| {
            fields.insert(0, dataset.clone())
        })?;
    }
    writer.flush()?;
    info!("Mutation Counts saved to: {}", counts_path.display());

    Ok((list_path, counts_path))
}

fn copy_columns<const N: usize, W: std::io::Write>(
    path: &Path,
    columns: [&str; N],
    writer: &mut Writer<W>,
    decorate: impl Fn(&mut Vec<String>),
) -> Result<()> {
    let mut reader = Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let positions = require_columns(path, &headers, columns)?;

    for record in reader.records() {
        let record = record?;
        let mut fields: Vec<String> = positions
            .iter()
            .map(|&idx| record.get(idx).unwrap_or_default().to_string())
            .collect();
        decorate(&mut fields);
        writer.write_record(&fields)?;
    }
    Ok(())
}
