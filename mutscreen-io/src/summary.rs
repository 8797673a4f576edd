//! Per-dataset outputs: the per-sample summary and the frequency summary.
use std::path::{Path, PathBuf};

use csv::Writer;
use log::info;
use serde::Serialize;

use mutscreen_core::models::{FrequencyRow, SampleRecord};

use crate::consts::{FREQ_SUMMARY_SUFFIX, FREQUENCY_COLUMNS, SUMMARY_COLUMNS, SUMMARY_SUFFIX};
use crate::error::Result;

#[derive(Debug, Serialize)]
struct SummaryRow {
    #[serde(rename = "Sequence_ID")]
    sequence_id: String,
    #[serde(rename = "All_Mutations")]
    all_mutations: String,
    #[serde(rename = "Curated_Mutations")]
    curated_mutations: String,
    #[serde(rename = "Inferred_Mutations")]
    inferred_mutations: String,
    #[serde(rename = "Combination_Present")]
    combination_present: String,
}

impl From<&SampleRecord> for SummaryRow {
    fn from(record: &SampleRecord) -> Self {
        SummaryRow {
            sequence_id: record.sequence_id.clone(),
            all_mutations: record.all_mutations_field(),
            curated_mutations: record.curated_field(),
            inferred_mutations: record.inferred_field(),
            combination_present: record.combinations_field(),
        }
    }
}

///
/// Output paths for a prefix: `<prefix>_summary.csv` and
/// `<prefix>_freq_summary.csv`.
///
pub fn summary_paths(prefix: &str) -> (PathBuf, PathBuf) {
    (
        PathBuf::from(format!("{}{}", prefix, SUMMARY_SUFFIX)),
        PathBuf::from(format!("{}{}", prefix, FREQ_SUMMARY_SUFFIX)),
    )
}

pub fn write_sample_summary(path: &Path, records: &[SampleRecord]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    // header goes out even for an empty cohort
    if records.is_empty() {
        writer.write_record(SUMMARY_COLUMNS)?;
    }
    for record in records {
        writer.serialize(SummaryRow::from(record))?;
    }
    writer.flush()?;

    info!("Wrote {} sample rows to {}", records.len(), path.display());
    Ok(())
}

pub fn write_frequency_summary(path: &Path, rows: &[FrequencyRow]) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    if rows.is_empty() {
        writer.write_record(FREQUENCY_COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("Wrote {} frequency rows to {}", rows.len(), path.display());
    Ok(())
}
