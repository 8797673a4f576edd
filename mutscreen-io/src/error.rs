use std::io;
use thiserror::Error;

/// Error type for mutscreen-io operations.
#[derive(Error, Debug)]
pub enum ScreenIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A table lacks columns the reader depends on.
    #[error("File '{path}' is missing required columns. Expected columns: {expected:?}, Found: {found:?}")]
    MissingColumns {
        path: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A curated table has a header but no entries.
    #[error("File '{0}' contains only a header and no data")]
    NoDataRows(String),

    #[error("Directory '{0}' does not exist")]
    MissingDirectory(String),

    #[error("No CSV files found in mutation directory '{0}'")]
    NoCuratedFiles(String),

    #[error("No '{suffix}' files found in {dir}")]
    NoSummaryFiles { dir: String, suffix: String },

    #[error("No matching {kind} file found for dataset '{dataset}'")]
    NoDatasetMatch { dataset: String, kind: String },

    #[error("Multiple matching {kind} files found for dataset '{dataset}': {matches:?}")]
    AmbiguousDatasetMatch {
        dataset: String,
        kind: String,
        matches: Vec<String>,
    },

    /// Screening one dataset of a batch failed.
    #[error("Error processing dataset '{dataset}': {source}")]
    Dataset {
        dataset: String,
        #[source]
        source: Box<ScreenIoError>,
    },
}

/// Result type alias for mutscreen-io operations.
pub type Result<T> = std::result::Result<T, ScreenIoError>;
