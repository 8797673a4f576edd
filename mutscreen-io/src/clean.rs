//! Dropping unusable rows from caller output before screening.
//!
//! A row is kept when its fourth column is non-empty; rows where every
//! field is empty are dropped as well.
use std::fs;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use log::{info, warn};

use crate::consts::{CLEANED_SUFFIX, SAMPLE_DELIMITER, TSV_FILE_EXTENSION};
use crate::error::Result;
use crate::utils::list_files;

const FILTER_COLUMN: usize = 3;

///
/// Clean one tab-separated file.
///
/// # Returns:
/// - `Some(kept_rows)` when the cleaned file was written, `None` when the
///   input had no data rows and was skipped
///
pub fn clean_tsv_file(input: &Path, output: &Path) -> Result<Option<usize>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(SAMPLE_DELIMITER)
        .flexible(true)
        .from_path(input)?;
    let headers = reader.headers()?.clone();

    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    if records.is_empty() {
        warn!("{} is empty.", input.display());
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .delimiter(SAMPLE_DELIMITER)
        .flexible(true)
        .from_path(output)?;
    writer.write_record(&headers)?;

    let mut kept = 0;
    for record in records.iter().filter(|record| {
        let filter_set = record.get(FILTER_COLUMN).is_some_and(|field| !field.is_empty());
        filter_set && record.iter().any(|field| !field.is_empty())
    }) {
        writer.write_record(record)?;
        kept += 1;
    }
    writer.flush()?;

    info!("Cleaned {}, saved to {}", input.display(), output.display());
    Ok(Some(kept))
}

///
/// Clean every `.tsv` file of `input_dir` into `output_dir` as
/// `<stem>_cleaned.tsv`.
///
pub fn clean_tsv_dir(input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for input in list_files(input_dir)? {
        if input.extension().is_none_or(|ext| ext != TSV_FILE_EXTENSION) {
            continue;
        }
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output = output_dir.join(format!("{}{}", stem, CLEANED_SUFFIX));
        if clean_tsv_file(&input, &output)?.is_some() {
            written.push(output);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_clean_tsv_file_filters_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("nextclade.tsv");
        let output = dir.path().join("nextclade_cleaned.tsv");
        fs::write(
            &input,
            "index\tseqName\tclade\tqc.overallScore\n\
             1\ts1\t3C\t12.5\n\
             2\ts2\t3C\t\n\
             3\ts3\t3C\t0\n",
        )
        .unwrap();

        let kept = clean_tsv_file(&input, &output).unwrap();

        assert_eq!(kept, Some(2));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "index\tseqName\tclade\tqc.overallScore\n1\ts1\t3C\t12.5\n3\ts3\t3C\t0\n"
        );
    }

    #[rstest]
    fn test_header_only_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.tsv");
        let output = dir.path().join("empty_cleaned.tsv");
        fs::write(&input, "index\tseqName\tclade\tqc.overallScore\n").unwrap();

        assert_eq!(clean_tsv_file(&input, &output).unwrap(), None);
        assert!(!output.exists());
    }

    #[rstest]
    fn test_clean_tsv_dir() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.tsv"), "a\tb\tc\td\n1\t2\t3\t4\n").unwrap();
        fs::write(input.path().join("notes.txt"), "skip me").unwrap();

        let written = clean_tsv_dir(input.path(), output.path()).unwrap();
        assert_eq!(written, vec![output.path().join("a_cleaned.tsv")]);
    }
}
