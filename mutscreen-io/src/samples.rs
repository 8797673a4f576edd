//! Reading the per-sequence table written by the upstream variant caller.
use std::path::Path;

use csv::ReaderBuilder;
use log::info;

use mutscreen_core::models::SampleInput;

use crate::consts::{
    DELETIONS_COL, INSERTIONS_COL, SAMPLE_DELIMITER, SEQ_NAME_COL, SUBSTITUTIONS_COL,
};
use crate::error::Result;
use crate::utils::{find_column, get_dynamic_reader, require_columns};

///
/// Read the sample table.
///
/// `seqName` and `aaSubstitutions` are required. `aaDeletions` and
/// `aaInsertions` may be absent, and any missing cell reads as empty.
///
pub fn read_samples(path: &Path) -> Result<Vec<SampleInput>> {
    let reader = get_dynamic_reader(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(SAMPLE_DELIMITER)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let [name_idx, subs_idx] = require_columns(path, &headers, [SEQ_NAME_COL, SUBSTITUTIONS_COL])?;
    let del_idx = find_column(&headers, DELETIONS_COL);
    let ins_idx = find_column(&headers, INSERTIONS_COL);

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        samples.push(SampleInput {
            sequence_id: field(Some(name_idx)),
            substitutions: field(Some(subs_idx)),
            deletions: field(del_idx),
            insertions: field(ins_idx),
        });
    }

    info!("Read {} samples from {}", samples.len(), path.display());

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;
    use std::path::PathBuf;

    use crate::error::ScreenIoError;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/screen")
            .join(file_name)
    }

    #[rstest]
    fn test_read_samples_fixture() {
        let samples = read_samples(&get_test_path("samples.tsv")).unwrap();

        assert_eq!(samples.len(), 4);
        assert_eq!(
            samples[0],
            SampleInput::new("sample1", "HA:E75K,HA:M128L", "", "")
        );
        assert_eq!(samples[2].deletions, "HA:K80-");
        assert_eq!(samples[3], SampleInput::new("sample4", "", "", ""));
    }

    #[rstest]
    fn test_optional_columns_may_be_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nextclade.tsv");
        fs::write(&path, "seqName\tclade\taaSubstitutions\ns1\t3C\tHA:E75K\ns2\t3C\n").unwrap();

        let samples = read_samples(&path).unwrap();
        assert_eq!(
            samples,
            vec![
                SampleInput::new("s1", "HA:E75K", "", ""),
                SampleInput::new("s2", "", "", ""),
            ]
        );
    }

    #[rstest]
    fn test_missing_required_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nextclade.tsv");
        fs::write(&path, "seqName\taaDeletions\ns1\tHA:K80-\n").unwrap();

        let err = read_samples(&path).unwrap_err();
        assert!(matches!(err, ScreenIoError::MissingColumns { .. }));
    }
}
