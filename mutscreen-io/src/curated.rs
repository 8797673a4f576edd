//! Loading and validating curated mutation tables.
//!
//! A curated table is comma separated with the columns `Gene`, `AminoAcid`,
//! `Combination` and `Reason_for_Inclusion`. Blank cells stay blank; nothing
//! is coerced to a missing-value marker.
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::info;

use mutscreen_core::models::CuratedList;

use crate::consts::{AMINO_ACID_COL, CSV_FILE_EXTENSION, CURATED_COLUMNS, GENE_COL};
use crate::error::{Result, ScreenIoError};
use crate::utils::{get_dynamic_reader, list_files, require_columns};

///
/// Read a curated table into a [CuratedList].
///
/// The header is checked before any row is looked at, and a table with no
/// data rows is rejected.
///
pub fn read_curated_list(path: &Path) -> Result<CuratedList> {
    let reader = get_dynamic_reader(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    require_columns(path, &headers, CURATED_COLUMNS)?;
    let [gene_idx, aa_idx] = require_columns(path, &headers, [GENE_COL, AMINO_ACID_COL])?;

    let mut curated = CuratedList::default();
    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        let gene = record.get(gene_idx).unwrap_or_default();
        let amino_acid = record.get(aa_idx).unwrap_or_default();
        curated.add_entry(gene, amino_acid);
        rows += 1;
    }

    if rows == 0 {
        return Err(ScreenIoError::NoDataRows(path.display().to_string()));
    }

    info!(
        "Loaded {} individual mutations and {} combinations from {}",
        curated.individual().len(),
        curated.combinations().len(),
        path.display()
    );

    Ok(curated)
}

///
/// Check every curated table in a directory.
///
/// # Returns:
/// - the validated `.csv` files, sorted by name
///
pub fn validate_curated_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = list_files(dir)?
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == CSV_FILE_EXTENSION))
        .collect();

    if files.is_empty() {
        return Err(ScreenIoError::NoCuratedFiles(dir.display().to_string()));
    }

    for path in &files {
        read_curated_list(path)?;
        info!("File '{}' passed validation.", path.display());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;

    use mutscreen_core::models::Mutation;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/screen")
            .join(file_name)
    }

    #[rstest]
    fn test_read_curated_fixture() {
        let curated = read_curated_list(&get_test_path("curated.csv")).unwrap();

        assert_eq!(
            curated.individual(),
            &[
                Mutation::new("HA", "E75K"),
                Mutation::new("HA", "M128L"),
                Mutation::new("HA", "S145X"),
                Mutation::new("NA", "H275Y"),
            ]
        );
        assert_eq!(curated.combinations().len(), 1);
        assert_eq!(curated.combinations()[0].name, "E75K+M128L");
    }

    #[rstest]
    fn test_blank_cells_load_as_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        fs::write(
            &path,
            "Gene,AminoAcid,Combination,Reason_for_Inclusion\nHA,,,\n",
        )
        .unwrap();

        let curated = read_curated_list(&path).unwrap();
        assert_eq!(curated.individual(), &[Mutation::new("HA", "")]);
    }

    #[rstest]
    fn test_missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        fs::write(&path, "Gene,AminoAcid,Reason_for_Inclusion\nHA,E75K,r1\n").unwrap();

        let err = read_curated_list(&path).unwrap_err();
        assert!(matches!(err, ScreenIoError::MissingColumns { .. }));
    }

    #[rstest]
    fn test_header_only_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        fs::write(&path, "Gene,AminoAcid,Combination,Reason_for_Inclusion\n").unwrap();

        let err = read_curated_list(&path).unwrap_err();
        assert!(matches!(err, ScreenIoError::NoDataRows(_)));
    }

    #[rstest]
    fn test_empty_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.csv");
        fs::write(&path, "").unwrap();

        assert!(read_curated_list(&path).is_err());
    }

    #[rstest]
    fn test_validate_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("flu_ha.csv"),
            "Gene,AminoAcid,Combination,Reason_for_Inclusion\nHA,E75K,,r1\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = validate_curated_dir(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[rstest]
    fn test_validate_dir_without_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let err = validate_curated_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ScreenIoError::NoCuratedFiles(_)));
    }

    #[rstest]
    fn test_validate_dir_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.csv"),
            "Gene,AminoAcid,Combination,Reason_for_Inclusion\nHA,E75K,,r1\n",
        )
        .unwrap();
        fs::write(dir.path().join("b.csv"), "Gene,AminoAcid\nHA,E75K\n").unwrap();

        let err = validate_curated_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("b.csv"));
    }
}
