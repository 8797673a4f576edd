//! Gathering consensus FASTA files under one naming scheme.
//!
//! Assemblers name their consensus output differently (`.fa`,
//! `.consensus.fasta`, `.irma.fasta`). Each recognised file is copied into
//! the output directory as `<base>.fasta`; other files are ignored.
use std::fs;
use std::path::{Path, PathBuf};

use fxhash::FxHashSet as HashSet;
use log::{info, warn};

use crate::consts::{FASTA_SUFFIX, FASTA_SUFFIXES};
use crate::error::Result;
use crate::utils::{file_name, list_files};

///
/// The normalised `.fasta` name of a consensus file, if it has a recognised
/// suffix.
///
pub fn normalized_fasta_name(name: &str) -> Option<String> {
    FASTA_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .map(|base| format!("{}{}", base, FASTA_SUFFIX))
}

///
/// Copy every consensus file of `input_dir` into `output_dir` with a
/// `.fasta` extension, creating `output_dir` if needed.
///
/// # Returns:
/// - the written files, in input name order
///
pub fn prepare_fasta_dir(input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let inputs = list_files(input_dir)?;
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    let mut seen: HashSet<String> = HashSet::default();
    for input in inputs {
        let Some(name) = normalized_fasta_name(file_name(&input)) else {
            continue;
        };
        if !seen.insert(name.clone()) {
            warn!(
                "{} overwrites an earlier file prepared as {}",
                input.display(),
                name
            );
        }
        let output = output_dir.join(&name);
        fs::copy(&input, &output)?;
        written.push(output);
    }

    info!(
        "Prepared {} FASTA files from {} in {}",
        written.len(),
        input_dir.display(),
        output_dir.display()
    );
    Ok(written)
}
