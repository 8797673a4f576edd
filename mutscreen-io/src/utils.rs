use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use flate2::read::MultiGzDecoder;

use crate::consts::GZ_FILE_EXTENSION;
use crate::error::{Result, ScreenIoError};

///
/// Get a reader for either a gzip'd or a plain file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new(GZ_FILE_EXTENSION));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Locate each required column in a header, failing with the full list of
/// expected and found columns when any is absent.
///
pub fn require_columns<const N: usize>(
    path: &Path,
    headers: &StringRecord,
    required: [&str; N],
) -> Result<[usize; N]> {
    let mut positions = [0; N];
    for (slot, name) in positions.iter_mut().zip(required) {
        match headers.iter().position(|h| h == name) {
            Some(idx) => *slot = idx,
            None => {
                return Err(ScreenIoError::MissingColumns {
                    path: path.display().to_string(),
                    expected: required.iter().map(|c| c.to_string()).collect(),
                    found: headers.iter().map(|h| h.to_string()).collect(),
                });
            }
        }
    }
    Ok(positions)
}

///
/// Position of an optional column, if the header has it.
///
pub fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

pub fn require_directory(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(ScreenIoError::MissingDirectory(dir.display().to_string()));
    }
    Ok(())
}

///
/// Regular files directly inside `dir`, sorted by name.
///
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    require_directory(dir)?;
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

///
/// Immediate subdirectories of `dir`, sorted by name.
///
pub fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    require_directory(dir)?;
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

pub fn file_name(path: &Path) -> &str {
    path.file_name().and_then(OsStr::to_str).unwrap_or_default()
}
