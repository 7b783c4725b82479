//! File reading and batch parsing.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::LoadError;
use crate::source_file::{ParseOptions, SourceFile};

/// Extensions treated as PHP sources by [`collect_file_paths`].
pub const PHP_EXTENSIONS: &[&str] = &["php", "inc", "phtml"];

/// Read a file as text. Bytes that are not valid UTF-8 are decoded as
/// Latin-1, so any file yields a string.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            bytes.iter().map(|&b| char::from(b)).collect()
        }
    }
}

/// Load and parse one file. The file's absolute path overrides
/// `options.filename`.
pub fn load_and_parse(path: &Path, options: &ParseOptions) -> Result<SourceFile, LoadError> {
    let text = load_file(path)?;
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let options = ParseOptions {
        filename: absolute.display().to_string(),
        ..options.clone()
    };

    let file = SourceFile::parse_with_options(&text, &options);
    debug!(
        path = %absolute.display(),
        entities = file.tree().len(),
        "loaded"
    );
    Ok(file)
}

/// Every PHP file below `dir`, sorted.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(|source| LoadError::Io {
            path: current.clone(),
            source,
        })?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if has_php_extension(&path) {
                paths.push(path);
            }
        }
    }
    paths.sort();
    Ok(paths)
}

fn has_php_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PHP_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Parse many files in parallel. Results come back in input order; a file
/// that cannot be read yields its error without affecting the others.
pub fn parse_files(
    paths: &[PathBuf],
    options: &ParseOptions,
) -> Vec<(PathBuf, Result<SourceFile, LoadError>)> {
    paths
        .par_iter()
        .map(|path| {
            let result = load_and_parse(path, options);
            if let Err(err) = &result {
                warn!("{err}");
            }
            (path.clone(), result)
        })
        .collect()
}
