use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::io::atomic_write_string;
use crate::io::csv_codec::{self, CodecError};
use crate::state::data_model::Document;
use crate::state::delimiter::Delimiter;

pub const DEFAULT_EXPORT_NAME: &str = "data.csv";

const CSV_MIME: &str = "text/csv";

#[derive(Debug, Error)]
pub enum CsvIoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Codec(#[from] CodecError),
    #[error("not a CSV file: {}", .0.display())]
    NotCsv(PathBuf),
}

/// A file is accepted when its MIME type is `text/csv` or its name ends in `.csv`.
pub fn accepts_file(name: &str, mime: Option<&str>) -> bool {
    if mime.is_some_and(|mime| mime.eq_ignore_ascii_case(CSV_MIME)) {
        return true;
    }
    name.to_ascii_lowercase().ends_with(".csv")
}

/// File name offered when saving: the loaded file's name, or `data.csv`.
pub fn export_file_name(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => DEFAULT_EXPORT_NAME.to_string(),
    }
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXPORT_NAME.to_string())
}

/// Reads a CSV file from disk after the acceptance check.
pub fn read_csv_file(path: &Path) -> Result<String, CsvIoError> {
    if !accepts_file(&file_name_of(path), None) {
        return Err(CsvIoError::NotCsv(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "read csv file");
    Ok(content)
}

pub fn save_csv(path: &Path, document: &Document, delimiter: Delimiter) -> Result<(), CsvIoError> {
    let text = csv_codec::serialize_document(document, delimiter)?;
    atomic_write_string(path, &text)?;
    tracing::info!(
        path = %path.display(),
        rows = document.row_count(),
        delimiter = delimiter.code(),
        "saved csv file"
    );
    Ok(())
}
