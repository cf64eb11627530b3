use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Row = Vec<String>;

pub const DEFAULT_COLUMN_NAME: &str = "New Column";

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("row {index} is out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    #[error("column {index} is out of range (table has {len} columns)")]
    ColumnOutOfRange { index: usize, len: usize },
    #[error("no cell is selected")]
    NothingSelected,
    #[error("no cell is being edited")]
    NotEditing,
}

/// Headers plus rows. Every row holds exactly `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct Document {
    headers: Row,
    rows: Vec<Row>,
}

/// Unchecked serde shape. Deserializing goes through [`Document::from_parts`].
#[derive(Deserialize)]
struct RawDocument {
    headers: Row,
    rows: Vec<Row>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::from_parts(raw.headers, raw.rows)
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document, padding short rows and widening the header so that
    /// no cell of a long row is dropped.
    pub fn from_parts(mut headers: Row, mut rows: Vec<Row>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);
        headers.resize(width, String::new());
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn header(&self, col: usize) -> Option<&str> {
        self.headers.get(col).map(String::as_str)
    }

    pub fn insert_row(&mut self, at: usize) -> Result<(), EditError> {
        self.check_row_slot(at)?;
        self.rows.insert(at, vec![String::new(); self.headers.len()]);
        Ok(())
    }

    pub fn delete_row(&mut self, at: usize) -> Result<(), EditError> {
        self.check_row(at)?;
        self.rows.remove(at);
        Ok(())
    }

    pub fn insert_column(&mut self, at: usize, name: &str) -> Result<(), EditError> {
        self.check_column_slot(at)?;
        self.headers.insert(at, name.to_string());
        for row in &mut self.rows {
            row.insert(at, String::new());
        }
        Ok(())
    }

    pub fn delete_column(&mut self, at: usize) -> Result<(), EditError> {
        self.check_column(at)?;
        self.headers.remove(at);
        for row in &mut self.rows {
            row.remove(at);
        }
        Ok(())
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) -> Result<(), EditError> {
        self.check_row(row)?;
        self.check_column(col)?;
        self.rows[row][col] = value.to_string();
        Ok(())
    }

    pub fn set_header(&mut self, col: usize, value: &str) -> Result<(), EditError> {
        self.check_column(col)?;
        self.headers[col] = value.to_string();
        Ok(())
    }

    /// Literal find-and-replace over data cells in row-major order.
    /// With `all == false` only the first cell whose text changes is touched,
    /// and only its first occurrence. Returns the number of cells changed.
    pub fn find_and_replace(&mut self, find: &str, replacement: &str, all: bool) -> usize {
        if find.is_empty() {
            return 0;
        }
        let pattern = match Regex::new(&regex::escape(find)) {
            Ok(pattern) => pattern,
            Err(err) => {
                tracing::warn!(%err, "escaped find pattern failed to compile");
                return 0;
            }
        };

        let mut changed = 0;
        for cell in self.rows.iter_mut().flatten() {
            if !pattern.is_match(cell.as_str()) {
                continue;
            }
            let next = if all {
                pattern.replace_all(cell.as_str(), NoExpand(replacement))
            } else {
                pattern.replace(cell.as_str(), NoExpand(replacement))
            }
            .into_owned();
            if next == *cell {
                continue;
            }
            *cell = next;
            changed += 1;
            if !all {
                break;
            }
        }
        changed
    }

    /// True when any cell of the row contains `needle`, ignoring case.
    pub fn row_contains(&self, row: usize, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.rows
            .get(row)
            .map(|cells| cells.iter().any(|cell| cell.to_lowercase().contains(&needle)))
            .unwrap_or(false)
    }

    fn check_row(&self, index: usize) -> Result<(), EditError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(EditError::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }

    fn check_row_slot(&self, index: usize) -> Result<(), EditError> {
        if index <= self.rows.len() {
            Ok(())
        } else {
            Err(EditError::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }

    fn check_column(&self, index: usize) -> Result<(), EditError> {
        if index < self.headers.len() {
            Ok(())
        } else {
            Err(EditError::ColumnOutOfRange {
                index,
                len: self.headers.len(),
            })
        }
    }

    fn check_column_slot(&self, index: usize) -> Result<(), EditError> {
        if index <= self.headers.len() {
            Ok(())
        } else {
            Err(EditError::ColumnOutOfRange {
                index,
                len: self.headers.len(),
            })
        }
    }
}

/// Header text as shown in the grid.
pub fn display_header(header: &str) -> String {
    header.to_uppercase()
}

/// Cells that look like image links get a hover preview.
pub fn looks_like_image_url(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let lower = text.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) || text.contains("image")
}

/// Splits a cell into display chips on the category separator.
pub fn category_parts<'a>(value: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return vec![value];
    }
    value
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
