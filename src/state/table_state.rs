use thiserror::Error;

use crate::io::csv_codec::{self, CodecError};
use crate::state::command::{Command, Direction, EditTarget};
use crate::state::data_model::{Document, EditError, DEFAULT_COLUMN_NAME};
use crate::state::delimiter::{self, Delimiter};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditingCell {
    pub target: EditTarget,
    pub draft: String,
}

#[derive(Clone, Debug, PartialEq)]
struct HistoryEntry {
    document: Document,
    delimiter: Delimiter,
}

/// Session state: the loaded document plus everything the grid needs to
/// render it. All transitions go through [`TableState::apply`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TableState {
    document: Document,
    raw_content: String,
    file_name: Option<String>,
    delimiter: Delimiter,
    search_query: String,
    category_separator: Option<String>,
    selection: Option<CellPosition>,
    editing: Option<EditingCell>,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn category_separator(&self) -> Option<&str> {
        self.category_separator.as_deref()
    }

    pub fn selection(&self) -> Option<CellPosition> {
        self.selection
    }

    pub fn editing(&self) -> Option<&EditingCell> {
        self.editing.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn has_rows(&self) -> bool {
        self.document.row_count() > 0
    }

    /// Document rows that pass the search filter, in document order.
    pub fn visible_row_indices(&self) -> Vec<usize> {
        (0..self.document.row_count())
            .filter(|row| self.document.row_contains(*row, &self.search_query))
            .collect()
    }

    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection == Some(CellPosition::new(row, col))
    }

    pub fn is_editing(&self, target: EditTarget) -> bool {
        self.editing
            .as_ref()
            .map(|edit| edit.target == target)
            .unwrap_or(false)
    }

    /// Applies one command. Returns whether anything changed. A rejected
    /// command leaves the state untouched.
    pub fn apply(&mut self, command: Command) -> Result<bool, CommandError> {
        match &command {
            Command::Load { file_name, content } => {
                tracing::debug!(file = %file_name, bytes = content.len(), "apply load")
            }
            other => tracing::debug!(command = ?other, "apply"),
        }
        let is_edit = command.is_edit();
        let result = self.dispatch(command);

        match &result {
            Err(err) => tracing::warn!(%err, "command rejected"),
            Ok(true) if is_edit => tracing::debug!(
                rows = self.document.row_count(),
                columns = self.document.column_count(),
                "document changed"
            ),
            Ok(_) => {}
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<bool, CommandError> {
        match command {
            Command::Load { file_name, content } => self.load(file_name, content),
            Command::ChangeDelimiter(delimiter) => self.change_delimiter(delimiter),
            Command::SetSearch(query) => Ok(self.set_search(query)),
            Command::SetCategorySeparator(separator) => {
                let separator = separator.filter(|sep| !sep.is_empty());
                let changed = self.category_separator != separator;
                self.category_separator = separator;
                Ok(changed)
            }

            Command::InsertRow { at } => self.insert_row(at),
            Command::DeleteRow { at } => self.delete_row(at),
            Command::InsertColumn { at, name } => {
                let name = name.unwrap_or_else(|| DEFAULT_COLUMN_NAME.to_string());
                self.insert_column(at, &name)
            }
            Command::DeleteColumn { at } => self.delete_column(at),
            Command::SetCell { row, col, value } => self.set_cell(row, col, value),
            Command::SetHeader { col, value } => self.set_header(col, value),
            Command::FindAndReplace {
                find,
                replacement,
                all,
            } => self.edit(|doc| Ok(doc.find_and_replace(&find, &replacement, all) > 0)),

            Command::InsertRowAbove => {
                let at = self.selected()?.row;
                self.insert_row(at)
            }
            Command::InsertRowBelow => {
                let at = self.selected()?.row + 1;
                self.insert_row(at)
            }
            Command::DeleteSelectedRow => {
                let at = self.selected()?.row;
                self.delete_row(at)
            }
            Command::InsertColumnBefore => {
                let at = self.selected()?.col;
                self.insert_column(at, DEFAULT_COLUMN_NAME)
            }
            Command::InsertColumnAfter => {
                let at = self.selected()?.col + 1;
                self.insert_column(at, DEFAULT_COLUMN_NAME)
            }
            Command::DeleteSelectedColumn => {
                let at = self.selected()?.col;
                self.delete_column(at)
            }

            Command::Select { row, col } => self.select(row, col),
            Command::ClearSelection => Ok(self.selection.take().is_some()),
            Command::Move(direction) => Ok(self.move_selection(direction)),

            Command::BeginEdit(target) => self.begin_edit(target),
            Command::BeginEditSelected => {
                let CellPosition { row, col } = self.selected()?;
                self.begin_edit(EditTarget::Cell { row, col })
            }
            Command::UpdateDraft(draft) => match self.editing.as_mut() {
                Some(edit) => {
                    edit.draft = draft;
                    Ok(true)
                }
                None => Err(EditError::NotEditing.into()),
            },
            Command::CommitEdit => self.commit_edit(),
            Command::CancelEdit => Ok(self.editing.take().is_some()),

            Command::Undo => Ok(self.undo()),
            Command::Redo => Ok(self.redo()),
        }
    }

    fn load(&mut self, file_name: String, content: String) -> Result<bool, CommandError> {
        let delimiter = delimiter::detect_delimiter(&content);
        let document = csv_codec::parse_document(&content, delimiter)?;
        tracing::info!(
            file = %file_name,
            delimiter = delimiter.code(),
            rows = document.row_count(),
            columns = document.column_count(),
            "loaded document"
        );

        *self = Self {
            document,
            raw_content: content,
            file_name: Some(file_name),
            delimiter,
            category_separator: self.category_separator.take(),
            ..Self::default()
        };
        Ok(true)
    }

    fn change_delimiter(&mut self, delimiter: Delimiter) -> Result<bool, CommandError> {
        if delimiter == self.delimiter {
            return Ok(false);
        }
        if self.raw_content.is_empty() {
            self.delimiter = delimiter;
            return Ok(true);
        }

        let document = csv_codec::parse_document(&self.raw_content, delimiter)?;
        self.push_undo_snapshot();
        self.document = document;
        self.delimiter = delimiter;
        self.selection = None;
        self.editing = None;
        Ok(true)
    }

    fn set_search(&mut self, query: String) -> bool {
        if self.search_query == query {
            return false;
        }
        self.search_query = query;
        if let Some(pos) = self.selection {
            if !self.document.row_contains(pos.row, &self.search_query) {
                self.selection = None;
            }
        }
        true
    }

    /// The selection follows its data when a row lands at or above it.
    fn insert_row(&mut self, at: usize) -> Result<bool, CommandError> {
        let changed = self.edit(|doc| doc.insert_row(at).map(|_| true))?;
        if let Some(pos) = self.selection {
            if pos.row >= at {
                self.selection = Some(CellPosition::new(pos.row + 1, pos.col));
            }
        }
        Ok(changed)
    }

    fn insert_column(&mut self, at: usize, name: &str) -> Result<bool, CommandError> {
        let changed = self.edit(|doc| doc.insert_column(at, name).map(|_| true))?;
        if let Some(pos) = self.selection {
            if pos.col >= at {
                self.selection = Some(CellPosition::new(pos.row, pos.col + 1));
            }
        }
        Ok(changed)
    }

    fn delete_row(&mut self, at: usize) -> Result<bool, CommandError> {
        let changed = self.edit(|doc| doc.delete_row(at).map(|_| true))?;
        if let Some(pos) = self.selection {
            self.selection = match pos.row {
                row if row == at => None,
                row if row > at => Some(CellPosition::new(row - 1, pos.col)),
                _ => Some(pos),
            };
        }
        Ok(changed)
    }

    fn delete_column(&mut self, at: usize) -> Result<bool, CommandError> {
        let changed = self.edit(|doc| doc.delete_column(at).map(|_| true))?;
        if let Some(pos) = self.selection {
            self.selection = match pos.col {
                col if col == at => None,
                col if col > at => Some(CellPosition::new(pos.row, col - 1)),
                _ => Some(pos),
            };
        }
        Ok(changed)
    }

    fn set_cell(&mut self, row: usize, col: usize, value: String) -> Result<bool, CommandError> {
        if self.document.cell(row, col) == Some(value.as_str()) {
            return Ok(false);
        }
        self.edit(|doc| doc.set_cell(row, col, &value).map(|_| true))
    }

    fn set_header(&mut self, col: usize, value: String) -> Result<bool, CommandError> {
        if self.document.header(col) == Some(value.as_str()) {
            return Ok(false);
        }
        self.edit(|doc| doc.set_header(col, &value).map(|_| true))
    }

    fn select(&mut self, row: usize, col: usize) -> Result<bool, CommandError> {
        if row >= self.document.row_count() {
            return Err(EditError::RowOutOfRange {
                index: row,
                len: self.document.row_count(),
            }
            .into());
        }
        if col >= self.document.column_count() {
            return Err(EditError::ColumnOutOfRange {
                index: col,
                len: self.document.column_count(),
            }
            .into());
        }
        let next = Some(CellPosition::new(row, col));
        let changed = self.selection != next;
        self.selection = next;
        Ok(changed)
    }

    /// Arrow-key movement over visible rows, clamped at the edges. Ignored
    /// while an edit is open or when nothing is selected.
    fn move_selection(&mut self, direction: Direction) -> bool {
        if self.editing.is_some() {
            return false;
        }
        let Some(pos) = self.selection else {
            return false;
        };
        let visible = self.visible_row_indices();
        let Some(view_row) = visible.iter().position(|row| *row == pos.row) else {
            return false;
        };
        let last_col = self.document.column_count().saturating_sub(1);

        let (view_row, col) = match direction {
            Direction::Up => (view_row.saturating_sub(1), pos.col),
            Direction::Down => ((view_row + 1).min(visible.len() - 1), pos.col),
            Direction::Left => (view_row, pos.col.saturating_sub(1)),
            Direction::Right => (view_row, (pos.col + 1).min(last_col)),
        };
        let next = CellPosition::new(visible[view_row], col);
        let changed = next != pos;
        self.selection = Some(next);
        changed
    }

    fn begin_edit(&mut self, target: EditTarget) -> Result<bool, CommandError> {
        let current = match target {
            EditTarget::Cell { row, col } => {
                let value = self.document.cell(row, col).ok_or_else(|| {
                    if row >= self.document.row_count() {
                        EditError::RowOutOfRange {
                            index: row,
                            len: self.document.row_count(),
                        }
                    } else {
                        EditError::ColumnOutOfRange {
                            index: col,
                            len: self.document.column_count(),
                        }
                    }
                })?;
                value.to_string()
            }
            EditTarget::Header { col } => self
                .document
                .header(col)
                .ok_or(EditError::ColumnOutOfRange {
                    index: col,
                    len: self.document.column_count(),
                })?
                .to_string(),
        };

        if let EditTarget::Cell { row, col } = target {
            self.selection = Some(CellPosition::new(row, col));
        }
        self.editing = Some(EditingCell {
            target,
            draft: current,
        });
        Ok(true)
    }

    fn commit_edit(&mut self) -> Result<bool, CommandError> {
        let Some(edit) = self.editing.take() else {
            return Err(EditError::NotEditing.into());
        };
        match edit.target {
            EditTarget::Cell { row, col } => self.set_cell(row, col, edit.draft),
            EditTarget::Header { col } => self.set_header(col, edit.draft),
        }
    }

    fn selected(&self) -> Result<CellPosition, EditError> {
        self.selection.ok_or(EditError::NothingSelected)
    }

    /// Runs a document mutation on a copy and commits it with an undo
    /// snapshot only when it succeeds and reports a change.
    fn edit<F>(&mut self, mutate: F) -> Result<bool, CommandError>
    where
        F: FnOnce(&mut Document) -> Result<bool, EditError>,
    {
        let mut next = self.document.clone();
        if !mutate(&mut next)? {
            return Ok(false);
        }
        self.push_undo_snapshot();
        self.document = next;
        Ok(true)
    }

    fn undo(&mut self) -> bool {
        if let Some(entry) = self.undo_stack.pop() {
            self.redo_stack.push(self.snapshot());
            self.restore(entry);
            true
        } else {
            false
        }
    }

    fn redo(&mut self) -> bool {
        if let Some(entry) = self.redo_stack.pop() {
            self.undo_stack.push(self.snapshot());
            self.restore(entry);
            true
        } else {
            false
        }
    }

    fn snapshot(&self) -> HistoryEntry {
        HistoryEntry {
            document: self.document.clone(),
            delimiter: self.delimiter,
        }
    }

    fn push_undo_snapshot(&mut self) {
        self.undo_stack.push(self.snapshot());
        self.redo_stack.clear();
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.document = entry.document;
        self.delimiter = entry.delimiter;
        self.editing = None;
        if let Some(pos) = self.selection {
            if pos.row >= self.document.row_count() || pos.col >= self.document.column_count() {
                self.selection = None;
            }
        }
    }
}
