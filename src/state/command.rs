use crate::state::delimiter::Delimiter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What an inline editor is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Cell { row: usize, col: usize },
    Header { col: usize },
}

/// Every state transition the UI can request. Row indices refer to the
/// document, not to the filtered view.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Load { file_name: String, content: String },
    ChangeDelimiter(Delimiter),
    SetSearch(String),
    SetCategorySeparator(Option<String>),

    InsertRow { at: usize },
    DeleteRow { at: usize },
    InsertColumn { at: usize, name: Option<String> },
    DeleteColumn { at: usize },
    SetCell { row: usize, col: usize, value: String },
    SetHeader { col: usize, value: String },
    FindAndReplace { find: String, replacement: String, all: bool },

    // Context menu, resolved against the selection.
    InsertRowAbove,
    InsertRowBelow,
    DeleteSelectedRow,
    InsertColumnBefore,
    InsertColumnAfter,
    DeleteSelectedColumn,

    Select { row: usize, col: usize },
    ClearSelection,
    Move(Direction),

    BeginEdit(EditTarget),
    BeginEditSelected,
    UpdateDraft(String),
    CommitEdit,
    CancelEdit,

    Undo,
    Redo,
}

impl Command {
    /// Commands that change the document and therefore land in history.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::ChangeDelimiter(_)
                | Self::InsertRow { .. }
                | Self::DeleteRow { .. }
                | Self::InsertColumn { .. }
                | Self::DeleteColumn { .. }
                | Self::SetCell { .. }
                | Self::SetHeader { .. }
                | Self::FindAndReplace { .. }
                | Self::InsertRowAbove
                | Self::InsertRowBelow
                | Self::DeleteSelectedRow
                | Self::InsertColumnBefore
                | Self::InsertColumnAfter
                | Self::DeleteSelectedColumn
                | Self::CommitEdit
        )
    }
}
