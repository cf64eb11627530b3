use dioxus::prelude::*;
use std::path::{Path, PathBuf};

use crate::io::csv_io;
use crate::state::command::Command;
use crate::state::table_state::TableState;

/// Applies a command and mirrors a rejection into the toolbar message.
pub fn dispatch(
    mut data: Signal<TableState>,
    mut error_message: Signal<Option<String>>,
    command: Command,
) -> bool {
    match data.with_mut(|state| state.apply(command)) {
        Ok(changed) => {
            if error_message.peek().is_some() {
                error_message.set(None);
            }
            changed
        }
        Err(err) => {
            error_message.set(Some(err.to_string()));
            false
        }
    }
}

pub fn load_path(data: Signal<TableState>, mut error_message: Signal<Option<String>>, path: &Path) {
    match csv_io::read_csv_file(path) {
        Ok(content) => {
            dispatch(
                data,
                error_message,
                Command::Load {
                    file_name: csv_io::file_name_of(path),
                    content,
                },
            );
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not open file");
            error_message.set(Some(err.to_string()));
        }
    }
}

pub async fn open_file(data: Signal<TableState>, error_message: Signal<Option<String>>) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter("CSV", &["csv"])
        .pick_file()
        .await;

    if let Some(handle) = task {
        load_path(data, error_message, handle.path());
    }
}

/// Asks for a target path and writes the sheet with the current delimiter.
pub async fn save_file(data: Signal<TableState>, mut error_message: Signal<Option<String>>) -> bool {
    let suggested = csv_io::export_file_name(data.read().file_name());
    let task = rfd::AsyncFileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(suggested)
        .save_file()
        .await;

    let Some(handle) = task else {
        return false;
    };
    let path: PathBuf = handle.path().to_path_buf();

    let result = {
        let state = data.read();
        csv_io::save_csv(&path, state.document(), state.delimiter())
    };
    match result {
        Ok(()) => {
            error_message.set(None);
            true
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not save file");
            error_message.set(Some(err.to_string()));
            false
        }
    }
}
