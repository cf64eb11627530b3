use dioxus::prelude::{Key, *};

use crate::state::command::{Command, Direction, EditTarget};
use crate::state::data_model;
use crate::state::table_state::TableState;
use crate::ui::actions;
use crate::ui::context_menu::MenuAnchor;
use crate::ui::preview::PreviewState;

const FALLBACK_WINDOW_HEIGHT: f64 = 800.0;

#[component]
pub fn Table(
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
    menu: Signal<Option<MenuAnchor>>,
    preview: Signal<Option<PreviewState>>,
) -> Element {
    let snapshot = data.read().clone();
    let document = snapshot.document();

    if !snapshot.has_rows() {
        return rsx! {
            div { class: "empty-state", id: "empty-message",
                p { "No data loaded." }
                p { "Drop a CSV file here or click \"Open\"." }
            }
        };
    }

    let visible_rows = snapshot.visible_row_indices();
    let headers: Vec<(usize, String)> = document.headers().iter().cloned().enumerate().collect();

    rsx! {
        div {
            class: "table-container",
            id: "table-container",
            tabindex: "-1",
            onkeydown: move |evt: KeyboardEvent| {
                let command = match evt.key() {
                    Key::ArrowUp => Command::Move(Direction::Up),
                    Key::ArrowDown => Command::Move(Direction::Down),
                    Key::ArrowLeft => Command::Move(Direction::Left),
                    Key::ArrowRight => Command::Move(Direction::Right),
                    Key::Enter => Command::BeginEditSelected,
                    _ => return,
                };
                if data.read().editing().is_some() {
                    return;
                }
                if data.read().selection().is_none() {
                    return;
                }
                evt.prevent_default();
                actions::dispatch(data, error_message, command);
            },
            table { class: "csv-table",
                thead {
                    tr {
                        th { class: "row-header" }
                        for (col, header) in headers {
                            HeaderCell { col, header, data, error_message }
                        }
                    }
                }
                tbody {
                    for (display_index, row) in visible_rows.into_iter().enumerate() {
                        TableRow {
                            display_index,
                            row,
                            cells: document.rows()[row].clone(),
                            data,
                            error_message,
                            menu,
                            preview,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderCell(
    col: usize,
    header: String,
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
) -> Element {
    let target = EditTarget::Header { col };
    let draft = data
        .read()
        .editing()
        .filter(|edit| edit.target == target)
        .map(|edit| edit.draft.clone());

    if let Some(draft) = draft {
        return rsx! {
            th { class: "editing-cell",
                EditInput { input_id: format!("header-input-{col}"), draft, data, error_message }
            }
        };
    }

    rsx! {
        th {
            id: format!("col-{col}"),
            ondoubleclick: move |_| {
                actions::dispatch(data, error_message, Command::BeginEdit(target));
            },
            "{data_model::display_header(&header)}"
        }
    }
}

#[component]
fn TableRow(
    display_index: usize,
    row: usize,
    cells: Vec<String>,
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
    menu: Signal<Option<MenuAnchor>>,
    preview: Signal<Option<PreviewState>>,
) -> Element {
    let row_class = if display_index % 2 == 0 { "even" } else { "odd" };

    rsx! {
        tr { class: "{row_class}", id: format!("row-{row}"),
            td { class: "row-header", "{display_index + 1}" }
            for (col, value) in cells.into_iter().enumerate() {
                GridCell { row, col, value, data, error_message, menu, preview }
            }
        }
    }
}

#[component]
fn GridCell(
    row: usize,
    col: usize,
    value: String,
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
    mut menu: Signal<Option<MenuAnchor>>,
    preview: Signal<Option<PreviewState>>,
) -> Element {
    let target = EditTarget::Cell { row, col };
    let (draft, selected, category_separator) = {
        let state = data.read();
        let draft = state
            .editing()
            .filter(|edit| edit.target == target)
            .map(|edit| edit.draft.clone());
        (
            draft,
            state.is_selected(row, col),
            state.category_separator().map(str::to_string),
        )
    };

    if let Some(draft) = draft {
        return rsx! {
            td { class: "editing-cell",
                EditInput { input_id: format!("cell-input-{row}-{col}"), draft, data, error_message }
            }
        };
    }

    let class = if selected { "cell selected" } else { "cell" };

    rsx! {
        td {
            class: "{class}",
            id: format!("cell-{row}-{col}"),
            onclick: move |_| {
                actions::dispatch(data, error_message, Command::Select { row, col });
            },
            ondoubleclick: move |_| {
                actions::dispatch(data, error_message, Command::BeginEdit(target));
            },
            oncontextmenu: move |evt: MouseEvent| {
                evt.prevent_default();
                let point = evt.client_coordinates();
                if actions::dispatch(data, error_message, Command::Select { row, col })
                    || data.read().is_selected(row, col)
                {
                    menu.set(Some(MenuAnchor { x: point.x, y: point.y }));
                }
            },
            CellContent { value, category_separator, preview }
        }
    }
}

#[component]
fn CellContent(
    value: String,
    category_separator: Option<String>,
    mut preview: Signal<Option<PreviewState>>,
) -> Element {
    if data_model::looks_like_image_url(&value) {
        let url = value.clone();
        return rsx! {
            a {
                class: "image-link",
                href: "{value}",
                target: "_blank",
                rel: "noopener noreferrer",
                onmouseenter: move |evt: MouseEvent| {
                    let point = evt.client_coordinates();
                    preview.set(Some(PreviewState::near_cursor(
                        url.clone(),
                        point.x,
                        point.y,
                        FALLBACK_WINDOW_HEIGHT,
                    )));
                },
                onmouseleave: move |_| preview.set(None),
                "{value}"
            }
        };
    }

    if let Some(separator) = category_separator {
        let parts: Vec<String> = data_model::category_parts(&value, &separator)
            .into_iter()
            .map(str::to_string)
            .collect();
        if parts.len() > 1 {
            return rsx! {
                div { class: "category-list",
                    for part in parts {
                        span { class: "category-chip", "{part}" }
                    }
                }
            };
        }
    }

    rsx! {
        div { "{value}" }
    }
}

#[component]
fn EditInput(
    input_id: String,
    draft: String,
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
) -> Element {
    rsx! {
        input {
            class: "cell-input",
            id: "{input_id}",
            value: "{draft}",
            autofocus: true,
            oninput: move |evt| {
                actions::dispatch(data, error_message, Command::UpdateDraft(evt.value()));
            },
            onkeydown: move |evt: KeyboardEvent| {
                match evt.key() {
                    Key::Enter => {
                        actions::dispatch(data, error_message, Command::CommitEdit);
                    }
                    Key::Escape => {
                        actions::dispatch(data, error_message, Command::CancelEdit);
                    }
                    _ => {}
                }
                evt.stop_propagation();
            },
            onblur: move |_| {
                if data.read().editing().is_some() {
                    actions::dispatch(data, error_message, Command::CommitEdit);
                }
            },
        }
    }
}
