use dioxus::prelude::*;

use crate::state::command::Command;
use crate::state::table_state::TableState;
use crate::ui::actions;

/// Screen position of an open context menu. The target cell is the selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuAnchor {
    pub x: f64,
    pub y: f64,
}

fn row_items() -> [(&'static str, &'static str, Command); 3] {
    [
        ("menu-row-above", "Add Row Above", Command::InsertRowAbove),
        ("menu-row-below", "Add Row Below", Command::InsertRowBelow),
        ("menu-row-delete", "Delete Row", Command::DeleteSelectedRow),
    ]
}

fn column_items() -> [(&'static str, &'static str, Command); 3] {
    [
        ("menu-col-before", "Add Column Before", Command::InsertColumnBefore),
        ("menu-col-after", "Add Column After", Command::InsertColumnAfter),
        ("menu-col-delete", "Delete Column", Command::DeleteSelectedColumn),
    ]
}

#[component]
pub fn ContextMenu(
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
    menu: Signal<Option<MenuAnchor>>,
) -> Element {
    let Some(anchor) = *menu.read() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "context-menu",
            id: "context-menu",
            style: "top: {anchor.y}px; left: {anchor.x}px;",
            onclick: move |evt| evt.stop_propagation(),
            for (element_id, label, command) in row_items() {
                MenuItem { element_id, label, command, data, error_message, menu }
            }
            div { class: "context-menu-divider" }
            for (element_id, label, command) in column_items() {
                MenuItem { element_id, label, command, data, error_message, menu }
            }
        }
    }
}

#[component]
fn MenuItem(
    element_id: &'static str,
    label: &'static str,
    command: Command,
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
    mut menu: Signal<Option<MenuAnchor>>,
) -> Element {
    rsx! {
        div {
            class: "context-menu-item",
            id: "{element_id}",
            onclick: move |_| {
                actions::dispatch(data, error_message, command.clone());
                menu.set(None);
            },
            "{label}"
        }
    }
}
