use dioxus::prelude::*;

use crate::state::command::Command;
use crate::state::delimiter::Delimiter;
use crate::state::table_state::TableState;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
    mut show_find_replace: Signal<bool>,
) -> Element {
    let mut save_success = use_signal(|| false);

    let snapshot = data.read();
    let has_rows = snapshot.has_rows();
    let can_undo = snapshot.can_undo();
    let can_redo = snapshot.can_redo();
    let delimiter_value = snapshot.delimiter().code();
    let search_query_value = snapshot.search_query().to_string();
    let category_value = snapshot.category_separator().unwrap_or("").to_string();
    let file_name = snapshot.file_name().map(str::to_string);
    drop(snapshot);

    rsx! {
        nav { class: "toolbar",
            div { class: "toolbar-group",
                if let Some(name) = file_name.as_ref() {
                    span { class: "file-name-pill", id: "label-file-name", "{name}" }
                }
            }

            // File group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_file(data, error_message).await;
                        });
                    },
                    "\u{1F4C2} Open"
                }
                if has_rows {
                    button {
                        class: "toolbar-btn",
                        id: "btn-save",
                        onclick: move |_| {
                            spawn(async move {
                                if actions::save_file(data, error_message).await {
                                    save_success.set(true);
                                    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                                    save_success.set(false);
                                }
                            });
                        },
                        "\u{1F4BE} Save"
                    }
                }
                if *save_success.read() {
                    span { class: "save-success", "\u{2714} Saved" }
                }
            }
            div { class: "toolbar-separator" }

            // Delimiter group
            div { class: "toolbar-group",
                span { class: "toolbar-label", "Field Separator" }
                select {
                    class: "toolbar-select",
                    id: "select-delimiter",
                    value: "{delimiter_value}",
                    onchange: move |evt| {
                        if let Some(delimiter) = Delimiter::from_code(&evt.value()) {
                            actions::dispatch(data, error_message, Command::ChangeDelimiter(delimiter));
                        }
                    },
                    for delimiter in Delimiter::all().iter().copied() {
                        option { value: "{delimiter.code()}", "{delimiter.label()}" }
                    }
                }
            }
            div { class: "toolbar-separator" }

            // Edit group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-undo",
                    disabled: !can_undo,
                    onclick: move |_| {
                        actions::dispatch(data, error_message, Command::Undo);
                    },
                    "\u{21A9} Undo"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-redo",
                    disabled: !can_redo,
                    onclick: move |_| {
                        actions::dispatch(data, error_message, Command::Redo);
                    },
                    "\u{21AA} Redo"
                }
                if has_rows {
                    button {
                        class: "toolbar-btn",
                        id: "btn-find-replace",
                        onclick: move |_| show_find_replace.set(true),
                        "\u{21C4} Find and Replace"
                    }
                }
            }

            if has_rows {
                div { class: "toolbar-separator" }

                // Search group
                div { class: "toolbar-group",
                    input {
                        class: "toolbar-input",
                        id: "input-search-query",
                        placeholder: "Search...",
                        value: "{search_query_value}",
                        oninput: move |evt| {
                            actions::dispatch(data, error_message, Command::SetSearch(evt.value()));
                        }
                    }
                    input {
                        class: "toolbar-input toolbar-input-sm",
                        id: "input-category-separator",
                        placeholder: "Category separator",
                        value: "{category_value}",
                        oninput: move |evt| {
                            let value = evt.value();
                            let separator = if value.is_empty() { None } else { Some(value) };
                            actions::dispatch(data, error_message, Command::SetCategorySeparator(separator));
                        }
                    }
                }
            }

            // Info area (right-aligned)
            div { class: "toolbar-info",
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", id: "label-error", "{err}" }
                }
            }
        }
    }
}
