use dioxus::prelude::{Key, *};

use crate::state::command::Command;
use crate::state::table_state::TableState;
use crate::ui::actions;

#[component]
pub fn FindReplaceModal(
    data: Signal<TableState>,
    error_message: Signal<Option<String>>,
    on_close: EventHandler<()>,
) -> Element {
    let mut find = use_signal(String::new);
    let mut replacement = use_signal(String::new);

    let run = move |all: bool| {
        let command = Command::FindAndReplace {
            find: find.read().clone(),
            replacement: replacement.read().clone(),
            all,
        };
        actions::dispatch(data, error_message, command);
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                id: "find-replace-modal",
                onclick: move |evt| evt.stop_propagation(),
                h2 { "Find and Replace" }
                div { class: "form-group",
                    label { r#for: "find", "Find" }
                    input {
                        id: "find",
                        r#type: "text",
                        autofocus: true,
                        value: "{find.read()}",
                        oninput: move |evt| find.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "replace", "Replace with" }
                    input {
                        id: "replace",
                        r#type: "text",
                        value: "{replacement.read()}",
                        oninput: move |evt| replacement.set(evt.value()),
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-primary",
                        id: "btn-replace",
                        onclick: move |_| run(false),
                        "Replace"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "btn-replace-all",
                        onclick: move |_| {
                            run(true);
                            on_close.call(());
                        },
                        "Replace All"
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "btn-close-modal",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
