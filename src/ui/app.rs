use dioxus::html::HasFileData;
use dioxus::prelude::*;
use std::path::PathBuf;

use crate::state::table_state::TableState;
use crate::ui::actions;
use crate::ui::context_menu::{ContextMenu, MenuAnchor};
use crate::ui::find_replace::FindReplaceModal;
use crate::ui::preview::{ImagePreview, PreviewState};
use crate::ui::table::Table;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

/// Path opened at startup when set.
pub const OPEN_ENV_VAR: &str = "CSVSHEET_OPEN";

#[component]
pub fn App() -> Element {
    let data = use_signal(TableState::new);
    let error_message = use_signal::<Option<String>>(|| None);
    let mut show_find_replace = use_signal(|| false);
    let mut menu = use_signal::<Option<MenuAnchor>>(|| None);
    let preview = use_signal::<Option<PreviewState>>(|| None);
    let mut dragging = use_signal(|| false);

    use_effect(move || {
        if let Ok(path) = std::env::var(OPEN_ENV_VAR) {
            actions::load_path(data, error_message, &PathBuf::from(path));
        }
    });

    let app_class = if *dragging.read() { "app dragging" } else { "app" };
    let file_name = data.read().file_name().map(str::to_string);

    rsx! {
        document::Stylesheet { href: STYLES }
        div {
            class: "{app_class}",
            onclick: move |_| {
                if menu.read().is_some() {
                    menu.set(None);
                }
            },
            ondragover: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(false);
            },
            ondrop: move |evt: DragEvent| {
                evt.prevent_default();
                dragging.set(false);
                let Some(engine) = evt.files() else {
                    return;
                };
                if let Some(first) = engine.files().into_iter().next() {
                    actions::load_path(data, error_message, &PathBuf::from(first));
                }
            },
            Toolbar { data, error_message, show_find_replace }
            Table { data, error_message, menu, preview }
            ImagePreview { preview }
            ContextMenu { data, error_message, menu }
            if *show_find_replace.read() {
                FindReplaceModal {
                    data,
                    error_message,
                    on_close: move |_| show_find_replace.set(false),
                }
            }
            if let Some(name) = file_name {
                footer { class: "footer", div { "{name}" } }
            }
        }
    }
}
