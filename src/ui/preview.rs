use dioxus::prelude::*;

const PREVIEW_HEIGHT: f64 = 220.0;
const CURSOR_OFFSET: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState {
    pub url: String,
    pub x: f64,
    pub y: f64,
}

impl PreviewState {
    /// Places the preview beside the cursor, flipping above it near the
    /// bottom of the window.
    pub fn near_cursor(url: String, x: f64, y: f64, window_height: f64) -> Self {
        let y = if y + PREVIEW_HEIGHT > window_height {
            y - PREVIEW_HEIGHT + CURSOR_OFFSET
        } else {
            y + CURSOR_OFFSET
        };
        Self {
            url,
            x: x + CURSOR_OFFSET,
            y,
        }
    }
}

#[component]
pub fn ImagePreview(preview: Signal<Option<PreviewState>>) -> Element {
    let Some(state) = preview.read().clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "image-preview",
            style: "left: {state.x}px; top: {state.y}px;",
            img { src: "{state.url}", alt: "preview" }
        }
    }
}
