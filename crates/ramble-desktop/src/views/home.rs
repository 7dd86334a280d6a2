//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{CreateFolderDialogView, MicButton, NotesGallery, RecordingCardModal};
use crate::state::AppState;

/// Landing screen until the first note exists, gallery afterwards. The
/// card and the folder dialog float above either one.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let card_open = state.card.read().is_open();
    let dialog_open = state.folder_dialog.read().open;

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; min-height: 100vh;",

            if state.has_notes() {
                NotesGallery {}
            } else {
                Landing {}
            }

            if card_open {
                RecordingCardModal {}
            }

            if dialog_open {
                CreateFolderDialogView {}
            }
        }
    }
}

#[component]
fn Landing() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "landing",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
            ",
            h1 {
                style: "font-size: 32px; font-weight: 700; margin: 0; color: {colors.text_primary};",
                "Voice Notes"
            }
            p {
                style: "margin: 0 0 24px 0; color: {colors.text_secondary};",
                "Tap the mic to start recording your thoughts"
            }
            MicButton { large: true }
        }
    }
}
