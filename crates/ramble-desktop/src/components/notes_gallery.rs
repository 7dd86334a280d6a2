//! Note gallery for the selected folder

use dioxus::prelude::*;

use ramble_core::gallery::EMPTY_FOLDER_HINT;

use super::{FolderDock, MicButton, NoteTile};
use crate::state::AppState;

#[component]
pub fn NotesGallery() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let notes = state.visible_notes();
    let (heading, empty_message) = {
        let library = state.library.read();
        let gallery = state.gallery.read();
        (gallery.heading(&library), gallery.empty_message(&library))
    };

    rsx! {
        div {
            class: "notes-gallery",
            style: "flex: 1; display: flex; flex-direction: column; padding: 24px 32px 120px;",

            header {
                style: "
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 20px;
                ",
                h1 {
                    style: "font-size: 24px; font-weight: 700; margin: 0;",
                    "{heading}"
                }
                MicButton { large: false }
            }

            if notes.is_empty() {
                div {
                    class: "empty-folder",
                    style: "
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: {colors.text_secondary};
                    ",
                    p { style: "font-size: 16px; margin: 0 0 6px 0;", "{empty_message}" }
                    p {
                        style: "font-size: 13px; margin: 0; color: {colors.text_muted};",
                        "{EMPTY_FOLDER_HINT}"
                    }
                }
            } else {
                div {
                    class: "note-grid",
                    style: "
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                        gap: 16px;
                    ",
                    for note in notes {
                        NoteTile { key: "{note.id}", note }
                    }
                }
            }

            FolderDock {}
        }
    }
}
