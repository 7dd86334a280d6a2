//! Modal for creating a folder

use dioxus::prelude::*;

use ramble_core::models::FolderGlyph;

use crate::state::AppState;

#[component]
pub fn CreateFolderDialogView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut error = use_signal(|| None::<String>);

    let dialog = state.folder_dialog.read().clone();
    let can_submit = dialog.can_submit();
    let submit_opacity = if can_submit { "1" } else { "0.5" };

    let mut submit = move || {
        let created = state
            .folder_dialog
            .write()
            .submit(&mut *state.library.write());
        match created {
            Ok(Some(folder)) => {
                tracing::info!("Created folder {}", folder.id);
                error.set(None);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Folder not created: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let mut close = move || {
        state.folder_dialog.write().close();
        error.set(None);
    };

    rsx! {
        div {
            class: "dialog-overlay",
            style: "
                position: fixed;
                inset: 0;
                z-index: 40;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
            ",
            onclick: move |_| close(),

            div {
                class: "create-folder-dialog",
                style: "
                    width: 380px;
                    padding: 24px;
                    border-radius: 16px;
                    background: {colors.surface};
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.25);
                ",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                h2 { style: "margin: 0 0 16px 0; font-size: 18px;", "New Folder" }

                input {
                    r#type: "text",
                    placeholder: "Folder name",
                    autofocus: true,
                    value: "{dialog.name}",
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        padding: 10px 12px;
                        border-radius: 8px;
                        border: 1px solid {colors.border};
                        background: {colors.bg_app};
                        color: {colors.text_primary};
                        font-size: 14px;
                    ",
                    oninput: move |evt: FormEvent| {
                        state.folder_dialog.write().set_name(evt.value());
                        error.set(None);
                    },
                    onkeydown: move |evt: KeyboardEvent| match evt.key() {
                        Key::Enter => submit(),
                        Key::Escape => close(),
                        _ => {}
                    },
                }

                if let Some(message) = error() {
                    p {
                        style: "margin: 8px 0 0 0; font-size: 12px; color: {colors.danger};",
                        "{message}"
                    }
                }

                div {
                    class: "glyph-palette",
                    style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px; margin: 16px 0;",
                    for glyph in FolderGlyph::PALETTE {
                        GlyphChoice {
                            key: "{glyph:?}",
                            glyph,
                            selected: glyph == dialog.glyph,
                        }
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button {
                        style: "
                            padding: 8px 14px;
                            border-radius: 8px;
                            border: 1px solid {colors.border};
                            background: transparent;
                            color: {colors.text_primary};
                            cursor: pointer;
                        ",
                        onclick: move |_| close(),
                        "Cancel"
                    }
                    button {
                        disabled: !can_submit,
                        style: "
                            padding: 8px 14px;
                            border-radius: 8px;
                            border: none;
                            background: {colors.accent};
                            color: {colors.accent_text};
                            opacity: {submit_opacity};
                            cursor: pointer;
                        ",
                        onclick: move |_| submit(),
                        "Create"
                    }
                }
            }
        }
    }
}

#[component]
fn GlyphChoice(glyph: FolderGlyph, selected: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let border = if selected {
        colors.accent
    } else {
        colors.border
    };
    let symbol = glyph.symbol();
    let label = glyph.label();

    rsx! {
        button {
            title: "{label}",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 2px;
                padding: 8px 4px;
                border-radius: 8px;
                border: 2px solid {border};
                background: transparent;
                color: {colors.text_secondary};
                cursor: pointer;
            ",
            onclick: move |_| state.folder_dialog.write().select_glyph(glyph),
            span { style: "font-size: 18px;", "{symbol}" }
            span { style: "font-size: 11px;", "{label}" }
        }
    }
}
