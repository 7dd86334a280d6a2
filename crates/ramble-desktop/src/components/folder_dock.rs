//! Folder dock pinned to the bottom of the gallery

use dioxus::prelude::*;

use ramble_core::drag::{DockDropState, DropOutcome};
use ramble_core::models::{Folder, FolderId};

use crate::state::AppState;

/// Folders as selectable destinations and drop targets, plus a button to
/// create a new one.
#[component]
pub fn FolderDock() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let dock = use_signal(DockDropState::new);

    let folders = state.folders_with_counts();
    let selected = state.gallery.read().selected().clone();

    rsx! {
        nav {
            class: "folder-dock",
            style: "
                position: fixed;
                left: 50%;
                bottom: 24px;
                transform: translateX(-50%);
                display: flex;
                gap: 6px;
                padding: 8px;
                border-radius: 16px;
                border: 1px solid {colors.border};
                background: {colors.surface};
                box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
            ",

            for (folder, count) in folders {
                {
                    let is_selected = folder.id == selected;
                    let is_hovered = dock.read().is_hovered(&folder.id);
                    rsx! {
                        DockEntry {
                            key: "{folder.id}",
                            folder,
                            count,
                            is_selected,
                            is_hovered,
                            dock,
                        }
                    }
                }
            }

            button {
                class: "new-folder-button",
                title: "New folder",
                style: "
                    width: 44px;
                    border-radius: 10px;
                    border: 1px dashed {colors.border};
                    background: transparent;
                    cursor: pointer;
                    font-size: 20px;
                    color: {colors.text_secondary};
                ",
                onclick: move |_| state.folder_dialog.write().open(),
                "+"
            }
        }
    }
}

#[component]
fn DockEntry(
    folder: Folder,
    count: usize,
    is_selected: bool,
    is_hovered: bool,
    dock: Signal<DockDropState>,
) -> Element {
    let mut state = use_context::<AppState>();
    let mut dock = dock;
    let colors = (state.theme)().palette();
    let symbol = folder.glyph.symbol();

    let bg = if is_hovered {
        colors.drop_highlight
    } else if is_selected {
        colors.surface_muted
    } else {
        "transparent"
    };
    let border = if is_hovered {
        colors.accent
    } else {
        "transparent"
    };

    let select_id = folder.id.clone();
    let over_id = folder.id.clone();
    let leave_id = folder.id.clone();
    let drop_id = folder.id.clone();

    rsx! {
        div {
            class: "dock-entry",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                min-width: 64px;
                padding: 6px 10px;
                border-radius: 10px;
                border: 2px solid {border};
                background: {bg};
                cursor: pointer;
                transition: background 0.15s;
            ",
            onclick: move |_| state.gallery.write().select(select_id.clone()),
            ondragover: move |evt: Event<DragData>| {
                evt.prevent_default();
                if !dock.peek().is_hovered(&over_id) {
                    dock.write().drag_over(&over_id);
                }
            },
            ondragleave: move |_: Event<DragData>| {
                dock.write().drag_leave(&leave_id);
            },
            ondrop: move |evt: Event<DragData>| {
                evt.prevent_default();
                drop_on(&mut dock, &mut state, &drop_id);
            },

            span { style: "font-size: 20px;", "{symbol}" }
            span {
                style: "font-size: 12px; font-weight: 500; color: {colors.text_primary};",
                "{folder.name}"
            }
            span {
                style: "font-size: 11px; color: {colors.text_muted};",
                "{count}"
            }
        }
    }
}

fn drop_on(dock: &mut Signal<DockDropState>, state: &mut AppState, folder: &FolderId) {
    let outcome = dock.write().drop_note(
        folder,
        &mut *state.drag.write(),
        &mut *state.library.write(),
    );
    match outcome {
        Ok(DropOutcome::Ignored) => tracing::debug!("Ignored drop on {}", folder),
        Ok(DropOutcome::Moved(_) | DropOutcome::Unchanged(_)) => {}
        Err(e) => tracing::error!("Failed to move note to {}: {}", folder, e),
    }
}
