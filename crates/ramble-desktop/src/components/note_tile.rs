//! One note in the gallery grid

use dioxus::prelude::*;

use ramble_core::format::{short_date, short_date_time};
use ramble_core::models::Note;
use ramble_core::tile::{move_targets, NoteTileState};

use crate::state::AppState;

/// Compact note tile: click to open, drag onto a folder to move, or use the
/// menu to copy, move, or delete.
#[component]
pub fn NoteTile(note: Note) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut tile = use_signal(NoteTileState::new);
    let flags = tile();

    let date = short_date(note.created_at);
    let recorded_at = short_date_time(note.created_at);
    let folders = state.library.read().folders().list().to_vec();
    let targets: Vec<_> = move_targets(&note, &folders).cloned().collect();

    let opacity = if flags.dragging { "0.5" } else { "1" };

    let open_note = note.clone();
    let drag_note = note.clone();
    let copy_note = note.clone();
    let delete_note = note.clone();

    rsx! {
        div {
            class: "note-tile",
            title: "{recorded_at}",
            draggable: "true",
            style: "
                position: relative;
                padding: 14px 16px;
                border-radius: 12px;
                border: 1px solid {colors.border};
                background: {colors.surface};
                cursor: pointer;
                opacity: {opacity};
                transition: opacity 0.15s;
            ",
            onclick: move |_| {
                if tile.peek().menu_open {
                    tile.write().close_menus();
                    return;
                }
                state.card.write().open_note(&open_note);
            },
            ondragstart: move |_: Event<DragData>| {
                tile.write().drag_start(&drag_note, &mut *state.drag.write());
            },
            ondragend: move |_: Event<DragData>| {
                tile.write().drag_end();
                state.drag.write().clear();
            },

            div {
                style: "display: flex; justify-content: space-between; align-items: start; gap: 8px;",
                div {
                    style: "
                        font-weight: 600;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                        color: {colors.text_primary};
                    ",
                    "{note.title}"
                }
                button {
                    class: "note-menu-button",
                    title: "Note actions",
                    style: "
                        border: none;
                        background: transparent;
                        cursor: pointer;
                        color: {colors.text_secondary};
                        padding: 0 4px;
                    ",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        tile.write().toggle_menu();
                    },
                    "⋯"
                }
            }

            p {
                style: "
                    margin: 8px 0;
                    font-size: 13px;
                    color: {colors.text_secondary};
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                ",
                "{note.summary}"
            }

            div {
                style: "font-size: 12px; color: {colors.text_muted};",
                "{date}"
            }

            if flags.menu_open {
                div {
                    class: "note-menu",
                    style: "
                        position: absolute;
                        top: 36px;
                        right: 12px;
                        z-index: 10;
                        min-width: 160px;
                        padding: 4px;
                        border-radius: 8px;
                        border: 1px solid {colors.border};
                        background: {colors.surface};
                        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.15);
                    ",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),

                    MenuItem {
                        label: "Copy",
                        onclick: move |_| {
                            tile.write().copy(&copy_note, &mut *state.clipboard.write());
                        },
                    }
                    MenuItem {
                        label: "Move to ▸",
                        onclick: move |_| tile.write().toggle_move_menu(),
                    }
                    if flags.move_menu_open {
                        for folder in targets {
                            {
                                let move_note = note.clone();
                                let target = folder.id.clone();
                                let label = format!("    {} {}", folder.glyph.symbol(), folder.name);
                                rsx! {
                                    MenuItem {
                                        key: "{folder.id}",
                                        label,
                                        onclick: move |_| {
                                            let moved = tile.write().move_to(
                                                &move_note,
                                                target.clone(),
                                                &mut *state.library.write(),
                                            );
                                            if let Err(e) = moved {
                                                tracing::error!("Failed to move note: {}", e);
                                            }
                                        },
                                    }
                                }
                            }
                        }
                    }
                    MenuItem {
                        label: "Delete",
                        danger: true,
                        onclick: move |_| {
                            tile.write().delete(&delete_note, &mut *state.library.write());
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn MenuItem(
    label: String,
    #[props(default)] danger: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let color = if danger {
        colors.danger
    } else {
        colors.text_primary
    };

    rsx! {
        div {
            style: "
                padding: 6px 10px;
                border-radius: 6px;
                cursor: pointer;
                white-space: pre;
                color: {color};
            ",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
