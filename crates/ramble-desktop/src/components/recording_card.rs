//! Recording / detail card modal

use dioxus::prelude::*;

use ramble_core::card::{CardPhase, Face};

use crate::state::AppState;

/// Modal showing the recording placeholder, then the note's two faces.
#[component]
pub fn RecordingCardModal() -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (phase, flip_target, flip_ms) = {
        let card = state.card.read();
        (card.phase(), card.flip_target(), card.timings().flip.as_millis())
    };

    let body = match phase {
        CardPhase::Closed => return rsx! {},
        CardPhase::Recording => rsx! {
            BusyFace { label: "Recording...", pulse: true }
        },
        CardPhase::Transcribing => rsx! {
            BusyFace { label: "Transcribing...", pulse: false }
        },
        CardPhase::Ready(Face::Front) => rsx! {
            FrontFace {}
        },
        CardPhase::Ready(Face::Back) => rsx! {
            BackFace {}
        },
    };

    // The card turns towards the face it is heading for; the content swaps
    // at the midpoint and is counter-rotated on the back so it reads normally.
    let heading_to = match phase {
        CardPhase::Ready(face) => flip_target.unwrap_or(face),
        _ => Face::Front,
    };
    let card_angle = if heading_to == Face::Back { 180 } else { 0 };
    let content_angle = if phase == CardPhase::Ready(Face::Back) {
        180
    } else {
        0
    };

    rsx! {
        div {
            class: "card-overlay",
            style: "
                position: fixed;
                inset: 0;
                z-index: 30;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
                perspective: 1200px;
            ",

            div {
                class: "recording-card",
                style: "
                    width: 460px;
                    min-height: 340px;
                    border-radius: 20px;
                    background: {colors.surface};
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.3);
                    transform: rotateY({card_angle}deg);
                    transition: transform {flip_ms}ms ease-in-out;
                ",
                div {
                    style: "
                        padding: 24px;
                        transform: rotateY({content_angle}deg);
                    ",
                    {body}
                }
            }
        }
    }
}

/// Recording or transcribing placeholder
#[component]
fn BusyFace(label: &'static str, pulse: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let dot = if pulse { colors.recording } else { colors.accent };
    let animation = if pulse {
        "pulse 1s ease-in-out infinite alternate"
    } else {
        "none"
    };

    rsx! {
        style { "@keyframes pulse {{ from {{ transform: scale(1); }} to {{ transform: scale(1.2); }} }}" }
        div {
            style: "display: flex; justify-content: flex-end;",
            CloseButton {
                enabled: true,
                onclick: move |_| {
                    state.card.write().close(&mut *state.timers.write());
                },
            }
        }
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 20px;
                min-height: 240px;
            ",
            div {
                style: "
                    width: 88px;
                    height: 88px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 36px;
                    background: {dot};
                    color: {colors.accent_text};
                    animation: {animation};
                ",
                "🎙"
            }
            p {
                style: "margin: 0; font-size: 16px; color: {colors.text_secondary};",
                "{label}"
            }
        }
    }
}

/// Title, editable summary, copy and save
#[component]
fn FrontFace() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (draft, editing, enabled, viewing, copied) = {
        let card = state.card.read();
        (
            card.draft().clone(),
            card.editing().map(str::to_owned),
            card.controls_enabled(),
            card.viewing().is_some(),
            card.copy_notice(),
        )
    };
    let save_label = if viewing { "Save changes" } else { "Save note" };
    let copy_label = if copied { "Copied!" } else { "Copy summary" };

    rsx! {
        CardHeader { caption: "Summary", flip_label: "Transcript ↻", enabled }

        input {
            r#type: "text",
            value: "{draft.title}",
            disabled: !enabled,
            placeholder: "Title",
            style: "
                width: 100%;
                box-sizing: border-box;
                margin: 12px 0;
                padding: 6px 0;
                border: none;
                border-bottom: 1px solid {colors.border};
                background: transparent;
                font-size: 20px;
                font-weight: 700;
                color: {colors.text_primary};
            ",
            oninput: move |evt: FormEvent| {
                state.card.write().set_title(evt.value());
            },
        }

        if let Some(buffer) = editing {
            textarea {
                value: "{buffer}",
                rows: "6",
                style: "
                    width: 100%;
                    box-sizing: border-box;
                    padding: 10px;
                    border-radius: 8px;
                    border: 1px solid {colors.border};
                    background: {colors.bg_app};
                    color: {colors.text_primary};
                    font-size: 14px;
                    resize: vertical;
                ",
                oninput: move |evt: FormEvent| {
                    state.card.write().update_edit(evt.value());
                },
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 8px;",
                CardButton {
                    label: "Cancel",
                    primary: false,
                    enabled,
                    onclick: move |_| {
                        state.card.write().cancel_edit();
                    },
                }
                CardButton {
                    label: "Done",
                    primary: true,
                    enabled,
                    onclick: move |_| {
                        state.card.write().commit_edit();
                    },
                }
            }
        } else {
            p {
                style: "
                    margin: 0;
                    min-height: 120px;
                    line-height: 1.5;
                    white-space: pre-wrap;
                    color: {colors.text_secondary};
                ",
                "{draft.summary}"
            }
            div {
                style: "display: flex; justify-content: space-between; gap: 8px; margin-top: 16px;",
                div {
                    style: "display: flex; gap: 8px;",
                    CardButton {
                        label: "Edit",
                        primary: false,
                        enabled,
                        onclick: move |_| {
                            state.card.write().begin_edit();
                        },
                    }
                    CardButton {
                        label: copy_label,
                        primary: false,
                        enabled,
                        onclick: move |_| {
                            state
                                .card
                                .write()
                                .copy_summary(&mut *state.clipboard.write(), &mut *state.timers.write());
                        },
                    }
                }
                CardButton {
                    label: save_label,
                    primary: true,
                    enabled,
                    onclick: move |_| {
                        let saved = state.card.write().save(&mut *state.library.write());
                        if let Err(e) = saved {
                            tracing::error!("Failed to save note: {}", e);
                        }
                    },
                }
            }
        }
    }
}

/// Read-only transcript
#[component]
fn BackFace() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (transcript, enabled, copied) = {
        let card = state.card.read();
        (
            card.draft().transcript.clone(),
            card.controls_enabled(),
            card.copy_notice(),
        )
    };
    let copy_label = if copied { "Copied!" } else { "Copy transcript" };

    rsx! {
        CardHeader { caption: "Transcript", flip_label: "Summary ↻", enabled }

        div {
            style: "
                margin: 16px 0;
                max-height: 260px;
                overflow-y: auto;
                line-height: 1.6;
                white-space: pre-wrap;
                color: {colors.text_secondary};
            ",
            "{transcript}"
        }

        CardButton {
            label: copy_label,
            primary: false,
            enabled,
            onclick: move |_| {
                state
                    .card
                    .write()
                    .copy_transcript(&mut *state.clipboard.write(), &mut *state.timers.write());
            },
        }
    }
}

#[component]
fn CardHeader(caption: &'static str, flip_label: &'static str, enabled: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center;",
            span {
                style: "
                    font-size: 12px;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.06em;
                    color: {colors.text_muted};
                ",
                "{caption}"
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                CardButton {
                    label: flip_label,
                    primary: false,
                    enabled,
                    onclick: move |_| {
                        state.card.write().flip(&mut *state.timers.write());
                    },
                }
                CloseButton {
                    enabled,
                    onclick: move |_| {
                        state.card.write().close(&mut *state.timers.write());
                    },
                }
            }
        }
    }
}

#[component]
fn CloseButton(enabled: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        button {
            title: "Close",
            disabled: !enabled,
            style: "
                border: none;
                background: transparent;
                font-size: 18px;
                cursor: pointer;
                color: {colors.text_secondary};
            ",
            onclick: move |evt| onclick.call(evt),
            "✕"
        }
    }
}

#[component]
fn CardButton(
    label: &'static str,
    primary: bool,
    enabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let (bg, fg, border) = if primary {
        (colors.accent, colors.accent_text, colors.accent)
    } else {
        ("transparent", colors.text_primary, colors.border)
    };
    let opacity = if enabled { "1" } else { "0.5" };

    rsx! {
        button {
            disabled: !enabled,
            style: "
                padding: 7px 14px;
                border-radius: 8px;
                border: 1px solid {border};
                background: {bg};
                color: {fg};
                opacity: {opacity};
                cursor: pointer;
                font-size: 13px;
            ",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
