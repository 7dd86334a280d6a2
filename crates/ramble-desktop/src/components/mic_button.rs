//! Mic button that starts a recording session

use dioxus::prelude::*;

use crate::state::AppState;

/// Round mic button on the landing screen, or a compact "Record" pill in
/// the gallery header.
#[component]
pub fn MicButton(large: bool) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let busy = state.card.read().is_open();

    let on_click = move |_: MouseEvent| {
        state.card.write().start_recording(&mut *state.timers.write());
    };

    if large {
        rsx! {
            button {
                class: "mic-button",
                disabled: busy,
                title: "Start recording",
                style: "
                    width: 96px;
                    height: 96px;
                    border-radius: 50%;
                    border: none;
                    font-size: 40px;
                    cursor: pointer;
                    background: {colors.recording};
                    color: {colors.accent_text};
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.18);
                ",
                onclick: on_click,
                "🎙"
            }
        }
    } else {
        rsx! {
            button {
                class: "record-button",
                disabled: busy,
                style: "
                    padding: 8px 16px;
                    border-radius: 999px;
                    border: none;
                    cursor: pointer;
                    font-weight: 600;
                    background: {colors.recording};
                    color: {colors.accent_text};
                ",
                onclick: on_click,
                "🎙 Record"
            }
        }
    }
}
