//! Main application component

use std::time::{Duration, Instant};

use dioxus::prelude::*;

use ramble_core::card::RecordingCard;
use ramble_core::dialog::CreateFolderDialog;
use ramble_core::drag::DragTransport;
use ramble_core::gallery::Gallery;
use ramble_core::models::Settings;
use ramble_core::scheduler::TimerQueue;
use ramble_core::transcriber::ScriptedTranscriber;
use ramble_core::Library;

use crate::services::SystemClipboard;
use crate::state::AppState;
use crate::theme::resolve_theme;
use crate::views::Home;

/// How often pending card timers are checked
const TICK: Duration = Duration::from_millis(16);

/// Root application component
#[component]
pub fn App() -> Element {
    let initial = use_context::<Settings>();

    let library = use_signal(Library::new);
    let mut card = use_signal(|| {
        RecordingCard::new(initial.card_timings(), ScriptedTranscriber::default())
    });
    let mut timers = use_signal(TimerQueue::new);
    let drag = use_signal(DragTransport::new);
    let gallery = use_signal(Gallery::new);
    let folder_dialog = use_signal(CreateFolderDialog::new);
    let clipboard = use_signal(SystemClipboard::new);
    let theme = use_signal(|| resolve_theme(initial.theme));

    // Drive card timers from wall-clock time
    use_future(move || async move {
        let mut last = Instant::now();
        loop {
            tokio::time::sleep(TICK).await;
            let now = Instant::now();
            let elapsed = now - last;
            last = now;

            if timers.peek().pending() == 0 {
                continue;
            }
            timers.write().advance(elapsed, |token, queue| {
                card.write().fire(token, queue);
            });
        }
    });

    use_context_provider(|| AppState {
        library,
        card,
        timers,
        drag,
        gallery,
        folder_dialog,
        clipboard,
        theme,
    });

    let current_theme = theme();
    let colors = current_theme.palette();

    rsx! {
        div {
            class: "app-container",
            "data-theme": current_theme.attr(),
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_app};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
