//! Recording / detail card.
//!
//! One modal covers the whole life of a note draft:
//!
//! ```text
//! Closed -> Recording -> Transcribing -> Ready(Front) <-> Ready(Back)
//!    ^                                        |
//!    +------------- close / save -------------+
//! ```
//!
//! Recording and transcription are timed simulations. A flip is a two-phase
//! timed transition: the face swaps at the midpoint and every action is
//! inert until the transition completes. Each session gets a new generation
//! number, so a timer that outlives its session is dropped on arrival even
//! if the host could not cancel it.

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::models::{CardTimings, Note, NoteId, NotePatch};
use crate::scheduler::{CardTimer, Scheduler, TimerHandle, TimerToken};
use crate::store::Library;
use crate::transcriber::{Draft, ScriptedTranscriber, Transcriber};

/// Visible side of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Face {
    /// Title and editable summary
    #[default]
    Front,
    /// Read-only transcript
    Back,
}

impl Face {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Where the card is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    #[default]
    Closed,
    Recording,
    Transcribing,
    Ready(Face),
}

/// What saving the draft does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftOrigin {
    /// Fresh recording: save creates a note
    Recording,
    /// Opened from the gallery: save updates the note
    Saved(NoteId),
}

/// State of the recording / detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingCard<T = ScriptedTranscriber> {
    phase: CardPhase,
    draft: Draft,
    origin: DraftOrigin,
    edit_buffer: Option<String>,
    flip_to: Option<Face>,
    copy_notice: bool,
    generation: u64,
    pending: Vec<(TimerHandle, CardTimer)>,
    timings: CardTimings,
    transcriber: T,
}

impl Default for RecordingCard {
    fn default() -> Self {
        Self::new(CardTimings::default(), ScriptedTranscriber::default())
    }
}

impl<T: Transcriber> RecordingCard<T> {
    #[must_use]
    pub const fn new(timings: CardTimings, transcriber: T) -> Self {
        Self {
            phase: CardPhase::Closed,
            draft: Draft {
                title: String::new(),
                summary: String::new(),
                transcript: String::new(),
            },
            origin: DraftOrigin::Recording,
            edit_buffer: None,
            flip_to: None,
            copy_notice: false,
            generation: 0,
            pending: Vec::new(),
            timings,
            transcriber,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> CardPhase {
        self.phase
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn timings(&self) -> CardTimings {
        self.timings
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.phase, CardPhase::Closed)
    }

    /// Recording or transcribing
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.phase, CardPhase::Recording | CardPhase::Transcribing)
    }

    /// A flip transition is running
    #[must_use]
    pub const fn is_flipping(&self) -> bool {
        self.flip_to.is_some()
    }

    /// Face a running flip will end on
    #[must_use]
    pub const fn flip_target(&self) -> Option<Face> {
        self.flip_to
    }

    /// Whether buttons and inputs respond
    #[must_use]
    pub const fn controls_enabled(&self) -> bool {
        matches!(self.phase, CardPhase::Ready(_)) && self.flip_to.is_none()
    }

    /// A copy just landed on the clipboard and the visible face should say so
    #[must_use]
    pub const fn copy_notice(&self) -> bool {
        self.copy_notice
    }

    /// Summary edit buffer, when an edit is in progress
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.edit_buffer.as_deref()
    }

    /// Note being viewed, when the card was opened from the gallery
    #[must_use]
    pub const fn viewing(&self) -> Option<NoteId> {
        match self.origin {
            DraftOrigin::Saved(id) => Some(id),
            DraftOrigin::Recording => None,
        }
    }

    /// Press the mic: begin a simulated recording.
    pub fn start_recording(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.is_open() {
            return false;
        }
        self.begin_session(DraftOrigin::Recording, Draft::default());
        self.phase = CardPhase::Recording;
        self.schedule(scheduler, self.timings.recording, CardTimer::RecordingElapsed);
        tracing::info!("Started recording...");
        true
    }

    /// Show a saved note on the front face.
    pub fn open_note(&mut self, note: &Note) -> bool {
        if self.is_open() {
            return false;
        }
        let draft = Draft::new(&note.title, &note.summary, &note.transcript);
        self.begin_session(DraftOrigin::Saved(note.id), draft);
        self.phase = CardPhase::Ready(Face::Front);
        true
    }

    /// Handle a timer delivered by the scheduler.
    ///
    /// Returns `false` when the token is stale or does not apply to the
    /// current phase.
    pub fn fire(&mut self, token: TimerToken, scheduler: &mut impl Scheduler) -> bool {
        if token.generation != self.generation {
            tracing::debug!("Dropping stale {:?} timer", token.timer);
            return false;
        }
        self.pending.retain(|(_, timer)| *timer != token.timer);

        match (token.timer, self.phase) {
            (CardTimer::RecordingElapsed, CardPhase::Recording) => {
                self.phase = CardPhase::Transcribing;
                self.schedule(
                    scheduler,
                    self.timings.transcription,
                    CardTimer::TranscriptionElapsed,
                );
                tracing::info!("Recording finished, starting transcription...");
            }
            (CardTimer::TranscriptionElapsed, CardPhase::Transcribing) => {
                self.draft = self.transcriber.transcribe();
                self.phase = CardPhase::Ready(Face::Front);
                tracing::info!("Transcription completed!");
            }
            (CardTimer::FlipMidpoint, CardPhase::Ready(_)) => match self.flip_to {
                Some(target) => self.phase = CardPhase::Ready(target),
                None => return false,
            },
            (CardTimer::FlipComplete, CardPhase::Ready(_)) if self.flip_to.is_some() => {
                self.flip_to = None;
            }
            (CardTimer::CopyNoticeElapsed, CardPhase::Ready(_)) => {
                self.copy_notice = false;
            }
            _ => return false,
        }
        true
    }

    /// Turn the card over.
    pub fn flip(&mut self, scheduler: &mut impl Scheduler) -> bool {
        let CardPhase::Ready(face) = self.phase else {
            return false;
        };
        if !self.controls_enabled() {
            return false;
        }
        self.flip_to = Some(face.flipped());
        self.edit_buffer = None;
        self.copy_notice = false;
        self.cancel(scheduler, CardTimer::CopyNoticeElapsed);
        self.schedule(
            scheduler,
            self.timings.flip_midpoint(),
            CardTimer::FlipMidpoint,
        );
        self.schedule(scheduler, self.timings.flip, CardTimer::FlipComplete);
        true
    }

    /// Dismiss the card, discarding the draft and any pending timers.
    ///
    /// Allowed while recording or transcribing; inert during a flip.
    pub fn close(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if !self.is_open() || self.is_flipping() {
            return false;
        }
        for (handle, _) in self.pending.drain(..) {
            scheduler.cancel(handle);
        }
        self.reset();
        true
    }

    /// Commit the draft and close.
    ///
    /// A fresh recording becomes a note in the default folder; a note opened
    /// from the gallery gets its title and summary replaced. Returns the id of
    /// the saved note, or `None` when nothing was saved (card not ready, or the
    /// viewed note was deleted meanwhile).
    pub fn save(&mut self, library: &mut Library) -> Result<Option<NoteId>> {
        if !self.controls_enabled() {
            return Ok(None);
        }
        let draft = std::mem::take(&mut self.draft);
        let saved = match self.origin {
            DraftOrigin::Recording => Some(library.create_note_in_default(
                draft.title,
                draft.summary,
                draft.transcript,
            )),
            DraftOrigin::Saved(id) => library
                .update_note(&id, NotePatch::text(draft.title, draft.summary))?
                .then_some(id),
        };
        self.reset();
        if let Some(id) = saved {
            tracing::info!("Note {} saved successfully!", id);
        }
        Ok(saved)
    }

    /// Edit the title (front face input)
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        if !self.on_front() {
            return false;
        }
        self.draft.title = title.into();
        true
    }

    /// Start editing the summary in a scratch buffer
    pub fn begin_edit(&mut self) -> bool {
        if !self.on_front() {
            return false;
        }
        self.edit_buffer = Some(self.draft.summary.clone());
        true
    }

    /// Replace the scratch buffer contents
    pub fn update_edit(&mut self, text: impl Into<String>) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        match self.edit_buffer.as_mut() {
            Some(buffer) => {
                *buffer = text.into();
                true
            }
            None => false,
        }
    }

    /// Copy the scratch buffer into the summary
    pub fn commit_edit(&mut self) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        match self.edit_buffer.take() {
            Some(buffer) => {
                self.draft.summary = buffer;
                true
            }
            None => false,
        }
    }

    /// Drop the scratch buffer, keeping the summary as it was
    pub fn cancel_edit(&mut self) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        self.edit_buffer.take().is_some()
    }

    pub fn copy_summary(
        &mut self,
        clipboard: &mut impl Clipboard,
        scheduler: &mut impl Scheduler,
    ) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        clipboard.copy_to_clipboard(&self.draft.summary);
        self.show_copy_notice(scheduler);
        true
    }

    pub fn copy_transcript(
        &mut self,
        clipboard: &mut impl Clipboard,
        scheduler: &mut impl Scheduler,
    ) -> bool {
        if !self.controls_enabled() {
            return false;
        }
        clipboard.copy_to_clipboard(&self.draft.transcript);
        self.show_copy_notice(scheduler);
        true
    }

    /// Show the confirmation, restarting its timer on a repeated copy
    fn show_copy_notice(&mut self, scheduler: &mut impl Scheduler) {
        tracing::debug!("Copied to clipboard!");
        self.cancel(scheduler, CardTimer::CopyNoticeElapsed);
        self.copy_notice = true;
        self.schedule(
            scheduler,
            self.timings.copy_notice,
            CardTimer::CopyNoticeElapsed,
        );
    }

    fn on_front(&self) -> bool {
        self.controls_enabled() && self.phase == CardPhase::Ready(Face::Front)
    }

    fn begin_session(&mut self, origin: DraftOrigin, draft: Draft) {
        self.generation += 1;
        self.origin = origin;
        self.draft = draft;
        self.edit_buffer = None;
        self.flip_to = None;
        self.copy_notice = false;
        self.pending.clear();
    }

    fn reset(&mut self) {
        self.generation += 1;
        self.phase = CardPhase::Closed;
        self.origin = DraftOrigin::Recording;
        self.draft = Draft::default();
        self.edit_buffer = None;
        self.flip_to = None;
        self.copy_notice = false;
        self.pending.clear();
    }

    fn schedule(
        &mut self,
        scheduler: &mut impl Scheduler,
        delay: std::time::Duration,
        timer: CardTimer,
    ) {
        let token = TimerToken {
            timer,
            generation: self.generation,
        };
        let handle = scheduler.after(delay, token);
        self.pending.push((handle, timer));
    }

    fn cancel(&mut self, scheduler: &mut impl Scheduler, timer: CardTimer) {
        self.pending.retain(|&(handle, pending)| {
            if pending == timer {
                scheduler.cancel(handle);
                false
            } else {
                true
            }
        });
    }
}
