//! Drag-and-drop of note tiles onto folder entries.
//!
//! A tile puts its note id into the [`DragTransport`] when a drag starts. The
//! dock keeps its own hover highlight in [`DockDropState`] and, on drop, reads
//! the payload back and asks the [`Library`] to move the note.

use crate::error::Result;
use crate::models::{FolderId, NoteId};
use crate::store::Library;

/// Carries one opaque string between a drag source and a drop target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragTransport {
    payload: Option<String>,
}

impl DragTransport {
    #[must_use]
    pub const fn new() -> Self {
        Self { payload: None }
    }

    /// Start a drag carrying `payload`, replacing any earlier one
    pub fn begin(&mut self, payload: impl Into<String>) {
        self.payload = Some(payload.into());
    }

    /// Payload currently in flight
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Take the payload, leaving the transport empty
    pub fn take(&mut self) -> Option<String> {
        self.payload.take()
    }

    pub fn clear(&mut self) {
        self.payload = None;
    }
}

/// What a drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The note now lives in the target folder
    Moved(NoteId),
    /// The note was already in the target folder
    Unchanged(NoteId),
    /// Empty, malformed, or stale payload
    Ignored,
}

/// Hover highlight of the folder dock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockDropState {
    hovered: Option<FolderId>,
}

impl DockDropState {
    #[must_use]
    pub const fn new() -> Self {
        Self { hovered: None }
    }

    #[must_use]
    pub const fn hovered(&self) -> Option<&FolderId> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn is_hovered(&self, folder: &FolderId) -> bool {
        self.hovered.as_ref() == Some(folder)
    }

    /// A dragged item is over `folder`
    pub fn drag_over(&mut self, folder: &FolderId) {
        if !self.is_hovered(folder) {
            self.hovered = Some(folder.clone());
        }
    }

    /// The dragged item left `folder`; leaving a folder that is not the
    /// highlighted one keeps the current highlight.
    pub fn drag_leave(&mut self, folder: &FolderId) {
        if self.is_hovered(folder) {
            self.hovered = None;
        }
    }

    /// Drop onto `folder`. The highlight is cleared whatever happens.
    ///
    /// Only a library rejection (unknown target folder) is an error; bad
    /// payloads and notes that no longer exist are ignored.
    pub fn drop_note(
        &mut self,
        folder: &FolderId,
        transport: &mut DragTransport,
        library: &mut Library,
    ) -> Result<DropOutcome> {
        self.hovered = None;

        let Some(payload) = transport.take() else {
            return Ok(DropOutcome::Ignored);
        };
        let payload = payload.trim();
        if payload.is_empty() {
            return Ok(DropOutcome::Ignored);
        }
        let Ok(note_id) = payload.parse::<NoteId>() else {
            tracing::debug!("Ignoring drop with unrecognised payload {:?}", payload);
            return Ok(DropOutcome::Ignored);
        };
        let Some(note) = library.notes().get(&note_id) else {
            return Ok(DropOutcome::Ignored);
        };
        if &note.folder == folder {
            return Ok(DropOutcome::Unchanged(note_id));
        }

        library.move_note(&note_id, folder.clone())?;
        tracing::info!("Note {} moved to folder {}", note_id, folder);
        Ok(DropOutcome::Moved(note_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn folder(id: &str) -> FolderId {
        FolderId::from(id)
    }

    #[test]
    fn hover_tracks_latest_target() {
        let mut dock = DockDropState::new();
        dock.drag_over(&folder("home"));
        dock.drag_over(&folder("think"));
        assert!(dock.is_hovered(&folder("think")));

        dock.drag_leave(&folder("home"));
        assert!(dock.is_hovered(&folder("think")));

        dock.drag_leave(&folder("think"));
        assert_eq!(dock.hovered(), None);
    }

    #[test]
    fn drop_moves_note() {
        let mut library = Library::new();
        let id = library.create_note_in_default("t", "s", "x");
        let mut transport = DragTransport::new();
        let mut dock = DockDropState::new();

        transport.begin(id.as_str());
        dock.drag_over(&folder("think"));
        let outcome = dock
            .drop_note(&folder("think"), &mut transport, &mut library)
            .unwrap();

        assert_eq!(outcome, DropOutcome::Moved(id));
        assert_eq!(library.notes().get(&id).unwrap().folder, folder("think"));
        assert_eq!(dock.hovered(), None);
        assert_eq!(transport.peek(), None);
    }

    #[test]
    fn drop_on_own_folder_is_noop() {
        let mut library = Library::new();
        let id = library.create_note_in_default("t", "s", "x");
        let before = library.clone();
        let mut transport = DragTransport::new();
        transport.begin(id.as_str());

        let outcome = DockDropState::new()
            .drop_note(&folder("home"), &mut transport, &mut library)
            .unwrap();

        assert_eq!(outcome, DropOutcome::Unchanged(id));
        assert_eq!(library, before);
    }

    #[test]
    fn bad_payloads_are_ignored() {
        let mut library = Library::new();
        library.create_note_in_default("t", "s", "x");
        let before = library.clone();
        let mut dock = DockDropState::new();

        let stale = NoteId::new().as_str();
        for payload in ["", "   ", "definitely-not-an-id", stale.as_str()] {
            let mut transport = DragTransport::new();
            transport.begin(payload);
            dock.drag_over(&folder("think"));
            let outcome = dock
                .drop_note(&folder("think"), &mut transport, &mut library)
                .unwrap();
            assert_eq!(outcome, DropOutcome::Ignored);
            assert_eq!(dock.hovered(), None);
        }

        let outcome = dock
            .drop_note(&folder("think"), &mut DragTransport::new(), &mut library)
            .unwrap();
        assert_eq!(outcome, DropOutcome::Ignored);
        assert_eq!(library, before);
    }

    #[test]
    fn drop_on_unknown_folder_errors_and_clears_highlight() {
        let mut library = Library::new();
        let id = library.create_note_in_default("t", "s", "x");
        let mut transport = DragTransport::new();
        let mut dock = DockDropState::new();
        transport.begin(id.as_str());
        dock.drag_over(&folder("gone"));

        let err = dock
            .drop_note(&folder("gone"), &mut transport, &mut library)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFolder(_)));
        assert_eq!(dock.hovered(), None);
    }
}
