//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::FolderId;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// A saved voice note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Short label shown on the tile and the card
    pub title: String,
    /// Editable body shown on the front of the card
    pub summary: String,
    /// Full transcript shown on the back of the card
    pub transcript: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Folder the note lives in
    pub folder: FolderId,
}

impl Note {
    /// Create a new note stamped with the current time
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        transcript: impl Into<String>,
        folder: FolderId,
    ) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            summary: summary.into(),
            transcript: transcript.into(),
            created_at: chrono::Utc::now().timestamp_millis(),
            folder,
        }
    }

    /// Apply the fields present in `patch`.
    ///
    /// Returns `true` when at least one field actually changed.
    pub fn apply(&mut self, patch: NotePatch) -> bool {
        let mut changed = false;
        if let Some(title) = patch.title {
            changed |= self.title != title;
            self.title = title;
        }
        if let Some(summary) = patch.summary {
            changed |= self.summary != summary;
            self.summary = summary;
        }
        if let Some(folder) = patch.folder {
            changed |= self.folder != folder;
            self.folder = folder;
        }
        changed
    }
}

/// Partial update of a note's mutable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub folder: Option<FolderId>,
}

impl NotePatch {
    /// Patch that only changes the folder
    #[must_use]
    pub fn folder(folder: FolderId) -> Self {
        Self {
            folder: Some(folder),
            ..Self::default()
        }
    }

    /// Patch that replaces title and summary
    #[must_use]
    pub fn text(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            summary: Some(summary.into()),
            folder: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_unique() {
        let id1 = NoteId::new();
        let id2 = NoteId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_note_id_parse() {
        let id = NoteId::new();
        let parsed: NoteId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("".parse::<NoteId>().is_err());
        assert!("not-a-note".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_new() {
        let note = Note::new("Title", "Summary", "Transcript", FolderId::from("home"));
        assert_eq!(note.title, "Title");
        assert_eq!(note.folder.as_str(), "home");
        assert!(note.created_at > 0);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut note = Note::new("Title", "Summary", "Transcript", FolderId::from("home"));
        assert!(!note.apply(NotePatch::default()));
        assert!(!note.apply(NotePatch::folder(FolderId::from("home"))));
        assert!(note.apply(NotePatch::text("New", "Summary")));
        assert_eq!(note.title, "New");
        assert_eq!(note.transcript, "Transcript");
    }
}
