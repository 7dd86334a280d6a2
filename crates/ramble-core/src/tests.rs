use std::time::Duration;

use pretty_assertions::assert_eq;

use crate::card::{CardPhase, Face, RecordingCard};
use crate::clipboard::MemoryClipboard;
use crate::dialog::CreateFolderDialog;
use crate::drag::{DockDropState, DragTransport, DropOutcome};
use crate::gallery::Gallery;
use crate::models::{FolderGlyph, FolderId, NoteId};
use crate::scheduler::TimerQueue;
use crate::store::Library;
use crate::tile::NoteTileState;

fn folder(id: &str) -> FolderId {
    FolderId::from(id)
}

fn advance(card: &mut RecordingCard, scheduler: &mut TimerQueue, ms: u64) {
    scheduler.advance(Duration::from_millis(ms), |token, queue| {
        card.fire(token, queue);
    });
}

fn record_note(library: &mut Library, scheduler: &mut TimerQueue) -> NoteId {
    let mut card = RecordingCard::default();
    card.start_recording(scheduler);
    advance(&mut card, scheduler, 5000);
    card.save(library).unwrap().unwrap()
}

fn counts(library: &Library) -> Vec<(String, usize)> {
    library
        .folders()
        .list()
        .iter()
        .map(|f| (f.id.to_string(), library.notes().count_in(&f.id)))
        .collect()
}

fn every_note_has_a_folder(library: &Library) -> bool {
    library
        .notes()
        .iter()
        .all(|note| library.folders().contains(&note.folder))
}

#[test]
fn recording_session_saves_exactly_one_note() {
    let mut library = Library::new();
    let mut scheduler = TimerQueue::new();
    let mut card = RecordingCard::default();

    card.start_recording(&mut scheduler);
    assert_eq!(card.phase(), CardPhase::Recording);

    advance(&mut card, &mut scheduler, 3000);
    assert_eq!(card.phase(), CardPhase::Transcribing);

    advance(&mut card, &mut scheduler, 2000);
    assert_eq!(card.phase(), CardPhase::Ready(Face::Front));
    let draft = card.draft().clone();
    assert!(!draft.title.is_empty());
    assert!(!draft.summary.is_empty());
    assert!(!draft.transcript.is_empty());

    let id = card.save(&mut library).unwrap().unwrap();
    assert_eq!(card.phase(), CardPhase::Closed);
    assert_eq!(library.notes().len(), 1);
    assert_eq!(library.notes().get(&id).unwrap().summary, draft.summary);
}

#[test]
fn create_bumps_only_target_folder_count() {
    let mut library = Library::new();
    let mut scheduler = TimerQueue::new();
    let before = counts(&library);

    record_note(&mut library, &mut scheduler);

    let after = counts(&library);
    for ((id, old), (_, new)) in before.iter().zip(after.iter()) {
        let expected = if id == "home" { old + 1 } else { *old };
        assert_eq!(*new, expected, "count for {id}");
    }
}

#[test]
fn drag_note_from_home_to_think() {
    let mut library = Library::new();
    let mut scheduler = TimerQueue::new();
    let n1 = record_note(&mut library, &mut scheduler);
    let note = library.notes().get(&n1).cloned().unwrap();
    let mut transport = DragTransport::new();
    let mut tile = NoteTileState::new();
    let mut dock = DockDropState::new();

    tile.drag_start(&note, &mut transport);
    dock.drag_over(&folder("think"));
    let outcome = dock
        .drop_note(&folder("think"), &mut transport, &mut library)
        .unwrap();
    tile.drag_end();

    assert_eq!(outcome, DropOutcome::Moved(n1));
    assert_eq!(library.notes().get(&n1).unwrap().folder, folder("think"));
    assert!(library.notes().list(&folder("think")).any(|n| n.id == n1));
    assert!(!library.notes().list(&folder("home")).any(|n| n.id == n1));

    let moved = library.notes().get(&n1).cloned().unwrap();
    tile.drag_start(&moved, &mut transport);
    let outcome = dock
        .drop_note(&folder("think"), &mut transport, &mut library)
        .unwrap();
    assert_eq!(outcome, DropOutcome::Unchanged(n1));
    assert!(every_note_has_a_folder(&library));
}

#[test]
fn delete_hides_note_from_every_folder() {
    let mut library = Library::new();
    let mut scheduler = TimerQueue::new();
    let keep = record_note(&mut library, &mut scheduler);
    let gone = record_note(&mut library, &mut scheduler);
    library.move_note(&keep, folder("ycp")).unwrap();

    let note = library.notes().get(&gone).cloned().unwrap();
    NoteTileState::new().delete(&note, &mut library);

    for f in library.folders().list() {
        assert!(library.notes().list(&f.id).all(|n| n.id != gone));
    }
    let snapshot = library.clone();
    assert!(library.delete_note(&gone).is_none());
    assert_eq!(library, snapshot);
}

#[test]
fn folder_creation_through_dialog() {
    let mut library = Library::new();
    let mut dialog = CreateFolderDialog::new();
    dialog.open();

    dialog.set_name("  ");
    assert_eq!(dialog.submit(&mut library).unwrap(), None);
    assert_eq!(library.folders().list().len(), 4);

    dialog.set_name("Deep Work");
    dialog.select_glyph(FolderGlyph::Heart);
    let created = dialog.submit(&mut library).unwrap().unwrap();
    assert_eq!(created.id, folder("deep-work"));
    assert_eq!(library.folders().list().last(), Some(&created));
}

#[test]
fn gallery_follows_moves_into_new_folder() {
    let mut library = Library::new();
    let mut scheduler = TimerQueue::new();
    let id = record_note(&mut library, &mut scheduler);
    let deep = library
        .create_folder("Deep Work", FolderGlyph::Brain)
        .unwrap();
    let mut gallery = Gallery::new();
    let note = library.notes().get(&id).cloned().unwrap();

    let mut tile = NoteTileState::new();
    tile.toggle_menu();
    tile.toggle_move_menu();
    tile.move_to(&note, deep.id.clone(), &mut library).unwrap();

    assert!(gallery.visible_notes(&library).is_empty());
    gallery.select(deep.id);
    assert_eq!(gallery.heading(&library), "Deep Work");
    assert_eq!(gallery.visible_notes(&library).len(), 1);
}

#[test]
fn flip_round_trip_keeps_fields() {
    let mut scheduler = TimerQueue::new();
    let mut card = RecordingCard::default();
    let mut clipboard = MemoryClipboard::new();
    card.start_recording(&mut scheduler);
    advance(&mut card, &mut scheduler, 5000);
    let before = card.draft().clone();

    card.flip(&mut scheduler);
    advance(&mut card, &mut scheduler, 100);
    assert!(!card.copy_summary(&mut clipboard, &mut scheduler));
    advance(&mut card, &mut scheduler, 600);
    assert_eq!(card.phase(), CardPhase::Ready(Face::Back));

    card.flip(&mut scheduler);
    advance(&mut card, &mut scheduler, 700);
    assert_eq!(card.phase(), CardPhase::Ready(Face::Front));
    assert_eq!(card.draft(), &before);
    assert!(clipboard.history().is_empty());
}

#[test]
fn close_during_transcription_never_delivers_a_draft() {
    let mut library = Library::new();
    let mut scheduler = TimerQueue::new();
    let mut card = RecordingCard::default();

    card.start_recording(&mut scheduler);
    advance(&mut card, &mut scheduler, 3500);
    card.close(&mut scheduler);
    advance(&mut card, &mut scheduler, 10_000);

    assert_eq!(card.phase(), CardPhase::Closed);
    assert!(card.draft().title.is_empty());
    assert_eq!(card.save(&mut library).unwrap(), None);
    assert!(library.notes().is_empty());
}
