//! # Toggle
//!
//! Adds a book to a collection, or removes it if it is already there.
//!
//! 1. **Resolve** the record: result set first, then each collection in
//!    configured order. An id found nowhere is a no-op (a stale reference
//!    from a list that has since changed).
//! 2. **Flip** membership in the target collection only. Removal is by id;
//!    addition appends at the end.
//! 3. **Persist** the whole collection. A failed save is reported as a
//!    warning and the in-memory change stands.
//! 4. **Signal** the views to redraw: the results view, the target
//!    collection, and every collection now holding the book (they all show
//!    badges for it).
//!
//! Removing and re-adding moves a book to the end, so a toggle pair restores
//! membership but not necessarily position when other ids changed in between.

use super::membership::{flags, memberships};
use super::{CmdMessage, CmdResult, ToggleOutcome};
use crate::error::Result;
use crate::model::CollectionName;
use crate::state::{AppState, Section};
use crate::store::CollectionStore;
use crate::view::render_card;
use tracing::{debug, warn};

pub fn run<S: CollectionStore>(
    store: &mut S,
    state: &mut AppState,
    collection: &CollectionName,
    id: &str,
) -> Result<CmdResult> {
    // Unknown collections fail before anything else happens.
    state.collection(collection)?;

    let Some(book) = state.resolve(id).cloned() else {
        debug!(%collection, id, "toggle on unknown id ignored");
        let mut result = CmdResult::default();
        result.toggle = Some(ToggleOutcome::Unresolved);
        result.add_message(CmdMessage::info(format!("No loaded book has id {}", id)));
        return Ok(result);
    };

    let target = state.collection_mut(collection)?;
    let outcome = if target.remove(id).is_some() {
        ToggleOutcome::Removed
    } else {
        target.append(book.clone());
        ToggleOutcome::Added
    };
    let snapshot = target.books().to_vec();

    let mut result = CmdResult::default();
    let label = collection.display_name();
    result.add_message(match outcome {
        ToggleOutcome::Removed => {
            CmdMessage::success(format!("Removed \"{}\" from {}", book.title, label))
        }
        _ => CmdMessage::success(format!("Added \"{}\" to {}", book.title, label)),
    });

    if let Err(e) = store.save_collection(collection, &snapshot) {
        warn!(%collection, error = %e, "could not persist collection");
        result.add_message(CmdMessage::warning(format!(
            "Could not save {}: {}. The change is kept for this session.",
            label, e
        )));
    }

    let mut refresh = vec![Section::Results, Section::Collection(collection.clone())];
    for name in memberships(state, id) {
        let view = Section::Collection(name);
        if !refresh.contains(&view) {
            refresh.push(view);
        }
    }

    let card = render_card(&book, &flags(state, id), state.section());
    result.toggle = Some(outcome);
    Ok(result.with_cards(vec![card]).with_refresh(refresh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::membership::is_member;
    use crate::model::BookRecord;
    use crate::store::memory::fixtures::{sample_books, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn favorites() -> CollectionName {
        CollectionName::favorites()
    }

    fn reading() -> CollectionName {
        CollectionName::reading_list()
    }

    fn setup(results: Vec<BookRecord>) -> (InMemoryStore, AppState) {
        let store = InMemoryStore::new();
        let mut state = AppState::load(&store, &[favorites(), reading()]);
        state.replace_results(results);
        (store, state)
    }

    fn ids(state: &AppState, name: &CollectionName) -> Vec<String> {
        state
            .collection(name)
            .unwrap()
            .books()
            .iter()
            .map(|b| b.id.clone())
            .collect()
    }

    #[test]
    fn add_then_remove_round_trip() {
        let book = BookRecord::new("abc123").with_title("Found");
        let (mut store, mut state) = setup(vec![book.clone()]);

        let added = run(&mut store, &mut state, &favorites(), "abc123").unwrap();
        assert_eq!(added.toggle, Some(ToggleOutcome::Added));
        assert_eq!(state.collection(&favorites()).unwrap().books(), &[book]);

        let removed = run(&mut store, &mut state, &favorites(), "abc123").unwrap();
        assert_eq!(removed.toggle, Some(ToggleOutcome::Removed));
        assert!(state.collection(&favorites()).unwrap().is_empty());
    }

    #[test]
    fn added_book_is_member_exactly_once() {
        let (mut store, mut state) = setup(sample_books(3));
        run(&mut store, &mut state, &favorites(), "b2").unwrap();

        assert!(is_member(&state, &favorites(), "b2").unwrap());
        assert_eq!(ids(&state, &favorites()), vec!["b2"]);
    }

    #[test]
    fn double_toggle_restores_sequence() {
        let (mut store, mut state) = setup(sample_books(4));
        for id in ["b1", "b2", "b3"] {
            run(&mut store, &mut state, &favorites(), id).unwrap();
        }
        let before = ids(&state, &favorites());

        run(&mut store, &mut state, &favorites(), "b4").unwrap();
        run(&mut store, &mut state, &favorites(), "b4").unwrap();
        assert_eq!(ids(&state, &favorites()), before);

        run(&mut store, &mut state, &favorites(), "b3").unwrap();
        run(&mut store, &mut state, &favorites(), "b3").unwrap();
        assert_eq!(ids(&state, &favorites()), before);
    }

    #[test]
    fn readding_after_other_changes_moves_to_end() {
        let (mut store, mut state) = setup(sample_books(3));
        for id in ["b1", "b2"] {
            run(&mut store, &mut state, &favorites(), id).unwrap();
        }
        run(&mut store, &mut state, &favorites(), "b1").unwrap();
        run(&mut store, &mut state, &favorites(), "b3").unwrap();
        run(&mut store, &mut state, &favorites(), "b1").unwrap();

        assert_eq!(ids(&state, &favorites()), vec!["b2", "b3", "b1"]);
    }

    #[test]
    fn collections_are_independent() {
        let (mut store, mut state) = setup(sample_books(2));
        run(&mut store, &mut state, &favorites(), "b1").unwrap();
        run(&mut store, &mut state, &reading(), "b2").unwrap();
        run(&mut store, &mut state, &reading(), "b1").unwrap();
        run(&mut store, &mut state, &reading(), "b1").unwrap();

        assert!(is_member(&state, &favorites(), "b1").unwrap());
        assert!(!is_member(&state, &favorites(), "b2").unwrap());
        assert_eq!(ids(&state, &reading()), vec!["b2"]);
    }

    #[test]
    fn unresolvable_id_is_a_no_op() {
        let (mut store, mut state) = setup(sample_books(1));
        let result = run(&mut store, &mut state, &favorites(), "ghost").unwrap();

        assert_eq!(result.toggle, Some(ToggleOutcome::Unresolved));
        assert!(result.refresh.is_empty());
        assert!(state.collection(&favorites()).unwrap().is_empty());
        assert!(store.backend().raw("favorites").is_none());
    }

    #[test]
    fn resolves_from_other_collection_when_not_in_results() {
        let stored = vec![BookRecord::new("old").with_title("Kept")];
        let mut store = StoreFixture::new()
            .with_collection("favorites", &stored)
            .store;
        let mut state = AppState::load(&store, &[favorites(), reading()]);

        run(&mut store, &mut state, &reading(), "old").unwrap();
        assert_eq!(state.collection(&reading()).unwrap().books(), stored.as_slice());
    }

    #[test]
    fn removal_works_for_ids_only_in_target_collection() {
        let stored = sample_books(2);
        let mut store = StoreFixture::new().with_collection("readingList", &stored).store;
        let mut state = AppState::load(&store, &[favorites(), reading()]);

        let result = run(&mut store, &mut state, &reading(), "b1").unwrap();
        assert_eq!(result.toggle, Some(ToggleOutcome::Removed));
        assert_eq!(ids(&state, &reading()), vec!["b2"]);
    }

    #[test]
    fn every_toggle_persists_full_collection() {
        let (mut store, mut state) = setup(sample_books(2));
        run(&mut store, &mut state, &favorites(), "b1").unwrap();
        run(&mut store, &mut state, &favorites(), "b2").unwrap();

        let persisted = store.load_collection(&favorites());
        assert_eq!(persisted, state.collection(&favorites()).unwrap().books());
    }

    #[test]
    fn save_failure_keeps_memory_and_warns() {
        let (mut store, mut state) = setup(sample_books(1));
        store.backend().set_simulate_write_error(true);

        let result = run(&mut store, &mut state, &favorites(), "b1").unwrap();
        assert!(is_member(&state, &favorites(), "b1").unwrap());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn refresh_covers_results_target_and_other_memberships() {
        let (mut store, mut state) = setup(sample_books(1));
        run(&mut store, &mut state, &reading(), "b1").unwrap();
        let result = run(&mut store, &mut state, &favorites(), "b1").unwrap();

        assert!(result.needs_refresh(&Section::Results));
        assert!(result.needs_refresh(&Section::Collection(favorites())));
        assert!(result.needs_refresh(&Section::Collection(reading())));
    }

    #[test]
    fn returned_card_reflects_new_state() {
        let (mut store, mut state) = setup(sample_books(1));
        let result = run(&mut store, &mut state, &favorites(), "b1").unwrap();
        let card = &result.cards[0];
        assert!(card.badge(&favorites()).unwrap().active);
        assert!(!card.badge(&reading()).unwrap().active);
    }

    #[test]
    fn unknown_collection_fails() {
        let (mut store, mut state) = setup(sample_books(1));
        let wishlist = CollectionName::new("wishlist").unwrap();
        assert!(run(&mut store, &mut state, &wishlist, "b1").is_err());
    }
}
