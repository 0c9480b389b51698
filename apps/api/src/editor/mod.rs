//! Section editors: pure edit operations over one slice of the resume document.
//!
//! Every operation takes the current slice by reference and returns a new value.
//! Entries are addressed by `EntryId`; nested string lists (achievements,
//! coursework, technologies, key features) are addressed by position, so indices
//! shift down after a removal.

pub mod education;
pub mod experience;
pub mod personal;
pub mod projects;
pub mod skills;

use thiserror::Error;
use uuid::Uuid;

use crate::models::resume::EntryId;

// ────────────────────────────────────────────────────────────────────────────
// Contracts
// ────────────────────────────────────────────────────────────────────────────

/// A record with a unique id living inside an ordered section sequence.
pub trait Entry: Clone {
    fn id(&self) -> EntryId;

    /// A fresh entry the way the editing panel creates it.
    fn blank(id: EntryId) -> Self;
}

/// A typed `(field, value)` pair for one entry type.
pub trait FieldUpdate<T> {
    fn apply_to(self, entry: &mut T);
}

/// A positional string list nested inside an entry.
pub trait SubList<T> {
    fn items<'a>(&self, entry: &'a T) -> &'a Vec<String>;
    fn items_mut<'a>(&self, entry: &'a mut T) -> &'a mut Vec<String>;
}

/// One local edit on a section. `check` runs at the session boundary before `apply`.
pub trait SectionEditor {
    type Value;

    fn check(&self, _current: &Self::Value) -> Result<(), EditError> {
        Ok(())
    }

    fn apply(self, current: &Self::Value, ids: &mut dyn IdSource) -> Self::Value;
}

/// Supplies ids for newly created entries.
pub trait IdSource {
    fn next_id(&mut self) -> EntryId;
}

/// UUID v4 ids. Used by the service.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> EntryId {
        EntryId::from_uuid(Uuid::new_v4())
    }
}

/// Monotonic counter ids, deterministic across runs.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    last: u128,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> EntryId {
        self.last += 1;
        EntryId::from_uuid(Uuid::from_u128(self.last))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("item index {index} is out of range for entry {entry_id} ({len} items)")]
    ItemIndexOutOfRange {
        entry_id: EntryId,
        index: usize,
        len: usize,
    },
    #[error("end date of entry {entry_id} is hidden while it is marked as the current job")]
    EndDateHidden { entry_id: EntryId },
}

/// Runs `edit` against `current` and hands the new section value to `on_update`.
/// `on_update` is not called when the boundary check rejects the edit.
pub fn run<E: SectionEditor>(
    edit: E,
    current: &E::Value,
    ids: &mut dyn IdSource,
    on_update: impl FnOnce(E::Value),
) -> Result<(), EditError> {
    edit.check(current)?;
    on_update(edit.apply(current, ids));
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Entry operations
// ────────────────────────────────────────────────────────────────────────────

/// Appends a blank entry with an id not already used in `entries`.
pub fn create<T: Entry>(entries: &[T], ids: &mut dyn IdSource) -> Vec<T> {
    let mut id = ids.next_id();
    while entries.iter().any(|e| e.id() == id) {
        id = ids.next_id();
    }
    let mut next = entries.to_vec();
    next.push(T::blank(id));
    next
}

/// Replaces one field of the entry matching `id`. Unknown ids leave `entries` unchanged.
pub fn update<T: Entry, F: FieldUpdate<T>>(entries: &[T], id: EntryId, change: F) -> Vec<T> {
    modify(entries, id, |entry| change.apply_to(entry))
}

/// Drops the entry matching `id`. Other entries keep their ids and order.
pub fn remove<T: Entry>(entries: &[T], id: EntryId) -> Vec<T> {
    entries.iter().filter(|e| e.id() != id).cloned().collect()
}

fn modify<T: Entry>(entries: &[T], id: EntryId, edit: impl FnOnce(&mut T)) -> Vec<T> {
    let mut next = entries.to_vec();
    if let Some(entry) = next.iter_mut().find(|e| e.id() == id) {
        edit(entry);
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Nested list operations
// ────────────────────────────────────────────────────────────────────────────

/// Appends an empty slot to the sub-list of entry `id`.
pub fn add_item<T: Entry>(entries: &[T], id: EntryId, list: impl SubList<T>) -> Vec<T> {
    modify(entries, id, |entry| list.items_mut(entry).push(String::new()))
}

/// Replaces the element at `index`. Callers only pass indices taken from the
/// current list; see [`check_item_index`].
pub fn update_item<T: Entry>(
    entries: &[T],
    id: EntryId,
    list: impl SubList<T>,
    index: usize,
    value: String,
) -> Vec<T> {
    modify(entries, id, |entry| {
        if let Some(slot) = list.items_mut(entry).get_mut(index) {
            *slot = value;
        }
    })
}

/// Removes the element at `index`; later elements move down by one.
pub fn remove_item<T: Entry>(
    entries: &[T],
    id: EntryId,
    list: impl SubList<T>,
    index: usize,
) -> Vec<T> {
    modify(entries, id, |entry| {
        let items = list.items_mut(entry);
        if index < items.len() {
            items.remove(index);
        }
    })
}

/// Appends `value` trimmed, unless it is blank.
pub fn add_trimmed<T: Entry>(
    entries: &[T],
    id: EntryId,
    list: impl SubList<T>,
    value: &str,
) -> Vec<T> {
    let value = value.trim();
    if value.is_empty() {
        return entries.to_vec();
    }
    modify(entries, id, |entry| list.items_mut(entry).push(value.to_string()))
}

/// Rejects an index that is not a position of the current sub-list.
/// Unknown entry ids pass; the edit itself is then a no-op.
pub fn check_item_index<T: Entry>(
    entries: &[T],
    id: EntryId,
    list: impl SubList<T>,
    index: usize,
) -> Result<(), EditError> {
    match entries.iter().find(|e| e.id() == id) {
        Some(entry) => {
            let len = list.items(entry).len();
            if index < len {
                Ok(())
            } else {
                Err(EditError::ItemIndexOutOfRange {
                    entry_id: id,
                    index,
                    len,
                })
            }
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::experience::{Achievements, ExperienceField};
    use crate::models::resume::ExperienceEntry;

    fn seeded(count: usize) -> (Vec<ExperienceEntry>, SequentialIds) {
        let mut ids = SequentialIds::default();
        let mut entries = Vec::new();
        for _ in 0..count {
            entries = create(&entries, &mut ids);
        }
        (entries, ids)
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let (entries, mut ids) = seeded(2);
        let next = create(&entries, &mut ids);
        assert_eq!(next.len(), 3);
        assert_eq!(&next[..2], &entries[..]);
        let new_id = next[2].id();
        assert!(entries.iter().all(|e| e.id() != new_id));
    }

    #[test]
    fn test_create_skips_ids_already_in_sequence() {
        let (entries, _) = seeded(3);
        // A fresh counter would hand out the ids already present.
        let mut restarted = SequentialIds::default();
        let next = create(&entries, &mut restarted);
        let new_id = next[3].id();
        assert!(entries.iter().all(|e| e.id() != new_id));
    }

    #[test]
    fn test_random_ids_are_distinct() {
        let mut ids = RandomIds;
        let mut entries: Vec<ExperienceEntry> = Vec::new();
        for _ in 0..50 {
            entries = create(&entries, &mut ids);
        }
        let mut seen: Vec<_> = entries.iter().map(|e| e.id()).collect();
        seen.sort_by_key(|id| id.as_uuid());
        seen.dedup();
        assert_eq!(seen.len(), 50);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (entries, mut ids) = seeded(2);
        let stranger = ids.next_id();
        let next = update(&entries, stranger, ExperienceField::Company("Acme".into()));
        assert_eq!(next, entries);
    }

    #[test]
    fn test_update_touches_only_matching_entry() {
        let (entries, _) = seeded(3);
        let target = entries[1].id();
        let next = update(&entries, target, ExperienceField::Company("Acme".into()));
        assert_eq!(next[1].company, "Acme");
        assert_eq!(next[0], entries[0]);
        assert_eq!(next[2], entries[2]);
    }

    #[test]
    fn test_remove_after_update_drops_entry() {
        let (entries, _) = seeded(3);
        let target = entries[1].id();
        let updated = update(&entries, target, ExperienceField::JobTitle("Lead".into()));
        let removed = remove(&updated, target);
        assert_eq!(removed, remove(&entries, target));
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].id(), entries[0].id());
        assert_eq!(removed[1].id(), entries[2].id());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (entries, mut ids) = seeded(2);
        assert_eq!(remove(&entries, ids.next_id()), entries);
    }

    #[test]
    fn test_sub_list_add_update_remove() {
        let (entries, _) = seeded(1);
        let id = entries[0].id();
        let next = add_item(&entries, id, Achievements);
        assert_eq!(next[0].achievements, vec!["", ""]);
        let next = update_item(&next, id, Achievements, 1, "Led team".into());
        assert_eq!(next[0].achievements, vec!["", "Led team"]);
        let next = remove_item(&next, id, Achievements, 0);
        assert_eq!(next[0].achievements, vec!["Led team"]);
    }

    #[test]
    fn test_remove_item_shifts_later_positions() {
        let (entries, _) = seeded(1);
        let id = entries[0].id();
        let next = update(
            &entries,
            id,
            ExperienceField::Achievements(vec!["a".into(), "b".into(), "c".into()]),
        );
        let next = remove_item(&next, id, Achievements, 1);
        assert_eq!(next[0].achievements, vec!["a", "c"]);
        // What used to be index 2 is now index 1.
        let next = update_item(&next, id, Achievements, 1, "C".into());
        assert_eq!(next[0].achievements, vec!["a", "C"]);
    }

    #[test]
    fn test_check_item_index() {
        let (entries, mut ids) = seeded(1);
        let id = entries[0].id();
        assert!(check_item_index(&entries, id, Achievements, 0).is_ok());
        assert_eq!(
            check_item_index(&entries, id, Achievements, 1),
            Err(EditError::ItemIndexOutOfRange {
                entry_id: id,
                index: 1,
                len: 1
            })
        );
        assert!(check_item_index(&entries, ids.next_id(), Achievements, 9).is_ok());
    }

    #[test]
    fn test_add_trimmed_ignores_blank() {
        let (entries, _) = seeded(1);
        let id = entries[0].id();
        assert_eq!(add_trimmed(&entries, id, Achievements, "   "), entries);
        let next = add_trimmed(&entries, id, Achievements, "  Shipped v2 ");
        assert_eq!(next[0].achievements, vec!["", "Shipped v2"]);
    }

    #[test]
    fn test_run_skips_callback_on_rejected_edit() {
        use crate::editor::experience::ExperienceEdit;

        let (entries, mut ids) = seeded(1);
        let id = entries[0].id();
        let mut called = false;
        let result = run(
            ExperienceEdit::UpdateAchievement {
                id,
                index: 5,
                value: "x".into(),
            },
            &entries,
            &mut ids,
            |_| called = true,
        );
        assert!(result.is_err());
        assert!(!called);
    }
}
