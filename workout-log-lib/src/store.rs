//src/store.rs
use crate::entry::{Entry, EntryId, EntryPatch, Error};
use tracing::{debug, info};

/// Newest-first collection of logged entries. Sole owner of every `Entry`.
#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_front(&mut self, entry: Entry) {
        info!(id = %entry.id(), exercise = %entry.exercise_name, "entry logged");
        self.entries.insert(0, entry);
    }

    /// Replaces the editable fields of the entry with `id`.
    /// The name is trimmed and counts clamped again here so the collection
    /// invariants hold whatever the caller passes.
    /// # Errors
    /// - `Error::EmptyName` if the patched name is blank.
    /// - `Error::UnknownId` if no entry has `id`; the store is unchanged.
    pub fn update_by_id(&mut self, id: EntryId, patch: EntryPatch) -> Result<&Entry, Error> {
        let patch =
            EntryPatch::normalized(&patch.exercise_name, patch.set_number, patch.rep_count)?;
        let Some(entry) = self.entries.iter_mut().find(|e| e.id() == id) else {
            debug!(%id, "update skipped, id not in store");
            return Err(Error::UnknownId(id));
        };
        entry.apply(patch);
        info!(%id, exercise = %entry.exercise_name, "entry updated");
        Ok(entry)
    }

    /// Removes and returns the entry with `id`, or `None` if it is not present.
    pub fn remove_by_id(&mut self, id: EntryId) -> Option<Entry> {
        let Some(index) = self.position(id) else {
            debug!(%id, "remove skipped, id not in store");
            return None;
        };
        let removed = self.entries.remove(index);
        info!(%id, exercise = %removed.exercise_name, "entry removed");
        Some(removed)
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Most recently inserted entry.
    pub fn head(&self) -> Option<&Entry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
