//src/edit.rs
use crate::entry::{Entry, EntryId, EntryPatch, Error, MIN_COUNT};
use crate::store::EntryStore;
use tracing::debug;

/// Editable copy of an entry's fields, discarded on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScratch {
    pub exercise: String,
    pub set_number: u32,
    pub rep_count: u32,
}

impl EditScratch {
    fn from_entry(entry: &Entry) -> Self {
        Self {
            exercise: entry.exercise_name.clone(),
            set_number: entry.set_number,
            rep_count: entry.rep_count,
        }
    }

    pub fn increment_set(&mut self) {
        self.set_number = self.set_number.saturating_add(1);
    }

    pub fn decrement_set(&mut self) {
        self.set_number = self.set_number.saturating_sub(1).max(MIN_COUNT);
    }

    pub fn increment_reps(&mut self) {
        self.rep_count = self.rep_count.saturating_add(1);
    }

    pub fn decrement_reps(&mut self) {
        self.rep_count = self.rep_count.saturating_sub(1).max(MIN_COUNT);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditWorkflow {
    #[default]
    Closed,
    Open {
        entry_id: EntryId,
        scratch: EditScratch,
    },
}

impl EditWorkflow {
    /// Loads the entry with `id` into a fresh scratch buffer, replacing any
    /// previous session.
    /// # Errors
    /// Returns `Error::UnknownId` if the entry is gone; the current session,
    /// open or closed, is left as it was.
    pub fn open(&mut self, store: &EntryStore, id: EntryId) -> Result<(), Error> {
        let entry = store.get(id).ok_or_else(|| {
            debug!(%id, "edit not opened, id not in store");
            Error::UnknownId(id)
        })?;
        *self = Self::Open {
            entry_id: id,
            scratch: EditScratch::from_entry(entry),
        };
        Ok(())
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub const fn entry_id(&self) -> Option<EntryId> {
        match self {
            Self::Open { entry_id, .. } => Some(*entry_id),
            Self::Closed => None,
        }
    }

    pub const fn scratch(&self) -> Option<&EditScratch> {
        match self {
            Self::Open { scratch, .. } => Some(scratch),
            Self::Closed => None,
        }
    }

    pub fn scratch_mut(&mut self) -> Option<&mut EditScratch> {
        match self {
            Self::Open { scratch, .. } => Some(scratch),
            Self::Closed => None,
        }
    }

    pub fn can_save(&self) -> bool {
        self.scratch()
            .is_some_and(|s| !s.exercise.trim().is_empty())
    }

    /// Writes the scratch buffer back to the store and closes the session.
    /// # Errors
    /// - `Error::NotOpen` if no session is open.
    /// - `Error::EmptyName` if the scratch name is blank; the session stays open.
    /// - `Error::UnknownId` if the entry was removed meanwhile; the session closes.
    pub fn save(&mut self, store: &mut EntryStore) -> Result<Entry, Error> {
        let Self::Open { entry_id, scratch } = self else {
            return Err(Error::NotOpen);
        };
        let patch =
            EntryPatch::normalized(&scratch.exercise, scratch.set_number, scratch.rep_count)?;
        let id = *entry_id;
        *self = Self::Closed;
        store.update_by_id(id, patch).cloned()
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.entry_id() {
            debug!(%id, "edit cancelled");
        }
        *self = Self::Closed;
    }
}
