//src/delete.rs
use crate::entry::{Entry, EntryId};
use crate::store::EntryStore;
use tracing::debug;

const GENERIC_PROMPT: &str = "This entry will be removed.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteWorkflow {
    #[default]
    Closed,
    Open { entry_id: EntryId },
}

impl DeleteWorkflow {
    /// Records the target id. The entry is not looked up until `prompt`/`confirm`.
    pub fn open(&mut self, id: EntryId) {
        *self = Self::Open { entry_id: id };
    }

    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub const fn entry_id(&self) -> Option<EntryId> {
        match self {
            Self::Open { entry_id } => Some(*entry_id),
            Self::Closed => None,
        }
    }

    /// Summary of the targeted entry, or a generic line if it no longer exists.
    pub fn prompt(&self, store: &EntryStore) -> String {
        self.entry_id()
            .and_then(|id| store.get(id))
            .map_or_else(|| GENERIC_PROMPT.to_string(), Entry::summary)
    }

    /// Removes the targeted entry and closes. Returns `None` when closed or
    /// when the entry was already gone.
    pub fn confirm(&mut self, store: &mut EntryStore) -> Option<Entry> {
        let id = self.entry_id()?;
        *self = Self::Closed;
        store.remove_by_id(id)
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.entry_id() {
            debug!(%id, "delete cancelled");
        }
        *self = Self::Closed;
    }
}
