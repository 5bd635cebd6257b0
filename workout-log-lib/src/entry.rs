//src/entry.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Lowest value a set number or rep count may take.
pub const MIN_COUNT: u32 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Exercise name cannot be empty.")]
    EmptyName,
    #[error("Set number and rep count must be at least {MIN_COUNT}.")]
    BelowMinimumCount,
    #[error("No entry with id {0}.")]
    UnknownId(EntryId),
    #[error("No edit or delete session is open.")]
    NotOpen,
}

/// Opaque identifier assigned to an entry when it is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    pub exercise_name: String,
    pub set_number: u32,
    pub rep_count: u32,
    logged_at: String,
}

impl Entry {
    /// Builds a new entry with a fresh id.
    /// # Errors
    /// - `Error::EmptyName` if the name is blank after trimming.
    /// - `Error::BelowMinimumCount` if either count is zero.
    pub fn new(
        exercise_name: &str,
        set_number: u32,
        rep_count: u32,
        logged_at: impl Into<String>,
    ) -> Result<Self, Error> {
        let trimmed = exercise_name.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyName);
        }
        if set_number < MIN_COUNT || rep_count < MIN_COUNT {
            return Err(Error::BelowMinimumCount);
        }
        Ok(Self {
            id: EntryId::new(),
            exercise_name: trimmed.to_string(),
            set_number,
            rep_count,
            logged_at: logged_at.into(),
        })
    }

    pub const fn id(&self) -> EntryId {
        self.id
    }

    pub fn logged_at(&self) -> &str {
        &self.logged_at
    }

    /// "Bench Press • Set 2 • Reps 8"
    pub fn summary(&self) -> String {
        format!(
            "{} • Set {} • Reps {}",
            self.exercise_name, self.set_number, self.rep_count
        )
    }

    /// Subtitle shown under the exercise name in the entry list.
    pub fn detail_line(&self) -> String {
        format!(
            "Set {} • Reps {} • {}",
            self.set_number, self.rep_count, self.logged_at
        )
    }

    pub(crate) fn apply(&mut self, patch: EntryPatch) {
        self.exercise_name = patch.exercise_name;
        self.set_number = patch.set_number;
        self.rep_count = patch.rep_count;
    }
}

/// Replacement fields written by an edit. `id` and `logged_at` are never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPatch {
    pub exercise_name: String,
    pub set_number: u32,
    pub rep_count: u32,
}

impl EntryPatch {
    /// Trims the name and clamps both counts to `MIN_COUNT`.
    /// # Errors
    /// Returns `Error::EmptyName` if the name is blank after trimming.
    pub fn normalized(exercise_name: &str, set_number: u32, rep_count: u32) -> Result<Self, Error> {
        let trimmed = exercise_name.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            exercise_name: trimmed.to_string(),
            set_number: set_number.max(MIN_COUNT),
            rep_count: rep_count.max(MIN_COUNT),
        })
    }
}
