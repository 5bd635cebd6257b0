//src/form.rs
use crate::entry::{Entry, Error, MIN_COUNT};
use crate::store::EntryStore;
use tracing::debug;

/// Draft values for the next entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    exercise: String,
    set_number: u32,
    rep_count: u32,
    // True while the set draft holds a value the controller chose after a
    // submission rather than one the user stepped to.
    set_auto_advanced: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(10)
    }
}

impl FormController {
    pub fn new(default_reps: u32) -> Self {
        Self {
            exercise: String::new(),
            set_number: MIN_COUNT,
            rep_count: default_reps.max(MIN_COUNT),
            set_auto_advanced: false,
        }
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    pub const fn set_number(&self) -> u32 {
        self.set_number
    }

    pub const fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn set_exercise(&mut self, name: impl Into<String>) {
        self.exercise = name.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.exercise.push(c);
    }

    pub fn pop_char(&mut self) {
        self.exercise.pop();
    }

    pub fn clear_exercise(&mut self) {
        self.exercise.clear();
    }

    pub fn increment_set(&mut self) {
        self.set_number = self.set_number.saturating_add(1);
        self.set_auto_advanced = false;
    }

    pub fn decrement_set(&mut self) {
        self.set_number = self.set_number.saturating_sub(1).max(MIN_COUNT);
        self.set_auto_advanced = false;
    }

    pub fn increment_reps(&mut self) {
        self.rep_count = self.rep_count.saturating_add(1);
    }

    pub fn decrement_reps(&mut self) {
        self.rep_count = self.rep_count.saturating_sub(1).max(MIN_COUNT);
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> Result<(), Error> {
        if self.exercise.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if self.set_number < MIN_COUNT || self.rep_count < MIN_COUNT {
            return Err(Error::BelowMinimumCount);
        }
        Ok(())
    }

    /// Logs the draft as a new entry at the front of `store`.
    ///
    /// When the list head is the same exercise and the set draft was chosen
    /// by the controller, the draft is advanced past the head's set number
    /// before the entry is built, so repeated submissions of one exercise
    /// count up 1, 2, 3... A set the user stepped to is recorded as is.
    ///
    /// # Errors
    /// Returns `Error::EmptyName` or `Error::BelowMinimumCount` without
    /// touching the draft or the store.
    pub fn submit(&mut self, store: &mut EntryStore, logged_at: &str) -> Result<Entry, Error> {
        if let Err(e) = self.validate() {
            debug!(error = %e, "submit rejected");
            return Err(e);
        }
        let name = self.exercise.trim().to_string();

        let previous_head_matches = match store.head() {
            Some(head) if head.exercise_name == name => {
                if self.set_auto_advanced && self.set_number <= head.set_number {
                    self.set_number = head.set_number.saturating_add(1);
                }
                true
            }
            Some(_) => {
                if self.set_auto_advanced {
                    self.set_number = MIN_COUNT;
                }
                false
            }
            None => false,
        };

        let entry = Entry::new(&name, self.set_number, self.rep_count, logged_at)?;
        store.insert_front(entry.clone());

        self.set_number = if previous_head_matches {
            entry.set_number.saturating_add(1)
        } else {
            MIN_COUNT
        };
        self.set_auto_advanced = true;
        self.exercise.clear();
        Ok(entry)
    }
}
