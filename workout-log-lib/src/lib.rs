// src/lib.rs
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// --- Declare modules ---
mod config;
mod delete;
mod edit;
mod entry;
mod form;
mod hook;
mod store;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util, load as load_config_util, parse_color,
    save as save_config_util, Config, Error as ConfigError, Palette, StandardColor, Theme,
    ThemeColor,
};
pub use delete::DeleteWorkflow;
pub use edit::{EditScratch, EditWorkflow};
pub use entry::{Entry, EntryId, EntryPatch, Error as EntryError, MIN_COUNT};
pub use form::FormController;
pub use hook::{NoopHook, SubmitHook, TracingHook};
pub use store::EntryStore;

const FALLBACK_TIME_FORMAT: &str = "%H:%M";

/// Formats `at` with a strftime pattern, falling back to `%H:%M` when the
/// pattern is malformed (chrono panics on `to_string` of a bad pattern).
pub fn format_logged_at<Tz: TimeZone>(at: &DateTime<Tz>, pattern: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid {
        pattern
    } else {
        warn!(pattern, "invalid time_format, using {}", FALLBACK_TIME_FORMAT);
        FALLBACK_TIME_FORMAT
    };
    at.format(pattern).to_string()
}

/// Header label, e.g. "Today • 19 Oct".
pub fn today_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Today • {}", at.format("%d %b"))
}

/// Owns the whole logging session: config, entries, the new-entry form and
/// the two modal workflows.
pub struct WorkoutLog {
    pub config: Config,
    pub config_path: PathBuf,
    store: EntryStore,
    form: FormController,
    edit: EditWorkflow,
    delete: DeleteWorkflow,
    hook: Box<dyn SubmitHook>,
}

impl WorkoutLog {
    /// Initializes the session from the config file and host theme variables.
    /// # Errors
    /// Returns `anyhow::Error` if the config path cannot be determined or the file cannot be loaded.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let mut config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;
        config
            .theme
            .apply_host_params(|key| std::env::var(key).ok());

        let mut log = Self::with_config(config);
        log.config_path = config_path;
        Ok(log)
    }

    /// Builds a session without touching the filesystem.
    pub fn with_config(config: Config) -> Self {
        let form = FormController::new(config.default_reps);
        Self {
            config,
            config_path: PathBuf::new(),
            store: EntryStore::new(),
            form,
            edit: EditWorkflow::Closed,
            delete: DeleteWorkflow::Closed,
            hook: Box::new(NoopHook),
        }
    }

    pub fn set_hook(&mut self, hook: Box<dyn SubmitHook>) {
        self.hook = hook;
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn palette(&self) -> Palette {
        self.config.theme.resolve()
    }

    pub fn entries(&self) -> &[Entry] {
        self.store.all()
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn today_label(&self) -> String {
        today_label(&Local::now())
    }

    // --- New entry form ---

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    /// Copies the quick exercise at `index` into the exercise draft.
    /// Returns false if there is no such quick exercise.
    pub fn pick_quick_exercise(&mut self, index: usize) -> bool {
        match self.config.quick_exercises.get(index) {
            Some(name) => {
                self.form.set_exercise(name.clone());
                true
            }
            None => false,
        }
    }

    /// Submits the form stamped with the current local time.
    /// # Errors
    /// See [`WorkoutLog::submit_at`].
    pub fn submit(&mut self) -> Result<Entry, EntryError> {
        let logged_at = format_logged_at(&Local::now(), &self.config.time_format);
        self.submit_at(&logged_at)
    }

    /// Submits the form with an already formatted time string.
    /// # Errors
    /// Returns `EntryError::EmptyName` or `EntryError::BelowMinimumCount`; nothing changes.
    pub fn submit_at(&mut self, logged_at: &str) -> Result<Entry, EntryError> {
        let entry = self.form.submit(&mut self.store, logged_at)?;
        if let Err(e) = self.hook.entry_logged(&entry) {
            warn!(error = %e, "submit hook failed");
        }
        Ok(entry)
    }

    // --- Edit sheet ---

    /// # Errors
    /// Returns `EntryError::UnknownId` if the entry no longer exists.
    pub fn open_edit(&mut self, id: EntryId) -> Result<(), EntryError> {
        self.edit.open(&self.store, id)
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_open()
    }

    pub fn edit(&self) -> &EditWorkflow {
        &self.edit
    }

    pub fn edit_scratch_mut(&mut self) -> Option<&mut EditScratch> {
        self.edit.scratch_mut()
    }

    /// # Errors
    /// See [`EditWorkflow::save`].
    pub fn save_edit(&mut self) -> Result<Entry, EntryError> {
        let entry = self.edit.save(&mut self.store)?;
        if let Err(e) = self.hook.entry_updated(&entry) {
            warn!(error = %e, "update hook failed");
        }
        Ok(entry)
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    // --- Delete sheet ---

    pub fn open_delete(&mut self, id: EntryId) {
        self.delete.open(id);
    }

    pub fn is_deleting(&self) -> bool {
        self.delete.is_open()
    }

    pub fn delete_prompt(&self) -> String {
        self.delete.prompt(&self.store)
    }

    /// Removes the targeted entry, if it still exists, and closes the sheet.
    pub fn confirm_delete(&mut self) -> Option<Entry> {
        let removed = self.delete.confirm(&mut self.store);
        match &removed {
            Some(entry) => {
                if let Err(e) = self.hook.entry_removed(entry) {
                    warn!(error = %e, "remove hook failed");
                }
            }
            None => debug!("delete confirmed for an entry that is already gone"),
        }
        removed
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }
}
