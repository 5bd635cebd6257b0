//src/hook.rs
use crate::entry::Entry;
use anyhow::Result;
use tracing::info;

/// Outbound notification point for entry changes. The store never waits on
/// or depends on a hook; failures are logged and dropped by the caller.
pub trait SubmitHook {
    /// Called after a new entry has been inserted.
    /// # Errors
    /// Implementation defined; the caller only logs it.
    fn entry_logged(&self, entry: &Entry) -> Result<()>;

    /// # Errors
    /// Implementation defined; the caller only logs it.
    fn entry_updated(&self, _entry: &Entry) -> Result<()> {
        Ok(())
    }

    /// # Errors
    /// Implementation defined; the caller only logs it.
    fn entry_removed(&self, _entry: &Entry) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl SubmitHook for NoopHook {
    fn entry_logged(&self, _entry: &Entry) -> Result<()> {
        Ok(())
    }
}

/// Emits one structured event per change.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHook;

impl SubmitHook for TracingHook {
    fn entry_logged(&self, entry: &Entry) -> Result<()> {
        info!(
            target: "workout_log::hook",
            id = %entry.id(),
            exercise = %entry.exercise_name,
            set = entry.set_number,
            reps = entry.rep_count,
            logged_at = entry.logged_at(),
            "entry logged"
        );
        Ok(())
    }

    fn entry_updated(&self, entry: &Entry) -> Result<()> {
        info!(target: "workout_log::hook", id = %entry.id(), summary = %entry.summary(), "entry updated");
        Ok(())
    }

    fn entry_removed(&self, entry: &Entry) -> Result<()> {
        info!(target: "workout_log::hook", id = %entry.id(), "entry removed");
        Ok(())
    }
}
