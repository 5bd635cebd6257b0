use anyhow::Result;
use chrono::{FixedOffset, TimeZone};
use std::cell::RefCell;
use std::rc::Rc;
use workout_log_lib::{
    format_logged_at, load_config_util, save_config_util, today_label, Config, EditWorkflow,
    Entry, EntryError, EntryPatch, EntryStore, FormController, StandardColor, SubmitHook, Theme,
    ThemeColor, WorkoutLog,
};

// Helper function to create a test session with default config
fn create_test_log() -> WorkoutLog {
    WorkoutLog::with_config(Config::default())
}

fn log_set(log: &mut WorkoutLog, exercise: &str) -> Result<Entry> {
    log.form_mut().set_exercise(exercise);
    Ok(log.submit_at("12:00")?)
}

#[test]
fn test_length_counts_only_successful_submissions() -> Result<()> {
    let mut log = create_test_log();
    log_set(&mut log, "Squat")?;
    log_set(&mut log, "Bench Press")?;

    log.form_mut().set_exercise("");
    assert_eq!(log.submit_at("12:00"), Err(EntryError::EmptyName));
    log.form_mut().set_exercise("   ");
    assert_eq!(log.submit_at("12:00"), Err(EntryError::EmptyName));

    log_set(&mut log, "Deadlift")?;
    assert_eq!(log.entries().len(), 3);
    Ok(())
}

#[test]
fn test_new_entry_is_always_at_front() -> Result<()> {
    let mut log = create_test_log();
    for name in ["Squat", "Pull-up", "Row"] {
        let entry = log_set(&mut log, name)?;
        assert_eq!(log.entries()[0].id(), entry.id());
        assert_eq!(log.entries()[0].exercise_name, name);
    }
    let names: Vec<_> = log.entries().iter().map(|e| e.exercise_name.as_str()).collect();
    assert_eq!(names, vec!["Row", "Pull-up", "Squat"]);
    Ok(())
}

#[test]
fn test_update_by_id_trims_and_clamps() -> Result<()> {
    let mut store = EntryStore::new();
    let entry = Entry::new("Squat", 2, 5, "08:15")?;
    let id = entry.id();
    store.insert_front(entry);

    let patch = EntryPatch {
        exercise_name: "  Front Squat  ".to_string(),
        set_number: 0,
        rep_count: 0,
    };
    store.update_by_id(id, patch)?;

    let updated = store.get(id).expect("entry still present");
    assert_eq!(updated.id(), id);
    assert_eq!(updated.exercise_name, "Front Squat");
    assert_eq!(updated.set_number, 1);
    assert_eq!(updated.rep_count, 1);
    assert_eq!(updated.logged_at(), "08:15");
    Ok(())
}

#[test]
fn test_update_by_id_rejects_blank_name_and_unknown_id() -> Result<()> {
    let mut store = EntryStore::new();
    let entry = Entry::new("Squat", 1, 5, "t")?;
    let id = entry.id();
    store.insert_front(entry.clone());

    let blank = EntryPatch {
        exercise_name: " ".to_string(),
        set_number: 3,
        rep_count: 3,
    };
    assert_eq!(store.update_by_id(id, blank), Err(EntryError::EmptyName));
    assert_eq!(store.get(id), Some(&entry));

    let other = Entry::new("Row", 1, 1, "t")?.id();
    let patch = EntryPatch::normalized("Row", 1, 1)?;
    assert_eq!(store.update_by_id(other, patch), Err(EntryError::UnknownId(other)));
    assert_eq!(store.all(), &[entry][..]);
    Ok(())
}

#[test]
fn test_remove_by_id() -> Result<()> {
    let mut log = create_test_log();
    let first = log_set(&mut log, "Squat")?;
    log_set(&mut log, "Bench Press")?;

    log.open_delete(first.id());
    let removed = log.confirm_delete().expect("entry removed");
    assert_eq!(removed.id(), first.id());
    assert_eq!(log.entries().len(), 1);
    assert!(log.store().get(first.id()).is_none());

    // Removing again leaves the list unchanged
    let mut store = log.store().clone();
    assert!(store.remove_by_id(first.id()).is_none());
    assert_eq!(store.len(), 1);
    Ok(())
}

#[test]
fn test_same_exercise_auto_increments_set() -> Result<()> {
    let mut log = create_test_log();
    log.form_mut().set_exercise("Squat");
    for _ in 0..5 {
        log.form_mut().decrement_reps();
    }
    let first = log.submit_at("10:00")?;
    assert_eq!(first.set_number, 1);
    assert_eq!(first.rep_count, 5);

    log.form_mut().set_exercise("Squat");
    let second = log.submit_at("10:02")?;
    assert_eq!(second.set_number, first.set_number + 1);
    assert_eq!(second.rep_count, 5);
    Ok(())
}

#[test]
fn test_whitespace_exercise_cannot_submit() -> Result<()> {
    let mut log = create_test_log();
    log_set(&mut log, "Squat")?;
    log.form_mut().set_exercise("   ");
    assert!(!log.can_submit());
    assert!(log.submit_at("t").is_err());
    assert_eq!(log.entries().len(), 1);
    assert_eq!(log.form().exercise(), "   ");
    Ok(())
}

#[test]
fn test_edit_on_removed_id_is_noop() -> Result<()> {
    let mut log = create_test_log();
    let entry = log_set(&mut log, "Squat")?;
    log_set(&mut log, "Row")?;
    log.open_delete(entry.id());
    log.confirm_delete();
    let before = log.store().clone();

    assert_eq!(log.open_edit(entry.id()), Err(EntryError::UnknownId(entry.id())));
    assert!(!log.is_editing());
    assert_eq!(log.save_edit(), Err(EntryError::NotOpen));
    assert_eq!(log.store().all(), before.all());
    Ok(())
}

#[test]
fn test_edit_open_unknown_id_keeps_current_session() -> Result<()> {
    let mut log = create_test_log();
    let gone = log_set(&mut log, "Row")?;
    let kept = log_set(&mut log, "Squat")?;
    log.open_delete(gone.id());
    log.confirm_delete();

    log.open_edit(kept.id())?;
    if let Some(scratch) = log.edit_scratch_mut() {
        scratch.exercise = "Front Squat".to_string();
    }

    assert_eq!(log.open_edit(gone.id()), Err(EntryError::UnknownId(gone.id())));
    assert!(log.is_editing());
    assert_eq!(log.edit().entry_id(), Some(kept.id()));
    assert_eq!(
        log.edit().scratch().map(|s| s.exercise.as_str()),
        Some("Front Squat")
    );

    let saved = log.save_edit()?;
    assert_eq!(saved.exercise_name, "Front Squat");
    Ok(())
}

#[test]
fn test_stepped_set_is_recorded_for_same_exercise() -> Result<()> {
    let mut log = create_test_log();
    log_set(&mut log, "Squat")?;
    log_set(&mut log, "Squat")?;
    assert_eq!(log.form().set_number(), 3);

    log.form_mut().decrement_set();
    log.form_mut().decrement_set();
    let redo = log_set(&mut log, "Squat")?;
    assert_eq!(redo.set_number, 1);
    assert_eq!(log.entries()[0].id(), redo.id());

    // Untouched draft counts up from the recorded set again.
    let next = log_set(&mut log, "Squat")?;
    assert_eq!(next.set_number, 2);
    Ok(())
}

#[test]
fn test_edit_save_writes_scratch() -> Result<()> {
    let mut log = create_test_log();
    let entry = log_set(&mut log, "Squat")?;

    log.open_edit(entry.id())?;
    {
        let scratch = log.edit_scratch_mut().expect("session open");
        assert_eq!(scratch.exercise, "Squat");
        scratch.exercise = " Box Squat ".to_string();
        scratch.increment_set();
        scratch.decrement_reps();
    }
    let saved = log.save_edit()?;
    assert!(!log.is_editing());
    assert_eq!(saved.exercise_name, "Box Squat");
    assert_eq!(saved.set_number, 2);
    assert_eq!(saved.rep_count, 9);
    assert_eq!(saved.logged_at(), "12:00");
    assert_eq!(log.entries()[0], saved);
    Ok(())
}

#[test]
fn test_edit_blank_name_keeps_session_open() -> Result<()> {
    let mut log = create_test_log();
    let entry = log_set(&mut log, "Squat")?;
    log.open_edit(entry.id())?;
    log.edit_scratch_mut().expect("open").exercise = "  ".to_string();

    assert!(!log.edit().can_save());
    assert_eq!(log.save_edit(), Err(EntryError::EmptyName));
    assert!(log.is_editing());
    assert_eq!(log.entries()[0].exercise_name, "Squat");

    log.cancel_edit();
    assert!(!log.is_editing());
    assert_eq!(log.entries()[0], entry);
    Ok(())
}

#[test]
fn test_edit_save_after_entry_vanished_closes_without_change() -> Result<()> {
    let mut store = EntryStore::new();
    let entry = Entry::new("Squat", 1, 5, "t")?;
    store.insert_front(entry.clone());
    let mut edit = EditWorkflow::default();
    edit.open(&store, entry.id())?;
    store.remove_by_id(entry.id());

    assert_eq!(edit.save(&mut store), Err(EntryError::UnknownId(entry.id())));
    assert!(!edit.is_open());
    assert!(store.is_empty());
    Ok(())
}

#[test]
fn test_delete_confirm_on_removed_id_is_noop() -> Result<()> {
    let mut log = create_test_log();
    let entry = log_set(&mut log, "Squat")?;
    log_set(&mut log, "Row")?;

    log.open_delete(entry.id());
    assert_eq!(log.delete_prompt(), "Squat • Set 1 • Reps 10");

    assert!(log.confirm_delete().is_some());
    // Already removed earlier in the same handler chain
    log.open_delete(entry.id());
    assert!(log.confirm_delete().is_none());
    assert!(!log.is_deleting());
    assert!(log.confirm_delete().is_none());
    assert_eq!(log.entries().len(), 1);

    log.open_delete(entry.id());
    assert_eq!(log.delete_prompt(), "This entry will be removed.");
    log.cancel_delete();
    assert_eq!(log.entries().len(), 1);
    Ok(())
}

#[test]
fn test_quick_exercise_pick() -> Result<()> {
    let mut log = create_test_log();
    assert!(log.pick_quick_exercise(1));
    assert_eq!(log.form().exercise(), "Squat");
    assert!(!log.pick_quick_exercise(99));
    assert_eq!(log.form().exercise(), "Squat");
    Ok(())
}

#[derive(Clone, Default)]
struct RecordingHook {
    events: Rc<RefCell<Vec<String>>>,
}

impl SubmitHook for RecordingHook {
    fn entry_logged(&self, entry: &Entry) -> Result<()> {
        self.events
            .borrow_mut()
            .push(format!("logged {}", entry.exercise_name));
        anyhow::bail!("endpoint unreachable")
    }

    fn entry_removed(&self, entry: &Entry) -> Result<()> {
        self.events
            .borrow_mut()
            .push(format!("removed {}", entry.exercise_name));
        Ok(())
    }
}

#[test]
fn test_hook_failure_does_not_affect_store() -> Result<()> {
    let mut log = create_test_log();
    let hook = RecordingHook::default();
    log.set_hook(Box::new(hook.clone()));

    let entry = log_set(&mut log, "Squat")?;
    assert_eq!(log.entries().len(), 1);
    log.open_delete(entry.id());
    log.confirm_delete();

    assert_eq!(
        *hook.events.borrow(),
        vec!["logged Squat".to_string(), "removed Squat".to_string()]
    );
    Ok(())
}

#[test]
fn test_set_stepper_floor_keeps_form_submittable() {
    let mut store = EntryStore::new();
    let mut form = FormController::new(10);
    form.set_exercise("Squat");
    form.decrement_set();
    assert!(form.can_submit());
    assert_eq!(form.set_number(), 1);
    assert!(form.submit(&mut store, "t").is_ok());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_theme_defaults_and_overrides() {
    let palette = Theme::default().resolve();
    assert_eq!(palette.bg, ThemeColor::Rgb(0x0B, 0x0F, 0x14));
    assert_eq!(palette.destructive, ThemeColor::Rgb(0xEF, 0x44, 0x44));

    let theme = Theme {
        bg_color: Some("#000000".to_string()),
        hint_color: Some("darkgrey".to_string()),
        button_color: Some("not-a-colour".to_string()),
        ..Default::default()
    };
    let palette = theme.resolve();
    assert_eq!(palette.bg, ThemeColor::Rgb(0, 0, 0));
    assert_eq!(palette.hint, ThemeColor::Named(StandardColor::DarkGrey));
    assert_eq!(palette.button, ThemeColor::Rgb(0x3B, 0x82, 0xF6));
}

#[test]
fn test_host_params_override_file_theme() {
    let mut theme = Theme {
        text_color: Some("White".to_string()),
        ..Default::default()
    };
    theme.apply_host_params(|key| match key {
        "TG_THEME_TEXT_COLOR" => Some("#112233".to_string()),
        "TG_THEME_BUTTON_COLOR" => Some("  ".to_string()),
        _ => None,
    });
    assert_eq!(theme.text_color.as_deref(), Some("#112233"));
    assert_eq!(theme.button_color, None);
    assert_eq!(theme.resolve().text, ThemeColor::Rgb(0x11, 0x22, 0x33));
}

#[test]
fn test_config_load_creates_defaults_and_roundtrips_edits() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("config.toml");

    let loaded = load_config_util(&path)?;
    assert_eq!(loaded, Config::default());
    assert!(path.exists());

    let mut edited = loaded;
    edited.default_reps = 6;
    edited.quick_exercises = vec!["Dip".to_string()];
    edited.theme.bg_color = Some("#101010".to_string());
    save_config_util(&path, &edited)?;
    assert_eq!(load_config_util(&path)?, edited);
    Ok(())
}

#[test]
fn test_config_missing_fields_use_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "default_reps = 3\n[theme]\nhint_color = \"Grey\"\n")?;

    let config = load_config_util(&path)?;
    assert_eq!(config.default_reps, 3);
    assert_eq!(config.time_format, "%H:%M");
    assert_eq!(config.quick_exercises.len(), 5);
    assert_eq!(config.theme.hint_color.as_deref(), Some("Grey"));
    Ok(())
}

#[test]
fn test_time_formatting() {
    let tz = FixedOffset::east_opt(0).expect("valid offset");
    let at = tz
        .with_ymd_and_hms(2026, 10, 19, 7, 5, 0)
        .single()
        .expect("valid time");
    assert_eq!(format_logged_at(&at, "%H:%M"), "07:05");
    assert_eq!(format_logged_at(&at, "%! broken"), "07:05");
    assert_eq!(today_label(&at), "Today • 19 Oct");
}
