// workout-log-tui/src/app/modals.rs
use super::state::{ActiveModal, App, DeleteField, EditEntryField};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;
use workout_log_lib::EntryError;

// --- Edit sheet ---

pub fn handle_edit_modal_input(app: &mut App, key: KeyEvent) {
    let ActiveModal::EditEntry { focused_field, .. } = app.active_modal else {
        return;
    };
    // Always clear error on any input
    if let ActiveModal::EditEntry { error_message, .. } = &mut app.active_modal {
        *error_message = None;
    }

    if key.code == KeyCode::Esc {
        close_edit(app);
        return;
    }

    let mut next_focus = focused_field;
    match key.code {
        KeyCode::Tab | KeyCode::Down => next_focus = focused_field.next(),
        KeyCode::BackTab | KeyCode::Up => next_focus = focused_field.previous(),
        KeyCode::Enter => match focused_field {
            EditEntryField::Cancel => {
                close_edit(app);
                return;
            }
            _ => {
                submit_edit(app);
                return;
            }
        },
        code => {
            let Some(scratch) = app.log.edit_scratch_mut() else {
                // Workflow closed underneath the sheet
                app.active_modal = ActiveModal::None;
                return;
            };
            match (focused_field, code) {
                (EditEntryField::Exercise, KeyCode::Char(c)) => scratch.exercise.push(c),
                (EditEntryField::Exercise, KeyCode::Backspace) => {
                    scratch.exercise.pop();
                }
                (EditEntryField::Set, KeyCode::Left | KeyCode::Char('-')) => {
                    scratch.decrement_set();
                }
                (EditEntryField::Set, KeyCode::Right | KeyCode::Char('+')) => {
                    scratch.increment_set();
                }
                (EditEntryField::Reps, KeyCode::Left | KeyCode::Char('-')) => {
                    scratch.decrement_reps();
                }
                (EditEntryField::Reps, KeyCode::Right | KeyCode::Char('+')) => {
                    scratch.increment_reps();
                }
                (EditEntryField::Cancel, KeyCode::Right) => next_focus = EditEntryField::Save,
                (EditEntryField::Save, KeyCode::Left) => next_focus = EditEntryField::Cancel,
                _ => {}
            }
        }
    }

    if let ActiveModal::EditEntry {
        ref mut focused_field,
        ..
    } = app.active_modal
    {
        *focused_field = next_focus;
    }
}

fn submit_edit(app: &mut App) {
    match app.log.save_edit() {
        Ok(entry) => {
            app.active_modal = ActiveModal::None;
            app.set_status(format!("Updated {}", entry.summary()));
        }
        Err(EntryError::EmptyName) => {
            // Save is disabled until the name is filled in
            if let ActiveModal::EditEntry {
                ref mut error_message,
                ref mut focused_field,
            } = app.active_modal
            {
                *error_message = Some(EntryError::EmptyName.to_string());
                *focused_field = EditEntryField::Exercise;
            }
        }
        Err(e) => {
            debug!(error = %e, "edit not saved");
            app.active_modal = ActiveModal::None;
            app.clamp_entry_selection();
            app.set_status("Entry no longer exists.".to_string());
        }
    }
}

fn close_edit(app: &mut App) {
    app.log.cancel_edit();
    app.active_modal = ActiveModal::None;
}

// --- Delete sheet ---

pub fn handle_delete_modal_input(app: &mut App, key: KeyEvent) {
    let ActiveModal::ConfirmDelete { focused_field } = app.active_modal else {
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('n') => close_delete(app),
        KeyCode::Char('y') => confirm_delete(app),
        KeyCode::Enter | KeyCode::Char(' ') => match focused_field {
            DeleteField::Cancel => close_delete(app),
            DeleteField::Delete => confirm_delete(app),
        },
        KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h')
        | KeyCode::Char('l') => {
            let toggled = match focused_field {
                DeleteField::Cancel => DeleteField::Delete,
                DeleteField::Delete => DeleteField::Cancel,
            };
            app.active_modal = ActiveModal::ConfirmDelete {
                focused_field: toggled,
            };
        }
        _ => {}
    }
}

fn confirm_delete(app: &mut App) {
    match app.log.confirm_delete() {
        Some(entry) => app.set_status(format!("Deleted {}", entry.summary())),
        None => debug!("delete confirmed but entry was already gone"),
    }
    app.active_modal = ActiveModal::None;
    app.clamp_entry_selection();
}

fn close_delete(app: &mut App) {
    app.log.cancel_delete();
    app.active_modal = ActiveModal::None;
}
