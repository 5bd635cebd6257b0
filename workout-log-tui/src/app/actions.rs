// workout-log-tui/src/app/actions.rs
use super::modals::{handle_delete_modal_input, handle_edit_modal_input};
use super::navigation::{chip_next, chip_previous, entry_list_next, entry_list_previous};
use super::state::{ActiveModal, App, DeleteField, EditEntryField, Focus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

// Make handle_key_event a method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }

        match key.code {
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => match self.focus {
                Focus::Exercise => self.handle_exercise_input(key),
                _ => self.handle_form_input(key),
            },
        }
        Ok(())
    }

    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                    self.active_modal = ActiveModal::None;
                }
                _ => {} // Ignore other keys in help
            },
            ActiveModal::EditEntry { .. } => handle_edit_modal_input(self, key),
            ActiveModal::ConfirmDelete { .. } => handle_delete_modal_input(self, key),
            ActiveModal::None => {}
        }
        Ok(())
    }

    // The exercise input swallows printable keys, so no single-letter shortcuts here
    fn handle_exercise_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.log.form_mut().push_char(c),
            KeyCode::Backspace => self.log.form_mut().pop_char(),
            KeyCode::Enter => self.submit_entry(),
            KeyCode::Down => self.focus = Focus::Chips,
            KeyCode::Up => self.focus = Focus::Entries,
            KeyCode::Esc => self.log.form_mut().clear_exercise(),
            _ => {}
        }
    }

    fn handle_form_input(&mut self, key: KeyEvent) {
        match (self.focus, key.code) {
            (_, KeyCode::Char('q')) => self.should_quit = true,
            (_, KeyCode::Char('?')) => self.active_modal = ActiveModal::Help,

            (Focus::Chips, KeyCode::Left | KeyCode::Char('h')) => chip_previous(self),
            (Focus::Chips, KeyCode::Right | KeyCode::Char('l')) => chip_next(self),
            (Focus::Chips, KeyCode::Enter | KeyCode::Char(' ')) => {
                if self.log.pick_quick_exercise(self.chip_index) {
                    self.focus = Focus::Exercise;
                }
            }

            (Focus::Set, KeyCode::Left | KeyCode::Char('-')) => self.log.form_mut().decrement_set(),
            (Focus::Set, KeyCode::Right | KeyCode::Char('+')) => {
                self.log.form_mut().increment_set();
            }
            (Focus::Reps, KeyCode::Left | KeyCode::Char('-')) => {
                self.log.form_mut().decrement_reps();
            }
            (Focus::Reps, KeyCode::Right | KeyCode::Char('+')) => {
                self.log.form_mut().increment_reps();
            }
            (Focus::Set | Focus::Reps, KeyCode::Enter) => self.submit_entry(),
            (Focus::AddButton, KeyCode::Enter | KeyCode::Char(' ')) => self.submit_entry(),

            (Focus::Entries, KeyCode::Char('k') | KeyCode::Up) => entry_list_previous(self),
            (Focus::Entries, KeyCode::Char('j') | KeyCode::Down) => entry_list_next(self),
            (Focus::Entries, KeyCode::Char('e') | KeyCode::Enter) => self.open_edit_modal(),
            (Focus::Entries, KeyCode::Char('d') | KeyCode::Delete) => self.open_delete_modal(),

            (_, KeyCode::Down) => self.focus = self.focus.next(),
            (_, KeyCode::Up) => self.focus = self.focus.previous(),
            (_, KeyCode::Esc) => self.focus = Focus::Exercise,
            _ => {}
        }
    }

    fn submit_entry(&mut self) {
        match self.log.submit() {
            Ok(entry) => {
                self.entry_list_state.select(Some(0));
                self.set_status(format!("Logged {}", entry.summary()));
            }
            Err(e) => {
                // Disabled button: nothing is logged, just say why
                debug!(error = %e, "submit ignored");
                self.set_status(e.to_string());
            }
        }
    }

    fn open_edit_modal(&mut self) {
        let Some(id) = self.selected_entry_id() else {
            return;
        };
        match self.log.open_edit(id) {
            Ok(()) => {
                self.active_modal = ActiveModal::EditEntry {
                    focused_field: EditEntryField::Exercise,
                    error_message: None,
                };
            }
            Err(e) => {
                debug!(error = %e, "edit sheet not opened");
                self.clamp_entry_selection();
            }
        }
    }

    fn open_delete_modal(&mut self) {
        let Some(id) = self.selected_entry_id() else {
            return;
        };
        self.log.open_delete(id);
        self.active_modal = ActiveModal::ConfirmDelete {
            focused_field: DeleteField::Cancel,
        };
    }
}
