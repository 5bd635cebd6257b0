// workout-log-tui/src/app/mod.rs
mod actions;
mod modals;
mod navigation;
pub mod state;

pub use state::{ActiveModal, App, DeleteField, EditEntryField, Focus};

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use workout_log_lib::{Config, WorkoutLog};

    fn test_app() -> App {
        App::new(WorkoutLog::with_config(Config::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .expect("key handled");
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_enter_logs_an_entry() {
        let mut app = test_app();
        type_text(&mut app, "Squat");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.log.entries().len(), 1);
        assert_eq!(app.log.entries()[0].exercise_name, "Squat");
        assert_eq!(app.log.form().exercise(), "");
        assert_eq!(app.entry_list_state.selected(), Some(0));
        assert!(app.status_message.is_some());
    }

    #[test]
    fn q_is_text_inside_exercise_input() {
        let mut app = test_app();
        type_text(&mut app, "q?");
        assert!(!app.should_quit);
        assert_eq!(app.active_modal, ActiveModal::None);
        assert_eq!(app.log.form().exercise(), "q?");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn enter_on_blank_form_logs_nothing() {
        let mut app = test_app();
        type_text(&mut app, "  ");
        press(&mut app, KeyCode::Enter);
        assert!(app.log.entries().is_empty());
    }

    #[test]
    fn chip_pick_fills_exercise() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Chips);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.log.form().exercise(), "Squat");
        assert_eq!(app.focus, Focus::Exercise);
    }

    #[test]
    fn steppers_respond_to_arrows() {
        let mut app = test_app();
        app.focus = Focus::Set;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.log.form().set_number(), 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.log.form().set_number(), 2);
        app.focus = Focus::Reps;
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.log.form().rep_count(), 9);
    }

    #[test]
    fn edit_sheet_saves_changes() {
        let mut app = test_app();
        type_text(&mut app, "Squat");
        press(&mut app, KeyCode::Enter);

        app.focus = Focus::Entries;
        press(&mut app, KeyCode::Char('e'));
        assert!(matches!(app.active_modal, ActiveModal::EditEntry { .. }));

        type_text(&mut app, "s");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_modal, ActiveModal::None);
        let entry = &app.log.entries()[0];
        assert_eq!(entry.exercise_name, "Squats");
        assert_eq!(entry.set_number, 2);
    }

    #[test]
    fn edit_sheet_blank_name_stays_open() {
        let mut app = test_app();
        type_text(&mut app, "Row");
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::Entries;
        press(&mut app, KeyCode::Enter);
        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert!(matches!(
            app.active_modal,
            ActiveModal::EditEntry {
                error_message: Some(_),
                ..
            }
        ));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.active_modal, ActiveModal::None);
        assert_eq!(app.log.entries()[0].exercise_name, "Row");
    }

    #[test]
    fn delete_sheet_defaults_to_cancel() {
        let mut app = test_app();
        type_text(&mut app, "Squat");
        press(&mut app, KeyCode::Enter);
        app.focus = Focus::Entries;

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.log.entries().len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.log.entries().is_empty());
        assert_eq!(app.entry_list_state.selected(), None);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = test_app();
        app.active_modal = ActiveModal::Help;
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .expect("key handled");
        assert!(app.should_quit);
    }
}
