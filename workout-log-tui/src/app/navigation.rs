// workout-log-tui/src/app/navigation.rs
use super::state::App;
use ratatui::widgets::ListState;

fn list_next(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

fn list_previous(state: &mut ListState, list_len: usize) {
    if list_len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) => list_len - 1,
        Some(i) => i - 1,
        None => list_len - 1,
    };
    state.select(Some(i));
}

pub fn entry_list_next(app: &mut App) {
    let len = app.log.entries().len();
    list_next(&mut app.entry_list_state, len);
}

pub fn entry_list_previous(app: &mut App) {
    let len = app.log.entries().len();
    list_previous(&mut app.entry_list_state, len);
}

pub fn chip_next(app: &mut App) {
    let len = app.log.config.quick_exercises.len();
    if len > 0 {
        app.chip_index = (app.chip_index + 1) % len;
    }
}

pub fn chip_previous(app: &mut App) {
    let len = app.log.config.quick_exercises.len();
    if len > 0 {
        app.chip_index = (app.chip_index + len - 1) % len;
    }
}
