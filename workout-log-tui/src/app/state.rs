// workout-log-tui/src/app/state.rs
use crate::ui::theme::UiColors;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use workout_log_lib::{EntryId, WorkoutLog};

const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

// Which part of the main screen receives keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Exercise,
    Chips,
    Set,
    Reps,
    AddButton,
    Entries,
}

impl Focus {
    pub const fn next(self) -> Self {
        match self {
            Self::Exercise => Self::Chips,
            Self::Chips => Self::Set,
            Self::Set => Self::Reps,
            Self::Reps => Self::AddButton,
            Self::AddButton => Self::Entries,
            Self::Entries => Self::Exercise,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Exercise => Self::Entries,
            Self::Chips => Self::Exercise,
            Self::Set => Self::Chips,
            Self::Reps => Self::Set,
            Self::AddButton => Self::Reps,
            Self::Entries => Self::AddButton,
        }
    }
}

// Fields within the Edit entry sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditEntryField {
    Exercise,
    Set,
    Reps,
    Cancel,
    Save,
}

impl EditEntryField {
    pub const fn next(self) -> Self {
        match self {
            Self::Exercise => Self::Set,
            Self::Set => Self::Reps,
            Self::Reps => Self::Cancel,
            Self::Cancel => Self::Save,
            Self::Save => Self::Exercise,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Exercise => Self::Save,
            Self::Set => Self::Exercise,
            Self::Reps => Self::Set,
            Self::Cancel => Self::Reps,
            Self::Save => Self::Cancel,
        }
    }
}

// Buttons within the Delete entry sheet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteField {
    Cancel,
    Delete,
}

// Represents the state of active modals. Field values of the edit sheet live
// in the library's edit workflow; only UI focus is kept here.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    EditEntry {
        focused_field: EditEntryField,
        error_message: Option<String>,
    },
    ConfirmDelete {
        focused_field: DeleteField,
    },
}

// Holds the application state
pub struct App {
    pub log: WorkoutLog, // The core session from the library
    pub colors: UiColors,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub focus: Focus,
    pub chip_index: usize,
    pub entry_list_state: ListState,
    pub status_message: Option<String>,
    status_clear_time: Option<Instant>,
}

impl App {
    pub fn new(log: WorkoutLog) -> Self {
        let colors = UiColors::from_palette(&log.palette());
        Self {
            log,
            colors,
            should_quit: false,
            active_modal: ActiveModal::None,
            focus: Focus::Exercise,
            chip_index: 0,
            entry_list_state: ListState::default(),
            status_message: None,
            status_clear_time: None,
        }
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some(msg);
        self.status_clear_time = Some(Instant::now() + STATUS_TIMEOUT);
    }

    // Called once per frame from the event loop
    pub fn clear_expired_status(&mut self) {
        if let Some(clear_time) = self.status_clear_time {
            if Instant::now() >= clear_time {
                self.status_message = None;
                self.status_clear_time = None;
            }
        }
    }

    pub fn selected_entry_id(&self) -> Option<EntryId> {
        self.entry_list_state
            .selected()
            .and_then(|i| self.log.entries().get(i))
            .map(|e| e.id())
    }

    // Keeps the list selection inside the current entry count
    pub fn clamp_entry_selection(&mut self) {
        let len = self.log.entries().len();
        match self.entry_list_state.selected() {
            _ if len == 0 => self.entry_list_state.select(None),
            Some(i) if i >= len => self.entry_list_state.select(Some(len - 1)),
            None => self.entry_list_state.select(Some(0)),
            Some(_) => {}
        }
    }
}
