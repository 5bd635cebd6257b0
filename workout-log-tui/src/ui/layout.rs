// workout-log-tui/src/ui/layout.rs
use crate::{
    app::{ActiveModal, App},
    ui::{
        log_screen::{render_add_card, render_entries, render_header},
        modals::render_modal,
        status_bar::render_status_bar,
    },
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

// Content never stretches past this width, like a phone-sized column
const MAX_CONTENT_WIDTH: u16 = 64;

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();
    f.render_widget(Block::default().style(app.colors.base()), size);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    let column = content_column(main_chunks[0]);
    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Length(10), // Add entry card
            Constraint::Length(1),  // Spacer
            Constraint::Min(3),     // Entries
        ])
        .split(column);

    render_header(f, app, content_chunks[0]);
    render_add_card(f, app, content_chunks[1]);
    render_entries(f, app, content_chunks[3]);
    render_status_bar(f, app, main_chunks[1]);

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

fn content_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Sheet anchored to the bottom edge of `r`, `height` rows tall, same
/// width as the content column.
pub fn bottom_sheet_rect(height: u16, r: Rect) -> Rect {
    let column = content_column(r);
    let height = height.min(column.height);
    Rect {
        y: column.y + column.height - height,
        height,
        ..column
    }
}
