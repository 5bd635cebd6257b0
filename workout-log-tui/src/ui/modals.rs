// workout-log-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, App, DeleteField, EditEntryField},
    ui::{
        layout::{bottom_sheet_rect, centered_rect},
        log_screen::cursor_offset,
        theme::focus_style,
    },
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f, app),
        ActiveModal::EditEntry { .. } => render_edit_modal(f, app),
        ActiveModal::ConfirmDelete { .. } => render_delete_modal(f, app),
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

// Area above the status bar
fn sheet_area(f: &Frame) -> Rect {
    let size = f.size();
    Rect {
        height: size.height.saturating_sub(1),
        ..size
    }
}

fn render_sheet(f: &mut Frame, app: &App, title: &str, height: u16) -> Rect {
    let area = bottom_sheet_rect(height, sheet_area(f));
    let block = Block::default()
        .title(Span::styled(title.to_string(), Style::new().bold()))
        .borders(Borders::ALL)
        .border_style(app.colors.border(true))
        .style(app.colors.surface());
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    })
}

fn button_row(left: Paragraph<'static>, right: Paragraph<'static>, f: &mut Frame, area: Rect) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    f.render_widget(left, buttons[0]);
    f.render_widget(right, buttons[1]);
}

fn render_help_modal(f: &mut Frame, app: &App) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(app.colors.border(true))
        .style(app.colors.surface());
    let area = centered_rect(70, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Global ---").style(Style::new().bold().underlined()),
        Line::from(" Tab / Shift-Tab: Move Focus"),
        Line::from(" q: Quit (outside the exercise input)"),
        Line::from(" Ctrl-C: Quit"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(""),
        Line::from("--- Add Entry ---").style(Style::new().bold().underlined()),
        Line::from(" Type: Exercise name (Esc clears)"),
        Line::from(" ← / →: Pick quick exercise, or step Set / Reps"),
        Line::from(" - / +: Step Set / Reps"),
        Line::from(" Enter: Add entry (repeat the same exercise to count sets up)"),
        Line::from(""),
        Line::from("--- Entries ---").style(Style::new().bold().underlined()),
        Line::from(" k / ↑, j / ↓: Navigate"),
        Line::from(" e / Enter: Edit selected entry"),
        Line::from(" d / Delete: Delete selected entry"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn render_edit_modal(f: &mut Frame, app: &App) {
    let ActiveModal::EditEntry {
        focused_field,
        error_message,
    } = &app.active_modal
    else {
        return;
    };
    let Some(scratch) = app.log.edit().scratch() else {
        return;
    };
    let colors = &app.colors;
    let inner = render_sheet(f, app, "Edit entry", 12);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Exercise label
            Constraint::Length(1), // Exercise input
            Constraint::Length(1),
            Constraint::Length(1), // Set / Reps labels
            Constraint::Length(1), // Steppers
            Constraint::Length(1),
            Constraint::Length(1), // Buttons
            Constraint::Length(1),
            Constraint::Length(1), // Error
        ])
        .split(inner);

    f.render_widget(Paragraph::new("Exercise").style(colors.hint()), rows[0]);
    let name_focused = *focused_field == EditEntryField::Exercise;
    f.render_widget(
        Paragraph::new(scratch.exercise.as_str())
            .style(focus_style(Style::default(), name_focused)),
        rows[1],
    );

    let halves = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let labels = halves(rows[3]);
    f.render_widget(Paragraph::new("Set").style(colors.hint()), labels[0]);
    f.render_widget(Paragraph::new("Reps").style(colors.hint()), labels[1]);

    let steppers = halves(rows[4]);
    f.render_widget(
        Paragraph::new(format!("[−]  {:^4}  [+]", scratch.set_number)).style(focus_style(
            Style::default().bold(),
            *focused_field == EditEntryField::Set,
        )),
        steppers[0],
    );
    f.render_widget(
        Paragraph::new(format!("[−]  {:^4}  [+]", scratch.rep_count)).style(focus_style(
            Style::default().bold(),
            *focused_field == EditEntryField::Reps,
        )),
        steppers[1],
    );

    let cancel = Paragraph::new("Cancel")
        .alignment(Alignment::Center)
        .style(colors.ghost_button(*focused_field == EditEntryField::Cancel));
    let save = Paragraph::new("Save")
        .alignment(Alignment::Center)
        .style(colors.primary_button(
            app.log.edit().can_save(),
            *focused_field == EditEntryField::Save,
        ));
    button_row(cancel, save, f, rows[6]);

    if let Some(err) = error_message {
        f.render_widget(
            Paragraph::new(err.as_str()).style(Style::default().fg(colors.danger)),
            rows[8],
        );
    }

    if name_focused {
        f.set_cursor(rows[1].x + cursor_offset(&scratch.exercise, rows[1]), rows[1].y);
    }
}

fn render_delete_modal(f: &mut Frame, app: &App) {
    let ActiveModal::ConfirmDelete { focused_field } = &app.active_modal else {
        return;
    };
    let inner = render_sheet(f, app, "Delete entry?", 7);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Length(1),
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(app.log.delete_prompt())
            .style(app.colors.hint())
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let cancel = Paragraph::new("Cancel")
        .alignment(Alignment::Center)
        .style(app.colors.ghost_button(*focused_field == DeleteField::Cancel));
    let delete = Paragraph::new("Delete")
        .alignment(Alignment::Center)
        .style(app.colors.danger_button(*focused_field == DeleteField::Delete));
    button_row(cancel, delete, f, rows[2]);
}
