// workout-log-tui/src/ui/log_screen.rs
use crate::{
    app::{App, Focus},
    ui::theme::focus_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const EXERCISE_PLACEHOLDER: &str = "e.g., Bench Press";

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from("Workout Log").bold(),
        Line::from(Span::styled(app.log.today_label(), app.colors.hint())),
    ];
    f.render_widget(Paragraph::new(lines).style(app.colors.base()), area);
}

pub fn render_add_card(f: &mut Frame, app: &App, area: Rect) {
    let colors = &app.colors;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(colors.border(app.focus != Focus::Entries))
        .style(colors.surface());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Exercise label
            Constraint::Length(1), // Exercise input
            Constraint::Length(1), // Quick exercises
            Constraint::Length(1),
            Constraint::Length(1), // Set / Reps labels
            Constraint::Length(1), // Steppers
            Constraint::Length(1),
            Constraint::Length(1), // Add button
        ])
        .split(inner);

    f.render_widget(Paragraph::new("Exercise").style(colors.hint()), rows[0]);

    let form = app.log.form();
    let exercise_focused = app.focus == Focus::Exercise;
    let (text, style) = if form.exercise().is_empty() && !exercise_focused {
        (EXERCISE_PLACEHOLDER, colors.hint())
    } else {
        (form.exercise(), Style::default())
    };
    f.render_widget(
        Paragraph::new(text).style(focus_style(style, exercise_focused)),
        rows[1],
    );
    if exercise_focused {
        f.set_cursor(rows[1].x + cursor_offset(form.exercise(), rows[1]), rows[1].y);
    }

    render_quick_exercises(f, app, rows[2]);

    let columns = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let labels = columns(rows[4]);
    f.render_widget(Paragraph::new("Set").style(colors.hint()), labels[0]);
    f.render_widget(Paragraph::new("Reps").style(colors.hint()), labels[1]);

    let steppers = columns(rows[5]);
    f.render_widget(
        stepper(form.set_number(), app.focus == Focus::Set),
        steppers[0],
    );
    f.render_widget(
        stepper(form.rep_count(), app.focus == Focus::Reps),
        steppers[1],
    );

    let button = Paragraph::new("Add Entry")
        .alignment(Alignment::Center)
        .style(colors.primary_button(app.log.can_submit(), app.focus == Focus::AddButton));
    f.render_widget(button, rows[7]);
}

fn render_quick_exercises(f: &mut Frame, app: &App, area: Rect) {
    let chips_focused = app.focus == Focus::Chips;
    let mut spans = Vec::new();
    for (i, name) in app.log.config.quick_exercises.iter().enumerate() {
        let selected = chips_focused && i == app.chip_index;
        spans.push(Span::styled(
            format!("[{name}]"),
            focus_style(app.colors.hint(), selected),
        ));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

// Column of the text cursor inside `area`, kept on the last cell for long input
pub fn cursor_offset(text: &str, area: Rect) -> u16 {
    let max = usize::from(area.width.saturating_sub(1));
    u16::try_from(text.chars().count().min(max)).unwrap_or(0)
}

fn stepper(value: u32, focused: bool) -> Paragraph<'static> {
    Paragraph::new(format!("[−]  {value:^4}  [+]"))
        .style(focus_style(Style::default().add_modifier(Modifier::BOLD), focused))
}

pub fn render_entries(f: &mut Frame, app: &mut App, area: Rect) {
    let colors = app.colors;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("ENTRIES", colors.hint()))
        .border_style(colors.border(app.focus == Focus::Entries))
        .style(colors.surface());

    if app.log.entries().is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let empty = Paragraph::new(vec![
            Line::from("🏋️"),
            Line::from(Span::styled(
                "No entries yet. Add your first set above.",
                colors.hint(),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return;
    }

    let items: Vec<ListItem> = app
        .log
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(entry.exercise_name.as_str()).bold(),
                Line::from(Span::styled(entry.detail_line(), colors.hint())),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.entry_list_state);
}
