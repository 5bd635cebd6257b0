// workout-log-tui/src/ui/status_bar.rs
use crate::app::{ActiveModal, App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

fn key_hints(app: &App) -> &'static str {
    match app.active_modal {
        ActiveModal::None => match app.focus {
            Focus::Exercise => " [Type] Exercise | [Enter] Add | [Tab] Focus | [Esc] Clear ",
            Focus::Chips => " [←→] Pick | [Enter] Use | [Tab] Focus | [?] Help | [q]uit ",
            Focus::Set | Focus::Reps => " [←→/-+] Adjust | [Enter] Add | [Tab] Focus | [?] Help | [q]uit ",
            Focus::AddButton => " [Enter] Add | [Tab] Focus | [?] Help | [q]uit ",
            Focus::Entries => " [↑↓/jk] Nav | [e]dit | [d]elete | [Tab] Focus | [?] Help | [q]uit ",
        },
        ActiveModal::Help => " [Esc/Enter/?] Close Help ",
        ActiveModal::EditEntry { .. } => {
            " [Esc] Cancel | [Enter] Save | [Tab/↑↓] Navigate | [←→] Adjust "
        }
        ActiveModal::ConfirmDelete { .. } => " [y] Delete | [n/Esc] Cancel | [←→] Choose ",
    }
}

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let bar = Style::default().bg(app.colors.surface).fg(app.colors.hint);
    f.render_widget(Paragraph::new(key_hints(app)).style(bar), status_chunks[0]);

    let message = app.status_message.as_deref().unwrap_or("");
    f.render_widget(
        Paragraph::new(message)
            .style(bar.fg(app.colors.text))
            .alignment(Alignment::Right),
        status_chunks[1],
    );
}
