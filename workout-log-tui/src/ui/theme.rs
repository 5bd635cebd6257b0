// workout-log-tui/src/ui/theme.rs
use ratatui::style::{Color, Modifier, Style};
use workout_log_lib::{Palette, StandardColor, ThemeColor};

// Helper to convert the library colour to a terminal colour
fn to_color(value: ThemeColor) -> Color {
    match value {
        ThemeColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
        ThemeColor::Named(named) => match named {
            StandardColor::Black => Color::Black,
            StandardColor::Red => Color::LightRed,
            StandardColor::Green => Color::LightGreen,
            StandardColor::Yellow => Color::LightYellow,
            StandardColor::Blue => Color::LightBlue,
            StandardColor::Magenta => Color::LightMagenta,
            StandardColor::Cyan => Color::LightCyan,
            StandardColor::White => Color::White,
            StandardColor::DarkGrey => Color::DarkGray,
            StandardColor::DarkRed => Color::Red,
            StandardColor::DarkGreen => Color::Green,
            StandardColor::DarkYellow => Color::Yellow,
            StandardColor::DarkBlue => Color::Blue,
            StandardColor::DarkMagenta => Color::Magenta,
            StandardColor::DarkCyan => Color::Cyan,
            StandardColor::Grey => Color::Gray,
        },
    }
}

/// Terminal colours resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiColors {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub hint: Color,
    pub button: Color,
    pub button_text: Color,
    pub danger: Color,
}

impl UiColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            bg: to_color(palette.bg),
            surface: to_color(palette.secondary_bg),
            text: to_color(palette.text),
            hint: to_color(palette.hint),
            button: to_color(palette.button),
            button_text: to_color(palette.button_text),
            danger: to_color(palette.destructive),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.hint)
    }

    pub fn primary_button(&self, enabled: bool, focused: bool) -> Style {
        let style = if enabled {
            Style::default().fg(self.button_text).bg(self.button)
        } else {
            Style::default().fg(self.hint).bg(self.surface)
        };
        focus_style(style.add_modifier(Modifier::BOLD), focused)
    }

    pub fn ghost_button(&self, focused: bool) -> Style {
        focus_style(self.surface().add_modifier(Modifier::BOLD), focused)
    }

    pub fn danger_button(&self, focused: bool) -> Style {
        focus_style(
            Style::default()
                .fg(Color::White)
                .bg(self.danger)
                .add_modifier(Modifier::BOLD),
            focused,
        )
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.button)
        } else {
            Style::default().fg(self.hint)
        }
    }
}

pub fn focus_style(style: Style, focused: bool) -> Style {
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}
