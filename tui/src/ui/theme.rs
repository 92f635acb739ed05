use classifier::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Clinical teal theme.
///
/// - pale foreground on a dark slate background
/// - severity colors reserved for notices and field errors
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(12, 18, 24);
    pub const FG: Color = Color::Rgb(220, 232, 236);
    pub const FG_DIM: Color = Color::Rgb(130, 150, 160);
    pub const FG_MUTED: Color = Color::Rgb(70, 84, 92);

    pub const ACCENT_TEAL: Color = Color::Rgb(0, 200, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(255, 190, 60);
    pub const ACCENT_RED: Color = Color::Rgb(240, 80, 80);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Self::BG)
    }

    /// Border of the widget holding the focus.
    pub fn border_focus() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Focused row.
    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Color::Rgb(20, 48, 52))
            .add_modifier(Modifier::BOLD)
    }

    pub fn key() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn severity(severity: Severity) -> Style {
        let fg = match severity {
            Severity::Info => Self::ACCENT_TEAL,
            Severity::Warning => Self::ACCENT_AMBER,
            Severity::Error => Self::ACCENT_RED,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}
