use ratatui::style::{Color, Modifier, Style};

/// Slate/orange palette.
///
/// Base aesthetic:
/// - near-black slate background
/// - light text, muted slate chrome
/// - sky-blue data points and an orange fitted line
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(15, 23, 42);
    pub const TEXT: Color = Color::Rgb(226, 232, 240);
    pub const DIM: Color = Color::Rgb(148, 163, 184);
    pub const MUTED: Color = Color::Rgb(71, 85, 105);

    // Plot colors
    pub const POINT: Color = Color::Rgb(56, 189, 248);
    pub const FIT_LINE: Color = Color::Rgb(249, 115, 22);
    pub const TRUTH_LINE: Color = Color::Rgb(148, 163, 184);
    pub const RESIDUAL: Color = Color::Rgb(100, 116, 139);
    pub const LOSS: Color = Color::Rgb(249, 115, 22);

    // Status accents
    pub const RUNNING: Color = Color::Rgb(74, 222, 128);
    pub const PAUSED: Color = Color::Rgb(250, 204, 21);
    pub const IDLE: Color = Color::Rgb(34, 211, 238);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BG)
    }

    /// Panel borders.
    pub fn border() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Titles (bold).
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Regular text.
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Secondary text.
    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Disabled/labels.
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }
}
