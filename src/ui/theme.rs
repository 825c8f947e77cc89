//! Color themes for the UI.

use ratatui::style::Color;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Title text color.
    pub heading: Color,
    /// Directory name color.
    pub directory: Color,
    /// Dimmed text (subtitle, placeholder).
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Selection bar foreground color.
    pub cursor_fg: Color,
    /// Selection bar background color.
    pub cursor_bg: Color,
    /// Action bar foreground color.
    pub bar_fg: Color,
    /// Action bar background color.
    pub bar_bg: Color,
    /// Key hint color on the action bar.
    pub hint: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                directory: Color::Rgb(131, 165, 152),
                muted: Color::Rgb(146, 131, 116),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                bar_fg: Color::Rgb(235, 219, 178),
                bar_bg: Color::Rgb(60, 56, 54),
                hint: Color::Rgb(184, 187, 38),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                directory: Color::Rgb(7, 102, 120),
                muted: Color::Rgb(124, 111, 100),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                bar_fg: Color::Rgb(60, 56, 54),
                bar_bg: Color::Rgb(235, 219, 178),
                hint: Color::Rgb(121, 116, 14),
            },
        }
    }
}
