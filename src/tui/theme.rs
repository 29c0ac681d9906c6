//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Role colors
    pub role_admin: Color,
    pub role_member: Color,
    pub role_other: Color,

    // Row states
    pub checked: Color,
    pub checked_background: Color,
    pub draft: Color,
    pub danger: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            role_admin: Color::Magenta,
            role_member: Color::Cyan,
            role_other: Color::White,

            checked: Color::Green,
            checked_background: Color::Rgb {
                r: 40,
                g: 60,
                b: 40,
            },
            draft: Color::Yellow,
            danger: Color::Red,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a member role
    pub fn role_color(&self, role: &str) -> Color {
        if unicase::eq(role, "admin") {
            self.role_admin
        } else if unicase::eq(role, "member") {
            self.role_member
        } else {
            self.role_other
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
