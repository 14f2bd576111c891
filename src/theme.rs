//! Centralized palette for the desktop surface and chrome, switched by the
//! shell-wide light/dark setting.

use ratatui::style::Color;

/// Global presentation theme, stored in the shell settings and toggled from
/// the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

pub fn desktop_bg(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::White,
        Theme::Dark => Color::Black,
    }
}

pub fn window_bg(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Gray,
        Theme::Dark => Color::Reset,
    }
}

pub fn header_bg(theme: Theme, focused: bool) -> Color {
    match (theme, focused) {
        (_, true) => Color::Blue,
        (Theme::Light, false) => Color::Gray,
        (Theme::Dark, false) => Color::DarkGray,
    }
}

pub fn header_fg(theme: Theme, focused: bool) -> Color {
    match (theme, focused) {
        (_, true) => Color::White,
        (Theme::Light, false) => Color::Black,
        (Theme::Dark, false) => Color::White,
    }
}

pub fn border_fg(theme: Theme, focused: bool) -> Color {
    match (theme, focused) {
        (_, true) => Color::Blue,
        (Theme::Light, false) => Color::DarkGray,
        (Theme::Dark, false) => Color::DarkGray,
    }
}

// Panel / taskbar
pub fn panel_bg(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Gray,
        Theme::Dark => Color::DarkGray,
    }
}

pub fn panel_fg(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Black,
        Theme::Dark => Color::White,
    }
}

pub fn panel_inactive_fg(_theme: Theme) -> Color {
    Color::DarkGray
}

// Launcher menu
pub fn menu_bg(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Gray,
        Theme::Dark => Color::DarkGray,
    }
}

pub fn menu_fg(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Black,
        Theme::Dark => Color::White,
    }
}

pub fn menu_selected_bg(_theme: Theme) -> Color {
    Color::Blue
}

pub fn menu_selected_fg(_theme: Theme) -> Color {
    Color::White
}

// Marquee selection overlay
pub fn selection_fill(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::LightBlue,
        Theme::Dark => Color::Blue,
    }
}
