//! Theme system for TUI colors and styles
//!
//! Color choices are consistent with the CLI output (commands/mod.rs).

use iocraft::prelude::Color;

use crate::types::{Priority, Status};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors (consistent with the CLI)
    pub status_open: Color,
    pub status_resolved: Color,
    pub status_closed: Color,

    // Priority colors
    pub priority_critical: Color,
    pub priority_high: Color,
    pub priority_default: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_open: Color::Yellow,
            status_resolved: Color::Green,
            status_closed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },

            priority_critical: Color::Red,
            priority_high: Color::Yellow,
            priority_default: Color::White,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Open => self.status_open,
            Status::Resolved => self.status_resolved,
            Status::Closed => self.status_closed,
        }
    }

    /// Get the color for a ticket priority
    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::Critical => self.priority_critical,
            Priority::High => self.priority_high,
            _ => self.priority_default,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
