//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Ctrl+S", "Tab")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Submit", "Next field")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the ticket list pane
pub fn list_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Navigate"),
        Shortcut::new("r", "Resolve"),
        Shortcut::new("c", "Close"),
        Shortcut::new("d", "Delete"),
        Shortcut::new("n", "New Ticket"),
        Shortcut::new("/", "Search"),
        Shortcut::new("R", "Refresh"),
        Shortcut::new("Tab", "Next Field"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts shown while a form field has focus
pub fn form_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Tab", "Next Field"),
        Shortcut::new("S-Tab", "Prev Field"),
        Shortcut::new("←/→", "Cycle Value"),
        Shortcut::new("C-s", "Submit"),
        Shortcut::new("Esc", "Back to List"),
    ]
}

/// Shortcuts for the close-comment modal
pub fn close_modal_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Close Ticket"),
        Shortcut::new("Esc", "Cancel"),
    ]
}

/// Shortcuts for the delete confirmation modal
pub fn confirm_delete_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("y", "Delete"),
        Shortcut::new("any key", "Cancel"),
    ]
}
