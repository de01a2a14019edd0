//! Empty state for the ticket list

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// Whether any filter is currently constraining the list
    pub filtered: bool,
}

/// Placeholder shown when the list has no tickets
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let message = if props.filtered {
        "No tickets match the current filters"
    } else {
        "No tickets yet. Press 'n' to create one."
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
        ) {
            Text(content: message, color: theme.text_dimmed)
        }
    }
}
