//! Ticket list pane
//!
//! Scrollable list with one row per ticket. The selected row additionally
//! shows the ticket's description and closing comment.

use iocraft::prelude::*;

use super::empty_state::EmptyState;
use crate::tui::theme::theme;
use crate::types::Ticket;

/// Props for the TicketList component
#[derive(Default, Props)]
pub struct TicketListProps {
    /// Tickets in backend order
    pub tickets: Vec<Ticket>,
    /// Index of the selected row
    pub selected: usize,
    /// Whether the list pane has focus
    pub has_focus: bool,
    /// Whether any filter is constraining the list (for the empty state)
    pub filtered: bool,
}

/// Bordered list of tickets with an inline detail view for the selection
#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let selected = props.selected.min(props.tickets.len().saturating_sub(1));

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            #(if props.tickets.is_empty() {
                Some(element! { EmptyState(filtered: props.filtered) })
            } else {
                None
            })
            #(props.tickets.iter().enumerate().map(|(idx, ticket)| {
                let is_selected = idx == selected;
                element! {
                    TicketRow(
                        ticket: ticket.clone(),
                        selected: is_selected,
                        expanded: is_selected,
                    )
                }
            }))
        }
    }
}

/// Props for a single ticket row
#[derive(Default, Props)]
pub struct TicketRowProps {
    pub ticket: Option<Ticket>,
    pub selected: bool,
    /// Show description and comment under the summary line
    pub expanded: bool,
}

/// One ticket in the list
#[component]
pub fn TicketRow(props: &TicketRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.clone() else {
        return element!(View).into_any();
    };

    let marker = if props.selected { "▶ " } else { "  " };
    // Resolved and closed tickets read as settled; their titles are dimmed
    // unless selected.
    let title_color = if props.selected {
        theme.highlight
    } else if ticket.status.is_terminal() {
        theme.text_dimmed
    } else {
        theme.text
    };

    element! {
        View(flex_direction: FlexDirection::Column) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(content: marker, color: theme.highlight)
                Text(content: format!("#{}", ticket.id), color: theme.id_color)
                Text(
                    content: ticket.title.clone(),
                    color: title_color,
                    weight: if props.selected { Weight::Bold } else { Weight::Normal },
                )
                Text(
                    content: format!("[{}]", ticket.category),
                    color: theme.text_dimmed,
                )
                Text(
                    content: ticket.priority.to_string(),
                    color: theme.priority_color(ticket.priority),
                )
                Text(
                    content: ticket.status.to_string(),
                    color: theme.status_color(ticket.status),
                )
            }
            #(if props.expanded {
                let comment = ticket.comment.clone();
                Some(element! {
                    View(flex_direction: FlexDirection::Column, padding_left: 4) {
                        Text(
                            content: ticket.description.clone(),
                            color: theme.text_dimmed,
                        )
                        #(comment.map(|c| element! {
                            Text(
                                content: format!("closing comment: {c}"),
                                color: theme.text_dimmed,
                            )
                        }))
                    }
                })
            } else {
                None
            })
        }
    }
    .into_any()
}
