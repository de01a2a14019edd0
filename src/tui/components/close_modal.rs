//! Close-with-comment modal
//!
//! Shown when the user closes a ticket from the list. The comment is
//! optional; Enter submits, Esc cancels without touching the backend.

use iocraft::prelude::*;

use super::modal::ModalOverlay;
use crate::tui::state::CloseModalData;
use crate::tui::theme::theme;

/// Props for the close-comment modal
#[derive(Default, Props)]
pub struct CloseCommentModalProps {
    /// The ticket being closed
    pub data: CloseModalData,
    /// State for the comment text
    pub comment: Option<State<String>>,
}

/// Modal prompting for an optional closing comment
#[component]
pub fn CloseCommentModal(props: &CloseCommentModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(mut comment) = props.comment else {
        return element!(View).into_any();
    };

    element! {
        ModalOverlay(title: format!("Close ticket #{}", props.data.ticket_id), width: 60u16) {
            Text(
                content: props.data.ticket_title.clone(),
                color: theme.text_dimmed,
            )
            View(height: 1)
            Text(content: "Closing comment (optional):", color: theme.text)
            View(
                border_style: BorderStyle::Single,
                border_color: theme.border_focused,
                padding_left: 1,
                padding_right: 1,
            ) {
                TextInput(
                    value: comment.to_string(),
                    has_focus: true,
                    on_change: move |new_value| comment.set(new_value),
                )
            }
            View(height: 1)
            Text(
                content: "Enter: close ticket    Esc: cancel",
                color: theme.text_dimmed,
            )
        }
    }
    .into_any()
}
