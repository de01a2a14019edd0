//! Delete confirmation modal
//!
//! Deletion is destructive and irreversible on the backend, so it always
//! goes through this confirmation. Only `y` proceeds.

use iocraft::prelude::*;

use super::modal::ModalOverlay;
use crate::tui::state::ConfirmDeleteData;
use crate::tui::theme::theme;

/// Props for the delete confirmation modal
#[derive(Default, Props)]
pub struct DeleteConfirmModalProps {
    /// The ticket pending deletion
    pub data: ConfirmDeleteData,
}

/// Modal asking the user to confirm a ticket deletion
#[component]
pub fn DeleteConfirmModal(props: &DeleteConfirmModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        ModalOverlay(title: "Delete ticket?".to_string(), width: 54u16) {
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: format!("#{}", props.data.ticket_id),
                    color: theme.id_color,
                )
                Text(content: props.data.ticket_title.clone(), color: theme.text)
            }
            View(height: 1)
            Text(content: "This cannot be undone.", color: Color::Red)
            View(height: 1)
            Text(
                content: "y: delete    any other key: cancel",
                color: theme.text_dimmed,
            )
        }
    }
}
