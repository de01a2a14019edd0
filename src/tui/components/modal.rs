//! Modal overlay and container
//!
//! A modal is rendered as an absolutely-positioned layer covering the
//! whole screen, with a centered bordered box holding the content.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    /// Title shown in the modal border
    pub title: String,
    /// Fixed width of the modal box
    pub width: u16,
    /// Content to render inside the modal
    pub children: Vec<AnyElement<'a>>,
}

/// Full-screen overlay with a centered, titled modal box
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    element! {
        View(
            position: Position::Absolute,
            top: 0,
            left: 0,
            width: 100pct,
            height: 100pct,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
        ) {
            View(
                width: props.width,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                background_color: Color::Black,
                padding: 1,
            ) {
                Text(
                    content: props.title.clone(),
                    color: theme.highlight,
                    weight: Weight::Bold,
                )
                View(height: 1)
                #(std::mem::take(&mut props.children))
            }
        }
    }
}
