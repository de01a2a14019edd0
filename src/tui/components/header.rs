//! Application header bar

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Backend URL shown for orientation
    pub backend_url: String,
}

/// Title bar at the top of the screen
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.border,
        ) {
            Text(
                content: "triage",
                color: theme.highlight,
                weight: Weight::Bold,
            )
            Text(content: props.backend_url.clone(), color: theme.text_dimmed)
        }
    }
}
