//! Ticket creation form
//!
//! Title and description inputs plus category/priority selectors. While a
//! classification request is pending, the selectors show a hint; accepted
//! suggestions land directly in the selector values.

use iocraft::prelude::*;

use super::select::{Select, Selectable};
use crate::tui::state::{CreateFormData, FocusSlot};
use crate::tui::theme::theme;
use crate::types::MAX_TITLE_LEN;

/// Props for the create form
#[derive(Default, Props)]
pub struct CreateFormProps {
    /// State for the form contents
    pub form: Option<State<CreateFormData>>,
    /// Which slot currently has focus
    pub focus: FocusSlot,
    /// Whether a classification request is in flight
    pub classifying: bool,
    /// Handler invoked with the new description on every edit
    pub on_description_change: Option<Handler<String>>,
}

/// Bordered create-form pane
#[component]
pub fn CreateForm(props: &CreateFormProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(form_state) = props.form else {
        return element!(View).into_any();
    };
    let form = form_state.read().clone();
    let on_description_change = props.on_description_change.clone();

    let focused = props.focus.in_create_form();
    let border_color = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let title_focus = props.focus == FocusSlot::TitleInput;
    let description_focus = props.focus == FocusSlot::DescriptionInput;

    element! {
        View(
            width: 100pct,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                Text(content: "New ticket", color: theme.highlight, weight: Weight::Bold)
                #(if props.classifying {
                    Some(element! {
                        Text(content: "classifying…", color: theme.text_dimmed)
                    })
                } else {
                    None
                })
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: "Title:",
                    color: if title_focus { theme.border_focused } else { theme.text_dimmed },
                )
                View(flex_grow: 1.0) {
                    TextInput(
                        value: form.title.clone(),
                        has_focus: title_focus,
                        on_change: {
                            let mut form_state = form_state;
                            move |new_value: String| {
                                let mut form = form_state.read().clone();
                                // Hard cap, applied while typing
                                form.title = if new_value.chars().count() > MAX_TITLE_LEN {
                                    new_value.chars().take(MAX_TITLE_LEN).collect()
                                } else {
                                    new_value
                                };
                                form_state.set(form);
                            }
                        },
                    )
                }
            }
            View(flex_direction: FlexDirection::Row, gap: 1) {
                Text(
                    content: "Descr:",
                    color: if description_focus { theme.border_focused } else { theme.text_dimmed },
                )
                View(flex_grow: 1.0, height: 2) {
                    TextInput(
                        value: form.description.clone(),
                        has_focus: description_focus,
                        multiline: true,
                        on_change: {
                            let mut form_state = form_state;
                            move |new_value: String| {
                                let mut form = form_state.read().clone();
                                form.description = new_value.clone();
                                form_state.set(form);
                                if let Some(ref handler) = on_description_change {
                                    handler(new_value);
                                }
                            }
                        },
                    )
                }
            }
            View(flex_direction: FlexDirection::Row, gap: 3) {
                Select(
                    label: "Category",
                    value: form.category.display(),
                    has_focus: props.focus == FocusSlot::CategorySelect,
                )
                Select(
                    label: "Priority",
                    value: form.priority.display(),
                    has_focus: props.focus == FocusSlot::PrioritySelect,
                    value_color: theme.priority_color(form.priority),
                )
                Text(content: "C-s: submit", color: theme.text_dimmed)
            }
        }
    }
    .into_any()
}
