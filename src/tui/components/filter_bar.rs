//! Filter bar
//!
//! Search input plus three optional selectors. Every change immediately
//! re-derives the list query; unset fields put no constraint on the list.

use iocraft::prelude::*;

use super::select::{Select, optional_display};
use crate::tui::state::{FilterFormData, FocusSlot};
use crate::tui::theme::theme;

/// Props for the filter bar
#[derive(Default, Props)]
pub struct FilterBarProps {
    /// State for the filter contents
    pub filters: Option<State<FilterFormData>>,
    /// Which slot currently has focus
    pub focus: FocusSlot,
    /// Handler invoked with the new search text on every edit
    pub on_search_change: Option<Handler<String>>,
}

/// One-line bar with the search input and the three filter selectors
#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(filters_state) = props.filters else {
        return element!(View).into_any();
    };
    let filters = filters_state.read().clone();
    let on_search_change = props.on_search_change.clone();

    let search_focus = props.focus == FocusSlot::SearchInput;

    element! {
        View(
            width: 100pct,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            gap: 3,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 1, flex_grow: 1.0) {
                Text(
                    content: "/",
                    color: if search_focus { theme.border_focused } else { theme.text_dimmed },
                )
                View(flex_grow: 1.0) {
                    TextInput(
                        value: filters.search.clone(),
                        has_focus: search_focus,
                        on_change: {
                            let mut filters_state = filters_state;
                            move |new_value: String| {
                                let mut filters = filters_state.read().clone();
                                filters.search = new_value.clone();
                                filters_state.set(filters);
                                if let Some(ref handler) = on_search_change {
                                    handler(new_value);
                                }
                            }
                        },
                    )
                }
            }
            Select(
                label: "category",
                value: optional_display(filters.category),
                has_focus: props.focus == FocusSlot::FilterCategory,
            )
            Select(
                label: "priority",
                value: optional_display(filters.priority),
                has_focus: props.focus == FocusSlot::FilterPriority,
            )
            Select(
                label: "status",
                value: optional_display(filters.status),
                has_focus: props.focus == FocusSlot::FilterStatus,
            )
        }
    }
    .into_any()
}
