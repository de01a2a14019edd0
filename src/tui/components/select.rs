//! Compact inline selector component for enum fields
//!
//! Displays as: Label: ◀ value ▶ and cycles with left/right arrows.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::{Category, Priority, Status};

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps<'a> {
    /// Label to display before the selector
    pub label: Option<&'a str>,
    /// The currently selected value, already formatted for display
    pub value: String,
    /// Whether the selector has focus
    pub has_focus: bool,
    /// Optional color for the value (for semantic coloring)
    pub value_color: Option<Color>,
}

/// Compact inline selector with arrow indicators
#[component]
pub fn Select<'a>(props: &SelectProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let accent_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let value_color = props.value_color.unwrap_or(theme.text);

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            #(props.label.map(|label| element! {
                Text(
                    content: format!("{}:", label),
                    color: accent_color,
                )
            }))
            Text(content: "◀", color: accent_color)
            Text(content: props.value.clone(), color: value_color)
            Text(content: "▶", color: accent_color)
        }
    }
}

/// Helper trait for enum types that can be cycled through with a Select
pub trait Selectable: Sized + Clone + Copy + 'static {
    /// Get all possible values for this type
    fn all_values() -> Vec<Self>;
    /// Get the display string for this value
    fn display(&self) -> String;
    /// Get the index of this value in all_values
    fn index(&self) -> usize;
    /// Get the next value (wrapping)
    fn next(&self) -> Self {
        let values = Self::all_values();
        let next_idx = (self.index() + 1) % values.len();
        values[next_idx]
    }
    /// Get the previous value (wrapping)
    fn prev(&self) -> Self {
        let values = Self::all_values();
        let prev_idx = if self.index() == 0 {
            values.len() - 1
        } else {
            self.index() - 1
        };
        values[prev_idx]
    }
}

impl Selectable for Category {
    fn all_values() -> Vec<Self> {
        vec![
            Category::Technical,
            Category::Billing,
            Category::Account,
            Category::General,
        ]
    }

    fn display(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> usize {
        match self {
            Category::Technical => 0,
            Category::Billing => 1,
            Category::Account => 2,
            Category::General => 3,
        }
    }
}

impl Selectable for Priority {
    fn all_values() -> Vec<Self> {
        vec![
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ]
    }

    fn display(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> usize {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Critical => 3,
        }
    }
}

impl Selectable for Status {
    fn all_values() -> Vec<Self> {
        vec![Status::Open, Status::Resolved, Status::Closed]
    }

    fn display(&self) -> String {
        self.to_string()
    }

    fn index(&self) -> usize {
        match self {
            Status::Open => 0,
            Status::Resolved => 1,
            Status::Closed => 2,
        }
    }
}

/// Cycle an optional selector value, where `None` means "all" and sits
/// between the last and first value in the cycle.
pub fn cycle_optional<T: Selectable>(current: Option<T>, forward: bool) -> Option<T> {
    let values = T::all_values();
    match current {
        None => {
            if forward {
                values.first().copied()
            } else {
                values.last().copied()
            }
        }
        Some(value) => {
            if forward {
                if value.index() + 1 >= values.len() {
                    None
                } else {
                    Some(value.next())
                }
            } else if value.index() == 0 {
                None
            } else {
                Some(value.prev())
            }
        }
    }
}

/// Display string for an optional selector value
pub fn optional_display<T: Selectable>(value: Option<T>) -> String {
    value.map(|v| v.display()).unwrap_or_else(|| "all".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_selectable() {
        assert_eq!(Category::Technical.index(), 0);
        assert_eq!(Category::Technical.next(), Category::Billing);
        assert_eq!(Category::Technical.prev(), Category::General);
        assert_eq!(Category::General.next(), Category::Technical);
    }

    #[test]
    fn test_priority_selectable() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::Critical.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::Critical);
    }

    #[test]
    fn test_cycle_optional_passes_through_all() {
        // None -> open -> resolved -> closed -> None
        let mut value: Option<Status> = None;
        value = cycle_optional(value, true);
        assert_eq!(value, Some(Status::Open));
        value = cycle_optional(value, true);
        assert_eq!(value, Some(Status::Resolved));
        value = cycle_optional(value, true);
        assert_eq!(value, Some(Status::Closed));
        value = cycle_optional(value, true);
        assert_eq!(value, None);

        // And back the other way
        value = cycle_optional(value, false);
        assert_eq!(value, Some(Status::Closed));
    }

    #[test]
    fn test_optional_display() {
        assert_eq!(optional_display::<Category>(None), "all");
        assert_eq!(optional_display(Some(Category::Billing)), "billing");
    }
}
