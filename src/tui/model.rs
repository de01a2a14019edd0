//! Decision logic for the TUI, separated from the iocraft components
//!
//! The async handlers and the view delegate their branching here so the
//! behavior is testable without a terminal or a live backend. The
//! integration tests in `tests/tui_model_test.rs` exercise the same
//! functions against full interaction sequences.

use crate::error::TriageError;
use crate::types::{Stats, Suggestion, Ticket};

use super::state::{CloseModalData, CreateFormData};

/// Screen updates derived from one refresh round trip.
///
/// `None` fields mean "keep what is on screen": a failed stats fetch never
/// blanks the stats, and a failed list fetch leaves the previous rows up
/// behind the error toast.
#[derive(Debug, PartialEq)]
pub struct RefreshOutcome {
    pub tickets: Option<Vec<Ticket>>,
    pub selected: usize,
    pub stats: Option<Stats>,
    pub error: Option<String>,
}

/// Fold the results of one list+stats round trip into screen updates.
/// The two results are applied independently.
pub fn apply_refresh(
    list: Result<Vec<Ticket>, TriageError>,
    stats: Result<Stats, TriageError>,
    selected: usize,
) -> RefreshOutcome {
    let (tickets, selected, error) = match list {
        Ok(list) => {
            let selected = clamp_selection(selected, list.len());
            (Some(list), selected, None)
        }
        Err(e) => (None, selected, Some(format!("Failed to load tickets: {e}"))),
    };

    let stats = match stats {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::debug!("stats refresh failed: {e}");
            None
        }
    };

    RefreshOutcome {
        tickets,
        selected,
        stats,
        error,
    }
}

/// Keep the selection on a valid row after the list changes size.
pub fn clamp_selection(selected: usize, ticket_count: usize) -> usize {
    selected.min(ticket_count.saturating_sub(1))
}

/// Whether a description edit should schedule a classification request.
/// A cleared description drops any scheduled request instead.
pub fn should_classify(description: &str) -> bool {
    !description.trim().is_empty()
}

/// Apply a classification response that was requested for
/// `requested_description`.
///
/// Returns the updated form, or `None` when the response must be
/// discarded: the description has changed since the request went out, or
/// the classifier abstained on both fields. A field the classifier
/// abstained on keeps its current value.
pub fn apply_suggestion(
    form: &CreateFormData,
    requested_description: &str,
    suggestion: &Suggestion,
) -> Option<CreateFormData> {
    if form.description != requested_description {
        return None;
    }
    if suggestion.is_empty() {
        return None;
    }

    let mut next = form.clone();
    if let Some(category) = suggestion.suggested_category {
        next.category = category;
    }
    if let Some(priority) = suggestion.suggested_priority {
        next.priority = priority;
    }
    Some(next)
}

/// Slot values for opening the close dialog on `ticket`. The comment
/// always starts empty, so a dialog reopened for a different ticket
/// cannot inherit a draft typed for the previous one.
pub fn open_close_dialog(ticket: &Ticket) -> (CloseModalData, String) {
    (
        CloseModalData {
            ticket_id: ticket.id,
            ticket_title: ticket.title.clone(),
        },
        String::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Priority};

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(0, 0), 0);
        assert_eq!(clamp_selection(2, 5), 2);
        assert_eq!(clamp_selection(4, 5), 4);
        assert_eq!(clamp_selection(5, 5), 4);
        assert_eq!(clamp_selection(9, 1), 0);
    }

    #[test]
    fn test_should_classify() {
        assert!(should_classify("app crashes on login"));
        assert!(!should_classify(""));
        assert!(!should_classify("   \n"));
    }

    #[test]
    fn test_suggestion_requires_matching_description() {
        let form = CreateFormData {
            description: "current text".into(),
            ..Default::default()
        };
        let suggestion = Suggestion {
            suggested_category: Some(Category::Billing),
            suggested_priority: None,
        };
        assert!(apply_suggestion(&form, "older text", &suggestion).is_none());
        assert!(apply_suggestion(&form, "current text", &suggestion).is_some());
    }

    #[test]
    fn test_empty_suggestion_is_not_applied() {
        let form = CreateFormData {
            description: "text".into(),
            ..Default::default()
        };
        assert!(apply_suggestion(&form, "text", &Suggestion::default()).is_none());
    }

    #[test]
    fn test_suggestion_overwrites_only_present_fields() {
        let form = CreateFormData {
            description: "text".into(),
            category: Category::General,
            priority: Priority::Low,
            ..Default::default()
        };
        let category_only = Suggestion {
            suggested_category: Some(Category::Billing),
            suggested_priority: None,
        };
        let next = apply_suggestion(&form, "text", &category_only).unwrap();
        assert_eq!(next.category, Category::Billing);
        assert_eq!(next.priority, Priority::Low);
    }
}
