//! TUI interaction-sequence tests
//!
//! These complement the unit tests in `src/tui/model.rs` by walking the
//! decision functions through full interaction sequences: typing bursts,
//! in-flight responses racing edits, mutation refetches and reopened
//! dialogs.

use triage::error::TriageError;
use triage::tui::model::{apply_refresh, apply_suggestion, open_close_dialog, should_classify};
use triage::tui::state::CreateFormData;
use triage::types::{Category, Priority, Stats, Status, Suggestion, Ticket, TicketId};

fn ticket(id: TicketId, title: &str) -> Ticket {
    Ticket {
        id,
        title: title.to_string(),
        description: format!("description for {title}"),
        category: Category::Technical,
        priority: Priority::Medium,
        status: Status::Open,
        comment: None,
    }
}

fn backend_error() -> TriageError {
    TriageError::Backend {
        status: 500,
        message: "boom".to_string(),
    }
}

#[test]
fn test_typing_burst_only_latest_text_accepts_a_response() {
    // Each keystroke reschedules classification for the full text so far.
    let mut form = CreateFormData::default();
    for text in ["a", "ab", "abc"] {
        form.description = text.to_string();
        assert!(should_classify(&form.description));
    }

    let suggestion = Suggestion {
        suggested_category: Some(Category::Billing),
        suggested_priority: Some(Priority::High),
    };

    // Responses for the superseded prefixes are discarded; only the
    // request matching what is on screen lands.
    assert!(apply_suggestion(&form, "a", &suggestion).is_none());
    assert!(apply_suggestion(&form, "ab", &suggestion).is_none());
    let next = apply_suggestion(&form, "abc", &suggestion).unwrap();
    assert_eq!(next.category, Category::Billing);
    assert_eq!(next.priority, Priority::High);
}

#[test]
fn test_stale_response_after_edit_is_discarded() {
    let mut form = CreateFormData {
        description: "printer is on fire".to_string(),
        category: Category::General,
        priority: Priority::Low,
        ..Default::default()
    };

    // The request goes out, then the user keeps editing.
    let requested = form.description.clone();
    form.description = "printer was on fire, now fine".to_string();

    let suggestion = Suggestion {
        suggested_category: Some(Category::Technical),
        suggested_priority: Some(Priority::Critical),
    };
    assert!(apply_suggestion(&form, &requested, &suggestion).is_none());
    assert_eq!(form.category, Category::General);
    assert_eq!(form.priority, Priority::Low);
}

#[test]
fn test_partial_suggestion_touches_only_its_field() {
    let form = CreateFormData {
        description: "charged twice".to_string(),
        category: Category::Technical,
        priority: Priority::High,
        ..Default::default()
    };

    let category_only = Suggestion {
        suggested_category: Some(Category::Billing),
        suggested_priority: None,
    };
    let next = apply_suggestion(&form, "charged twice", &category_only).unwrap();
    assert_eq!(next.category, Category::Billing);
    assert_eq!(next.priority, Priority::High);

    let priority_only = Suggestion {
        suggested_category: None,
        suggested_priority: Some(Priority::Critical),
    };
    let next = apply_suggestion(&form, "charged twice", &priority_only).unwrap();
    assert_eq!(next.category, Category::Technical);
    assert_eq!(next.priority, Priority::Critical);

    // Double abstention leaves the form untouched entirely.
    assert!(apply_suggestion(&form, "charged twice", &Suggestion::default()).is_none());
}

#[test]
fn test_refresh_applies_list_and_stats_together() {
    // One round trip carries both the list and the stats.
    let stats = Stats {
        total_tickets: 2,
        open_tickets: 2,
        avg_tickets_per_day: 0.5,
        ..Default::default()
    };
    let outcome = apply_refresh(
        Ok(vec![ticket(1, "a"), ticket(2, "b")]),
        Ok(stats.clone()),
        0,
    );
    assert_eq!(outcome.tickets.as_ref().map(Vec::len), Some(2));
    assert_eq!(outcome.stats, Some(stats));
    assert_eq!(outcome.error, None);
}

#[test]
fn test_refresh_failures_are_independent() {
    // List fails: rows stay, stats still land, the user sees an error.
    let outcome = apply_refresh(Err(backend_error()), Ok(Stats::default()), 1);
    assert!(outcome.tickets.is_none());
    assert!(outcome.stats.is_some());
    assert!(outcome.error.is_some());
    assert_eq!(outcome.selected, 1);

    // Stats fail: the list still lands, stale stats stay, no error bar.
    let outcome = apply_refresh(Ok(vec![ticket(1, "a")]), Err(backend_error()), 0);
    assert!(outcome.tickets.is_some());
    assert!(outcome.stats.is_none());
    assert!(outcome.error.is_none());
}

#[test]
fn test_refresh_clamps_selection_to_shrunken_list() {
    let outcome = apply_refresh(
        Ok(vec![ticket(1, "a"), ticket(2, "b")]),
        Ok(Stats::default()),
        5,
    );
    assert_eq!(outcome.selected, 1);

    let outcome = apply_refresh(Ok(vec![]), Ok(Stats::default()), 3);
    assert_eq!(outcome.selected, 0);
}

#[test]
fn test_reopened_close_dialog_targets_new_ticket_with_fresh_comment() {
    let a = ticket(1, "first");
    let b = ticket(2, "second");

    let (data, mut comment) = open_close_dialog(&a);
    assert_eq!(data.ticket_id, 1);
    comment.push_str("half-typed draft");

    // Cancel, then open the dialog for another ticket.
    let (data, comment) = open_close_dialog(&b);
    assert_eq!(data.ticket_id, 2);
    assert_eq!(data.ticket_title, "second");
    assert!(comment.is_empty());
}
