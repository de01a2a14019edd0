use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::TriageError;

/// Maximum title length accepted at creation, enforced client-side.
pub const MAX_TITLE_LEN: usize = 200;

/// Opaque backend-assigned ticket identifier.
pub type TicketId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Technical,
    Billing,
    Account,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Technical => write!(f, "technical"),
            Category::Billing => write!(f, "billing"),
            Category::Account => write!(f, "account"),
            Category::General => write!(f, "general"),
        }
    }
}

impl FromStr for Category {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "technical" => Ok(Category::Technical),
            "billing" => Ok(Category::Billing),
            "account" => Ok(Category::Account),
            "general" => Ok(Category::General),
            _ => Err(TriageError::InvalidCategory(s.to_string())),
        }
    }
}

pub const VALID_CATEGORIES: &[&str] = &["technical", "billing", "account", "general"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Priority {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(TriageError::InvalidPriority(s.to_string())),
        }
    }
}

pub const VALID_PRIORITIES: &[&str] = &["low", "medium", "high", "critical"];

/// Ticket lifecycle status.
///
/// `open` is the only non-terminal status: a ticket moves forward to
/// `resolved` or `closed` and never back. Deletion removes the entity
/// entirely and is not a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Open,
    Resolved,
    Closed,
}

impl Status {
    /// Whether a transition to `target` is legal from this status.
    ///
    /// The client does not pre-check before issuing a request (the backend
    /// enforces legality); this exists for display and tests.
    pub fn can_transition_to(self, target: Status) -> bool {
        matches!(
            (self, target),
            (Status::Open, Status::Resolved) | (Status::Open, Status::Closed)
        )
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Open)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Open => write!(f, "open"),
            Status::Resolved => write!(f, "resolved"),
            Status::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for Status {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(TriageError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &["open", "resolved", "closed"];

/// A support ticket as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    /// Audit comment, set only by the close transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Payload for creating a ticket. The backend assigns the id and sets the
/// initial status to `open`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl NewTicket {
    /// Local validation, performed before any network call.
    pub fn validate(&self) -> Result<(), TriageError> {
        if self.title.trim().is_empty() {
            return Err(TriageError::Validation("title must not be empty".into()));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(TriageError::Validation(format!(
                "title must be at most {MAX_TITLE_LEN} characters"
            )));
        }
        if self.description.trim().is_empty() {
            return Err(TriageError::Validation(
                "description must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Aggregate counters, recomputed by the backend on every relevant mutation.
/// The client never derives these locally; it always refetches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_tickets: u64,
    pub open_tickets: u64,
    pub avg_tickets_per_day: f64,
    /// Per-priority counts (empty when the backend omits them).
    #[serde(default)]
    pub priority_breakdown: HashMap<String, u64>,
    /// Per-category counts (empty when the backend omits them).
    #[serde(default)]
    pub category_breakdown: HashMap<String, u64>,
}

impl Stats {
    /// Average tickets per day, rounded for display.
    pub fn avg_per_day_rounded(&self) -> i64 {
        self.avg_tickets_per_day.round() as i64
    }
}

/// Classifier response for a ticket description. Both fields are optional
/// and nullable; the backend sends explicit nulls when the model abstains.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Suggestion {
    #[serde(default)]
    pub suggested_category: Option<Category>,
    #[serde(default)]
    pub suggested_priority: Option<Priority>,
}

impl Suggestion {
    pub fn is_empty(&self) -> bool {
        self.suggested_category.is_none() && self.suggested_priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for s in VALID_CATEGORIES {
            let parsed: Category = s.parse().unwrap();
            assert_eq!(parsed.to_string(), *s);
        }
        assert!("payment".parse::<Category>().is_err());
    }

    #[test]
    fn test_priority_roundtrip() {
        for s in VALID_PRIORITIES {
            let parsed: Priority = s.parse().unwrap();
            assert_eq!(parsed.to_string(), *s);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_status_transitions() {
        assert!(Status::Open.can_transition_to(Status::Resolved));
        assert!(Status::Open.can_transition_to(Status::Closed));
        assert!(!Status::Resolved.can_transition_to(Status::Closed));
        assert!(!Status::Closed.can_transition_to(Status::Resolved));
        assert!(!Status::Open.can_transition_to(Status::Open));
        assert!(Status::Resolved.is_terminal());
        assert!(!Status::Open.is_terminal());
    }

    #[test]
    fn test_ticket_deserialization() {
        let json = r#"{
            "id": 7,
            "title": "Cannot log in",
            "description": "Password reset loops forever",
            "category": "account",
            "priority": "high",
            "status": "open"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.category, Category::Account);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.status, Status::Open);
        assert_eq!(ticket.comment, None);
    }

    #[test]
    fn test_ticket_with_comment() {
        let json = r#"{
            "id": 8,
            "title": "Double charge",
            "description": "Charged twice for May",
            "category": "billing",
            "priority": "critical",
            "status": "closed",
            "comment": "refunded"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, Status::Closed);
        assert_eq!(ticket.comment.as_deref(), Some("refunded"));
    }

    #[test]
    fn test_new_ticket_validation() {
        let mut ticket = NewTicket {
            title: "Login broken".to_string(),
            description: "500 on submit".to_string(),
            category: Category::Technical,
            priority: Priority::High,
        };
        assert!(ticket.validate().is_ok());

        ticket.title = "   ".to_string();
        assert!(ticket.validate().is_err());

        ticket.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(ticket.validate().is_err());

        ticket.title = "x".repeat(MAX_TITLE_LEN);
        assert!(ticket.validate().is_ok());

        ticket.description = String::new();
        assert!(ticket.validate().is_err());
    }

    #[test]
    fn test_suggestion_nulls() {
        let full: Suggestion =
            serde_json::from_str(r#"{"suggested_category": "billing", "suggested_priority": "low"}"#)
                .unwrap();
        assert_eq!(full.suggested_category, Some(Category::Billing));
        assert_eq!(full.suggested_priority, Some(Priority::Low));

        let nulls: Suggestion =
            serde_json::from_str(r#"{"suggested_category": null, "suggested_priority": null}"#)
                .unwrap();
        assert!(nulls.is_empty());

        let partial: Suggestion =
            serde_json::from_str(r#"{"suggested_category": "billing"}"#).unwrap();
        assert_eq!(partial.suggested_category, Some(Category::Billing));
        assert_eq!(partial.suggested_priority, None);
    }

    #[test]
    fn test_stats_defaults() {
        let stats: Stats = serde_json::from_str(
            r#"{"total_tickets": 12, "open_tickets": 4, "avg_tickets_per_day": 2.6}"#,
        )
        .unwrap();
        assert_eq!(stats.total_tickets, 12);
        assert_eq!(stats.avg_per_day_rounded(), 3);
        assert!(stats.priority_breakdown.is_empty());
        assert!(stats.category_breakdown.is_empty());
    }
}
