//! State types for the ticket client TUI
//!
//! Each logical concern (create form, filters, close workflow, delete
//! confirmation, focus) owns one named state slot; there are no implicit
//! global singletons.

use crate::api::TicketQuery;
use crate::types::{Category, NewTicket, Priority, Status, TicketId};

/// The UI element currently receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSlot {
    TitleInput,
    DescriptionInput,
    CategorySelect,
    PrioritySelect,
    SearchInput,
    FilterCategory,
    FilterPriority,
    FilterStatus,
    #[default]
    TicketList,
}

impl FocusSlot {
    const ORDER: [FocusSlot; 9] = [
        FocusSlot::TitleInput,
        FocusSlot::DescriptionInput,
        FocusSlot::CategorySelect,
        FocusSlot::PrioritySelect,
        FocusSlot::SearchInput,
        FocusSlot::FilterCategory,
        FocusSlot::FilterPriority,
        FocusSlot::FilterStatus,
        FocusSlot::TicketList,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|slot| *slot == self)
            .unwrap_or(0)
    }

    /// Next slot in Tab order (wrapping)
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous slot in Tab order (wrapping)
    pub fn prev(self) -> Self {
        let pos = self.position();
        Self::ORDER[(pos + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether this slot is a free-text input that consumes character keys
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            FocusSlot::TitleInput | FocusSlot::DescriptionInput | FocusSlot::SearchInput
        )
    }

    /// Whether this slot belongs to the create form
    pub fn in_create_form(self) -> bool {
        matches!(
            self,
            FocusSlot::TitleInput
                | FocusSlot::DescriptionInput
                | FocusSlot::CategorySelect
                | FocusSlot::PrioritySelect
        )
    }
}

/// Create-form fields. Category and priority start at their defaults and
/// may be overwritten by accepted suggestions or user cycling.
#[derive(Debug, Clone, Default)]
pub struct CreateFormData {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl CreateFormData {
    pub fn to_new_ticket(&self) -> NewTicket {
        NewTicket {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            priority: self.priority,
        }
    }

    /// Clear the text fields after a successful create. Category and
    /// priority keep their last values, matching the form's behavior of
    /// treating them as sticky defaults.
    pub fn clear_text(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// Filter fields. `None` selector values and an empty search mean no
/// constraint; the derived query omits them entirely.
#[derive(Debug, Clone, Default)]
pub struct FilterFormData {
    pub search: String,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl FilterFormData {
    /// Re-derive the list query from the current fields.
    pub fn query(&self) -> TicketQuery {
        TicketQuery::from_form(&self.search, self.category, self.priority, self.status)
    }
}

/// Data for the close-comment modal. Holding exactly one of these at a
/// time is what makes the close workflow modal: a second close action
/// cannot cross-contaminate a pending one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloseModalData {
    pub ticket_id: TicketId,
    pub ticket_title: String,
}

/// Data for the delete confirmation modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfirmDeleteData {
    pub ticket_id: TicketId,
    pub ticket_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_is_closed() {
        let mut slot = FocusSlot::TitleInput;
        for _ in 0..FocusSlot::ORDER.len() {
            slot = slot.next();
        }
        assert_eq!(slot, FocusSlot::TitleInput);

        assert_eq!(FocusSlot::TicketList.next(), FocusSlot::TitleInput);
        assert_eq!(FocusSlot::TitleInput.prev(), FocusSlot::TicketList);
    }

    #[test]
    fn test_focus_classification() {
        assert!(FocusSlot::TitleInput.is_text_input());
        assert!(FocusSlot::SearchInput.is_text_input());
        assert!(!FocusSlot::CategorySelect.is_text_input());
        assert!(FocusSlot::CategorySelect.in_create_form());
        assert!(!FocusSlot::FilterCategory.in_create_form());
        assert!(!FocusSlot::TicketList.in_create_form());
    }

    #[test]
    fn test_filter_query_derivation() {
        let mut filters = FilterFormData::default();
        assert!(filters.query().is_unconstrained());

        filters.search = "refund".to_string();
        filters.status = Some(Status::Open);
        let params = filters.query().params();
        assert_eq!(
            params,
            vec![
                ("search", "refund".to_string()),
                ("status", "open".to_string()),
            ]
        );
    }

    #[test]
    fn test_create_form_clear_keeps_selectors() {
        let mut form = CreateFormData {
            title: "t".into(),
            description: "d".into(),
            category: Category::Billing,
            priority: Priority::Critical,
        };
        form.clear_text();
        assert!(form.title.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.category, Category::Billing);
        assert_eq!(form.priority, Priority::Critical);
    }
}
