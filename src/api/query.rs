//! Filter/query builder for the ticket collection.
//!
//! Turns the four filter fields into the query-string parameters for
//! `GET /tickets/`. Unset fields are omitted entirely rather than sent as
//! empty strings, so the backend's "no constraint" default applies.

use crate::types::{Category, Priority, Status};

/// Filter state for listing tickets.
///
/// The four fields are independent and orthogonal; `None` means no
/// constraint. Filter state is ephemeral and held only by the active
/// session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketQuery {
    pub search: Option<String>,
    pub category: Option<Category>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl TicketQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a query from raw form fields. An empty search string
    /// collapses to no constraint.
    pub fn from_form(
        search: &str,
        category: Option<Category>,
        priority: Option<Priority>,
        status: Option<Status>,
    ) -> Self {
        Self {
            search: if search.trim().is_empty() {
                None
            } else {
                Some(search.to_string())
            },
            category,
            priority,
            status,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Query parameters for `GET /tickets/`, containing exactly the set
    /// fields with their literal values.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(search) = &self.search
            && !search.is_empty()
        {
            params.push(("search", search.clone()));
        }
        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(priority) = self.priority {
            params.push(("priority", priority.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }

        params
    }

    /// True when no field constrains the listing.
    pub fn is_unconstrained(&self) -> bool {
        self.params().is_empty()
    }
}
