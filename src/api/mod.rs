//! Ticket backend interface.
//!
//! The backend is an external collaborator; this module specifies it only
//! at its HTTP boundary: the list/stats/classify endpoints and the four
//! ticket mutations.

pub mod client;
pub mod query;

pub use client::BackendClient;
pub use query::TicketQuery;
