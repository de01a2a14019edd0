pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod tui;
pub mod types;

pub use api::{BackendClient, TicketQuery};
pub use config::Config;
pub use error::{Result, TriageError};
pub use types::{
    Category, MAX_TITLE_LEN, NewTicket, Priority, Stats, Status, Suggestion, Ticket, TicketId,
    VALID_CATEGORIES, VALID_PRIORITIES, VALID_STATUSES,
};
