//! Reusable TUI components

pub mod close_modal;
pub mod confirm_modal;
pub mod create_form;
pub mod empty_state;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod modal;
pub mod select;
pub mod stats_bar;
pub mod ticket_list;
pub mod toast;

pub use close_modal::CloseCommentModal;
pub use confirm_modal::DeleteConfirmModal;
pub use create_form::CreateForm;
pub use filter_bar::FilterBar;
pub use footer::{
    Footer, Shortcut, close_modal_shortcuts, confirm_delete_shortcuts, form_shortcuts,
    list_shortcuts,
};
pub use header::Header;
pub use select::{Select, Selectable, cycle_optional, optional_display};
pub use stats_bar::StatsBar;
pub use ticket_list::TicketList;
pub use toast::{Toast, ToastLevel, render_toast};
