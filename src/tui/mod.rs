//! TUI module for the interactive ticket client
//!
//! Single full-screen view combining the create form, filter bar and
//! ticket list, with modal overlays for the close and delete workflows.

pub mod components;
pub mod handlers;
pub mod model;
pub mod state;
pub mod theme;
pub mod view;

pub use state::{CloseModalData, ConfirmDeleteData, CreateFormData, FilterFormData, FocusSlot};
pub use theme::Theme;
pub use view::{App, AppProps};
