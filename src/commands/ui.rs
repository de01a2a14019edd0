//! Interactive TUI command (`triage tui`)
//!
//! Launches the full-screen client: create form with AI-assisted defaults,
//! filterable ticket list, aggregate stats, and lifecycle actions.

use iocraft::prelude::*;

use crate::api::BackendClient;
use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::tui::App;

/// Launch the interactive ticket client
pub async fn cmd_tui() -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;

    element!(App(client: Some(client)))
        .fullscreen()
        .await
        .map_err(|e| TriageError::Other(format!("TUI error: {e}")))
}
