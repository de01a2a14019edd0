use owo_colors::OwoColorize;

use crate::api::BackendClient;
use crate::config::Config;
use crate::error::Result;
use crate::types::TicketId;

/// Transition a ticket to `resolved`
pub async fn cmd_resolve(id: TicketId) -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;

    client.resolve_ticket(id).await?;
    println!("Ticket {} {}", format!("#{id}").cyan(), "resolved".green());
    Ok(())
}

/// Transition a ticket to `closed` with an audit comment (may be empty)
pub async fn cmd_close(id: TicketId, comment: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;

    client.close_ticket(id, comment.unwrap_or("")).await?;
    println!("Ticket {} {}", format!("#{id}").cyan(), "closed".dimmed());
    Ok(())
}
