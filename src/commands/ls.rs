use crate::api::{BackendClient, TicketQuery};
use crate::commands::{FormatOptions, format_ticket_line};
use crate::config::Config;
use crate::error::Result;

/// List tickets from the backend, filtered by the given query
pub async fn cmd_ls(query: TicketQuery, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;
    let tickets = client.list_tickets(&query).await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
        return Ok(());
    }

    if tickets.is_empty() {
        println!("No tickets");
        return Ok(());
    }

    for ticket in &tickets {
        println!("{}", format_ticket_line(ticket, FormatOptions::default()));
    }

    Ok(())
}
