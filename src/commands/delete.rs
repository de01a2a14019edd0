use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;

use crate::api::BackendClient;
use crate::config::Config;
use crate::error::Result;
use crate::types::TicketId;

/// Delete a ticket after an explicit confirmation prompt.
///
/// No network call is issued unless the user confirms (or `--force` is
/// given). Deletion is irreversible.
pub async fn cmd_delete(id: TicketId, force: bool) -> Result<()> {
    if !force && !confirm(&format!("Delete ticket #{id}? This cannot be undone."))? {
        println!("Aborted.");
        return Ok(());
    }

    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;

    client.delete_ticket(id).await?;
    println!("Ticket {} {}", format!("#{id}").cyan(), "deleted".red());
    Ok(())
}

/// Prompt for a yes/no answer on stdin; defaults to no.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
