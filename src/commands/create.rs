use owo_colors::OwoColorize;

use crate::api::BackendClient;
use crate::config::Config;
use crate::error::Result;
use crate::types::{Category, NewTicket, Priority};

/// Options for creating a new ticket
pub struct CreateOptions {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    /// Ask the classifier for category/priority defaults before creating
    pub suggest: bool,
}

/// Create a new ticket on the backend
pub async fn cmd_create(options: CreateOptions) -> Result<()> {
    let mut new_ticket = NewTicket {
        title: options.title,
        description: options.description,
        category: options.category,
        priority: options.priority,
    };

    // Fail locally before any network call
    new_ticket.validate()?;

    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;

    if options.suggest {
        // Suggestion failures are swallowed; the chosen values stand.
        match client.classify(&new_ticket.description).await {
            Ok(suggestion) => {
                if let Some(category) = suggestion.suggested_category {
                    println!("{} category: {}", "suggested".dimmed(), category);
                    new_ticket.category = category;
                }
                if let Some(priority) = suggestion.suggested_priority {
                    println!("{} priority: {}", "suggested".dimmed(), priority);
                    new_ticket.priority = priority;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "classify request failed, keeping chosen values");
            }
        }
    }

    let ticket = client.create_ticket(&new_ticket).await?;

    println!(
        "Created ticket {} [{}/{}] - {}",
        format!("#{}", ticket.id).cyan(),
        ticket.category,
        ticket.priority,
        ticket.title
    );

    Ok(())
}
