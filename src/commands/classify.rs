use owo_colors::OwoColorize;

use crate::api::BackendClient;
use crate::config::Config;
use crate::error::{Result, TriageError};

/// Ask the classifier for category/priority suggestions for a description
pub async fn cmd_classify(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TriageError::Validation(
            "description must not be empty".into(),
        ));
    }

    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;
    let suggestion = client.classify(description).await?;

    if suggestion.is_empty() {
        println!("No suggestion");
        return Ok(());
    }

    if let Some(category) = suggestion.suggested_category {
        println!("{} {}", "category:".bold(), category);
    }
    if let Some(priority) = suggestion.suggested_priority {
        println!("{} {}", "priority:".bold(), priority);
    }

    Ok(())
}
