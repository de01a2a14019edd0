use owo_colors::OwoColorize;

use crate::api::BackendClient;
use crate::config::Config;
use crate::error::Result;

/// Show aggregate ticket counters
pub async fn cmd_stats(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::from_config(&config)?;
    let stats = client.stats().await?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}  {}", "Total:".bold(), stats.total_tickets);
    println!("{}   {}", "Open:".bold(), stats.open_tickets);
    println!("{} {}", "Avg/day:".bold(), stats.avg_per_day_rounded());

    if !stats.priority_breakdown.is_empty() {
        println!("\n{}", "By priority:".bold());
        let mut entries: Vec<_> = stats.priority_breakdown.iter().collect();
        entries.sort();
        for (priority, count) in entries {
            println!("  {:10} {}", priority, count);
        }
    }

    if !stats.category_breakdown.is_empty() {
        println!("\n{}", "By category:".bold());
        let mut entries: Vec<_> = stats.category_breakdown.iter().collect();
        entries.sort();
        for (category, count) in entries {
            println!("  {:10} {}", category, count);
        }
    }

    Ok(())
}
