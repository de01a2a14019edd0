mod classify;
mod config;
mod create;
mod delete;
mod ls;
mod stats;
mod status;
mod ui;

pub use classify::cmd_classify;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use delete::cmd_delete;
pub use ls::cmd_ls;
pub use stats::cmd_stats;
pub use status::{cmd_close, cmd_resolve};
pub use ui::cmd_tui;

use owo_colors::OwoColorize;

use crate::types::{Priority, Status, Ticket};

/// Format options for ticket display
pub struct FormatOptions {
    pub show_description: bool,
    pub suffix: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            show_description: false,
            suffix: None,
        }
    }
}

/// Format a ticket for single-line display
pub fn format_ticket_line(ticket: &Ticket, options: FormatOptions) -> String {
    let id_padded = format!("#{:<6}", ticket.id);
    let colored_id = id_padded.cyan().to_string();

    let status_str = format!("[{}]", ticket.status);
    let colored_status = match ticket.status {
        Status::Open => status_str.yellow().to_string(),
        Status::Resolved => status_str.green().to_string(),
        Status::Closed => status_str.dimmed().to_string(),
    };

    let priority_str = format!("[{}]", ticket.priority);
    let colored_priority = match ticket.priority {
        Priority::Critical => priority_str.red().to_string(),
        Priority::High => priority_str.yellow().to_string(),
        _ => priority_str,
    };

    let suffix = options.suffix.unwrap_or_default();
    let mut line = format!(
        "{} {}{}[{}] - {}{}",
        colored_id, colored_priority, colored_status, ticket.category, ticket.title, suffix
    );

    if options.show_description {
        line.push_str(&format!("\n        {}", ticket.description.dimmed()));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn make_ticket(status: Status, priority: Priority) -> Ticket {
        Ticket {
            id: 42,
            title: "Printer on fire".to_string(),
            description: "Smoke coming out of tray 2".to_string(),
            category: Category::Technical,
            priority,
            status,
            comment: None,
        }
    }

    #[test]
    fn test_format_contains_fields() {
        let line = format_ticket_line(
            &make_ticket(Status::Open, Priority::Critical),
            FormatOptions::default(),
        );
        assert!(line.contains("#42"));
        assert!(line.contains("open"));
        assert!(line.contains("critical"));
        assert!(line.contains("technical"));
        assert!(line.contains("Printer on fire"));
        assert!(!line.contains("Smoke"));
    }

    #[test]
    fn test_format_with_description() {
        let line = format_ticket_line(
            &make_ticket(Status::Closed, Priority::Low),
            FormatOptions {
                show_description: true,
                ..Default::default()
            },
        );
        assert!(line.contains("Smoke coming out of tray 2"));
    }
}
