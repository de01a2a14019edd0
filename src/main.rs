use clap::{CommandFactory, Parser, Subcommand};
use std::process::ExitCode;

use triage::api::TicketQuery;
use triage::commands::{
    CreateOptions, cmd_classify, cmd_close, cmd_config_get, cmd_config_set, cmd_config_show,
    cmd_create, cmd_delete, cmd_ls, cmd_resolve, cmd_stats, cmd_tui,
};
use triage::types::{
    Category, Priority, Status, TicketId, VALID_CATEGORIES, VALID_PRIORITIES, VALID_STATUSES,
};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Support ticket client with AI-assisted classification")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default when no subcommand is given)
    Tui,

    /// List tickets
    Ls {
        /// Substring search over title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category: technical, billing, account, general
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Filter by priority: low, medium, high, critical
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Filter by status: open, resolved, closed
        #[arg(long, value_parser = parse_status)]
        status: Option<Status>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new ticket
    #[command(visible_alias = "c")]
    Create {
        /// Ticket title
        title: String,

        /// Description text
        #[arg(short, long)]
        description: String,

        /// Category (default: technical)
        #[arg(short, long, default_value = "technical", value_parser = parse_category)]
        category: Category,

        /// Priority (default: medium)
        #[arg(short, long, default_value = "medium", value_parser = parse_priority)]
        priority: Priority,

        /// Ask the classifier for category/priority before creating
        #[arg(long)]
        suggest: bool,
    },

    /// Mark a ticket as resolved
    Resolve {
        /// Ticket ID
        id: TicketId,
    },

    /// Close a ticket with an optional comment
    Close {
        /// Ticket ID
        id: TicketId,

        /// Closing comment
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Delete a ticket permanently
    Delete {
        /// Ticket ID
        id: TicketId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show aggregate ticket statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the classifier for suggestions for a description
    Classify {
        /// Description text to classify
        description: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the full configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (backend_url, request_timeout)
        key: String,
        /// New value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid category. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        )
    })
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid priority. Must be one of: {}",
            VALID_PRIORITIES.join(", ")
        )
    })
}

fn parse_status(s: &str) -> Result<Status, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid status. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Tui) => cmd_tui().await,

        Some(Commands::Ls {
            search,
            category,
            priority,
            status,
            json,
        }) => {
            let query = TicketQuery::from_form(
                search.as_deref().unwrap_or(""),
                category,
                priority,
                status,
            );
            cmd_ls(query, json).await
        }

        Some(Commands::Create {
            title,
            description,
            category,
            priority,
            suggest,
        }) => {
            cmd_create(CreateOptions {
                title,
                description,
                category,
                priority,
                suggest,
            })
            .await
        }

        Some(Commands::Resolve { id }) => cmd_resolve(id).await,
        Some(Commands::Close { id, comment }) => cmd_close(id, comment.as_deref()).await,
        Some(Commands::Delete { id, force }) => cmd_delete(id, force).await,

        Some(Commands::Stats { json }) => cmd_stats(json).await,
        Some(Commands::Classify { description }) => cmd_classify(&description).await,

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
