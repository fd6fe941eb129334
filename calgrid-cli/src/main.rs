mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calgrid_core::store::JsonFileStore;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "calgrid")]
#[command(about = "Browse and manage your local calendar from the terminal")]
struct Cli {
    /// Path to the events file (defaults to the platform data directory)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Navigate N months from there (negative for back)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,

        /// Start weeks on Monday instead of Sunday
        #[arg(long)]
        monday: bool,
    },
    /// Create a new event
    New(commands::new::NewArgs),
    /// List upcoming occurrences
    Agenda {
        /// Maximum number of entries
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Emit JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },
    /// Search events by title or description
    Search {
        query: String,

        /// Emit JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },
    /// Edit an existing event
    Edit(commands::edit::EditArgs),
    /// Move an event to a new start, keeping its duration
    Reschedule {
        /// Event id (or unique prefix)
        id: String,

        /// New start date/time
        #[arg(short, long)]
        start: String,
    },
    /// Delete an event
    Delete {
        /// Event id (or unique prefix)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?.start()?;

    let cli = Cli::parse();
    let path = cli
        .file
        .or_else(|| std::env::var_os("CALGRID_FILE").map(PathBuf::from))
        .unwrap_or_else(JsonFileStore::default_path);
    log::debug!("using events file {}", path.display());

    let mut store = JsonFileStore::new(path);

    match cli.command {
        Commands::Month {
            month,
            offset,
            monday,
        } => commands::month::run(&store, month.as_deref(), offset, monday),
        Commands::New(args) => commands::new::run(&mut store, args),
        Commands::Agenda { limit, json } => commands::agenda::run(&store, limit, json),
        Commands::Search { query, json } => commands::search::run(&store, &query, json),
        Commands::Edit(args) => commands::edit::run(&mut store, args),
        Commands::Reschedule { id, start } => {
            commands::reschedule::run(&mut store, &id, &start)
        }
        Commands::Delete { id, yes } => commands::delete::run(&mut store, &id, yes),
    }
}
