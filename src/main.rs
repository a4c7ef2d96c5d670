mod commands;
mod render;
mod utils;

use anyhow::Result;
use apptbook_core::{AppConfig, Direction, SortField};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apptbook")]
#[command(about = "Browse, search and edit a pet clinic appointment list")]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the appointment list
    List {
        /// File path or http(s) URL to load from (overrides config)
        #[arg(long)]
        source: Option<String>,

        /// Only show appointments whose pet, owner or notes contain this text
        #[arg(short, long)]
        query: Option<String>,

        /// petName, ownerName, aptNotes or date
        #[arg(short, long)]
        sort_by: Option<SortField>,

        /// asc or desc
        #[arg(short, long)]
        order: Option<Direction>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective settings
    Config,
    /// Load the list and edit it interactively (edits are not saved)
    Shell {
        /// File path or http(s) URL to load from (overrides config)
        #[arg(long)]
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("{}", format!("Error: {e:#}").red());
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<()> {
    let config = AppConfig::load()?;

    match command {
        Commands::List {
            source,
            query,
            sort_by,
            order,
            json,
        } => {
            let store = commands::open_store(&config, source.as_deref()).await?;
            commands::list::run(store, query, sort_by, order, json)
        }
        Commands::Config => commands::config::run(&config),
        Commands::Shell { source } => {
            let store = commands::open_store(&config, source.as_deref()).await?;
            commands::shell::run(store)
        }
    }
}

/// Log to stderr so stdout stays clean for `--json`. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
