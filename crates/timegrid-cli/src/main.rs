use std::path::PathBuf;

use clap::{Parser, Subcommand};
use timegrid_core::FileConfigStore;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "timegrid", version, about = "Timegrid CLI")]
struct Cli {
    /// Configuration file (defaults to ~/.config/timegrid/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the timetable layout of a week
    Layout(commands::layout::LayoutArgs),
    /// List the distinct courses of a week
    Catalog {
        /// Week JSON file (array of days)
        week: PathBuf,
    },
    /// Course priority list
    Priority {
        #[command(subcommand)]
        action: commands::priority::PriorityAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Exam marks
    Marks {
        #[command(subcommand)]
        action: commands::marks::MarksAction,
    },
}

fn open_store(path: Option<PathBuf>) -> Result<FileConfigStore, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(FileConfigStore::new(path)),
        None => Ok(FileConfigStore::default_location()?),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = open_store(cli.config).and_then(|store| match cli.command {
        Commands::Layout(args) => commands::layout::run(args, store),
        Commands::Catalog { week } => commands::catalog::run(&week),
        Commands::Priority { action } => commands::priority::run(action, &store),
        Commands::Config { action } => commands::config::run(action, &store),
        Commands::Marks { action } => commands::marks::run(action),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
