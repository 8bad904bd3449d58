use anyhow::{Context, Result};
use bibliognost::app::{self, Catalog, ListKind};
use bibliognost::config::{Config, LIBRARY_ENV, LOG_ENV};
use bibliognost::library::{Library, NewCollection, NewWork};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bibliognost")]
#[command(about = "Browse a catalog of works and the collections they appear in", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite file holding the catalog
    #[arg(long, global = true, env = LIBRARY_ENV)]
    library: Option<PathBuf>,

    /// Append log events to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter directives (default: warn)
    #[arg(long, global = true, env = LOG_ENV)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a work and print its id
    AddWork {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        author: String,

        #[arg(long = "type", default_value = "")]
        kind: String,
    },

    /// Add a collection and print its id
    AddCollection {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        format: String,
    },

    /// Record that a work appears in a collection
    Publish {
        #[arg(long)]
        work: i64,

        #[arg(long)]
        collection: i64,
    },

    /// Browse the catalog interactively
    Tui {
        /// List shown first
        #[arg(long, value_enum, default_value_t = Start::Collections)]
        start: Start,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Start {
    Works,
    Collections,
}

impl From<Start> for ListKind {
    fn from(start: Start) -> Self {
        match start {
            Start::Works => ListKind::Works,
            Start::Collections => ListKind::Collections,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.library, cli.log_file, cli.log)?;
    init_logging(&config)?;

    let library = Library::open(&config.library)
        .with_context(|| format!("Failed to open library {}", config.library.display()))?;

    match cli.command {
        Commands::AddWork {
            title,
            author,
            kind,
        } => {
            let id = library.add_work(&NewWork {
                title,
                author,
                kind,
            })?;
            println!("{}", id);
        }
        Commands::AddCollection { title, format } => {
            let id = library.add_collection(&NewCollection { title, format })?;
            println!("{}", id);
        }
        Commands::Publish { work, collection } => {
            library
                .publish(work, collection)
                .with_context(|| format!("Failed to publish work {} in collection {}", work, collection))?;
        }
        Commands::Tui { start } => {
            let catalog = Catalog::load(&library).context("Failed to read the catalog")?;
            app::run(catalog, start.into())?;
        }
    }

    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
