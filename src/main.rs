//! CompeteIQ CLI
//!
//! Command-line interface for the Brief collection:
//! - List and inspect briefs
//! - Create, update and delete briefs
//! - Filter by exact field values
//! - Generate a default config file
//!
//! Operates on the same file-backed collection layout the application uses,
//! one JSON array per data directory.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use competeiq::config::{generate_default_config, Config};
use competeiq::store::{Brief, BriefStore, FileBackend};

#[derive(Parser)]
#[command(name = "competeiq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Competitor intelligence briefs from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Override the brief collection file
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List briefs
    List {
        /// Sort directive; leading '-' means descending
        #[arg(short, long, default_value = "-created_date")]
        sort: String,
        /// Maximum number of briefs to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show a single brief
    Show {
        /// Brief id
        id: u64,
    },

    /// Create a brief from key=value fields
    Create {
        /// Fields in key=value format (values parsed as JSON when possible)
        fields: Vec<String>,
    },

    /// Update fields of an existing brief
    Update {
        /// Brief id
        id: u64,
        /// Fields in key=value format
        fields: Vec<String>,
    },

    /// Delete a brief
    Delete {
        /// Brief id
        id: u64,
    },

    /// Filter briefs by exact field values
    Filter {
        /// Criteria in key=value format
        criteria: Vec<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();
    init_logging(&config);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {}", path.display()))?;
                println!("Wrote default config to {}", path.display());
            }
            None => print!("{content}"),
        }
        return Ok(());
    }

    let path = cli
        .data_file
        .clone()
        .unwrap_or_else(|| config.storage.briefs_path());
    tracing::debug!("Brief collection: {:?}", path);

    let mut store =
        BriefStore::open(Box::new(FileBackend::new(&path))).context("opening brief store")?;

    match cli.command {
        Commands::List { sort, limit } => {
            let briefs = store.list(Some(&sort), limit);
            print_briefs(&briefs, &cli.format)?;
        }

        Commands::Show { id } => match store.get(id) {
            Some(brief) => print_briefs(std::slice::from_ref(brief), &cli.format)?,
            None => anyhow::bail!("Brief not found: {id}"),
        },

        Commands::Create { fields } => {
            let brief = store.create(parse_fields(&fields))?;
            println!("Created brief #{}", brief.id);
            print_briefs(&[brief], &cli.format)?;
        }

        Commands::Update { id, fields } => {
            let brief = store.update(id, parse_fields(&fields))?;
            println!("Updated brief #{}", brief.id);
            print_briefs(&[brief], &cli.format)?;
        }

        Commands::Delete { id } => {
            let brief = store.delete(id)?;
            println!("Deleted brief #{}", brief.id);
        }

        Commands::Filter { criteria } => {
            let briefs = store.filter(&parse_fields(&criteria));
            print_briefs(&briefs, &cli.format)?;
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("competeiq={}", config.logging.level)),
    );

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// Parse key=value arguments; values are taken as JSON when they parse,
/// plain strings otherwise
fn parse_fields(pairs: &[String]) -> Map<String, Value> {
    let mut map = Map::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, raw)) => {
                let value = serde_json::from_str(raw)
                    .unwrap_or_else(|_| Value::String(raw.to_string()));
                map.insert(key.to_string(), value);
            }
            None => {
                eprintln!("Invalid field (expected key=value): {pair}");
                std::process::exit(1);
            }
        }
    }
    map
}

fn print_briefs(briefs: &[Brief], format: &str) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(briefs)?),
        _ => {
            if briefs.is_empty() {
                println!("No briefs");
                return Ok(());
            }
            println!("{:<6} {:<22} {:<22} FIELDS", "ID", "CREATED", "UPDATED");
            for brief in briefs {
                println!(
                    "{:<6} {:<22} {:<22} {}",
                    brief.id,
                    brief.created_date.format("%Y-%m-%d %H:%M:%S"),
                    brief.updated_date.format("%Y-%m-%d %H:%M:%S"),
                    serde_json::to_string(&brief.fields)?,
                );
            }
        }
    }
    Ok(())
}
