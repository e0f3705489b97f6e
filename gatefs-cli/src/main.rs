use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::RegistrySource;
use crate::error::Result;

mod commands;
mod config;
mod error;
mod interactive;
mod utils;

#[derive(Parser)]
#[command(name = "gatefs")]
#[command(about = "Whitelisted read-only file explorer")]
#[command(version = "0.1.0")]
struct Cli {
    /// Expose every regular file below this directory
    #[arg(long, global = true, conflicts_with = "manifest")]
    dir: Option<PathBuf>,

    /// Manifest describing the exposed files (defaults to $GATEFS_MANIFEST)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the exposed files
    Files {
        /// Print the listing as a JSON manifest
        #[arg(long)]
        json: bool,
    },
    /// Print the content of an exposed file
    Cat {
        /// Name relative to the base (e.g., app/plugin.json)
        name: String,
    },
    /// Show metadata of an exposed file
    Stat {
        /// Name relative to the base (e.g., app/plugin.json)
        name: String,
    },
    /// Show the exposed files as a tree
    Tree {
        /// Maximum depth to show
        #[arg(short, long, default_value = "3")]
        depth: usize,
        /// Only show the subtree below this name
        path: Option<String>,
    },
    /// Show statistics about the registry
    Stats,
    /// Write a manifest exposing every file below a directory
    Scan {
        /// Directory to scan; it becomes the base of the manifest
        dir: PathBuf,
        /// Where to write the manifest (defaults to $GATEFS_MANIFEST)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start interactive mode
    Interactive,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let source = RegistrySource::resolve(cli.dir, cli.manifest);

    match cli.command {
        Some(Commands::Files { json }) => {
            commands::files::execute(&source, json)?;
        }
        Some(Commands::Cat { name }) => {
            commands::cat::execute(&source, &name)?;
        }
        Some(Commands::Stat { name }) => {
            commands::stat::execute(&source, &name)?;
        }
        Some(Commands::Tree { depth, path }) => {
            commands::tree::execute(&source, depth, path)?;
        }
        Some(Commands::Stats) => {
            commands::stats::execute(&source)?;
        }
        Some(Commands::Scan { dir, output }) => {
            commands::scan::execute(&dir, output).await?;
        }
        Some(Commands::Interactive) | None => {
            interactive::run(&source).await?;
        }
    }

    Ok(())
}
