mod commands;

#[cfg(feature = "watch")]
mod watcher;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "solidus")]
#[command(version, about = "Solidus CLI - typed route-path accessors for your route tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter solidus.toml in the current directory
    Init {
        /// Overwrite an existing solidus.toml
        #[arg(long)]
        force: bool,
    },

    /// Run one generation pass
    Generate {
        #[command(flatten)]
        options: GenerateOptions,
    },

    /// Regenerate on every change of the route tree
    Watch {
        #[command(flatten)]
        options: GenerateOptions,
    },
}

/// Options shared by `generate` and `watch`.
#[derive(Args)]
struct GenerateOptions {
    /// Project root for resolving relative paths
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file (default: solidus.toml under the project root)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Route-tree artifact to scan (overrides the config file)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Generated module to write (overrides the config file)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Name of the emitted accessor class (overrides the config file)
    #[arg(long)]
    class_name: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    match cli.command {
        Commands::Init { force } => {
            commands::init::execute(force)?;
        }
        Commands::Generate { options } => {
            commands::generate::execute(&options)?;
        }
        Commands::Watch { options } => {
            commands::watch::execute(&options)?;
        }
    }

    Ok(())
}

/// Library diagnostics are opt-in through RUST_LOG; the colored status lines
/// each command prints are the default surface.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
