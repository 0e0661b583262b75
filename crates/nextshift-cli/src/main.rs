mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nextshift_analyzer::{Config, CONFIG_FILE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nextshift")]
#[command(version, about = "nextshift CLI - plan a Next.js to Vite + React Router migration", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project and estimate migration complexity
    Analyze {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the project's routes with their React Router equivalents
    Routes {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Translate Next.js route paths
    Translate {
        /// Paths such as /products/[id]
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Write a default nextshift.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable report (default)
    Text,
    /// Machine-readable JSON on stdout
    Json,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Using config file {:?}", cli.config);

    // Execute command
    match cli.command {
        Commands::Analyze { dir, format } => {
            let config = Config::load(&cli.config)?.with_env_overrides()?;
            commands::analyze::execute(&dir, &config, format)?;
        }
        Commands::Routes { dir, format } => {
            let config = Config::load(&cli.config)?;
            commands::routes::execute(&dir, &config, format)?;
        }
        Commands::Translate { paths } => {
            commands::translate::execute(&paths)?;
        }
        Commands::Init { force } => {
            commands::init::execute(&cli.config, force)?;
        }
    }

    Ok(())
}
