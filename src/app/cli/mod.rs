//! CLI Adapter.

mod init;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

const DEFAULT_LOG_FILTER: &str = "shade=warn";
const VERBOSE_LOG_FILTER: &str = "shade=debug";

#[derive(Parser)]
#[command(name = "shade")]
#[command(version)]
#[command(
    about = "Initialize Tailwind, theme CSS and utilities for Vue component projects",
    long_about = None
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize components.json and install dependencies
    #[clap(visible_alias = "i")]
    Init {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Project directory (defaults to the current directory)
        #[arg(short, long)]
        cwd: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { yes, cwd } => init::run_init(cwd, yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over `--verbose`. Logs go to stderr so stdout stays clean.
fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
