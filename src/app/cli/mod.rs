//! CLI Adapter.

mod create;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "kscaffold")]
#[command(version)]
#[command(about = "Scaffold kustomize webhook overlays into operator projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold manifests for a resource
    #[clap(visible_alias = "c")]
    Create {
        #[command(subcommand)]
        command: create::CreateCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Create { command } => create::run_create(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, honouring `RUST_LOG` and defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .init();
}
