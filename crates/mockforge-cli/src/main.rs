mod commands;
mod error;
mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "mockforge",
    version,
    about = "Mock data generation and placeholder image download toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate mock records for a registered composite type.
    Mock(commands::mock::MockArgs),
    /// Download placeholder images from a provider.
    #[command(subcommand)]
    Download(commands::download::DownloadSource),
    /// List the registered composite types.
    Types {
        /// Extra type definitions (JSON file).
        #[arg(long, value_name = "FILE")]
        types: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Command::Mock(args) => commands::mock::run(args),
        Command::Download(source) => commands::download::run(source).await,
        Command::Types { types } => commands::mock::list_types(types.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
