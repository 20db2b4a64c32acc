//! projdash - command-line dashboard for academic project management.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build configuration, the session store, the router and the client.
//! - Run one role-scoped view per invocation and map failures to exit codes.
//!
//! Does NOT handle:
//! - REST API details or session teardown (see `crates/client`).
//! - Configuration precedence rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout is reserved for command output.

mod args;
mod cancellation;
mod commands;
mod context;
mod dispatch;
mod error;
mod formatters;
mod progress;
mod prompt;

use args::Cli;
use cancellation::{is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use projdash_client::{CancellationToken, ClientError};
use projdash_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match context::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            match e.downcast_ref::<ClientError>() {
                Some(client_error) => eprintln!("Error: {}", client_error.user_message()),
                None => eprintln!("Error: {:#}", e),
            }
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
