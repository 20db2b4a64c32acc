//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the per-run [`App`] and route parsed CLI arguments to command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `context::load_config`).
//!
//! Invariants:
//! - All commands receive the same cancellation token through `App`.

use anyhow::Result;
use projdash_client::CancellationToken;
use projdash_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::context::{App, OutputOptions};

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let app = App::new(&config, OutputOptions::from_cli(&cli), cancel_token)?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::run_login(&app, email, password).await,
        Commands::Register {
            name,
            email,
            role,
            roll_number,
            department,
            password,
        } => {
            let account = commands::auth::NewAccount {
                name,
                email,
                role,
                roll_number,
                department,
            };
            commands::auth::run_register(&app, account, password).await
        }
        Commands::Logout => commands::auth::run_logout(&app),
        Commands::Whoami { refresh } => commands::auth::run_whoami(&app, refresh).await,
        Commands::Dashboard => commands::dashboard::run(&app).await,
        Commands::Profile { command } => commands::profile::run(&app, command).await,
        Commands::Admin { command } => commands::admin::run(&app, command).await,
        Commands::Guide { command } => commands::guide::run(&app, command).await,
        Commands::Student { command } => commands::student::run(&app, command).await,
        Commands::Mom { command } => commands::minutes::run(&app, command).await,
    }
}
