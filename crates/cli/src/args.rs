//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration sources (see `context::load_config`).

use clap::{Parser, Subcommand};
use projdash_client::Role;
use std::path::PathBuf;

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "projdash")]
#[command(
    about = "projdash - academic project dashboard from the command line",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  projdash login --email admin@college.edu\n  projdash dashboard\n  projdash admin users --role student\n  projdash guide tasks team-1\n  projdash student submit task-7 --url https://github.com/team/repo/pull/3\n  projdash mom show meeting-4 --output json\n"
)]
pub struct Cli {
    /// Base URL of the dashboard backend (e.g., http://localhost:5000/api)
    #[arg(short, long, global = true, env = "PROJDASH_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "PROJDASH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path of the session file holding the token and cached user
    #[arg(long, global = true, env = "PROJDASH_SESSION_FILE", value_name = "FILE")]
    pub session_file: Option<PathBuf>,

    /// Path to a custom configuration file (overrides default location).
    #[arg(long, global = true, env = "PROJDASH_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Suppress progress spinners.
    ///
    /// Note: spinners always write to STDERR; this flag disables them entirely.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session
    Login {
        /// Account email
        #[arg(short, long, env = "PROJDASH_EMAIL")]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(short, long, env = "PROJDASH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create a new account
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Role of the new account (admin, guide or student)
        #[arg(long, default_value = "student")]
        role: Role,

        /// University roll number (students)
        #[arg(long)]
        roll_number: Option<String>,

        /// Department
        #[arg(long)]
        department: Option<String>,

        /// Password (prompted when omitted)
        #[arg(short, long, env = "PROJDASH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami {
        /// Re-fetch the profile from the backend instead of the cached copy
        #[arg(long)]
        refresh: bool,
    },

    /// Open the dashboard for the logged-in user's role
    Dashboard,

    /// View and edit your profile
    Profile {
        #[command(subcommand)]
        command: commands::profile::ProfileCommand,
    },

    /// Administrator views
    Admin {
        #[command(subcommand)]
        command: commands::admin::AdminCommand,
    },

    /// Guide views
    Guide {
        #[command(subcommand)]
        command: commands::guide::GuideCommand,
    },

    /// Student views
    Student {
        #[command(subcommand)]
        command: commands::student::StudentCommand,
    },

    /// Minutes of meeting
    Mom {
        #[command(subcommand)]
        command: commands::minutes::MinutesCommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "projdash",
            "admin",
            "stats",
            "--output",
            "json",
            "--base-url",
            "http://backend:5000/api",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.base_url.as_deref(), Some("http://backend:5000/api"));
    }

    #[test]
    fn test_register_rejects_unknown_role() {
        let result = Cli::try_parse_from([
            "projdash",
            "register",
            "--name",
            "Asha",
            "--email",
            "asha@college.edu",
            "--role",
            "dean",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_register_role_defaults_to_student() {
        let cli = Cli::try_parse_from([
            "projdash",
            "register",
            "--name",
            "Asha",
            "--email",
            "asha@college.edu",
        ])
        .unwrap();
        match cli.command {
            Commands::Register { role, .. } => assert_eq!(role, Role::Student),
            _ => panic!("expected register"),
        }
    }
}
