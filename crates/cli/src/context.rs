//! Per-invocation state shared by every command.
//!
//! Responsibilities:
//! - Merge CLI flags over env/file configuration.
//! - Build the session store, router and client once per run.
//! - Open views through the route guard and run their loads in a scope
//!   tied to the Ctrl+C token.
//!
//! Does NOT handle:
//! - Command-specific arguments (see `commands`).
//!
//! Invariants:
//! - No request is sent for a view the guard refuses.
//! - The client and router share one session store, so a 401/403 teardown
//!   is visible to later guard checks in the same run.

use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use projdash_client::{
    CancellationToken, ClientError, FileSessionStore, GuardDecision, LOGIN_PATH, LoadState,
    ProjectClient, Router, SessionStore, User, ViewScope,
};
use projdash_config::{Config, ConfigLoader};
use tracing::debug;

use crate::args::Cli;
use crate::error::ViewError;
use crate::formatters::{OutputFormat, Record, Rendered, get_formatter, output_result};
use crate::progress::Spinner;

/// Resolve configuration: CLI flags > environment > config file > defaults.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    let mut loader = loader
        .from_env()
        .context("Invalid environment configuration")?
        .from_file()
        .context("Invalid configuration file")?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(path) = &cli.session_file {
        loader = loader.with_session_file(path.clone());
    }

    Ok(loader.build()?)
}

/// Where and how command output is written.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub file: Option<PathBuf>,
    pub quiet: bool,
}

impl OutputOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.output,
            file: cli.output_file.clone(),
            quiet: cli.quiet,
        }
    }
}

/// Client, router and output settings for one run.
pub struct App {
    client: ProjectClient,
    router: Arc<Router>,
    output: OutputOptions,
    cancel: CancellationToken,
}

impl App {
    pub fn new(config: &Config, output: OutputOptions, cancel: &CancellationToken) -> Result<Self> {
        let store = match &config.session.session_file {
            Some(path) => FileSessionStore::new(path.clone()),
            None => FileSessionStore::at_default_location()?,
        };
        debug!(path = %store.path().display(), "Using session file");
        let store: Arc<dyn SessionStore> = Arc::new(store);

        let router = Arc::new(Router::new());
        let client = ProjectClient::builder()
            .from_config(config)
            .session_store(store)
            .navigator(router.clone())
            .build()
            .context("Failed to build API client")?;

        Ok(Self {
            client,
            router,
            output,
            cancel: cancel.clone(),
        })
    }

    pub fn client(&self) -> &ProjectClient {
        &self.client
    }

    pub fn user(&self) -> Option<User> {
        self.client.current_user()
    }

    /// Open the view at `path`, or explain why the session may not.
    pub fn open(&self, path: &str) -> Result<ViewScope> {
        match self.router.navigate(path, self.client.session_store().as_ref()) {
            GuardDecision::Render => Ok(ViewScope::child_of(&self.cancel)),
            GuardDecision::Redirect(LOGIN_PATH) => Err(ViewError::NotLoggedIn.into()),
            GuardDecision::Redirect(_) => {
                let role = self.user().map(|u| u.role).ok_or(ViewError::NotLoggedIn)?;
                Err(ViewError::Forbidden {
                    role,
                    path: path.to_string(),
                }
                .into())
            }
            GuardDecision::NotFound => Err(ViewError::UnknownView(path.to_string()).into()),
        }
    }

    /// Run one load in `scope` with a spinner on stderr.
    pub async fn fetch<T, F>(&self, scope: &ViewScope, label: &str, fut: F) -> Result<T>
    where
        F: Future<Output = projdash_client::Result<T>>,
    {
        let spinner = Spinner::new(!self.output.quiet, label);
        let mut state = LoadState::Idle;
        scope.load(&mut state, fut).await;
        spinner.finish();

        match state.into_result() {
            Some(result) => Ok(result?),
            None => Err(ClientError::Cancelled.into()),
        }
    }

    pub fn print_list<R: Record>(&self, items: &[R]) -> Result<()> {
        self.emit(&Rendered::list(items)?)
    }

    pub fn print_one<R: Record>(&self, item: &R) -> Result<()> {
        self.emit(&Rendered::single(item)?)
    }

    fn emit(&self, records: &Rendered) -> Result<()> {
        let output = get_formatter(self.output.format).format(records)?;
        output_result(&output, self.output.format, self.output.file.as_ref())
    }
}
