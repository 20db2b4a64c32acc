//! Login, registration, logout and `whoami`.
//!
//! Invariants:
//! - Passwords come from flags, `PROJDASH_PASSWORD` or a no-echo prompt and are
//!   held as `SecretString` until the request body is built.
//! - A rejected login leaves any existing session in place.

use anyhow::Result;
use projdash_client::{LOGIN_PATH, RegisterRequest, Role};
use secrecy::ExposeSecret;
use tracing::info;

use crate::context::App;
use crate::error::ViewError;
use crate::prompt::{secret_or_prompt, text_or_prompt};

/// Account fields for `projdash register`.
#[derive(Debug)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub roll_number: Option<String>,
    pub department: Option<String>,
}

pub async fn run_login(app: &App, email: Option<String>, password: Option<String>) -> Result<()> {
    let scope = app.open(LOGIN_PATH)?;
    let email = text_or_prompt(email, "Email")?;
    let password = secret_or_prompt(password, "Password")?;

    let user = app
        .fetch(&scope, "Logging in", app.client().login(&email, &password))
        .await?;

    println!(
        "Logged in as {} ({}). Dashboard: {}",
        user.name,
        user.role,
        user.role.home()
    );
    Ok(())
}

pub async fn run_register(app: &App, account: NewAccount, password: Option<String>) -> Result<()> {
    let scope = app.open("/register")?;
    let password = secret_or_prompt(password, "Password")?;

    info!(email = %account.email, role = %account.role, "Registering account");
    let request = RegisterRequest {
        name: account.name,
        email: account.email,
        password: password.expose_secret().to_string(),
        role: account.role,
        roll_number: account.roll_number,
        department: account.department,
    };

    let response = app
        .fetch(&scope, "Registering", app.client().register(&request))
        .await?;
    println!("{}", response.message);
    Ok(())
}

pub fn run_logout(app: &App) -> Result<()> {
    let was_logged_in = app.client().is_logged_in();
    app.client().logout()?;
    if was_logged_in {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

pub async fn run_whoami(app: &App, refresh: bool) -> Result<()> {
    let scope = app.open("/profile")?;
    let user = if refresh {
        app.fetch(&scope, "Loading profile", app.client().get_profile())
            .await?
    } else {
        app.user().ok_or(ViewError::NotLoggedIn)?
    };
    app.print_one(&user)
}
