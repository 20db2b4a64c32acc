//! Profile view: show, edit, change password.

use anyhow::Result;
use clap::Subcommand;
use projdash_client::{ChangePasswordRequest, UpdateProfileRequest};
use secrecy::ExposeSecret;

use crate::context::App;
use crate::prompt::secret_or_prompt;

const PROFILE_PATH: &str = "/profile";

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile (fetched from the backend)
    Show,
    /// Update profile fields; omitted fields are left unchanged
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Change your password (prompts for anything not given)
    Password {
        #[arg(long, env = "PROJDASH_CURRENT_PASSWORD", hide_env_values = true)]
        current: Option<String>,
        #[arg(long, env = "PROJDASH_NEW_PASSWORD", hide_env_values = true)]
        new: Option<String>,
    },
}

pub async fn run(app: &App, command: ProfileCommand) -> Result<()> {
    let scope = app.open(PROFILE_PATH)?;
    let client = app.client();

    match command {
        ProfileCommand::Show => {
            let user = app
                .fetch(&scope, "Loading profile", client.get_profile())
                .await?;
            app.print_one(&user)
        }
        ProfileCommand::Update {
            name,
            phone,
            department,
        } => {
            let request = UpdateProfileRequest {
                name,
                phone,
                department,
            };
            let user = app
                .fetch(&scope, "Saving profile", client.update_profile(&request))
                .await?;
            app.print_one(&user)
        }
        ProfileCommand::Password { current, new } => {
            let current = secret_or_prompt(current, "Current password")?;
            let new = secret_or_prompt(new, "New password")?;
            let request = ChangePasswordRequest {
                current_password: current.expose_secret().to_string(),
                new_password: new.expose_secret().to_string(),
            };
            let response = app
                .fetch(&scope, "Changing password", client.change_password(&request))
                .await?;
            println!("{}", response.message);
            Ok(())
        }
    }
}
