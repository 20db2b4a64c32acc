//! `projdash dashboard`: the stats view for the logged-in user's role.

use anyhow::Result;
use projdash_client::Role;

use crate::context::App;
use crate::error::ViewError;

pub async fn run(app: &App) -> Result<()> {
    let role = app.user().map(|u| u.role).ok_or(ViewError::NotLoggedIn)?;
    let scope = app.open(role.home())?;
    let client = app.client();

    match role {
        Role::Admin => {
            let stats = app
                .fetch(&scope, "Loading dashboard", client.admin_stats())
                .await?;
            app.print_one(&stats)
        }
        Role::Guide => {
            let stats = app
                .fetch(&scope, "Loading dashboard", client.guide_stats())
                .await?;
            app.print_one(&stats)
        }
        Role::Student => {
            let stats = app
                .fetch(&scope, "Loading dashboard", client.student_stats())
                .await?;
            app.print_one(&stats)
        }
    }
}
