//! Administrator views.
//!
//! Responsibilities:
//! - User, team and project management.
//! - Academic reference data (courses, branches, sections, semesters).
//! - Team report downloads.
//!
//! Invariants:
//! - Every subcommand opens a path under `/admin`, so only the admin role gets
//!   as far as a request.
//! - Deletes ask for confirmation unless `--force` is given.

use anyhow::Result;
use clap::Subcommand;
use projdash_client::{
    CreateTeamRequest, CreateUserRequest, ProjectStatus, ProjectStatusRequest, Role,
};
use projdash_config::constants::DEFAULT_LIST_PAGE_SIZE;
use secrecy::ExposeSecret;
use std::path::PathBuf;
use tracing::info;

use crate::context::App;
use crate::formatters::write_bytes_to_file;
use crate::prompt::{confirm_delete, secret_or_prompt};

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Totals across the department
    Stats,
    /// List users
    Users {
        /// Only users with this role
        #[arg(long)]
        role: Option<Role>,
        /// Maximum number of users to list
        #[arg(short, long, default_value_t = DEFAULT_LIST_PAGE_SIZE)]
        count: usize,
    },
    /// Create a user account
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: Role,
        /// Initial password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        roll_number: Option<String>,
    },
    /// Delete a user account
    DeleteUser {
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// List teams
    Teams {
        /// Maximum number of teams to list
        #[arg(short, long, default_value_t = DEFAULT_LIST_PAGE_SIZE)]
        count: usize,
    },
    /// Create a team from existing student accounts
    CreateTeam {
        #[arg(long)]
        name: String,
        /// Student ids (comma-separated, at least one required)
        #[arg(long, value_delimiter = ',', required = true)]
        members: Vec<String>,
        /// Guide to assign right away
        #[arg(long)]
        guide: Option<String>,
        #[arg(long)]
        batch: Option<String>,
    },
    /// Assign (or replace) a team's guide
    AssignGuide { team_id: String, guide_id: String },
    /// Delete a team
    DeleteTeam {
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// List projects
    Projects {
        /// Only projects in this status
        #[arg(long)]
        status: Option<ProjectStatus>,
        /// Maximum number of projects to list
        #[arg(short, long, default_value_t = DEFAULT_LIST_PAGE_SIZE)]
        count: usize,
    },
    /// Approve, reject or otherwise move a project
    SetProjectStatus {
        project_id: String,
        status: ProjectStatus,
        #[arg(long)]
        remarks: Option<String>,
    },
    /// List courses
    Courses,
    /// List branches
    Branches,
    /// List sections
    Sections,
    /// List semesters
    Semesters,
    /// Download a team's progress report
    Report {
        team_id: String,
        /// Where to save the report
        #[arg(long, value_name = "FILE")]
        save: PathBuf,
    },
}

fn truncated<T>(mut items: Vec<T>, count: usize) -> Vec<T> {
    items.truncate(count);
    items
}

pub async fn run(app: &App, command: AdminCommand) -> Result<()> {
    let client = app.client();

    match command {
        AdminCommand::Stats => {
            let scope = app.open("/admin/dashboard")?;
            let stats = app
                .fetch(&scope, "Loading statistics", client.admin_stats())
                .await?;
            app.print_one(&stats)
        }
        AdminCommand::Users { role, count } => {
            let scope = app.open("/admin/users")?;
            let users = app
                .fetch(&scope, "Loading users", client.list_users(role))
                .await?;
            app.print_list(&truncated(users, count))
        }
        AdminCommand::CreateUser {
            name,
            email,
            role,
            password,
            department,
            roll_number,
        } => {
            let scope = app.open("/admin/users")?;
            let password = secret_or_prompt(password, &format!("Password for {email}"))?;
            info!(email = %email, role = %role, "Creating user");
            let request = CreateUserRequest {
                name,
                email,
                password: password.expose_secret().to_string(),
                role,
                department,
                roll_number,
            };
            let user = app
                .fetch(&scope, "Creating user", client.create_user(&request))
                .await?;
            println!("User '{}' created with id {}.", user.name, user.id);
            Ok(())
        }
        AdminCommand::DeleteUser { id, force } => {
            let scope = app.open("/admin/users")?;
            if !confirm_delete(&id, "user", force)? {
                return Ok(());
            }
            info!(user_id = %id, "Deleting user");
            app.fetch(&scope, "Deleting user", client.delete_user(&id))
                .await?;
            println!("User '{}' deleted.", id);
            Ok(())
        }
        AdminCommand::Teams { count } => {
            let scope = app.open("/admin/teams")?;
            let teams = app
                .fetch(&scope, "Loading teams", client.list_teams())
                .await?;
            app.print_list(&truncated(teams, count))
        }
        AdminCommand::CreateTeam {
            name,
            members,
            guide,
            batch,
        } => {
            let scope = app.open("/admin/teams")?;
            let request = CreateTeamRequest {
                name,
                member_ids: members,
                guide_id: guide,
                batch,
            };
            let team = app
                .fetch(&scope, "Creating team", client.create_team(&request))
                .await?;
            println!("Team '{}' created with id {}.", team.name, team.id);
            Ok(())
        }
        AdminCommand::AssignGuide { team_id, guide_id } => {
            let scope = app.open("/admin/teams")?;
            let team = app
                .fetch(
                    &scope,
                    "Assigning guide",
                    client.assign_guide(&team_id, &guide_id),
                )
                .await?;
            app.print_one(&team)
        }
        AdminCommand::DeleteTeam { id, force } => {
            let scope = app.open("/admin/teams")?;
            if !confirm_delete(&id, "team", force)? {
                return Ok(());
            }
            info!(team_id = %id, "Deleting team");
            app.fetch(&scope, "Deleting team", client.delete_team(&id))
                .await?;
            println!("Team '{}' deleted.", id);
            Ok(())
        }
        AdminCommand::Projects { status, count } => {
            let scope = app.open("/admin/projects")?;
            let projects = app
                .fetch(&scope, "Loading projects", client.list_projects(status))
                .await?;
            app.print_list(&truncated(projects, count))
        }
        AdminCommand::SetProjectStatus {
            project_id,
            status,
            remarks,
        } => {
            let scope = app.open("/admin/projects")?;
            let request = ProjectStatusRequest { status, remarks };
            let project = app
                .fetch(
                    &scope,
                    "Updating project",
                    client.update_project_status(&project_id, &request),
                )
                .await?;
            app.print_one(&project)
        }
        AdminCommand::Courses => {
            let scope = app.open("/admin/academics")?;
            let courses = app
                .fetch(&scope, "Loading courses", client.list_courses())
                .await?;
            app.print_list(&courses)
        }
        AdminCommand::Branches => {
            let scope = app.open("/admin/academics")?;
            let branches = app
                .fetch(&scope, "Loading branches", client.list_branches())
                .await?;
            app.print_list(&branches)
        }
        AdminCommand::Sections => {
            let scope = app.open("/admin/academics")?;
            let sections = app
                .fetch(&scope, "Loading sections", client.list_sections())
                .await?;
            app.print_list(&sections)
        }
        AdminCommand::Semesters => {
            let scope = app.open("/admin/academics")?;
            let semesters = app
                .fetch(&scope, "Loading semesters", client.list_semesters())
                .await?;
            app.print_list(&semesters)
        }
        AdminCommand::Report { team_id, save } => {
            let scope = app.open("/admin/reports")?;
            let bytes = app
                .fetch(
                    &scope,
                    "Downloading report",
                    client.download_team_report(&team_id),
                )
                .await?;
            write_bytes_to_file(&bytes, &save)
        }
    }
}
