//! Student views: own team, project, tasks and meetings.
//!
//! Invariants:
//! - Submissions are refused locally once a task is approved or past its
//!   deadline (`--force` sends anyway).

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use projdash_client::{SubmitTaskRequest, Task, UpdateProjectRequest};

use super::find_by_id;
use crate::context::App;
use crate::error::ViewError;

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// Your task and meeting counts
    Stats,
    /// Your team
    Team {
        /// List the members instead of the team summary
        #[arg(long)]
        members: bool,
    },
    /// Your team's project
    Project,
    /// Edit your team's project; omitted fields are left unchanged
    UpdateProject {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Technologies (comma-separated, replaces the current list)
        #[arg(long, value_delimiter = ',')]
        technologies: Option<Vec<String>>,
        #[arg(long)]
        repository: Option<String>,
    },
    /// Your tasks
    Tasks,
    /// Submit work for a task
    Submit {
        task_id: String,
        /// Link to the submitted work
        #[arg(long)]
        url: String,
        #[arg(long)]
        notes: Option<String>,
        /// Submit even if the task is closed for submissions
        #[arg(long)]
        force: bool,
    },
    /// Your upcoming meetings
    Meetings,
}

pub(crate) fn check_submission(task: &Task, now: DateTime<Utc>) -> Result<(), ViewError> {
    if !task.is_submission_locked(now) {
        return Ok(());
    }
    let reason = match task.deadline {
        Some(deadline) if now > deadline => format!(
            "its deadline passed on {}",
            deadline.format("%Y-%m-%d %H:%M UTC")
        ),
        _ => "it is already approved".to_string(),
    };
    Err(ViewError::RuleViolation(format!(
        "Task '{}' is closed for submissions: {reason} (use --force to submit anyway)",
        task.id
    )))
}

pub async fn run(app: &App, command: StudentCommand) -> Result<()> {
    let client = app.client();

    match command {
        StudentCommand::Stats => {
            let scope = app.open("/student/dashboard")?;
            let stats = app
                .fetch(&scope, "Loading statistics", client.student_stats())
                .await?;
            app.print_one(&stats)
        }
        StudentCommand::Team { members } => {
            let scope = app.open("/student/team")?;
            let team = app
                .fetch(&scope, "Loading team", client.my_team())
                .await?;
            if members {
                app.print_list(&team.members)
            } else {
                app.print_one(&team)
            }
        }
        StudentCommand::Project => {
            let scope = app.open("/student/project")?;
            let project = app
                .fetch(&scope, "Loading project", client.my_project())
                .await?;
            app.print_one(&project)
        }
        StudentCommand::UpdateProject {
            title,
            description,
            technologies,
            repository,
        } => {
            let scope = app.open("/student/project")?;
            let request = UpdateProjectRequest {
                title,
                description,
                technologies,
                repository_url: repository,
            };
            let project = app
                .fetch(&scope, "Saving project", client.update_my_project(&request))
                .await?;
            app.print_one(&project)
        }
        StudentCommand::Tasks => {
            let scope = app.open("/student/tasks")?;
            let tasks = app
                .fetch(&scope, "Loading tasks", client.my_tasks())
                .await?;
            app.print_list(&tasks)
        }
        StudentCommand::Submit {
            task_id,
            url,
            notes,
            force,
        } => {
            let scope = app.open("/student/tasks")?;
            if !force {
                let tasks = app
                    .fetch(&scope, "Loading tasks", client.my_tasks())
                    .await?;
                let task = find_by_id(&tasks, &task_id, "Task", |t| t.id.as_str())?;
                check_submission(task, Utc::now())?;
            }
            let request = SubmitTaskRequest {
                submission_url: url,
                notes,
            };
            let task = app
                .fetch(&scope, "Submitting", client.submit_task(&task_id, &request))
                .await?;
            app.print_one(&task)
        }
        StudentCommand::Meetings => {
            let scope = app.open("/student/meetings")?;
            let meetings = app
                .fetch(&scope, "Loading meetings", client.my_meetings())
                .await?;
            app.print_list(&meetings)
        }
    }
}
