//! Guide views: assigned teams, their tasks, reviews and meetings.
//!
//! Invariants:
//! - A review is refused locally when the task's current status cannot move
//!   to the requested one (`--force` sends it anyway).

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use projdash_client::{
    Attendance, AttendanceRequest, CreateTaskRequest, ReviewTaskRequest, ScheduleMeetingRequest,
    TaskStatus,
};

use super::find_by_id;
use crate::context::App;
use crate::error::ViewError;

#[derive(Debug, Subcommand)]
pub enum GuideCommand {
    /// Your teams, pending reviews and upcoming meetings
    Stats,
    /// Teams you guide
    Teams,
    /// Tasks of one team
    Tasks { team_id: String },
    /// Assign a task to a team
    CreateTask {
        team_id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Student id the task is for (whole team when omitted)
        #[arg(long)]
        assigned_to: Option<String>,
        /// RFC 3339 timestamp, e.g. 2025-04-01T18:00:00Z
        #[arg(long)]
        deadline: Option<DateTime<Utc>>,
    },
    /// Approve or reject a submitted task
    Review {
        team_id: String,
        task_id: String,
        /// approved or rejected
        #[arg(long)]
        status: TaskStatus,
        #[arg(long)]
        feedback: Option<String>,
        /// Send the review even if the task's status does not allow it
        #[arg(long)]
        force: bool,
    },
    /// Meetings you scheduled
    Meetings,
    /// Schedule a meeting with a team
    Schedule {
        team_id: String,
        #[arg(long)]
        title: String,
        /// RFC 3339 timestamp, e.g. 2025-04-01T10:30:00Z
        #[arg(long)]
        at: DateTime<Utc>,
        #[arg(long)]
        agenda: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Record who attended a meeting
    Attendance {
        meeting_id: String,
        /// Student ids present (comma-separated)
        #[arg(long, value_delimiter = ',')]
        present: Vec<String>,
        /// Student ids absent (comma-separated)
        #[arg(long, value_delimiter = ',')]
        absent: Vec<String>,
    },
}

/// Attendance rows for the students marked present and absent.
pub(crate) fn attendance_rows(present: Vec<String>, absent: Vec<String>) -> Result<Vec<Attendance>, ViewError> {
    if present.is_empty() && absent.is_empty() {
        return Err(ViewError::RuleViolation(
            "Mark at least one student with --present or --absent".to_string(),
        ));
    }
    if let Some(both) = present.iter().find(|id| absent.contains(id)) {
        return Err(ViewError::RuleViolation(format!(
            "Student '{both}' is marked both present and absent"
        )));
    }
    let row = |student_id: String, present: bool| Attendance {
        student_id,
        present,
        remarks: None,
    };
    Ok(present
        .into_iter()
        .map(|id| row(id, true))
        .chain(absent.into_iter().map(|id| row(id, false)))
        .collect())
}

pub(crate) fn check_review(current: TaskStatus, next: TaskStatus, task_id: &str) -> Result<(), ViewError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(ViewError::RuleViolation(format!(
            "Task '{task_id}' is {current} and cannot be marked {next} (use --force to send anyway)"
        )))
    }
}

pub async fn run(app: &App, command: GuideCommand) -> Result<()> {
    let client = app.client();

    match command {
        GuideCommand::Stats => {
            let scope = app.open("/guide/dashboard")?;
            let stats = app
                .fetch(&scope, "Loading statistics", client.guide_stats())
                .await?;
            app.print_one(&stats)
        }
        GuideCommand::Teams => {
            let scope = app.open("/guide/teams")?;
            let teams = app
                .fetch(&scope, "Loading teams", client.guide_teams())
                .await?;
            app.print_list(&teams)
        }
        GuideCommand::Tasks { team_id } => {
            let scope = app.open("/guide/tasks")?;
            let tasks = app
                .fetch(&scope, "Loading tasks", client.team_tasks(&team_id))
                .await?;
            app.print_list(&tasks)
        }
        GuideCommand::CreateTask {
            team_id,
            title,
            description,
            assigned_to,
            deadline,
        } => {
            let scope = app.open("/guide/tasks")?;
            let request = CreateTaskRequest {
                title,
                description,
                assigned_to,
                deadline,
            };
            let task = app
                .fetch(&scope, "Creating task", client.create_task(&team_id, &request))
                .await?;
            app.print_one(&task)
        }
        GuideCommand::Review {
            team_id,
            task_id,
            status,
            feedback,
            force,
        } => {
            let scope = app.open("/guide/tasks")?;
            if !force {
                let tasks = app
                    .fetch(&scope, "Loading tasks", client.team_tasks(&team_id))
                    .await?;
                let task = find_by_id(&tasks, &task_id, "Task", |t| t.id.as_str())?;
                check_review(task.status, status, &task_id)?;
            }
            let request = ReviewTaskRequest { status, feedback };
            let task = app
                .fetch(&scope, "Saving review", client.review_task(&task_id, &request))
                .await?;
            app.print_one(&task)
        }
        GuideCommand::Meetings => {
            let scope = app.open("/guide/meetings")?;
            let meetings = app
                .fetch(&scope, "Loading meetings", client.guide_meetings())
                .await?;
            app.print_list(&meetings)
        }
        GuideCommand::Schedule {
            team_id,
            title,
            at,
            agenda,
            location,
        } => {
            let scope = app.open("/guide/meetings")?;
            let request = ScheduleMeetingRequest {
                team_id,
                title,
                scheduled_at: at,
                agenda,
                location,
            };
            let meeting = app
                .fetch(&scope, "Scheduling meeting", client.schedule_meeting(&request))
                .await?;
            app.print_one(&meeting)
        }
        GuideCommand::Attendance {
            meeting_id,
            present,
            absent,
        } => {
            let scope = app.open("/guide/meetings")?;
            let request = AttendanceRequest {
                attendance: attendance_rows(present, absent)?,
            };
            let response = app
                .fetch(
                    &scope,
                    "Recording attendance",
                    client.record_attendance(&meeting_id, &request),
                )
                .await?;
            println!("{}", response.message);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_allowed_from_submitted() {
        assert!(check_review(TaskStatus::Submitted, TaskStatus::Approved, "t1").is_ok());
        assert!(check_review(TaskStatus::Submitted, TaskStatus::Rejected, "t1").is_ok());
    }

    #[test]
    fn test_review_refused_before_submission() {
        let err = check_review(TaskStatus::Pending, TaskStatus::Approved, "t1").unwrap_err();
        assert!(err.to_string().contains("is pending and cannot be marked approved"));
    }

    #[test]
    fn test_attendance_rows() {
        let rows = attendance_rows(vec!["s1".into(), "s2".into()], vec!["s3".into()]).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].present);
        assert!(!rows[2].present);
        assert_eq!(rows[2].student_id, "s3");
    }

    #[test]
    fn test_attendance_requires_someone() {
        assert!(attendance_rows(vec![], vec![]).is_err());
    }

    #[test]
    fn test_attendance_rejects_contradiction() {
        let err = attendance_rows(vec!["s1".into()], vec!["s1".into()]).unwrap_err();
        assert!(err.to_string().contains("both present and absent"));
    }
}
