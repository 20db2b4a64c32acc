//! Task models and the view-level task rules.
//!
//! `is_submission_locked` and `can_transition_to` mirror checks the dashboard
//! views apply before calling the backend. Nothing here assumes the backend
//! enforces the same rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Submitted,
    Approved,
    Rejected,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether a task may move from `self` to `next`.
    ///
    /// Approved is terminal; rejected work can only be resubmitted.
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        use TaskStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress)
                | (Pending, Submitted)
                | (InProgress, Submitted)
                | (Submitted, Approved)
                | (Submitted, Rejected)
                | (Rejected, Submitted)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!("unknown task status '{other}'")),
        }
    }
}

/// A task assigned to a team (optionally to one member).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(
        alias = "_id",
        deserialize_with = "crate::serde_helpers::id_from_string_or_number"
    )]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::serde_helpers::id_from_string_or_number")]
    pub team_id: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde_helpers::opt_id_from_string_or_number"
    )]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Task {
    /// Submissions close once the deadline has passed or the work is approved.
    pub fn is_submission_locked(&self, now: DateTime<Utc>) -> bool {
        self.status == TaskStatus::Approved || self.deadline.is_some_and(|deadline| now > deadline)
    }

    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !matches!(self.status, TaskStatus::Submitted | TaskStatus::Approved)
            && self.deadline.is_some_and(|deadline| now > deadline)
    }
}

/// Body for `POST /guide/teams/{team_id}/tasks`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

/// Body for `PUT /guide/tasks/{id}/review`.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewTaskRequest {
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Body for `POST /student/tasks/{id}/submit`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTaskRequest {
    pub submission_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn task(status: TaskStatus, deadline: Option<DateTime<Utc>>) -> Task {
        Task {
            id: "t1".to_string(),
            title: "Literature survey".to_string(),
            description: None,
            team_id: "team-1".to_string(),
            assigned_to: None,
            deadline,
            status,
            submission_url: None,
            submitted_at: None,
            feedback: None,
        }
    }

    #[test]
    fn test_submission_locked_after_deadline() {
        let deadline = Utc.with_ymd_and_hms(2025, 3, 1, 18, 0, 0).unwrap();
        let t = task(TaskStatus::InProgress, Some(deadline));
        assert!(!t.is_submission_locked(deadline - Duration::minutes(1)));
        assert!(!t.is_submission_locked(deadline));
        assert!(t.is_submission_locked(deadline + Duration::seconds(1)));
    }

    #[test]
    fn test_submission_locked_when_approved() {
        let t = task(TaskStatus::Approved, None);
        assert!(t.is_submission_locked(Utc::now()));
    }

    #[test]
    fn test_no_deadline_never_locks_open_task() {
        let t = task(TaskStatus::Rejected, None);
        assert!(!t.is_submission_locked(Utc::now()));
        assert!(!t.is_overdue(Utc::now()));
    }

    #[test]
    fn test_overdue_ignores_submitted_work() {
        let deadline = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let later = deadline + Duration::days(1);
        assert!(task(TaskStatus::Pending, Some(deadline)).is_overdue(later));
        assert!(!task(TaskStatus::Submitted, Some(deadline)).is_overdue(later));
    }

    #[test]
    fn test_status_transitions() {
        use TaskStatus::*;
        assert!(Submitted.can_transition_to(Approved));
        assert!(Submitted.can_transition_to(Rejected));
        assert!(Rejected.can_transition_to(Submitted));
        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Approved));
        assert!(!Submitted.can_transition_to(Submitted));
    }

    #[test]
    fn test_deserialize_task() {
        let json = r#"{
            "_id": "64aa",
            "title": "Design review",
            "teamId": 12,
            "deadline": "2025-04-10T17:30:00Z",
            "status": "submitted",
            "submissionUrl": "https://git.example.edu/team12/design"
        }"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.team_id, "12");
        assert_eq!(t.status, TaskStatus::Submitted);
        assert_eq!(
            t.deadline,
            Some(Utc.with_ymd_and_hms(2025, 4, 10, 17, 30, 0).unwrap())
        );
    }
}
