//! Backend endpoint implementations.
//!
//! Each function performs one HTTP call given the shared `reqwest::Client`,
//! the base URL and an optional bearer token. None of them touch the
//! session store; [`crate::client::ProjectClient`] does that.

mod admin;
mod auth;
mod guide;
mod minutes;
mod profile;
mod request;
mod student;

pub use admin::{
    admin_stats, assign_guide, create_team, create_user, delete_team, delete_user,
    download_team_report, list_branches, list_courses, list_projects, list_sections,
    list_semesters, list_teams, list_users, update_project_status,
};
pub use auth::{login, register};
pub use guide::{
    create_task, guide_meetings, guide_stats, guide_teams, record_attendance, review_task,
    schedule_meeting, team_tasks,
};
pub use minutes::{create_minutes, download_minutes, get_minutes, update_minutes};
pub use profile::{change_password, get_profile, update_profile};
pub use request::send_request;
pub use student::{
    my_meetings, my_project, my_tasks, my_team, student_stats, submit_task, update_my_project,
};
