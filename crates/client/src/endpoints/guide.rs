//! Guide endpoints: assigned teams, task review, meetings.

use reqwest::{Client, Method};

use crate::endpoints::request::{get_json, path_segment, send_json};
use crate::error::Result;
use crate::models::{
    AttendanceRequest, CreateTaskRequest, GuideStats, Meeting, MessageResponse, ReviewTaskRequest,
    ScheduleMeetingRequest, Task, Team,
};

pub async fn guide_stats(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<GuideStats> {
    get_json(client, base_url, auth_token, "/guide/stats").await
}

/// Teams assigned to the logged-in guide.
pub async fn guide_teams(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Vec<Team>> {
    get_json(client, base_url, auth_token, "/guide/teams").await
}

pub async fn team_tasks(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    team_id: &str,
) -> Result<Vec<Task>> {
    let path = format!("/guide/teams/{}/tasks", path_segment("team", team_id)?);
    get_json(client, base_url, auth_token, &path).await
}

pub async fn create_task(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    team_id: &str,
    request: &CreateTaskRequest,
) -> Result<Task> {
    let path = format!("/guide/teams/{}/tasks", path_segment("team", team_id)?);
    send_json(client, base_url, auth_token, Method::POST, &path, request).await
}

pub async fn review_task(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    task_id: &str,
    request: &ReviewTaskRequest,
) -> Result<Task> {
    let path = format!("/guide/tasks/{}/review", path_segment("task", task_id)?);
    send_json(client, base_url, auth_token, Method::PUT, &path, request).await
}

pub async fn guide_meetings(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
) -> Result<Vec<Meeting>> {
    get_json(client, base_url, auth_token, "/guide/meetings").await
}

pub async fn schedule_meeting(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    request: &ScheduleMeetingRequest,
) -> Result<Meeting> {
    send_json(client, base_url, auth_token, Method::POST, "/guide/meetings", request).await
}

pub async fn record_attendance(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    meeting_id: &str,
    request: &AttendanceRequest,
) -> Result<MessageResponse> {
    let path = format!(
        "/guide/meetings/{}/attendance",
        path_segment("meeting", meeting_id)?
    );
    send_json(client, base_url, auth_token, Method::POST, &path, request).await
}
