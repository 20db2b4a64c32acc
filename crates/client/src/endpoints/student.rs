//! Student endpoints: own team, project, tasks and meetings.

use reqwest::{Client, Method};

use crate::endpoints::request::{get_json, path_segment, send_json};
use crate::error::Result;
use crate::models::{
    Meeting, Project, StudentStats, SubmitTaskRequest, Task, Team, UpdateProjectRequest,
};

pub async fn student_stats(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
) -> Result<StudentStats> {
    get_json(client, base_url, auth_token, "/student/stats").await
}

pub async fn my_team(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Team> {
    get_json(client, base_url, auth_token, "/student/team").await
}

pub async fn my_project(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Project> {
    get_json(client, base_url, auth_token, "/student/project").await
}

pub async fn update_my_project(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    request: &UpdateProjectRequest,
) -> Result<Project> {
    send_json(client, base_url, auth_token, Method::PUT, "/student/project", request).await
}

pub async fn my_tasks(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Vec<Task>> {
    get_json(client, base_url, auth_token, "/student/tasks").await
}

pub async fn submit_task(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    task_id: &str,
    request: &SubmitTaskRequest,
) -> Result<Task> {
    let path = format!("/student/tasks/{}/submit", path_segment("task", task_id)?);
    send_json(client, base_url, auth_token, Method::POST, &path, request).await
}

pub async fn my_meetings(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Vec<Meeting>> {
    get_json(client, base_url, auth_token, "/student/meetings").await
}
