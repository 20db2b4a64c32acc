//! Administrator endpoints: users, teams, projects, academic lookups, reports.

use reqwest::{Client, Method};

use crate::endpoints::request::{
    get_bytes, get_json, get_json_with_query, path_segment, send_empty, send_json,
};
use crate::error::Result;
use crate::models::{
    AdminStats, AssignGuideRequest, Branch, Course, CreateTeamRequest, CreateUserRequest, Project,
    ProjectStatus, ProjectStatusRequest, Role, Section, Semester, Team, User,
};

pub async fn admin_stats(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
) -> Result<AdminStats> {
    get_json(client, base_url, auth_token, "/admin/stats").await
}

/// List users, optionally only those with `role`.
pub async fn list_users(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    role: Option<Role>,
) -> Result<Vec<User>> {
    let query: Vec<(&str, &str)> = role.map(|r| ("role", r.as_str())).into_iter().collect();
    get_json_with_query(client, base_url, auth_token, "/admin/users", &query).await
}

pub async fn create_user(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    request: &CreateUserRequest,
) -> Result<User> {
    send_json(client, base_url, auth_token, Method::POST, "/admin/users", request).await
}

pub async fn delete_user(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    user_id: &str,
) -> Result<()> {
    let path = format!("/admin/users/{}", path_segment("user", user_id)?);
    send_empty(client, base_url, auth_token, Method::DELETE, &path).await
}

pub async fn list_teams(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Vec<Team>> {
    get_json(client, base_url, auth_token, "/admin/teams").await
}

pub async fn create_team(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    request: &CreateTeamRequest,
) -> Result<Team> {
    send_json(client, base_url, auth_token, Method::POST, "/admin/teams", request).await
}

pub async fn assign_guide(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    team_id: &str,
    guide_id: &str,
) -> Result<Team> {
    let path = format!("/admin/teams/{}/guide", path_segment("team", team_id)?);
    let request = AssignGuideRequest {
        guide_id: path_segment("guide", guide_id)?.to_string(),
    };
    send_json(client, base_url, auth_token, Method::PUT, &path, &request).await
}

pub async fn delete_team(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    team_id: &str,
) -> Result<()> {
    let path = format!("/admin/teams/{}", path_segment("team", team_id)?);
    send_empty(client, base_url, auth_token, Method::DELETE, &path).await
}

/// List projects, optionally filtered by status.
pub async fn list_projects(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    status: Option<ProjectStatus>,
) -> Result<Vec<Project>> {
    let query: Vec<(&str, &str)> = status.map(|s| ("status", s.as_str())).into_iter().collect();
    get_json_with_query(client, base_url, auth_token, "/admin/projects", &query).await
}

pub async fn update_project_status(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    project_id: &str,
    request: &ProjectStatusRequest,
) -> Result<Project> {
    let path = format!("/admin/projects/{}/status", path_segment("project", project_id)?);
    send_json(client, base_url, auth_token, Method::PUT, &path, request).await
}

pub async fn list_courses(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Vec<Course>> {
    get_json(client, base_url, auth_token, "/admin/courses").await
}

pub async fn list_branches(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Vec<Branch>> {
    get_json(client, base_url, auth_token, "/admin/branches").await
}

pub async fn list_sections(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<Vec<Section>> {
    get_json(client, base_url, auth_token, "/admin/sections").await
}

pub async fn list_semesters(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
) -> Result<Vec<Semester>> {
    get_json(client, base_url, auth_token, "/admin/semesters").await
}

/// Download the generated progress report for one team.
pub async fn download_team_report(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    team_id: &str,
) -> Result<Vec<u8>> {
    let path = format!("/admin/reports/teams/{}", path_segment("team", team_id)?);
    get_bytes(client, base_url, auth_token, &path).await
}
