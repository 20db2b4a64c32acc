//! Administrator API methods for [`ProjectClient`].
//!
//! # What this module handles:
//! - Dashboard statistics, user and team management, project approval
//! - Academic lookup tables and team report downloads
//!
//! # What this module does NOT handle:
//! - Role checks (the route guard decides whether an admin view opens)
//! - Low-level HTTP calls (in [`crate::endpoints`])

use crate::client::ProjectClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{
    AdminStats, Branch, Course, CreateTeamRequest, CreateUserRequest, Project, ProjectStatus,
    ProjectStatusRequest, Role, Section, Semester, Team, User,
};

impl ProjectClient {
    pub async fn admin_stats(&self) -> Result<AdminStats> {
        crate::session_call!(
            self,
            token,
            endpoints::admin_stats(&self.http, &self.base_url, token).await
        )
    }

    pub async fn list_users(&self, role: Option<Role>) -> Result<Vec<User>> {
        crate::session_call!(
            self,
            token,
            endpoints::list_users(&self.http, &self.base_url, token, role).await
        )
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User> {
        crate::session_call!(
            self,
            token,
            endpoints::create_user(&self.http, &self.base_url, token, request).await
        )
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        crate::session_call!(
            self,
            token,
            endpoints::delete_user(&self.http, &self.base_url, token, user_id).await
        )
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        crate::session_call!(
            self,
            token,
            endpoints::list_teams(&self.http, &self.base_url, token).await
        )
    }

    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team> {
        if request.member_ids.is_empty() {
            return Err(ClientError::InvalidRequest(
                "a team needs at least one member".to_string(),
            ));
        }
        crate::session_call!(
            self,
            token,
            endpoints::create_team(&self.http, &self.base_url, token, request).await
        )
    }

    pub async fn assign_guide(&self, team_id: &str, guide_id: &str) -> Result<Team> {
        crate::session_call!(
            self,
            token,
            endpoints::assign_guide(&self.http, &self.base_url, token, team_id, guide_id).await
        )
    }

    pub async fn delete_team(&self, team_id: &str) -> Result<()> {
        crate::session_call!(
            self,
            token,
            endpoints::delete_team(&self.http, &self.base_url, token, team_id).await
        )
    }

    pub async fn list_projects(&self, status: Option<ProjectStatus>) -> Result<Vec<Project>> {
        crate::session_call!(
            self,
            token,
            endpoints::list_projects(&self.http, &self.base_url, token, status).await
        )
    }

    pub async fn update_project_status(
        &self,
        project_id: &str,
        request: &ProjectStatusRequest,
    ) -> Result<Project> {
        crate::session_call!(
            self,
            token,
            endpoints::update_project_status(&self.http, &self.base_url, token, project_id, request)
                .await
        )
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        crate::session_call!(
            self,
            token,
            endpoints::list_courses(&self.http, &self.base_url, token).await
        )
    }

    pub async fn list_branches(&self) -> Result<Vec<Branch>> {
        crate::session_call!(
            self,
            token,
            endpoints::list_branches(&self.http, &self.base_url, token).await
        )
    }

    pub async fn list_sections(&self) -> Result<Vec<Section>> {
        crate::session_call!(
            self,
            token,
            endpoints::list_sections(&self.http, &self.base_url, token).await
        )
    }

    pub async fn list_semesters(&self) -> Result<Vec<Semester>> {
        crate::session_call!(
            self,
            token,
            endpoints::list_semesters(&self.http, &self.base_url, token).await
        )
    }

    /// Raw report bytes; the caller decides where to save them.
    pub async fn download_team_report(&self, team_id: &str) -> Result<Vec<u8>> {
        crate::session_call!(
            self,
            token,
            endpoints::download_team_report(&self.http, &self.base_url, token, team_id).await
        )
    }
}
