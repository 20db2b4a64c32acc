//! Student API methods for [`ProjectClient`].

use crate::client::ProjectClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{
    Meeting, Project, StudentStats, SubmitTaskRequest, Task, Team, UpdateProjectRequest,
};

impl ProjectClient {
    pub async fn student_stats(&self) -> Result<StudentStats> {
        crate::session_call!(
            self,
            token,
            endpoints::student_stats(&self.http, &self.base_url, token).await
        )
    }

    pub async fn my_team(&self) -> Result<Team> {
        crate::session_call!(
            self,
            token,
            endpoints::my_team(&self.http, &self.base_url, token).await
        )
    }

    pub async fn my_project(&self) -> Result<Project> {
        crate::session_call!(
            self,
            token,
            endpoints::my_project(&self.http, &self.base_url, token).await
        )
    }

    pub async fn update_my_project(&self, request: &UpdateProjectRequest) -> Result<Project> {
        crate::session_call!(
            self,
            token,
            endpoints::update_my_project(&self.http, &self.base_url, token, request).await
        )
    }

    pub async fn my_tasks(&self) -> Result<Vec<Task>> {
        crate::session_call!(
            self,
            token,
            endpoints::my_tasks(&self.http, &self.base_url, token).await
        )
    }

    pub async fn submit_task(&self, task_id: &str, request: &SubmitTaskRequest) -> Result<Task> {
        if request.submission_url.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "submission URL must not be empty".to_string(),
            ));
        }
        crate::session_call!(
            self,
            token,
            endpoints::submit_task(&self.http, &self.base_url, token, task_id, request).await
        )
    }

    pub async fn my_meetings(&self) -> Result<Vec<Meeting>> {
        crate::session_call!(
            self,
            token,
            endpoints::my_meetings(&self.http, &self.base_url, token).await
        )
    }
}
