//! Guide API methods for [`ProjectClient`].

use crate::client::ProjectClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{
    AttendanceRequest, CreateTaskRequest, GuideStats, Meeting, MessageResponse, ReviewTaskRequest,
    ScheduleMeetingRequest, Task, TaskStatus, Team,
};

impl ProjectClient {
    pub async fn guide_stats(&self) -> Result<GuideStats> {
        crate::session_call!(
            self,
            token,
            endpoints::guide_stats(&self.http, &self.base_url, token).await
        )
    }

    pub async fn guide_teams(&self) -> Result<Vec<Team>> {
        crate::session_call!(
            self,
            token,
            endpoints::guide_teams(&self.http, &self.base_url, token).await
        )
    }

    pub async fn team_tasks(&self, team_id: &str) -> Result<Vec<Task>> {
        crate::session_call!(
            self,
            token,
            endpoints::team_tasks(&self.http, &self.base_url, token, team_id).await
        )
    }

    pub async fn create_task(&self, team_id: &str, request: &CreateTaskRequest) -> Result<Task> {
        if request.title.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "task title must not be empty".to_string(),
            ));
        }
        crate::session_call!(
            self,
            token,
            endpoints::create_task(&self.http, &self.base_url, token, team_id, request).await
        )
    }

    /// Approve or reject a submitted task.
    pub async fn review_task(&self, task_id: &str, request: &ReviewTaskRequest) -> Result<Task> {
        if !matches!(request.status, TaskStatus::Approved | TaskStatus::Rejected) {
            return Err(ClientError::InvalidRequest(format!(
                "a review must approve or reject, not set '{}'",
                request.status
            )));
        }
        crate::session_call!(
            self,
            token,
            endpoints::review_task(&self.http, &self.base_url, token, task_id, request).await
        )
    }

    pub async fn guide_meetings(&self) -> Result<Vec<Meeting>> {
        crate::session_call!(
            self,
            token,
            endpoints::guide_meetings(&self.http, &self.base_url, token).await
        )
    }

    pub async fn schedule_meeting(&self, request: &ScheduleMeetingRequest) -> Result<Meeting> {
        crate::session_call!(
            self,
            token,
            endpoints::schedule_meeting(&self.http, &self.base_url, token, request).await
        )
    }

    pub async fn record_attendance(
        &self,
        meeting_id: &str,
        request: &AttendanceRequest,
    ) -> Result<MessageResponse> {
        crate::session_call!(
            self,
            token,
            endpoints::record_attendance(&self.http, &self.base_url, token, meeting_id, request)
                .await
        )
    }
}
