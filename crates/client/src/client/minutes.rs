//! Minutes-of-meeting API methods for [`ProjectClient`].

use crate::client::ProjectClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{MeetingMinutes, MinutesRequest};

fn validate(request: &MinutesRequest) -> Result<()> {
    if request.summary.trim().is_empty() {
        return Err(ClientError::InvalidRequest(
            "minutes summary must not be empty".to_string(),
        ));
    }
    Ok(())
}

impl ProjectClient {
    pub async fn get_minutes(&self, meeting_id: &str) -> Result<Option<MeetingMinutes>> {
        crate::session_call!(
            self,
            token,
            endpoints::get_minutes(&self.http, &self.base_url, token, meeting_id).await
        )
    }

    pub async fn create_minutes(&self, request: &MinutesRequest) -> Result<MeetingMinutes> {
        validate(request)?;
        crate::session_call!(
            self,
            token,
            endpoints::create_minutes(&self.http, &self.base_url, token, request).await
        )
    }

    pub async fn update_minutes(
        &self,
        minutes_id: &str,
        request: &MinutesRequest,
    ) -> Result<MeetingMinutes> {
        validate(request)?;
        crate::session_call!(
            self,
            token,
            endpoints::update_minutes(&self.http, &self.base_url, token, minutes_id, request)
                .await
        )
    }

    pub async fn download_minutes(&self, minutes_id: &str) -> Result<Vec<u8>> {
        crate::session_call!(
            self,
            token,
            endpoints::download_minutes(&self.http, &self.base_url, token, minutes_id).await
        )
    }
}
