//! Profile API methods for [`ProjectClient`].

use tracing::warn;

use crate::client::ProjectClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{ChangePasswordRequest, MessageResponse, UpdateProfileRequest, User};

impl ProjectClient {
    /// Fetch the profile and refresh the cached user.
    pub async fn get_profile(&self) -> Result<User> {
        let user = crate::session_call!(
            self,
            token,
            endpoints::get_profile(&self.http, &self.base_url, token).await
        )?;
        self.refresh_cached_user(&user);
        Ok(user)
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User> {
        if request.is_empty() {
            return Err(ClientError::InvalidRequest(
                "nothing to update: set at least one field".to_string(),
            ));
        }
        let user = crate::session_call!(
            self,
            token,
            endpoints::update_profile(&self.http, &self.base_url, token, request).await
        )?;
        self.refresh_cached_user(&user);
        Ok(user)
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<MessageResponse> {
        if request.new_password.is_empty() {
            return Err(ClientError::InvalidRequest(
                "new password must not be empty".to_string(),
            ));
        }
        crate::session_call!(
            self,
            token,
            endpoints::change_password(&self.http, &self.base_url, token, request).await
        )
    }

    fn refresh_cached_user(&self, user: &User) {
        if let Err(e) = self.session_store.update_user(user.clone()) {
            // The call itself succeeded; a stale cache only affects route guarding
            warn!(error = %e, "Failed to refresh cached user");
        }
    }
}
