//! Login, registration and logout for [`ProjectClient`].

use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use crate::client::ProjectClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{LoginRequest, MessageResponse, RegisterRequest, User};
use crate::navigation::LOGIN_PATH;
use crate::session::Session;

impl ProjectClient {
    /// Authenticate and persist the returned session.
    ///
    /// Rejected credentials come back as `ClientError::AuthFailed` and leave
    /// any existing session in place.
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<User> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.expose_secret().to_string(),
        };
        let response = endpoints::login(&self.http, &self.base_url, &request).await?;

        let user = response.user;
        self.session_store
            .set(Session::new(response.token, user.clone()))?;
        info!(user_id = %user.id, role = %user.role, "Logged in");
        Ok(user)
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse> {
        endpoints::register(&self.http, &self.base_url, request).await
    }

    /// Forget the stored session and return to the login view.
    ///
    /// Purely local: the backend issues stateless tokens.
    pub fn logout(&self) -> Result<()> {
        self.session_store.clear()?;
        self.navigator.redirect(LOGIN_PATH);
        info!("Logged out");
        Ok(())
    }
}
