//! Login and registration endpoints. Both are unauthenticated.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{endpoint_url, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

/// `POST /login`.
///
/// A 400/401/403 here means bad credentials, not an expired session, and
/// comes back as [`ClientError::AuthFailed`].
pub async fn login(client: &Client, base_url: &str, request: &LoginRequest) -> Result<LoginResponse> {
    debug!(email = %request.email, "Logging in");

    let builder = client.post(endpoint_url(base_url, "/login")).json(request);
    let response = match send_request(builder, "/login", "POST").await {
        Ok(response) => response,
        Err(ClientError::ApiError {
            status: 400 | 401 | 403,
            message,
            ..
        }) => return Err(ClientError::AuthFailed(message)),
        Err(e) => return Err(e),
    };

    let login: LoginResponse = read_json(response, "/login").await?;
    if login.token.trim().is_empty() {
        return Err(ClientError::InvalidResponse(
            "/login: empty token in response".to_string(),
        ));
    }
    Ok(login)
}

/// `POST /register`.
pub async fn register(
    client: &Client,
    base_url: &str,
    request: &RegisterRequest,
) -> Result<MessageResponse> {
    debug!(email = %request.email, role = %request.role, "Registering account");

    let builder = client.post(endpoint_url(base_url, "/register")).json(request);
    let response = send_request(builder, "/register", "POST").await?;
    read_json(response, "/register").await
}
