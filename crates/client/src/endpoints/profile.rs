//! Profile endpoints for the logged-in user.

use reqwest::{Client, Method};

use crate::endpoints::request::{get_json, send_json};
use crate::error::Result;
use crate::models::{ChangePasswordRequest, MessageResponse, UpdateProfileRequest, User};

pub async fn get_profile(client: &Client, base_url: &str, auth_token: Option<&str>) -> Result<User> {
    get_json(client, base_url, auth_token, "/profile").await
}

pub async fn update_profile(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    request: &UpdateProfileRequest,
) -> Result<User> {
    send_json(client, base_url, auth_token, Method::PUT, "/profile", request).await
}

pub async fn change_password(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    request: &ChangePasswordRequest,
) -> Result<MessageResponse> {
    send_json(
        client,
        base_url,
        auth_token,
        Method::PUT,
        "/profile/password",
        request,
    )
    .await
}
