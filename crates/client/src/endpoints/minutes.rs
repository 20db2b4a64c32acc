//! Minutes-of-meeting endpoints, shared by all roles.

use reqwest::{Client, Method};

use crate::endpoints::request::{get_bytes, get_json, path_segment, send_json};
use crate::error::{ClientError, Result};
use crate::models::{MeetingMinutes, MinutesRequest};

/// Minutes recorded for a meeting. `None` when none have been written yet.
pub async fn get_minutes(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    meeting_id: &str,
) -> Result<Option<MeetingMinutes>> {
    let path = format!("/mom/meeting/{}", path_segment("meeting", meeting_id)?);
    match get_json(client, base_url, auth_token, &path).await {
        Ok(minutes) => Ok(Some(minutes)),
        Err(ClientError::ApiError { status: 404, .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn create_minutes(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    request: &MinutesRequest,
) -> Result<MeetingMinutes> {
    send_json(client, base_url, auth_token, Method::POST, "/mom", request).await
}

pub async fn update_minutes(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    minutes_id: &str,
    request: &MinutesRequest,
) -> Result<MeetingMinutes> {
    let path = format!("/mom/{}", path_segment("minutes", minutes_id)?);
    send_json(client, base_url, auth_token, Method::PUT, &path, request).await
}

/// Download the rendered minutes document.
pub async fn download_minutes(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    minutes_id: &str,
) -> Result<Vec<u8>> {
    let path = format!("/mom/{}/download", path_segment("minutes", minutes_id)?);
    get_bytes(client, base_url, auth_token, &path).await
}
