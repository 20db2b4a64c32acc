//! Request plumbing shared by every endpoint.
//!
//! This module attaches the bearer header, sends the request once and turns
//! non-2xx responses into [`ClientError::ApiError`] with the backend's own
//! message when the body carries one. It does NOT react to 401/403; session
//! teardown happens one layer up in the client.

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{ErrorBody, MaybeWrapped};

/// Join the base URL and an endpoint path.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Validate an id before splicing it into a path.
pub(crate) fn path_segment<'a>(kind: &str, id: &'a str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() || id.contains(['/', '?', '#', '%']) || id.chars().any(char::is_whitespace) {
        return Err(ClientError::InvalidRequest(format!("invalid {kind} id '{id}'")));
    }
    Ok(id)
}

/// Attach `Authorization: Bearer <token>` when a token is present.
pub(crate) fn authorized(builder: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send a request once and map non-success statuses to `ApiError`.
pub async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(method, endpoint, status = status.as_u16(), "Backend response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.best_message().map(str::to_string))
        .or_else(|| {
            let trimmed = body.trim();
            // Plain-text bodies are shown as-is; HTML error pages are not
            (!trimmed.is_empty() && !trimmed.starts_with('<') && trimmed.len() <= 200)
                .then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Decode a JSON body, accepting both bare and `{"data": ...}` payloads.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice::<MaybeWrapped<T>>(&bytes)
        .map(MaybeWrapped::into_inner)
        .map_err(|e| ClientError::InvalidResponse(format!("{endpoint}: {e}")))
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
) -> Result<T> {
    let builder = authorized(client.get(endpoint_url(base_url, path)), auth_token);
    let response = send_request(builder, path, "GET").await?;
    read_json(response, path).await
}

pub(crate) async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
    query: &Q,
) -> Result<T> {
    let builder = authorized(client.get(endpoint_url(base_url, path)), auth_token).query(query);
    let response = send_request(builder, path, "GET").await?;
    read_json(response, path).await
}

/// Send a JSON body with `method` and decode the JSON reply.
pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    method: reqwest::Method,
    path: &str,
    body: &B,
) -> Result<T> {
    let method_name = method.as_str().to_string();
    let builder = authorized(
        client.request(method, endpoint_url(base_url, path)),
        auth_token,
    )
    .json(body);
    let response = send_request(builder, path, &method_name).await?;
    read_json(response, path).await
}

/// Send a request whose reply body is irrelevant (e.g. `DELETE`).
pub(crate) async fn send_empty(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    method: reqwest::Method,
    path: &str,
) -> Result<()> {
    let method_name = method.as_str().to_string();
    let builder = authorized(
        client.request(method, endpoint_url(base_url, path)),
        auth_token,
    );
    send_request(builder, path, &method_name).await?;
    Ok(())
}

/// Download a binary body (report or minutes file).
pub(crate) async fn get_bytes(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
) -> Result<Vec<u8>> {
    let builder = authorized(client.get(endpoint_url(base_url, path)), auth_token);
    let response = send_request(builder, path, "GET").await?;
    let bytes = response.bytes().await?;
    debug!(endpoint = path, size = bytes.len(), "Downloaded file");
    Ok(bytes.to_vec())
}
