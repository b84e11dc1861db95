//! Error handling utilities for the REST clients

use reqwest::Response;
use roster_core::{DomainError, RepoResult};
use serde::de::DeserializeOwned;

/// Convert a reqwest error to DomainError
pub fn map_transport_error(service: &'static str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::transport(service, format!("timed out: {e}"))
    } else {
        DomainError::transport(service, e.to_string())
    }
}

/// Turn a non-success response into a status error carrying the body
pub async fn ensure_success(service: &'static str, resp: Response) -> RepoResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(DomainError::status(service, status.as_u16(), body.trim()))
}

/// Read a JSON body; a body that does not match `T` is a shape error
pub async fn read_json<T: DeserializeOwned>(
    service: &'static str,
    resp: Response,
) -> RepoResult<T> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| map_transport_error(service, e))?;

    serde_json::from_slice(&bytes).map_err(|e| DomainError::shape(service, e.to_string()))
}
