//! API utilities for frontend-backend communication
//!
//! Every request goes to [`config::api_url`] and carries the stored bearer
//! token when there is one.

use crate::shared::config;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Ошибки обращения к API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found")]
    NotFound,

    #[error("Server error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(Self::NotFound),
            other => Some(Self::Status(other)),
        }
    }
}

/// GET `path` and decode the JSON body.
pub async fn get_json<T>(path: &str, token: Option<&str>) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = config::api_url(path);
    let mut request = Request::get(&url).header("Accept", "application/json");
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if let Some(err) = ApiError::from_status(response.status()) {
        return Err(err);
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(204), None);
        assert_eq!(ApiError::from_status(404), Some(ApiError::NotFound));
        assert_eq!(ApiError::from_status(500), Some(ApiError::Status(500)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(502).to_string(), "Server error: 502");
        assert_eq!(ApiError::NotFound.to_string(), "Not found");
    }
}
