//! API client for the Rick and Morty backend.
//!
//! This module provides the HTTP client for fetching character pages,
//! along with the error taxonomy for everything that can go wrong at the
//! network boundary.

use crate::models::CharacterPage;
use reqwest::Client;

pub const API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Error type for API client operations.
///
/// Variants carry owned strings so errors can be cloned and sent across
/// the app message channel.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The request never produced a response (connectivity, DNS, etc.)
    Transport { message: String },
    /// The server answered with a non-success status code
    HttpStatus { status: u16, message: String },
    /// The response body was not the expected JSON shape
    MalformedResponse { message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport { message } => write!(f, "Network error: {}", message),
            ApiError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            ApiError::MalformedResponse { message } => {
                write!(f, "Malformed response: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedResponse {
            message: e.to_string(),
        }
    }
}

/// Client for the Rick and Morty character API.
///
/// Holds a reusable `reqwest::Client`; cheap to clone via `Arc` at the
/// call sites that spawn fetches.
pub struct ApiClient {
    /// Base URL for the API
    pub base_url: String,
    /// Reusable HTTP client
    client: Client,
}

impl ApiClient {
    /// Create a new ApiClient with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Create a new ApiClient with a custom base URL (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Fetch one page of the character list.
    ///
    /// Sends `GET /character?page={page}`. The page number is not bounded
    /// locally; an out-of-range page is reported by the server as an HTTP
    /// error and surfaces as [`ApiError::HttpStatus`].
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// The parsed page, or an [`ApiError`] describing the failure
    pub async fn fetch_page(&self, page: u32) -> Result<CharacterPage, ApiError> {
        let url = format!("{}/character?page={}", self.base_url, page);

        tracing::debug!("Fetching character page {} from {}", page, url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::HttpStatus { status, message });
        }

        let body = response.text().await?;
        let page_data: CharacterPage = serde_json::from_str(&body)?;

        Ok(page_data)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new();
        assert_eq!(client.base_url, API_BASE_URL);
    }

    #[test]
    fn test_api_client_with_base_url() {
        let custom_url = "http://localhost:8080".to_string();
        let client = ApiClient::with_base_url(custom_url.clone());
        assert_eq!(client.base_url, custom_url);
    }

    #[test]
    fn test_api_client_default() {
        let client = ApiClient::default();
        assert_eq!(client.base_url, API_BASE_URL);
    }

    #[test]
    fn test_http_status_error_display_contains_code() {
        let err = ApiError::HttpStatus {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("500"));
        assert!(display.contains("Internal Server Error"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = ApiError::Transport {
            message: "connection refused".to_string(),
        };
        assert!(format!("{}", err).contains("connection refused"));
    }

    #[test]
    fn test_malformed_response_error_from_serde() {
        let json_err = serde_json::from_str::<CharacterPage>("not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
    }

    #[test]
    fn test_api_error_is_cloneable() {
        let err = ApiError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(format!("{}", err), format!("{}", cloned));
    }

    #[tokio::test]
    async fn test_fetch_page_with_unreachable_server() {
        let client = ApiClient::with_base_url("http://127.0.0.1:1".to_string());
        let result = client.fetch_page(1).await;
        assert!(matches!(result, Err(ApiError::Transport { .. })));
    }
}
