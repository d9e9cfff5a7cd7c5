//! Error types for the bankcode client library.

use thiserror::Error;

/// The main error type for all bankcode client operations.
#[derive(Error, Debug)]
pub enum BankcodeError {
    /// Client configuration was rejected at build time
    #[error("client configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The API answered with a non-success status code
    #[error("http status: {0}")]
    Status(String),

    /// JSON deserialization error
    #[error("decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// The per-call deadline elapsed before the request completed
    #[error("request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_carries_status_text() {
        let error = BankcodeError::Status("404 Not Found".to_string());
        assert_eq!(error.to_string(), "http status: 404 Not Found");
    }

    #[test]
    fn test_config_error_display() {
        let error = BankcodeError::Config("API key is empty".to_string());
        assert_eq!(
            error.to_string(),
            "client configuration error: API key is empty"
        );
    }
}
