//! Error types for Breeze Connect operations

use thiserror::Error;

/// Result type alias for Breeze operations
pub type Result<T> = std::result::Result<T, BreezeError>;

/// Errors that can occur while talking to the Breeze Connect API
#[derive(Debug, Error)]
pub enum BreezeError {
    /// Vendor-side error reported in the response body
    #[error("Breeze API error: {0}")]
    Api(String),

    /// No session has been generated yet
    #[error("no active Breeze session, generate a session first")]
    NotAuthenticated,

    /// Session authentication was rejected by the vendor
    #[error("session authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Vendor rate limit hit
    #[error("Breeze rate limit exceeded")]
    RateLimited,

    /// Response did not match the expected shape
    #[error("unexpected Breeze response: {0}")]
    UnexpectedResponse(String),

    /// Network or HTTP error
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BreezeError::NotAuthenticated;
        assert_eq!(
            err.to_string(),
            "no active Breeze session, generate a session first"
        );

        let err = BreezeError::Api("invalid stock code".to_string());
        assert_eq!(err.to_string(), "Breeze API error: invalid stock code");
    }
}
