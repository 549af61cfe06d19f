use thiserror::Error;

/// Errors that can occur when calling the completion endpoint
#[derive(Error, Debug)]
pub enum OpenAiApiError {
    /// Invalid request parameters or malformed request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed due to an invalid or missing API key
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// API server encountered an internal error
    #[error("API server error: {0}")]
    ServerError(String),

    /// Network error occurred during the request
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The server answered 2xx but the payload was not usable
    #[error("Malformed response payload: {0}")]
    MalformedResponse(String),

    /// Anything else
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl OpenAiApiError {
    /// Returns true when re-invoking with the same inputs cannot succeed.
    ///
    /// The orchestrator never retries on its own; callers deciding whether a
    /// user-initiated retry is worth offering can use this classification.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            OpenAiApiError::InvalidRequest(_) | OpenAiApiError::AuthenticationFailed(_)
        )
    }

    /// Maps an HTTP status code and response body to an error variant
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 => OpenAiApiError::InvalidRequest(body),
            401 | 403 => OpenAiApiError::AuthenticationFailed(body),
            429 => OpenAiApiError::RateLimitExceeded,
            500..=599 => OpenAiApiError::ServerError(body),
            _ => OpenAiApiError::Unknown(format!("HTTP {status}: {body}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_400() {
        let error = OpenAiApiError::from_status(StatusCode::BAD_REQUEST, "bad".to_string());
        assert!(matches!(error, OpenAiApiError::InvalidRequest(_)));
        assert!(error.is_permanent());
    }

    #[test]
    fn test_from_status_401_and_403() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let error = OpenAiApiError::from_status(status, "denied".to_string());
            assert!(matches!(error, OpenAiApiError::AuthenticationFailed(_)));
            assert!(error.is_permanent());
        }
    }

    #[test]
    fn test_from_status_429() {
        let error =
            OpenAiApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down".to_string());
        assert!(matches!(error, OpenAiApiError::RateLimitExceeded));
        assert!(!error.is_permanent());
    }

    #[test]
    fn test_from_status_5xx() {
        for code in [500, 502, 503, 529] {
            let error = OpenAiApiError::from_status(
                reqwest::StatusCode::from_u16(code).unwrap(),
                "oops".to_string(),
            );
            assert!(matches!(error, OpenAiApiError::ServerError(_)));
            assert!(!error.is_permanent());
        }
    }

    #[test]
    fn test_from_status_unknown() {
        let error = OpenAiApiError::from_status(StatusCode::IM_A_TEAPOT, "teapot".to_string());
        assert!(matches!(error, OpenAiApiError::Unknown(_)));
        assert!(error.to_string().contains("418"));
    }

    #[test]
    fn test_error_display() {
        let error = OpenAiApiError::AuthenticationFailed("bad key".to_string());
        assert_eq!(error.to_string(), "Authentication failed: bad key");

        let error = OpenAiApiError::MalformedResponse("no choices".to_string());
        assert_eq!(error.to_string(), "Malformed response payload: no choices");
    }
}
