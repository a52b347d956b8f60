//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages for the
//! shared request layer. Every remote failure is caught at the call site and
//! converted to a toast; none propagate further up the component tree.

use std::fmt;

/// Network/fetch-related errors for API requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, connection reset, ...)
    NetworkError(String),
    /// Credential missing or rejected by the service (401/403)
    Unauthorized,
    /// HTTP error response (other non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::Unauthorized => write!(f, "Credential rejected"),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Classify an HTTP status into the error taxonomy.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            other => Self::HttpError(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_rejection_is_distinguished() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(500), ApiError::HttpError(500));
        assert_eq!(ApiError::from_status(404), ApiError::HttpError(404));
    }
}
