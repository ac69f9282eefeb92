//! Error types for the BingX client library.

use thiserror::Error;

/// The main error type for all BingX client operations.
#[derive(Error, Debug)]
pub enum BingXError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// HTTP-level error status with a body that is not a BingX envelope
    #[error("HTTP status error: {status}")]
    Status {
        /// The HTTP status code returned by the server
        status: reqwest::StatusCode,
        /// The raw response body
        body: String,
    },

    /// JSON serialization error (e.g., encoding a batch order payload)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request parameters could not be encoded as a query string
    #[error("failed to encode request parameters: {0}")]
    Encode(String),

    /// Response body could not be decoded into the expected envelope shape
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// BingX API returned an error envelope
    #[error("BingX API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// Missing required credentials
    #[error("missing credentials: API key and secret required for signed endpoints")]
    MissingCredentials,
}

/// BingX API error codes and messages.
///
/// These are errors reported by the BingX API itself through the response
/// envelope: a non-zero `code` together with `msg` and `debugMsg`. All three
/// fields are surfaced verbatim so callers can branch on specific codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The numeric error code from BingX (e.g., 100202)
    pub code: i64,
    /// Human-readable error message
    pub message: String,
    /// Additional debug message, often empty
    pub debug_message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.debug_message.is_empty() {
            write!(f, "code {}: {}", self.code, self.message)
        } else {
            write!(f, "code {}: {} ({})", self.code, self.message, self.debug_message)
        }
    }
}

impl ApiError {
    /// Create a new API error from code and messages.
    pub fn new(code: i64, message: impl Into<String>, debug_message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            debug_message: debug_message.into(),
        }
    }

    /// Check if this is a signature verification error.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::SIGNATURE_VERIFICATION_FAILED
    }

    /// Check if this is a request-frequency (rate limit) error.
    pub fn is_rate_limited(&self) -> bool {
        self.code == error_codes::RATE_LIMITED
    }

    /// Check if this is an insufficient-assets error.
    pub fn is_insufficient_assets(&self) -> bool {
        self.code == error_codes::INSUFFICIENT_ASSETS
    }

    /// Check if this is an order-not-found error.
    pub fn is_order_not_found(&self) -> bool {
        self.code == error_codes::ORDER_NOT_FOUND
    }

    /// Check if the request timestamp fell outside the receive window.
    pub fn is_invalid_timestamp(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }
}

/// Known BingX error codes for pattern matching.
pub mod error_codes {
    /// Signature verification failed.
    pub const SIGNATURE_VERIFICATION_FAILED: i64 = 100001;
    /// Insufficient assets for the requested operation.
    pub const INSUFFICIENT_ASSETS: i64 = 100202;
    /// Invalid request parameter.
    pub const INVALID_PARAMETER: i64 = 80014;
    /// Order does not exist.
    pub const ORDER_NOT_FOUND: i64 = 80016;
    /// Request frequency limit reached.
    pub const RATE_LIMITED: i64 = 100410;
    /// Request timestamp outside the receive window.
    pub const INVALID_TIMESTAMP: i64 = 100421;
    /// Service is busy, try again later.
    pub const SERVICE_BUSY: i64 = 80012;
    /// Internal system error.
    pub const INTERNAL_ERROR: i64 = 100500;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(100202, "Insufficient assets", "");
        assert_eq!(error.to_string(), "code 100202: Insufficient assets");

        let error = ApiError::new(80014, "Invalid parameter", "symbol is required");
        assert_eq!(
            error.to_string(),
            "code 80014: Invalid parameter (symbol is required)"
        );
    }

    #[test]
    fn test_api_error_helpers() {
        let error = ApiError::new(100001, "Signature verification failed", "");
        assert!(error.is_invalid_signature());
        assert!(!error.is_rate_limited());

        let error = ApiError::new(80016, "Order not exist", "");
        assert!(error.is_order_not_found());
    }
}
