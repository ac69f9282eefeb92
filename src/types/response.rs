//! The BingX response envelope.
//!
//! Every BingX REST response body is wrapped in the same envelope:
//!
//! ```json
//! { "code": 0, "msg": "", "debugMsg": "", "data": <payload> }
//! ```
//!
//! `code == 0` is the only success condition. Any non-zero code is a failure
//! regardless of payload content, and the code and messages are surfaced
//! verbatim as an [`ApiError`](crate::error::ApiError).

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, BingXError};

/// Generic envelope around every BingX API response.
///
/// The payload type varies per endpoint; the status discriminant and message
/// fields do not. Decoding a response body into this type and calling
/// [`into_result`](Self::into_result) is the single error-mapping rule shared
/// by all endpoint operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BingXResponse<T> {
    /// Status code; zero means success.
    pub code: i64,
    /// Human-readable message, usually empty on success.
    #[serde(default)]
    pub msg: String,
    /// Additional debug message, often empty.
    #[serde(default, rename = "debugMsg")]
    pub debug_msg: String,
    /// Endpoint-specific payload. May be absent or null.
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> BingXResponse<T> {
    /// Convert the envelope status into a result.
    ///
    /// A non-zero `code` yields an [`ApiError`] carrying the code and both
    /// messages verbatim. On success the payload is returned; an absent or
    /// null `data` field is not an error and yields the payload's default
    /// value, matching the upstream zero-value semantics.
    pub fn into_result(self) -> Result<T, BingXError>
    where
        T: Default,
    {
        if self.code != 0 {
            return Err(BingXError::Api(ApiError {
                code: self.code,
                message: self.msg,
                debug_message: self.debug_msg,
            }));
        }
        Ok(self.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Payload {
        value: i64,
    }

    #[test]
    fn test_zero_code_round_trip() {
        let envelope = BingXResponse {
            code: 0,
            msg: String::new(),
            debug_msg: String::new(),
            data: Some(Payload { value: 42 }),
        };
        let json = serde_json::to_string(&envelope).unwrap();
        let decoded: BingXResponse<Payload> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.into_result().unwrap(), Payload { value: 42 });
    }

    #[test]
    fn test_nonzero_code_is_api_error_regardless_of_payload() {
        let json = r#"{"code":100202,"msg":"Insufficient assets","debugMsg":"detail","data":{"value":7}}"#;
        let decoded: BingXResponse<Payload> = serde_json::from_str(json).unwrap();
        match decoded.into_result() {
            Err(BingXError::Api(err)) => {
                assert_eq!(err.code, 100202);
                assert_eq!(err.message, "Insufficient assets");
                assert_eq!(err.debug_message, "detail");
            }
            other => panic!("expected API error, got {other:?}"),
        }

        // Null payload does not change the outcome.
        let json = r#"{"code":80016,"msg":"Order not exist","data":null}"#;
        let decoded: BingXResponse<Payload> = serde_json::from_str(json).unwrap();
        assert!(matches!(decoded.into_result(), Err(BingXError::Api(_))));
    }

    #[test]
    fn test_missing_data_on_success_defaults() {
        let json = r#"{"code":0,"msg":"","debugMsg":""}"#;
        let decoded: BingXResponse<Vec<Payload>> = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.into_result().unwrap(), Vec::new());
    }

    #[test]
    fn test_wrong_payload_shape_fails_decode() {
        let json = r#"{"code":0,"msg":"","data":"not an object"}"#;
        assert!(serde_json::from_str::<BingXResponse<Payload>>(json).is_err());
    }
}
