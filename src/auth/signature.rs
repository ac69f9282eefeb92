//! HMAC-SHA256 signature generation for BingX API authentication.
//!
//! BingX signed endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(query_string, api_secret))
//! ```
//!
//! The signature is appended to the query string as the `signature` parameter,
//! and the API key is sent in the `X-BX-APIKEY` header.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BingXError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a query string for BingX's signed API endpoints.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `query` - The URL-encoded query string, exactly as it will be sent
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use bingx_api_client::auth::{Credentials, sign_query};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_query(&credentials, "symbol=BTC-USDT&timestamp=1700000000000")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(credentials: &Credentials, query: &str) -> Result<String, BingXError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BingXError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(query.as_bytes());
    let digest = hmac.finalize().into_bytes();

    Ok(hex::encode(digest))
}
