//! Authentication module for the BingX API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond timestamping for signed requests
//! - HMAC-SHA256 signature generation over the request query string

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::sign_query;
pub use timestamp::{SystemClock, TimestampProvider};
