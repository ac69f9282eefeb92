//! # BingX Client
//!
//! An async Rust client library for the BingX exchange Spot REST API.
//!
//! ## Features
//!
//! - Spot trading endpoints: orders, batch orders, balances, order history
//! - Market data endpoints: symbols, order book depth, klines, 24h tickers
//! - Uniform response-envelope decoding with structured API error mapping
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bingx_api_client::spot::rest::SpotRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotRestClient::new();
//!     let tickers = client.get_tickers().await?;
//!     println!("BTC-USDT last price: {:?}", tickers.get("BTC-USDT"));
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BingXError;
pub use types::common::{KlineInterval, OrderSide, OrderStatus, OrderType};
pub use types::response::BingXResponse;

/// Result type alias using BingXError
pub type Result<T> = std::result::Result<T, BingXError>;
