//! BingX Spot REST API client.
//!
//! Provides access to the BingX Spot trading and market data REST endpoints.
//!
//! # Trait-based API
//!
//! The [`BingXClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., request accounting wrapper)
//! - Alternative implementations
//!
//! ```rust,ignore
//! use bingx_api_client::spot::rest::{BingXClient, SpotRestClient};
//!
//! async fn use_client<C: BingXClient>(client: &C) -> Result<(), bingx_api_client::BingXError> {
//!     let tickers = client.get_tickers().await?;
//!     println!("{} symbols", tickers.len());
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
mod params;
pub mod private;
pub mod public;
mod traits;

pub use client::{SpotRestClient, SpotRestClientBuilder};
pub use endpoints::*;
pub use params::Params;
pub use traits::BingXClient;
