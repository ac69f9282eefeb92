//! Trait definition for the BingX REST API client.
//!
//! This module provides the `BingXClient` trait which abstracts all REST API
//! operations. This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., request accounting wrapper)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use bingx_api_client::spot::rest::{BingXClient, SpotRestClient};
//!
//! async fn check_depth<C: BingXClient>(client: &C) -> Result<(), bingx_api_client::BingXError> {
//!     let book = client.get_order_book("BTC-USDT", Some(20)).await?;
//!     println!("{} asks", book.asks.len());
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::BingXError;
use crate::spot::rest::private::{
    HistoryOrdersRequest, SpotBalance, SpotOrder, SpotOrderRequest, SpotOrderResponse,
};
use crate::spot::rest::public::{KlineData, KlinesRequest, OrderBook, SymbolInfo, Tickers};

/// Trait defining all BingX Spot REST API operations.
///
/// All methods are async and return `Result<T, BingXError>`.
pub trait BingXClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get spot trading symbols and their filters.
    fn get_symbols(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Vec<SymbolInfo>, BingXError>> + Send;

    /// Get the order book for a symbol.
    fn get_order_book(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<OrderBook, BingXError>> + Send;

    /// Get historical klines.
    fn get_klines(
        &self,
        request: &KlinesRequest,
    ) -> impl Future<Output = Result<Vec<KlineData>, BingXError>> + Send;

    /// Get 24-hour tickers as a symbol to last-price map.
    fn get_tickers(&self) -> impl Future<Output = Result<Tickers, BingXError>> + Send;

    // ========== Signed Endpoints ==========

    /// Get account balances.
    fn get_balances(&self) -> impl Future<Output = Result<Vec<SpotBalance>, BingXError>> + Send;

    /// Place a single order.
    fn create_order(
        &self,
        order: &SpotOrderRequest,
    ) -> impl Future<Output = Result<SpotOrderResponse, BingXError>> + Send;

    /// Place a batch of orders.
    fn create_batch_orders(
        &self,
        orders: &[SpotOrderRequest],
        sync: bool,
    ) -> impl Future<Output = Result<Vec<SpotOrderResponse>, BingXError>> + Send;

    /// Get open orders for a symbol.
    fn get_open_orders(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Vec<SpotOrder>, BingXError>> + Send;

    /// Get an order by its exchange-assigned ID.
    fn get_order(
        &self,
        symbol: &str,
        order_id: i64,
    ) -> impl Future<Output = Result<SpotOrder, BingXError>> + Send;

    /// Get an order by its caller-assigned client order ID.
    fn get_order_by_client_order_id(
        &self,
        symbol: &str,
        client_order_id: &str,
    ) -> impl Future<Output = Result<SpotOrder, BingXError>> + Send;

    /// Get historical orders.
    fn get_order_history(
        &self,
        request: &HistoryOrdersRequest,
    ) -> impl Future<Output = Result<Vec<SpotOrder>, BingXError>> + Send;

    /// Cancel an order by its exchange-assigned ID.
    fn cancel_order(
        &self,
        symbol: &str,
        order_id: i64,
    ) -> impl Future<Output = Result<(), BingXError>> + Send;

    /// Cancel all open orders for a symbol.
    fn cancel_all_open_orders(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<(), BingXError>> + Send;
}

// BingXClient trait implementation.

impl BingXClient for super::SpotRestClient {
    async fn get_symbols(&self, symbol: Option<&str>) -> Result<Vec<SymbolInfo>, BingXError> {
        super::SpotRestClient::get_symbols(self, symbol).await
    }

    async fn get_order_book(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<OrderBook, BingXError> {
        super::SpotRestClient::get_order_book(self, symbol, limit).await
    }

    async fn get_klines(&self, request: &KlinesRequest) -> Result<Vec<KlineData>, BingXError> {
        super::SpotRestClient::get_klines(self, request).await
    }

    async fn get_tickers(&self) -> Result<Tickers, BingXError> {
        super::SpotRestClient::get_tickers(self).await
    }

    async fn get_balances(&self) -> Result<Vec<SpotBalance>, BingXError> {
        super::SpotRestClient::get_balances(self).await
    }

    async fn create_order(&self, order: &SpotOrderRequest) -> Result<SpotOrderResponse, BingXError> {
        super::SpotRestClient::create_order(self, order).await
    }

    async fn create_batch_orders(
        &self,
        orders: &[SpotOrderRequest],
        sync: bool,
    ) -> Result<Vec<SpotOrderResponse>, BingXError> {
        super::SpotRestClient::create_batch_orders(self, orders, sync).await
    }

    async fn get_open_orders(&self, symbol: &str) -> Result<Vec<SpotOrder>, BingXError> {
        super::SpotRestClient::get_open_orders(self, symbol).await
    }

    async fn get_order(&self, symbol: &str, order_id: i64) -> Result<SpotOrder, BingXError> {
        super::SpotRestClient::get_order(self, symbol, order_id).await
    }

    async fn get_order_by_client_order_id(
        &self,
        symbol: &str,
        client_order_id: &str,
    ) -> Result<SpotOrder, BingXError> {
        super::SpotRestClient::get_order_by_client_order_id(self, symbol, client_order_id).await
    }

    async fn get_order_history(
        &self,
        request: &HistoryOrdersRequest,
    ) -> Result<Vec<SpotOrder>, BingXError> {
        super::SpotRestClient::get_order_history(self, request).await
    }

    async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<(), BingXError> {
        super::SpotRestClient::cancel_order(self, symbol, order_id).await
    }

    async fn cancel_all_open_orders(&self, symbol: &str) -> Result<(), BingXError> {
        super::SpotRestClient::cancel_all_open_orders(self, symbol).await
    }
}
