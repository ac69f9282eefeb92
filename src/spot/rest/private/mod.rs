//! Signed REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Requests are timestamped and signed automatically.

mod types;

pub use types::*;

use crate::error::BingXError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::private;
use crate::spot::rest::params::Params;

impl SpotRestClient {
    /// Get account balances for all assets.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bingx_api_client::spot::rest::SpotRestClient;
    /// use bingx_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = SpotRestClient::builder().credentials(credentials).build();
    ///
    ///     for balance in client.get_balances().await? {
    ///         println!("{}: {} free, {} locked", balance.asset, balance.free, balance.locked);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balances(&self) -> Result<Vec<SpotBalance>, BingXError> {
        let data: SpotBalances = self.signed_get(private::BALANCE, Params::new()).await?;
        Ok(data.balances)
    }

    /// Place a single order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bingx_api_client::spot::rest::{SpotRestClient, private::SpotOrderRequest};
    /// use bingx_api_client::{OrderSide, OrderType};
    /// use bingx_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = SpotRestClient::builder().credentials(credentials).build();
    ///
    ///     let order = SpotOrderRequest::new(
    ///         "BTC-USDT",
    ///         OrderSide::Buy,
    ///         OrderType::Limit,
    ///         "0.001".parse()?,
    ///     )
    ///     .price("50000".parse()?);
    ///
    ///     let placed = client.create_order(&order).await?;
    ///     println!("Order ID: {}", placed.order_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_order(
        &self,
        order: &SpotOrderRequest,
    ) -> Result<SpotOrderResponse, BingXError> {
        self.signed_post(private::ORDER, order.to_params()).await
    }

    /// Place a batch of orders in one request.
    ///
    /// The order list is embedded as a JSON string in the `data` parameter.
    /// With `sync` set the exchange places the orders sequentially and
    /// reports each result; otherwise they are placed concurrently.
    pub async fn create_batch_orders(
        &self,
        orders: &[SpotOrderRequest],
        sync: bool,
    ) -> Result<Vec<SpotOrderResponse>, BingXError> {
        let data = serde_json::to_string(orders)?;
        let params = Params::new().set("data", data).set_bool("sync", sync);
        let list: BatchOrderList = self.signed_post(private::BATCH_ORDERS, params).await?;
        Ok(list.orders)
    }

    /// Get all open orders for a symbol.
    pub async fn get_open_orders(&self, symbol: &str) -> Result<Vec<SpotOrder>, BingXError> {
        let params = Params::new().set("symbol", symbol);
        let list: OrderList = self.signed_get(private::OPEN_ORDERS, params).await?;
        Ok(list.orders)
    }

    /// Cancel an order by its exchange-assigned ID.
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> Result<(), BingXError> {
        let params = Params::new().set("symbol", symbol).set("orderId", order_id);
        let _: serde_json::Value = self.signed_post(private::CANCEL_ORDER, params).await?;
        Ok(())
    }

    /// Cancel all open orders for a symbol.
    pub async fn cancel_all_open_orders(&self, symbol: &str) -> Result<(), BingXError> {
        let params = Params::new().set("symbol", symbol);
        let _: serde_json::Value = self.signed_post(private::CANCEL_OPEN_ORDERS, params).await?;
        Ok(())
    }

    /// Get an order by its exchange-assigned ID.
    pub async fn get_order(&self, symbol: &str, order_id: i64) -> Result<SpotOrder, BingXError> {
        self.query_order(Params::new().set("symbol", symbol).set("orderId", order_id))
            .await
    }

    /// Get an order by its caller-assigned client order ID.
    pub async fn get_order_by_client_order_id(
        &self,
        symbol: &str,
        client_order_id: &str,
    ) -> Result<SpotOrder, BingXError> {
        self.query_order(
            Params::new()
                .set("symbol", symbol)
                .set("clientOrderID", client_order_id),
        )
        .await
    }

    /// Shared order lookup.
    ///
    /// Both identifying keys funnel into this routine; each entry point
    /// populates exactly one of them, so a request can never carry both.
    async fn query_order(&self, params: Params) -> Result<SpotOrder, BingXError> {
        self.signed_get(private::ORDER, params).await
    }

    /// Get historical orders for a symbol, with optional filters.
    pub async fn get_order_history(
        &self,
        request: &HistoryOrdersRequest,
    ) -> Result<Vec<SpotOrder>, BingXError> {
        let params = Params::new()
            .set("symbol", &request.symbol)
            .set_opt("orderId", request.order_id)
            .set_opt("status", request.status)
            .set_opt("startTime", request.start_time)
            .set_opt("endTime", request.end_time)
            .set_opt("pageIndex", request.page_index)
            .set_opt("pageSize", request.page_size);
        let list: OrderList = self.signed_get(private::HISTORY_ORDERS, params).await?;
        Ok(list.orders)
    }
}
