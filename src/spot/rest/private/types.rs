//! Types for signed REST API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::spot::rest::params::Params;
use crate::types::serde_helpers::{decimal_plain, decimal_plain_opt, empty_decimal_as_none};
use crate::types::{OrderSide, OrderStatus, OrderType, TimeInForce};

/// Balances payload, wrapped under the `balances` key on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotBalances {
    /// Per-asset balances.
    #[serde(default)]
    pub balances: Vec<SpotBalance>,
}

/// Balance for a single asset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotBalance {
    /// Asset name (e.g., "USDT").
    pub asset: String,
    /// Freely available amount.
    pub free: Decimal,
    /// Amount locked in open orders.
    pub locked: Decimal,
}

/// A new spot order.
///
/// Quantities and prices serialize as plain decimal strings so numeric
/// identity round-trips exactly. Optional fields are omitted from the wire
/// when unset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotOrderRequest {
    /// Trading symbol (e.g., "BTC-USDT").
    pub symbol: String,
    /// Buy or sell.
    pub side: OrderSide,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order quantity in the base asset.
    #[serde(with = "decimal_plain")]
    pub quantity: Decimal,
    /// Limit price; not set for market orders.
    #[serde(with = "decimal_plain_opt", skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Time in force.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Caller-assigned client order ID.
    #[serde(rename = "newClientOrderId", skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
}

impl SpotOrderRequest {
    /// Create a new order request.
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            quantity,
            price: None,
            time_in_force: None,
            new_client_order_id: None,
        }
    }

    /// Set the limit price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Set a caller-assigned client order ID.
    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    /// Build the wire parameter set for single-order placement.
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .set("symbol", &self.symbol)
            .set("side", self.side)
            .set("type", self.order_type)
            .set_decimal("quantity", self.quantity)
            .set_opt_decimal("price", self.price)
            .set_opt("timeInForce", self.time_in_force)
            .set_opt("newClientOrderId", self.new_client_order_id.as_deref())
    }
}

/// Confirmation returned when an order is placed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpotOrderResponse {
    /// Trading symbol.
    pub symbol: String,
    /// Exchange-assigned order ID.
    pub order_id: i64,
    /// Transaction time in epoch milliseconds.
    pub transact_time: i64,
    /// Order price.
    pub price: Decimal,
    /// Stop price, when applicable.
    #[serde(deserialize_with = "empty_decimal_as_none::deserialize")]
    pub stop_price: Option<Decimal>,
    /// Original order quantity.
    pub orig_qty: Decimal,
    /// Executed quantity.
    pub executed_qty: Decimal,
    /// Cumulative quote asset quantity (upstream field spelling preserved).
    #[serde(rename = "cummulativeQuoteQty")]
    pub cummulative_quote_qty: Decimal,
    /// Order status.
    pub status: OrderStatus,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Buy or sell.
    pub side: OrderSide,
    /// Caller-assigned client order ID, empty if none was supplied.
    #[serde(rename = "clientOrderID")]
    pub client_order_id: String,
}

/// An order as reported by the open/history/lookup endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpotOrder {
    /// Exchange-assigned order ID.
    pub order_id: i64,
    /// Caller-assigned client order ID, empty if none was supplied.
    #[serde(rename = "clientOrderID")]
    pub client_order_id: String,
    /// Trading symbol.
    pub symbol: String,
    /// Order price.
    pub price: Decimal,
    /// Original order quantity.
    pub orig_qty: Decimal,
    /// Executed quantity.
    pub executed_qty: Decimal,
    /// Cumulative quote asset quantity (upstream field spelling preserved).
    #[serde(rename = "cummulativeQuoteQty")]
    pub cummulative_quote_qty: Decimal,
    /// Original quote order quantity.
    #[serde(rename = "origQuoteOrderQty")]
    pub orig_quote_qty: Decimal,
    /// Order status.
    pub status: OrderStatus,
    /// Order type.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Buy or sell.
    pub side: OrderSide,
    /// Creation time in epoch milliseconds.
    pub time: i64,
    /// Last update time in epoch milliseconds.
    pub update_time: i64,
    /// Total fee charged.
    pub fee: Decimal,
    /// Asset the fee was charged in.
    pub fee_asset: String,
    /// Average fill price.
    pub avg_price: Decimal,
}

/// Orders payload, wrapped under the `orders` key on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderList {
    /// The orders.
    #[serde(default)]
    pub orders: Vec<SpotOrder>,
}

/// Batch placement payload, wrapped under the `orders` key on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchOrderList {
    /// Per-order placement confirmations.
    #[serde(default)]
    pub orders: Vec<SpotOrderResponse>,
}

/// Request parameters for historical orders.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryOrdersRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Restrict to a single order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,
    /// Restrict to orders with this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Start of the time range in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// End of the time range in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Page number, starting at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl HistoryOrdersRequest {
    /// Create a new history request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            status: None,
            start_time: None,
            end_time: None,
            page_index: None,
            page_size: None,
        }
    }

    /// Restrict to a single order ID.
    pub fn order_id(mut self, order_id: i64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Restrict to orders with the given status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the start of the time range.
    pub fn start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end of the time range.
    pub fn end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Set the result page, starting at 1.
    pub fn page(mut self, page_index: u32, page_size: u32) -> Self {
        self.page_index = Some(page_index);
        self.page_size = Some(page_size);
        self
    }
}
