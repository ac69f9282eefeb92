//! Types for public market data endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::KlineInterval;

/// Symbols payload, wrapped under the `symbols` key on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SymbolList {
    /// The listed symbols.
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

/// Trading symbol information and filters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Trading symbol (e.g., "BTC-USDT").
    pub symbol: String,
    /// Minimum price increment.
    pub tick_size: Decimal,
    /// Minimum quantity increment.
    pub step_size: Decimal,
    /// Minimum order quantity.
    pub min_qty: Decimal,
    /// Maximum order quantity.
    pub max_qty: Decimal,
    /// Minimum order notional value.
    pub min_notional: Decimal,
    /// Maximum order notional value.
    pub max_notional: Decimal,
    /// Symbol trading status.
    pub status: i32,
    /// Whether buying via the API is enabled.
    #[serde(default)]
    pub api_state_buy: bool,
    /// Whether selling via the API is enabled.
    #[serde(default)]
    pub api_state_sell: bool,
    /// Listing time in epoch milliseconds.
    #[serde(default)]
    pub time_online: i64,
    /// Delisting time in epoch milliseconds, zero if not scheduled.
    #[serde(default)]
    pub off_time: i64,
    /// Scheduled maintenance time in epoch milliseconds.
    #[serde(default)]
    pub maintain_time: i64,
}

/// Order book snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderBook {
    /// Timestamp of the last book change in epoch milliseconds.
    #[serde(rename = "ts", default)]
    pub timestamp: i64,
    /// Ask side levels.
    #[serde(default)]
    pub asks: Vec<OrderBookLevel>,
    /// Bid side levels.
    #[serde(default)]
    pub bids: Vec<OrderBookLevel>,
}

/// Single order book level.
/// Format: [price, quantity]
#[derive(Debug, Clone)]
pub struct OrderBookLevel {
    /// Price level.
    pub price: Decimal,
    /// Quantity at the price level.
    pub quantity: Decimal,
}

impl<'de> Deserialize<'de> for OrderBookLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (Decimal, Decimal) = Deserialize::deserialize(deserializer)?;
        Ok(OrderBookLevel {
            price: arr.0,
            quantity: arr.1,
        })
    }
}

/// Request parameters for historical klines.
#[derive(Debug, Clone, Serialize)]
pub struct KlinesRequest {
    /// Trading symbol.
    pub symbol: String,
    /// Kline interval.
    pub interval: KlineInterval,
    /// Maximum number of rows to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return rows starting at this epoch-millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Return rows up to this epoch-millisecond timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
}

impl KlinesRequest {
    /// Create a new klines request for a symbol and interval.
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            limit: None,
            start_time: None,
            end_time: None,
        }
    }

    /// Set the row limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the start timestamp.
    pub fn start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end timestamp.
    pub fn end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }
}

/// Single raw kline row.
///
/// Format: [start time, open, high, low, close, volume] - positional, with no
/// field names on the wire. Rows with any other arity fail to decode.
#[derive(Debug, Clone)]
pub struct KlineRow {
    /// Open time in epoch milliseconds.
    pub start_time: i64,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Base asset volume.
    pub volume: Decimal,
}

impl<'de> Deserialize<'de> for KlineRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (i64, Decimal, Decimal, Decimal, Decimal, Decimal) =
            Deserialize::deserialize(deserializer)?;
        Ok(KlineRow {
            start_time: arr.0,
            open: arr.1,
            high: arr.2,
            low: arr.3,
            close: arr.4,
            volume: arr.5,
        })
    }
}

impl KlineRow {
    /// Project the raw row into a named record, stamping the interval the
    /// caller requested (the wire payload does not carry it).
    pub fn with_interval(self, interval: KlineInterval) -> KlineData {
        KlineData {
            start_time: self.start_time,
            interval,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
        }
    }
}

/// A named kline (candlestick) record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KlineData {
    /// Open time in epoch milliseconds.
    pub start_time: i64,
    /// The interval this kline was requested at.
    pub interval: KlineInterval,
    /// Open price.
    pub open: Decimal,
    /// High price.
    pub high: Decimal,
    /// Low price.
    pub low: Decimal,
    /// Close price.
    pub close: Decimal,
    /// Base asset volume.
    pub volume: Decimal,
}

/// Single 24-hour ticker record.
///
/// Only the fields used by the ticker projection are decoded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerData {
    /// Trading symbol.
    pub symbol: String,
    /// Last traded price.
    pub last_price: Decimal,
}

/// Map from trading symbol to last traded price.
pub type Tickers = HashMap<String, Decimal>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kline_row_positional_projection() {
        let row: KlineRow =
            serde_json::from_str("[1700000000000, 100, 110, 95, 105, 1234.5]").unwrap();
        let kline = row.with_interval(KlineInterval::Hour1);
        assert_eq!(kline.start_time, 1_700_000_000_000);
        assert_eq!(kline.open, "100".parse().unwrap());
        assert_eq!(kline.high, "110".parse().unwrap());
        assert_eq!(kline.low, "95".parse().unwrap());
        assert_eq!(kline.close, "105".parse().unwrap());
        assert_eq!(kline.volume, "1234.5".parse().unwrap());
        assert_eq!(kline.interval, KlineInterval::Hour1);
    }

    #[test]
    fn test_kline_row_wrong_arity_fails() {
        assert!(serde_json::from_str::<KlineRow>("[1700000000000, 100, 110]").is_err());
        assert!(
            serde_json::from_str::<KlineRow>("[1700000000000, 100, 110, 95, 105, 1234.5, 1700003600000]")
                .is_err()
        );
    }

    #[test]
    fn test_order_book_level_from_string_pair() {
        let level: OrderBookLevel = serde_json::from_str(r#"["65000.5", "0.25"]"#).unwrap();
        assert_eq!(level.price, "65000.5".parse().unwrap());
        assert_eq!(level.quantity, "0.25".parse().unwrap());
    }
}
