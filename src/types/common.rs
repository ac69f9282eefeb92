//! Common domain types for the BingX Spot API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order
    #[default]
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Limit order - execute at specified price or better
    #[default]
    Limit,
    /// Market order - execute immediately at best available price
    Market,
    /// Limit maker order - rejected if it would execute immediately
    LimitMaker,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderType::Limit => "LIMIT",
            OrderType::Market => "MARKET",
            OrderType::LimitMaker => "LIMIT_MAKER",
        };
        write!(f, "{}", s)
    }
}

/// Status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order has been accepted by the matching engine
    #[default]
    New,
    /// Order is pending submission
    Pending,
    /// Order has been partially filled
    PartiallyFilled,
    /// Order has been completely filled
    Filled,
    /// Order has been canceled
    Canceled,
    /// Order failed
    Failed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::New => "NEW",
            OrderStatus::Pending => "PENDING",
            OrderStatus::PartiallyFilled => "PARTIALLY_FILLED",
            OrderStatus::Filled => "FILLED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Time in force for orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till canceled (default)
    #[default]
    Gtc,
    /// Immediate or cancel - fill what's possible immediately, cancel rest
    Ioc,
    /// Fill or kill - fill completely or cancel
    Fok,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
            TimeInForce::Fok => write!(f, "FOK"),
        }
    }
}

/// Kline (candlestick) interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum KlineInterval {
    /// 1 minute
    Min1,
    /// 3 minutes
    Min3,
    /// 5 minutes
    Min5,
    /// 15 minutes
    Min15,
    /// 30 minutes
    Min30,
    /// 1 hour
    Hour1,
    /// 2 hours
    Hour2,
    /// 4 hours
    Hour4,
    /// 6 hours
    Hour6,
    /// 8 hours
    Hour8,
    /// 12 hours
    Hour12,
    /// 1 day
    Day1,
    /// 3 days
    Day3,
    /// 1 week
    Week1,
    /// 1 month
    Month1,
}

impl KlineInterval {
    /// The interval code as sent on the wire (e.g., "1h").
    pub fn as_str(&self) -> &'static str {
        match self {
            KlineInterval::Min1 => "1m",
            KlineInterval::Min3 => "3m",
            KlineInterval::Min5 => "5m",
            KlineInterval::Min15 => "15m",
            KlineInterval::Min30 => "30m",
            KlineInterval::Hour1 => "1h",
            KlineInterval::Hour2 => "2h",
            KlineInterval::Hour4 => "4h",
            KlineInterval::Hour6 => "6h",
            KlineInterval::Hour8 => "8h",
            KlineInterval::Hour12 => "12h",
            KlineInterval::Day1 => "1d",
            KlineInterval::Day3 => "3d",
            KlineInterval::Week1 => "1w",
            KlineInterval::Month1 => "1M",
        }
    }
}

impl std::fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<KlineInterval> for String {
    fn from(interval: KlineInterval) -> String {
        interval.as_str().to_string()
    }
}

impl TryFrom<String> for KlineInterval {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "1m" => Ok(KlineInterval::Min1),
            "3m" => Ok(KlineInterval::Min3),
            "5m" => Ok(KlineInterval::Min5),
            "15m" => Ok(KlineInterval::Min15),
            "30m" => Ok(KlineInterval::Min30),
            "1h" => Ok(KlineInterval::Hour1),
            "2h" => Ok(KlineInterval::Hour2),
            "4h" => Ok(KlineInterval::Hour4),
            "6h" => Ok(KlineInterval::Hour6),
            "8h" => Ok(KlineInterval::Hour8),
            "12h" => Ok(KlineInterval::Hour12),
            "1d" => Ok(KlineInterval::Day1),
            "3d" => Ok(KlineInterval::Day3),
            "1w" => Ok(KlineInterval::Week1),
            "1M" => Ok(KlineInterval::Month1),
            _ => Err(format!("Invalid kline interval: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_side_serde() {
        assert_eq!(serde_json::to_string(&OrderSide::Buy).unwrap(), r#""BUY""#);
        assert_eq!(
            serde_json::from_str::<OrderSide>(r#""SELL""#).unwrap(),
            OrderSide::Sell
        );
    }

    #[test]
    fn test_order_status_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PartiallyFilled).unwrap(),
            r#""PARTIALLY_FILLED""#
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>(r#""FILLED""#).unwrap(),
            OrderStatus::Filled
        );
    }

    #[test]
    fn test_kline_interval_conversion() {
        assert_eq!(KlineInterval::Hour1.as_str(), "1h");
        assert_eq!(
            KlineInterval::try_from("1M".to_string()).unwrap(),
            KlineInterval::Month1
        );
        assert!(KlineInterval::try_from("7x".to_string()).is_err());
        assert_eq!(
            serde_json::to_string(&KlineInterval::Min15).unwrap(),
            r#""15m""#
        );
    }
}
