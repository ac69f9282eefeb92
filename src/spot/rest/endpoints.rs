//! BingX REST API endpoint constants.

/// Base URL for the BingX REST API.
pub const BINGX_BASE_URL: &str = "https://open-api.bingx.com";

/// Public market data endpoints (no authentication required).
pub mod public {
    /// Get spot trading symbols and their filters.
    pub const SYMBOLS: &str = "/openApi/spot/v1/common/symbols";
    /// Get order book depth.
    pub const DEPTH: &str = "/openApi/spot/v1/market/depth";
    /// Get historical klines (candlesticks).
    pub const KLINES: &str = "/openApi/market/his/v1/kline";
    /// Get 24-hour tickers for all symbols.
    pub const TICKER_24H: &str = "/openApi/spot/v1/ticker/24hr";
}

/// Signed endpoints (authentication required).
pub mod private {
    /// Get account balances.
    pub const BALANCE: &str = "/openApi/spot/v1/account/balance";
    /// Place an order (POST) or query an order (GET).
    pub const ORDER: &str = "/openApi/spot/v1/trade/order";
    /// Place a batch of orders.
    pub const BATCH_ORDERS: &str = "/openApi/spot/v1/trade/batchOrders";
    /// Get open orders.
    pub const OPEN_ORDERS: &str = "/openApi/spot/v1/trade/openOrders";
    /// Cancel an order.
    pub const CANCEL_ORDER: &str = "/openApi/spot/v1/trade/cancel";
    /// Cancel all open orders for a symbol.
    pub const CANCEL_OPEN_ORDERS: &str = "/openApi/spot/v1/trade/cancelOpenOrders";
    /// Get historical orders.
    pub const HISTORY_ORDERS: &str = "/openApi/spot/v1/trade/historyOrders";
}
