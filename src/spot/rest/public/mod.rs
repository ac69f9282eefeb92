//! Public market data REST endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::BingXError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::public;
use crate::spot::rest::params::Params;

impl SpotRestClient {
    /// Get spot trading symbols and their trading filters.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Optional symbol filter (e.g., "BTC-USDT"); all symbols
    ///   when omitted.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bingx_api_client::spot::rest::SpotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SpotRestClient::new();
    ///     let symbols = client.get_symbols(Some("BTC-USDT")).await?;
    ///     println!("Tick size: {}", symbols[0].tick_size);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_symbols(&self, symbol: Option<&str>) -> Result<Vec<SymbolInfo>, BingXError> {
        let params = Params::new().set_opt("symbol", symbol);
        let list: SymbolList = self.public_get(public::SYMBOLS, params).await?;
        Ok(list.symbols)
    }

    /// Get the order book for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Trading symbol (e.g., "BTC-USDT").
    /// * `limit` - Optional depth limit; the exchange default applies when
    ///   omitted.
    pub async fn get_order_book(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<OrderBook, BingXError> {
        let params = Params::new().set("symbol", symbol).set_opt("limit", limit);
        self.public_get(public::DEPTH, params).await
    }

    /// Get historical klines (candlesticks).
    ///
    /// Kline rows arrive as positional arrays and are projected into named
    /// [`KlineData`] records. The requested interval is stamped into each
    /// record, since the wire payload does not echo it back.
    ///
    /// # Arguments
    ///
    /// * `request` - Kline request parameters.
    pub async fn get_klines(&self, request: &KlinesRequest) -> Result<Vec<KlineData>, BingXError> {
        let params = Params::new()
            .set("symbol", &request.symbol)
            .set("interval", request.interval)
            .set_opt("limit", request.limit)
            .set_opt("startTime", request.start_time)
            .set_opt("endTime", request.end_time);
        let rows: Vec<KlineRow> = self.public_get(public::KLINES, params).await?;
        Ok(rows
            .into_iter()
            .map(|row| row.with_interval(request.interval))
            .collect())
    }

    /// Get 24-hour tickers for all symbols, as a symbol to last-price map.
    ///
    /// The wire payload is an ordered list of ticker records; it is folded
    /// into a map keyed by symbol. If the exchange ever repeats a symbol the
    /// later entry wins.
    pub async fn get_tickers(&self) -> Result<Tickers, BingXError> {
        let entries: Vec<TickerData> = self.public_get(public::TICKER_24H, Params::new()).await?;
        let mut tickers = Tickers::new();
        for ticker in entries {
            tickers.insert(ticker.symbol, ticker.last_price);
        }
        Ok(tickers)
    }
}
