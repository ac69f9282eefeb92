use rust_decimal::Decimal;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bingx_api_client::error::BingXError;
use bingx_api_client::spot::rest::public::KlinesRequest;
use bingx_api_client::spot::rest::{BingXClient, SpotRestClient};
use bingx_api_client::types::KlineInterval;

fn build_public_client(server: &MockServer) -> SpotRestClient {
    SpotRestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_get_symbols_with_filter() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": {
            "symbols": [{
                "symbol": "BTC-USDT",
                "tickSize": 0.01,
                "stepSize": 0.000001,
                "minQty": 0.00005,
                "maxQty": 200.0,
                "minNotional": 1.0,
                "maxNotional": 1000000.0,
                "status": 1,
                "apiStateBuy": true,
                "apiStateSell": true,
                "timeOnline": 1_600_000_000_000_i64
            }]
        }
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/common/symbols"))
        .and(query_param("symbol", "BTC-USDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let symbols = client.get_symbols(Some("BTC-USDT")).await.unwrap();

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0].symbol, "BTC-USDT");
    assert_eq!(symbols[0].tick_size, "0.01".parse::<Decimal>().unwrap());
    assert!(symbols[0].api_state_buy);
}

#[tokio::test]
async fn test_get_order_book_with_limit() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": {
            "ts": 1_700_000_000_000_i64,
            "bids": [["64999.5", "0.5"], ["64999.0", "1.2"]],
            "asks": [["65000.5", "0.25"]]
        }
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/market/depth"))
        .and(query_param("symbol", "BTC-USDT"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client.get_order_book("BTC-USDT", Some(50)).await.unwrap();

    assert_eq!(book.timestamp, 1_700_000_000_000);
    assert_eq!(book.bids.len(), 2);
    assert_eq!(book.asks[0].price, "65000.5".parse::<Decimal>().unwrap());
    assert_eq!(book.asks[0].quantity, "0.25".parse::<Decimal>().unwrap());
}

#[tokio::test]
async fn test_get_order_book_omits_unset_limit() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": { "ts": 0, "bids": [], "asks": [] }
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/market/depth"))
        .and(query_param("symbol", "BTC-USDT"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client.get_order_book("BTC-USDT", None).await.unwrap();
    assert!(book.bids.is_empty());
}

#[tokio::test]
async fn test_get_klines_projects_rows_and_interval() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": [
            [1_700_000_000_000_i64, 100, 110, 95, 105, 1234.5],
            [1_700_003_600_000_i64, 105, 107.5, 101, 102, 987.0]
        ]
    });

    Mock::given(method("GET"))
        .and(path("/openApi/market/his/v1/kline"))
        .and(query_param("symbol", "BTC-USDT"))
        .and(query_param("interval", "1h"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = KlinesRequest::new("BTC-USDT", KlineInterval::Hour1).limit(2);
    let klines = client.get_klines(&request).await.unwrap();

    assert_eq!(klines.len(), 2);
    assert_eq!(klines[0].start_time, 1_700_000_000_000);
    assert_eq!(klines[0].open, Decimal::from(100));
    assert_eq!(klines[0].high, Decimal::from(110));
    assert_eq!(klines[0].low, Decimal::from(95));
    assert_eq!(klines[0].close, Decimal::from(105));
    assert_eq!(klines[0].volume, "1234.5".parse::<Decimal>().unwrap());
    // The wire payload does not echo the interval; it comes from the request.
    assert_eq!(klines[0].interval, KlineInterval::Hour1);
    assert_eq!(klines[1].interval, KlineInterval::Hour1);
}

#[tokio::test]
async fn test_get_klines_rejects_short_rows() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": [[1_700_000_000_000_i64, 100, 110]]
    });

    Mock::given(method("GET"))
        .and(path("/openApi/market/his/v1/kline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let request = KlinesRequest::new("BTC-USDT", KlineInterval::Min1);
    let err = client.get_klines(&request).await.unwrap_err();
    assert!(matches!(err, BingXError::Decode(_)));
}

#[tokio::test]
async fn test_get_tickers_folds_into_map() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": [
            { "symbol": "BTC-USDT", "lastPrice": 65000 },
            { "symbol": "ETH-USDT", "lastPrice": 3500 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/ticker/24hr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let tickers = client.get_tickers().await.unwrap();

    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers["BTC-USDT"], Decimal::from(65000));
    assert_eq!(tickers["ETH-USDT"], Decimal::from(3500));
}

#[tokio::test]
async fn test_duplicate_ticker_symbols_last_write_wins() {
    // Upstream does not document deduplication; a repeated symbol silently
    // overwrites the earlier price. This pins the current behavior.
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": [
            { "symbol": "BTC-USDT", "lastPrice": 65000 },
            { "symbol": "ETH-USDT", "lastPrice": 3500 },
            { "symbol": "BTC-USDT", "lastPrice": 65001 }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/ticker/24hr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let tickers = client.get_tickers().await.unwrap();

    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers["BTC-USDT"], Decimal::from(65001));
}

#[tokio::test]
async fn test_api_error_mapping() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 100410,
        "msg": "The request frequency limit is reached",
        "debugMsg": "slow down",
        "data": null
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/market/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_order_book("BTC-USDT", None).await.unwrap_err();
    match err {
        BingXError::Api(api) => {
            assert_eq!(api.code, 100410);
            assert_eq!(api.message, "The request frequency limit is reached");
            assert_eq!(api.debug_message, "slow down");
            assert!(api.is_rate_limited());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_data_is_decode_error() {
    let server = MockServer::start().await;
    // "data" carries the wrong shape for the symbols payload.
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": { "symbols": "not-a-list" }
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/common/symbols"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_symbols(None).await.unwrap_err();
    assert!(matches!(err, BingXError::Decode(_)));
}

#[tokio::test]
async fn test_operations_through_client_trait() {
    async fn best_ask<C: BingXClient>(client: &C) -> Option<Decimal> {
        let book = client.get_order_book("BTC-USDT", Some(1)).await.ok()?;
        book.asks.first().map(|level| level.price)
    }

    let server = MockServer::start().await;
    let response = serde_json::json!({
        "code": 0,
        "msg": "",
        "debugMsg": "",
        "data": { "ts": 0, "bids": [], "asks": [["65000.5", "0.25"]] }
    });

    Mock::given(method("GET"))
        .and(path("/openApi/spot/v1/market/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ask = best_ask(&client).await;
    assert_eq!(ask, Some("65000.5".parse::<Decimal>().unwrap()));
}
