//! BingX Spot REST API client implementation.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;

use crate::auth::{CredentialsProvider, SystemClock, TimestampProvider, sign_query};
use crate::error::BingXError;
use crate::spot::rest::endpoints::BINGX_BASE_URL;
use crate::spot::rest::params::Params;
use crate::types::response::BingXResponse;

/// The BingX Spot REST API client.
///
/// This client provides access to the BingX Spot trading and market data
/// REST endpoints. Signed requests are timestamped and HMAC-SHA256 signed
/// automatically; transient transport failures are retried by the underlying
/// middleware stack.
///
/// # Example
///
/// ```rust,no_run
/// use bingx_api_client::spot::rest::SpotRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public market data endpoints only
///     let client = SpotRestClient::new();
///
///     let book = client.get_order_book("BTC-USDT", Some(20)).await?;
///     println!("Best ask: {:?}", book.asks.first());
///
///     Ok(())
/// }
/// ```
///
/// For signed endpoints, provide credentials:
///
/// ```rust,no_run
/// use bingx_api_client::spot::rest::SpotRestClient;
/// use bingx_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = SpotRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balances = client.get_balances().await?;
///     println!("Balances: {:?}", balances);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    recv_window: Option<u64>,
}

impl SpotRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public market data endpoints.
    /// Use [`SpotRestClient::builder()`] to configure credentials for signed endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> SpotRestClientBuilder {
        SpotRestClientBuilder::new()
    }

    /// Make a public GET request.
    pub(crate) async fn public_get<T>(&self, endpoint: &str, params: Params) -> Result<T, BingXError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let query = params.to_query_string()?;
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query)
        };
        let response = self.http_client.get(&url).send().await?;
        self.parse_response(response).await
    }

    /// Make a signed GET request.
    pub(crate) async fn signed_get<T>(&self, endpoint: &str, params: Params) -> Result<T, BingXError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        self.signed_request(Method::GET, endpoint, params).await
    }

    /// Make a signed POST request.
    pub(crate) async fn signed_post<T>(&self, endpoint: &str, params: Params) -> Result<T, BingXError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        self.signed_request(Method::POST, endpoint, params).await
    }

    /// Make an authenticated request.
    ///
    /// The parameter set is stamped with the current timestamp (and the
    /// configured receive window, if any), encoded as a sorted query string,
    /// and signed; the signature is appended as the final query parameter.
    async fn signed_request<T>(
        &self,
        method: Method,
        endpoint: &str,
        params: Params,
    ) -> Result<T, BingXError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BingXError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        let mut params = params.set("timestamp", self.timestamp_provider.unix_millis());
        if let Some(window) = self.recv_window {
            params = params.set("recvWindow", window);
        }

        let query = params.to_query_string()?;
        let signature = sign_query(creds, &query)?;

        let url = format!(
            "{}{}?{}&signature={}",
            self.base_url, endpoint, query, signature
        );
        let response = self
            .http_client
            .request(method, &url)
            .header("X-BX-APIKEY", &creds.api_key)
            .send()
            .await?;

        self.parse_response(response).await
    }

    /// Parse a response from the BingX API.
    ///
    /// Every response body is a [`BingXResponse`] envelope; decoding it and
    /// converting the status code is the single error-mapping rule shared by
    /// all endpoints. A body that is not an envelope is a decode error, or a
    /// status error when the HTTP layer already failed.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, BingXError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let status = response.status();
        let body = response.text().await?;
        tracing::trace!("received {} response, {} bytes", status, body.len());

        let envelope: BingXResponse<T> = serde_json::from_str(&body).map_err(|e| {
            if status.is_success() {
                BingXError::Decode(format!("{}. Body: {}", e, body))
            } else {
                BingXError::Status {
                    status,
                    body: body.clone(),
                }
            }
        })?;

        envelope.into_result()
    }
}

impl Default for SpotRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("recv_window", &self.recv_window)
            .finish()
    }
}

/// Builder for [`SpotRestClient`].
pub struct SpotRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    recv_window: Option<u64>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl SpotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: BINGX_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            recv_window: None,
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set the receive window in milliseconds for signed requests.
    ///
    /// The server rejects signed requests older than this window.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> SpotRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bingx-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bingx-api-client"));
        headers.insert(USER_AGENT, header_value);

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock));

        SpotRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
            recv_window: self.recv_window,
        }
    }
}

impl Default for SpotRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
