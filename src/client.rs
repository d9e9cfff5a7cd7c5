//! bankcode-jp.com REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use url::Url;

use crate::endpoints::{BANKCODE_JP_BASE_URL, BANKS};
use crate::error::BankcodeError;
use crate::rate_limit::{DEFAULT_REQUEST_INTERVAL, FixedIntervalLimiter};
use crate::types::{Bank, GetParams};

/// The bankcode-jp.com REST API client.
///
/// The client authenticates with an API key passed as a query parameter and
/// paces outbound requests through a shared rate limiter. Cloning the client
/// is cheap; clones share the limiter and the underlying connection pool, so
/// concurrent callers of one logical client queue behind the same cadence.
///
/// # Example
///
/// ```rust,no_run
/// use bankcode_api_client::{BankcodeClient, GetParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BankcodeClient::builder().api_key("my_api_key").build()?;
///
///     let bank = client.get_bank("0001", &GetParams::default()).await?;
///     println!("{}: {}", bank.code, bank.name);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BankcodeClient {
    http_client: ClientWithMiddleware,
    base_url: Url,
    api_key: SecretString,
    limiter: Arc<Mutex<FixedIntervalLimiter>>,
    timeout: Option<Duration>,
}

impl BankcodeClient {
    /// Create a new client builder.
    pub fn builder() -> BankcodeClientBuilder {
        BankcodeClientBuilder::new()
    }

    /// Fetch a single bank by its four-digit code.
    ///
    /// Builds `{base}/banks/{code}`, waits for a rate-limit permit, issues
    /// the GET and decodes the JSON body into a [`Bank`]. When a per-call
    /// timeout is configured, the whole pipeline (including the limiter
    /// wait) runs under that deadline and fails with
    /// [`BankcodeError::Timeout`] once it elapses; a deadline that fires
    /// before a permit is granted issues no HTTP request at all.
    pub async fn get_bank(&self, code: &str, params: &GetParams) -> Result<Bank, BankcodeError> {
        let url = self.request_url(code, params)?;
        let fut = self.call(url, |body| {
            serde_json::from_slice(body).map_err(BankcodeError::from)
        });

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| BankcodeError::Timeout)?,
            None => fut.await,
        }
    }

    /// Build the request URL for a bank resource.
    ///
    /// The `apiKey` parameter is always appended; `fields` only when the
    /// selection is non-empty. A malformed base/path combination surfaces
    /// here, before any network activity.
    fn request_url(&self, code: &str, params: &GetParams) -> Result<Url, BankcodeError> {
        let mut url = Url::parse(&format!(
            "{}{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            BANKS,
            code
        ))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", self.api_key.expose_secret());
            if !params.fields.is_empty() {
                query.append_pair("fields", &params.fields.join(","));
            }
        }

        Ok(url)
    }

    /// Execute a rate-limited GET and hand the body to a decode closure.
    ///
    /// The body is read in full before the status check, so the connection
    /// is drained for reuse on every exit path; a read failure surfaces even
    /// when the status was 200. On a non-200 status the decode closure is
    /// not invoked and the error carries the status text.
    async fn call<T, F>(&self, url: Url, decode: F) -> Result<T, BankcodeError>
    where
        F: FnOnce(&[u8]) -> Result<T, BankcodeError>,
    {
        self.wait_for_permit().await;

        tracing::debug!(path = url.path(), "dispatching GET request");
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status != StatusCode::OK {
            return Err(BankcodeError::Status(status.to_string()));
        }

        decode(&body)
    }

    /// Wait until the rate limiter grants a permit.
    async fn wait_for_permit(&self) {
        loop {
            let mut limiter = self.limiter.lock().await;
            match limiter.try_acquire() {
                Ok(()) => return,
                Err(wait_time) => {
                    drop(limiter);
                    tokio::time::sleep(wait_time).await;
                }
            }
        }
    }
}

impl std::fmt::Debug for BankcodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BankcodeClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`BankcodeClient`].
///
/// Every setting is validated in [`build()`](Self::build); the first
/// rejected setting aborts construction and no partial client is returned.
pub struct BankcodeClientBuilder {
    api_key: Option<String>,
    base_url: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    request_interval: Duration,
}

impl BankcodeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: BANKCODE_JP_BASE_URL.to_string(),
            user_agent: None,
            timeout: None,
            request_interval: DEFAULT_REQUEST_INTERVAL,
        }
    }

    /// Set the API key (required, non-empty).
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a per-call deadline covering the rate-limit wait and the request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the minimum spacing between requests.
    ///
    /// Defaults to [`DEFAULT_REQUEST_INTERVAL`]; mainly useful for tests.
    pub fn request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }

    /// Build the client, validating every configured setting.
    pub fn build(self) -> Result<BankcodeClient, BankcodeError> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.is_empty() {
            return Err(BankcodeError::Config("API key is empty".to_string()));
        }

        if self.base_url.is_empty() {
            return Err(BankcodeError::Config("endpoint URL is empty".to_string()));
        }
        let base_url = Url::parse(&self.base_url)?;

        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bankcode-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bankcode-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder().default_headers(headers).build()?;
        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(BankcodeClient {
            http_client,
            base_url,
            api_key: SecretString::from(api_key),
            limiter: Arc::new(Mutex::new(FixedIntervalLimiter::new(self.request_interval))),
            timeout: self.timeout,
        })
    }
}

impl Default for BankcodeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
