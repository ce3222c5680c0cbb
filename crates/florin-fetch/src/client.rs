//! HTTP client for downloading source data.

use bytes::Bytes;
use reqwest::{Client, redirect};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for transient failures.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            max_retries: 5,
            base_delay_ms: 500,
            max_delay_ms: 30_000,
            user_agent: format!("florin/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching source data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport failed (DNS, connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Status code error: {status} {reason}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        reason: String,
    },
}

/// Retrieval of a URL's raw body bytes.
///
/// [`FetchClient`] is the transport used in production. Consumers that
/// orchestrate fetches are generic over this trait, so their control flow
/// can be driven against scripted responses without a network.
pub trait Fetch {
    /// Fetches the raw body bytes from the given URL.
    fn fetch_bytes(&self, url: &str) -> impl Future<Output = Result<Bytes, FetchError>> + Send;
}

impl Fetch for FetchClient {
    fn fetch_bytes(&self, url: &str) -> impl Future<Output = Result<Bytes, FetchError>> + Send {
        self.fetch(url)
    }
}

/// HTTP client with connection pooling and retry logic.
///
/// Redirects are followed with the redirect target's path taken as-is: the
/// Land Registry export redirects to URLs whose path contains
/// percent-escaped segments (`%2F`), and those must reach the server
/// untouched rather than being decoded and re-encoded along the way.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the raw body bytes from the given URL.
    ///
    /// Any status other than success is fatal for the fetch; server errors
    /// (5xx) and rate limiting (429) are retried with exponential backoff
    /// before giving up.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries or the
    /// server responds with a non-success status.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let mut attempts = 0;

        loop {
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();

                    // Retry on server errors (5xx) and rate limiting (429)
                    if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            let delay = self.calculate_backoff_delay(attempts);
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                    }

                    if !status.is_success() {
                        return Err(FetchError::Status {
                            status: status.as_u16(),
                            reason: status.canonical_reason().unwrap_or("unknown").to_string(),
                        });
                    }

                    return Ok(response.bytes().await?);
                }
                Err(e) if self.is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        // Exponential backoff: base_delay * 2^attempt
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));

        // Cap at max delay
        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Add jitter (±25%)
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            // Deterministic jitter based on attempt number, avoiding a RNG
            let jitter_offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            jitter_offset.saturating_sub(jitter_range)
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter as i64).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(&self, error: &reqwest::Error) -> bool {
        // Don't retry builder errors (configuration issues)
        if error.is_builder() {
            return false;
        }

        // Retry on timeouts, connection errors, and request errors
        error.is_timeout() || error.is_connect() || error.is_request()
    }
}
