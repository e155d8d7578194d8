//! HTTP reachability probe.
//!
//! Issues a single GET against a fixed well-known endpoint and collapses
//! every failure mode (timeout, refusal, DNS failure, unexpected status)
//! into `false`. Probe failures are valid observations, not errors.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Fixed reachability target.
///
/// Not configurable in the current design; a candidate for future
/// configurability.
pub const TEST_URL: &str = "http://www.google.com";

/// Fixed request timeout (10 seconds).
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur while constructing a prober.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// One-shot reachability check.
#[async_trait::async_trait]
pub trait Prober: Send + Sync {
    /// Perform a single reachability check.
    ///
    /// Returns `true` only if the target responded with a success status
    /// within the timeout. Never raises an error to the caller. No
    /// retries inside a single call.
    async fn probe(&self) -> bool;
}

/// Probes the fixed target with a single HTTP GET per cycle.
pub struct HttpProber {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpProber {
    /// Create a prober against the fixed target and timeout.
    ///
    /// # Errors
    /// Returns `ProbeError::Client` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_target(TEST_URL, PROBE_TIMEOUT)
    }

    fn with_target(url: impl Into<String>, timeout: Duration) -> Result<Self, ProbeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }
}

impl std::fmt::Debug for HttpProber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProber")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn probe(&self) -> bool {
        match self.client.get(&self.url).send().await {
            Ok(response) => {
                let status = response.status();
                let connected = status == StatusCode::OK;
                if connected {
                    tracing::debug!(url = %self.url, "probe successful");
                } else {
                    tracing::warn!(
                        url = %self.url,
                        status = %status,
                        "probe failed: unexpected status"
                    );
                }
                connected
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!(
                    url = %self.url,
                    timeout_ms = self.timeout.as_millis(),
                    "probe failed: timeout"
                );
                false
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "probe failed");
                false
            }
        }
    }
}
