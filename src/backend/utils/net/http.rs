//! HTTP fetching with bounded retries and exponential backoff.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;

use crate::backend::utils::config::{BASE_DELAY, MAX_RETRIES, REQUEST_TIMEOUT};
use crate::simple_error;
use crate::utils::Result;

const USER_AGENT: &str = concat!("PackFormatTracker/", env!("CARGO_PKG_VERSION"));

/// Timeout and retry budget for a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub retries: u32,
    /// Wait after the first failed attempt; doubles every attempt after that.
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Wait before the next try after the given failed attempt (1-indexed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay.saturating_mul(1u32 << exponent)
    }

    pub const fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            retries: MAX_RETRIES,
            base_delay: BASE_DELAY,
        }
    }
}

/// Runs `op` until it succeeds or `policy` runs out of attempts.
///
/// `sleep` is awaited between attempts with the backoff for the attempt that
/// just failed. The error of the final attempt is returned.
pub async fn with_retries<T, Op, OpFut, Sleep, SleepFut>(
    policy: &RetryPolicy,
    mut op: Op,
    mut sleep: Sleep,
) -> Result<T>
where
    Op: FnMut() -> OpFut,
    OpFut: Future<Output = Result<T>>,
    Sleep: FnMut(Duration) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                attempt += 1;
                if attempt >= policy.max_attempts() {
                    return Err(e);
                }

                let delay = policy.delay_for(attempt);
                warn!(
                    "[retry {attempt}/{}] waiting {:.1}s: {e}",
                    policy.retries,
                    delay.as_secs_f64()
                );
                sleep(delay).await;
            }
        }
    }
}

/// HTTP client that retries failed GET requests.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    policy: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(policy: RetryPolicy) -> Result<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(policy.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, policy })
    }

    /// Fetches `url` and returns the body as text.
    ///
    /// Transport errors, timeouts and non-2xx statuses are all retried until
    /// the budget runs out; the last error is returned.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("Fetching {url}");
        with_retries(&self.policy, move || self.try_get(url), tokio::time::sleep).await
    }

    async fn try_get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(simple_error!(Http, "Failed to fetch {url}: HTTP {status}"));
        }

        Ok(response.text().await?)
    }
}
