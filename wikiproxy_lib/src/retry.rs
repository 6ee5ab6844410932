//! Retry policy for idempotent upstream GETs.

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::error::ProxyError;

/// How many times, and how patiently, a failed upstream call is retried.
///
/// Only transport failures are retried; structured API errors such as
/// `missingtitle` are final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 0,
            base_delay_ms: 500,
            max_delay_ms: 5000,
        }
    }
}

impl RetryConfig {
    /// Reads `WIKIPROXY_RETRY_MAX`, `WIKIPROXY_RETRY_BASE_MS` and
    /// `WIKIPROXY_RETRY_MAX_MS`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_retries: env_usize("WIKIPROXY_RETRY_MAX", defaults.max_retries),
            base_delay_ms: env_u64("WIKIPROXY_RETRY_BASE_MS", defaults.base_delay_ms),
            max_delay_ms: env_u64("WIKIPROXY_RETRY_MAX_MS", defaults.max_delay_ms),
        }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self::default()
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

/// Runs `f`, retrying retryable failures with exponential backoff.
pub async fn with_retry<T, F, Fut>(
    cfg: &RetryConfig,
    label: &str,
    mut f: F,
) -> Result<T, wikipedia_api::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, wikipedia_api::Error>>,
{
    let mut attempt = 0usize;
    loop {
        match f().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                attempt += 1;
                if attempt > cfg.max_retries || !is_retryable(&err) {
                    return Err(err);
                }
                let delay = cfg.delay_for_attempt(attempt);
                tracing::warn!(
                    "{} request failed (attempt {}/{}), retrying in {:.1}s",
                    label,
                    attempt,
                    cfg.max_retries,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

fn is_retryable(err: &wikipedia_api::Error) -> bool {
    match err {
        wikipedia_api::Error::RequestFailed(_) => true,
        wikipedia_api::Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        wikipedia_api::Error::Api { .. } | wikipedia_api::Error::InvalidResponse(_) => false,
    }
}

/// Convenience for callers that want the library error directly.
pub(crate) async fn with_retry_mapped<T, F, Fut>(
    cfg: &RetryConfig,
    label: &str,
    f: F,
) -> Result<T, ProxyError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, wikipedia_api::Error>>,
{
    with_retry(cfg, label, f).await.map_err(ProxyError::from)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(default)
}
