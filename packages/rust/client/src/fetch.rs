//! Rate-limited, credential-rotating HTTP reads.
//!
//! Every request picks the next token from the pool. A 403 that carries a
//! zero remaining-quota header is not an error: the client sleeps until the
//! advertised reset and retries the same request, as long as the wait fits
//! the configured backoff budget.

use std::time::Duration;

use reqwest::{Client, StatusCode, header::HeaderMap};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use talentscout_shared::{Result, TalentScoutError};

use crate::token::TokenPool;

/// User-Agent string for API requests.
const USER_AGENT: &str = concat!("TalentScout/", env!("CARGO_PKG_VERSION"));

/// Request timeout.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Wait assumed when the reset header is missing on a quota-exhausted reply.
const FALLBACK_RESET_SECS: i64 = 60;

/// Quota-exhausted response headers (GitHub REST conventions).
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// HTTP client with credential rotation and quota-aware blocking backoff.
pub struct RateLimitedClient {
    http: Client,
    tokens: TokenPool,
    max_backoff: Duration,
}

impl RateLimitedClient {
    /// Build a client over the given token pool.
    ///
    /// `max_backoff` bounds how long a single call may sleep waiting for a
    /// quota reset; a reset further away surfaces as
    /// [`TalentScoutError::RateLimited`] instead of an unbounded hang.
    pub fn new(tokens: TokenPool, max_backoff: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(3))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                TalentScoutError::upstream(None, format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            tokens,
            max_backoff,
        })
    }

    /// Perform an authenticated GET and deserialize the JSON body.
    ///
    /// Retries (after sleeping) only on quota exhaustion; every other
    /// non-200 outcome is terminal for this call.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        loop {
            let token = self.tokens.next();
            let response = self
                .http
                .get(url)
                .header("Authorization", format!("token {token}"))
                .header("Accept", "application/vnd.github+json")
                .send()
                .await
                .map_err(|e| TalentScoutError::upstream(None, format!("{url}: {e}")))?;

            let status = response.status();

            if status.is_success() {
                return response
                    .json::<T>()
                    .await
                    .map_err(|e| TalentScoutError::upstream(None, format!("{url}: bad body: {e}")));
            }

            match status {
                StatusCode::FORBIDDEN if quota_exhausted(response.headers()) => {
                    let now = chrono::Utc::now().timestamp();
                    let reset = header_i64(response.headers(), RESET_HEADER)
                        .unwrap_or(now + FALLBACK_RESET_SECS);
                    let wait = backoff_duration(reset, now);

                    if wait > self.max_backoff {
                        return Err(TalentScoutError::RateLimited {
                            wait_secs: wait.as_secs(),
                        });
                    }

                    warn!(url, wait_secs = wait.as_secs(), "rate limit hit, backing off");
                    tokio::time::sleep(wait).await;
                    debug!(url, "retrying after quota reset");
                }
                StatusCode::FORBIDDEN => {
                    return Err(TalentScoutError::AccessDenied(format!(
                        "{url}: forbidden — check token scopes"
                    )));
                }
                StatusCode::UNAUTHORIZED => {
                    return Err(TalentScoutError::AccessDenied(format!(
                        "{url}: invalid or expired token"
                    )));
                }
                _ => {
                    let message = response.text().await.unwrap_or_default();
                    return Err(TalentScoutError::upstream(
                        Some(status.as_u16()),
                        format!("{url}: {message}"),
                    ));
                }
            }
        }
    }
}

/// True when a 403 reply signals quota exhaustion rather than a permission
/// problem: the remaining-quota header is present and equal to zero.
fn quota_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get(REMAINING_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim() == "0")
        .unwrap_or(false)
}

/// Read an integer header value.
fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Seconds to wait for a quota reset: `reset − now`, floored at one second
/// so a reset in the past still yields a small positive pause.
pub fn backoff_duration(reset_secs: i64, now_secs: i64) -> Duration {
    Duration::from_secs((reset_secs - now_secs).max(1) as u64)
}
