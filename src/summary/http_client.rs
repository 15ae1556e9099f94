//! Shared HTTP client construction policy for summary requests.
//!
//! This module centralizes networking defaults so every summary endpoint is
//! reached with the same timeout, user-agent, compression, and redirect
//! settings.

use std::time::Duration;

use reqwest::Client;
use reqwest::redirect::Policy;

use crate::user_agent;

use super::FetchError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// Maximum redirect hops followed by the transport. The summary endpoint
/// answers a redirecting title with at most one hop, so this cap only guards
/// against redirect loops.
const MAX_REDIRECT_HOPS: usize = 10;

/// Builds the summary HTTP client using shared project policy.
///
/// Redirects are followed transparently up to [`MAX_REDIRECT_HOPS`], so
/// callers always classify the final resolved payload.
///
/// # Errors
///
/// Returns [`FetchError`] when client construction fails.
pub(crate) fn build_summary_http_client() -> Result<Client, FetchError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .user_agent(user_agent::default_user_agent())
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .gzip(true)
        .build()
        .map_err(|error| FetchError::client_construction(&error))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_summary_http_client_succeeds() {
        let client = build_summary_http_client();
        assert!(client.is_ok(), "default client policy must construct");
    }
}
