//! Shared User-Agent string for all summary HTTP requests.
//!
//! Single source for project URL and UA format so every endpoint sees the
//! same client identifier (good citizenship; RFC 9308).

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/nicksrandall/wikisummary";

/// Default User-Agent for summary requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("wikisummary/{version} (summary-client; +{PROJECT_UA_URL})")
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    /// The UA must use the project URL and crate version (single shared format).
    /// The test uses this module's private PROJECT_UA_URL intentionally so the
    /// assertion stays in sync with the single source of truth.
    #[test]
    fn test_user_agent_format() {
        let ua = default_user_agent();
        assert!(ua.contains(PROJECT_UA_URL), "UA must contain project URL");
        assert_eq!(
            env!("CARGO_PKG_VERSION"),
            ua.strip_prefix("wikisummary/")
                .and_then(|s| s.split(' ').next())
                .expect("UA has version"),
            "UA must contain crate version"
        );
        assert!(
            ua.contains("summary-client"),
            "UA must identify as summary-client: {ua}"
        );
    }
}
