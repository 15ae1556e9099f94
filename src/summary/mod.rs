//! Article summary retrieval and outcome classification.
//!
//! This module wraps the Wikipedia REST API summary endpoints behind a small
//! client and classifies every response into a tagged outcome instead of
//! using errors for control flow.
//!
//! # Architecture
//!
//! - [`SummaryClient`] - HTTP client for the summary endpoints
//! - [`Summary`] - The selected subset of fields from a summary payload
//! - [`QueryOutcome`] - Classification of a single query (found / not found / ambiguous)
//! - [`BatchOutcome`] - Aggregated counts and results for a batch of queries
//!
//! # Example
//!
//! ```no_run
//! use wikisummary::summary::SummaryClient;
//!
//! # async fn example() -> Result<(), wikisummary::FetchError> {
//! let client = SummaryClient::new()?;
//! let batch = client
//!     .fetch_many_with_meta(&["hello world", "micro"], false)
//!     .await?;
//! println!("{} of {} queries succeeded", batch.hits, batch.total_queries());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod http_client;

pub use client::SummaryClient;
pub use error::{FetchError, HttpErrorKind};

use serde::{Deserialize, Serialize};

/// An article summary with the subset of fields this library exposes.
///
/// Fields absent from the API payload stay `None` and are skipped during
/// serialization, so a serialized summary carries exactly the keys the API
/// returned (minus `extract` for short results).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The original search term. Set only on the single/batch query path;
    /// random summaries have no query to echo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Canonical article title (the redirect target when the API redirected).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Short article description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Long-form extract. Omitted for short results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

/// Classification of a single query against the summary endpoint.
///
/// Replaces exception-based control flow: the batch aggregator pattern-matches
/// on this enum instead of catching an ambiguity error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The query resolved to exactly one article.
    Found(Summary),
    /// No article matches the query (HTTP 404 or unrecognized payload).
    NotFound,
    /// The query resolved to a disambiguation page; carries the original
    /// query string so callers can report which term needs refinement.
    Ambiguous(String),
}

impl QueryOutcome {
    /// Returns true when the query resolved to exactly one article.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the summary when the query was found.
    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            Self::Found(summary) => Some(summary),
            Self::NotFound | Self::Ambiguous(_) => None,
        }
    }

    /// Consumes the outcome, returning the summary when the query was found.
    #[must_use]
    pub fn into_summary(self) -> Option<Summary> {
        match self {
            Self::Found(summary) => Some(summary),
            Self::NotFound | Self::Ambiguous(_) => None,
        }
    }
}

/// Aggregated outcome of a batch of queries.
///
/// For a batch of N queries, `hits + not_found.len() + ambiguous.len() == N`
/// and `results.len() == hits`. All sequences preserve input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    /// Number of queries that resolved to exactly one article.
    pub hits: usize,
    /// Queries with no matching article, in input order.
    pub not_found: Vec<String>,
    /// Queries that resolved to a disambiguation page, in input order.
    pub ambiguous: Vec<String>,
    /// Summaries for successful queries, in input order.
    pub results: Vec<Summary>,
}

impl BatchOutcome {
    /// Total number of queries this outcome accounts for.
    #[must_use]
    pub fn total_queries(&self) -> usize {
        self.hits + self.not_found.len() + self.ambiguous.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_summary() -> Summary {
        Summary {
            query: Some("hello world".to_string()),
            title: Some("\"Hello, World!\" program".to_string()),
            description: Some("Traditional beginners' computer program".to_string()),
            extract: Some("A \"Hello, World!\" program generally is...".to_string()),
        }
    }

    #[test]
    fn test_summary_serialize_skips_absent_fields() {
        let summary = Summary {
            query: None,
            title: Some("Chicago".to_string()),
            description: Some("City in Illinois".to_string()),
            extract: None,
        };
        let value = serde_json::to_value(&summary).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("title"));
        assert!(object.contains_key("description"));
        assert!(!object.contains_key("query"));
        assert!(!object.contains_key("extract"));
    }

    #[test]
    fn test_summary_serialize_full() {
        let value = serde_json::to_value(sample_summary()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["query"], "hello world");
        assert_eq!(object["title"], "\"Hello, World!\" program");
    }

    #[test]
    fn test_query_outcome_found_accessors() {
        let outcome = QueryOutcome::Found(sample_summary());
        assert!(outcome.is_found());
        assert_eq!(
            outcome.summary().unwrap().query.as_deref(),
            Some("hello world")
        );
        assert!(outcome.into_summary().is_some());
    }

    #[test]
    fn test_query_outcome_not_found_accessors() {
        let outcome = QueryOutcome::NotFound;
        assert!(!outcome.is_found());
        assert!(outcome.summary().is_none());
        assert!(outcome.into_summary().is_none());
    }

    #[test]
    fn test_query_outcome_ambiguous_carries_query() {
        let outcome = QueryOutcome::Ambiguous("micro".to_string());
        assert!(!outcome.is_found());
        assert!(outcome.summary().is_none());
        assert_eq!(outcome, QueryOutcome::Ambiguous("micro".to_string()));
    }

    #[test]
    fn test_batch_outcome_default_is_empty() {
        let outcome = BatchOutcome::default();
        assert_eq!(outcome.hits, 0);
        assert!(outcome.not_found.is_empty());
        assert!(outcome.ambiguous.is_empty());
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.total_queries(), 0);
    }

    #[test]
    fn test_batch_outcome_total_queries() {
        let outcome = BatchOutcome {
            hits: 3,
            not_found: vec!["hello123".to_string()],
            ambiguous: vec!["micro".to_string()],
            results: vec![sample_summary(), sample_summary(), sample_summary()],
        };
        assert_eq!(outcome.total_queries(), 5);
        assert_eq!(outcome.results.len(), outcome.hits);
    }
}
