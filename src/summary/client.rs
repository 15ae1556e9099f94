//! Summary client - fetches article summaries via the Wikipedia REST API.
//!
//! The [`SummaryClient`] calls the REST summary endpoints, selects the
//! exposed subset of fields from the response, and classifies each query
//! into a [`QueryOutcome`] from the HTTP status code and payload shape.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::http_client::build_summary_http_client;
use super::{BatchOutcome, FetchError, QueryOutcome, Summary};

/// Default summary endpoint base URL.
const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Default random-summary endpoint URL.
const DEFAULT_RANDOM_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/random/summary";

/// Payload type marker for a regular article summary.
const PAYLOAD_TYPE_STANDARD: &str = "standard";

/// Payload type marker for a disambiguation page.
const PAYLOAD_TYPE_DISAMBIGUATION: &str = "disambiguation";

// ==================== Summary API Response Types ====================

/// Raw summary endpoint response. Extra fields (thumbnails, content URLs,
/// coordinates) are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct SummaryPayload {
    /// Payload classification: "standard", "disambiguation", or something
    /// else entirely (error bodies have no `type` at all).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub extract: Option<String>,
}

impl SummaryPayload {
    fn is_standard(&self) -> bool {
        self.kind.as_deref() == Some(PAYLOAD_TYPE_STANDARD)
    }

    fn is_disambiguation(&self) -> bool {
        self.kind.as_deref() == Some(PAYLOAD_TYPE_DISAMBIGUATION)
    }

    /// Selects the exposed field subset, echoing the original query on the
    /// non-random path and dropping the extract for short results.
    fn into_summary(self, query: Option<&str>, short: bool) -> Summary {
        Summary {
            query: query.map(ToString::to_string),
            title: self.title,
            description: self.description,
            extract: if short { None } else { self.extract },
        }
    }
}

// ==================== SummaryClient ====================

/// Fetches article summaries from the Wikipedia REST API.
///
/// The client queries `{base_url}/{query}?redirect=true` for single and
/// batch lookups and a separate random-summary endpoint for random lookups.
/// Redirects are followed transparently by the transport, so classification
/// always sees the final resolved payload.
///
/// Requests are issued strictly sequentially; the batch path awaits each
/// round-trip before starting the next.
pub struct SummaryClient {
    client: Client,
    base_url: String,
    random_url: String,
}

impl SummaryClient {
    /// Creates a new `SummaryClient` against the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if HTTP client construction fails.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_urls(DEFAULT_BASE_URL, DEFAULT_RANDOM_URL)
    }

    /// Creates a `SummaryClient` with custom endpoint URLs (for testing
    /// with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if HTTP client construction fails.
    pub fn with_base_urls(
        base_url: impl Into<String>,
        random_url: impl Into<String>,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_summary_http_client()?,
            base_url: base_url.into(),
            random_url: random_url.into(),
        })
    }

    /// Fetches the summary for a single search term.
    ///
    /// Sends one GET to the summary endpoint and classifies the response:
    /// HTTP 404 is [`QueryOutcome::NotFound`], a `"standard"` payload is
    /// [`QueryOutcome::Found`] with `query` echoing the original input (not
    /// the possibly-redirected title), and a `"disambiguation"` payload is
    /// [`QueryOutcome::Ambiguous`] carrying the input. Any other payload
    /// shape counts as not found. `short` drops the `extract` field.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::EmptyQuery`] for an empty or whitespace-only
    /// query, and [`FetchError::Http`] when the transport or JSON decoding
    /// fails.
    #[tracing::instrument(skip(self), fields(query = %query))]
    pub async fn fetch(&self, query: &str, short: bool) -> Result<QueryOutcome, FetchError> {
        if query.trim().is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        let url = format!(
            "{}/{}?redirect=true",
            self.base_url,
            urlencoding::encode(query)
        );
        debug!(api_url = %url, "Requesting summary");

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No article found");
            return Ok(QueryOutcome::NotFound);
        }

        let payload = response.json::<SummaryPayload>().await?;
        if payload.is_standard() {
            Ok(QueryOutcome::Found(payload.into_summary(Some(query), short)))
        } else if payload.is_disambiguation() {
            debug!("Query resolved to a disambiguation page");
            Ok(QueryOutcome::Ambiguous(query.to_string()))
        } else {
            debug!(payload_type = ?payload.kind, "Unrecognized payload type");
            Ok(QueryOutcome::NotFound)
        }
    }

    /// Fetches summaries for multiple search terms, returning only the
    /// successful results in input order.
    ///
    /// Equivalent to [`fetch_many_with_meta`](Self::fetch_many_with_meta)
    /// with the aggregate counts discarded.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] under the same conditions as
    /// [`fetch_many_with_meta`](Self::fetch_many_with_meta).
    pub async fn fetch_many(
        &self,
        queries: &[impl AsRef<str>],
        short: bool,
    ) -> Result<Vec<Summary>, FetchError> {
        Ok(self.fetch_many_with_meta(queries, short).await?.results)
    }

    /// Fetches summaries for multiple search terms, aggregating outcomes.
    ///
    /// Queries are fetched sequentially, one round-trip at a time. Each
    /// outcome lands in exactly one bucket: found summaries in `results`
    /// (counted by `hits`), missing articles in `not_found`, disambiguation
    /// pages in `ambiguous`. No classification outcome aborts the batch.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when a query is empty or its HTTP round-trip
    /// fails; transport failures are not recovered per-query.
    #[tracing::instrument(skip_all, fields(query_count = queries.len()))]
    pub async fn fetch_many_with_meta(
        &self,
        queries: &[impl AsRef<str>],
        short: bool,
    ) -> Result<BatchOutcome, FetchError> {
        let mut outcome = BatchOutcome::default();
        for query in queries {
            let query = query.as_ref();
            match self.fetch(query, short).await? {
                QueryOutcome::Found(summary) => {
                    outcome.hits += 1;
                    outcome.results.push(summary);
                }
                QueryOutcome::NotFound => outcome.not_found.push(query.to_string()),
                QueryOutcome::Ambiguous(ambiguous_query) => {
                    outcome.ambiguous.push(ambiguous_query);
                }
            }
        }
        debug!(
            hits = outcome.hits,
            not_found = outcome.not_found.len(),
            ambiguous = outcome.ambiguous.len(),
            "Batch fetch complete"
        );
        Ok(outcome)
    }

    /// Fetches the summary of a randomly selected article.
    ///
    /// The random endpoint never returns a disambiguation page, so the
    /// outcome is either a summary or `None` (HTTP 404 or an unrecognized
    /// payload). The result never carries a `query` field.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] when the transport or JSON decoding
    /// fails.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_random(&self, short: bool) -> Result<Option<Summary>, FetchError> {
        debug!(api_url = %self.random_url, "Requesting random summary");
        let response = self.client.get(&self.random_url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let payload = response.json::<SummaryPayload>().await?;
        if payload.is_standard() {
            Ok(Some(payload.into_summary(None, short)))
        } else {
            debug!(payload_type = ?payload.kind, "Unrecognized random payload type");
            Ok(None)
        }
    }
}

impl std::fmt::Debug for SummaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryClient")
            .field("base_url", &self.base_url)
            .field("random_url", &self.random_url)
            .finish_non_exhaustive()
    }
}
