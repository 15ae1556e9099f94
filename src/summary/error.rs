//! Error types for summary fetch operations.

use std::fmt;

use thiserror::Error;

/// Structured classification for HTTP transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    /// Request or connect timed out.
    Timeout,
    /// Connection could not be established (DNS, TCP, TLS).
    Connect,
    /// Response body could not be decoded as the expected JSON shape.
    Decode,
    /// Redirect policy was violated (too many hops or a redirect loop).
    Redirect,
    /// Failure tied to an HTTP status code.
    Status,
    /// Unclassified transport failure.
    Other,
}

impl HttpErrorKind {
    #[must_use]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connect
        } else if error.is_decode() {
            Self::Decode
        } else if error.is_redirect() {
            Self::Redirect
        } else if error.is_status() {
            Self::Status
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Timeout => "timeout",
            Self::Connect => "connect",
            Self::Decode => "decode",
            Self::Redirect => "redirect",
            Self::Status => "status",
            Self::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// Errors that can occur while fetching summaries.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Query was empty or whitespace-only.
    #[error("empty query\n  Suggestion: Provide a non-empty search term")]
    EmptyQuery,

    /// HTTP transport or decoding failed.
    #[error("http error ({kind}): {message}")]
    Http {
        /// Typed classification used for failure handling.
        kind: HttpErrorKind,
        /// Human-readable transport error text.
        message: String,
    },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            kind: HttpErrorKind::from_reqwest(&err),
            message: err.to_string(),
        }
    }
}

impl FetchError {
    /// Creates an `Http` error for a client construction failure.
    #[must_use]
    pub(crate) fn client_construction(error: &reqwest::Error) -> Self {
        Self::Http {
            kind: HttpErrorKind::Other,
            message: format!("HTTP client construction failed: {error}"),
        }
    }

    /// Returns the typed transport error kind, when this is an HTTP error.
    #[must_use]
    pub fn http_kind(&self) -> Option<HttpErrorKind> {
        match self {
            Self::Http { kind, .. } => Some(*kind),
            Self::EmptyQuery => None,
        }
    }

    /// Returns true when this error is a transport timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.http_kind() == Some(HttpErrorKind::Timeout)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_empty_query_message() {
        let err = FetchError::EmptyQuery;
        let msg = err.to_string();
        assert!(msg.contains("empty query"));
        assert!(msg.contains("Suggestion"));
    }

    #[test]
    fn test_fetch_error_http_message() {
        let err = FetchError::Http {
            kind: HttpErrorKind::Connect,
            message: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("http error"));
        assert!(msg.contains("connect"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_fetch_error_http_kind_accessor() {
        let err = FetchError::Http {
            kind: HttpErrorKind::Timeout,
            message: "deadline elapsed".to_string(),
        };
        assert_eq!(err.http_kind(), Some(HttpErrorKind::Timeout));
        assert!(err.is_timeout());
        assert_eq!(FetchError::EmptyQuery.http_kind(), None);
    }

    #[test]
    fn test_http_error_kind_labels() {
        assert_eq!(HttpErrorKind::Timeout.to_string(), "timeout");
        assert_eq!(HttpErrorKind::Connect.to_string(), "connect");
        assert_eq!(HttpErrorKind::Decode.to_string(), "decode");
        assert_eq!(HttpErrorKind::Redirect.to_string(), "redirect");
        assert_eq!(HttpErrorKind::Status.to_string(), "status");
        assert_eq!(HttpErrorKind::Other.to_string(), "other");
    }

    #[test]
    fn test_fetch_error_clone() {
        let err = FetchError::Http {
            kind: HttpErrorKind::Decode,
            message: "unexpected payload".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
