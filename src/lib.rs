//! Wikisummary Client Library
//!
//! This library fetches article summaries from the Wikipedia REST API
//! (`/api/rest_v1/page/summary`) and classifies each response as found,
//! not found, or ambiguous (a disambiguation page).
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`summary`] - Summary types, outcome classification, and the HTTP client
//!
//! # Example
//!
//! ```no_run
//! use wikisummary::{QueryOutcome, SummaryClient};
//!
//! # async fn example() -> Result<(), wikisummary::FetchError> {
//! let client = SummaryClient::new()?;
//! match client.fetch("hello world", false).await? {
//!     QueryOutcome::Found(summary) => println!("{:?}", summary.title),
//!     QueryOutcome::NotFound => println!("no article found"),
//!     QueryOutcome::Ambiguous(query) => println!("'{query}' matches several articles"),
//! }
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod summary;

mod user_agent;

// Re-export commonly used types
pub use summary::{
    BatchOutcome, FetchError, HttpErrorKind, QueryOutcome, Summary, SummaryClient,
};
