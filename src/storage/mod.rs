//! Storage abstractions for review persistence.
//!
//! The store owns the write contract: it classifies the submitted text,
//! assigns the next id and stamps the creation time. Reads are ordered by
//! id so listing is deterministic regardless of backend.

pub mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Review, Sentiment};

// Re-export for convenience
pub use sqlite::SqliteReviewStore;

/// Trait for review storage backends.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Persist a new review.
    ///
    /// Computes the sentiment exactly once, lets the backend assign a
    /// monotonic id and stamps `created_at` with the current time. Returns
    /// the fully populated record.
    async fn create(&self, text: &str) -> Result<Review>;

    /// List reviews in ascending id order.
    ///
    /// With a filter, only reviews whose stored sentiment equals it are
    /// returned (exact match). An empty result is a normal outcome, not an
    /// error. Read-only.
    async fn list(&self, filter: Option<Sentiment>) -> Result<Vec<Review>>;
}
