//! SQLite-backed review store.
//!
//! Wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode**: one writer plus concurrent readers.
//! - **create-if-missing**: a fresh database file is initialized on first
//!   open.
//!
//! Schema initialization is idempotent (`CREATE TABLE IF NOT EXISTS`), so
//! opening an already-initialized database is safe. Id assignment relies on
//! SQLite's atomic `AUTOINCREMENT` insert rather than application-level
//! locking; `AUTOINCREMENT` also guarantees ids are never reused.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

use crate::classifier::SentimentClassifier;
use crate::error::Result;
use crate::models::{Review, Sentiment};
use crate::storage::ReviewStore;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS reviews (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    text       TEXT NOT NULL,
    sentiment  TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

/// SQLite storage backend for reviews.
#[derive(Clone)]
pub struct SqliteReviewStore {
    pool: SqlitePool,
    classifier: SentimentClassifier,
}

impl SqliteReviewStore {
    /// Open the database at `path`, creating it if missing, and ensure the
    /// schema exists.
    pub async fn open(
        path: impl AsRef<Path>,
        classifier: SentimentClassifier,
    ) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        let store = Self { pool, classifier };
        store.init_schema().await?;

        log::info!("Database initialized at {}", path.as_ref().display());
        Ok(store)
    }

    /// Create the reviews table if it does not exist. Safe to run repeatedly.
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ReviewStore for SqliteReviewStore {
    async fn create(&self, text: &str) -> Result<Review> {
        let sentiment = self.classifier.classify(text);
        let created_at = Utc::now();

        let review = sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (text, sentiment, created_at) \
             VALUES (?1, ?2, ?3) \
             RETURNING id, text, sentiment, created_at",
        )
        .bind(text)
        .bind(sentiment)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        log::info!("Stored review {} as {}", review.id, review.sentiment);
        Ok(review)
    }

    async fn list(&self, filter: Option<Sentiment>) -> Result<Vec<Review>> {
        let reviews = match filter {
            Some(sentiment) => {
                sqlx::query_as::<_, Review>(
                    "SELECT id, text, sentiment, created_at FROM reviews \
                     WHERE sentiment = ?1 ORDER BY id",
                )
                .bind(sentiment)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Review>(
                    "SELECT id, text, sentiment, created_at FROM reviews ORDER BY id",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(reviews)
    }
}
