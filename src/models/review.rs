//! Review data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Sentiment;

/// A persisted review record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Review {
    /// Monotonic identifier assigned by the store in creation order
    pub id: i64,

    /// Review text exactly as submitted
    pub text: String,

    /// Label computed once at creation time, never recomputed
    pub sentiment: Sentiment,

    /// Server-side creation timestamp, serialized as RFC 3339 with offset
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /reviews`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReviewRequest {
    /// Review text (required; the empty string is a valid review)
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_review() -> Review {
        Review {
            id: 1,
            text: "хорошая вещь".to_string(),
            sentiment: Sentiment::Positive,
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_with_rfc3339_timestamp() {
        let json = serde_json::to_value(sample_review()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["sentiment"], "positive");
        assert_eq!(json["created_at"], "2026-02-01T12:30:00Z");
    }

    #[test]
    fn request_requires_text_field() {
        assert!(serde_json::from_str::<CreateReviewRequest>("{}").is_err());
        let req: CreateReviewRequest = serde_json::from_str(r#"{"text":""}"#).unwrap();
        assert_eq!(req.text, "");
    }
}
