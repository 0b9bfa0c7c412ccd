// src/classifier.rs

//! Rule-based sentiment classification.
//!
//! Matching is case-insensitive substring containment against two configured
//! indicator lists. A negative match wins over a positive one; texts matching
//! neither list are neutral. There is no stemming, tokenization or language
//! detection.

use crate::models::{LexiconConfig, Sentiment};

/// Deterministic lexicon-based sentiment classifier.
///
/// The indicator lists are data: swapping them changes which texts match,
/// never how matching works.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    negative: Vec<String>,
    positive: Vec<String>,
}

impl SentimentClassifier {
    /// Build a classifier from indicator word lists.
    ///
    /// Indicators are folded to lowercase once here so that `classify` only
    /// lowercases the input text.
    pub fn new(
        negative: impl IntoIterator<Item = String>,
        positive: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            negative: negative.into_iter().map(|w| w.to_lowercase()).collect(),
            positive: positive.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Build a classifier from the configured lexicon.
    pub fn from_lexicon(lexicon: &LexiconConfig) -> Self {
        Self::new(lexicon.negative.iter().cloned(), lexicon.positive.iter().cloned())
    }

    /// Classify a text.
    ///
    /// Total over all strings: every input, including the empty string, maps
    /// to exactly one label. Negative indicators take precedence over
    /// positive ones when both match.
    pub fn classify(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();

        if self.negative.iter().any(|w| lowered.contains(w.as_str())) {
            return Sentiment::Negative;
        }
        if self.positive.iter().any(|w| lowered.contains(w.as_str())) {
            return Sentiment::Positive;
        }
        Sentiment::Neutral
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::from_lexicon(&LexiconConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_default_lexicon() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.classify("хорошая вещь"), Sentiment::Positive);
        assert_eq!(classifier.classify("плохая вещь"), Sentiment::Negative);
        assert_eq!(classifier.classify("обычная вещь"), Sentiment::Neutral);
    }

    #[test]
    fn total_over_empty_and_unmatched_input() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.classify(""), Sentiment::Neutral);
        assert_eq!(classifier.classify("string"), Sentiment::Neutral);
    }

    #[test]
    fn negative_takes_precedence_over_positive() {
        let classifier = SentimentClassifier::default();
        assert_eq!(
            classifier.classify("хорошая упаковка, плохая начинка"),
            Sentiment::Negative
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let classifier = SentimentClassifier::default();
        assert_eq!(classifier.classify("ПЛОХАЯ"), classifier.classify("плохая"));
        assert_eq!(classifier.classify("ХОРОШО"), Sentiment::Positive);
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = SentimentClassifier::default();
        let first = classifier.classify("люблю этот сервис");
        for _ in 0..10 {
            assert_eq!(classifier.classify("люблю этот сервис"), first);
        }
    }

    #[test]
    fn lexicon_is_data_not_algorithm() {
        let classifier = SentimentClassifier::new(
            vec!["awful".to_string()],
            vec!["great".to_string()],
        );
        assert_eq!(classifier.classify("a GREAT day"), Sentiment::Positive);
        assert_eq!(classifier.classify("great but awful"), Sentiment::Negative);
        // The default Russian indicators are not wired in.
        assert_eq!(classifier.classify("хорошая"), Sentiment::Neutral);
    }

    #[test]
    fn uppercase_indicators_are_folded() {
        let classifier =
            SentimentClassifier::new(vec!["УЖАС".to_string()], Vec::new());
        assert_eq!(classifier.classify("тихий ужас"), Sentiment::Negative);
    }
}
