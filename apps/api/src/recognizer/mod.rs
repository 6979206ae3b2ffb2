//! Entity recognizer seam.
//!
//! The extraction pipeline only ever talks to the narrow
//! [`EntityRecognizer`] trait: given text, return labeled spans. The core
//! consumes PERSON and DATE spans and ignores everything else, so backends
//! are free to produce richer label sets.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod http;
pub mod rule;

pub use http::HttpRecognizer;
pub use rule::RuleRecognizer;

/// Entity label as emitted by a recognizer backend. Upstream label strings
/// are uppercase ("PERSON", "DATE"); anything unrecognized maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Person,
    Date,
    #[serde(other)]
    Other,
}

/// A labeled substring produced by a recognizer backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Recognizer API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The recognizer trait. Implement this to swap backends without touching
/// the extraction pipeline or its callers.
///
/// Carried in `AppState` as `Arc<dyn EntityRecognizer>`. A failed call fails
/// the whole parse request; there is no retry and no partial result.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError>;
}

/// Returns the texts of all spans carrying `label`, in recognizer order.
pub fn spans_with_label(spans: &[EntitySpan], label: EntityLabel) -> Vec<String> {
    spans
        .iter()
        .filter(|s| s.label == label)
        .map(|s| s.text.clone())
        .collect()
}

#[cfg(test)]
pub mod stub {
    //! Deterministic recognizer for tests: returns a fixed span list
    //! regardless of input.

    use super::*;

    pub struct StaticRecognizer(pub Vec<EntitySpan>);

    #[async_trait]
    impl EntityRecognizer for StaticRecognizer {
        async fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            Ok(self.0.clone())
        }
    }

    pub struct FailingRecognizer;

    #[async_trait]
    impl EntityRecognizer for FailingRecognizer {
        async fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
            Err(RecognizerError::Api {
                status: 503,
                message: "backend unavailable".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_deserializes_uppercase() {
        let label: EntityLabel = serde_json::from_str(r#""PERSON""#).unwrap();
        assert_eq!(label, EntityLabel::Person);
        let label: EntityLabel = serde_json::from_str(r#""DATE""#).unwrap();
        assert_eq!(label, EntityLabel::Date);
    }

    #[test]
    fn test_unknown_label_maps_to_other() {
        let label: EntityLabel = serde_json::from_str(r#""ORG""#).unwrap();
        assert_eq!(label, EntityLabel::Other);
        let label: EntityLabel = serde_json::from_str(r#""GPE""#).unwrap();
        assert_eq!(label, EntityLabel::Other);
    }

    #[test]
    fn test_spans_with_label_preserves_order() {
        let spans = vec![
            EntitySpan::new("Jane Doe", EntityLabel::Person),
            EntitySpan::new("2020", EntityLabel::Date),
            EntitySpan::new("Acme", EntityLabel::Other),
            EntitySpan::new("2021", EntityLabel::Date),
        ];
        assert_eq!(spans_with_label(&spans, EntityLabel::Date), vec!["2020", "2021"]);
        assert_eq!(
            spans_with_label(&spans, EntityLabel::Person),
            vec!["Jane Doe"]
        );
    }
}
