use std::sync::Arc;

use crate::extract::patterns::PatternLibrary;
use crate::recognizer::EntityRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both fields are built once at startup and never mutated afterwards, so no
/// locking is needed across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Compiled patterns and the skill vocabulary.
    pub patterns: Arc<PatternLibrary>,
    /// Pluggable entity recognizer. Default: RuleRecognizer. Swap to the
    /// remote backend via RECOGNIZER_URL.
    pub recognizer: Arc<dyn EntityRecognizer>,
}
