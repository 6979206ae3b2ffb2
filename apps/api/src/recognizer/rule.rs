//! Built-in rule recognizer.
//!
//! Pure-Rust, deterministic backend used when no remote sidecar is
//! configured, and as the deterministic recognizer in tests. DATE spans come
//! from fixed date-shape patterns (year ranges, month-name dates, bare
//! years); PERSON spans from a naive capitalized-name heuristic. Both
//! over-match on look-alike text; callers accept that as a precision
//! limitation.

use async_trait::async_trait;
use regex::Regex;

use super::{EntityLabel, EntityRecognizer, EntitySpan, RecognizerError};

// Ordered longest-shape-first so ranges win over their component years.
const DATE_PATTERN: &str = r"\b(?:19|20)\d{2}\s*[-–—]\s*(?:(?:19|20)\d{2}|(?i:present|current))\b|\b(?i:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(?:19|20)\d{2}\b|\b(?:19|20)\d{2}\b";

// Two or three capitalized words separated by single spaces.
const PERSON_PATTERN: &str = r"\b[A-Z][a-z]+(?: [A-Z][a-z]+){1,2}\b";

pub struct RuleRecognizer {
    date: Regex,
    person: Regex,
}

impl RuleRecognizer {
    pub fn new() -> Self {
        // Both patterns are fixed strings; compilation cannot fail.
        Self {
            date: Regex::new(DATE_PATTERN).expect("invalid date pattern"),
            person: Regex::new(PERSON_PATTERN).expect("invalid person pattern"),
        }
    }
}

impl Default for RuleRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityRecognizer for RuleRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        let mut found: Vec<(usize, EntitySpan)> = Vec::new();

        for m in self.date.find_iter(text) {
            found.push((m.start(), EntitySpan::new(m.as_str(), EntityLabel::Date)));
        }
        for m in self.person.find_iter(text) {
            found.push((m.start(), EntitySpan::new(m.as_str(), EntityLabel::Person)));
        }

        // Document order across both label kinds.
        found.sort_by_key(|(start, _)| *start);
        Ok(found.into_iter().map(|(_, span)| span).collect())
    }
}
