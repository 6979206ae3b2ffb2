//! Pattern library: every fixed regex and the skill vocabulary, compiled
//! once at startup and shared read-only across requests.

use anyhow::{Context, Result};
use regex::Regex;

use crate::extract::sections::SectionRule;
use crate::extract::skills::tokenize;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

// Optional 1-3 digit country code, then area/exchange/line with optional
// separators. Parens around the area code stay outside the capture groups so
// joining the groups yields a pure digit string.
const PHONE_PATTERN: &str = r"\b(?:\+?(\d{1,3}))?[-.\s]?\(?(\d{3})\)?[-.\s]?(\d{3})[-.\s]?(\d{4})\b";

// Any run of separators after the keyword, so "GPA: 3.85" and "GPA 3.9"
// both match. Requires a decimal point: "GPA 4" is deliberately not a match.
const GPA_PATTERN: &str = r"(?i)GPA[:\s]*(\d\.\d{1,2})";

// One or more fully-blank lines; the entry separator.
const BLANK_LINE_PATTERN: &str = r"\n\s*\n";

// Two consecutive newline boundaries; the career-objective stop. Stricter
// than the entry separator: a whitespace-only line does not end the
// objective.
const DOUBLE_NEWLINE_PATTERN: &str = r"\n\n|\r\n\r\n";

/// One vocabulary phrase with its precomputed lowercase token sequence.
#[derive(Debug, Clone)]
pub struct SkillPattern {
    /// Surface form as given in the vocabulary; this exact casing is what
    /// ends up in the response.
    pub surface: String,
    pub tokens: Vec<String>,
}

/// All fixed pattern definitions plus the skill vocabulary. Immutable after
/// startup; shared across requests behind an `Arc`.
pub struct PatternLibrary {
    pub email: Regex,
    pub phone: Regex,
    pub gpa: Regex,
    pub blank_line: Regex,
    pub experience: SectionRule,
    pub education: SectionRule,
    pub objective: SectionRule,
    pub vocabulary: Vec<SkillPattern>,
}

impl PatternLibrary {
    pub fn new(vocabulary: Vec<String>) -> Result<Self> {
        let blank_line = Regex::new(BLANK_LINE_PATTERN).context("blank-line pattern")?;

        Ok(Self {
            email: Regex::new(EMAIL_PATTERN).context("email pattern")?,
            phone: Regex::new(PHONE_PATTERN).context("phone pattern")?,
            gpa: Regex::new(GPA_PATTERN).context("GPA pattern")?,
            experience: SectionRule::new(
                &["experience", "work history"],
                &["education", "skills"],
            )?,
            education: SectionRule::new(&["education"], &["experience", "skills"])?,
            // The objective section ends at the first double newline rather
            // than at another section header.
            objective: SectionRule::with_stop(
                &["career objective", "objective", "goal", "summary"],
                Regex::new(DOUBLE_NEWLINE_PATTERN).context("double-newline pattern")?,
            )?,
            blank_line,
            vocabulary: build_vocabulary(vocabulary),
        })
    }

    /// Library with the built-in default vocabulary.
    pub fn with_default_vocabulary() -> Result<Self> {
        Self::new(crate::config::default_vocabulary())
    }
}

/// Tokenizes each phrase and drops duplicates (first occurrence wins) and
/// phrases that tokenize to nothing.
fn build_vocabulary(vocabulary: Vec<String>) -> Vec<SkillPattern> {
    let mut seen: Vec<Vec<String>> = Vec::new();
    let mut patterns = Vec::new();
    for surface in vocabulary {
        let tokens = tokenize(&surface);
        if tokens.is_empty() || seen.contains(&tokens) {
            continue;
        }
        seen.push(tokens.clone());
        patterns.push(SkillPattern { surface, tokens });
    }
    patterns
}
