//! The extraction pipeline.
//!
//! `parse` is a pure function of (text, pattern library, recognizer): the
//! recognizer runs once over the whole document (for the name) and once per
//! job/education entry (for dates); everything else is regex and token
//! matching. No cross-request state, no partial results: a recognizer
//! failure fails the whole parse.

pub mod contact;
pub mod handlers;
pub mod history;
pub mod patterns;
pub mod sections;
pub mod skills;

use crate::models::resume::ParseResult;
use crate::recognizer::{EntityLabel, EntityRecognizer, RecognizerError};
use patterns::PatternLibrary;

/// Runs the full pipeline and assembles one `ParseResult`. Absent sections
/// and unmatched patterns yield empty fields, never errors.
pub async fn parse(
    text: &str,
    patterns: &PatternLibrary,
    recognizer: &dyn EntityRecognizer,
) -> Result<ParseResult, RecognizerError> {
    let spans = recognizer.recognize(text).await?;
    let name = spans
        .iter()
        .find(|s| s.label == EntityLabel::Person)
        .map(|s| s.text.clone());

    let contact = contact::extract_contact(text, patterns);
    let career_objective = sections::extract_objective(text, patterns);
    let skills = skills::match_skills(text, patterns);
    let job_history = history::parse_job_history(text, patterns, recognizer).await?;
    let education = history::parse_education(text, patterns, recognizer).await?;

    Ok(ParseResult {
        name,
        emails: contact.emails,
        phones: contact.phones,
        career_objective,
        skills,
        job_history,
        education,
    })
}
