//! Contact extraction: emails and phone numbers pulled from the raw
//! document, independent of any section.

use crate::extract::patterns::PatternLibrary;
use crate::models::resume::ContactInfo;

/// Emails keep match order and duplicates. Each phone match is normalized
/// by concatenating its capture groups (country code, area, exchange, line)
/// with no separator; a missing country code contributes nothing.
pub fn extract_contact(text: &str, patterns: &PatternLibrary) -> ContactInfo {
    let emails = patterns
        .email
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let phones = patterns
        .phone
        .captures_iter(text)
        .map(|caps| {
            (1..caps.len())
                .filter_map(|i| caps.get(i))
                .map(|g| g.as_str())
                .collect::<String>()
        })
        .collect();

    ContactInfo { emails, phones }
}
