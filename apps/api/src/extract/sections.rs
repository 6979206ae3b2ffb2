//! Section segmentation.
//!
//! A section is anchored by the first case-insensitive occurrence of any
//! header term and runs to the first occurrence of any stop term, or to the
//! end of the text when no stop term follows. First occurrence always wins;
//! a repeated or nested header never re-anchors a section.

use regex::Regex;

use crate::extract::patterns::PatternLibrary;

/// A segmented region of the input: the header text as matched, and the
/// body between the header and the stop.
#[derive(Debug, PartialEq)]
pub struct Section<'a> {
    pub header: &'a str,
    pub body: &'a str,
}

/// Header/stop pair for one named section.
pub struct SectionRule {
    header: Regex,
    stop: Regex,
}

impl SectionRule {
    /// Rule whose body ends at the first occurrence of any stop term.
    pub fn new(headers: &[&str], stops: &[&str]) -> Result<Self, regex::Error> {
        Ok(Self {
            header: term_alternation(headers)?,
            stop: term_alternation(stops)?,
        })
    }

    /// Rule with an explicit stop regex (e.g. a blank line).
    pub fn with_stop(headers: &[&str], stop: Regex) -> Result<Self, regex::Error> {
        Ok(Self {
            header: term_alternation(headers)?,
            stop,
        })
    }

    /// Locates the section in `text`. Returns `None` when no header term
    /// occurs anywhere; end of text is an implicit stop.
    pub fn segment<'a>(&self, text: &'a str) -> Option<Section<'a>> {
        let header = self.header.find(text)?;
        let rest = &text[header.end()..];
        let body = match self.stop.find(rest) {
            Some(stop) => &rest[..stop.start()],
            None => rest,
        };
        Some(Section {
            header: header.as_str(),
            body,
        })
    }
}

/// Case-insensitive alternation of literal terms. Alternation order follows
/// the input, so longer terms must be listed before their prefixes
/// ("career objective" before "objective").
fn term_alternation(terms: &[&str]) -> Result<Regex, regex::Error> {
    let joined = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){joined}"))
}

/// Pulls the career objective: body of the objective section up to the
/// first double newline, trimmed. Absent when no objective header exists.
pub fn extract_objective(text: &str, patterns: &PatternLibrary) -> Option<String> {
    patterns
        .objective
        .segment(text)
        .map(|section| section.body.trim().to_string())
}
