//! Skill matching: case-insensitive phrase matching of the vocabulary
//! against the tokenized document.

use crate::extract::patterns::PatternLibrary;

/// Shared tokenizer: whitespace split, then leading/trailing
/// non-alphanumeric characters trimmed, lowercased. Interior punctuation
/// survives, so "Node.js" stays one token.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Matches the vocabulary against `text`. A phrase matches only as a
/// contiguous token sequence ("python" never matches inside "mypython").
/// Returns vocabulary surface forms, deduplicated by construction; order
/// follows the vocabulary and carries no meaning.
pub fn match_skills(text: &str, patterns: &PatternLibrary) -> Vec<String> {
    let tokens = tokenize(text);
    patterns
        .vocabulary
        .iter()
        .filter(|skill| contains_phrase(&tokens, &skill.tokens))
        .map(|skill| skill.surface.clone())
        .collect()
}

fn contains_phrase(tokens: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && tokens.windows(phrase.len()).any(|window| window == phrase)
}
