//! Response-facing structured records assembled by the extraction pipeline.
//!
//! Every field defaults to an empty or absent value; a missing section or
//! pattern never fails the parse, it just leaves its field empty.

use serde::{Deserialize, Serialize};

/// Emails and phone numbers pulled straight from the raw document.
///
/// Emails keep duplicates and match order. Phones are normalized to one
/// digit string per match (capture groups joined with no separator); no
/// validity check is performed, so digit runs shaped like phone numbers can
/// slip through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

/// One blank-line-delimited record from the experience section.
/// Positional convention: first non-empty line is the title, second the
/// company; everything after becomes the description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobHistoryEntry {
    pub job_title: String,
    pub company_name: String,
    pub dates: Vec<String>,
    pub description: String,
}

/// One blank-line-delimited record from the education section, with the
/// same positional convention (school, then degree).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school_name: String,
    pub degree: String,
    pub dates: Vec<String>,
    pub gpa: Option<String>,
}

/// The complete parse response. All fields are always present; `name` and
/// `career_objective` serialize as `null` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub name: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub career_objective: Option<String>,
    pub skills: Vec<String>,
    pub job_history: Vec<JobHistoryEntry>,
    pub education: Vec<EducationEntry>,
}
