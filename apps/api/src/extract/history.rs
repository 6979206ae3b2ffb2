//! Job-history and education parsing.
//!
//! Both sections share one algorithm: segment the section, split its body
//! into blank-line-delimited entries, then map each entry's lines to fields
//! by position. The positional convention (first line = title/school,
//! second = company/degree) is a deliberate heuristic with no delimiter
//! fallback; entries that cannot fill both fields are silently skipped.

use crate::extract::patterns::PatternLibrary;
use crate::models::resume::{EducationEntry, JobHistoryEntry};
use crate::recognizer::{spans_with_label, EntityLabel, EntityRecognizer, RecognizerError};

/// Trimmed, non-empty lines of one entry block.
fn entry_lines(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Runs the recognizer over one entry and collects DATE spans in the order
/// the recognizer returned them.
async fn entry_dates(
    recognizer: &dyn EntityRecognizer,
    block: &str,
) -> Result<Vec<String>, RecognizerError> {
    let spans = recognizer.recognize(block).await?;
    Ok(spans_with_label(&spans, EntityLabel::Date))
}

/// Parses the experience section into job entries, in document order.
/// An absent section yields an empty vec, never an error.
pub async fn parse_job_history(
    text: &str,
    patterns: &PatternLibrary,
    recognizer: &dyn EntityRecognizer,
) -> Result<Vec<JobHistoryEntry>, RecognizerError> {
    let Some(section) = patterns.experience.segment(text) else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for block in patterns.blank_line.split(section.body) {
        let lines = entry_lines(block);
        if lines.len() < 2 {
            continue; // silent skip: not enough lines for title and company
        }
        let dates = entry_dates(recognizer, block).await?;
        // Lines that were recognized as dates belong to `dates`, not the
        // description.
        let description = lines[2..]
            .iter()
            .filter(|line| !dates.iter().any(|d| d == *line))
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
        entries.push(JobHistoryEntry {
            job_title: lines[0].to_string(),
            company_name: lines[1].to_string(),
            dates,
            description,
        });
    }
    Ok(entries)
}

/// Parses the education section into education entries, in document order.
/// Same split and positional convention as job history, plus the GPA
/// capture (absent unless the decimal pattern matches).
pub async fn parse_education(
    text: &str,
    patterns: &PatternLibrary,
    recognizer: &dyn EntityRecognizer,
) -> Result<Vec<EducationEntry>, RecognizerError> {
    let Some(section) = patterns.education.segment(text) else {
        return Ok(Vec::new());
    };

    let mut entries = Vec::new();
    for block in patterns.blank_line.split(section.body) {
        let lines = entry_lines(block);
        if lines.len() < 2 {
            continue;
        }
        let dates = entry_dates(recognizer, block).await?;
        let gpa = patterns.gpa.captures(block).map(|caps| caps[1].to_string());
        entries.push(EducationEntry {
            school_name: lines[0].to_string(),
            degree: lines[1].to_string(),
            dates,
            gpa,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::stub::StaticRecognizer;
    use crate::recognizer::{EntitySpan, RuleRecognizer};

    fn library() -> PatternLibrary {
        PatternLibrary::with_default_vocabulary().unwrap()
    }

    #[tokio::test]
    async fn test_absent_section_yields_empty_vec() {
        let lib = library();
        let recognizer = RuleRecognizer::new();
        let jobs = parse_job_history("no headers at all", &lib, &recognizer)
            .await
            .unwrap();
        assert!(jobs.is_empty());
        let education = parse_education("no headers at all", &lib, &recognizer)
            .await
            .unwrap();
        assert!(education.is_empty());
    }

    #[tokio::test]
    async fn test_single_line_entry_is_dropped() {
        let lib = library();
        let recognizer = RuleRecognizer::new();
        let text = "Experience\nJust one line\n\nEngineer\nAcme Corp";
        let jobs = parse_job_history(text, &lib, &recognizer).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_title, "Engineer");
        assert_eq!(jobs[0].company_name, "Acme Corp");
    }

    #[tokio::test]
    async fn test_job_entry_positional_fields_and_description() {
        let lib = library();
        let recognizer = RuleRecognizer::new();
        let text = "Experience\nBackend Engineer\nAcme Corp\n2020-2023\nBuilt internal tooling.";
        let jobs = parse_job_history(text, &lib, &recognizer).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_title, "Backend Engineer");
        assert_eq!(jobs[0].company_name, "Acme Corp");
        assert_eq!(jobs[0].dates, vec!["2020-2023"]);
        assert_eq!(jobs[0].description, "Built internal tooling.");
    }

    #[tokio::test]
    async fn test_description_empty_for_two_line_entry() {
        let lib = library();
        let recognizer = RuleRecognizer::new();
        let text = "Experience\nEngineer\nAcme Corp";
        let jobs = parse_job_history(text, &lib, &recognizer).await.unwrap();
        assert_eq!(jobs[0].description, "");
        assert!(jobs[0].dates.is_empty());
    }

    #[tokio::test]
    async fn test_entries_preserve_document_order() {
        let lib = library();
        let recognizer = RuleRecognizer::new();
        let text = "Work History\nSecond Engineer\nZebra Inc\n\nFirst Engineer\nAardvark Ltd";
        let jobs = parse_job_history(text, &lib, &recognizer).await.unwrap();
        let titles: Vec<&str> = jobs.iter().map(|j| j.job_title.as_str()).collect();
        assert_eq!(titles, vec!["Second Engineer", "First Engineer"]);
    }

    #[tokio::test]
    async fn test_dates_come_from_recognizer_in_returned_order() {
        let lib = library();
        let recognizer = StaticRecognizer(vec![
            EntitySpan::new("June 2019", EntityLabel::Date),
            EntitySpan::new("March 2021", EntityLabel::Date),
            EntitySpan::new("Acme", EntityLabel::Other),
        ]);
        let text = "Experience\nEngineer\nAcme Corp\nShipped things";
        let jobs = parse_job_history(text, &lib, &recognizer).await.unwrap();
        assert_eq!(jobs[0].dates, vec!["June 2019", "March 2021"]);
    }

    #[tokio::test]
    async fn test_recognizer_failure_fails_the_whole_parse() {
        let lib = library();
        let recognizer = crate::recognizer::stub::FailingRecognizer;
        let text = "Experience\nEngineer\nAcme Corp";
        assert!(parse_job_history(text, &lib, &recognizer).await.is_err());
    }

    #[tokio::test]
    async fn test_education_entry_with_gpa() {
        let lib = library();
        let recognizer = RuleRecognizer::new();
        let text = "Education\nState University\nB.S. Computer Science\n2016-2020\nGPA: 3.8";
        let education = parse_education(text, &lib, &recognizer).await.unwrap();
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].school_name, "State University");
        assert_eq!(education[0].degree, "B.S. Computer Science");
        assert_eq!(education[0].dates, vec!["2016-2020"]);
        assert_eq!(education[0].gpa.as_deref(), Some("3.8"));
    }

    #[tokio::test]
    async fn test_education_gpa_without_decimal_is_absent() {
        let lib = library();
        let recognizer = RuleRecognizer::new();
        let text = "Education\nState University\nB.S. Mathematics\nGPA 4";
        let education = parse_education(text, &lib, &recognizer).await.unwrap();
        assert_eq!(education[0].gpa, None);
    }
}
