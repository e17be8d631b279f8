//! Section Splitter — divides raw document text into heading + body sections.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::classifier::{SectionClassifier, SectionKind};
use crate::document::education::is_institution_line;
use crate::document::experience::is_entry_header;
use crate::document::lines::{clean_line, is_bullet};

/// Two or more newlines, where lines holding only spaces/tabs count as blank.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("valid paragraph regex"));

/// A heading-delimited chunk of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: Vec<String>,
}

impl Section {
    /// Trimmed, upper-cased heading used for matching.
    pub fn heading_key(&self) -> String {
        self.heading.trim().to_uppercase()
    }
}

/// Blank-line-separated chunks of `raw`, trimmed, blank chunks dropped.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\r\n", "\n");
    PARAGRAPH_BREAK
        .split(&normalized)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits raw text into sections in order of appearance.
///
/// Each paragraph's first non-blank line becomes the heading, the rest the
/// body. Lines are trimmed and cleaned of markdown artifacts; blank lines and
/// empty paragraphs are dropped. Empty input yields no sections.
pub fn split_sections(raw: &str) -> Vec<Section> {
    split_paragraphs(raw)
        .iter()
        .filter_map(|paragraph| {
            let mut lines = paragraph
                .lines()
                .map(clean_line)
                .filter(|line| !line.is_empty());
            let heading = lines.next()?;
            Some(Section {
                heading,
                body: lines.collect(),
            })
        })
        .collect()
}

/// Reattaches continuation paragraphs to the section before them.
///
/// Generative output often leaves a blank line between a heading and its
/// content, or between two entries of one section. A paragraph is a
/// continuation when its first line is not heading-shaped and either the
/// previous section has no body yet, the line is bulleted, or the line is an
/// entry anchor for the previous section's kind. Anything else, such as a
/// title-case `Certifications` paragraph, stays its own section.
pub fn merge_continuations(
    sections: Vec<Section>,
    classifier: &SectionClassifier,
) -> Vec<Section> {
    let mut merged: Vec<Section> = Vec::with_capacity(sections.len());

    for section in sections {
        match merged.last_mut() {
            Some(previous) if continues(previous, &section.heading, classifier) => {
                previous.body.push(section.heading);
                previous.body.extend(section.body);
            }
            _ => merged.push(section),
        }
    }

    merged
}

fn continues(previous: &Section, line: &str, classifier: &SectionClassifier) -> bool {
    if is_heading_shaped(line, classifier) {
        return false;
    }
    if previous.body.is_empty() || is_bullet(line) {
        return true;
    }
    match classifier.classify(&previous.heading_key()) {
        SectionKind::Education => is_institution_line(line),
        kind if kind.has_experience_entries() => is_entry_header(line),
        _ => false,
    }
}

/// A heading either classifies to a known kind, or is a non-bullet line
/// without lower-case letters (`REFERENCES`, `VOLUNTEER WORK`).
fn is_heading_shaped(line: &str, classifier: &SectionClassifier) -> bool {
    if is_bullet(line) {
        return false;
    }
    classifier.classify(line) != SectionKind::Generic || !line.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_no_sections() {
        assert!(split_sections("").is_empty());
        assert!(split_sections("\n\n   \n\n").is_empty());
    }

    #[test]
    fn test_splits_on_blank_lines_and_keeps_order() {
        let raw = "SUMMARY\n• One\n• Two\n\nEDUCATION\nState University\n\n\nSKILLS\nRust";
        let sections = split_sections(raw);
        let headings: Vec<&str> = sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["SUMMARY", "EDUCATION", "SKILLS"]);
        assert_eq!(sections[0].body, vec!["• One", "• Two"]);
        assert_eq!(sections[2].body, vec!["Rust"]);
    }

    #[test]
    fn test_whitespace_only_lines_separate_paragraphs() {
        let raw = "SUMMARY\n• One\n   \t\nEDUCATION\nState University";
        assert_eq!(split_sections(raw).len(), 2);
    }

    #[test]
    fn test_crlf_input_is_normalized() {
        let raw = "SUMMARY\r\n• One\r\n\r\nSKILLS\r\nRust";
        let sections = split_sections(raw);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].body, vec!["• One"]);
    }

    #[test]
    fn test_split_paragraphs_keeps_inner_lines() {
        let chunks = split_paragraphs("Dear Hiring Manager,\r\n\r\nFirst line\nsecond line\n \n\n  Sincerely,\nJane  ");
        assert_eq!(
            chunks,
            vec!["Dear Hiring Manager,", "First line\nsecond line", "Sincerely,\nJane"]
        );
    }

    #[test]
    fn test_lines_are_trimmed() {
        let sections = split_sections("  Summary  \n   • One   ");
        assert_eq!(sections[0].heading, "Summary");
        assert_eq!(sections[0].heading_key(), "SUMMARY");
        assert_eq!(sections[0].body, vec!["• One"]);
    }

    #[test]
    fn test_markdown_headings_are_cleaned() {
        let sections = split_sections("## **EDUCATION**\n**State University**, Austin");
        assert_eq!(sections[0].heading, "EDUCATION");
        assert_eq!(sections[0].body, vec!["State University, Austin"]);
    }

    #[test]
    fn test_merge_reattaches_body_after_heading_gap() {
        let raw = "SUMMARY OF QUALIFICATIONS\n\n• Strong leader\n• Fast learner\n\nEDUCATION\nState University";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].body, vec!["• Strong leader", "• Fast learner"]);
    }

    #[test]
    fn test_merge_joins_entries_split_by_blank_lines() {
        let raw = "RELEVANT EXPERIENCE\nAcme Corp, Springfield\n• Built X\n\nBeta LLC, Austin\n• Led Y";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].body,
            vec!["Acme Corp, Springfield", "• Built X", "Beta LLC, Austin", "• Led Y"]
        );
    }

    #[test]
    fn test_merge_keeps_uppercase_generic_headings() {
        let raw = "RELEVANT EXPERIENCE\nAcme Corp, Springfield\n\nREFERENCES\nAvailable on request";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].heading, "REFERENCES");
    }

    #[test]
    fn test_merge_never_touches_first_section() {
        let merged = merge_continuations(
            split_sections("Dear reader,\nhello"),
            &SectionClassifier::default(),
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].heading, "Dear reader,");
    }

    #[test]
    fn test_title_case_generic_section_after_body_stays_separate() {
        let raw = "RELEVANT EXPERIENCE\nAcme Corp, Austin\nEngineer - 2020 - 2021\n• Built X\n\nCertifications\n• AWS Solutions Architect";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].body.last().map(String::as_str), Some("• Built X"));
        assert_eq!(merged[1].heading, "Certifications");
        assert_eq!(merged[1].body, vec!["• AWS Solutions Architect"]);
    }

    #[test]
    fn test_bulleted_paragraph_continues_previous_section() {
        let raw = "SUMMARY\n• One\n\n• Two\n• Three";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].body, vec!["• One", "• Two", "• Three"]);
    }

    #[test]
    fn test_plain_paragraph_fills_empty_heading() {
        let raw = "REFERENCES\n\nAvailable on request";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].body, vec!["Available on request"]);
    }

    #[test]
    fn test_next_school_joins_education_section() {
        let raw = "EDUCATION\nState University\nBachelor of Arts\n\nRiverside College, Riverside\nMaster of Arts";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].body.len(), 4);
    }

    #[test]
    fn test_title_case_known_heading_is_not_merged() {
        let raw = "SUMMARY\n• One\n\nWork Experience\nAcme Corp, Springfield";
        let merged = merge_continuations(split_sections(raw), &SectionClassifier::default());
        assert_eq!(merged.len(), 2);
    }
}
