//! Entry Parser — Education.
//!
//! Same close-on-next-anchor discipline as the experience parser, keyed on
//! institution/degree keywords and year patterns instead of separators.
//!
//! Bulleted lines inside an entry are always details. A school whose name
//! carries no institution keyword is still recognized when a degree line
//! follows it and the open entry already has its degree:
//!
//! ```text
//! State University, Austin
//! Bachelor of Science in Biology
//! Stanford, Palo Alto          <- opens the second entry
//! Master of Science in AI
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::lines::is_bullet;
use crate::document::rules::{apply_first, non_empty, split_anchor, LineRule};

const INSTITUTION_KEYWORDS: &[&str] = &["University", "College", "School", "Institute"];
const DEGREE_KEYWORDS: &[&str] = &["Bachelor", "Master", "Associate", "Degree", "Certificate"];
const DETAIL_KEYWORDS: &[&str] = &["GPA", "Graduated", "Expected"];

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

/// One school record reconstructed from consecutive lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub location: Option<String>,
    pub degree: Option<String>,
    pub graduation_info: Option<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Default)]
struct Draft {
    institution: Option<String>,
    location: Option<String>,
    degree: Option<String>,
    graduation_info: Option<String>,
    details: Vec<String>,
}

impl Draft {
    fn into_entry(self) -> Option<EducationEntry> {
        let institution = self.institution.and_then(|i| non_empty(&i))?;
        Some(EducationEntry {
            institution,
            location: self.location,
            degree: self.degree,
            graduation_info: self.graduation_info,
            details: self.details,
        })
    }
}

/// Parser state carried between lines.
#[derive(Debug, Default)]
pub struct EducationState {
    draft: Draft,
    /// The last line was a plain detail that could be the next school.
    school_candidate: bool,
    entries: Vec<EducationEntry>,
}

impl EducationState {
    fn close_draft(&mut self) {
        if let Some(entry) = std::mem::take(&mut self.draft).into_entry() {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<EducationEntry> {
        self.close_draft();
        self.entries
    }
}

fn contains_any(line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| line.contains(kw))
}

/// Non-bulleted line naming a University, College, School or Institute.
pub fn is_institution_line(line: &str) -> bool {
    contains_any(line, INSTITUTION_KEYWORDS) && !is_bullet(line)
}

/// Line naming a degree (`Bachelor`, `Master`, ...).
pub fn names_degree(line: &str) -> bool {
    contains_any(line, DEGREE_KEYWORDS)
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

fn is_blank(line: &str, _: &EducationState) -> bool {
    line.is_empty()
}

fn skip(_: &str, _: &mut EducationState) {}

fn is_bulleted_detail(line: &str, state: &EducationState) -> bool {
    is_bullet(line) && state.draft.institution.is_some()
}

fn is_next_school_degree(line: &str, state: &EducationState) -> bool {
    state.school_candidate
        && state.draft.degree.is_some()
        && names_degree(line)
        && !is_bullet(line)
}

fn promote_school(line: &str, state: &mut EducationState) {
    if let Some(school) = state.draft.details.pop() {
        start_entry(&school, state);
    }
    set_degree(line, state);
}

fn is_open_degree(line: &str, state: &EducationState) -> bool {
    state.draft.institution.is_some()
        && state.draft.degree.is_none()
        && names_degree(line)
        && !is_bullet(line)
}

fn is_institution(line: &str, _: &EducationState) -> bool {
    is_institution_line(line)
}

fn start_entry(line: &str, state: &mut EducationState) {
    state.close_draft();
    let (institution, location) = split_anchor(line);
    state.draft = Draft {
        institution: Some(institution),
        location,
        ..Draft::default()
    };
    state.school_candidate = false;
}

fn is_degree(line: &str, _: &EducationState) -> bool {
    names_degree(line)
}

fn set_degree(line: &str, state: &mut EducationState) {
    state.draft.degree = Some(line.to_string());
    state.school_candidate = false;
}

fn is_detail(line: &str, _: &EducationState) -> bool {
    contains_any(line, DETAIL_KEYWORDS)
}

fn push_detail(line: &str, state: &mut EducationState) {
    state.draft.details.push(line.to_string());
    state.school_candidate = false;
}

fn push_other(line: &str, state: &mut EducationState) {
    state.draft.details.push(line.to_string());
    state.school_candidate = true;
}

fn is_graduation_year(line: &str, _: &EducationState) -> bool {
    YEAR.is_match(line)
}

fn set_graduation_info(line: &str, state: &mut EducationState) {
    state.draft.graduation_info = Some(line.to_string());
    state.school_candidate = false;
}

fn lacks_institution(_: &str, state: &EducationState) -> bool {
    state.draft.institution.is_none()
}

fn set_institution(line: &str, state: &mut EducationState) {
    state.draft.institution = Some(line.to_string());
    state.draft.details.clear();
    state.school_candidate = false;
}

fn any_line(_: &str, _: &EducationState) -> bool {
    true
}

/// Education rules in precedence order.
pub const EDUCATION_RULES: &[LineRule<EducationState>] = &[
    LineRule {
        name: "blank",
        matches: is_blank,
        apply: skip,
    },
    LineRule {
        name: "bulleted_detail",
        matches: is_bulleted_detail,
        apply: push_detail,
    },
    LineRule {
        name: "next_school_degree",
        matches: is_next_school_degree,
        apply: promote_school,
    },
    LineRule {
        name: "open_degree",
        matches: is_open_degree,
        apply: set_degree,
    },
    LineRule {
        name: "institution",
        matches: is_institution,
        apply: start_entry,
    },
    LineRule {
        name: "degree",
        matches: is_degree,
        apply: set_degree,
    },
    LineRule {
        name: "detail",
        matches: is_detail,
        apply: push_detail,
    },
    LineRule {
        name: "graduation_year",
        matches: is_graduation_year,
        apply: set_graduation_info,
    },
    LineRule {
        name: "fallback_institution",
        matches: lacks_institution,
        apply: set_institution,
    },
    LineRule {
        name: "other",
        matches: any_line,
        apply: push_other,
    },
];

/// Parses a section body into education entries, in order.
pub fn parse_education<S: AsRef<str>>(lines: &[S]) -> Vec<EducationEntry> {
    let mut state = EducationState::default();
    for line in lines {
        let line = line.as_ref().trim();
        if let Some(rule) = apply_first(EDUCATION_RULES, line, &mut state) {
            debug!("education line {line:?} -> {rule}");
        }
    }
    state.finish()
}
