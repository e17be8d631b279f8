//! Entry Parser — Experience.
//!
//! Reconstructs job/project entries from a section body, one line at a time.
//! Shape the parser expects (the template generator emits exactly this):
//!
//! ```text
//! Company, Location
//! Title - Start - End
//! • detail
//! ```
//!
//! An entry is closed when the next header line arrives or input ends, and is
//! emitted only if it has a company.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::lines::{is_bullet, strip_bullet};
use crate::document::rules::{apply_first, non_empty, split_anchor, LineRule};

/// One job, project or activity reconstructed from consecutive lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub location: Option<String>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub details: Vec<String>,
}

#[derive(Debug, Default)]
struct Draft {
    company: Option<String>,
    location: Option<String>,
    title: Option<String>,
    date: Option<String>,
    details: Vec<String>,
}

impl Draft {
    fn has_company(&self) -> bool {
        self.company.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    fn into_entry(self) -> Option<ExperienceEntry> {
        let company = self.company.and_then(|c| non_empty(&c))?;
        Some(ExperienceEntry {
            company,
            location: self.location,
            title: self.title,
            date: self.date,
            details: self.details,
        })
    }
}

/// Parser state carried between lines.
#[derive(Debug, Default)]
pub struct ExperienceState {
    draft: Draft,
    collecting_details: bool,
    entries: Vec<ExperienceEntry>,
}

impl ExperienceState {
    fn close_draft(&mut self) {
        if let Some(entry) = std::mem::take(&mut self.draft).into_entry() {
            self.entries.push(entry);
        }
    }

    fn finish(mut self) -> Vec<ExperienceEntry> {
        self.close_draft();
        self.entries
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rule table
// ────────────────────────────────────────────────────────────────────────────

fn is_blank(line: &str, _: &ExperienceState) -> bool {
    line.is_empty()
}

fn skip(_: &str, _: &mut ExperienceState) {}

/// `Company, Location` or `Title at Company`, not bulleted.
pub fn is_entry_header(line: &str) -> bool {
    (line.contains(" at ") || line.contains(", ")) && !is_bullet(line)
}

fn is_header(line: &str, _: &ExperienceState) -> bool {
    is_entry_header(line)
}

fn start_entry(line: &str, state: &mut ExperienceState) {
    state.close_draft();
    let (company, location) = split_anchor(line);
    state.draft = Draft {
        company: Some(company),
        location,
        ..Draft::default()
    };
    state.collecting_details = false;
}

fn is_title_date(line: &str, state: &ExperienceState) -> bool {
    line.contains(" - ") && !state.collecting_details
}

fn set_title_date(line: &str, state: &mut ExperienceState) {
    if let Some((title, date)) = line.split_once(" - ") {
        state.draft.title = non_empty(title);
        state.draft.date = non_empty(date);
    }
    state.collecting_details = true;
}

fn is_detail(line: &str, state: &ExperienceState) -> bool {
    is_bullet(line) || state.collecting_details
}

fn push_detail(line: &str, state: &mut ExperienceState) {
    if state.draft.has_company() {
        if let Some(detail) = non_empty(strip_bullet(line)) {
            state.draft.details.push(detail);
        }
    }
    state.collecting_details = true;
}

fn lacks_company(_: &str, state: &ExperienceState) -> bool {
    !state.draft.has_company()
}

fn set_company(line: &str, state: &mut ExperienceState) {
    state.draft.company = Some(line.to_string());
}

fn lacks_title(_: &str, state: &ExperienceState) -> bool {
    state.draft.title.is_none()
}

fn set_title(line: &str, state: &mut ExperienceState) {
    state.draft.title = Some(line.to_string());
    state.collecting_details = true;
}

/// Experience rules in precedence order.
pub const EXPERIENCE_RULES: &[LineRule<ExperienceState>] = &[
    LineRule {
        name: "blank",
        matches: is_blank,
        apply: skip,
    },
    LineRule {
        name: "header",
        matches: is_header,
        apply: start_entry,
    },
    LineRule {
        name: "title_date",
        matches: is_title_date,
        apply: set_title_date,
    },
    LineRule {
        name: "detail",
        matches: is_detail,
        apply: push_detail,
    },
    LineRule {
        name: "company",
        matches: lacks_company,
        apply: set_company,
    },
    LineRule {
        name: "title",
        matches: lacks_title,
        apply: set_title,
    },
];

/// Parses a section body into experience entries, in order.
pub fn parse_experience<S: AsRef<str>>(lines: &[S]) -> Vec<ExperienceEntry> {
    let mut state = ExperienceState::default();
    for line in lines {
        let line = line.as_ref().trim();
        if apply_first(EXPERIENCE_RULES, line, &mut state).is_none() {
            debug!("experience line matched no rule: {line:?}");
        }
    }
    state.finish()
}
