//! Section Classifier — maps a free-text heading to a `SectionKind`.
//!
//! Matching is case-insensitive substring containment against an ordered
//! rule list; the first rule with a matching keyword wins. The order is data,
//! not control flow, so it can be inspected, tested and overridden at start-up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic kind of a resume section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Qualifications,
    Education,
    Coursework,
    TechnicalSkills,
    Experience,
    Project,
    Additional,
    Generic,
}

impl SectionKind {
    /// Canonical heading rendered for this kind. `None` for Generic, which
    /// keeps the heading it was written with.
    pub fn canonical_label(self) -> Option<&'static str> {
        match self {
            SectionKind::Qualifications => Some("SUMMARY OF QUALIFICATIONS"),
            SectionKind::Education => Some("EDUCATION"),
            SectionKind::Coursework => Some("RELEVANT COURSEWORK"),
            SectionKind::TechnicalSkills => Some("TECHNICAL SKILLS"),
            SectionKind::Experience => Some("RELEVANT EXPERIENCE"),
            SectionKind::Project => Some("PROJECT EXPERIENCE"),
            SectionKind::Additional => Some("ADDITIONAL EXPERIENCE"),
            SectionKind::Generic => None,
        }
    }

    /// Kinds whose body is a sequence of experience-shaped entries.
    pub fn has_experience_entries(self) -> bool {
        matches!(
            self,
            SectionKind::Experience | SectionKind::Project | SectionKind::Additional
        )
    }

    fn as_str(self) -> &'static str {
        match self {
            SectionKind::Qualifications => "qualifications",
            SectionKind::Education => "education",
            SectionKind::Coursework => "coursework",
            SectionKind::TechnicalSkills => "technical_skills",
            SectionKind::Experience => "experience",
            SectionKind::Project => "project",
            SectionKind::Additional => "additional",
            SectionKind::Generic => "generic",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown section kind '{0}'")]
pub struct UnknownSectionKind(String);

impl FromStr for SectionKind {
    type Err = UnknownSectionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(|c: char| c == '-' || c == ' ', "_").as_str() {
            "qualifications" | "summary" => Ok(SectionKind::Qualifications),
            "education" => Ok(SectionKind::Education),
            "coursework" => Ok(SectionKind::Coursework),
            "technical_skills" | "skills" => Ok(SectionKind::TechnicalSkills),
            "experience" => Ok(SectionKind::Experience),
            "project" | "projects" => Ok(SectionKind::Project),
            "additional" => Ok(SectionKind::Additional),
            _ => Err(UnknownSectionKind(s.to_string())),
        }
    }
}

/// One precedence entry: the kind assigned when any keyword is contained in
/// the upper-cased heading.
#[derive(Debug, Clone)]
pub struct ClassifierRule {
    pub kind: SectionKind,
    pub keywords: &'static [&'static str],
}

/// Keyword sets per kind. Keywords are upper-case; headings are upper-cased
/// before matching.
fn keywords_for(kind: SectionKind) -> &'static [&'static str] {
    match kind {
        SectionKind::Qualifications => &["SUMMARY", "QUALIFICATIONS"],
        SectionKind::Education => &["EDUCATION"],
        SectionKind::Coursework => &["COURSEWORK"],
        SectionKind::TechnicalSkills => &["TECHNICAL", "SKILLS"],
        SectionKind::Experience => &["RELEVANT EXPERIENCE", "EXPERIENCE"],
        SectionKind::Project => &["PROJECT"],
        SectionKind::Additional => &["ADDITIONAL"],
        SectionKind::Generic => &[],
    }
}

/// Default precedence. Project and Additional are tested before Experience so
/// `PROJECT EXPERIENCE` and `ADDITIONAL EXPERIENCE` keep their own kinds.
pub const DEFAULT_PRECEDENCE: &[SectionKind] = &[
    SectionKind::Qualifications,
    SectionKind::Education,
    SectionKind::Coursework,
    SectionKind::TechnicalSkills,
    SectionKind::Project,
    SectionKind::Additional,
    SectionKind::Experience,
];

/// Ordered keyword classifier for section headings.
#[derive(Debug, Clone)]
pub struct SectionClassifier {
    rules: Vec<ClassifierRule>,
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::with_precedence(DEFAULT_PRECEDENCE)
    }
}

impl SectionClassifier {
    /// Builds a classifier that tests kinds in the given order. Duplicates and
    /// `Generic` are ignored; kinds left out are never assigned.
    pub fn with_precedence(order: &[SectionKind]) -> Self {
        let mut rules: Vec<ClassifierRule> = Vec::with_capacity(order.len());
        for &kind in order {
            if kind == SectionKind::Generic || rules.iter().any(|r| r.kind == kind) {
                continue;
            }
            rules.push(ClassifierRule {
                kind,
                keywords: keywords_for(kind),
            });
        }
        Self { rules }
    }

    /// Parses a comma-separated precedence list such as
    /// `"qualifications,education,experience"`.
    pub fn from_precedence_list(list: &str) -> Result<Self, UnknownSectionKind> {
        let order = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(SectionKind::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_precedence(&order))
    }

    pub fn rules(&self) -> &[ClassifierRule] {
        &self.rules
    }

    /// Classifies a heading. Pure: the same heading always yields the same kind.
    pub fn classify(&self, heading: &str) -> SectionKind {
        let key = heading.trim().to_uppercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| key.contains(kw)))
            .map(|rule| rule.kind)
            .unwrap_or(SectionKind::Generic)
    }
}
