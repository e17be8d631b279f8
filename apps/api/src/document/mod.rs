//! Text → structured document pipeline.
//!
//! `parse_resume` runs the whole chain: split into paragraphs, reattach
//! continuations, classify each heading, then parse each body according to its
//! kind. The result is a render-ready `ResumeDocument` whose section order is
//! exactly the order of appearance in the input.

pub mod classifier;
pub mod education;
pub mod experience;
pub mod lines;
pub mod rules;
pub mod skills;
pub mod splitter;

use serde::Serialize;
use tracing::debug;

use classifier::{SectionClassifier, SectionKind};
use education::{parse_education, EducationEntry};
use experience::{parse_experience, ExperienceEntry};
use lines::{is_bullet, strip_bullet};
use skills::{categorize_skills, SkillCategory};
use splitter::{merge_continuations, split_sections, Section};

/// Parsed body of one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum SectionBody {
    /// List items with bullet markers stripped.
    Bullets(Vec<String>),
    /// Plain lines, rendered with line breaks.
    Paragraph(Vec<String>),
    Coursework(Vec<String>),
    Skills(Vec<SkillCategory>),
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
}

impl SectionBody {
    pub fn is_empty(&self) -> bool {
        match self {
            SectionBody::Bullets(items)
            | SectionBody::Paragraph(items)
            | SectionBody::Coursework(items) => items.is_empty(),
            SectionBody::Skills(categories) => categories.is_empty(),
            SectionBody::Experience(entries) => entries.is_empty(),
            SectionBody::Education(entries) => entries.is_empty(),
        }
    }
}

/// One section after classification and body parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedSection {
    pub kind: SectionKind,
    /// Heading as written in the source text.
    pub heading: String,
    pub body: SectionBody,
}

impl ClassifiedSection {
    /// Canonical label for recognized kinds, upper-cased source heading for
    /// Generic.
    pub fn display_heading(&self) -> String {
        match self.kind.canonical_label() {
            Some(label) => label.to_string(),
            None => self.heading.trim().to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeDocument {
    pub sections: Vec<ClassifiedSection>,
}

impl ResumeDocument {
    /// True when at least one section classified to a known kind.
    pub fn has_recognized_sections(&self) -> bool {
        self.sections.iter().any(|s| s.kind != SectionKind::Generic)
    }
}

/// Parses raw resume text into a structured document.
pub fn parse_resume(raw: &str, classifier: &SectionClassifier) -> ResumeDocument {
    let sections = merge_continuations(split_sections(raw), classifier);

    let sections: Vec<ClassifiedSection> = sections
        .into_iter()
        .map(|section| classify_section(section, classifier))
        .collect();

    debug!(
        sections = sections.len(),
        recognized = sections.iter().filter(|s| s.kind != SectionKind::Generic).count(),
        empty = sections.iter().filter(|s| s.body.is_empty()).count(),
        "parsed resume text"
    );

    ResumeDocument { sections }
}

fn classify_section(section: Section, classifier: &SectionClassifier) -> ClassifiedSection {
    let kind = classifier.classify(&section.heading_key());
    let body = parse_body(kind, &section.body);
    ClassifiedSection {
        kind,
        heading: section.heading,
        body,
    }
}

fn parse_body(kind: SectionKind, body: &[String]) -> SectionBody {
    match kind {
        SectionKind::Qualifications => SectionBody::Bullets(list_items(body)),
        SectionKind::Education => SectionBody::Education(parse_education(body)),
        SectionKind::Coursework => SectionBody::Coursework(list_items(body)),
        SectionKind::TechnicalSkills => SectionBody::Skills(parse_skill_lines(body)),
        kind if kind.has_experience_entries() => {
            let entries = parse_experience(body);
            if entries.is_empty() && !body.is_empty() {
                debug!(%kind, lines = body.len(), "no entries recognized, degrading to generic body");
                generic_body(body)
            } else {
                SectionBody::Experience(entries)
            }
        }
        _ => generic_body(body),
    }
}

/// Body lines with bullet markers stripped; blank results dropped.
fn list_items(body: &[String]) -> Vec<String> {
    body.iter()
        .map(|line| strip_bullet(line).trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn generic_body(body: &[String]) -> SectionBody {
    if body.iter().any(|line| is_bullet(line)) {
        SectionBody::Bullets(list_items(body))
    } else {
        SectionBody::Paragraph(body.to_vec())
    }
}

/// Keeps `Label: members` lines as they are; consecutive unlabelled lines are
/// pooled and run through the categorizer. A colon line that is not a valid
/// `Label: members` pair (`Tools:`) is kept as an unlabelled line.
fn parse_skill_lines(body: &[String]) -> Vec<SkillCategory> {
    let mut categories = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for line in body {
        if let Some(category) = SkillCategory::parse_labelled(strip_bullet(line)) {
            flush_unlabelled(&mut pending, &mut categories);
            categories.push(category);
        } else if line.contains(':') {
            debug!("skill line with an empty label or no members kept as written: {line:?}");
            flush_unlabelled(&mut pending, &mut categories);
            categories.push(SkillCategory::unlabelled(strip_bullet(line)));
        } else {
            pending.push(strip_bullet(line));
        }
    }
    flush_unlabelled(&mut pending, &mut categories);

    categories
}

fn flush_unlabelled(pending: &mut Vec<&str>, categories: &mut Vec<SkillCategory>) {
    if pending.is_empty() {
        return;
    }
    categories.extend(categorize_skills(&pending.join(", ")));
    pending.clear();
}
