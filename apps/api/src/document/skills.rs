//! Skill Categorizer — partitions a comma-separated skill list into labelled
//! groups.
//!
//! Each skill lands in exactly one group. Groups are tested in a fixed order
//! (languages, web, database, tools) and the first whose keyword table matches
//! wins; anything unmatched goes to Other. Matching is on whole tokens, so
//! `Java` is not confused with `JavaScript` and `Go` does not hide in `MongoDB`.
//! A token may extend its keyword by a version or a `js` suffix (`Python3`,
//! `HTML5`, `ReactJS`, `Vue.js`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Skill group, in matching precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Language,
    Web,
    Database,
    Tool,
    Other,
}

impl SkillKind {
    pub const ALL: [SkillKind; 5] = [
        SkillKind::Language,
        SkillKind::Web,
        SkillKind::Database,
        SkillKind::Tool,
        SkillKind::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillKind::Language => "Programming Languages",
            SkillKind::Web => "Web Technologies",
            SkillKind::Database => "Database",
            SkillKind::Tool => "Software/Tools",
            SkillKind::Other => "Other",
        }
    }

    /// Languages, web stacks and databases. Coursework suggestions skip these.
    pub fn is_technical(self) -> bool {
        matches!(self, SkillKind::Language | SkillKind::Web | SkillKind::Database)
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillKind::Language => &[
                "java", "python", "javascript", "typescript", "c++", "c#", "php", "ruby",
                "swift", "kotlin", "go", "golang", "rust",
            ],
            SkillKind::Web => &[
                "html", "css", "react", "angular", "vue", "node", "express", "bootstrap",
                "jquery",
            ],
            SkillKind::Database => &[
                "sql", "mysql", "postgresql", "postgres", "mongodb", "oracle", "database",
                "sqlite", "redis",
            ],
            SkillKind::Tool => &[
                "git", "github", "visual studio", "vs code", "eclipse", "intellij",
                "photoshop", "figma", "slack", "jira", "docker",
            ],
            SkillKind::Other => &[],
        }
    }
}

/// One labelled group of skills, displayed as `Label: a, b`. An empty label
/// holds a single line kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub members: Vec<String>,
}

impl SkillCategory {
    /// Parses an already-labelled line such as `Database: MySQL, Oracle`.
    /// Returns `None` when the line has no label or no members.
    pub fn parse_labelled(line: &str) -> Option<Self> {
        let (label, members) = line.split_once(':')?;
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        let members = split_skills(members);
        if members.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            members,
        })
    }

    pub fn unlabelled(line: &str) -> Self {
        Self {
            label: String::new(),
            members: vec![line.trim().to_string()],
        }
    }

    pub fn is_labelled(&self) -> bool {
        !self.label.is_empty()
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_labelled() {
            write!(f, "{}: {}", self.label, self.members.join(", "))
        } else {
            write!(f, "{}", self.members.join(", "))
        }
    }
}

/// Splits on commas, trims, and drops blanks and exact duplicates (first
/// occurrence kept).
pub fn split_skills(input: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for item in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !skills.iter().any(|s| s == item) {
            skills.push(item.to_string());
        }
    }
    skills
}

/// Lower-cased runs of alphanumerics and `+#.`.
fn tokens(skill: &str) -> Vec<String> {
    skill
        .split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// `token` is `keyword`, optionally followed by a version (`3`, `3.11`) or
/// `js` / `.js`.
fn token_matches(token: &str, keyword: &str) -> bool {
    let Some(rest) = token.strip_prefix(keyword) else {
        return false;
    };
    let rest = rest.trim_start_matches('.');
    rest.is_empty()
        || rest == "js"
        || rest.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn matches_keyword(tokens: &[String], keyword: &str) -> bool {
    if keyword.contains(' ') {
        format!(" {} ", tokens.join(" ")).contains(&format!(" {keyword} "))
    } else {
        tokens.iter().any(|token| token_matches(token, keyword))
    }
}

/// Group a single skill falls into.
pub fn classify_skill(skill: &str) -> SkillKind {
    let tokens = tokens(skill);
    SkillKind::ALL
        .into_iter()
        .find(|kind| kind.keywords().iter().any(|kw| matches_keyword(&tokens, kw)))
        .unwrap_or(SkillKind::Other)
}

/// Partitions a comma-separated skill list. Empty groups are omitted; members
/// keep their input order.
pub fn categorize_skills(input: &str) -> Vec<SkillCategory> {
    let skills = split_skills(input);

    SkillKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let members: Vec<String> = skills
                .iter()
                .filter(|s| classify_skill(s) == kind)
                .cloned()
                .collect();
            (!members.is_empty()).then(|| SkillCategory {
                label: kind.label().to_string(),
                members,
            })
        })
        .collect()
}
