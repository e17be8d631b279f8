//! Template Generator — deterministic resume and cover-letter text used when
//! the generative backend is unavailable.
//!
//! Output is written in exactly the grammar the document parsers accept:
//! upper-case headings followed directly by their body, sections separated
//! by one blank line, `Company, Location` / `Title - Start - End` / `• detail`
//! experience entries and `Label: items` skill lines. User-entered values are
//! rewritten where they would otherwise collide with a separator or keyword
//! the parsers key on.

use crate::document::education::names_degree;
use crate::document::lines::strip_bullet;
use crate::document::skills::{categorize_skills, classify_skill, split_skills};
use crate::models::applicant::{present, ApplicantData, EducationInput, ExperienceInput};

const MAX_COURSEWORK: usize = 5;
const STOCK_COURSEWORK: &str =
    "Software Engineering, Database Management, Web Development, Computer Programming";
const REMOTE: &str = "Remote";

/// Lines of free text with any leading bullet marker (`•`, `-`, `*`) removed.
fn text_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            let line = line.trim();
            strip_bullet(line.strip_prefix('*').unwrap_or(line)).trim().to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// User text on one line: whitespace collapsed, leading list markers dropped.
fn plain_line(text: &str) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    text.trim_start_matches(&['•', '-', '*', ' '][..]).to_string()
}

/// Company or school name that `split_anchor` keeps whole.
fn anchor_text(text: &str) -> String {
    plain_line(text).replace(", ", " / ")
}

/// Text that cannot be read as an experience header (`, ` or ` at `).
fn header_free(text: &str) -> String {
    anchor_text(text).replace(" at ", " @ ")
}

/// Job title that also keeps the first ` - ` free for the date split.
fn title_text(text: &str) -> String {
    header_free(text).replace(" - ", " – ")
}

fn section(heading: &str, body: Vec<String>) -> String {
    let mut text = heading.to_string();
    for line in body {
        text.push('\n');
        text.push_str(&line);
    }
    text
}

fn summary_lines(data: &ApplicantData) -> Vec<String> {
    if let Some(summary) = present(&data.personal_info.summary) {
        return text_lines(summary)
            .into_iter()
            .map(|line| format!("• {line}"))
            .collect();
    }

    let level = present(&data.job_target.experience_level).unwrap_or("Motivated professional");
    let third = match data.complete_experience().next() {
        Some(exp) => format!(
            "• Experience in {} with proven track record of achievement",
            present(&exp.job_title).unwrap_or_default().to_lowercase()
        ),
        None => "• Excellent communication and teamwork abilities".to_string(),
    };
    vec![
        format!("• {level} with demonstrated ability to deliver high-quality results"),
        "• Strong analytical and problem-solving skills with attention to detail".to_string(),
        third,
        "• Motivated self-starter with ability to work independently and in team environments"
            .to_string(),
    ]
}

/// `Degree in Field`; a degree the parser would not recognize (`BS`, `PhD`)
/// is written as `BS Degree`.
fn degree_line(edu: &EducationInput) -> String {
    let degree = plain_line(present(&edu.degree).unwrap_or_default());
    let field = plain_line(present(&edu.field).unwrap_or_default());
    let line = format!("{degree} in {field}");
    if names_degree(&line) {
        line
    } else {
        format!("{degree} Degree in {field}")
    }
}

fn education_lines(edu: &EducationInput) -> Vec<String> {
    let school = anchor_text(present(&edu.school).unwrap_or_default());
    let mut lines = vec![match present(&edu.location) {
        Some(location) => format!("{school}, {}", plain_line(location)),
        None => school,
    }];
    lines.push(degree_line(edu));
    if let Some(year) = present(&edu.graduation_year) {
        lines.push(plain_line(year));
    }
    if let Some(gpa) = present(&edu.gpa) {
        lines.push(format!("GPA: {}", plain_line(gpa)));
    }
    // Bulleted so an achievement naming a college cannot open a new entry
    if let Some(achievements) = present(&edu.achievements) {
        lines.extend(text_lines(achievements).into_iter().map(|a| format!("• {a}")));
    }
    lines
}

fn coursework_line(skills: &str) -> String {
    let courses: Vec<String> = split_skills(skills)
        .into_iter()
        .filter(|skill| !classify_skill(skill).is_technical())
        .take(MAX_COURSEWORK)
        .collect();
    if courses.is_empty() {
        STOCK_COURSEWORK.to_string()
    } else {
        courses.join(", ")
    }
}

fn date_range(exp: &ExperienceInput) -> Option<String> {
    let start = present(&exp.start_date).map(header_free);
    let end = present(&exp.end_date).map(header_free);
    match (start, end) {
        (Some(start), Some(end)) => Some(format!("{start} - {end}")),
        (Some(start), None) => Some(format!("{start} - Present")),
        (None, Some(end)) => Some(end),
        (None, None) => None,
    }
}

fn experience_lines(exp: &ExperienceInput) -> Vec<String> {
    let company = anchor_text(present(&exp.company).unwrap_or_default());
    let location = plain_line(present(&exp.location).unwrap_or(REMOTE));
    let title = title_text(present(&exp.job_title).unwrap_or_default());

    let mut lines = vec![format!("{company}, {location}")];
    lines.push(match date_range(exp) {
        Some(dates) => format!("{title} - {dates}"),
        None => title,
    });
    if let Some(responsibilities) = present(&exp.responsibilities) {
        lines.extend(
            text_lines(responsibilities)
                .into_iter()
                .map(|r| format!("• {r}")),
        );
    }
    lines
}

/// Builds resume text from the applicant data.
pub fn resume_template(data: &ApplicantData) -> String {
    let mut sections = vec![section("SUMMARY OF QUALIFICATIONS", summary_lines(data))];

    let education: Vec<&EducationInput> = data.complete_education().collect();
    let skills = present(&data.job_target.skills).filter(|s| !split_skills(s).is_empty());

    if !education.is_empty() {
        let body = education.iter().flat_map(|edu| education_lines(edu)).collect();
        sections.push(section("EDUCATION", body));

        if let Some(skills) = skills {
            sections.push(section("RELEVANT COURSEWORK", vec![coursework_line(skills)]));
        }
    }

    if let Some(skills) = skills {
        let body = categorize_skills(skills)
            .iter()
            .map(ToString::to_string)
            .collect();
        sections.push(section("TECHNICAL SKILLS", body));
    }

    let experience: Vec<String> = data.complete_experience().flat_map(experience_lines).collect();
    if !experience.is_empty() {
        sections.push(section("RELEVANT EXPERIENCE", experience));
    }

    sections.join("\n\n")
}

/// Lower-cases the first letter unless the word is an acronym, and drops a
/// trailing period, so a responsibility reads inside a sentence.
fn sentence_fragment(text: &str) -> String {
    let text = text.trim().trim_end_matches('.');
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && !second.is_uppercase() => {
            format!("{}{}", first.to_lowercase(), &text[first.len_utf8()..])
        }
        _ => text.to_string(),
    }
}

/// Builds cover-letter text from the applicant data.
pub fn cover_letter_template(data: &ApplicantData) -> String {
    let target = &data.job_target;
    let role = present(&target.target_role).unwrap_or("open");
    let at_company = present(&target.target_company)
        .map(|company| format!(" at {company}"))
        .unwrap_or_default();
    let first = data.complete_experience().next();

    let background = first
        .and_then(|exp| present(&exp.job_title))
        .unwrap_or(role);
    let top_skills: Vec<String> = present(&target.skills)
        .map(|skills| split_skills(skills).into_iter().take(2).collect())
        .unwrap_or_default();
    let expertise = if top_skills.is_empty() {
        "relevant technologies".to_string()
    } else {
        top_skills.join(" and ")
    };

    let current_title = first
        .and_then(|exp| present(&exp.job_title))
        .unwrap_or("a professional");
    let current_company = first
        .and_then(|exp| present(&exp.company))
        .unwrap_or("my current company");
    let achievement = first
        .and_then(|exp| present(&exp.responsibilities))
        .and_then(|r| text_lines(r).into_iter().next())
        .map(|line| sentence_fragment(&line))
        .unwrap_or_else(|| "delivered exceptional results".to_string());

    let industry = present(&target.industry).unwrap_or("technology");
    let level = present(&target.experience_level).unwrap_or("professional");
    let name = data.personal_info.name();

    format!(
        "Dear Hiring Manager,\n\n\
         I am writing to express my strong interest in the {role} position{at_company}. \
         With my background in {background} and expertise in {expertise}, I am excited about \
         the opportunity to contribute to your team.\n\n\
         In my current role as {current_title} at {current_company}, I have successfully \
         {achievement}. This experience has equipped me with the skills necessary to excel in \
         the {role} position.\n\n\
         I am particularly drawn to this opportunity because it aligns with my career goals and \
         passion for {industry}. I am confident that my {level} experience and proven track \
         record make me a strong candidate for this role.\n\n\
         Thank you for considering my application. I look forward to the opportunity to discuss \
         how my skills and enthusiasm can contribute to your team's success.\n\n\
         Sincerely,\n{name}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::classifier::{SectionClassifier, SectionKind};
    use crate::document::splitter::{merge_continuations, split_sections};
    use crate::document::{parse_resume, SectionBody};
    use crate::models::applicant::{JobTarget, PersonalInfo};
    use proptest::prelude::*;

    fn education() -> EducationInput {
        EducationInput {
            school: Some("State University".into()),
            location: Some("Austin, TX".into()),
            degree: Some("Bachelor of Science".into()),
            field: Some("Computer Science".into()),
            graduation_year: Some("2021".into()),
            gpa: Some("3.8".into()),
            achievements: Some("Dean's List, College of Engineering".into()),
        }
    }

    fn experience() -> ExperienceInput {
        ExperienceInput {
            company: Some("Acme Corp".into()),
            location: None,
            job_title: Some("Software Engineer".into()),
            start_date: Some("Jan 2020".into()),
            end_date: None,
            responsibilities: Some("- Built the billing service.\n* Led code reviews\n\n".into()),
        }
    }

    fn applicant(with_education: bool, with_skills: bool, with_experience: bool) -> ApplicantData {
        ApplicantData {
            personal_info: PersonalInfo {
                full_name: Some("Jane Doe".into()),
                email: Some("jane@example.com".into()),
                ..PersonalInfo::default()
            },
            education: if with_education { vec![education()] } else { vec![] },
            experience: if with_experience { vec![experience()] } else { vec![] },
            job_target: JobTarget {
                target_role: Some("Backend Developer".into()),
                skills: with_skills.then(|| "Java, React, MySQL, Git, Public Speaking".to_string()),
                ..JobTarget::default()
            },
        }
    }

    #[test]
    fn test_template_round_trips_for_every_combination() {
        let classifier = SectionClassifier::default();
        for mask in 0..8u8 {
            let (edu, skills, exp) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let text = resume_template(&applicant(edu, skills, exp));

            let mut expected = vec![SectionKind::Qualifications];
            if edu {
                expected.push(SectionKind::Education);
                if skills {
                    expected.push(SectionKind::Coursework);
                }
            }
            if skills {
                expected.push(SectionKind::TechnicalSkills);
            }
            if exp {
                expected.push(SectionKind::Experience);
            }

            let split = split_sections(&text);
            assert_eq!(
                merge_continuations(split.clone(), &classifier),
                split,
                "template output must not need merging ({mask:03b})"
            );
            let kinds: Vec<SectionKind> = parse_resume(&text, &classifier)
                .sections
                .iter()
                .map(|s| s.kind)
                .collect();
            assert_eq!(kinds, expected, "combination {mask:03b}:\n{text}");
        }
    }

    #[test]
    fn test_sections_separated_by_single_blank_line() {
        let text = resume_template(&applicant(true, true, true));
        assert!(!text.contains("\n\n\n"));
        assert_eq!(text.matches("\n\n").count(), 4);
        assert!(text.starts_with("SUMMARY OF QUALIFICATIONS\n• "));
    }

    #[test]
    fn test_experience_entry_parses_back() {
        let text = resume_template(&applicant(false, false, true));
        assert!(text.contains("RELEVANT EXPERIENCE\nAcme Corp, Remote\nSoftware Engineer - Jan 2020 - Present\n• Built the billing service.\n• Led code reviews"));

        let document = parse_resume(&text, &SectionClassifier::default());
        match &document.sections[1].body {
            SectionBody::Experience(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].company, "Acme Corp");
                assert_eq!(entries[0].location.as_deref(), Some("Remote"));
                assert_eq!(entries[0].title.as_deref(), Some("Software Engineer"));
                assert_eq!(entries[0].date.as_deref(), Some("Jan 2020 - Present"));
                assert_eq!(entries[0].details.len(), 2);
            }
            other => panic!("expected experience entries, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_experiences_without_dates_parse_back() {
        let mut data = applicant(false, false, true);
        data.experience = vec![
            ExperienceInput {
                start_date: None,
                ..experience()
            },
            ExperienceInput {
                company: Some("Beta LLC".into()),
                location: Some("Austin".into()),
                job_title: Some("Intern".into()),
                ..ExperienceInput::default()
            },
        ];
        let document = parse_resume(&resume_template(&data), &SectionClassifier::default());
        match &document.sections[1].body {
            SectionBody::Experience(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].title.as_deref(), Some("Software Engineer"));
                assert_eq!(entries[0].date, None);
                assert_eq!(entries[1].company, "Beta LLC");
                assert_eq!(entries[1].title.as_deref(), Some("Intern"));
            }
            other => panic!("expected experience entries, got {other:?}"),
        }
    }

    #[test]
    fn test_education_entry_parses_back() {
        let text = resume_template(&applicant(true, false, false));
        let document = parse_resume(&text, &SectionClassifier::default());
        match &document.sections[1].body {
            SectionBody::Education(entries) => {
                assert_eq!(entries.len(), 1);
                let entry = &entries[0];
                assert_eq!(entry.institution, "State University");
                assert_eq!(entry.location.as_deref(), Some("Austin, TX"));
                assert_eq!(entry.degree.as_deref(), Some("Bachelor of Science in Computer Science"));
                assert_eq!(entry.graduation_info.as_deref(), Some("2021"));
                assert_eq!(
                    entry.details,
                    vec!["GPA: 3.8", "• Dean's List, College of Engineering"]
                );
            }
            other => panic!("expected education entries, got {other:?}"),
        }
    }

    fn parsed_body(data: &ApplicantData, kind: SectionKind) -> SectionBody {
        parse_resume(&resume_template(data), &SectionClassifier::default())
            .sections
            .into_iter()
            .find(|s| s.kind == kind)
            .map(|s| s.body)
            .unwrap_or_else(|| panic!("no {kind} section"))
    }

    #[test]
    fn test_separators_in_title_and_company_stay_in_one_entry() {
        let mut data = applicant(false, false, true);
        data.experience = vec![
            ExperienceInput {
                company: Some("Acme Corp".into()),
                location: Some("Austin".into()),
                job_title: Some("Senior Engineer, Payments".into()),
                start_date: Some("Jan 2020".into()),
                responsibilities: Some("Built X".into()),
                ..ExperienceInput::default()
            },
            ExperienceInput {
                company: Some("Globex, Inc.".into()),
                location: None,
                job_title: Some("Lead - Platform at HQ".into()),
                ..ExperienceInput::default()
            },
        ];
        match parsed_body(&data, SectionKind::Experience) {
            SectionBody::Experience(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].company, "Acme Corp");
                assert_eq!(entries[0].location.as_deref(), Some("Austin"));
                assert_eq!(entries[0].title.as_deref(), Some("Senior Engineer / Payments"));
                assert_eq!(entries[0].date.as_deref(), Some("Jan 2020 - Present"));
                assert_eq!(entries[0].details, vec!["Built X"]);
                assert_eq!(entries[1].company, "Globex / Inc.");
                assert_eq!(entries[1].title.as_deref(), Some("Lead – Platform @ HQ"));
            }
            other => panic!("expected experience entries, got {other:?}"),
        }
    }

    #[test]
    fn test_school_without_keyword_keeps_its_own_entry() {
        let mut data = applicant(true, false, false);
        data.education = vec![
            EducationInput {
                school: Some("State University".into()),
                degree: Some("Bachelor of Science".into()),
                field: Some("Biology".into()),
                graduation_year: Some("2018".into()),
                ..EducationInput::default()
            },
            EducationInput {
                school: Some("Stanford".into()),
                degree: Some("MS".into()),
                field: Some("AI".into()),
                graduation_year: Some("2020".into()),
                ..EducationInput::default()
            },
        ];
        match parsed_body(&data, SectionKind::Education) {
            SectionBody::Education(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].degree.as_deref(), Some("Bachelor of Science in Biology"));
                assert_eq!(entries[0].graduation_info.as_deref(), Some("2018"));
                assert_eq!(entries[1].institution, "Stanford");
                assert_eq!(entries[1].degree.as_deref(), Some("MS Degree in AI"));
                assert_eq!(entries[1].graduation_info.as_deref(), Some("2020"));
            }
            other => panic!("expected education entries, got {other:?}"),
        }
    }

    #[test]
    fn test_field_naming_a_school_stays_in_degree() {
        let mut data = applicant(true, false, false);
        data.education[0].degree = Some("Master of Arts".into());
        data.education[0].field = Some("School Psychology".into());
        match parsed_body(&data, SectionKind::Education) {
            SectionBody::Education(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].institution, "State University");
                assert_eq!(entries[0].degree.as_deref(), Some("Master of Arts in School Psychology"));
            }
            other => panic!("expected education entries, got {other:?}"),
        }
    }

    const SEPARATORS: &[&str] = &[", ", " at ", " - ", " "];

    /// One word, or two joined by a separator the parsers treat specially.
    fn phrase(words: &'static [&'static str]) -> impl Strategy<Value = String> {
        (
            prop::sample::select(words),
            prop::sample::select(SEPARATORS),
            prop::sample::select(words),
            any::<bool>(),
        )
            .prop_map(|(first, sep, second, joined)| {
                if joined {
                    format!("{first}{sep}{second}")
                } else {
                    first.to_string()
                }
            })
    }

    fn optional(values: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::sample::select(values).prop_map(str::to_string))
    }

    fn education_input() -> impl Strategy<Value = EducationInput> {
        (
            phrase(&["State University", "Riverside College", "Stanford", "Reed", "Tech Institute", "Law School", "Portland"]),
            optional(&["Austin, TX", "Palo Alto"]),
            prop::sample::select(vec!["Bachelor of Science", "Master of Arts", "BS", "PhD", "Associate"]),
            phrase(&["Computer Science", "School Psychology", "Biology", "Data Systems", "Art"]),
            optional(&["2018", "2020"]),
            optional(&["3.8", "3.5/4.0"]),
            optional(&["Dean's List
College Tutor, Math", "- Master's thesis award 2019"]),
        )
            .prop_map(|(school, location, degree, field, year, gpa, achievements)| EducationInput {
                school: Some(school),
                location,
                degree: Some(degree.to_string()),
                field: Some(field),
                graduation_year: year,
                gpa,
                achievements,
            })
    }

    fn experience_input() -> impl Strategy<Value = ExperienceInput> {
        (
            phrase(&["Acme Corp", "Globex", "Payments", "Initech LLC", "Austin"]),
            optional(&["Austin, TX", "Berlin"]),
            phrase(&["Senior Engineer", "Payments", "Lead", "Platform", "Art"]),
            optional(&["Jan 2020", "Mar, 2021", "2019 - 2020"]),
            optional(&["Present", "Dec 2022"]),
            optional(&["Built X
- Led Y, at scale", "Engineer - on call"]),
        )
            .prop_map(|(company, location, title, start, end, responsibilities)| ExperienceInput {
                company: Some(company),
                location,
                job_title: Some(title),
                start_date: start,
                end_date: end,
                responsibilities,
            })
    }

    proptest! {
        #[test]
        fn prop_template_entries_parse_back_one_to_one(
            education in prop::collection::vec(education_input(), 1..4),
            experience in prop::collection::vec(experience_input(), 1..4),
        ) {
            let data = ApplicantData {
                education,
                experience,
                ..applicant(false, false, false)
            };

            match parsed_body(&data, SectionKind::Education) {
                SectionBody::Education(entries) => {
                    prop_assert_eq!(entries.len(), data.education.len());
                    for (entry, input) in entries.iter().zip(&data.education) {
                        let school = anchor_text(present(&input.school).unwrap_or_default());
                        // A keyword-less first school keeps its location inline
                        let (institution, _) = crate::document::rules::split_anchor(&entry.institution);
                        prop_assert_eq!(institution, school);
                        prop_assert!(entry.degree.is_some());
                    }
                }
                other => prop_assert!(false, "expected education entries, got {:?}", other),
            }

            match parsed_body(&data, SectionKind::Experience) {
                SectionBody::Experience(entries) => {
                    prop_assert_eq!(entries.len(), data.experience.len());
                    for (entry, input) in entries.iter().zip(&data.experience) {
                        prop_assert_eq!(&entry.company, &anchor_text(present(&input.company).unwrap_or_default()));
                        prop_assert_eq!(
                            entry.title.clone(),
                            Some(title_text(present(&input.job_title).unwrap_or_default()))
                        );
                    }
                }
                other => prop_assert!(false, "expected experience entries, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_coursework_prefers_non_technical_skills() {
        assert_eq!(coursework_line("Java, React, MySQL, Git, Public Speaking"), "Git, Public Speaking");
        assert_eq!(coursework_line("Java, Python"), STOCK_COURSEWORK);
        assert_eq!(coursework_line("A, B, C, D, E, F"), "A, B, C, D, E");
    }

    #[test]
    fn test_skills_lines_are_categorized() {
        let text = resume_template(&applicant(false, true, false));
        assert!(text.contains(
            "TECHNICAL SKILLS\nProgramming Languages: Java\nWeb Technologies: React\nDatabase: MySQL\nSoftware/Tools: Git\nOther: Public Speaking"
        ));
    }

    #[test]
    fn test_blank_skills_are_treated_as_absent() {
        let mut data = applicant(true, false, false);
        data.job_target.skills = Some(" , ".into());
        let text = resume_template(&data);
        assert!(!text.contains("TECHNICAL SKILLS"));
        assert!(!text.contains("RELEVANT COURSEWORK"));
    }

    #[test]
    fn test_summary_uses_applicant_summary() {
        let mut data = applicant(false, false, false);
        data.personal_info.summary = Some("Backend engineer with 5 years of Rust".into());
        assert_eq!(
            resume_template(&data),
            "SUMMARY OF QUALIFICATIONS\n• Backend engineer with 5 years of Rust"
        );
    }

    #[test]
    fn test_stock_summary_has_four_bullets() {
        let text = resume_template(&applicant(false, false, true));
        let summary = text.split("\n\n").next().unwrap();
        assert_eq!(summary.lines().filter(|l| l.starts_with("• ")).count(), 4);
        assert!(summary.contains("Experience in software engineer"));
    }

    #[test]
    fn test_cover_letter_template() {
        let mut data = applicant(false, true, true);
        data.job_target.target_company = Some("Initech".into());
        let letter = cover_letter_template(&data);
        assert!(letter.starts_with("Dear Hiring Manager,\n\nI am writing to express my strong interest in the Backend Developer position at Initech."));
        assert!(letter.contains("expertise in Java and React"));
        assert!(letter.contains("In my current role as Software Engineer at Acme Corp, I have successfully built the billing service."));
        assert!(letter.ends_with("Sincerely,\nJane Doe"));
        assert_eq!(letter.split("\n\n").count(), 6);
    }

    #[test]
    fn test_cover_letter_defaults() {
        let letter = cover_letter_template(&ApplicantData::default());
        assert!(letter.contains("the open position."));
        assert!(letter.contains("expertise in relevant technologies"));
        assert!(letter.contains("as a professional at my current company, I have successfully delivered exceptional results."));
        assert!(letter.contains("passion for technology"));
    }

    #[test]
    fn test_sentence_fragment() {
        assert_eq!(sentence_fragment("Built X."), "built X");
        assert_eq!(sentence_fragment("API design"), "API design");
        assert_eq!(sentence_fragment("x"), "x");
    }
}
