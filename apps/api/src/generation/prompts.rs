// Prompt constants and builders for document generation.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, PLAIN_TEXT_SYSTEM};
use crate::models::applicant::{present, ApplicantData};

/// System prompt for resume generation.
pub fn resume_system() -> String {
    format!(
        "You are an expert resume writer producing ATS-friendly resumes. {PLAIN_TEXT_SYSTEM} {GROUNDING_INSTRUCTION}"
    )
}

/// System prompt for cover-letter generation.
pub fn cover_letter_system() -> String {
    format!(
        "You are an expert career coach writing concise, professional cover letters. {PLAIN_TEXT_SYSTEM} {GROUNDING_INSTRUCTION}"
    )
}

/// Resume prompt template. Replace `{name}`, `{target_role}`, `{candidate}`
/// and `{target}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Create a professional, ATS-friendly resume for {name} applying for a {target_role} position.

CANDIDATE INFORMATION:
{candidate}

TARGET POSITION:
{target}

Write the resume with these sections, in this order. Put each heading in
capitals on its own line, followed directly by its content. Separate sections
with exactly one blank line and do not put blank lines inside a section.

SUMMARY OF QUALIFICATIONS
• 3-4 bullet points, each starting with "• ", highlighting the strongest qualifications

EDUCATION
School Name, City, State
Degree in Field
Graduation date
GPA: x.x (only if provided)
Honors or achievements, one per line

RELEVANT COURSEWORK (only if applicable)
Course One, Course Two, Course Three

TECHNICAL SKILLS
Programming Languages: ...
Database: ...
Software/Tools: ...
(one "Category: items" line per category)

RELEVANT EXPERIENCE
Company Name, City, State
Job Title - Start Date - End Date
• Specific achievement with quantifiable results
• Another achievement focusing on impact

PROJECT EXPERIENCE (only if applicable, same entry format)

ADDITIONAL EXPERIENCE (only if applicable, same entry format)

Always write the company line as "Company, Location" (use "Remote" when no
location is known) and the title line as "Title - Start - End" using " - " as
the separator. Use action verbs and concrete numbers, and tailor the content to
the {target_role} position."#;

/// Cover-letter prompt template. Replace `{name}`, `{target_role}`,
/// `{at_company}` and `{background}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a professional cover letter for {name} applying for a {target_role} position{at_company}.

CANDIDATE BACKGROUND:
{background}

The letter must:
1. Open with enthusiasm for the specific role and company
2. Highlight relevant experience and achievements
3. Connect the background to the job requirements
4. Close with a strong call to action

Start with "Dear Hiring Manager," and end with "Sincerely," followed by the
candidate's name on the next line. Separate paragraphs with one blank line.
Keep it under 400 words."#;

const DEFAULT_ROLE: &str = "professional";

fn target_role(data: &ApplicantData) -> &str {
    present(&data.job_target.target_role).unwrap_or(DEFAULT_ROLE)
}

fn labelled(label: &str, value: &Option<String>) -> Option<String> {
    present(value).map(|v| format!("{label}: {v}"))
}

fn candidate_block(data: &ApplicantData) -> String {
    let info = &data.personal_info;
    let mut lines: Vec<String> = [
        labelled("Name", &info.full_name),
        labelled("Email", &info.email),
        labelled("Phone", &info.phone),
        labelled("Address", &info.address),
        labelled("LinkedIn", &info.linkedin),
        labelled("Website", &info.website),
        labelled("Existing summary", &info.summary),
    ]
    .into_iter()
    .flatten()
    .collect();

    let education: Vec<String> = data
        .complete_education()
        .map(|edu| {
            let mut line = format!(
                "- {} in {}, {}",
                present(&edu.degree).unwrap_or_default(),
                present(&edu.field).unwrap_or_default(),
                present(&edu.school).unwrap_or_default()
            );
            for (label, value) in [
                ("Location", &edu.location),
                ("Graduated", &edu.graduation_year),
                ("GPA", &edu.gpa),
                ("Achievements", &edu.achievements),
            ] {
                if let Some(value) = present(value) {
                    line.push_str(&format!("; {label}: {value}"));
                }
            }
            line
        })
        .collect();
    if !education.is_empty() {
        lines.push("Education:".to_string());
        lines.extend(education);
    }

    let experience: Vec<String> = data
        .complete_experience()
        .map(|exp| {
            let mut line = format!(
                "- {} at {}",
                present(&exp.job_title).unwrap_or_default(),
                present(&exp.company).unwrap_or_default()
            );
            if let Some(location) = present(&exp.location) {
                line.push_str(&format!(", {location}"));
            }
            if let Some(start) = present(&exp.start_date) {
                let end = present(&exp.end_date).unwrap_or("Present");
                line.push_str(&format!(" ({start} - {end})"));
            }
            if let Some(details) = present(&exp.responsibilities) {
                line.push_str(&format!("\n  Details: {details}"));
            }
            line
        })
        .collect();
    if !experience.is_empty() {
        lines.push("Work experience:".to_string());
        lines.extend(experience);
    }

    lines.join("\n")
}

fn target_block(data: &ApplicantData) -> String {
    let target = &data.job_target;
    [
        labelled("Role", &target.target_role),
        labelled("Company", &target.target_company),
        labelled("Industry", &target.industry),
        labelled("Experience level", &target.experience_level),
        labelled("Key skills", &target.skills),
        labelled("Job description to match", &target.job_description),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn build_resume_prompt(data: &ApplicantData) -> String {
    RESUME_PROMPT_TEMPLATE
        .replace("{name}", data.personal_info.name())
        .replace("{target_role}", target_role(data))
        .replace("{candidate}", &candidate_block(data))
        .replace("{target}", &target_block(data))
}

pub fn build_cover_letter_prompt(data: &ApplicantData) -> String {
    let target = &data.job_target;
    let at_company = present(&target.target_company)
        .map(|company| format!(" at {company}"))
        .unwrap_or_default();

    let key_experience: Vec<String> = data
        .complete_experience()
        .map(|exp| {
            format!(
                "{} at {}",
                present(&exp.job_title).unwrap_or_default(),
                present(&exp.company).unwrap_or_default()
            )
        })
        .collect();

    let mut background = vec![
        format!(
            "- Experience level: {}",
            present(&target.experience_level).unwrap_or("Not specified")
        ),
        format!(
            "- Key experience: {}",
            if key_experience.is_empty() {
                "Not specified".to_string()
            } else {
                key_experience.join(", ")
            }
        ),
        format!(
            "- Key skills: {}",
            present(&target.skills).unwrap_or("Not specified")
        ),
    ];
    if let Some(industry) = present(&target.industry) {
        background.push(format!("- Industry: {industry}"));
    }
    if let Some(description) = present(&target.job_description) {
        background.push(format!("- Job description: {description}"));
    }

    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{name}", data.personal_info.name())
        .replace("{target_role}", target_role(data))
        .replace("{at_company}", &at_company)
        .replace("{background}", &background.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::applicant::{ExperienceInput, JobTarget, PersonalInfo};

    fn data() -> ApplicantData {
        ApplicantData {
            personal_info: PersonalInfo {
                full_name: Some("Jane Doe".into()),
                email: Some("jane@example.com".into()),
                ..PersonalInfo::default()
            },
            experience: vec![ExperienceInput {
                company: Some("Acme Corp".into()),
                job_title: Some("Engineer".into()),
                start_date: Some("2020".into()),
                ..ExperienceInput::default()
            }],
            job_target: JobTarget {
                target_role: Some("Backend Developer".into()),
                target_company: Some("Initech".into()),
                skills: Some("Rust, Go".into()),
                ..JobTarget::default()
            },
            ..ApplicantData::default()
        }
    }

    #[test]
    fn test_resume_prompt_fills_every_placeholder() {
        let prompt = build_resume_prompt(&data());
        assert!(prompt.starts_with("Create a professional, ATS-friendly resume for Jane Doe applying for a Backend Developer position."));
        assert!(prompt.contains("- Engineer at Acme Corp (2020 - Present)"));
        assert!(prompt.contains("Key skills: Rust, Go"));
        for placeholder in ["{name}", "{target_role}", "{candidate}", "{target}"] {
            assert!(!prompt.contains(placeholder), "{placeholder} left in prompt");
        }
    }

    #[test]
    fn test_resume_prompt_skips_empty_blocks() {
        let mut data = data();
        data.experience.clear();
        let prompt = build_resume_prompt(&data);
        assert!(!prompt.contains("Work experience:"));
        assert!(!prompt.contains("Education:"));
    }

    #[test]
    fn test_cover_letter_prompt() {
        let prompt = build_cover_letter_prompt(&data());
        assert!(prompt.starts_with(
            "Write a professional cover letter for Jane Doe applying for a Backend Developer position at Initech."
        ));
        assert!(prompt.contains("- Key experience: Engineer at Acme Corp"));
        assert!(prompt.contains("- Experience level: Not specified"));
        assert!(!prompt.contains("{background}"));
    }

    #[test]
    fn test_missing_role_uses_default() {
        let prompt = build_cover_letter_prompt(&ApplicantData::default());
        assert!(prompt.contains("applying for a professional position."));
    }

    #[test]
    fn test_system_prompts_forbid_markdown() {
        assert!(resume_system().contains("Do NOT use markdown"));
        assert!(cover_letter_system().contains("Use only the facts provided"));
    }
}
