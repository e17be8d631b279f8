//! Resume fragment renderer.

use crate::document::classifier::SectionKind;
use crate::document::education::EducationEntry;
use crate::document::experience::ExperienceEntry;
use crate::document::skills::SkillCategory;
use crate::document::{ClassifiedSection, ResumeDocument, SectionBody};
use crate::models::applicant::{present, PersonalInfo};
use crate::render::html::{escape, escape_href, join_lines};

/// Renders the whole resume: header block, then one block per section in
/// document order.
pub fn render_resume(document: &ResumeDocument, info: &PersonalInfo) -> String {
    let mut html = String::from(r#"<div class="resume-document">"#);
    html.push_str(&render_header(info));
    for section in &document.sections {
        html.push_str(&render_section(section));
    }
    html.push_str("</div>");
    html
}

fn render_header(info: &PersonalInfo) -> String {
    let contact: Vec<String> = [
        present(&info.email),
        present(&info.phone),
        present(&info.address),
    ]
    .into_iter()
    .flatten()
    .map(escape)
    .collect();

    let links: Vec<String> = [
        (present(&info.linkedin), "LinkedIn Profile"),
        (present(&info.website), "Portfolio"),
    ]
    .into_iter()
    .filter_map(|(url, text)| {
        let href = escape_href(url?)?;
        Some(format!(r#"<a href="{href}" target="_blank">{text}</a>"#))
    })
    .collect();

    let mut html = String::from(r#"<div class="resume-header">"#);
    html.push_str(&format!(
        r#"<div class="resume-name">{}</div>"#,
        escape(info.name())
    ));
    html.push_str(r#"<div class="resume-contact">"#);
    html.push_str(&contact.join(" • "));
    if !links.is_empty() {
        if !contact.is_empty() {
            html.push_str("<br>");
        }
        html.push_str(&links.join(" • "));
    }
    html.push_str("</div></div>");
    html
}

fn render_section(section: &ClassifiedSection) -> String {
    let mut html = String::from(r#"<div class="resume-section">"#);
    html.push_str(&format!("<h3>{}</h3>", escape(&section.display_heading())));
    html.push_str(&render_body(section.kind, &section.body));
    html.push_str("</div>");
    html
}

fn render_body(kind: SectionKind, body: &SectionBody) -> String {
    match body {
        SectionBody::Bullets(items) => {
            let class = if kind == SectionKind::Qualifications {
                r#" class="summary-list""#
            } else {
                ""
            };
            render_list(class, items)
        }
        SectionBody::Paragraph(lines) if lines.is_empty() => String::new(),
        SectionBody::Paragraph(lines) => format!("<p>{}</p>", join_lines(lines)),
        SectionBody::Coursework(items) if items.is_empty() => String::new(),
        SectionBody::Coursework(items) => format!(
            r#"<p class="coursework">{}</p>"#,
            escape(&items.join(", "))
        ),
        SectionBody::Skills(categories) => render_skills(categories),
        SectionBody::Experience(entries) => entries.iter().map(render_experience_entry).collect(),
        SectionBody::Education(entries) => entries.iter().map(render_education_entry).collect(),
    }
}

fn render_list(class: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<ul{class}>{items}</ul>")
}

fn render_skills(categories: &[SkillCategory]) -> String {
    if categories.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="technical-skills">"#);
    for category in categories {
        let members = escape(&category.members.join(", "));
        if category.is_labelled() {
            html.push_str(&format!(
                r#"<div class="skill-category"><strong>{}:</strong> {members}</div>"#,
                escape(&category.label)
            ));
        } else {
            html.push_str(&format!(r#"<div class="skill-category">{members}</div>"#));
        }
    }
    html.push_str("</div>");
    html
}

fn render_experience_entry(entry: &ExperienceEntry) -> String {
    let mut html = String::from(r#"<div class="experience-item"><div class="experience-header">"#);
    html.push_str(&format!(
        r#"<div class="experience-company">{}</div>"#,
        escape(&entry.company)
    ));
    if let Some(location) = &entry.location {
        html.push_str(&format!(
            r#"<div class="experience-location">{}</div>"#,
            escape(location)
        ));
    }
    html.push_str("</div>");

    if entry.title.is_some() || entry.date.is_some() {
        html.push_str(r#"<div class="experience-title-date">"#);
        if let Some(title) = &entry.title {
            html.push_str(&format!(
                r#"<div class="experience-title">{}</div>"#,
                escape(title)
            ));
        }
        if let Some(date) = &entry.date {
            html.push_str(&format!(
                r#"<div class="experience-date">{}</div>"#,
                escape(date)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str(&render_list(r#" class="experience-details""#, &entry.details));
    html.push_str("</div>");
    html
}

fn render_education_entry(entry: &EducationEntry) -> String {
    let mut html = String::from(r#"<div class="education-item"><div class="education-header">"#);
    html.push_str(&format!(
        r#"<div class="education-institution">{}</div>"#,
        escape(&entry.institution)
    ));
    if let Some(location) = &entry.location {
        html.push_str(&format!(
            r#"<div class="education-location">{}</div>"#,
            escape(location)
        ));
    }
    html.push_str("</div>");

    if let Some(degree) = &entry.degree {
        html.push_str(&format!(
            r#"<div class="education-degree">{}</div>"#,
            escape(degree)
        ));
    }
    for line in entry.graduation_info.iter().chain(&entry.details) {
        html.push_str(&format!(
            r#"<div class="education-details">{}</div>"#,
            escape(line)
        ));
    }
    html.push_str("</div>");
    html
}
