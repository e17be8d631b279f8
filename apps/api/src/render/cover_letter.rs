//! Cover-letter fragment renderer. No section classification: the letter is
//! a header, a date line and one paragraph per blank-line-separated chunk.

use chrono::NaiveDate;

use crate::document::lines::clean_line;
use crate::document::splitter::split_paragraphs;
use crate::models::applicant::{present, PersonalInfo};
use crate::render::html::{escape, join_lines};

/// `October 19, 2026`
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn render_cover_letter(text: &str, info: &PersonalInfo, date: NaiveDate) -> String {
    let mut contact = escape(info.email());
    if let Some(phone) = present(&info.phone) {
        contact.push_str(" | ");
        contact.push_str(&escape(phone));
    }
    if let Some(address) = present(&info.address) {
        contact.push_str("<br>");
        contact.push_str(&escape(address));
    }

    let mut html = format!(
        r#"<div class="cover-letter-header"><div class="resume-name">{}</div><div class="resume-contact">{}</div></div>"#,
        escape(info.name()),
        contact
    );
    html.push_str(&format!(
        r#"<div class="cover-letter-date">{}</div>"#,
        format_letter_date(date)
    ));

    html.push_str(r#"<div class="cover-letter-body">"#);
    for chunk in split_paragraphs(text) {
        let lines: Vec<String> = chunk
            .lines()
            .map(clean_line)
            .filter(|line| !line.is_empty())
            .collect();
        if !lines.is_empty() {
            html.push_str(&format!("<p>{}</p>", join_lines(&lines)));
        }
    }
    html.push_str("</div>");
    html
}
