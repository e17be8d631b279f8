//! Self-contained page wrapper handed to the PDF rasterizer.

const PRINT_CSS: &str = r#"
@page { size: A4; margin: 0.5in; }
body { font-family: 'Times New Roman', serif; line-height: 1.3; color: #000; margin: 0; font-size: 11pt; }
a { color: #000; text-decoration: none; }
.resume-document { max-width: 8.5in; margin: 0 auto; background: white; }
.resume-header { text-align: center; margin-bottom: 20px; border-bottom: 1px solid #000; padding-bottom: 10px; }
.resume-name { font-size: 18pt; font-weight: bold; margin-bottom: 5px; text-transform: uppercase; letter-spacing: 1px; }
.resume-contact { font-size: 10pt; color: #333; line-height: 1.4; }
.resume-section { margin-bottom: 15px; }
.resume-section h3 { font-size: 11pt; font-weight: bold; text-transform: uppercase; margin: 0 0 8px 0; padding-bottom: 2px; border-bottom: 1px solid #000; letter-spacing: 0.5px; }
.summary-list, .experience-details { margin: 0; padding-left: 15px; list-style-type: none; }
.summary-list li, .experience-details li { margin-bottom: 3px; position: relative; padding-left: 15px; }
.summary-list li::before, .experience-details li::before { content: "•"; position: absolute; left: 0; font-weight: bold; }
.education-item { margin-bottom: 12px; }
.education-header, .experience-header, .experience-title-date { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 2px; }
.education-institution, .experience-company { font-weight: bold; }
.education-location, .experience-location, .experience-date { font-style: italic; text-align: right; }
.education-degree { font-style: italic; margin-bottom: 2px; }
.education-details { font-size: 10pt; }
.technical-skills { line-height: 1.4; }
.skill-category { margin-bottom: 4px; }
.experience-item { margin-bottom: 15px; page-break-inside: avoid; }
.experience-title { font-style: italic; }
.coursework { margin: 0; line-height: 1.4; }
.cover-letter-header { margin-bottom: 20px; }
.cover-letter-date { margin-bottom: 15px; color: #666; }
.cover-letter-body p { margin-bottom: 12px; text-align: justify; }
"#;

/// Wraps a rendered fragment into a complete HTML document with the print
/// stylesheet embedded. The fragment is inserted as-is.
pub fn wrap_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>{PRINT_CSS}</style>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n"
    )
}
