//! Markup escaping helpers.

/// Escapes text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a link target. Only http(s) and mailto targets are kept; anything
/// else (`javascript:` and friends) yields `None`. Bare hosts get `https://`.
pub fn escape_href(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    let target = if ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        url.to_string()
    } else if lower.split('/').next().is_some_and(|head| head.contains(':')) {
        return None;
    } else {
        format!("https://{url}")
    };
    Some(escape(&target))
}

/// Escapes each line and joins with `<br>`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| escape(line.as_ref()))
        .collect::<Vec<_>>()
        .join("<br>")
}
