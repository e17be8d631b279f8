//! Line-level helpers shared by every section parser.

/// Bullet glyphs recognized at the start of a line.
pub const BULLET_MARKERS: &[char] = &['•', '-'];

/// Returns true if the (already trimmed) line starts with a bullet marker.
pub fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS)
}

/// Strips one leading bullet marker and the whitespace after it.
pub fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix(BULLET_MARKERS)
        .map(str::trim_start)
        .unwrap_or(line)
        .trim_end()
}

/// Removes formatting artifacts generative models put around plain text:
/// `**bold**` / `__bold__` markers, markdown heading hashes, and `* ` list
/// markers (rewritten to `• ` so the bullet rules still see them).
pub fn clean_line(line: &str) -> String {
    let trimmed = line.trim();
    let after_hashes = trimmed.trim_start_matches('#');
    let without_hashes =
        if after_hashes.len() < trimmed.len() && after_hashes.starts_with(char::is_whitespace) {
            after_hashes.trim_start()
        } else {
            trimmed
        };

    let cleaned = without_hashes.replace("**", "").replace("__", "");
    let cleaned = cleaned.trim();

    match cleaned.strip_prefix("* ") {
        Some(rest) => format!("• {}", rest.trim_start()),
        None => cleaned.to_string(),
    }
}
