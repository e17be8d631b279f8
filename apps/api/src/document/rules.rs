//! Ordered predicate → action tables for the line-by-line entry parsers.
//!
//! Each parser owns a state type and a `&[LineRule<State>]`. For every input
//! line the first rule whose predicate matches runs its action; later rules
//! are not consulted. Keeping the table as data makes precedence auditable and
//! lets tests pin down which rule a given line hits.

/// A named line rule over parser state `S`.
pub struct LineRule<S> {
    pub name: &'static str,
    pub matches: fn(&str, &S) -> bool,
    pub apply: fn(&str, &mut S),
}

/// Returns the name of the first rule matching `line` in `state`, without
/// applying it.
#[cfg(test)]
pub fn matching_rule<S>(rules: &[LineRule<S>], line: &str, state: &S) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| (rule.matches)(line, state))
        .map(|rule| rule.name)
}

/// Applies the first matching rule and returns its name. Lines that match no
/// rule leave the state untouched.
pub fn apply_first<S>(rules: &[LineRule<S>], line: &str, state: &mut S) -> Option<&'static str> {
    let rule = rules.iter().find(|rule| (rule.matches)(line, state))?;
    (rule.apply)(line, state);
    Some(rule.name)
}

/// `Some(trimmed)` when the text is not blank.
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits `anchor[, location]` on the first `", "`.
pub fn split_anchor(line: &str) -> (String, Option<String>) {
    match line.split_once(", ") {
        Some((anchor, location)) => (anchor.trim().to_string(), non_empty(location)),
        None => (line.trim().to_string(), None),
    }
}
