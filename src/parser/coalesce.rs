use itertools::Itertools;

const TRAILING_PUNCT: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Comparison key: lowercase, trailing punctuation and whitespace removed.
/// Wording differences are never folded together.
pub fn coalesce_key(statement: &str) -> String {
    statement
        .trim_end_matches(|c: char| TRAILING_PUNCT.contains(&c) || c.is_whitespace())
        .trim_start()
        .to_lowercase()
}

/// Drop statements equal (under `coalesce_key`) to an earlier one.
/// The first occurrence keeps its original form.
pub fn coalesce_statements(statements: Vec<String>) -> Vec<String> {
    statements
        .into_iter()
        .unique_by(|s| coalesce_key(s))
        .collect()
}
