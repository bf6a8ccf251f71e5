use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::text::{clean_str, phrase_regex, split_sentences};

static AND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\s+and\s+").unwrap());
static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,5}[ -]?\d{3}[A-Z]?\b").unwrap());

/// Phrases that mark a sentence as a prerequisite on their own.
pub const PREREQ_SIGNALS: &[&str] = &[
    "prerequisite",
    "prerequisites",
    "pre-requisite",
    "pre-requisites",
    "pre-req",
    "pre-reqs",
    "prereq",
    "prereqs",
    "must have completed",
    "must have taken",
    "previous course",
    "prior course",
];

/// A course code only counts when the sentence also states a requirement.
const REQUIREMENT_CUES: &[&str] = &[
    "required",
    "requires",
    "recommended",
    "credit in",
    "grade of",
    "concurrent",
    "enrollment in",
    "background in",
    "familiarity with",
    "completion of",
];

static PREREQ_SIGNAL_RE: LazyLock<Regex> = LazyLock::new(|| phrase_regex(PREREQ_SIGNALS));
static REQUIREMENT_CUE_RE: LazyLock<Regex> = LazyLock::new(|| phrase_regex(REQUIREMENT_CUES));

pub fn has_course_code(text: &str) -> bool {
    COURSE_CODE_RE.is_match(text)
}

pub fn is_prerequisite_sentence(sentence: &str) -> bool {
    PREREQ_SIGNAL_RE.is_match(sentence)
        || (has_course_code(sentence) && REQUIREMENT_CUE_RE.is_match(sentence))
}

/// Break a dedicated prerequisite field into atomic clauses on `;`,
/// the word "and", and sentence terminators.
pub fn split_clauses(text: &str) -> Vec<String> {
    text.split(';')
        .flat_map(split_sentences)
        .flat_map(|sentence| {
            AND_RE
                .split(&sentence)
                .filter_map(clean_str)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn field_clauses(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.extend(split_clauses(s)),
        Value::Array(items) => items.iter().for_each(|v| field_clauses(v, out)),
        Value::Object(map) => map.values().for_each(|v| field_clauses(v, out)),
        _ => {}
    }
}

/// Candidate prerequisite statements, first-seen order: clauses of the
/// dedicated field, then prerequisite-looking sentences of the description.
/// Not deduplicated; see `coalesce::coalesce_statements`.
pub fn extract_prereq_statements(field: Option<&Value>, description: Option<&str>) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(field) = field {
        field_clauses(field, &mut candidates);
    }
    if let Some(description) = description {
        candidates.extend(
            split_sentences(description)
                .into_iter()
                .filter(|s| is_prerequisite_sentence(s)),
        );
    }
    candidates
        .into_iter()
        .filter_map(|c| clean_str(&c))
        .filter(|c| c.chars().any(char::is_alphanumeric))
        .collect()
}
