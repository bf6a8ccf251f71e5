use std::sync::LazyLock;

use regex::Regex;

use super::prereqs::is_prerequisite_sentence;
use super::text::{phrase_regex, split_sentences};

/// Administrative / policy phrases, grouped by catalog convention.
pub const NOTE_SIGNALS: &[&str] = &[
    // grading basis
    "pass/fail",
    "graded",
    "grading",
    "letter grade",
    "satisfactory/unsatisfactory",
    // repeatability
    "may be repeated",
    "can be repeated",
    "repeatable",
    "not be repeated",
    // cross-listing
    "cross-listed",
    "crosslisted",
    "same as",
    "also listed as",
    "offered jointly",
    "meets with",
    // restrictions, scheduling, fees, requirements
    "not open to",
    "open only to",
    "restricted to",
    "credit will not be",
    "credit cannot be",
    "no credit",
    "offered in",
    "offered every",
    "lab fee",
    "course fee",
    "satisfies",
    "fulfills",
    "counts toward",
    "counts towards",
];

static NOTE_SIGNAL_RE: LazyLock<Regex> = LazyLock::new(|| phrase_regex(NOTE_SIGNALS));

pub fn is_noteworthy_sentence(sentence: &str) -> bool {
    NOTE_SIGNAL_RE.is_match(sentence)
}

/// Policy sentences from a description. Sentences that read as
/// prerequisites belong to `prerequisites` and are skipped here.
pub fn extract_noteworthy_sentences(description: Option<&str>) -> Vec<String> {
    let Some(description) = description else {
        return Vec::new();
    };
    split_sentences(description)
        .into_iter()
        .filter(|s| is_noteworthy_sentence(s) && !is_prerequisite_sentence(s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_policy_sentences() {
        let desc = "An introduction to ethics. Same as PHIL 240. May be repeated for credit with a different topic. Graded pass/fail.";
        assert_eq!(
            extract_noteworthy_sentences(Some(desc)),
            vec![
                "Same as PHIL 240.",
                "May be repeated for credit with a different topic.",
                "Graded pass/fail.",
            ]
        );
    }

    #[test]
    fn prerequisite_sentences_excluded() {
        let desc = "Prerequisite: CS 110; not open to students with credit for CS 119. Not open to freshmen.";
        assert_eq!(extract_noteworthy_sentences(Some(desc)), vec!["Not open to freshmen."]);
    }

    #[test]
    fn signal_phrases_inside_words_ignored() {
        let desc = "Non-majors complete the same assignments as majors. Lab machines were upgraded in 2024.";
        assert!(extract_noteworthy_sentences(Some(desc)).is_empty());
        assert!(!is_noteworthy_sentence("Performance degraded under load."));
        assert!(is_noteworthy_sentence("Counts towards the minor."));
    }

    #[test]
    fn absent_or_plain_description() {
        assert!(extract_noteworthy_sentences(None).is_empty());
        assert!(extract_noteworthy_sentences(Some("Covers sorting and searching.")).is_empty());
    }
}
