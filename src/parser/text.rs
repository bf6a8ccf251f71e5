use regex::Regex;
use serde_json::Value;

/// A raw scraped field: either a piece of text or nothing usable.
/// Non-string JSON values count as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawField<'a> {
    Present(&'a str),
    Absent,
}

impl<'a> RawField<'a> {
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            Some(Value::String(s)) => RawField::Present(s),
            _ => RawField::Absent,
        }
    }

    /// Look up `key` on a JSON object; anything else is absent.
    pub fn lookup(map: &'a Value, key: &str) -> Self {
        Self::from_value(map.get(key))
    }

    pub fn clean(self) -> Option<String> {
        match self {
            RawField::Present(s) => clean_str(s),
            RawField::Absent => None,
        }
    }
}

/// Collapse whitespace runs to single spaces and trim.
/// Returns None when nothing is left.
pub fn clean_str(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

pub fn clean_text(value: Option<&Value>) -> Option<String> {
    RawField::from_value(value).clean()
}

/// One case-insensitive regex matching any of `phrases` as whole words.
pub fn phrase_regex(phrases: &[&str]) -> Regex {
    let alternatives: Vec<String> = phrases.iter().map(|p| regex::escape(p)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))).unwrap()
}

const ABBREVIATIONS: &[&str] = &["e.g.", "i.e.", "etc.", "approx.", "dept.", "no.", "vs."];

/// Abbreviations that also close a sentence when a capitalized word follows.
const SENTENCE_FINAL_ABBREVIATIONS: &[&str] = &["etc."];

/// Split text into sentences. A sentence ends at `.`, `!` or `?` followed by
/// whitespace or end of input; the terminator stays with its sentence.
/// Pieces are whitespace-normalized and empty ones dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        let end = idx + ch.len_utf8();
        if !at_boundary || ends_with_abbreviation(&text[start..end], &text[end..]) {
            continue;
        }
        if let Some(sentence) = clean_str(&text[start..end]) {
            sentences.push(sentence);
        }
        start = end;
    }

    if let Some(rest) = clean_str(&text[start..]) {
        sentences.push(rest);
    }
    sentences
}

fn ends_with_abbreviation(piece: &str, rest: &str) -> bool {
    let last_word = piece.split_whitespace().last().unwrap_or("");
    let last_word = last_word.trim_start_matches('(').to_lowercase();
    if !ABBREVIATIONS.contains(&last_word.as_str()) {
        return false;
    }
    let next_capitalized = rest.trim_start().chars().next().is_some_and(char::is_uppercase);
    !(SENTENCE_FINAL_ABBREVIATIONS.contains(&last_word.as_str()) && next_capitalized)
}
