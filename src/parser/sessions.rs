use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

use super::text::RawField;
use crate::error::{CatalogError, Result};
use crate::model::SessionSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionField {
    Section,
    ClassNumber,
    Schedule,
    Instructor,
    Location,
    SessionType,
    Dates,
    Status,
    Credits,
    Notes,
    SessionPrerequisites,
    CourseAttributes,
}

impl SessionField {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionField::Section => "section",
            SessionField::ClassNumber => "class_number",
            SessionField::Schedule => "schedule",
            SessionField::Instructor => "instructor",
            SessionField::Location => "location",
            SessionField::SessionType => "session_type",
            SessionField::Dates => "dates",
            SessionField::Status => "status",
            SessionField::Credits => "credits",
            SessionField::Notes => "notes",
            SessionField::SessionPrerequisites => "session_prerequisites",
            SessionField::CourseAttributes => "course_attributes",
        }
    }

    fn slot(self, summary: &mut SessionSummary) -> &mut Option<String> {
        match self {
            SessionField::Section => &mut summary.section,
            SessionField::ClassNumber => &mut summary.class_number,
            SessionField::Schedule => &mut summary.schedule,
            SessionField::Instructor => &mut summary.instructor,
            SessionField::Location => &mut summary.location,
            SessionField::SessionType => &mut summary.session_type,
            SessionField::Dates => &mut summary.dates,
            SessionField::Status => &mut summary.status,
            SessionField::Credits => &mut summary.credits,
            SessionField::Notes => &mut summary.notes,
            SessionField::SessionPrerequisites => &mut summary.session_prerequisites,
            SessionField::CourseAttributes => &mut summary.course_attributes,
        }
    }
}

/// Scraper key -> canonical field.
pub const SESSION_FIELD_TABLE: &[(&str, SessionField)] = &[
    ("section", SessionField::Section),
    ("class_number", SessionField::ClassNumber),
    ("schedule/time", SessionField::Schedule),
    ("instructor", SessionField::Instructor),
    ("location", SessionField::Location),
    ("session", SessionField::SessionType),
    ("class dates", SessionField::Dates),
    ("status", SessionField::Status),
    ("credits", SessionField::Credits),
];

/// Free-text keys folded in alongside the table.
pub const FOLDED_FIELDS: &[(&str, SessionField)] = &[
    ("class notes", SessionField::Notes),
    ("pre requisites", SessionField::SessionPrerequisites),
    ("course attributes", SessionField::CourseAttributes),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    Mapped(SessionField),
    Folded(SessionField),
    Dropped,
}

pub fn classify_key(raw_key: &str) -> KeyClass {
    if let Some((_, field)) = SESSION_FIELD_TABLE.iter().find(|(k, _)| *k == raw_key) {
        return KeyClass::Mapped(*field);
    }
    if let Some((_, field)) = FOLDED_FIELDS.iter().find(|(k, _)| *k == raw_key) {
        return KeyClass::Folded(*field);
    }
    KeyClass::Dropped
}

/// Run once at startup: each raw key and each canonical field may appear
/// only once across both tables.
pub fn validate_field_tables() -> Result<()> {
    check_unique(SESSION_FIELD_TABLE.iter().chain(FOLDED_FIELDS))
}

fn check_unique<'a>(entries: impl Iterator<Item = &'a (&'static str, SessionField)>) -> Result<()> {
    let mut raw_keys = HashSet::new();
    let mut fields = HashSet::new();
    for (raw, field) in entries {
        if !raw_keys.insert(*raw) {
            return Err(CatalogError::FieldTable(format!("raw key {raw:?} listed twice")));
        }
        if !fields.insert(*field) {
            return Err(CatalogError::FieldTable(format!(
                "canonical field {:?} targeted twice",
                field.as_str()
            )));
        }
    }
    Ok(())
}

/// Map one raw section record onto the canonical keys.
/// None when nothing survives cleaning, or the input is not an object.
pub fn summarize_session(session: &Value) -> Option<SessionSummary> {
    let entries = session.as_object()?;
    let mut summary = SessionSummary::default();

    for (raw_key, value) in entries {
        let field = match classify_key(raw_key) {
            KeyClass::Mapped(f) | KeyClass::Folded(f) => f,
            KeyClass::Dropped => {
                trace!(key = %raw_key, "dropping session key");
                continue;
            }
        };
        if let Some(text) = RawField::from_value(Some(value)).clean() {
            *field.slot(&mut summary) = Some(text);
        }
    }

    if summary.is_empty() {
        None
    } else {
        Some(summary)
    }
}
