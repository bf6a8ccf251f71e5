use serde_json::{Map, Value};

use super::coalesce::coalesce_statements;
use super::notes::extract_noteworthy_sentences;
use super::prereqs::extract_prereq_statements;
use super::sessions::summarize_session;
use super::text::{clean_str, clean_text, RawField};
use crate::model::{CanonicalCourseRecord, OtherBundle};

const DESCRIPTION_KEY: &str = "description";
const PREREQ_KEY: &str = "pre requisites";

/// Build the canonical record for one raw course. Missing or malformed
/// sub-fields come out as null / empty; this never fails.
pub fn transform_entry(course_id: &str, record: &Value) -> CanonicalCourseRecord {
    let empty = Map::new();
    let descriptors = record
        .get("course_descriptors")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let description = clean_text(descriptors.get(DESCRIPTION_KEY));
    let prerequisites = coalesce_statements(extract_prereq_statements(
        descriptors.get(PREREQ_KEY),
        description.as_deref(),
    ));
    let notes = extract_noteworthy_sentences(description.as_deref());

    let extras: Map<String, Value> = descriptors
        .iter()
        .filter(|(key, _)| key.as_str() != DESCRIPTION_KEY && key.as_str() != PREREQ_KEY)
        .filter_map(|(key, value)| {
            RawField::from_value(Some(value))
                .clean()
                .map(|text| (key.clone(), Value::String(text)))
        })
        .collect();

    let sessions: Vec<_> = record
        .get("sessions")
        .and_then(Value::as_array)
        .map(|raw| raw.iter().filter_map(summarize_session).collect())
        .unwrap_or_default();

    let other = OtherBundle {
        descriptors: extras,
        notes,
        sessions,
    }
    .non_empty();

    let courseid = RawField::lookup(record, "id")
        .clean()
        .or_else(|| clean_str(course_id));

    CanonicalCourseRecord {
        coursename: RawField::lookup(record, "title").clean(),
        courseid,
        coursedescription: description,
        prerequisites,
        other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_record() {
        let r = transform_entry("CS110", &json!({"course_descriptors": {}, "sessions": []}));
        assert_eq!(r.courseid.as_deref(), Some("CS110"));
        assert_eq!(r.coursename, None);
        assert_eq!(r.coursedescription, None);
        assert!(r.prerequisites.is_empty());
        assert_eq!(r.other, None);
    }

    #[test]
    fn malformed_subfields_degrade() {
        let r = transform_entry(
            "X1",
            &json!({"title": 7, "course_descriptors": "oops", "sessions": {"section": "01"}}),
        );
        assert_eq!(r.coursename, None);
        assert_eq!(r.courseid.as_deref(), Some("X1"));
        assert_eq!(r.other, None);
        assert_eq!(transform_entry("  ", &json!(null)).courseid, None);
    }

    #[test]
    fn record_id_wins_over_key() {
        let r = transform_entry("key", &json!({"id": " AF 210 "}));
        assert_eq!(r.courseid.as_deref(), Some("AF 210"));
        let r = transform_entry("key", &json!({"id": "   "}));
        assert_eq!(r.courseid.as_deref(), Some("key"));
    }

    #[test]
    fn full_record() {
        let raw = json!({
            "id": "CS210",
            "title": " Intermediate  Computing with Data Structures ",
            "course_descriptors": {
                "description": "Covers lists, trees and graphs. Prerequisite: CS 110. May be repeated once.",
                "pre requisites": "CS 110 and MATH 140; prerequisite: cs 110",
                "distribution area": "  Natural Sciences ",
                "empty extra": "   "
            },
            "sessions": [
                {"section": "01", "instructor": "Smith,Ann"},
                {"capacity": "30"},
                {"section": "02", "class notes": "Hybrid"}
            ]
        });
        let r = transform_entry("CS210", &raw);
        assert_eq!(r.coursename.as_deref(), Some("Intermediate Computing with Data Structures"));
        assert_eq!(r.prerequisites, vec!["CS 110", "MATH 140", "prerequisite: cs 110"]);

        let other = r.other.unwrap();
        assert_eq!(other.descriptors.len(), 1);
        assert_eq!(other.descriptors["distribution area"], "Natural Sciences");
        assert_eq!(other.notes, vec!["May be repeated once."]);
        assert_eq!(other.sessions.len(), 2);
        assert_eq!(other.sessions[0].section.as_deref(), Some("01"));
        assert_eq!(other.sessions[1].notes.as_deref(), Some("Hybrid"));
    }

    #[test]
    fn descriptor_extras_keep_scraper_order() {
        let raw = json!({
            "course_descriptors": {
                "zeta note": "last alphabetically",
                "description": "Plain.",
                "alpha note": "first alphabetically",
                "mid": " x "
            }
        });
        let other = transform_entry("A1", &raw).other.unwrap();
        let keys: Vec<&str> = other.descriptors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta note", "alpha note", "mid"]);

        let text = serde_json::to_string(&other).unwrap();
        assert_eq!(
            text,
            r#"{"descriptors":{"zeta note":"last alphabetically","alpha note":"first alphabetically","mid":"x"}}"#
        );
    }

    #[test]
    fn deterministic() {
        let raw = json!({
            "course_descriptors": {"description": "Graded pass/fail. Prereq: CS 110.", "pre requisites": "CS 110"},
            "sessions": [{"section": "01"}]
        });
        assert_eq!(transform_entry("CS1", &raw), transform_entry("CS1", &raw));
    }

    #[test]
    fn input_untouched() {
        let raw = json!({"course_descriptors": {"description": "  spaced   out  "}});
        let before = raw.clone();
        let _ = transform_entry("A", &raw);
        assert_eq!(raw, before);
    }
}
