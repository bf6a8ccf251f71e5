use serde_json::Value;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::model::CanonicalCourseRecord;

/// True when `courseid` belongs to department `prefix`: it starts with the
/// prefix and is not a longer department code ("CS" vs "CSP201").
/// An empty prefix matches nothing.
pub fn matches_department(courseid: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    match courseid.strip_prefix(prefix) {
        Some(rest) => !rest.chars().next().is_some_and(|c| c.is_uppercase()),
        None => false,
    }
}

/// Filter a structured catalog as loaded from disk. Elements that are not
/// records with a string `courseid` are skipped; kept elements are untouched.
pub fn filter_catalog(catalog: Value, prefix: &str) -> Result<Vec<Value>> {
    let Value::Array(items) = catalog else {
        return Err(CatalogError::Schema("structured catalog must be a JSON array".into()));
    };
    Ok(items
        .into_iter()
        .filter(|item| {
            let courseid = item.as_object().and_then(|o| o.get("courseid")).and_then(Value::as_str);
            match courseid {
                Some(id) => matches_department(id, prefix),
                None => {
                    debug!("skipping malformed catalog element");
                    false
                }
            }
        })
        .collect())
}

pub fn filter_records<'a>(
    records: &'a [CanonicalCourseRecord],
    prefix: &str,
) -> Vec<&'a CanonicalCourseRecord> {
    records
        .iter()
        .filter(|r| r.courseid.as_deref().is_some_and(|id| matches_department(id, prefix)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boundary_sensitive() {
        let ids = ["CS310", "CS 310 Lab", "CSP201", "ECON CS010"];
        let kept: Vec<_> = ids.iter().filter(|id| matches_department(id, "CS")).collect();
        assert_eq!(kept, vec![&"CS310", &"CS 310 Lab"]);
    }

    #[test]
    fn exact_and_lowercase_continuations() {
        assert!(matches_department("CS", "CS"));
        assert!(matches_department("CSc 101", "CS"));
        assert!(!matches_department("cs310", "CS"));
        assert!(!matches_department("CS310", ""));
    }

    #[test]
    fn skips_malformed_elements() {
        let catalog = json!([
            {"courseid": "CS310", "coursename": "Algorithms"},
            "CS110",
            {"courseid": null},
            {"courseid": 110},
            {"coursename": "no id"},
            {"courseid": "CSP201"},
            {"courseid": "CS 310 Lab", "extra": true}
        ]);
        let out = filter_catalog(catalog, "CS").unwrap();
        assert_eq!(
            out,
            vec![
                json!({"courseid": "CS310", "coursename": "Algorithms"}),
                json!({"courseid": "CS 310 Lab", "extra": true}),
            ]
        );
    }

    #[test]
    fn non_array_is_schema_error() {
        assert!(matches!(filter_catalog(json!({"a": 1}), "CS"), Err(CatalogError::Schema(_))));
    }

    #[test]
    fn typed_records() {
        let rec = |id: Option<&str>| CanonicalCourseRecord {
            coursename: None,
            courseid: id.map(String::from),
            coursedescription: None,
            prerequisites: vec![],
            other: None,
        };
        let records = vec![rec(Some("CS110")), rec(None), rec(Some("CSP201")), rec(Some("MATH140"))];
        let kept = filter_records(&records, "CS");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].courseid.as_deref(), Some("CS110"));
    }
}
