pub mod coalesce;
pub mod entry;
pub mod notes;
pub mod prereqs;
pub mod sessions;
pub mod text;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::model::CanonicalCourseRecord;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Raw catalog (course id -> scraped record) to canonical records, in input order.
pub fn structure_catalog(raw: &Value) -> Result<Vec<CanonicalCourseRecord>> {
    let courses = raw.as_object().ok_or_else(|| {
        CatalogError::Schema("catalog input must be a mapping of course id to record".into())
    })?;
    let entries: Vec<(&String, &Value)> = courses.iter().collect();
    Ok(transform_all(&entries))
}

fn transform_one(course_id: &str, record: &Value) -> CanonicalCourseRecord {
    if !record.is_object() {
        warn!(course_id, "record is not an object, emitting empty course");
    }
    let out = entry::transform_entry(course_id, record);
    debug!(
        course_id,
        prerequisites = out.prerequisites.len(),
        has_other = out.other.is_some(),
        "structured course"
    );
    out
}

#[cfg(feature = "rayon")]
fn transform_all(entries: &[(&String, &Value)]) -> Vec<CanonicalCourseRecord> {
    entries
        .par_iter()
        .map(|(id, record)| transform_one(id, record))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn transform_all(entries: &[(&String, &Value)]) -> Vec<CanonicalCourseRecord> {
    entries
        .iter()
        .map(|(id, record)| transform_one(id, record))
        .collect()
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct StructureCounts {
    pub courses: usize,
    pub with_prerequisites: usize,
    pub prerequisites: usize,
    pub sessions: usize,
    pub notes: usize,
}

impl StructureCounts {
    pub fn tally(records: &[CanonicalCourseRecord]) -> Self {
        let mut counts = StructureCounts {
            courses: records.len(),
            ..Default::default()
        };
        for r in records {
            if !r.prerequisites.is_empty() {
                counts.with_prerequisites += 1;
            }
            counts.prerequisites += r.prerequisites.len();
            if let Some(other) = &r.other {
                counts.sessions += other.sessions.len();
                counts.notes += other.notes.len();
            }
        }
        counts
    }

    pub fn print(&self) {
        println!(
            "{} courses ({} with prerequisites), {} prerequisite statements, {} sessions, {} notes.",
            self.courses, self.with_prerequisites, self.prerequisites, self.sessions, self.notes,
        );
    }
}

// ── Tests ──
