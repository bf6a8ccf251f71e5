use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One normalized course, institution-agnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCourseRecord {
    pub coursename: Option<String>,
    pub courseid: Option<String>,
    pub coursedescription: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub other: Option<OtherBundle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherBundle {
    /// Extra descriptor fields, cleaned, in scraper order.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub descriptors: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sessions: Vec<SessionSummary>,
}

impl OtherBundle {
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty() && self.notes.is_empty() && self.sessions.is_empty()
    }

    /// None when there is nothing to carry.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// Canonical per-section fields; only keys with text are serialized,
/// always in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_prerequisites: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_attributes: Option<String>,
}

impl SessionSummary {
    pub fn is_empty(&self) -> bool {
        *self == SessionSummary::default()
    }
}
