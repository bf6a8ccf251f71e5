use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{CatalogError, Result};

pub const DEFAULT_INPUT: &str = "data/course-catalog-scraper-2025-10-24.json";
pub const DEFAULT_OUTPUT: &str = "data/UMASS_BOSTON_coursecatalogstructured.json";
pub const DEFAULT_FILTERED_OUTPUT: &str = "data/UMASS_BOSTON_CS_courses.json";
pub const DEFAULT_DEPARTMENT: &str = "CS";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub input: String,
    pub output: String,
    pub filtered_output: String,
    pub department: String,
}

impl Settings {
    /// Defaults, then `catalog.toml` if present, then `CATALOG_*` env vars.
    pub fn load() -> Result<Self> {
        let settings: Settings = Self::builder()?
            .add_source(File::with_name("catalog").required(false))
            .add_source(Environment::with_prefix("CATALOG"))
            .build()?
            .try_deserialize()?;
        settings.validated()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default("filtered_output", DEFAULT_FILTERED_OUTPUT)?
            .set_default("department", DEFAULT_DEPARTMENT)?)
    }

    pub fn validated(self) -> Result<Self> {
        if self.department.trim().is_empty() {
            return Err(CatalogError::Config("department prefix must not be empty".into()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s: Settings = Settings::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.input, DEFAULT_INPUT);
        assert_eq!(s.output, DEFAULT_OUTPUT);
        assert_eq!(s.filtered_output, DEFAULT_FILTERED_OUTPUT);
        assert_eq!(s.department, "CS");
    }

    #[test]
    fn overrides_apply() {
        let s: Settings = Settings::builder()
            .unwrap()
            .set_override("department", "MATH")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.department, "MATH");
    }

    #[test]
    fn empty_department_rejected() {
        let s = Settings {
            input: DEFAULT_INPUT.into(),
            output: DEFAULT_OUTPUT.into(),
            filtered_output: DEFAULT_FILTERED_OUTPUT.into(),
            department: "  ".into(),
        };
        assert!(matches!(s.validated(), Err(CatalogError::Config(_))));
    }
}
