//! Course catalog model

use super::Course;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Built-in sample catalog
const SAMPLE_CATALOG: &str = include_str!("../../assets/sample_catalog.json");

/// Errors raised while building or loading a catalog
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    Io(std::io::Error),
    /// The catalog JSON is malformed or doesn't match the course schema
    Parse(serde_json::Error),
    /// Two courses share the same id
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read catalog: {e}"),
            Self::Parse(e) => write!(f, "invalid catalog JSON: {e}"),
            Self::DuplicateId(id) => write!(f, "duplicate course id in catalog: '{id}'"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Ordered, read-only list of courses with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] if two courses share an id.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
        }
        Ok(Self { courses })
    }

    /// Parse a catalog from a JSON array of courses
    ///
    /// # Errors
    /// Returns an error if the JSON is invalid or ids repeat.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::new(courses)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The built-in sample catalog (nine courses, five of them SIYB)
    ///
    /// # Panics
    /// Panics if the embedded sample is invalid; it is compiled in and covered by tests.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_json(SAMPLE_CATALOG).expect("Failed to parse compiled-in sample catalog")
    }

    /// All courses in catalog order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Whether a course with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Lowest and highest price across the catalog; `(0, 0)` when empty
    #[must_use]
    pub fn price_bounds(&self) -> (u32, u32) {
        let min = self.courses.iter().map(|c| c.price).min();
        let max = self.courses.iter().map(|c| c.price).max();
        min.zip(max).unwrap_or((0, 0))
    }

    /// Distinct duration strings in first-seen order
    #[must_use]
    pub fn durations(&self) -> Vec<&str> {
        let mut durations: Vec<&str> = Vec::new();
        for course in &self.courses {
            if !durations.contains(&course.duration.as_str()) {
                durations.push(&course.duration);
            }
        }
        durations
    }
}
