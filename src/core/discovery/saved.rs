//! Bookmarked courses

use serde::{Deserialize, Serialize};

/// Set of saved course ids, kept in the order they were saved
///
/// Serializes as a plain JSON array of ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SavedCourses {
    ids: Vec<String>,
}

impl From<Vec<String>> for SavedCourses {
    /// Duplicate ids in stored data are dropped, keeping the first occurrence
    fn from(raw: Vec<String>) -> Self {
        let mut saved = Self::default();
        for id in raw {
            if !saved.contains(&id) {
                saved.ids.push(id);
            }
        }
        saved
    }
}

impl From<SavedCourses> for Vec<String> {
    fn from(saved: SavedCourses) -> Self {
        saved.ids
    }
}

impl SavedCourses {
    /// Add `id` if absent, remove it if present. Returns `true` when it is now saved.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Whether `id` is saved
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Saved ids in save order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of saved courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
