//! Bounded comparison tray

/// Maximum courses compared side by side when nothing else is configured
pub const DEFAULT_COMPARE_LIMIT: usize = 3;

/// Result of toggling a course in the comparison tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    /// The course was appended
    Added,
    /// The course was already present and has been removed
    Removed,
    /// The tray is full; nothing changed
    Rejected {
        /// Capacity of the tray
        limit: usize,
    },
}

/// Ordered list of course ids selected for comparison, never longer than its limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSet {
    ids: Vec<String>,
    limit: usize,
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::with_limit(DEFAULT_COMPARE_LIMIT)
    }
}

impl ComparisonSet {
    /// Empty tray holding at most `limit` courses (at least one)
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            ids: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Remove `id` if present, otherwise append it when there is room
    pub fn toggle(&mut self, id: &str) -> CompareToggle {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            CompareToggle::Removed
        } else if self.is_full() {
            CompareToggle::Rejected { limit: self.limit }
        } else {
            self.ids.push(id.to_string());
            CompareToggle::Added
        }
    }

    /// Empty the tray
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether `id` is selected
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Selected ids in selection order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of selected courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether another course would be rejected
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.limit
    }

    /// Capacity of the tray
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ComparisonSet {
        let mut set = ComparisonSet::default();
        for id in ["a", "b", "c"] {
            assert_eq!(set.toggle(id), CompareToggle::Added);
        }
        set
    }

    #[test]
    fn test_fourth_course_is_rejected() {
        let mut set = full();
        let before = set.clone();
        assert_eq!(set.toggle("d"), CompareToggle::Rejected { limit: 3 });
        assert_eq!(set, before);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_toggle_existing_removes() {
        let mut set = full();
        assert_eq!(set.toggle("b"), CompareToggle::Removed);
        assert_eq!(set.ids(), ["a", "c"]);
        assert_eq!(set.toggle("d"), CompareToggle::Added);
        assert_eq!(set.ids(), ["a", "c", "d"]);
    }

    #[test]
    fn test_removal_allowed_when_full() {
        let mut set = full();
        assert!(set.is_full());
        assert_eq!(set.toggle("a"), CompareToggle::Removed);
        assert!(!set.is_full());
    }

    #[test]
    fn test_clear() {
        let mut set = full();
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let mut set = ComparisonSet::with_limit(0);
        assert_eq!(set.limit(), 1);
        assert_eq!(set.toggle("a"), CompareToggle::Added);
        assert_eq!(set.toggle("b"), CompareToggle::Rejected { limit: 1 });
    }
}
