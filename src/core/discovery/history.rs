//! Recent search terms

/// Search terms remembered when nothing else is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Most recent distinct search terms, newest first
///
/// A term that is already remembered keeps its position when searched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    terms: Vec<String>,
    limit: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl SearchHistory {
    /// Empty history holding at most `limit` terms (at least one)
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            terms: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// History seeded from stored terms, keeping the first `limit` distinct non-empty ones
    #[must_use]
    pub fn from_terms(terms: Vec<String>, limit: usize) -> Self {
        let mut history = Self::with_limit(limit);
        for term in terms {
            let term = term.trim();
            if !term.is_empty() && !history.contains(term) && history.terms.len() < history.limit {
                history.terms.push(term.to_string());
            }
        }
        history
    }

    /// Remember a submitted search. Returns `true` if the history changed.
    ///
    /// Blank and already-remembered terms are ignored. New terms go to the
    /// front and the oldest entry is dropped once the limit is exceeded.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() || self.contains(term) {
            return false;
        }
        self.terms.insert(0, term.to_string());
        self.terms.truncate(self.limit);
        true
    }

    /// Forget every term. Returns `true` if anything was removed.
    pub fn clear(&mut self) -> bool {
        let had_terms = !self.terms.is_empty();
        self.terms.clear();
        had_terms
    }

    /// Whether `term` is remembered (exact match)
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    /// Remembered terms, newest first
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of remembered terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether nothing is remembered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
