//! Suggestion list shown to the user for selection.
//!
//! Only the first `limit` matches are kept; the list remembers whether the
//! index had more so a front-end can say so.

/// A bounded, ordered list of suggested words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    /// Suggestions in display order
    candidates: Vec<String>,

    /// Whether the index had more matches than were kept
    truncated: bool,
}

impl CandidateList {
    /// Create a new empty candidate list.
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            truncated: false,
        }
    }

    /// Keep at most `limit` of `matches`, in their original order.
    pub fn from_matches<I>(matches: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut iter = matches.into_iter();
        let candidates: Vec<String> = iter.by_ref().take(limit).collect();
        let truncated = iter.next().is_some();
        Self {
            candidates,
            truncated,
        }
    }

    /// Get all candidates.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Get the total number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True when matches beyond the limit were dropped.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Select a candidate by its 0-based display index.
    pub fn select_by_index(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(String::as_str)
    }

    /// Clear the candidate list.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.truncated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_matches_within_limit() {
        let list = CandidateList::from_matches(words(&["car", "cart"]), 5);
        assert_eq!(list.len(), 2);
        assert!(!list.is_truncated());
        assert_eq!(list.select_by_index(1), Some("cart"));
        assert_eq!(list.select_by_index(2), None);
    }

    #[test]
    fn test_from_matches_truncates() {
        let list = CandidateList::from_matches(words(&["a", "b", "c", "d"]), 3);
        assert_eq!(list.candidates(), &["a", "b", "c"]);
        assert!(list.is_truncated());
    }

    #[test]
    fn test_exact_limit_is_not_truncated() {
        let list = CandidateList::from_matches(words(&["a", "b"]), 2);
        assert!(!list.is_truncated());
    }

    #[test]
    fn test_clear() {
        let mut list = CandidateList::from_matches(words(&["a", "b"]), 1);
        list.clear();
        assert!(list.is_empty());
        assert!(!list.is_truncated());
    }
}
