/// A single occurrence of the query, as half-open character offsets into the
/// buffer snapshot the matches were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub start: usize,
    pub end: usize,
}

impl SearchMatch {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// An ordered, non-overlapping set of matches with one of them current.
///
/// `current` is `None` exactly when the set is empty; "no current match" is
/// never conflated with index 0. The set is replaced wholesale whenever the
/// query or the buffer changes, never patched in place.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    matches: Vec<SearchMatch>,
    current: Option<usize>,
}

impl SearchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: Vec<SearchMatch>) -> Self {
        Self {
            matches,
            current: None,
        }
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn current(&self) -> Option<&SearchMatch> {
        self.current.and_then(|i| self.matches.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// 1-based position of the current match, for "3 of 7" style labels.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current.map(|i| (i + 1, self.matches.len()))
    }

    pub fn next(&mut self) -> Option<&SearchMatch> {
        if self.matches.is_empty() {
            return None;
        }
        let next_index = match self.current {
            Some(i) => (i + 1) % self.matches.len(),
            None => 0,
        };
        self.current = Some(next_index);
        self.matches.get(next_index)
    }

    pub fn previous(&mut self) -> Option<&SearchMatch> {
        if self.matches.is_empty() {
            return None;
        }
        let prev_index = match self.current {
            Some(0) | None => self.matches.len() - 1,
            Some(i) => i - 1,
        };
        self.current = Some(prev_index);
        self.matches.get(prev_index)
    }

    /// Makes current the first match at or after `cursor`, wrapping to the
    /// first match in the buffer when none qualifies.
    pub fn anchor_to(&mut self, cursor: usize) -> Option<&SearchMatch> {
        if self.matches.is_empty() {
            return None;
        }

        let index = self
            .matches
            .iter()
            .position(|m| m.start >= cursor)
            .unwrap_or(0);

        self.current = Some(index);
        self.matches.get(index)
    }

    /// Carries a current index over from a superseded set; out-of-range
    /// indices are dropped rather than clamped.
    pub(crate) fn restore(&mut self, index: Option<usize>) {
        self.current = index.filter(|&i| i < self.matches.len());
    }

    pub fn is_current_match(&self, offset: usize) -> bool {
        self.current()
            .map(|m| m.contains(offset))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Vec<SearchMatch> {
        vec![
            SearchMatch::new(0, 5),
            SearchMatch::new(10, 15),
            SearchMatch::new(25, 30),
        ]
    }

    #[test]
    fn test_search_match_contains() {
        let m = SearchMatch::new(10, 15);
        assert!(m.contains(10));
        assert!(m.contains(14));
        assert!(!m.contains(15));
        assert!(!m.contains(9));
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn test_empty_results() {
        let mut results = SearchResults::new();
        assert!(results.is_empty());
        assert_eq!(results.count(), 0);
        assert!(results.current().is_none());
        assert!(results.position().is_none());
        assert!(results.next().is_none());
        assert!(results.previous().is_none());
        assert!(results.anchor_to(0).is_none());
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut results = SearchResults::from_matches(three());

        assert_eq!(results.next().unwrap().start, 0);
        assert_eq!(results.position(), Some((1, 3)));

        results.next();
        results.next();
        assert_eq!(results.position(), Some((3, 3)));

        // Forward past the last match wraps to the first
        results.next();
        assert_eq!(results.position(), Some((1, 3)));

        // Backward from the first wraps to the last
        results.previous();
        assert_eq!(results.position(), Some((3, 3)));
    }

    #[test]
    fn test_previous_from_none_selects_last() {
        let mut results = SearchResults::from_matches(three());
        assert_eq!(results.previous().unwrap().start, 25);
    }

    #[test]
    fn test_anchor_to_cursor() {
        let mut results = SearchResults::from_matches(three());

        assert_eq!(results.anchor_to(0).unwrap().start, 0);
        assert_eq!(results.anchor_to(1).unwrap().start, 10);
        assert_eq!(results.anchor_to(10).unwrap().start, 10);
        assert_eq!(results.anchor_to(26).unwrap().start, 0); // wraps
    }

    #[test]
    fn test_restore_drops_out_of_range() {
        let mut results = SearchResults::from_matches(three());
        results.restore(Some(2));
        assert_eq!(results.current_index(), Some(2));

        results.restore(Some(3));
        assert_eq!(results.current_index(), None);
    }
}
