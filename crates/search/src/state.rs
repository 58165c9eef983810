use crate::engine::SearchEngine;
use crate::matcher::{SearchMatch, SearchResults};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// A whole-buffer rewrite produced by a replace operation. The caller owns
/// committing it: swap in `text`, collapse the selection to `cursor`, and
/// mark the document modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub text: String,
    pub cursor: usize,
}

/// Manages the search session lifecycle.
///
/// The buffer is passed in as a snapshot on every call and handed back by
/// value from the replace operations; no reference is held across calls.
/// Match sets are recomputed from scratch on every query change and after
/// every replace, never patched incrementally.
pub struct SearchState {
    engine: SearchEngine,
    results: SearchResults,
    last_query: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            engine: SearchEngine::new(),
            results: SearchResults::new(),
            last_query: None,
        }
    }

    /// Get current search results
    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Status line for the host UI: "3 of 7" or "No results".
    pub fn status_label(&self) -> String {
        match self.results.position() {
            Some((current, total)) => format!("{} of {}", current, total),
            None => "No results".to_string(),
        }
    }

    /// Clear results, e.g. when the find bar closes.
    pub fn clear(&mut self) {
        self.engine.set_query("");
        self.results = SearchResults::new();
    }

    /// Re-scan `text` for `query` and move the current match.
    ///
    /// A query that differs from the previous call's anchors at the first
    /// match at or after `cursor` (wrapping to the first in the buffer); an
    /// unchanged query steps the current match cyclically in `direction`.
    /// Returns the current match so the caller can move the selection onto
    /// it when the interaction asks for a jump.
    pub fn search(
        &mut self,
        text: &str,
        cursor: usize,
        query: &str,
        direction: Direction,
    ) -> Option<SearchMatch> {
        self.engine.set_query(query);

        if !self.engine.has_query() {
            self.results = SearchResults::new();
            return None;
        }

        let query_changed = self.last_query.as_deref() != Some(query);
        let carried = if query_changed {
            None
        } else {
            self.results.current_index()
        };

        self.results = SearchResults::from_matches(self.engine.find_all(text));
        if self.results.is_empty() {
            return None;
        }

        if query_changed {
            self.results.anchor_to(cursor);
        } else {
            self.results.restore(carried);
            match direction {
                Direction::Forward => self.results.next(),
                Direction::Backward => self.results.previous(),
            };
        }

        self.last_query = Some(query.to_string());
        self.results.current().copied()
    }

    /// Replace the text under the current match, leaving everything outside
    /// its span untouched. No current match is a no-op, not an error.
    ///
    /// The returned cursor sits immediately after the inserted replacement.
    /// The remembered query is dropped so that the caller's follow-up
    /// `search` re-anchors against the rewritten buffer instead of stepping
    /// stale offsets.
    pub fn replace_one(&mut self, text: &str, replacement: &str) -> Option<Splice> {
        let m = *self.results.current()?;

        let start = char_to_byte(text, m.start);
        let end = char_to_byte(text, m.end);

        let mut new_text = String::with_capacity(text.len() - (end - start) + replacement.len());
        new_text.push_str(&text[..start]);
        new_text.push_str(replacement);
        new_text.push_str(&text[end..]);

        self.results = SearchResults::new();
        self.last_query = None;

        Some(Splice {
            text: new_text,
            cursor: m.start + replacement.chars().count(),
        })
    }

    /// Replace every occurrence in one bulk rewrite and conclude the search.
    ///
    /// Returns the new text and the number of occurrences replaced (the size
    /// of the match set going in). A session with no matches is a no-op.
    pub fn replace_all(&mut self, text: &str, replacement: &str) -> Option<(String, usize)> {
        if self.results.is_empty() {
            return None;
        }

        let count = self.results.count();
        let new_text = self.engine.replace_all(text, replacement)?;
        self.results = SearchResults::new();

        Some((new_text, count))
    }
}

fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_yields_no_results() {
        let mut state = SearchState::new();
        assert!(state.search("some text", 0, "", Direction::Forward).is_none());
        assert!(state.results().is_empty());
        assert_eq!(state.status_label(), "No results");
    }

    #[test]
    fn test_fresh_query_anchors_at_cursor() {
        let mut state = SearchState::new();
        let text = "abc abc abc";

        // Cursor past the first occurrence: the second becomes current.
        let m = state.search(text, 2, "abc", Direction::Forward).unwrap();
        assert_eq!((m.start, m.end), (4, 7));
        assert_eq!(state.status_label(), "2 of 3");
    }

    #[test]
    fn test_fresh_query_wraps_when_cursor_past_all() {
        let mut state = SearchState::new();
        let text = "abc abc";

        let m = state.search(text, 6, "abc", Direction::Forward).unwrap();
        assert_eq!(m.start, 0);
        assert_eq!(state.status_label(), "1 of 2");
    }

    #[test]
    fn test_repeated_query_cycles() {
        let mut state = SearchState::new();
        let text = "x x x";

        state.search(text, 0, "x", Direction::Forward);
        assert_eq!(state.status_label(), "1 of 3");

        state.search(text, 0, "x", Direction::Forward);
        state.search(text, 0, "x", Direction::Forward);
        assert_eq!(state.status_label(), "3 of 3");

        // Full cycle returns to the first match
        state.search(text, 0, "x", Direction::Forward);
        assert_eq!(state.status_label(), "1 of 3");

        state.search(text, 0, "x", Direction::Backward);
        assert_eq!(state.status_label(), "3 of 3");
    }

    #[test]
    fn test_changing_query_re_anchors() {
        let mut state = SearchState::new();
        let text = "foo bar foo bar";

        state.search(text, 0, "foo", Direction::Forward);
        state.search(text, 0, "foo", Direction::Forward);
        assert_eq!(state.status_label(), "2 of 2");

        // New query starts over from the cursor, not from the old index.
        let m = state.search(text, 0, "bar", Direction::Forward).unwrap();
        assert_eq!(m.start, 4);
        assert_eq!(state.status_label(), "1 of 2");
    }

    #[test]
    fn test_no_match_query_keeps_remembered_query() {
        let mut state = SearchState::new();
        let text = "abc abc";

        state.search(text, 0, "abc", Direction::Forward);
        assert_eq!(state.status_label(), "1 of 2");

        // A miss clears the results but not the remembered query, so
        // re-searching the old query steps again from the start.
        assert!(state.search(text, 0, "zzz", Direction::Forward).is_none());
        assert_eq!(state.status_label(), "No results");

        state.search(text, 0, "abc", Direction::Forward);
        assert_eq!(state.status_label(), "1 of 2");
    }

    #[test]
    fn test_replace_one_splices_and_re_anchors_cursor() {
        let mut state = SearchState::new();
        let text = "say aaa then aaa";

        state.search(text, 0, "aaa", Direction::Forward);
        let splice = state.replace_one(text, "bb").unwrap();

        assert_eq!(splice.text, "say bb then aaa");
        assert_eq!(splice.cursor, 6); // just past the inserted "bb"
        assert!(state.results().is_empty());

        // The follow-up search anchors against the new text, treating the
        // query as fresh, and lands on the remaining occurrence.
        let m = state
            .search(&splice.text, splice.cursor, "aaa", Direction::Forward)
            .unwrap();
        assert_eq!((m.start, m.end), (12, 15));
        assert_eq!(state.status_label(), "1 of 1");
    }

    #[test]
    fn test_replace_one_without_current_is_noop() {
        let mut state = SearchState::new();
        assert!(state.replace_one("text", "x").is_none());

        state.search("text", 0, "zzz", Direction::Forward);
        assert!(state.replace_one("text", "x").is_none());
    }

    #[test]
    fn test_replace_one_with_multibyte_prefix() {
        let mut state = SearchState::new();
        let text = "\u{1F600}\u{1F600} cat";

        state.search(text, 0, "cat", Direction::Forward);
        let splice = state.replace_one(text, "dog").unwrap();
        assert_eq!(splice.text, "\u{1F600}\u{1F600} dog");
        assert_eq!(splice.cursor, 6);
    }

    #[test]
    fn test_replace_all_is_single_pass() {
        let mut state = SearchState::new();
        let text = "foo foo";

        state.search(text, 0, "foo", Direction::Forward);
        // The replacement contains the query; a naive re-scan would loop.
        let (new_text, count) = state.replace_all(text, "barfoo").unwrap();

        assert_eq!(new_text, "barfoo barfoo");
        assert_eq!(count, 2);
        assert!(state.results().is_empty());
        assert_eq!(state.status_label(), "No results");
    }

    #[test]
    fn test_replace_all_without_matches_is_noop() {
        let mut state = SearchState::new();
        assert!(state.replace_all("text", "x").is_none());

        state.search("text", 0, "zzz", Direction::Forward);
        assert!(state.replace_all("text", "x").is_none());
    }

    #[test]
    fn test_replace_all_case_insensitive() {
        let mut state = SearchState::new();
        let text = "Cat cat CAT";

        state.search(text, 0, "cat", Direction::Forward);
        let (new_text, count) = state.replace_all(text, "dog").unwrap();
        assert_eq!(new_text, "dog dog dog");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut state = SearchState::new();
        let text = "the cat sat on the mat";

        let m = state.search(text, 0, "at", Direction::Forward).unwrap();
        let spans: Vec<(usize, usize)> = state
            .results()
            .matches()
            .iter()
            .map(|m| (m.start, m.end))
            .collect();
        assert_eq!(spans, vec![(5, 7), (9, 11), (20, 22)]);

        // Cursor at 0 anchors on the first match.
        assert_eq!((m.start, m.end), (5, 7));
        assert_eq!(state.status_label(), "1 of 3");

        // Each slice matches the query regardless of case.
        for (start, end) in spans {
            assert!(text[start..end].eq_ignore_ascii_case("at"));
        }

        let (new_text, count) = state.replace_all(text, "og").unwrap();
        assert_eq!(new_text, "the cog sog on the mog");
        assert_eq!(count, 3);
    }
}
