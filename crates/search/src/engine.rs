use regex::{NoExpand, Regex, RegexBuilder};

use crate::matcher::SearchMatch;

/// Compiles the query and enumerates occurrences over a buffer snapshot.
///
/// Queries are plain substrings: every character is matched literally
/// (metacharacters are escaped before compilation) and matching is always
/// case-insensitive.
pub struct SearchEngine {
    query: String,
    compiled: Option<Regex>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            compiled: None,
        }
    }

    pub fn set_query(&mut self, query: &str) {
        if query == self.query {
            return;
        }

        self.query = query.to_string();

        if query.is_empty() {
            self.compiled = None;
            return;
        }

        // An escaped literal always compiles; a failure (e.g. the size limit)
        // degrades to "no pattern" rather than an error.
        self.compiled = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_query(&self) -> bool {
        self.compiled.is_some()
    }

    /// Every non-overlapping occurrence of the query, left to right, as
    /// half-open character offsets. The scan resumes after the end of each
    /// match, so overlapping candidates are not counted twice.
    pub fn find_all(&self, text: &str) -> Vec<SearchMatch> {
        let Some(regex) = &self.compiled else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut char_offset = 0;
        let mut scanned = 0;

        for m in regex.find_iter(text) {
            char_offset += text[scanned..m.start()].chars().count();
            let len = m.as_str().chars().count();
            matches.push(SearchMatch::new(char_offset, char_offset + len));
            char_offset += len;
            scanned = m.end();
        }

        matches
    }

    /// Substitutes every occurrence in one pass. The replacement is inserted
    /// verbatim, so text it happens to share with the query is never
    /// re-matched.
    pub fn replace_all(&self, text: &str, replacement: &str) -> Option<String> {
        let regex = self.compiled.as_ref()?;
        Some(regex.replace_all(text, NoExpand(replacement)).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_search() {
        let mut engine = SearchEngine::new();
        engine.set_query("hello");

        let matches = engine.find_all("hello world, hello!");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].start, 0);
        assert_eq!(matches[0].end, 5);
        assert_eq!(matches[1].start, 13);
        assert_eq!(matches[1].end, 18);
    }

    #[test]
    fn test_case_insensitive() {
        let mut engine = SearchEngine::new();
        engine.set_query("HELLO");

        let matches = engine.find_all("Hello World");
        assert_eq!(matches.len(), 1);

        let matches = engine.find_all("hElLo hello HELLO");
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let mut engine = SearchEngine::new();
        engine.set_query("a.b");

        // Should NOT match "axb"
        assert!(engine.find_all("xaxby").is_empty());

        let matches = engine.find_all("xa.by");
        assert_eq!(matches, vec![SearchMatch::new(1, 4)]);

        engine.set_query("(1+2)*$3");
        assert_eq!(engine.find_all("= (1+2)*$3").len(), 1);
    }

    #[test]
    fn test_non_overlapping_tiling() {
        let mut engine = SearchEngine::new();
        engine.set_query("aa");

        // "aaa" holds two overlapping candidates but only one tiling
        let matches = engine.find_all("aaa");
        assert_eq!(matches, vec![SearchMatch::new(0, 2)]);

        let matches = engine.find_all("aaaa");
        assert_eq!(
            matches,
            vec![SearchMatch::new(0, 2), SearchMatch::new(2, 4)]
        );
    }

    #[test]
    fn test_empty_query() {
        let mut engine = SearchEngine::new();
        engine.set_query("");

        assert!(!engine.has_query());
        assert!(engine.find_all("anything").is_empty());
        assert!(engine.replace_all("anything", "x").is_none());
    }

    #[test]
    fn test_char_offsets_past_multibyte() {
        let mut engine = SearchEngine::new();
        engine.set_query("at");

        // The emoji is one character but four bytes; offsets stay in chars.
        let matches = engine.find_all("\u{1F600} cat");
        assert_eq!(matches, vec![SearchMatch::new(3, 5)]);
    }

    #[test]
    fn test_replace_all_verbatim() {
        let mut engine = SearchEngine::new();
        engine.set_query("foo");

        let replaced = engine.replace_all("foo foo", "barfoo").unwrap();
        assert_eq!(replaced, "barfoo barfoo");

        // "$0" must land in the output untouched, not as a capture reference.
        let replaced = engine.replace_all("foo", "$0x").unwrap();
        assert_eq!(replaced, "$0x");
    }
}
