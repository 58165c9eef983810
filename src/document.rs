use std::path::{Path, PathBuf};

const UNTITLED_NAME: &str = "New File";

/// The open document: full text plus one cursor/selection range, addressed
/// in character offsets throughout. The search engine receives this text as
/// a snapshot and hands whole-buffer rewrites back; it never reaches into
/// the document directly.
pub struct Document {
    text: String,
    /// Selection head (where the cursor blinks).
    cursor: usize,
    /// Selection anchor; equal to `cursor` when the selection is collapsed.
    anchor: usize,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            anchor: 0,
            path: None,
            dirty: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// File name for the title bar and save dialogs.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED_NAME.to_string())
    }

    /// Window title, with a bullet marking unsaved changes.
    pub fn title(&self) -> String {
        let unsaved = if self.dirty { "\u{2022} " } else { "" };
        format!("{}Jot - {}", unsaved, self.display_name())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Selection as an ordered half-open range; collapsed when empty.
    pub fn selection(&self) -> (usize, usize) {
        (self.cursor.min(self.anchor), self.cursor.max(self.anchor))
    }

    pub fn has_selection(&self) -> bool {
        self.cursor != self.anchor
    }

    pub fn set_cursor(&mut self, offset: usize) {
        let offset = offset.min(self.char_len());
        self.cursor = offset;
        self.anchor = offset;
    }

    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        self.anchor = start.min(len);
        self.cursor = end.min(len);
    }

    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.char_len();
    }

    // ── Loading and saving ───────────────────────────────────────────────

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn open(&mut self, path: PathBuf, text: String) {
        self.text = text;
        self.path = Some(path);
        self.cursor = 0;
        self.anchor = 0;
        self.dirty = false;
    }

    pub fn saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }

    /// Commit a whole-buffer rewrite from a replace operation, collapsing
    /// the selection to the offset the engine asked for.
    pub fn commit_replace(&mut self, text: String, cursor: usize) {
        self.text = text;
        self.dirty = true;
        self.set_cursor(cursor);
    }

    // ── Editing ──────────────────────────────────────────────────────────

    pub fn insert(&mut self, s: &str) {
        let (start, end) = self.selection();
        self.splice(start, end, s);
        self.set_cursor(start + s.chars().count());
    }

    pub fn backspace(&mut self) {
        if self.has_selection() {
            let (start, end) = self.selection();
            self.splice(start, end, "");
            self.set_cursor(start);
        } else if self.cursor > 0 {
            self.splice(self.cursor - 1, self.cursor, "");
            self.set_cursor(self.cursor - 1);
        }
    }

    pub fn delete(&mut self) {
        if self.has_selection() {
            let (start, end) = self.selection();
            self.splice(start, end, "");
            self.set_cursor(start);
        } else if self.cursor < self.char_len() {
            self.splice(self.cursor, self.cursor + 1, "");
        }
    }

    fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        let start_byte = char_to_byte(&self.text, start);
        let end_byte = char_to_byte(&self.text, end);
        self.text.replace_range(start_byte..end_byte, replacement);
        self.dirty = true;
    }

    // ── Cursor movement ──────────────────────────────────────────────────

    pub fn move_left(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            let (start, _) = self.selection();
            self.set_cursor(start);
            return;
        }
        let target = self.cursor.saturating_sub(1);
        self.move_cursor_to(target, extend);
    }

    pub fn move_right(&mut self, extend: bool) {
        if !extend && self.has_selection() {
            let (_, end) = self.selection();
            self.set_cursor(end);
            return;
        }
        let target = (self.cursor + 1).min(self.char_len());
        self.move_cursor_to(target, extend);
    }

    pub fn move_up(&mut self, extend: bool) {
        let (line, col) = self.line_col(self.cursor);
        let target = if line == 0 {
            0
        } else {
            self.offset_at(line - 1, col)
        };
        self.move_cursor_to(target, extend);
    }

    pub fn move_down(&mut self, extend: bool) {
        let (line, col) = self.line_col(self.cursor);
        let target = if line + 1 >= self.line_count() {
            self.char_len()
        } else {
            self.offset_at(line + 1, col)
        };
        self.move_cursor_to(target, extend);
    }

    pub fn move_home(&mut self, extend: bool) {
        let (line, _) = self.line_col(self.cursor);
        let target = self.offset_at(line, 0);
        self.move_cursor_to(target, extend);
    }

    pub fn move_end(&mut self, extend: bool) {
        let (line, _) = self.line_col(self.cursor);
        let target = self.offset_at(line, usize::MAX);
        self.move_cursor_to(target, extend);
    }

    fn move_cursor_to(&mut self, offset: usize, extend: bool) {
        self.cursor = offset.min(self.char_len());
        if !extend {
            self.anchor = self.cursor;
        }
    }

    // ── Line geometry ────────────────────────────────────────────────────

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// (line, column) of a character offset, both 0-based.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for (i, ch) in self.text.chars().enumerate() {
            if i >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Character offset of (line, column); the column clamps to line length.
    pub fn offset_at(&self, line: usize, col: usize) -> usize {
        let mut offset = 0;
        for (i, text) in self.text.split('\n').enumerate() {
            let len = text.chars().count();
            if i == line {
                return offset + col.min(len);
            }
            offset += len + 1;
        }
        self.char_len()
    }
}

pub(crate) fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_edit() {
        let mut doc = Document::new();
        doc.insert("hello");
        assert_eq!(doc.text(), "hello");
        assert_eq!(doc.cursor(), 5);
        assert!(doc.is_dirty());

        doc.backspace();
        assert_eq!(doc.text(), "hell");

        doc.set_cursor(0);
        doc.delete();
        assert_eq!(doc.text(), "ell");
    }

    #[test]
    fn insert_replaces_selection() {
        let mut doc = Document::new();
        doc.insert("hello world");
        doc.set_selection(0, 5);
        doc.insert("goodbye");
        assert_eq!(doc.text(), "goodbye world");
        assert_eq!(doc.cursor(), 7);
        assert!(!doc.has_selection());
    }

    #[test]
    fn backspace_removes_selection() {
        let mut doc = Document::new();
        doc.insert("abcdef");
        doc.set_selection(1, 4);
        doc.backspace();
        assert_eq!(doc.text(), "aef");
        assert_eq!(doc.cursor(), 1);
    }

    #[test]
    fn title_tracks_dirty_state_and_name() {
        let mut doc = Document::new();
        assert_eq!(doc.title(), "Jot - New File");

        doc.insert("x");
        assert_eq!(doc.title(), "\u{2022} Jot - New File");

        doc.saved(PathBuf::from("/tmp/notes.txt"));
        assert_eq!(doc.title(), "Jot - notes.txt");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn open_resets_cursor_and_dirty() {
        let mut doc = Document::new();
        doc.insert("old");
        doc.open(PathBuf::from("a.txt"), "new contents".to_string());
        assert_eq!(doc.text(), "new contents");
        assert_eq!(doc.cursor(), 0);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn vertical_movement_clamps_column() {
        let mut doc = Document::new();
        doc.insert("long line here\nab\nanother line");

        doc.set_cursor(10); // col 10 on line 0
        doc.move_down(false);
        let (line, col) = doc.line_col(doc.cursor());
        assert_eq!((line, col), (1, 2)); // clamped to end of "ab"

        doc.move_down(false);
        let (line, col) = doc.line_col(doc.cursor());
        assert_eq!((line, col), (2, 2));
    }

    #[test]
    fn home_and_end() {
        let mut doc = Document::new();
        doc.insert("one\ntwo three");
        doc.move_home(false);
        let (line, col) = doc.line_col(doc.cursor());
        assert_eq!((line, col), (1, 0));

        doc.move_end(false);
        let (line, col) = doc.line_col(doc.cursor());
        assert_eq!((line, col), (1, 9));
    }

    #[test]
    fn shift_movement_extends_selection() {
        let mut doc = Document::new();
        doc.insert("abcdef");
        doc.set_cursor(2);
        doc.move_right(true);
        doc.move_right(true);
        assert_eq!(doc.selection(), (2, 4));

        // Plain movement collapses to the selection edge
        doc.move_left(false);
        assert_eq!(doc.selection(), (2, 2));
    }

    #[test]
    fn select_all_spans_the_buffer() {
        let mut doc = Document::new();
        doc.insert("one\ntwo");
        doc.select_all();
        assert_eq!(doc.selection(), (0, 7));

        doc.insert("z");
        assert_eq!(doc.text(), "z");
    }

    #[test]
    fn line_count_matches_newlines() {
        let mut doc = Document::new();
        assert_eq!(doc.line_count(), 1);
        doc.insert("a\nb\nc");
        assert_eq!(doc.line_count(), 3);
        doc.insert("\n");
        assert_eq!(doc.line_count(), 4);
    }

    #[test]
    fn commit_replace_marks_dirty_and_collapses() {
        let mut doc = Document::new();
        doc.open(PathBuf::from("a.txt"), "say aaa".to_string());
        doc.commit_replace("say bb".to_string(), 6);
        assert_eq!(doc.text(), "say bb");
        assert_eq!(doc.cursor(), 6);
        assert!(!doc.has_selection());
        assert!(doc.is_dirty());
    }

    #[test]
    fn multibyte_text_splices_by_chars() {
        let mut doc = Document::new();
        doc.insert("\u{1F600}abc");
        doc.set_selection(1, 3);
        doc.insert("Z");
        assert_eq!(doc.text(), "\u{1F600}Zc");
        assert_eq!(doc.cursor(), 2);
    }
}
