use jot_search::Direction;

use super::{EditorView, FindFocus};

impl EditorView {
    pub(super) fn open_search(&mut self, with_replace: bool) {
        self.search_open = true;
        self.replace_open = with_replace;
        self.find_focus = FindFocus::Find;

        // Re-run the previous query, if any, against the current buffer.
        if !self.find_input.is_empty() {
            self.on_query_changed();
        }
    }

    pub(super) fn close_search(&mut self) {
        self.search_open = false;
        self.replace_open = false;
        self.search.clear();
        self.search_label.clear();
    }

    pub(super) fn toggle_find_focus(&mut self) {
        self.find_focus = match self.find_focus {
            FindFocus::Find => FindFocus::Replace,
            FindFocus::Replace => FindFocus::Find,
        };
    }

    pub(super) fn focused_input_mut(&mut self) -> &mut super::InputField {
        match self.find_focus {
            FindFocus::Find => &mut self.find_input,
            FindFocus::Replace => &mut self.replace_input,
        }
    }

    /// Called on every keystroke in the find field: rescan without moving
    /// the selection.
    pub(super) fn on_query_changed(&mut self) {
        let query = self.find_input.text().to_string();
        if query.is_empty() {
            self.search.clear();
            self.search_label.clear();
            return;
        }

        let cursor = self.document.selection().0;
        self.search
            .search(self.document.text(), cursor, &query, Direction::Forward);
        self.search_label = self.search.status_label();
    }

    pub(super) fn find_next(&mut self) {
        self.navigate(Direction::Forward);
    }

    pub(super) fn find_previous(&mut self) {
        self.navigate(Direction::Backward);
    }

    fn navigate(&mut self, direction: Direction) {
        let query = self.find_input.text().to_string();
        if query.is_empty() {
            return;
        }

        let cursor = self.document.selection().0;
        if let Some(m) = self
            .search
            .search(self.document.text(), cursor, &query, direction)
        {
            self.document.set_selection(m.start, m.end);
        }
        self.search_label = self.search.status_label();
    }

    /// Replace the current match and hop to the next one in the new text.
    pub(super) fn replace_current(&mut self) {
        let replacement = self.replace_input.text().to_string();
        let Some(splice) = self
            .search
            .replace_one(self.document.text(), &replacement)
        else {
            return;
        };

        self.document.commit_replace(splice.text, splice.cursor);

        // Stale offsets are gone with the old match set; search again from
        // the cursor the splice left behind.
        if self.find_input.is_empty() {
            self.search_label = self.search.status_label();
        } else {
            self.find_next();
        }
    }

    /// Replace every occurrence in one pass and conclude the search.
    pub(super) fn replace_all(&mut self) {
        if self.find_input.is_empty() {
            return;
        }

        let replacement = self.replace_input.text().to_string();
        let Some((new_text, count)) = self
            .search
            .replace_all(self.document.text(), &replacement)
        else {
            return;
        };

        let cursor = self.document.cursor();
        self.document.commit_replace(new_text, cursor);
        self.search_label = format!(
            "Replaced {} occurrence{}",
            count,
            if count == 1 { "" } else { "s" }
        );
    }
}
