use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{EditorView, FindFocus};

impl EditorView {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => {
                    self.request_quit();
                    return;
                }
                KeyCode::Char('n') => {
                    self.request_new_file();
                    return;
                }
                KeyCode::Char('o') => {
                    self.request_open_file();
                    return;
                }
                KeyCode::Char('s') => {
                    self.save_file();
                    return;
                }
                KeyCode::Char('f') => {
                    self.open_search(false);
                    return;
                }
                KeyCode::Char('h') => {
                    self.open_search(true);
                    return;
                }
                KeyCode::Char('d') => {
                    self.toggle_theme();
                    return;
                }
                KeyCode::Char('r') => {
                    if self.search_open && self.replace_open {
                        self.replace_all();
                    }
                    return;
                }
                KeyCode::Char('a') => {
                    if !self.search_open {
                        self.document.select_all();
                    }
                    return;
                }
                _ => {}
            }
        }

        if self.search_open {
            self.handle_search_key(key);
        } else {
            self.handle_edit_key(key);
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_proceed(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.confirm_cancel(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Esc => self.close_search(),
            KeyCode::F(3) => {
                if shift {
                    self.find_previous();
                } else {
                    self.find_next();
                }
            }
            KeyCode::Enter => match self.find_focus {
                FindFocus::Find => {
                    if shift {
                        self.find_previous();
                    } else {
                        self.find_next();
                    }
                }
                FindFocus::Replace => self.replace_current(),
            },
            KeyCode::Tab | KeyCode::BackTab => {
                if self.replace_open {
                    self.toggle_find_focus();
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_input_mut().insert_char(ch);
                if self.find_focus == FindFocus::Find {
                    self.on_query_changed();
                }
            }
            KeyCode::Backspace => {
                self.focused_input_mut().backspace();
                if self.find_focus == FindFocus::Find {
                    self.on_query_changed();
                }
            }
            KeyCode::Delete => {
                self.focused_input_mut().delete();
                if self.find_focus == FindFocus::Find {
                    self.on_query_changed();
                }
            }
            KeyCode::Left => self.focused_input_mut().move_left(),
            KeyCode::Right => self.focused_input_mut().move_right(),
            KeyCode::Home => self.focused_input_mut().move_home(),
            KeyCode::End => self.focused_input_mut().move_end(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let plain = !key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(ch) if plain => self.document.insert(&ch.to_string()),
            KeyCode::Enter => self.document.insert("\n"),
            KeyCode::Tab => {
                let spaces = " ".repeat(self.config.tab_width);
                self.document.insert(&spaces);
            }
            KeyCode::Backspace => self.document.backspace(),
            KeyCode::Delete => self.document.delete(),
            KeyCode::Left => self.document.move_left(shift),
            KeyCode::Right => self.document.move_right(shift),
            KeyCode::Up => self.document.move_up(shift),
            KeyCode::Down => self.document.move_down(shift),
            KeyCode::Home => self.document.move_home(shift),
            KeyCode::End => self.document.move_end(shift),
            KeyCode::PageUp => {
                for _ in 0..self.page_size() {
                    self.document.move_up(shift);
                }
            }
            KeyCode::PageDown => {
                for _ in 0..self.page_size() {
                    self.document.move_down(shift);
                }
            }
            _ => {}
        }
    }

    fn page_size(&self) -> usize {
        (self.viewport.0 as usize).saturating_sub(1).max(1)
    }
}
