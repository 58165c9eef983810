use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use jot_search::SearchMatch;
use jot_toast::ToastKind;

use super::{EditorView, FindFocus, InputField};

impl EditorView {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let background =
            Block::default().style(Style::default().bg(self.colors.background).fg(self.colors.foreground));
        frame.render_widget(background, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, chunks[0]);
        self.render_editor(frame, chunks[1]);
        self.render_help_bar(frame, chunks[2]);

        if self.search_open {
            self.render_search_bar(frame, area);
        }
        self.render_toasts(frame, area);
        if let Some(action) = self.confirm {
            self.render_confirm(frame, area, action.message());
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(self.colors.panel_background)
            .fg(self.colors.foreground);

        let title = format!(" {}", self.document.title());
        let (line, col) = self.document.line_col(self.document.cursor());
        let position = format!("Ln {}, Col {} ", line + 1, col + 1);

        let used = title.chars().count() + position.chars().count();
        let spacer = " ".repeat((area.width as usize).saturating_sub(used));

        let bar = Line::from(vec![
            Span::styled(title, style.add_modifier(Modifier::BOLD)),
            Span::raw(spacer),
            Span::raw(position),
        ]);
        frame.render_widget(Paragraph::new(bar).style(style), area);
    }

    fn render_editor(&mut self, frame: &mut Frame, area: Rect) {
        let gutter_width = if self.config.show_line_numbers {
            digits(self.document.line_count()) + 1
        } else {
            0
        };

        let (gutter_area, text_area) = if gutter_width > 0 && area.width > gutter_width {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(gutter_width), Constraint::Min(0)])
                .split(area);
            (Some(chunks[0]), chunks[1])
        } else {
            (None, area)
        };

        self.viewport = (text_area.height, text_area.width);
        self.ensure_cursor_visible();

        let lines: Vec<&str> = self.document.text().split('\n').collect();
        let top = self.scroll.0;
        let height = text_area.height as usize;

        if let Some(gutter_area) = gutter_area {
            let number_width = gutter_width.saturating_sub(1) as usize;
            let mut numbers = Vec::with_capacity(height);
            for row in 0..height {
                let index = top + row;
                if index < lines.len() {
                    numbers.push(Line::from(format!("{:>number_width$} ", index + 1)));
                } else {
                    numbers.push(Line::default());
                }
            }
            let gutter = Paragraph::new(numbers).style(Style::default().fg(self.colors.gutter));
            frame.render_widget(gutter, gutter_area);
        }

        let mut offset = 0;
        let mut starts = Vec::with_capacity(lines.len());
        for line in &lines {
            starts.push(offset);
            offset += line.chars().count() + 1;
        }

        let mut rows = Vec::with_capacity(height);
        for row in 0..height {
            let index = top + row;
            if index < lines.len() {
                rows.push(self.styled_line(lines[index], starts[index]));
            } else {
                rows.push(Line::default());
            }
        }
        frame.render_widget(Paragraph::new(rows), text_area);
    }

    /// One visible text row, with selection, match, and caret styling
    /// applied as runs of equally-styled spans.
    fn styled_line(&self, line: &str, line_start: usize) -> Line<'static> {
        let skip = self.scroll.1;
        let width = self.viewport.1 as usize;

        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();

        for (col, ch) in line.chars().enumerate().skip(skip).take(width) {
            let style = self.style_for_offset(line_start + col);
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }

        // Caret on the line end, where there is no character to invert.
        let eol = line_start + line.chars().count();
        let eol_col = line.chars().count();
        if self.caret_visible()
            && !self.document.has_selection()
            && self.document.cursor() == eol
            && eol_col >= skip
            && eol_col < skip + width
        {
            spans.push(Span::styled(
                " ".to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        }

        Line::from(spans)
    }

    fn style_for_offset(&self, offset: usize) -> Style {
        let base = Style::default().fg(self.colors.foreground);

        if self.caret_visible()
            && !self.document.has_selection()
            && offset == self.document.cursor()
        {
            return base.add_modifier(Modifier::REVERSED);
        }

        if self.search_open {
            let results = self.search.results();
            if results.is_current_match(offset) {
                return Style::default()
                    .bg(self.colors.current_match)
                    .fg(self.colors.background);
            }
            if is_any_match(results.matches(), offset) {
                return base.bg(self.colors.match_highlight);
            }
        }

        let (start, end) = self.document.selection();
        if offset >= start && offset < end {
            return base.bg(self.colors.selection);
        }

        base
    }

    fn caret_visible(&self) -> bool {
        !self.search_open && self.confirm.is_none()
    }

    fn ensure_cursor_visible(&mut self) {
        let height = self.viewport.0 as usize;
        let width = self.viewport.1 as usize;
        if height == 0 || width == 0 {
            return;
        }

        let (line, col) = self.document.line_col(self.document.cursor());
        if line < self.scroll.0 {
            self.scroll.0 = line;
        } else if line >= self.scroll.0 + height {
            self.scroll.0 = line + 1 - height;
        }
        if col < self.scroll.1 {
            self.scroll.1 = col;
        } else if col + 1 > self.scroll.1 + width {
            self.scroll.1 = col + 1 - width;
        }
    }

    fn render_help_bar(&self, frame: &mut Frame, area: Rect) {
        let help = if self.confirm.is_some() {
            " y Discard  n Keep editing"
        } else if self.search_open {
            " Enter Next  Shift+Enter Prev  F3 Next  Tab Switch Field  Ctrl+R Replace All  Esc Close"
        } else {
            " Ctrl+N New  Ctrl+O Open  Ctrl+S Save  Ctrl+F Find  Ctrl+H Replace  Ctrl+D Theme  Ctrl+Q Quit"
        };

        let bar = Paragraph::new(help).style(
            Style::default()
                .bg(self.colors.panel_background)
                .fg(self.colors.muted),
        );
        frame.render_widget(bar, area);
    }

    fn render_search_bar(&self, frame: &mut Frame, area: Rect) {
        let height = if self.replace_open { 5 } else { 4 };
        if area.width < 24 || area.height < height + 2 {
            return;
        }
        let width = area.width.min(48);

        let bar = Rect {
            x: area.width.saturating_sub(width + 1),
            y: 1,
            width,
            height,
        };

        let title = if self.replace_open {
            " Find & Replace "
        } else {
            " Find "
        };

        frame.render_widget(Clear, bar);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(
                Style::default()
                    .bg(self.colors.panel_background)
                    .fg(self.colors.foreground),
            )
            .border_style(Style::default().fg(self.colors.accent));
        let inner = block.inner(bar);
        frame.render_widget(block, bar);

        let mut rows = Vec::new();
        rows.push(self.input_line(
            "Find    ",
            &self.find_input,
            self.find_focus == FindFocus::Find,
        ));
        if self.replace_open {
            rows.push(self.input_line(
                "Replace ",
                &self.replace_input,
                self.find_focus == FindFocus::Replace,
            ));
        }
        rows.push(self.search_status_line());

        frame.render_widget(Paragraph::new(rows), inner);
    }

    fn input_line(&self, label: &str, field: &InputField, focused: bool) -> Line<'static> {
        let muted = Style::default().fg(self.colors.muted);
        let mut spans = vec![Span::styled(label.to_string(), muted)];

        if focused {
            let chars: Vec<char> = field.text().chars().collect();
            let cursor = field.cursor();

            let before: String = chars[..cursor].iter().collect();
            let at: String = chars
                .get(cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after: String = chars.iter().skip(cursor + 1).collect();

            if !before.is_empty() {
                spans.push(Span::raw(before));
            }
            spans.push(Span::styled(
                at,
                Style::default().add_modifier(Modifier::REVERSED),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(after));
            }
        } else {
            spans.push(Span::raw(field.text().to_string()));
        }

        Line::from(spans)
    }

    fn search_status_line(&self) -> Line<'static> {
        let style = if self.search_label == "No results" {
            Style::default().fg(self.colors.warning)
        } else {
            Style::default().fg(self.colors.accent)
        };
        Line::from(Span::styled(self.search_label.clone(), style))
    }

    fn render_toasts(&self, frame: &mut Frame, area: Rect) {
        for (i, toast) in self.toasts.active().iter().enumerate() {
            let message = format!(" {} ", toast.message);
            let width = (message.chars().count() as u16).min(area.width);
            let y = area.height.saturating_sub(2 + i as u16);
            if y == 0 {
                break;
            }

            let rect = Rect {
                x: area.width.saturating_sub(width + 1),
                y,
                width,
                height: 1,
            };

            let color = match toast.kind {
                ToastKind::Info => self.colors.accent,
                ToastKind::Success => self.colors.success,
                ToastKind::Warning => self.colors.warning,
                ToastKind::Error => self.colors.error,
            };

            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(message)
                    .style(Style::default().bg(color).fg(self.colors.background)),
                rect,
            );
        }
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect, message: &str) {
        let width = ((message.chars().count() as u16) + 6)
            .min(area.width.saturating_sub(2))
            .max(24);
        let height = 5;
        if area.height < height {
            return;
        }

        let rect = Rect {
            x: (area.width.saturating_sub(width)) / 2,
            y: (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Unsaved changes ")
            .style(
                Style::default()
                    .bg(self.colors.panel_background)
                    .fg(self.colors.foreground),
            )
            .border_style(Style::default().fg(self.colors.warning));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let lines = vec![
            Line::from(message.to_string()),
            Line::default(),
            Line::from(Span::styled(
                "y: discard   n: keep editing",
                Style::default().fg(self.colors.muted),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            inner,
        );
    }
}

fn is_any_match(matches: &[SearchMatch], offset: usize) -> bool {
    let index = matches.partition_point(|m| m.end <= offset);
    matches
        .get(index)
        .map(|m| m.contains(offset))
        .unwrap_or(false)
}

fn digits(mut n: usize) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
