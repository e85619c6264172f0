//! Multi-line text editor used for the roster
//!
//! Content is stored as a single `String`; the cursor is a byte offset kept
//! on a char boundary. Soft-wrapped lines are cached until the next edit or
//! width change.

mod editor;
mod wrapper;

use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub use editor::InputAction;

use crate::tui::themes::Theme;

pub struct MultiLineInput {
    content: String,
    /// Byte offset into `content`
    cursor_position: usize,
    /// (wrapped line, char column)
    cursor_visual: (usize, usize),
    /// Text width available for wrapping
    width: u16,
    /// First wrapped line shown
    viewport_offset: usize,
    max_visible_lines: u16,
    wrapped_lines_cache: RefCell<Option<Vec<String>>>,
}

impl MultiLineInput {
    pub fn new(max_visible_lines: u16) -> Self {
        Self {
            content: String::new(),
            cursor_position: 0,
            cursor_visual: (0, 0),
            width: 80,
            viewport_offset: 0,
            max_visible_lines: max_visible_lines.max(1),
            wrapped_lines_cache: RefCell::new(None),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Replace all content and put the cursor at the end
    pub fn set_content(&mut self, text: &str) {
        self.content = normalize_newlines(text);
        self.cursor_position = self.content.len();
        self.invalidate_cache();
        self.update_visual_cursor();
        self.ensure_cursor_visible();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
        self.cursor_visual = (0, 0);
        self.viewport_offset = 0;
        self.invalidate_cache();
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> InputAction {
        let action = self.handle_key_impl(code, modifiers);
        if matches!(action, InputAction::ContentChanged) {
            self.invalidate_cache();
            self.update_visual_cursor();
            self.ensure_cursor_visible();
        }
        action
    }

    pub fn insert_char(&mut self, ch: char) {
        self.insert_char_impl(ch);
    }

    /// Insert pasted text at the cursor
    pub fn insert_text(&mut self, text: &str) {
        let text = normalize_newlines(text);
        self.insert_text_impl(&text);
    }

    /// Set wrapping width; invalidates the wrap cache when it changes
    pub fn set_width(&mut self, width: u16) {
        let width = width.max(1);
        if width != self.width {
            self.width = width;
            self.invalidate_cache();
            self.update_visual_cursor();
        }
    }

    pub fn set_max_visible_lines(&mut self, lines: u16) {
        self.max_visible_lines = lines.max(1);
        self.ensure_cursor_visible();
    }

    pub fn cursor_visual(&self) -> (usize, usize) {
        self.cursor_visual
    }

    pub fn get_wrapped_lines(&self) -> Vec<String> {
        self.get_wrapped_lines_impl()
    }

    fn invalidate_cache(&self) {
        *self.wrapped_lines_cache.borrow_mut() = None;
    }

    pub(super) fn update_visual_cursor(&mut self) {
        self.cursor_visual = self.visual_from_byte(self.cursor_position);
    }

    pub(super) fn ensure_cursor_visible(&mut self) {
        let (line, _) = self.cursor_visual;
        let visible = self.max_visible_lines as usize;
        if line < self.viewport_offset {
            self.viewport_offset = line;
        } else if line >= self.viewport_offset + visible {
            self.viewport_offset = line + 1 - visible;
        }
    }

    pub(super) fn set_cursor_to_visual_position(&mut self, line: usize, col: usize) {
        self.cursor_position = self.get_byte_position_from_visual(line, col);
        self.update_visual_cursor();
        self.ensure_cursor_visible();
    }

    /// Render the editor with a bordered block
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        title: Line<'_>,
        placeholder: &str,
        focused: bool,
    ) {
        let border = if focused {
            theme.input_border_color
        } else {
            theme.border_color
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title)
            .style(Style::default().bg(theme.panel_bg_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        self.set_width(inner.width);
        self.set_max_visible_lines(inner.height);

        if self.is_empty() {
            let hint = Paragraph::new(placeholder.to_string())
                .style(Style::default().fg(theme.input_placeholder_color));
            f.render_widget(hint, inner);
            if focused {
                f.set_cursor_position((inner.x, inner.y));
            }
            return;
        }

        let lines = self.get_wrapped_lines();
        let visible: Vec<Line> = lines
            .iter()
            .skip(self.viewport_offset)
            .take(inner.height as usize)
            .map(|l| Line::raw(l.clone()))
            .collect();
        let text = Paragraph::new(visible).style(Style::default().fg(theme.text_color));
        f.render_widget(text, inner);

        if focused {
            let (line, col) = self.cursor_visual();
            let prefix: String = lines
                .get(line)
                .map(|l| l.chars().take(col).collect())
                .unwrap_or_default();
            let x = inner.x + (prefix.width() as u16).min(inner.width.saturating_sub(1));
            let y = inner.y + (line.saturating_sub(self.viewport_offset)) as u16;
            if y < inner.y + inner.height {
                f.set_cursor_position((x, y));
            }
        }
    }
}

/// Paste sources may carry CRLF or lone CR line endings
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> MultiLineInput {
        let mut input = MultiLineInput::new(5);
        for ch in text.chars() {
            if ch == '\n' {
                input.handle_key(KeyCode::Enter, KeyModifiers::empty());
            } else {
                input.handle_key(KeyCode::Char(ch), KeyModifiers::empty());
            }
        }
        input
    }

    #[test]
    fn test_typing_and_newlines() {
        let input = typed("Ada\nGrace");
        assert_eq!(input.content(), "Ada\nGrace");
        assert_eq!(input.cursor_visual(), (1, 5));
    }

    #[test]
    fn test_backspace_across_newline() {
        let mut input = typed("a\n");
        input.handle_key(KeyCode::Backspace, KeyModifiers::empty());
        assert_eq!(input.content(), "a");
        assert_eq!(input.cursor_visual(), (0, 1));
    }

    #[test]
    fn test_multibyte_backspace() {
        let mut input = typed("Zoë");
        input.handle_key(KeyCode::Backspace, KeyModifiers::empty());
        assert_eq!(input.content(), "Zo");
    }

    #[test]
    fn test_paste_normalizes_crlf() {
        let mut input = MultiLineInput::new(5);
        input.insert_text("a\r\nb\rc");
        assert_eq!(input.content(), "a\nb\nc");
        assert_eq!(input.cursor_visual(), (2, 1));
    }

    #[test]
    fn test_wrapping() {
        let mut input = MultiLineInput::new(5);
        input.set_width(4);
        input.set_content("abcdefgh\nxy");
        assert_eq!(input.get_wrapped_lines(), vec!["abcd", "efgh", "xy"]);
    }

    #[test]
    fn test_up_down_navigation() {
        let mut input = typed("first\nsecond");
        input.handle_key(KeyCode::Up, KeyModifiers::empty());
        assert_eq!(input.cursor_visual(), (0, 5));
        input.handle_key(KeyCode::Down, KeyModifiers::empty());
        assert_eq!(input.cursor_visual(), (1, 5));
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = typed("ac");
        input.handle_key(KeyCode::Left, KeyModifiers::empty());
        input.handle_key(KeyCode::Char('b'), KeyModifiers::empty());
        assert_eq!(input.content(), "abc");
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut input = typed("Mary Ann");
        input.handle_key(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(input.content(), "Mary ");
    }

    #[test]
    fn test_ctrl_k_deletes_to_line_end() {
        let mut input = typed("abc\ndef");
        input.handle_key(KeyCode::Up, KeyModifiers::empty());
        input.handle_key(KeyCode::Home, KeyModifiers::empty());
        input.handle_key(KeyCode::Right, KeyModifiers::empty());
        input.handle_key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(input.content(), "a\ndef");
    }

    #[test]
    fn test_clear_keys() {
        let mut input = typed("abc");
        assert!(matches!(
            input.handle_key(KeyCode::Char('u'), KeyModifiers::CONTROL),
            InputAction::ContentChanged
        ));
        assert!(input.is_empty());
    }

    #[test]
    fn test_viewport_follows_cursor() {
        let mut input = MultiLineInput::new(2);
        input.set_content("1\n2\n3\n4");
        assert_eq!(input.viewport_offset, 2);
        input.handle_key(KeyCode::Up, KeyModifiers::empty());
        input.handle_key(KeyCode::Up, KeyModifiers::empty());
        input.handle_key(KeyCode::Up, KeyModifiers::empty());
        assert_eq!(input.viewport_offset, 0);
    }
}
