//! Text wrapping and cursor geometry

use unicode_width::UnicodeWidthChar;

use super::MultiLineInput;

/// Where one char of the content lands after wrapping
#[derive(Debug, Clone, Copy)]
struct Placement {
    byte: usize,
    line: usize,
    col: usize,
    ch: char,
}

impl MultiLineInput {
    pub(super) fn get_wrapped_lines_impl(&self) -> Vec<String> {
        // Check cache first
        if let Some(cached) = self.wrapped_lines_cache.borrow().as_ref() {
            return cached.clone();
        }

        let lines = self.compute_wrapped_lines();
        *self.wrapped_lines_cache.borrow_mut() = Some(lines.clone());
        lines
    }

    /// Compute wrapped lines without caching (used by cache population)
    fn compute_wrapped_lines(&self) -> Vec<String> {
        let mut lines = vec![String::new()];
        for p in self.layout() {
            if p.ch == '\n' {
                lines.push(String::new());
                continue;
            }
            while lines.len() <= p.line {
                lines.push(String::new());
            }
            lines[p.line].push(p.ch);
        }
        lines
    }

    /// Place every char on a (line, column) grid, breaking at newlines and
    /// whenever the next char would overflow the width
    fn layout(&self) -> Vec<Placement> {
        let mut out = Vec::with_capacity(self.content.len());
        let mut line = 0;
        let mut col = 0;
        let mut current_width = 0;

        for (byte, ch) in self.content.char_indices() {
            if ch == '\n' {
                out.push(Placement { byte, line, col, ch });
                line += 1;
                col = 0;
                current_width = 0;
                continue;
            }

            let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
            if current_width + ch_width > self.width as usize && col > 0 {
                line += 1;
                col = 0;
                current_width = 0;
            }

            out.push(Placement { byte, line, col, ch });
            col += 1;
            current_width += ch_width;
        }

        out
    }

    /// Visual (line, column) of a byte offset
    pub(super) fn visual_from_byte(&self, pos: usize) -> (usize, usize) {
        let mut end = (0, 0);
        for p in self.layout() {
            if p.byte >= pos {
                return (p.line, p.col);
            }
            end = if p.ch == '\n' {
                (p.line + 1, 0)
            } else {
                (p.line, p.col + 1)
            };
        }
        end
    }

    /// Byte offset for a visual position, clamped to the end of that line
    pub(super) fn get_byte_position_from_visual(&self, line: usize, col: usize) -> usize {
        for p in self.layout() {
            if p.line > line {
                return p.byte;
            }
            if p.line == line && (p.col >= col || p.ch == '\n') {
                return p.byte;
            }
        }
        self.content.len()
    }
}
