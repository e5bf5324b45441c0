//! Display rendering

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use codebox::syntax::{HighlightSpan, Style};
use codebox::{Result, TextBuffer};

use crate::terminal::Terminal;

/// Display state
pub struct Display {
    /// Message to show in the bottom line
    message: Option<String>,
    /// Whether to show line numbers
    show_line_numbers: bool,
    /// Style for vocabulary spans
    highlight: Style,
    /// First document line shown
    top_line: usize,
}

impl Display {
    pub fn new(show_line_numbers: bool, highlight: Style) -> Self {
        Self {
            message: None,
            show_line_numbers,
            highlight,
            top_line: 0,
        }
    }

    /// Set a message to display
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Calculate width needed for line numbers (including separator)
    fn line_number_width(&self, line_count: usize) -> usize {
        if !self.show_line_numbers {
            return 0;
        }
        line_count.to_string().len().max(3) + 1
    }

    /// Render the buffer with the cursor at byte offset `cursor`
    pub fn render(&mut self, terminal: &mut Terminal, buf: &TextBuffer, cursor: usize) -> Result<()> {
        let text_rows = terminal.rows().saturating_sub(1) as usize;
        let lines: Vec<(usize, &str)> = buf.lines().collect();
        let lnum_width = self.line_number_width(lines.len());

        let cursor_line = lines
            .iter()
            .rposition(|&(start, _)| start <= cursor)
            .unwrap_or(0);
        if cursor_line < self.top_line {
            self.top_line = cursor_line;
        } else if text_rows > 0 && cursor_line >= self.top_line + text_rows {
            self.top_line = cursor_line + 1 - text_rows;
        }

        let spans = buf.spans().sorted();
        terminal.set_cursor_visible(false)?;

        for row in 0..text_rows {
            terminal.move_cursor(row as u16, 0)?;
            if let Some(&(start, line)) = lines.get(self.top_line + row) {
                if lnum_width > 0 {
                    terminal.set_dim(true)?;
                    let number = format!("{:>width$} ", self.top_line + row + 1, width = lnum_width - 1);
                    terminal.write_str(&number)?;
                    terminal.set_dim(false)?;
                }
                self.render_line(terminal, start, line, &spans)?;
            }
            terminal.clear_to_eol()?;
        }

        terminal.move_cursor(text_rows as u16, 0)?;
        if let Some(msg) = &self.message {
            terminal.write_str(msg)?;
        }
        terminal.clear_to_eol()?;

        let (line_start, line) = lines.get(cursor_line).copied().unwrap_or((0, ""));
        let before = &line[..cursor.saturating_sub(line_start).min(line.len())];
        let col = lnum_width + before.width();
        terminal.move_cursor((cursor_line - self.top_line) as u16, col as u16)?;
        terminal.set_cursor_visible(true)?;
        terminal.flush()
    }

    /// Render one line, painting the parts covered by spans
    fn render_line(
        &self,
        terminal: &mut Terminal,
        line_start: usize,
        line: &str,
        spans: &[HighlightSpan],
    ) -> Result<()> {
        let line_end = line_start + line.len();
        let mut pos = 0;

        for span in spans.iter().filter(|s| s.start >= line_start && s.end <= line_end && !s.is_empty()) {
            let (start, end) = (span.start - line_start, span.end - line_start);
            if start < pos || !line.is_char_boundary(start) || !line.is_char_boundary(end) {
                continue;
            }
            write_plain(terminal, &line[pos..start])?;
            terminal.set_style(self.highlight)?;
            terminal.write_str(&line[start..end])?;
            terminal.reset_attributes()?;
            pos = end;
        }

        write_plain(terminal, &line[pos..])
    }
}

/// Write text, replacing control characters that would move the cursor
fn write_plain(terminal: &mut Terminal, text: &str) -> Result<()> {
    if text.chars().all(|c| c.width().is_some()) {
        return terminal.write_str(text);
    }
    let cleaned: String = text
        .chars()
        .map(|c| if c.width().is_some() { c } else { '?' })
        .collect();
    terminal.write_str(&cleaned)
}
