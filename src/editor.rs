//! Editor state - a single code box driven by the codebox engine
//!
//! Every change to the text goes through [`CodeboxWatcher::apply_edit`], so
//! new lines are indented and forms rehighlighted exactly as an embedding
//! host would see it.

use std::fs;
use std::path::PathBuf;

use codebox::document::clamp_offset;
use codebox::{CodeboxWatcher, Config, Document, Outcome, Result, TextBuffer};

use crate::display::Display;
use crate::input::{translate_key, Action};
use crate::terminal::Terminal;

/// Editor state
pub struct EditorState {
    terminal: Terminal,
    display: Display,
    buffer: TextBuffer,
    watcher: CodeboxWatcher,
    /// Cursor byte offset
    cursor: usize,
    /// File backing the buffer
    path: Option<PathBuf>,
    running: bool,
}

impl EditorState {
    /// Create an editor for `path` (which may not exist yet)
    pub fn new(terminal: Terminal, config: &Config, path: Option<PathBuf>) -> Result<Self> {
        let text = match &path {
            Some(p) if p.exists() => fs::read_to_string(p)?,
            _ => String::new(),
        };
        let mut buffer = TextBuffer::from_text(text);
        let mut watcher = CodeboxWatcher::new(config.vocabulary())?;
        // initial highlight of loaded text
        let _ = watcher.after_text_changed(&mut buffer);

        let mut display = Display::new(config.show_line_numbers, config.highlight);
        display.set_message("C-s save  C-q quit");

        Ok(Self {
            terminal,
            display,
            buffer,
            watcher,
            cursor: 0,
            path,
            running: true,
        })
    }

    /// Main loop
    pub fn run(&mut self) -> Result<()> {
        self.terminal.clear_screen()?;
        while self.running {
            self.display.render(&mut self.terminal, &self.buffer, self.cursor)?;
            let event = self.terminal.read_key()?;
            if let Some(action) = translate_key(event) {
                self.handle(action)?;
            }
        }
        Ok(())
    }

    fn handle(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Insert(ch) => {
                let mut tmp = [0u8; 4];
                self.edit(self.cursor, self.cursor, ch.encode_utf8(&mut tmp));
            }
            Action::Newline => self.edit(self.cursor, self.cursor, "\n"),
            Action::Backspace => {
                if let Some(prev) = self.prev_boundary(self.cursor) {
                    self.edit(prev, self.cursor, "");
                }
            }
            Action::Delete => {
                if let Some(next) = self.next_boundary(self.cursor) {
                    self.edit(self.cursor, next, "");
                }
            }
            Action::Left => {
                if let Some(prev) = self.prev_boundary(self.cursor) {
                    self.cursor = prev;
                }
            }
            Action::Right => {
                if let Some(next) = self.next_boundary(self.cursor) {
                    self.cursor = next;
                }
            }
            Action::Up => self.move_vertical(false),
            Action::Down => self.move_vertical(true),
            Action::Home => self.cursor = self.buffer.line_start(self.cursor),
            Action::End => self.cursor = self.buffer.line_end(self.cursor),
            Action::Save => self.save()?,
            Action::Quit => self.running = false,
        }
        Ok(())
    }

    /// Replace `start..end` and leave the cursor after the inserted text and
    /// any indentation the engine added
    fn edit(&mut self, start: usize, end: usize, inserted: &str) {
        let indent = match self.watcher.apply_edit(&mut self.buffer, start, end, inserted) {
            Outcome::Computed(report) => report.indent.unwrap_or(0),
            Outcome::Skipped(err) => {
                self.display.set_message(format!("edit not formatted: {err}"));
                0
            }
        };
        self.cursor = clamp_offset(self.buffer.text(), start + inserted.len() + indent);
    }

    fn prev_boundary(&self, offset: usize) -> Option<usize> {
        self.buffer.text()[..offset]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self, offset: usize) -> Option<usize> {
        self.buffer.text()[offset..]
            .chars()
            .next()
            .map(|c| offset + c.len_utf8())
    }

    fn move_vertical(&mut self, down: bool) {
        let line_start = self.buffer.line_start(self.cursor);
        let column = self.buffer.text()[line_start..self.cursor].chars().count();

        let target_start = if down {
            let line_end = self.buffer.line_end(self.cursor);
            if line_end >= self.buffer.len() {
                return;
            }
            line_end + 1
        } else {
            if line_start == 0 {
                return;
            }
            self.buffer.line_start(line_start - 1)
        };

        let target_end = self.buffer.line_end(target_start);
        let line = &self.buffer.text()[target_start..target_end];
        let offset = line
            .char_indices()
            .nth(column)
            .map_or(line.len(), |(i, _)| i);
        self.cursor = target_start + offset;
    }

    fn save(&mut self) -> Result<()> {
        match &self.path {
            Some(path) => {
                fs::write(path, self.buffer.text())?;
                self.display.set_message(format!("Wrote {}", path.display()));
            }
            None => self.display.set_message("No file name"),
        }
        Ok(())
    }
}
