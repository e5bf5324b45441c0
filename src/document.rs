//! Document representation - editable text plus its highlight spans
//!
//! The engine reads documents and asks for two kinds of mutation: inserting
//! indentation and manipulating spans. Hosts with their own buffers implement
//! [`Document`]; [`TextBuffer`] is a self-contained implementation that
//! shifts spans on edits the way host text widgets do.

use crate::error::{EngineError, Result};
use crate::syntax::{SpanList, SpanStore};

/// Clamp a byte offset into `text`, flooring it to a char boundary
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Editable text owned by the host
pub trait Document {
    /// Span storage attached to this document
    type Spans: SpanStore;

    /// Current full text
    fn text(&self) -> &str;

    /// Insert `s` at byte offset `offset`
    fn insert_str(&mut self, offset: usize, s: &str) -> Result<()>;

    /// Mutable access to the document's spans
    fn spans_mut(&mut self) -> &mut Self::Spans;
}

/// String-backed document with span shifting
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    spans: SpanList,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`, with no spans
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: SpanList::new(),
        }
    }

    /// Get the span list
    pub fn spans(&self) -> &SpanList {
        &self.spans
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text covered by each span, in document order
    pub fn highlighted(&self) -> Vec<&str> {
        self.spans
            .sorted()
            .iter()
            .filter_map(|s| s.text(&self.text))
            .collect()
    }

    /// Replace `start..end` with `inserted`, returning the removed text
    pub fn replace_range(&mut self, start: usize, end: usize, inserted: &str) -> Result<String> {
        self.check_offset(start)?;
        self.check_offset(end)?;
        if end < start {
            return Err(EngineError::InvalidSpan { start, end });
        }

        let removed: String = self.text[start..end].to_string();
        self.text.replace_range(start..end, inserted);
        self.spans.adjust_for_delete(start, end);
        self.spans.adjust_for_insert(start, inserted.len());
        Ok(removed)
    }

    /// Delete `start..end`, returning the removed text
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<String> {
        self.replace_range(start, end, "")
    }

    /// Byte offset of the start of the line containing `offset`
    pub fn line_start(&self, offset: usize) -> usize {
        let offset = clamp_offset(&self.text, offset);
        self.text[..offset].rfind('\n').map_or(0, |i| i + 1)
    }

    /// Byte offset of the end of the line containing `offset` (before its newline)
    pub fn line_end(&self, offset: usize) -> usize {
        let offset = clamp_offset(&self.text, offset);
        self.text[offset..]
            .find('\n')
            .map_or(self.text.len(), |i| offset + i)
    }

    /// Iterate over lines with their starting byte offsets
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        let mut start = 0;
        self.text.split('\n').map(move |line| {
            let line_start = start;
            start += line.len() + 1;
            (line_start, line)
        })
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.text.len() {
            return Err(EngineError::OffsetOutOfRange {
                offset,
                len: self.text.len(),
            });
        }
        if !self.text.is_char_boundary(offset) {
            return Err(EngineError::NotCharBoundary(offset));
        }
        Ok(())
    }
}

impl Document for TextBuffer {
    type Spans = SpanList;

    fn text(&self) -> &str {
        &self.text
    }

    fn insert_str(&mut self, offset: usize, s: &str) -> Result<()> {
        self.replace_range(offset, offset, s).map(|_| ())
    }

    fn spans_mut(&mut self) -> &mut SpanList {
        &mut self.spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::HighlightSpan;

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset("abc", 2), 2);
        assert_eq!(clamp_offset("abc", 10), 3);
        assert_eq!(clamp_offset("", 5), 0);
        // 'é' is two bytes
        assert_eq!(clamp_offset("é", 1), 0);
    }

    #[test]
    fn test_insert_and_delete() {
        let mut buf = TextBuffer::from_text("(map f)");
        buf.insert_str(5, "inc ").unwrap();
        assert_eq!(buf.text(), "(map inc f)");
        assert_eq!(buf.delete_range(5, 9).unwrap(), "inc ");
        assert_eq!(buf.text(), "(map f)");
    }

    #[test]
    fn test_bad_offsets() {
        let mut buf = TextBuffer::from_text("é");
        assert!(matches!(
            buf.insert_str(5, "x"),
            Err(EngineError::OffsetOutOfRange { offset: 5, len: 2 })
        ));
        assert!(matches!(buf.insert_str(1, "x"), Err(EngineError::NotCharBoundary(1))));
        assert!(buf.replace_range(2, 0, "").is_err());
        assert_eq!(buf.text(), "é");
    }

    #[test]
    fn test_spans_follow_edits() {
        let mut buf = TextBuffer::from_text("(map f)");
        buf.spans_mut().add(HighlightSpan::vocabulary(1, 4)).unwrap();
        buf.insert_str(0, "  ").unwrap();
        assert_eq!(buf.highlighted(), vec!["map"]);

        buf.delete_range(3, 6).unwrap();
        assert_eq!(buf.spans().sorted(), vec![HighlightSpan::vocabulary(3, 3)]);
    }

    #[test]
    fn test_lines() {
        let buf = TextBuffer::from_text("(a\n  b)\n");
        let lines: Vec<_> = buf.lines().collect();
        assert_eq!(lines, vec![(0, "(a"), (3, "  b)"), (8, "")]);
        assert_eq!(buf.line_start(5), 3);
        assert_eq!(buf.line_end(4), 7);
        assert_eq!(buf.line_start(0), 0);
    }
}
