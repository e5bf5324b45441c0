//! Span storage
//!
//! The highlighter never owns spans. It works through the narrow
//! [`SpanStore`] interface so that a host can keep spans wherever its
//! renderer wants them; [`SpanList`] is the in-memory implementation used by
//! [`TextBuffer`](crate::document::TextBuffer).

use super::style::HighlightSpan;
use crate::error::{EngineError, Result};

/// Narrow span collection interface
pub trait SpanStore {
    /// Spans overlapping or touching `start..=end`
    fn spans_in(&self, start: usize, end: usize) -> Result<Vec<HighlightSpan>>;

    /// Add a span
    fn add(&mut self, span: HighlightSpan) -> Result<()>;

    /// Remove one span equal to `span`, returning whether it was present
    fn remove(&mut self, span: &HighlightSpan) -> Result<bool>;
}

/// Vec-backed span store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanList {
    spans: Vec<HighlightSpan>,
}

impl SpanList {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// All spans in insertion order
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// All spans ordered by position
    pub fn sorted(&self) -> Vec<HighlightSpan> {
        let mut spans = self.spans.clone();
        spans.sort_by_key(|s| (s.start, s.end));
        spans
    }

    /// Number of spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Check if there are no spans
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Remove every span
    pub fn clear(&mut self) {
        self.spans.clear();
    }

    /// Shift spans for `len` bytes inserted at `offset`
    ///
    /// Boundaries are exclusive: text inserted exactly at a span's start or
    /// end lands outside the span.
    pub fn adjust_for_insert(&mut self, offset: usize, len: usize) {
        if len == 0 {
            return;
        }
        for span in &mut self.spans {
            let empty = span.start == span.end;
            if span.start >= offset {
                span.start += len;
            }
            if span.end > offset || (empty && span.end == offset) {
                span.end += len;
            }
        }
    }

    /// Shift spans for the byte range `start..end` being deleted
    ///
    /// Positions inside the deleted range collapse to `start`, which can
    /// leave zero-width spans behind.
    pub fn adjust_for_delete(&mut self, start: usize, end: usize) {
        if end <= start {
            return;
        }
        let removed = end - start;
        let map = |pos: usize| {
            if pos <= start {
                pos
            } else if pos >= end {
                pos - removed
            } else {
                start
            }
        };
        for span in &mut self.spans {
            span.start = map(span.start);
            span.end = map(span.end);
        }
    }
}

impl SpanStore for SpanList {
    fn spans_in(&self, start: usize, end: usize) -> Result<Vec<HighlightSpan>> {
        Ok(self
            .spans
            .iter()
            .filter(|s| s.touches(start, end))
            .copied()
            .collect())
    }

    fn add(&mut self, span: HighlightSpan) -> Result<()> {
        if span.start > span.end {
            return Err(EngineError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        self.spans.push(span);
        Ok(())
    }

    fn remove(&mut self, span: &HighlightSpan) -> Result<bool> {
        match self.spans.iter().position(|s| s == span) {
            Some(idx) => {
                self.spans.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
