//! Edit-event handling for a live code box
//!
//! The host notifies the watcher twice per edit, mirroring the usual
//! text-widget callbacks:
//!
//! 1. [`CodeboxWatcher::on_text_changed`] right after the text changed,
//!    which records where the edit happened and whether it opened a line
//! 2. [`CodeboxWatcher::after_text_changed`] once the host is ready for
//!    the document to be touched, which indents the new line (if any) and
//!    then rehighlights
//!
//! Notifications are serialized by the host. Nothing here is reentrant.

use crate::document::{clamp_offset, Document, TextBuffer};
use crate::error::Result;
use crate::indent::IndentCalculator;
use crate::outcome::Outcome;
use crate::syntax::{HighlightReport, Highlighter, VocabularySet};

/// The most recent mutation of the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditEvent {
    /// Byte offset where the edit starts
    pub offset: usize,
    /// Bytes inserted at `offset`
    pub inserted_len: usize,
    /// Bytes removed at `offset`
    pub removed_len: usize,
    /// Whether the inserted text starts with a line break
    pub is_newline: bool,
}

impl EditEvent {
    /// Describe a change to `text` (the text after the change)
    ///
    /// `before` bytes at `start` were replaced by `count` bytes. Offsets
    /// outside `text` are clamped.
    pub fn from_change(text: &str, start: usize, before: usize, count: usize) -> Self {
        let offset = clamp_offset(text, start);
        let inserted_len = count.min(text.len() - offset);
        let is_newline = inserted_len > 0 && text[offset..].starts_with('\n');
        Self {
            offset,
            inserted_len,
            removed_len: before,
            is_newline,
        }
    }
}

/// What one edit notification did to the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditReport {
    /// Spaces inserted after a new line break
    pub indent: Option<usize>,
    /// Highlighting changes
    pub highlight: HighlightReport,
}

/// Edit controller tying indentation and highlighting to edit notifications
#[derive(Debug, Clone)]
pub struct CodeboxWatcher {
    indent: IndentCalculator,
    highlighter: Highlighter,
    pending: Option<EditEvent>,
}

impl CodeboxWatcher {
    /// Create a watcher for a vocabulary, with the built-in indent keywords
    pub fn new(vocabulary: VocabularySet) -> Result<Self> {
        Ok(Self::with_parts(IndentCalculator::new(), Highlighter::new(vocabulary)?))
    }

    /// Create a watcher from prepared components
    pub fn with_parts(indent: IndentCalculator, highlighter: Highlighter) -> Self {
        Self {
            indent,
            highlighter,
            pending: None,
        }
    }

    /// Get the indent calculator
    pub fn indent(&self) -> &IndentCalculator {
        &self.indent
    }

    /// Get the highlighter
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Edit recorded by the last `on_text_changed`, if not yet consumed
    pub fn pending(&self) -> Option<&EditEvent> {
        self.pending.as_ref()
    }

    /// Record a change: `before` bytes at `start` became `count` bytes
    pub fn on_text_changed(&mut self, text: &str, start: usize, before: usize, count: usize) {
        let event = EditEvent::from_change(text, start, before, count);
        tracing::trace!(?event, "text changed");
        self.pending = Some(event);
    }

    /// Indent and rehighlight after the recorded change
    ///
    /// Consumes the recorded event; without one, only rehighlights at
    /// offset 0. Faults are logged and reported as [`Outcome::Skipped`].
    pub fn after_text_changed<D>(&mut self, doc: &mut D) -> Outcome<EditReport>
    where
        D: Document + ?Sized,
    {
        let event = self.pending.take().unwrap_or_default();
        Outcome::from_result(self.process(doc, event), "after_text_changed")
    }

    /// Replace `start..end` of a [`TextBuffer`] with `inserted` and run both
    /// notifications
    pub fn apply_edit(
        &mut self,
        buf: &mut TextBuffer,
        start: usize,
        end: usize,
        inserted: &str,
    ) -> Outcome<EditReport> {
        let removed = match buf.replace_range(start, end, inserted) {
            Ok(removed) => removed,
            Err(err) => return Outcome::from_result(Err(err), "apply_edit"),
        };
        self.on_text_changed(buf.text(), start, removed.len(), inserted.len());
        self.after_text_changed(buf)
    }

    fn process<D>(&self, doc: &mut D, event: EditEvent) -> Result<EditReport>
    where
        D: Document + ?Sized,
    {
        let mut report = EditReport::default();

        if event.is_newline {
            let offset = clamp_offset(doc.text(), event.offset);
            let spaces = self.indent.compute_indent(&doc.text()[..offset]);
            if spaces > 0 {
                doc.insert_str(offset + 1, &" ".repeat(spaces))?;
            }
            tracing::debug!(offset, spaces, "indented new line");
            report.indent = Some(spaces);
        }

        let text = doc.text().to_string();
        report.highlight = self
            .highlighter
            .try_rehighlight(&text, event.offset, doc.spans_mut())?;

        Ok(report)
    }
}
