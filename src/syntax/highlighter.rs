//! Vocabulary highlighting
//!
//! The highlighter rescans the whole document after every edit and brings
//! the span store in line with it: one Vocabulary span per form whose text
//! is in the vocabulary, nothing else. This is O(document length) per edit,
//! which is fine for screen-sized documents. An incremental tokenizer would
//! be the first thing to add if documents grow.

use std::collections::HashSet;

use super::category::HighlightCategory;
use super::pattern::FormPattern;
use super::store::SpanStore;
use super::style::HighlightSpan;
use super::vocabulary::VocabularySet;
use crate::document::clamp_offset;
use crate::error::Result;
use crate::outcome::Outcome;

/// What a highlighting pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightReport {
    /// Vocabulary forms found in the document
    pub matched: usize,
    /// Spans removed (caret-anchored or stale)
    pub removed: usize,
    /// Spans added
    pub added: usize,
}

/// Applies Vocabulary spans to recognized forms
#[derive(Debug, Clone)]
pub struct Highlighter {
    vocabulary: VocabularySet,
    pattern: FormPattern,
}

impl Highlighter {
    /// Create a highlighter for a vocabulary
    pub fn new(vocabulary: VocabularySet) -> Result<Self> {
        Ok(Self {
            vocabulary,
            pattern: FormPattern::new()?,
        })
    }

    /// Get the vocabulary in use
    pub fn vocabulary(&self) -> &VocabularySet {
        &self.vocabulary
    }

    /// Byte ranges of every vocabulary form in `text`, in document order
    pub fn vocabulary_matches(&self, text: &str) -> Vec<(usize, usize)> {
        self.pattern
            .find_iter(text)
            .filter(|&(start, end)| self.vocabulary.contains(&text[start..end]))
            .collect()
    }

    /// Bring `store` in line with `text` after an edit at `caret`
    ///
    /// Faults from the store are logged and reported as
    /// [`Outcome::Skipped`]; the text itself is never touched.
    pub fn rehighlight<S>(&self, text: &str, caret: usize, store: &mut S) -> Outcome<HighlightReport>
    where
        S: SpanStore + ?Sized,
    {
        Outcome::from_result(self.try_rehighlight(text, caret, store), "rehighlight")
    }

    pub(crate) fn try_rehighlight<S>(&self, text: &str, caret: usize, store: &mut S) -> Result<HighlightReport>
    where
        S: SpanStore + ?Sized,
    {
        let caret = clamp_offset(text, caret);
        let mut report = HighlightReport::default();

        // Spans at the edit point are rebuilt from scratch; this is what
        // clears zero-width leftovers of deleted forms.
        for span in store.spans_in(caret, caret)? {
            if store.remove(&span)? {
                report.removed += 1;
            }
        }

        let matches = self.vocabulary_matches(text);
        report.matched = matches.len();
        let wanted: HashSet<(usize, usize)> = matches.iter().copied().collect();

        // Drop spans that no longer sit exactly on a form, plus duplicates.
        let mut present = HashSet::new();
        for span in store.spans_in(0, usize::MAX)? {
            if span.category != HighlightCategory::Vocabulary {
                continue;
            }
            let range = (span.start, span.end);
            if !wanted.contains(&range) || !present.insert(range) {
                if store.remove(&span)? {
                    report.removed += 1;
                }
            }
        }

        for (start, end) in matches {
            if present.insert((start, end)) {
                store.add(HighlightSpan::vocabulary(start, end))?;
                report.added += 1;
            }
        }

        tracing::debug!(
            caret,
            matched = report.matched,
            removed = report.removed,
            added = report.added,
            "rehighlighted"
        );
        Ok(report)
    }
}
