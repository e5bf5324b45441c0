//! Syntax highlighting
//!
//! This module provides the vocabulary highlighter and the types it shares
//! with the host:
//! - form matching and the recognized vocabulary
//! - highlight spans, their categories and styles
//! - the span store the highlighter manipulates

mod builtin;
mod category;
mod highlighter;
mod pattern;
mod store;
mod style;
mod vocabulary;

pub use category::HighlightCategory;
pub use highlighter::{HighlightReport, Highlighter};
pub use pattern::FormPattern;
pub use store::{SpanList, SpanStore};
pub use style::{Color, HighlightSpan, Style};
pub use vocabulary::VocabularySet;
