//! codebox - live editing engine for Lisp-like code boxes
//!
//! Two pieces run on every edit of a code box:
//! - the indent calculator, which picks the leading spaces of a freshly
//!   opened line from the brackets typed so far
//! - the highlighter, which keeps exactly one span on every recognized
//!   vocabulary form
//!
//! [`CodeboxWatcher`] wires both to the host's edit notifications.
//!
//! ```
//! use codebox::{CodeboxWatcher, TextBuffer, VocabularySet};
//!
//! let mut watcher = CodeboxWatcher::new(VocabularySet::clojure_core()).unwrap();
//! let mut buf = TextBuffer::from_text("(let [x 1]");
//! let _ = watcher.apply_edit(&mut buf, 10, 10, "\n");
//! assert_eq!(buf.highlighted(), vec!["let"]);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod indent;
pub mod outcome;
pub mod syntax;
pub mod watcher;

pub use config::Config;
pub use document::{Document, TextBuffer};
pub use error::{EngineError, Result};
pub use indent::{IndentCalculator, IndentKeywordSet};
pub use outcome::Outcome;
pub use syntax::{HighlightSpan, Highlighter, SpanList, SpanStore, VocabularySet};
pub use watcher::{CodeboxWatcher, EditEvent, EditReport};
