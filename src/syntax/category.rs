//! Highlight categories
//!
//! The engine only recognizes one kind of token, but spans carry their
//! category so a host can share its span collection with other decorations.

use super::style::{Color, Style};

/// What a highlight span marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    /// A recognized language form (`map`, `let`, `nil?`)
    Vocabulary,
}

impl HighlightCategory {
    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            HighlightCategory::Vocabulary => Style::fg(Color::Blue),
        }
    }

    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            HighlightCategory::Vocabulary => "Vocabulary",
        }
    }

    /// Parse a category from a string name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Vocabulary" => Some(HighlightCategory::Vocabulary),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_is_blue() {
        assert_eq!(HighlightCategory::Vocabulary.default_style().fg, Color::Blue);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            HighlightCategory::from_name("Vocabulary"),
            Some(HighlightCategory::Vocabulary)
        );
        assert_eq!(HighlightCategory::from_name("Keyword"), None);
        assert_eq!(HighlightCategory::from_name(""), None);
    }
}
