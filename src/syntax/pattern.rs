//! Token matcher for language forms
//!
//! A form is a maximal run of lowercase ASCII letters, `-` and `?`. Digits,
//! uppercase letters and other punctuation break a run, so `even?1` yields
//! `even?` and `String` yields `tring`.

use regex::Regex;

use crate::error::Result;

/// Shape of a highlightable form
const FORM_PATTERN: &str = r"[-?a-z]+";

/// Regex-backed matcher for candidate forms
#[derive(Debug, Clone)]
pub struct FormPattern {
    pattern: Regex,
}

impl FormPattern {
    /// Compile the form pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(FORM_PATTERN)?,
        })
    }

    /// Iterate over `(start, end)` byte ranges of every maximal form in `text`
    pub fn find_iter<'t>(&'t self, text: &'t str) -> impl Iterator<Item = (usize, usize)> + 't {
        self.pattern.find_iter(text).map(|m| (m.start(), m.end()))
    }

    /// Find the first form at or after `start`
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        self.pattern.find_at(text, start).map(|m| (m.start(), m.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(text: &str) -> Vec<&str> {
        let pattern = FormPattern::new().unwrap();
        pattern.find_iter(text).map(|(s, e)| &text[s..e]).collect()
    }

    #[test]
    fn test_maximal_runs() {
        assert_eq!(forms("(map inc [1 2 3])"), vec!["map", "inc"]);
        assert_eq!(forms("(when-not (nil? x))"), vec!["when-not", "nil?", "x"]);
    }

    #[test]
    fn test_excluded_characters() {
        assert_eq!(forms("even?1"), vec!["even?"]);
        assert_eq!(forms("String"), vec!["tring"]);
        assert_eq!(forms("x2y"), vec!["x", "y"]);
        assert!(forms("123 ()").is_empty());
    }

    #[test]
    fn test_find_at() {
        let pattern = FormPattern::new().unwrap();
        assert_eq!(pattern.find_at("(map inc)", 0), Some((1, 4)));
        assert_eq!(pattern.find_at("(map inc)", 4), Some((5, 8)));
        assert_eq!(pattern.find_at("(map inc)", 9), None);
    }
}
