//! Indent inference for bracketed (Lisp-like) code
//!
//! The calculator never parses. It scans the text typed before a new line
//! break backwards, tracking the imbalance of each bracket family, and stops
//! at the nearest bracket that is still open:
//!
//! - an open `[` or `{` aligns the new line one column past the bracket
//! - an open `(` aligns either two columns past the paren (binding and
//!   control forms such as `let` or `when`), or under the second token of
//!   the form (ordinary calls)
//!
//! Strings and comments are not opaque: a bracket inside a string literal
//! still counts.

use std::collections::HashSet;

/// Forms whose body is indented by a fixed two columns
const DEFAULT_INDENT_KEYWORDS: &[&str] = &[
    "fn", "let", "if", "when", "if-let", "when-let", "if-not", "when-not", "loop", "for",
    "doseq", "while",
];

/// Immutable set of forms that get body-style indentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentKeywordSet {
    words: HashSet<String>,
}

impl IndentKeywordSet {
    /// Create a keyword set from an explicit list of forms
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a form gets body-style indentation
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of keywords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for IndentKeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_KEYWORDS.iter().copied())
    }
}

/// Signed "closers seen minus openers seen" per bracket family
#[derive(Debug, Default, Clone, Copy)]
struct BracketBalance {
    paren: i32,
    square: i32,
    curly: i32,
}

impl BracketBalance {
    /// Account for one character scanned right to left
    fn scan(&mut self, ch: char) {
        match ch {
            ')' => self.paren += 1,
            ']' => self.square += 1,
            '}' => self.curly += 1,
            '(' => self.paren -= 1,
            '[' => self.square -= 1,
            '{' => self.curly -= 1,
            _ => {}
        }
    }
}

/// Computes the leading spaces for a freshly opened line
#[derive(Debug, Clone, Default)]
pub struct IndentCalculator {
    keywords: IndentKeywordSet,
}

impl IndentCalculator {
    /// Create a calculator with the built-in keyword set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with an alternate keyword set
    pub fn with_keywords(keywords: IndentKeywordSet) -> Self {
        Self { keywords }
    }

    /// Get the keyword set in use
    pub fn keywords(&self) -> &IndentKeywordSet {
        &self.keywords
    }

    /// Number of spaces the line following `text_before_cursor` should start with
    ///
    /// Total over all inputs: text with no enclosing open bracket, including
    /// the empty string, yields 0.
    pub fn compute_indent(&self, text_before_cursor: &str) -> usize {
        let mut balance = BracketBalance::default();

        for line in text_before_cursor.split('\n').rev() {
            let chars: Vec<char> = line.chars().collect();
            for (column, &ch) in chars.iter().enumerate().rev() {
                balance.scan(ch);

                if balance.square < 0 || balance.curly < 0 {
                    tracing::trace!(column, bracket = %ch, "open collection bracket");
                    return column + 1;
                }

                if balance.paren < 0 {
                    let rest: String = chars[column + 1..].iter().collect();
                    return self.form_indent(column, &rest);
                }
            }
        }

        0
    }

    /// Indent inside a form whose open paren sits at `column`
    fn form_indent(&self, column: usize, rest: &str) -> usize {
        let words = split_words(rest);
        match words.as_slice() {
            [] | [_] => column + 1,
            [head, ..] if self.keywords.contains(head) => {
                tracing::trace!(column, form = *head, "body indent");
                column + 2
            }
            [head, ..] => {
                tracing::trace!(column, form = *head, "call indent");
                column + head.chars().count() + 2
            }
        }
    }
}

/// Split on spaces and commas, dropping trailing empty pieces only
///
/// A leading separator yields an empty first word, so `( foo bar` aligns
/// two columns past the paren.
fn split_words(rest: &str) -> Vec<&str> {
    let mut words: Vec<&str> = rest.split(|c: char| c == ' ' || c == ',').collect();
    while words.last().is_some_and(|w| w.is_empty()) {
        words.pop();
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indent(text: &str) -> usize {
        IndentCalculator::new().compute_indent(text)
    }

    #[test]
    fn test_empty_and_flat() {
        assert_eq!(indent(""), 0);
        assert_eq!(indent("hello world"), 0);
        assert_eq!(indent("(foo 1 2)"), 0);
        assert_eq!(indent("(foo 1 2)\n(bar [x] {:a 1})"), 0);
    }

    #[test]
    fn test_binding_form() {
        assert_eq!(indent("(let [x 1]"), 2);
        assert_eq!(indent("  (when-not done?"), 4);
        // single word after the paren aligns right after it
        assert_eq!(indent("(let"), 1);
    }

    #[test]
    fn test_call_form() {
        assert_eq!(indent("(println \"a\""), 9);
        assert_eq!(indent("(map inc"), 5);
        assert_eq!(indent("(defn foo [x]\n  (+ x"), 5);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(indent("("), 1);
        assert_eq!(indent("(foo"), 1);
        assert_eq!(indent("(foo "), 1);
        assert_eq!(indent("   (foo"), 4);
    }

    #[test]
    fn test_open_collection_wins() {
        assert_eq!(indent("(foo [1 2"), 6);
        assert_eq!(indent("{:a 1"), 1);
        assert_eq!(indent("(foo {:a [1 2]"), 6);
    }

    #[test]
    fn test_scans_across_lines() {
        let text = "(defn add\n  [a b]\n  (+ a b)";
        assert_eq!(indent(text), 6);
        let text = "(foo bar\n     baz)\n";
        assert_eq!(indent(text), 0);
    }

    #[test]
    fn test_commas_and_leading_space() {
        assert_eq!(indent("(foo,bar"), 5);
        // empty first word: two columns past the paren
        assert_eq!(indent("( foo bar"), 2);
    }

    #[test]
    fn test_unbalanced_closers() {
        assert_eq!(indent(")))"), 0);
        assert_eq!(indent("]\n(a b"), 3);
    }

    #[test]
    fn test_bracket_in_string_counts() {
        assert_eq!(indent("(str \"[\""), 7);
    }

    #[test]
    fn test_alternate_keywords() {
        let calc = IndentCalculator::with_keywords(IndentKeywordSet::new(["match"]));
        assert_eq!(calc.compute_indent("(match x"), 2);
        assert_eq!(calc.compute_indent("(let [a 1]"), 5);
    }

    #[test]
    fn test_multibyte_columns() {
        // columns count characters, not bytes
        assert_eq!(indent("(é [1"), 4);
        assert_eq!(indent("(λ x"), 3);
    }

    #[test]
    fn test_default_keywords() {
        let keywords = IndentKeywordSet::default();
        assert_eq!(keywords.len(), 12);
        assert!(keywords.contains("doseq"));
        assert!(!keywords.contains("defn"));
    }
}
