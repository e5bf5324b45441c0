//! Recognized vocabulary
//!
//! The set of form names eligible for highlighting. It is fixed when the
//! engine is built; the only question ever asked of it is membership.

use std::collections::HashSet;

use super::builtin;

/// Immutable set of recognized form names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularySet {
    forms: HashSet<String>,
}

impl VocabularySet {
    /// Create a vocabulary from a list of forms
    pub fn new<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            forms: forms.into_iter().map(Into::into).collect(),
        }
    }

    /// Vocabulary of built-in Clojure core forms
    pub fn clojure_core() -> Self {
        Self::new(builtin::CLOJURE_CORE.iter().copied())
    }

    /// Check if a token is a recognized form
    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(form)
    }

    /// Number of forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Builder: add forms
    pub fn extended<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.forms.extend(forms.into_iter().map(Into::into));
        self
    }

    /// Builder: drop forms
    pub fn without<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for form in forms {
            self.forms.remove(form.as_ref());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let vocab = VocabularySet::new(["map", "nil?"]);
        assert!(vocab.contains("map"));
        assert!(vocab.contains("nil?"));
        assert!(!vocab.contains("ma"));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_clojure_core() {
        let vocab = VocabularySet::clojure_core();
        assert!(vocab.contains("defn"));
        assert!(vocab.contains("reduce"));
        assert!(vocab.contains("when-let"));
        assert!(!vocab.contains("frobnicate"));
    }

    #[test]
    fn test_extend_and_remove() {
        let vocab = VocabularySet::new(["map"])
            .extended(["my-macro"])
            .without(["map"]);
        assert!(vocab.contains("my-macro"));
        assert!(!vocab.contains("map"));
    }
}
