//! Built-in vocabulary
//!
//! Clojure core forms highlighted when no other vocabulary is supplied.
//! Only names matching the form pattern are listed; anything else could
//! never be highlighted.

mod clojure;

pub use clojure::CLOJURE_CORE;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::pattern::FormPattern;

    #[test]
    fn test_every_builtin_is_a_whole_form() {
        let pattern = FormPattern::new().unwrap();
        for form in CLOJURE_CORE {
            let found: Vec<_> = pattern.find_iter(form).collect();
            assert_eq!(found, vec![(0, form.len())], "{form} is not a single form");
        }
    }
}
