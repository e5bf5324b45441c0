//! Property-based tests for indentation and highlighting
//!
//! These check the engine's guarantees over arbitrary documents rather than
//! hand-picked snippets.

use proptest::prelude::*;

use codebox::syntax::HighlightSpan;
use codebox::{
    CodeboxWatcher, Document, Highlighter, IndentCalculator, SpanList, SpanStore, TextBuffer,
    VocabularySet,
};

fn vocabulary() -> VocabularySet {
    VocabularySet::new(["map", "inc", "let", "nil?", "a", "when-not"])
}

/// Spans the highlighter should leave behind for `text`
fn expected_spans(hl: &Highlighter, text: &str) -> Vec<HighlightSpan> {
    hl.vocabulary_matches(text)
        .into_iter()
        .map(|(start, end)| HighlightSpan::vocabulary(start, end))
        .collect()
}

/// Generate a balanced bracketed form
fn form_strategy() -> impl Strategy<Value = String> {
    let leaf = "[a-z0-9 ,?-]{0,6}";
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            prop::sample::select(vec![('(', ')'), ('[', ']'), ('{', '}')]),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|((open, close), parts)| format!("{}{}{}", open, parts.join(" "), close))
    })
}

/// Generate small ASCII documents with brackets, forms and line breaks
fn document_strategy() -> impl Strategy<Value = String> {
    "[-?a-z0-9 ()\\[\\]{}\n]{0,60}"
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_indent_is_total(text in any::<String>()) {
            let _ = IndentCalculator::new().compute_indent(&text);
        }

        #[test]
        fn test_balanced_text_indents_to_zero(forms in prop::collection::vec(form_strategy(), 0..4)) {
            let text = forms.join("\n");
            prop_assert_eq!(IndentCalculator::new().compute_indent(&text), 0);
        }

        #[test]
        fn test_text_without_brackets_indents_to_zero(text in "[a-z0-9 ,\n]{0,40}") {
            prop_assert_eq!(IndentCalculator::new().compute_indent(&text), 0);
        }

        #[test]
        fn test_open_square_bracket_wins(prefix in "[a-z ]{0,10}", inner in form_strategy()) {
            let text = format!("({prefix}[{inner}");
            let expected = prefix.chars().count() + 2;
            prop_assert_eq!(IndentCalculator::new().compute_indent(&text), expected);
        }

        #[test]
        fn test_rehighlight_matches_vocabulary(text in document_strategy(), caret in 0usize..80) {
            let hl = Highlighter::new(vocabulary()).unwrap();
            let mut store = SpanList::new();

            prop_assert!(hl.rehighlight(&text, caret, &mut store).is_computed());
            prop_assert_eq!(store.sorted(), expected_spans(&hl, &text));
            for span in store.spans() {
                prop_assert!(hl.vocabulary().contains(span.text(&text).unwrap()));
            }
        }

        #[test]
        fn test_rehighlight_is_idempotent(text in document_strategy(), caret in 0usize..80) {
            let hl = Highlighter::new(vocabulary()).unwrap();
            let mut store = SpanList::new();

            let _ = hl.rehighlight(&text, caret, &mut store);
            let first = store.sorted();
            let _ = hl.rehighlight(&text, caret, &mut store);
            prop_assert_eq!(store.sorted(), first);
        }

        #[test]
        fn test_caret_anchored_spans_cleared(text in document_strategy(), caret in 0usize..60) {
            let hl = Highlighter::new(vocabulary()).unwrap();
            let caret = caret.min(text.len());
            let mut store = SpanList::new();
            store.add(HighlightSpan::vocabulary(caret, caret)).unwrap();

            let _ = hl.rehighlight(&text, caret, &mut store);
            prop_assert!(store.spans().iter().all(|s| !s.is_anchored_at(caret)));
        }

        #[test]
        fn test_edits_keep_spans_exact(
            initial in document_strategy(),
            edits in prop::collection::vec((0usize..100, 0usize..4, "[-?a-z ()\\[\n]{0,4}"), 0..12),
        ) {
            let mut watcher = CodeboxWatcher::new(vocabulary()).unwrap();
            let mut buf = TextBuffer::from_text(initial);
            let _ = watcher.after_text_changed(&mut buf);

            for (pos, del, inserted) in edits {
                let start = pos % (buf.len() + 1);
                let end = (start + del).min(buf.len());
                prop_assert!(watcher.apply_edit(&mut buf, start, end, &inserted).is_computed());
                let expected = expected_spans(watcher.highlighter(), buf.text());
                prop_assert_eq!(buf.spans().sorted(), expected);
            }
        }
    }
}
