//! Property tests for the pure naming functions.

use pagetree::naming::{normalize_name, slug_to_title};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(name in "[A-Za-z0-9_.-]{1,32}") {
        let once = normalize_name(&name);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn normalized_names_are_lowercase_without_underscores(name in "[A-Za-z0-9_.-]{1,32}") {
        let normalized = normalize_name(&name);
        prop_assert!(!normalized.contains('_'));
        prop_assert!(!normalized.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn normalize_preserves_length_for_ascii(name in "[A-Za-z0-9_.-]{1,32}") {
        prop_assert_eq!(normalize_name(&name).len(), name.len());
    }

    #[test]
    fn titles_contain_no_separators(slug in "[a-z0-9-]{1,32}") {
        let title = slug_to_title(&slug);
        prop_assert!(!title.contains('-'));
        prop_assert!(!title.contains('_'));
    }

    #[test]
    fn title_words_start_uppercase(slug in "[a-z][a-z-]{0,31}") {
        for word in slug_to_title(&slug).split_whitespace() {
            let first = word.chars().next().unwrap();
            prop_assert!(!first.is_ascii_lowercase());
        }
    }

    #[test]
    fn title_derivation_is_deterministic(slug in "[A-Za-z0-9_-]{1,32}") {
        prop_assert_eq!(slug_to_title(&slug), slug_to_title(&slug));
    }
}
