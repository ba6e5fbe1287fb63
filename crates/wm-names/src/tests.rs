//! Unit tests for wm-names.

#[cfg(test)]
mod normalize {
    use crate::normalize;

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(normalize("Top Dog #2!"), "top dog ");
        assert_eq!(normalize("McDonald's"), "mcdonalds");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(normalize("Café Rouge"), "caf rouge");
    }

    #[test]
    fn keeps_spaces() {
        assert_eq!(normalize("  A  B "), "  a  b ");
    }
}

#[cfg(test)]
mod trie {
    use crate::NameTrie;

    fn sample() -> NameTrie {
        let mut t = NameTrie::new();
        t.insert("montclair", "Montclair");
        t.insert("mont", "Mont");
        t.insert("monterey market", "Monterey Market");
        t.insert("montclair", "MONTCLAIR");
        t.insert("montclair", "Montclair");
        t.insert("berkeley bowl", "Berkeley Bowl");
        t
    }

    #[test]
    fn prefix_results_sorted_by_key_then_name() {
        let t = sample();
        assert_eq!(
            t.prefix_search("mont"),
            vec!["Mont", "MONTCLAIR", "Montclair", "Monterey Market"],
        );
    }

    #[test]
    fn empty_prefix_returns_everything_deduplicated() {
        let t = sample();
        let all = t.prefix_search("");
        assert_eq!(
            all,
            vec!["Berkeley Bowl", "Mont", "MONTCLAIR", "Montclair", "Monterey Market"],
        );
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn unknown_prefix_is_empty() {
        let t = sample();
        assert!(t.prefix_search("zzz").is_empty());
        assert!(t.prefix_search("montx").is_empty());
    }

    #[test]
    fn contains_only_full_keys() {
        let t = sample();
        assert!(t.contains_key("mont"));
        assert!(t.contains_key("berkeley bowl"));
        assert!(!t.contains_key("berk"));
    }

    #[test]
    fn deep_key_does_not_recurse() {
        let mut t = NameTrie::new();
        let long = "a".repeat(100_000);
        t.insert(&long, "Long Name");
        t.insert("a", "A");
        assert_eq!(t.prefix_search(""), vec!["A", "Long Name"]);
    }
}

#[cfg(test)]
mod index {
    use wm_core::VertexId;
    use crate::NameIndex;

    fn sample() -> NameIndex {
        let mut idx = NameIndex::new();
        idx.insert("Top Dog", VertexId(30));
        idx.insert("Top Dog", VertexId(10));
        idx.insert("top dog!", VertexId(20));
        idx.insert("Tomate Cafe", VertexId(40));
        idx
    }

    #[test]
    fn exact_lookup_in_insertion_order() {
        let idx = sample();
        assert_eq!(
            idx.exact_lookup("TOP DOG"),
            &[VertexId(30), VertexId(10), VertexId(20)],
        );
    }

    #[test]
    fn exact_lookup_unknown_is_empty() {
        let idx = sample();
        assert!(idx.exact_lookup("Nowhere").is_empty());
        assert!(idx.exact_lookup("Top").is_empty());
    }

    #[test]
    fn prefix_search_normalizes_input() {
        let idx = sample();
        assert_eq!(idx.prefix_search("TO"), vec!["Tomate Cafe", "Top Dog", "top dog!"]);
        assert_eq!(idx.prefix_search("Top-"), vec!["Top Dog", "top dog!"]);
    }

    #[test]
    fn counts_distinct_keys() {
        let idx = sample();
        assert_eq!(idx.len(), 2);
        assert!(NameIndex::new().is_empty());
    }
}
