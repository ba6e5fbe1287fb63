//! Combined name index: prefix trie plus exact-match table.

use std::collections::HashMap;

use tracing::debug;

use wm_core::VertexId;

use crate::normalize::normalize;
use crate::trie::NameTrie;

/// Place-name index built during ingestion and read-only afterwards.
///
/// Both lookups normalize their input first, so `"Top Dog"`, `"top dog"` and
/// `"TOP DOG!"` all hit the same entry.
#[derive(Debug, Default)]
pub struct NameIndex {
    trie: NameTrie,
    exact: HashMap<String, Vec<VertexId>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `display` as the name of `vertex`.
    pub fn insert(&mut self, display: &str, vertex: VertexId) {
        let key = normalize(display);
        self.trie.insert(&key, display);
        self.exact.entry(key).or_default().push(vertex);
    }

    /// Display names whose normalized form starts with the normalized `text`.
    pub fn prefix_search(&self, text: &str) -> Vec<String> {
        let hits = self.trie.prefix_search(&normalize(text));
        debug!(prefix = text, hits = hits.len(), "prefix search");
        hits
    }

    /// Vertex ids recorded under the normalized `text`, in insertion order.
    /// Unknown names give an empty slice.
    pub fn exact_lookup(&self, text: &str) -> &[VertexId] {
        self.exact
            .get(&normalize(text))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The underlying prefix trie.
    pub fn trie(&self) -> &NameTrie {
        &self.trie
    }
}
