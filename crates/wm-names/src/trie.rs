//! Character trie from normalized key to display names.
//!
//! # Layout
//!
//! Nodes live in one arena `Vec`, children are `char → node index` maps in a
//! `BTreeMap`, so child iteration is already in sorted character order.  A
//! terminal node carries a `BTreeSet` of every original display name that
//! normalized to its key.
//!
//! # Ordering
//!
//! [`NameTrie::prefix_search`] walks the subtree pre-order with an explicit
//! stack.  A node's key sorts before every key that extends it, and children
//! are visited in character order, so results come out sorted by full key,
//! then by display name within a key.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, usize>,
    names: BTreeSet<String>,
}

const ROOT: usize = 0;

/// Prefix tree over normalized place names.
#[derive(Debug)]
pub struct NameTrie {
    nodes: Vec<TrieNode>,
    keys: usize,
}

impl NameTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::default()], keys: 0 }
    }

    /// Record `display` under the normalized `key`.  Duplicate display names
    /// for one key are stored once.
    pub fn insert(&mut self, key: &str, display: &str) {
        let mut node = ROOT;
        for c in key.chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }
        let names = &mut self.nodes[node].names;
        if names.is_empty() {
            self.keys += 1;
        }
        names.insert(display.to_owned());
    }

    /// Index of the node reached by consuming `prefix`, if any.
    fn find(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(ROOT, |node, c| self.nodes[node].children.get(&c).copied())
    }

    /// Every display name whose key starts with `prefix`, ordered by key and
    /// then by name.  Unknown prefixes give an empty result.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            let node = &self.nodes[node];
            out.extend(node.names.iter().cloned());
            // Reverse so the smallest character is popped first.
            stack.extend(node.children.values().rev().copied());
        }
        out
    }

    /// `true` if some inserted key equals `key` exactly.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some_and(|n| !self.nodes[n].names.is_empty())
    }

    /// Number of distinct keys inserted.
    pub fn len(&self) -> usize {
        self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }
}

impl Default for NameTrie {
    fn default() -> Self {
        Self::new()
    }
}
