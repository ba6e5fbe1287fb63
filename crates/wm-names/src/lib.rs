//! `wm-names` — place-name search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`normalize`] | `normalize` — the key every lookup goes through     |
//! | [`trie`]      | `NameTrie` — normalized key → sorted display names  |
//! | [`index`]     | `NameIndex` — trie plus exact key → vertex ids      |
//!
//! The index stores [`VertexId`](wm_core::VertexId)s only; vertex records
//! stay owned by the graph store.

pub mod index;
pub mod normalize;
pub mod trie;

#[cfg(test)]
mod tests;

pub use index::NameIndex;
pub use normalize::normalize;
pub use trie::NameTrie;
