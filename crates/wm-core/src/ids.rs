//! Strongly typed identifier wrappers.
//!
//! Ids come straight from the source map data (OSM node and way ids), so
//! unlike dense array indices they are sparse 64-bit keys.  All ids are
//! `Copy + Ord + Hash` and work as `BTreeMap`/`HashMap` keys without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw map-data identifier.
            #[inline(always)]
            pub fn raw(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a graph vertex (an intersection, endpoint, or named place).
    pub struct VertexId(u64);
}

typed_id! {
    /// Identifier of an edge, i.e. the map way it was derived from.
    pub struct EdgeId(u64);
}
