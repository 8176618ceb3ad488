//! The word→group index and its three interchangeable backends.
//!
//! One [`WordMap`] contract, three implementations selected at construction
//! time via [`build`]: an unbalanced binary search tree, a red-black tree,
//! and a chained hash table. All three agree on observable behavior; they
//! differ only in performance and iteration order.

pub mod bst;
pub mod hash;
pub mod rbt;

pub use bst::BstMap;
pub use hash::HashIndexMap;
pub use rbt::RbTreeMap;

use crate::error::Result;
use crate::types::{MapKind, WordList};

/// An immutable key/value pair yielded during iteration.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    /// Canonical letter-sorted key
    pub key: &'a str,
    /// The words grouped under that key
    pub words: &'a WordList,
}

/// Contract shared by every index backend.
///
/// Keys are unique: `put` on an existing key overwrites the stored value
/// (last write wins, no merging by the container). Only `put` and `get_mut`
/// mutate; everything else is read-only. No deletion — the workload is
/// insert/lookup-only over a dictionary's lifetime.
pub trait WordMap {
    /// Exact-match lookup. A miss is a normal outcome, not an error.
    fn get(&self, key: &str) -> Option<&WordList>;

    /// Exact-match lookup returning a mutable handle on the stored value.
    /// Callers accumulating words into a group append through this rather
    /// than clone-modify-`put`.
    fn get_mut(&mut self, key: &str) -> Option<&mut WordList>;

    /// Insert a new entry, or overwrite the value if the key exists.
    /// Overwrites are pure value writes: no rebalancing and no resizing.
    fn put(&mut self, key: String, words: WordList);

    /// Count of distinct keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A fresh traversal over every entry, exactly once. Sorted ascending
    /// by key for the tree backends; unspecified order for the hash
    /// backend. Each call yields an independent cursor.
    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = Entry<'a>> + 'a>;

    /// Verify the backend's structural invariants, returning
    /// [`Error::InvariantViolation`](crate::Error::InvariantViolation)
    /// describing the first violation found. A failure here is a defect in
    /// the backend, and tests treat it as such.
    fn check(&self) -> Result<()>;
}

/// Construct the backend selected by `kind`, empty.
pub fn build(kind: MapKind) -> Box<dyn WordMap> {
    match kind {
        MapKind::Bst => Box::new(BstMap::new()),
        MapKind::Rbt => Box::new(RbTreeMap::new()),
        MapKind::Hash => Box::new(HashIndexMap::new()),
    }
}
