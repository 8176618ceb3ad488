//! Anagram grouping engine with pluggable map backends.
//!
//! Dictionary words are grouped by their canonical letter-sorted key, so
//! that anagrams land in the same group, and the largest group(s) are
//! reported. The word→group index is pluggable: one [`WordMap`] contract
//! backed by an unbalanced binary search tree, a red-black tree, or a
//! chained hash table, selected at construction time. The backend never
//! changes output, only performance.
//!
//! Pipeline: [`solver::solve`] scans the dictionary into the chosen map,
//! [`solver::build_report`] extracts the maximal groups, and the render
//! functions format them as text or JSON.

pub mod config;
pub mod error;
pub mod index;
pub mod solver;
pub mod types;

pub use error::{Error, Result};
pub use index::{Entry, WordMap};
pub use types::{AnagramReport, MapKind, WordList};
