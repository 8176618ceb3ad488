use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Word list — the per-group sequence container
// ---------------------------------------------------------------------------

/// Ordered, appendable list of the original words sharing one canonical key.
///
/// Append order is stable: `get(i)` returns the i-th appended word until a
/// `set(i, ..)` replaces it. Serializes transparently as a JSON array of
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding a single word. The solver starts every fresh group
    /// with this.
    pub fn of(word: impl Into<String>) -> Self {
        Self {
            words: vec![word.into()],
        }
    }

    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Replace the word at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn set(&mut self, index: usize, word: impl Into<String>) {
        self.words[index] = word.into();
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Sort the words lexicographically in place. The report phase uses
    /// this so that group contents are backend-independent.
    pub fn sort(&mut self) {
        self.words.sort_unstable();
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl FromIterator<String> for WordList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Backend selection
// ---------------------------------------------------------------------------

/// Which associative container backs the word→group index.
///
/// Parsed from the command-line tokens `bst`, `rbt`, and `hash`. The choice
/// never changes program output, only performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MapKind {
    /// Unbalanced binary search tree, worst case O(n) per operation
    Bst,
    /// Self-balancing red-black tree, O(log n) per operation
    Rbt,
    /// Chained hash table, average O(1) per operation
    Hash,
}

impl MapKind {
    pub fn token(&self) -> &'static str {
        match self {
            MapKind::Bst => "bst",
            MapKind::Rbt => "rbt",
            MapKind::Hash => "hash",
        }
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for MapKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "bst" => Ok(MapKind::Bst),
            "rbt" => Ok(MapKind::Rbt),
            "hash" => Ok(MapKind::Hash),
            other => Err(Error::InvalidBackend(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The maximal anagram group(s) found in a dictionary.
///
/// `anagram_count` is the size of the largest group; every group in
/// `groups` has exactly that many words. Groups are ordered by their first
/// (lexicographically sorted) member, so the report is identical no matter
/// which backend produced it. An `anagram_count` below 2 means no anagrams
/// were found and `groups` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnagramReport {
    pub group_count: usize,
    pub anagram_count: usize,
    pub groups: Vec<WordList>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_preserves_append_order() {
        let mut list = WordList::new();
        list.push("stop");
        list.push("spot");
        list.push("pots");
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some("stop"));
        assert_eq!(list.get(1), Some("spot"));
        assert_eq!(list.get(2), Some("pots"));
        assert_eq!(list.get(3), None);
    }

    #[test]
    fn word_list_set_replaces_in_place() {
        let mut list = WordList::of("stop");
        list.push("spot");
        list.set(0, "tops");
        assert_eq!(list.get(0), Some("tops"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn word_list_sort_is_lexicographic() {
        let mut list: WordList = ["stop", "spot", "pots", "tops"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        list.sort();
        let sorted: Vec<&str> = list.iter().collect();
        assert_eq!(sorted, vec!["pots", "spot", "stop", "tops"]);
    }

    #[test]
    fn word_list_serializes_as_plain_array() {
        let list = WordList::of("cat");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["cat"]"#, "transparent serde, no wrapper object");
        let parsed: WordList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn map_kind_parses_known_tokens() {
        assert_eq!("bst".parse::<MapKind>().unwrap(), MapKind::Bst);
        assert_eq!("rbt".parse::<MapKind>().unwrap(), MapKind::Rbt);
        assert_eq!("hash".parse::<MapKind>().unwrap(), MapKind::Hash);
    }

    #[test]
    fn map_kind_rejects_unknown_token() {
        let err = "splay".parse::<MapKind>().unwrap_err();
        assert!(matches!(err, Error::InvalidBackend(t) if t == "splay"));
    }

    #[test]
    fn map_kind_display_round_trips() {
        for kind in [MapKind::Bst, MapKind::Rbt, MapKind::Hash] {
            assert_eq!(kind.to_string().parse::<MapKind>().unwrap(), kind);
        }
    }

    #[test]
    fn report_serialization_round_trip() {
        let report = AnagramReport {
            group_count: 1,
            anagram_count: 2,
            groups: vec![["act", "cat"].iter().map(|s| s.to_string()).collect()],
        };
        let json = serde_json::to_string(&report).unwrap();
        let parsed: AnagramReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.group_count, 1);
        assert_eq!(parsed.anagram_count, 2);
        assert_eq!(parsed.groups[0].first(), Some("act"));
    }
}
