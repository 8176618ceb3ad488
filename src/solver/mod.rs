//! Dictionary scan: read words, canonicalize, and populate the chosen
//! index.

pub mod normalizer;
pub mod report;

pub use normalizer::canonical_key;
pub use report::{build_report, render_json, render_text};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::index::WordMap;
use crate::types::WordList;

/// Read a dictionary line by line and insert every word under its
/// canonical key. Blank lines are skipped; surrounding whitespace is
/// trimmed. Returns the number of words read.
///
/// The index never merges: a fresh key gets a single-word list via `put`,
/// an existing key's group is appended to through `get_mut`.
pub fn load_words<R: BufRead>(reader: R, map: &mut dyn WordMap) -> io::Result<usize> {
    let mut words_read = 0usize;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        words_read += 1;

        let key = canonical_key(word);
        match map.get_mut(&key) {
            Some(group) => group.push(word),
            None => map.put(key, WordList::of(word)),
        }
    }
    Ok(words_read)
}

/// Open the dictionary at `path` and run [`load_words`] over it. I/O
/// failures are tagged with the offending path.
pub fn solve(path: &Path, map: &mut dyn WordMap) -> Result<usize> {
    let file = File::open(path).map_err(|source| Error::io(path, source))?;
    let words = load_words(BufReader::new(file), map).map_err(|source| Error::io(path, source))?;
    tracing::info!(words, keys = map.len(), "dictionary indexed");
    Ok(words)
}
