//! Chained hash table backend.
//!
//! Buckets are collision chains scanned linearly for an exact key match.
//! The bucket index comes from the first 8 bytes of `sha256(key)` reduced
//! modulo the current capacity, which keeps placement deterministic across
//! runs and platforms. Iteration order follows bucket layout and carries no
//! relationship to key order.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::types::WordList;

use super::{Entry, WordMap};

const INITIAL_BUCKETS: usize = 16;

// Resize when len exceeds 3/4 of capacity.
const MAX_LOAD_NUM: usize = 3;
const MAX_LOAD_DEN: usize = 4;

/// Average O(1) map with no ordering guarantee on iteration.
#[derive(Debug)]
pub struct HashIndexMap {
    buckets: Vec<Vec<(String, WordList)>>,
    len: usize,
}

impl Default for HashIndexMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HashIndexMap {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); INITIAL_BUCKETS],
            len: 0,
        }
    }

    /// Current bucket-array capacity. Exposed for load-factor diagnostics.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket-by-bucket cursor, in-bucket order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: &self.buckets,
            bucket: 0,
            slot: 0,
        }
    }

    /// `sha256(key)` truncated to a big-endian u64, reduced mod capacity.
    fn bucket_index(key: &str, capacity: usize) -> usize {
        let digest = Sha256::digest(key.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(prefix) % capacity as u64) as usize
    }

    /// Double the bucket array and re-place every entry under the new
    /// capacity. Allocation failure aborts the process; resizing is not
    /// locally recoverable.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mut rehoused = vec![Vec::new(); new_capacity];
        for bucket in self.buckets.drain(..) {
            for (key, words) in bucket {
                let index = Self::bucket_index(&key, new_capacity);
                rehoused[index].push((key, words));
            }
        }
        self.buckets = rehoused;
    }
}

impl WordMap for HashIndexMap {
    fn get(&self, key: &str) -> Option<&WordList> {
        let index = Self::bucket_index(key, self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, words)| words)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut WordList> {
        let index = Self::bucket_index(key, self.buckets.len());
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, words)| words)
    }

    fn put(&mut self, key: String, words: WordList) {
        let index = Self::bucket_index(&key, self.buckets.len());
        if let Some(slot) = self.buckets[index].iter_mut().find(|(k, _)| *k == key) {
            // Overwrite in place; never triggers a resize.
            slot.1 = words;
            return;
        }

        if (self.len + 1) * MAX_LOAD_DEN > self.buckets.len() * MAX_LOAD_NUM {
            self.grow();
        }
        let index = Self::bucket_index(&key, self.buckets.len());
        self.buckets[index].push((key, words));
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = Entry<'a>> + 'a> {
        Box::new(self.iter())
    }

    fn check(&self) -> Result<()> {
        let capacity = self.buckets.len();
        let mut count = 0usize;
        for (index, bucket) in self.buckets.iter().enumerate() {
            for (key, _) in bucket {
                let expected = Self::bucket_index(key, capacity);
                if expected != index {
                    return Err(Error::invariant(format!(
                        "hash: key '{}' sits in bucket {} but hashes to {}",
                        key, index, expected
                    )));
                }
                count += 1;
            }
        }
        if count != self.len {
            return Err(Error::invariant(format!(
                "hash: buckets hold {} entries but len() is {}",
                count, self.len
            )));
        }
        Ok(())
    }
}

/// Bucket-index cursor; each `iter()` call starts over from bucket zero.
pub struct Iter<'a> {
    buckets: &'a [Vec<(String, WordList)>],
    bucket: usize,
    slot: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.bucket < self.buckets.len() {
            if let Some((key, words)) = self.buckets[self.bucket].get(self.slot) {
                self.slot += 1;
                return Some(Entry { key, words });
            }
            self.bucket += 1;
            self.slot = 0;
        }
        None
    }
}
