use std::collections::BTreeSet;
use std::fmt;

use fst::{IntoStreamer, Set, Streamer};

use super::lexicon::{canonical_words, Lexicon};
use crate::error::Result;

/// Ordered word set backed by an fst. Prefix queries use the ceiling of the
/// prefix: words sharing a prefix sort contiguously right after it, so if the
/// smallest word >= prefix does not start with it, no word does.
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Smallest word that is >= `key`
    pub fn ceiling(&self, key: &str) -> Option<String> {
        self.ceiling_bytes(key.as_bytes())
            .map(|word| String::from_utf8_lossy(&word).into_owned())
    }

    fn ceiling_bytes(&self, key: &[u8]) -> Option<Vec<u8>> {
        let mut stream = self.set.range().ge(key).into_stream();
        stream.next().map(|word| word.to_vec())
    }
}

impl Lexicon for Dictionary {
    fn from_words(words: BTreeSet<String>) -> Result<Self> {
        let set = Set::from_iter(canonical_words(words))?;
        Ok(Self { set })
    }

    fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.ceiling_bytes(prefix.as_bytes())
            .map_or(false, |ceiling| ceiling.starts_with(prefix.as_bytes()))
    }

    fn words(&self) -> Vec<String> {
        let mut stream = self.set.stream();
        let mut words = Vec::with_capacity(self.set.len());
        while let Some(word) = stream.next() {
            words.push(String::from_utf8_lossy(word).into_owned());
        }
        words
    }

    fn len(&self) -> usize {
        self.set.len()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.set.len())
            .finish()
    }
}
