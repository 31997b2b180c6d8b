use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use super::util::normalize;
use crate::error::{Error, Result};

/// Word membership and prefix index over a set of canonical (uppercase)
/// words. Queries are expected in canonical form already.
pub trait Lexicon: Sized {
    /// Builds the index from a set of words. Implementations pass them
    /// through `canonical_words` first, so any case is accepted and empty
    /// entries are dropped.
    fn from_words(words: BTreeSet<String>) -> Result<Self>;

    /// Exact membership
    fn contains(&self, word: &str) -> bool;

    /// True if some word starts with `prefix`
    fn has_prefix(&self, prefix: &str) -> bool;

    /// All words in ascending order
    fn words(&self) -> Vec<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads every whitespace separated token of `reader` as a word
    fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_words(read_words(reader, "dictionary stream")?)
    }

    fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::config(name.clone(), e))?;
        let words = read_words(BufReader::new(file), &name)?;
        debug!("loaded {} words from {}", words.len(), name);
        Self::from_words(words)
    }
}

/// Normalizes every word and drops the ones left empty
pub fn canonical_words<I, S>(words: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| normalize(w.as_ref()))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Collects the normalized tokens of a word source
pub fn read_words<R: BufRead>(reader: R, source_name: &str) -> Result<BTreeSet<String>> {
    let mut words = BTreeSet::new();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::config(source_name, e))?;
        words.extend(canonical_words(line.split_whitespace()));
    }
    Ok(words)
}
