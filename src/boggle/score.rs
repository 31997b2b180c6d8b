use std::collections::BTreeSet;

use super::board::Board;
use super::lexicon::Lexicon;
use super::search::locate;
use super::util::{normalize, word_length};

/// Points for a word of `length` characters, if it is long enough to count
pub fn word_score(length: usize, min_length: usize) -> Option<usize> {
    (length >= min_length).then(|| length - min_length + 1)
}

/// Total score of `words`. A word scores only if it is at least `min_length`
/// characters long, in the lexicon and on the board; it is then worth one
/// point plus one per character beyond the minimum. Words differing only in
/// case count once.
pub fn score<L: Lexicon>(words: &BTreeSet<String>, board: &Board, lexicon: &L, min_length: usize) -> usize {
    let words = words.iter().map(|w| normalize(w)).collect::<BTreeSet<_>>();
    words
        .into_iter()
        .filter_map(|w| {
            let points = word_score(word_length(&w), min_length)?;
            (lexicon.contains(&w) && locate(board, &w).is_some()).then(|| points)
        })
        .sum()
}
