use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::lexicon::Lexicon;
use super::search::locate;
use super::util::word_length;
use super::visited::VisitedMask;
use super::walk::{walk_from, Step};

/// How the set of words on a board is computed. Both produce the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Locate every long enough dictionary word on the board
    Dictionary,
    /// Walk the board from every cell, pruning spellings that prefix no word
    #[default]
    Board,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dictionary" | "dict" => Ok(Self::Dictionary),
            "board" => Ok(Self::Board),
            other => Err(format!("unknown strategy {:?}, expected board or dictionary", other)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dictionary => write!(f, "dictionary"),
            Self::Board => write!(f, "board"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Split the work across the rayon thread pool. Each unit of work gets
    /// its own visited mask; results only meet in the final merge.
    pub parallel: bool,
}

/// Every dictionary word of at least `min_length` characters that can be
/// spelled on the board. `min_length` is assumed to be at least 1.
pub fn all_words<L>(board: &Board, lexicon: &L, min_length: usize, config: SearchConfig) -> BTreeSet<String>
where
    L: Lexicon + Sync,
{
    let words: BTreeSet<String> = match (config.strategy, config.parallel) {
        (Strategy::Dictionary, false) => lexicon
            .words()
            .into_iter()
            .filter(|w| word_length(w) >= min_length && locate(board, w).is_some())
            .collect(),
        (Strategy::Dictionary, true) => lexicon
            .words()
            .into_par_iter()
            .filter(|w| word_length(w) >= min_length && locate(board, w).is_some())
            .collect(),
        (Strategy::Board, false) => {
            let mut mask = VisitedMask::new(board.size());
            let mut found = BTreeSet::new();
            for start in 0..board.cell_count() {
                words_from(board, lexicon, start, min_length, &mut mask, &mut found);
            }
            found
        }
        (Strategy::Board, true) => (0..board.cell_count())
            .into_par_iter()
            .map(|start| {
                let mut mask = VisitedMask::new(board.size());
                let mut found = BTreeSet::new();
                words_from(board, lexicon, start, min_length, &mut mask, &mut found);
                found
            })
            .reduce(BTreeSet::new, |mut acc, found| {
                acc.extend(found);
                acc
            }),
    };
    debug!(
        "{} strategy (parallel: {}) found {} words of length >= {}",
        config.strategy,
        config.parallel,
        words.len(),
        min_length
    );
    words
}

/// Collects the words spelled along paths starting at `start`
fn words_from<L: Lexicon>(
    board: &Board,
    lexicon: &L,
    start: usize,
    min_length: usize,
    mask: &mut VisitedMask,
    found: &mut BTreeSet<String>,
) {
    walk_from(board, start, mask, |spelled| {
        if !lexicon.has_prefix(spelled) {
            return Step::Prune;
        }
        if word_length(spelled) >= min_length && lexicon.contains(spelled) && !found.contains(spelled) {
            trace!("found {}", spelled);
            found.insert(spelled.to_string());
        }
        Step::Descend
    });
}
