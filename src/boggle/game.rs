use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;

use log::debug;

use super::board::Board;
use super::dictionary::Dictionary;
use super::enumerate::{self, SearchConfig};
use super::lexicon::Lexicon;
use super::score;
use super::search;
use super::util::normalize;
use crate::error::{Error, Result};

const NOT_LOADED: &str = "no dictionary has been loaded";

/// A word search game: one board, at most one dictionary, and the queries
/// players make against them. Starts with the default 4x4 board and no
/// dictionary; every query that consults the dictionary fails until one is
/// loaded. An empty dictionary counts as loaded.
#[derive(Debug)]
pub struct WordSearchGame<L = Dictionary> {
    board: Board,
    lexicon: Option<L>,
    config: SearchConfig,
}

impl<L: Lexicon + Sync> WordSearchGame<L> {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            board: Board::default(),
            lexicon: None,
            config,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Loads the dictionary file, replacing any previous dictionary. On
    /// failure the previous dictionary (or its absence) is kept.
    pub fn load_dictionary<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.lexicon = Some(L::load(path)?);
        Ok(())
    }

    pub fn load_dictionary_from<R: BufRead>(&mut self, reader: R) -> Result<()> {
        let lexicon = L::from_reader(reader)?;
        debug!("loaded {} words from stream", lexicon.len());
        self.lexicon = Some(lexicon);
        Ok(())
    }

    pub fn set_lexicon(&mut self, lexicon: L) {
        self.lexicon = Some(lexicon);
    }

    pub fn lexicon(&self) -> Option<&L> {
        self.lexicon.as_ref()
    }

    /// Replaces the board with `n*n` labels given in row-major order
    pub fn set_board<S: AsRef<str>>(&mut self, labels: &[S]) -> Result<()> {
        self.board = Board::new(labels)?;
        Ok(())
    }

    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn render_board(&self) -> String {
        self.board.to_string()
    }

    pub fn is_valid_word(&self, word: &str) -> Result<bool> {
        let word = non_empty(word, "word")?;
        Ok(self.loaded()?.contains(&word))
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool> {
        let prefix = non_empty(prefix, "prefix")?;
        Ok(self.loaded()?.has_prefix(&prefix))
    }

    /// Row-major cell indices spelling `word`, or an empty path if the word
    /// is not on the board
    pub fn locate(&self, word: &str) -> Result<Vec<usize>> {
        let word = non_empty(word, "word")?;
        self.loaded()?;
        Ok(search::locate(&self.board, &word).unwrap_or_default())
    }

    /// Every dictionary word of at least `min_length` characters on the board
    pub fn all_words(&self, min_length: usize) -> Result<BTreeSet<String>> {
        check_min_length(min_length)?;
        let lexicon = self.loaded()?;
        Ok(enumerate::all_words(&self.board, lexicon, min_length, self.config))
    }

    pub fn score(&self, words: &BTreeSet<String>, min_length: usize) -> Result<usize> {
        check_min_length(min_length)?;
        let lexicon = self.loaded()?;
        Ok(score::score(words, &self.board, lexicon, min_length))
    }

    fn loaded(&self) -> Result<&L> {
        self.lexicon.as_ref().ok_or(Error::IllegalState(NOT_LOADED))
    }
}

impl<L: Lexicon + Sync> Default for WordSearchGame<L> {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(text: &str, what: &str) -> Result<String> {
    let text = normalize(text);
    if text.is_empty() {
        return Err(Error::invalid(format!("{} must not be empty", what)));
    }
    Ok(text)
}

fn check_min_length(min_length: usize) -> Result<()> {
    if min_length < 1 {
        return Err(Error::invalid("minimum word length must be at least 1"));
    }
    Ok(())
}
