//! Board-based word search: locate a word's path on an N×N grid of letter
//! tiles, enumerate every dictionary word on the board, and score found words.

pub mod boggle;
pub mod error;
pub mod utils;

pub use crate::boggle::board::Board;
pub use crate::boggle::dictionary::Dictionary;
pub use crate::boggle::enumerate::{SearchConfig, Strategy};
pub use crate::boggle::game::WordSearchGame;
pub use crate::boggle::lexicon::Lexicon;
pub use crate::boggle::trie::Trie;
pub use crate::error::{Error, Result};
