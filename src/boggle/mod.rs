pub mod board;
pub mod dictionary;
pub mod enumerate;
pub mod game;
pub mod lexicon;
pub mod score;
pub mod search;
pub mod trie;
pub mod util;
pub mod visited;
mod walk;

/// Minimum word length used when the caller does not pick one
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Board a fresh game starts with, row-major
pub const DEFAULT_BOARD: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y",
];
