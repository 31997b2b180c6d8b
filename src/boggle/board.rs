use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use ndarray::Array2;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::Deserialize;

use super::util::{normalize, Position};
use super::DEFAULT_BOARD;
use crate::error::{Error, Result};
use crate::utils::serialization;

/// Relative English letter frequencies (per mille). Q is always dealt as the
/// two letter tile "QU".
const LETTER_WEIGHTS: [(&str, u32); 26] = [
    ("A", 82), ("B", 15), ("C", 28), ("D", 43), ("E", 127), ("F", 22),
    ("G", 20), ("H", 61), ("I", 70), ("J", 2), ("K", 8), ("L", 40),
    ("M", 24), ("N", 67), ("O", 75), ("P", 19), ("QU", 1), ("R", 60),
    ("S", 63), ("T", 91), ("U", 28), ("V", 10), ("W", 24), ("X", 2),
    ("Y", 20), ("Z", 1),
];

/// Layouts accepted in a JSON board file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBoard {
    Flat(Vec<String>),
    Rows(Vec<Vec<String>>),
}

/// Square grid of tile labels. Labels are stored uppercase and may be longer
/// than one character ("QU"). Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Array2<String>,
    /// Moore neighborhood of every cell, by linear index
    adjacency: Vec<Vec<usize>>,
    /// Length of all labels concatenated, the longest word the board can spell
    total_len: usize,
}

impl Board {
    /// Builds a board from `n*n` labels in row-major order
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let len = labels.len();
        if len == 0 {
            return Err(Error::invalid("board must have at least one tile"));
        }
        let size = (len as f64).sqrt().round() as usize;
        if size * size != len {
            return Err(Error::invalid(format!(
                "{} tiles cannot form a square board",
                len
            )));
        }

        let mut cells = Vec::with_capacity(len);
        for (i, label) in labels.iter().enumerate() {
            let label = normalize(label.as_ref());
            if label.is_empty() || label.chars().any(char::is_whitespace) {
                return Err(Error::invalid(format!(
                    "tile {} has an invalid label {:?}",
                    i,
                    labels[i].as_ref()
                )));
            }
            cells.push(label);
        }

        let tiles = Array2::from_shape_vec((size, size), cells)
            .map_err(|e| Error::invalid(e.to_string()))?;
        debug!("built {}x{} board", size, size);
        Ok(Self::from_tiles(tiles))
    }

    /// Loads a board file. `.json` files hold either a flat row-major array
    /// of labels or an array of rows; anything else is read as whitespace
    /// separated labels.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            let raw: RawBoard = serialization::load_from_disk(path)?;
            Self::from_raw(raw)
        } else {
            let data = fs::read_to_string(path)
                .map_err(|e| Error::config(path.display().to_string(), e))?;
            data.parse()
        }
    }

    fn from_raw(raw: RawBoard) -> Result<Self> {
        match raw {
            RawBoard::Flat(labels) => Self::new(&labels),
            RawBoard::Rows(rows) => {
                let size = rows.len();
                if rows.iter().any(|row| row.len() != size) {
                    return Err(Error::invalid("board rows must all be as long as the board is tall"));
                }
                Self::new(&rows.concat())
            }
        }
    }

    /// Deals a random `size`×`size` board weighted by English letter frequency
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid("board must have at least one tile"));
        }
        let cells = size
            .checked_mul(size)
            .ok_or_else(|| Error::invalid(format!("a {}x{} board is too large", size, size)))?;
        let dist = WeightedIndex::new(LETTER_WEIGHTS.iter().map(|&(_, w)| w))
            .map_err(|e| Error::invalid(e.to_string()))?;
        let labels = (0..cells)
            .map(|_| LETTER_WEIGHTS[dist.sample(rng)].0)
            .collect::<Vec<_>>();
        Self::new(&labels)
    }

    fn from_tiles(tiles: Array2<String>) -> Self {
        let size = tiles.nrows();
        let adjacency = (0..size * size)
            .map(|i| {
                Position::from_index(i, size)
                    .neighbors(size)
                    .into_iter()
                    .map(|p| p.as_index(size))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let total_len = tiles.iter().map(String::len).sum();
        Self {
            tiles,
            adjacency,
            total_len,
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.tiles.nrows()
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Checks if the position lies on the board
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size() && pos.col < self.size()
    }

    pub fn label(&self, index: usize) -> &str {
        let pos = Position::from_index(index, self.size());
        &self.tiles[[pos.row, pos.col]]
    }

    /// Cells touching `index`, diagonals included, in row-major order
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }

    pub fn total_label_len(&self) -> usize {
        self.total_len
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.tiles.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Concatenates the labels along a path
    pub fn spell(&self, path: &[usize]) -> String {
        path.iter().map(|&i| self.label(i)).collect()
    }

    /// Renders the board showing only the tiles on `path`
    pub fn render_highlight(&self, path: &[usize]) -> String {
        self.render_with(|index, label| if path.contains(&index) { label } else { "." })
    }

    fn render_with<'a, F>(&'a self, mut show: F) -> String
    where
        F: FnMut(usize, &'a str) -> &'a str,
    {
        let width = self.tiles.iter().map(|l| l.chars().count()).max().unwrap_or(1);
        let size = self.size();
        let mut out = String::new();
        for row in 0..size {
            let line = (0..size)
                .map(|col| {
                    let index = row * size + col;
                    format!("{:<width$}", show(index, self.label(index)), width = width)
                })
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        let size = 4;
        let tiles = Array2::from_shape_fn((size, size), |(row, col)| {
            DEFAULT_BOARD[row * size + col].to_string()
        });
        Self::from_tiles(tiles)
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses whitespace separated labels in row-major order
    fn from_str(s: &str) -> Result<Self> {
        Self::new(&s.split_whitespace().collect::<Vec<_>>())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_with(|_, label| label))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_rejects_non_square() {
        let labels = ["A", "B", "C", "D", "E"];
        assert!(matches!(Board::new(&labels), Err(Error::InvalidArgument(_))));
        let empty: [&str; 0] = [];
        assert!(matches!(Board::new(&empty), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_bad_labels() {
        assert!(matches!(Board::new(&["A", "", "C", "D"]), Err(Error::InvalidArgument(_))));
        assert!(matches!(Board::new(&["A", "Q U", "C", "D"]), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_normalizes_and_indexes() {
        let board = Board::new(&["a", "qu", "c", "D"]).unwrap();
        assert_eq!(board.size(), 2);
        assert_eq!(board.cell_count(), 4);
        assert_eq!(board.label(1), "QU");
        assert_eq!(board.label(3), "D");
        assert_eq!(board.total_label_len(), 5);
        assert_eq!(board.spell(&[1, 0]), "QUA");
        assert_eq!(board.neighbors(0), &[1, 2, 3]);
        assert!(board.in_bounds(Position::new(1, 1)));
        assert!(!board.in_bounds(Position::new(0, 2)));
    }

    #[test]
    fn test_display() {
        let board = Board::new(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(board.to_string(), "A B\nC D\n");

        let board = Board::new(&["qu", "b", "c", "d"]).unwrap();
        assert_eq!(board.to_string(), "QU B\nC  D\n");
        assert_eq!(board.render_highlight(&[0, 3]), "QU .\n.  D\n");
    }

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.size(), 4);
        assert_eq!(board.to_string(), "E E C A\nA L E P\nH N B O\nQ T T Y\n");
        assert_eq!(board, Board::new(&DEFAULT_BOARD).unwrap());
    }

    #[test]
    fn test_parse_text_and_json() {
        let board: Board = "t i\ng e".parse().unwrap();
        assert_eq!(board.rows(), vec![vec!["T", "I"], vec!["G", "E"]]);

        let flat: RawBoard = serde_json::from_str(r#"["t","i","g","e"]"#).unwrap();
        assert_eq!(Board::from_raw(flat).unwrap(), board);

        let rows: RawBoard = serde_json::from_str(r#"[["t","i"],["g","e"]]"#).unwrap();
        assert_eq!(Board::from_raw(rows).unwrap(), board);

        let ragged: RawBoard = serde_json::from_str(r#"[["t","i","g"],["e"]]"#).unwrap();
        assert!(Board::from_raw(ragged).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Board::from_file("/nonexistent/board.txt").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_random_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::random(5, &mut rng).unwrap();
        assert_eq!(board.cell_count(), 25);
        assert!((0..25).all(|i| LETTER_WEIGHTS.iter().any(|&(l, _)| l == board.label(i))));

        let mut again = StdRng::seed_from_u64(7);
        assert_eq!(Board::random(5, &mut again).unwrap(), board);
        assert!(Board::random(0, &mut rng).is_err());
        assert!(matches!(
            Board::random(usize::MAX, &mut rng),
            Err(Error::InvalidArgument(_))
        ));
    }
}
