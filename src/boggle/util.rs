/// Canonical case for tiles, dictionary entries and queries
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// Number of characters in a word. Lengths and minimum lengths are counted
/// in characters, not bytes.
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major 1d index back into a row/col pair
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Returns all the positions touching this one (including diagonals) that
    /// lie on a `size`×`size` board. Scans the 3x3 neighborhood row by row.
    pub fn neighbors(&self, size: usize) -> Vec<Position> {
        let mut result = Vec::with_capacity(8);
        for row in self.row.saturating_sub(1)..=(self.row + 1).min(size.saturating_sub(1)) {
            for col in self.col.saturating_sub(1)..=(self.col + 1).min(size.saturating_sub(1)) {
                if row == self.row && col == self.col {
                    continue;
                }
                result.push(Position { row, col });
            }
        }
        result
    }

    /// Checks if two positions are distinct and touch, diagonals included
    pub fn is_adjacent(&self, other: Position) -> bool {
        self != &other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_corner_edge_center() {
        assert_eq!(Position::new(0, 0).neighbors(4).len(), 3);
        assert_eq!(Position::new(0, 2).neighbors(4).len(), 5);
        assert_eq!(Position::new(3, 3).neighbors(4).len(), 3);
        assert_eq!(Position::new(1, 2).neighbors(4).len(), 8);
        assert!(Position::new(0, 0).neighbors(1).is_empty());
    }

    #[test]
    fn test_neighbors_are_adjacent_and_in_order() {
        let center = Position::new(1, 1);
        let neighbors = center.neighbors(3);
        let indices = neighbors.iter().map(|p| p.as_index(3)).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2, 3, 5, 6, 7, 8]);
        assert!(neighbors.iter().all(|&p| center.is_adjacent(p)));
        assert!(!center.is_adjacent(center));
        assert!(!Position::new(0, 0).is_adjacent(Position::new(2, 1)));
    }

    #[test]
    fn test_index_round_trip() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.as_index(5), 13);
        assert_eq!(Position::from_index(13, 5), pos);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" qu "), "QU");
        assert_eq!(word_length("ÉTÉ"), 3);
    }
}
