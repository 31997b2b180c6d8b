use log::trace;

use super::board::Board;
use super::util::Position;
use super::visited::VisitedMask;
use super::walk::{walk_from, Step};

/// Finds one occurrence path of `word` (canonical case) on the board: a
/// sequence of distinct, pairwise adjacent cells whose labels concatenate to
/// exactly `word`. Each tile is matched as a whole label. When several paths
/// exist the first one found wins; which one that is depends on scan order.
pub fn locate(board: &Board, word: &str) -> Option<Vec<usize>> {
    if word.is_empty() || word.len() > board.total_label_len() {
        return None;
    }

    let mut mask = VisitedMask::new(board.size());
    for start in 0..board.cell_count() {
        if !word.starts_with(board.label(start)) {
            continue;
        }
        let found = walk_from(board, start, &mut mask, |spelled| {
            if spelled == word {
                Step::Stop
            } else if word.starts_with(spelled) {
                Step::Descend
            } else {
                Step::Prune
            }
        });
        if let Some(path) = found {
            trace!("located {} at {:?}", word, path);
            return Some(path);
        }
    }
    None
}

/// Checks that `path` is an occurrence path of `word` on `board`
pub fn is_occurrence(board: &Board, word: &str, path: &[usize]) -> bool {
    let size = board.size();
    let in_bounds = path
        .iter()
        .all(|&i| board.in_bounds(Position::from_index(i, size)));
    let distinct = path
        .iter()
        .enumerate()
        .all(|(i, cell)| !path[..i].contains(cell));
    let adjacent = path.windows(2).all(|pair| {
        Position::from_index(pair[0], size).is_adjacent(Position::from_index(pair[1], size))
    });
    !path.is_empty() && in_bounds && distinct && adjacent && board.spell(path) == word
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiger_board() -> Board {
        Board::new(&[
            "T", "I", "G", "E", //
            "X", "X", "X", "R", //
            "A", "C", "T", "X", //
            "X", "X", "X", "X",
        ])
        .unwrap()
    }

    #[test]
    fn test_locate_tiger() {
        let board = tiger_board();
        let path = locate(&board, "TIGER").unwrap();
        assert!(is_occurrence(&board, "TIGER", &path));
        // only one I, G, E and R on the board
        assert_eq!(path, vec![0, 1, 2, 3, 7]);
    }

    #[test]
    fn test_locate_whole_word_tiles() {
        let board = Board::new(&["TIGER", "XXX", "ACT", "XX"]).unwrap();
        assert_eq!(locate(&board, "TIGER"), Some(vec![0]));
        assert_eq!(locate(&board, "ACTXXX"), Some(vec![2, 1]));
        assert_eq!(locate(&board, "TIG"), None);
    }

    #[test]
    fn test_row_major_r_is_not_adjacent_to_e() {
        // E ends the first row and R starts the second: not neighbors
        let board = Board::new(&[
            "T", "I", "G", "E", //
            "R", "X", "X", "X", //
            "A", "C", "T", "X", //
            "X", "X", "X", "X",
        ])
        .unwrap();
        assert_eq!(locate(&board, "TIGER"), None);
        assert!(locate(&board, "TIGE").is_some());
    }

    #[test]
    fn test_locate_absent() {
        let board = tiger_board();
        assert_eq!(locate(&board, "POPE"), None);
        // every letter is present but not along adjacent cells
        assert_eq!(locate(&board, "GAT"), None);
        assert_eq!(locate(&board, ""), None);
    }

    #[test]
    fn test_no_cell_reuse() {
        let board = Board::new(&["A", "B", "X", "X"]).unwrap();
        assert!(locate(&board, "AB").is_some());
        assert!(locate(&board, "ABA").is_none());
    }

    #[test]
    fn test_longer_than_board() {
        let board = Board::new(&["A"]).unwrap();
        assert!(locate(&board, "AA").is_none());
        assert_eq!(locate(&board, "A"), Some(vec![0]));
    }

    #[test]
    fn test_multi_letter_tiles() {
        let board = Board::new(&["QU", "I", "T", "E"]).unwrap();
        let path = locate(&board, "QUITE").unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);

        // a single QU tile spells a word longer than the tile count
        let single = Board::new(&["QU"]).unwrap();
        assert_eq!(locate(&single, "QU"), Some(vec![0]));
        // tiles are atomic: Q alone and QUA are not spelled by a QU tile
        assert!(locate(&single, "Q").is_none());
        assert!(locate(&board, "QI").is_none());
    }

    #[test]
    fn test_backtracks_past_dead_ends() {
        // the first A tried (index 0) leads nowhere, the second one works
        let board = Board::new(&[
            "A", "X", "X", //
            "X", "X", "A", //
            "X", "X", "N",
        ])
        .unwrap();
        let path = locate(&board, "AN").unwrap();
        assert_eq!(path, vec![5, 8]);
    }

    #[test]
    fn test_locate_is_stable() {
        let board = Board::default();
        for word in ["LENT", "BENTHAL", "EELPOT", "POPE"] {
            assert_eq!(locate(&board, word).is_some(), locate(&board, word).is_some());
        }
        let lent = locate(&board, "LENT").unwrap();
        assert!(is_occurrence(&board, "LENT", &lent));
    }

    #[test]
    fn test_is_occurrence() {
        let board = tiger_board();
        assert!(is_occurrence(&board, "TIG", &[0, 1, 2]));
        assert!(!is_occurrence(&board, "TIG", &[0, 1]));
        assert!(!is_occurrence(&board, "TIT", &[0, 1, 0]));
        assert!(!is_occurrence(&board, "TC", &[0, 9]));
        assert!(!is_occurrence(&board, "ER", &[3, 4]));
        assert!(!is_occurrence(&board, "", &[]));
    }
}
