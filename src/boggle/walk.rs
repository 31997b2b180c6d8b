use super::board::Board;
use super::visited::VisitedMask;

/// What the walk does after a cell has been appended to the current path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Keep extending the path through unvisited neighbors
    Descend,
    /// Abandon this branch and backtrack
    Prune,
    /// Accept the current path and end the walk
    Stop,
}

/// One cell of the path being explored
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: usize,
    /// Length of the spelled text before this cell's label was appended
    base: usize,
    /// Next entry of the cell's neighbor list to try
    cursor: usize,
}

/// Depth first walk over simple paths starting at `start`, using an explicit
/// frame stack instead of recursion. `visit` sees the labels spelled along
/// the current path every time a cell is appended. Returns the path on which
/// `visit` said `Stop`, if any.
///
/// `mask` must be clear on entry and is clear again on return.
pub fn walk_from<F>(board: &Board, start: usize, mask: &mut VisitedMask, mut visit: F) -> Option<Vec<usize>>
where
    F: FnMut(&str) -> Step,
{
    debug_assert!(mask.is_clear());
    let mut spelled = String::new();
    let mut stack: Vec<Frame> = Vec::with_capacity(board.cell_count());
    let mut next = Some(start);

    loop {
        if let Some(cell) = next.take() {
            let base = spelled.len();
            spelled.push_str(board.label(cell));
            mask.mark(cell);
            stack.push(Frame { cell, base, cursor: 0 });

            match visit(&spelled) {
                Step::Descend => {}
                Step::Prune => retreat(&mut stack, mask, &mut spelled),
                Step::Stop => {
                    let path = stack.iter().map(|f| f.cell).collect();
                    while !stack.is_empty() {
                        retreat(&mut stack, mask, &mut spelled);
                    }
                    return Some(path);
                }
            }
        }

        let frame = stack.last_mut()?;
        let neighbors = board.neighbors(frame.cell);
        while frame.cursor < neighbors.len() {
            let candidate = neighbors[frame.cursor];
            frame.cursor += 1;
            if !mask.is_visited(candidate) {
                next = Some(candidate);
                break;
            }
        }
        if next.is_none() {
            // neighbors exhausted
            retreat(&mut stack, mask, &mut spelled);
        }
    }
}

/// Pops the top frame, releasing its cell and its label
fn retreat(stack: &mut Vec<Frame>, mask: &mut VisitedMask, spelled: &mut String) {
    if let Some(frame) = stack.pop() {
        mask.unmark(frame.cell);
        spelled.truncate(frame.base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_visits_every_simple_path() {
        // 2x2 board: every cell touches every other, so 4 * 3! simple paths
        // of full length and 4 + 12 + 24 + 24 = 64 prefixes in total
        let board = Board::new(&["A", "B", "C", "D"]).unwrap();
        let mut mask = VisitedMask::new(2);
        let mut seen = 0;
        for start in 0..4 {
            let found = walk_from(&board, start, &mut mask, |_| {
                seen += 1;
                Step::Descend
            });
            assert!(found.is_none());
            assert!(mask.is_clear());
        }
        assert_eq!(seen, 64);
    }

    #[test]
    fn test_walk_stop_returns_path_and_clears_mask() {
        let board = Board::new(&["A", "B", "C", "D"]).unwrap();
        let mut mask = VisitedMask::new(2);
        let path = walk_from(&board, 3, &mut mask, |s| match s {
            "DCA" => Step::Stop,
            s if "DCA".starts_with(s) => Step::Descend,
            _ => Step::Prune,
        });
        assert_eq!(path, Some(vec![3, 2, 0]));
        assert!(mask.is_clear());
    }

    #[test]
    fn test_walk_prune_at_start() {
        let board = Board::new(&["A"]).unwrap();
        let mut mask = VisitedMask::new(1);
        let mut calls = 0;
        let found = walk_from(&board, 0, &mut mask, |_| {
            calls += 1;
            Step::Prune
        });
        assert!(found.is_none());
        assert_eq!(calls, 1);
        assert!(mask.is_clear());
    }
}
