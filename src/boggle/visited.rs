use ndarray::Array2;

use super::util::Position;

/// Cells used by the path currently being explored. Every search owns its
/// own mask; whoever marks a cell unmarks it before returning.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    cells: Array2<bool>,
}

impl VisitedMask {
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), false),
        }
    }

    pub fn mark(&mut self, index: usize) {
        let cell = self.cell_mut(index);
        debug_assert!(!*cell, "cell {} marked twice", index);
        *cell = true;
    }

    pub fn unmark(&mut self, index: usize) {
        let cell = self.cell_mut(index);
        debug_assert!(*cell, "cell {} was not marked", index);
        *cell = false;
    }

    pub fn is_visited(&self, index: usize) -> bool {
        let pos = Position::from_index(index, self.cells.nrows());
        self.cells[[pos.row, pos.col]]
    }

    /// True when no cell is marked
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&v| !v)
    }

    fn cell_mut(&mut self, index: usize) -> &mut bool {
        let pos = Position::from_index(index, self.cells.nrows());
        &mut self.cells[[pos.row, pos.col]]
    }
}
