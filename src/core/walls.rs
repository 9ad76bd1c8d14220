//! Wall geometry for the walled variant.

use crate::core::grid::Grid;
use crate::types::Cell;

/// Perimeter wall segments lining the arena edge.
///
/// Positions are deterministic from the grid, so regenerating the layout on
/// restart is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallLayout {
    grid: Grid,
}

impl WallLayout {
    pub fn perimeter(grid: Grid) -> Self {
        Self { grid }
    }

    /// Whether `cell` lies on a wall segment.
    pub fn contains(&self, cell: Cell) -> bool {
        self.grid.in_bounds(cell)
            && (cell.x == 0
                || cell.y == 0
                || cell.x == self.grid.width() - 1
                || cell.y == self.grid.height() - 1)
    }

    /// Iterate all wall cells, for rendering.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.cells().filter(move |&cell| self.contains(cell))
    }
}
