//! Fruit placement.

use crate::core::grid::Grid;
use crate::core::rng::SimpleRng;
use crate::core::snake::SnakeBody;
use crate::types::Cell;

/// Picks cells for new fruit.
///
/// Owns its RNG so a seeded session replays the same fruit sequence.
#[derive(Debug, Clone)]
pub struct FruitSpawner {
    rng: SimpleRng,
}

impl FruitSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick a cell for the next fruit.
    ///
    /// With `occupied` present, the choice is uniform over the free cells
    /// and `None` means the snake fills the whole arena — the caller treats
    /// that as a completed run rather than spinning on a full board.
    ///
    /// With `occupied` absent the choice is uniform over the entire arena,
    /// snake cells included. The walled build shipped with that behavior and
    /// it is preserved here as a configuration, not treated as a bug.
    pub fn spawn(&mut self, grid: Grid, occupied: Option<&SnakeBody>) -> Option<Cell> {
        match occupied {
            None => {
                let index = self.rng.next_range(grid.cell_count() as u32);
                Some(grid.cell_at(index as usize))
            }
            Some(snake) => {
                let free: Vec<Cell> =
                    grid.cells().filter(|&cell| !snake.contains(cell)).collect();
                if free.is_empty() {
                    return None;
                }
                let index = self.rng.next_range(free.len() as u32);
                Some(free[index as usize])
            }
        }
    }
}
