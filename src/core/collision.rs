//! Collision classification for the head's next cell.

use crate::core::grid::Grid;
use crate::core::snake::SnakeBody;
use crate::core::walls::WallLayout;
use crate::types::{Cell, Collision};

/// Classify the outcome of moving the head onto `next_head`.
///
/// Checks run in fixed priority order: wall, then arena boundary, then the
/// snake's own body, then fruit. The body test accounts for the tail cell
/// being vacated this tick: a non-growing move onto the current tail is
/// legal, while an eating move keeps every segment in place.
pub fn classify(
    grid: Grid,
    walls: Option<&WallLayout>,
    snake: &SnakeBody,
    fruit: Option<Cell>,
    next_head: Cell,
) -> Collision {
    let eats = fruit == Some(next_head);

    if walls.is_some_and(|w| w.contains(next_head)) {
        Collision::Wall
    } else if !grid.in_bounds(next_head) {
        Collision::OutOfBounds
    } else if snake.would_hit(next_head, eats) {
        Collision::Body
    } else if eats {
        Collision::Fruit
    } else {
        Collision::None
    }
}
