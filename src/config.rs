//! Session configuration.
//!
//! The two historical builds of this game (a minimal one and an enhanced one
//! with perimeter walls and a persistent best score) diverged in a handful of
//! rules. [`SessionConfig`] turns that divergence into explicit, testable
//! configuration: each build is a named preset of the one unified core.

use std::time::Duration;

use crate::types::{
    CLASSIC_TICK_MS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, WALLED_TICK_MS,
};

/// Configuration for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Arena width in cells.
    pub grid_width: i32,
    /// Arena height in cells.
    pub grid_height: i32,
    /// Whether the arena perimeter is lined with fatal wall cells.
    pub walls_enabled: bool,
    /// Whether fruit placement excludes cells occupied by the snake.
    ///
    /// The walled build placed fruit anywhere in bounds, snake or not; that
    /// behavior is preserved behind this flag rather than silently fixed.
    pub fruit_avoids_snake: bool,
    /// Whether a manual quit while playing still runs the best-score
    /// comparison. The minimal build skipped it; the walled build did not.
    pub save_on_manual_quit: bool,
    /// Snake length at the start of a run.
    pub initial_length: usize,
    /// Wall-clock time between simulation ticks.
    pub tick_interval: Duration,
}

impl SessionConfig {
    /// The minimal build: open boundary, fruit never under the snake,
    /// single-cell starting snake, 100ms ticks.
    pub fn classic() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            walls_enabled: false,
            fruit_avoids_snake: true,
            save_on_manual_quit: false,
            initial_length: 1,
            tick_interval: Duration::from_millis(CLASSIC_TICK_MS),
        }
    }

    /// The enhanced build: perimeter walls, unchecked fruit placement,
    /// two-cell starting snake, 0.2s per move, best score saved on any exit.
    pub fn walled() -> Self {
        Self {
            walls_enabled: true,
            fruit_avoids_snake: false,
            save_on_manual_quit: true,
            initial_length: 2,
            tick_interval: Duration::from_millis(WALLED_TICK_MS),
            ..Self::classic()
        }
    }

    /// Override the arena dimensions.
    pub fn with_grid(mut self, width: i32, height: i32) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    /// Override the tick interval.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::classic()
    }
}
