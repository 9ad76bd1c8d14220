//! Core simulation — pure, deterministic, and testable.
//!
//! Everything here runs without a terminal, a clock, or a filesystem:
//! persistence and audio arrive as injected capability traits, and time
//! arrives as elapsed [`std::time::Duration`]s fed to the [`PacingClock`].
//! A seeded session replays identically.
//!
//! # Module structure
//!
//! - [`grid`]: arena dimensions and bounds checks
//! - [`snake`]: the segment chain, its growth and self-collision tests
//! - [`fruit`]: fruit placement policies
//! - [`walls`]: perimeter wall geometry for the walled variant
//! - [`collision`]: fixed-priority outcome classification
//! - [`session`]: the state machine tying it all together
//! - [`clock`]: wall-clock to tick-event pacing
//! - [`rng`]: the deterministic LCG behind fruit placement

pub mod clock;
pub mod collision;
pub mod fruit;
pub mod grid;
pub mod rng;
pub mod session;
pub mod snake;
pub mod walls;

pub use clock::PacingClock;
pub use collision::classify;
pub use fruit::FruitSpawner;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snake::SnakeBody;
pub use walls::WallLayout;
