//! Terminal snake with a pure, testable simulation core.
//!
//! The [`core`] module is the game: grid, snake, fruit, walls, collision
//! classification, the session state machine, and the pacing clock. It
//! depends on nothing but injected capability traits ([`io`]) and is fully
//! deterministic under a seed. The [`term`], [`input`], and [`host`] modules
//! are the thin terminal shell around it.

pub mod config;
pub mod core;
pub mod host;
pub mod input;
pub mod io;
pub mod term;
pub mod types;
