//! Capability interfaces for the core's external collaborators.
//!
//! The session talks to persistence and audio through the traits here, so
//! the simulation runs (and tests) without a display, a sound device, or a
//! writable disk.

pub mod audio;
pub mod score;

pub use audio::{AudioSink, NullAudio, TerminalBell};
pub use score::{FileScoreStore, MemoryScoreStore, ScoreStore};
