//! Terminal input: maps crossterm key events into [`InputEvent`]s and
//! exposes them behind the [`InputSource`] capability trait so the host
//! loop can also be driven by scripted events in tests.

pub mod map;

pub use map::map_key;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::types::InputEvent;

/// Input collaborator as seen by the host loop.
pub trait InputSource {
    /// Wait up to `timeout` for the next event. `Ok(None)` means the timeout
    /// elapsed quietly.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Reads key events from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            // Repeats, releases, resizes and the rest carry no game meaning.
            _ => Ok(None),
        }
    }
}
