//! Terminal snake runner (default binary).
//!
//! Wires the walled variant to the real collaborators: crossterm input, the
//! framebuffer renderer, the plain-text score file, and the terminal bell.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tui_snake::config::SessionConfig;
use tui_snake::core::GameSession;
use tui_snake::host;
use tui_snake::input::CrosstermInput;
use tui_snake::io::{FileScoreStore, TerminalBell};
use tui_snake::term::TerminalRenderer;
use tui_snake::types::HIGHEST_SCORE_FILE;

fn main() -> Result<()> {
    init_tracing();

    let mut session = GameSession::new(
        SessionConfig::walled(),
        wall_clock_seed(),
        Box::new(FileScoreStore::new(HIGHEST_SCORE_FILE)),
        Box::new(TerminalBell),
    );
    let mut input = CrosstermInput::new();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = host::run(&mut session, &mut input, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
