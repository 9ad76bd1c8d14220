//! The host loop: render, poll input, tick.
//!
//! Generic over the input and rendering collaborators so the same loop runs
//! against a real terminal or against scripted fakes in tests. The loop owns
//! no game rules: pacing comes from the [`PacingClock`] and every state
//! change goes through the session.

use std::time::Instant;

use anyhow::Result;

use crate::core::{GameSession, PacingClock};
use crate::input::InputSource;
use crate::term::{GameView, Renderer, Viewport};

/// Drive `session` until it requests exit.
///
/// Each iteration renders a frame, waits for input at most until the next
/// tick is due, and advances the simulation when the clock says so. The
/// input-poll timeout is what paces the loop; there is no explicit sleep.
pub fn run(
    session: &mut GameSession,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
) -> Result<()> {
    let view = GameView::default();
    let mut clock = PacingClock::new(session.config().tick_interval);
    let mut last_check = Instant::now();

    loop {
        let (width, height) = renderer.frame_size();
        let frame = view.render(session, Viewport::new(width, height));
        renderer.present(&frame)?;

        if let Some(event) = input.poll_event(clock.remaining())? {
            if session.apply_event(event) {
                return Ok(());
            }
        }

        let now = Instant::now();
        let elapsed = now - last_check;
        last_check = now;
        if clock.tick_due(elapsed) {
            session.tick();
        }
    }
}
