//! Terminal rendering: a pure view that fills framebuffers and a renderer
//! that flushes them to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

use anyhow::Result;

/// Rendering collaborator as seen by the host loop.
///
/// Implementations read the session only through the frame they are handed;
/// the session is never mutated during a render pass.
pub trait Renderer {
    /// Current drawable size in terminal cells.
    fn frame_size(&self) -> (u16, u16);

    /// Flush one frame.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}
