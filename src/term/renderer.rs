//! Flushes framebuffers to a real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::term::Renderer;

/// Terminal session owning raw mode and the alternate screen.
///
/// Redraws are diffed against the previously flushed frame; a size change
/// falls back to a full repaint.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    last_frame: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last_frame: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything, e.g. after a resize event.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
    }

    fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let full = match &self.last_frame {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style_in_effect: Option<Style> = None;
        for y in 0..fb.height() {
            let mut cursor_at: Option<u16> = None;
            for x in 0..fb.width() {
                let glyph = fb.get(x, y).unwrap_or_default();
                if !full {
                    let prev = self
                        .last_frame
                        .as_ref()
                        .and_then(|p| p.get(x, y))
                        .unwrap_or_default();
                    if prev == glyph {
                        cursor_at = None;
                        continue;
                    }
                }
                if cursor_at != Some(x) {
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                }
                if style_in_effect != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    style_in_effect = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
                cursor_at = Some(x + 1);
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        self.last_frame = Some(fb.clone());
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(to_crossterm(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(to_crossterm(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn frame_size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.draw(fb)
    }
}

fn to_crossterm(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
