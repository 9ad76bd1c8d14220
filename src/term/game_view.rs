//! Maps a [`GameSession`] into a terminal framebuffer.
//!
//! Pure (no I/O), so frames can be asserted on in tests.

use crate::core::GameSession;
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::SessionState;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const SNAKE_CH: char = '█';
const FRUIT_CH: char = '●';
const WALL_CH: char = '▓';

/// Projects the session onto a centered arena with a score panel beside it
/// and a game-over overlay on top.
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current session state into a fresh framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let grid = session.grid();
        let arena_w = grid.width() as u16 * self.cell_w;
        let arena_h = grid.height() as u16 * self.cell_h;
        let frame_w = arena_w + 2;
        let frame_h = arena_h + 2;
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let arena_bg = Style::new(Rgb::new(70, 70, 80), Rgb::new(25, 25, 32));
        fb.fill_rect(origin_x + 1, origin_y + 1, arena_w, arena_h, ' ', arena_bg);
        self.draw_frame(&mut fb, origin_x, origin_y, frame_w, frame_h);

        let wall_style = Style::new(Rgb::new(130, 130, 140), Rgb::new(25, 25, 32));
        if let Some(walls) = session.walls() {
            for cell in walls.cells() {
                self.fill_cell(
                    &mut fb,
                    origin_x,
                    origin_y,
                    cell.x as u16,
                    cell.y as u16,
                    WALL_CH,
                    wall_style,
                );
            }
        }

        let fruit_style = Style::new(Rgb::new(230, 200, 40), Rgb::new(25, 25, 32));
        if let Some(fruit) = session.fruit() {
            self.fill_cell(
                &mut fb,
                origin_x,
                origin_y,
                fruit.x as u16,
                fruit.y as u16,
                FRUIT_CH,
                fruit_style,
            );
        }

        let snake_style = Style::new(Rgb::new(200, 40, 40), Rgb::new(25, 25, 32));
        for cell in session.snake().cells() {
            if grid.in_bounds(cell) {
                self.fill_cell(
                    &mut fb,
                    origin_x,
                    origin_y,
                    cell.x as u16,
                    cell.y as u16,
                    SNAKE_CH,
                    snake_style,
                );
            }
        }

        self.draw_score_panel(&mut fb, session, origin_x, origin_y, frame_w);

        if session.state() == SessionState::GameOver {
            self.draw_game_over(&mut fb, session, origin_x, origin_y, frame_w, frame_h);
        }

        fb
    }

    fn cell_origin(&self, origin_x: u16, origin_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            origin_x + 1 + x * self.cell_w,
            origin_y + 1 + y * self.cell_h,
        )
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        let (px, py) = self.cell_origin(origin_x, origin_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        for dx in 0..w {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_score_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
    ) {
        let x = origin_x + frame_w + 2;
        let label = Style::default().bold();
        let value = Style::default();

        fb.put_str(x, origin_y + 1, "SCORE", label);
        fb.put_str(x, origin_y + 2, &session.score().to_string(), value);
        fb.put_str(x, origin_y + 4, "FRUITS", label);
        fb.put_str(x, origin_y + 5, &session.fruits_eaten().to_string(), value);
        fb.put_str(x, origin_y + 7, "BEST", label);
        fb.put_str(x, origin_y + 8, &session.highest_score().to_string(), value);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        origin_x: u16,
        origin_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let lines = [
            "GAME OVER!".to_string(),
            String::new(),
            format!("Fruits eaten: {}", session.fruits_eaten()),
            format!("Highest score: {}", session.highest_score()),
            String::new(),
            "Press Y to replay or Q to quit".to_string(),
        ];

        let box_w = (lines.iter().map(|l| l.len()).max().unwrap_or(0) as u16) + 4;
        let box_h = lines.len() as u16 + 2;
        let bx = origin_x + frame_w.saturating_sub(box_w) / 2;
        let by = origin_y + frame_h.saturating_sub(box_h) / 2;

        let backdrop = Style::new(Rgb::new(220, 220, 220), Rgb::new(40, 40, 48));
        fb.fill_rect(bx, by, box_w, box_h, ' ', backdrop);

        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { backdrop.bold() } else { backdrop };
            let lx = bx + (box_w.saturating_sub(line.len() as u16)) / 2;
            fb.put_str(lx, by + 1 + i as u16, line, style);
        }
    }
}
