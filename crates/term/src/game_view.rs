//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb, BACKGROUND, TEXT};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const GRID_DOT: Rgb = Rgb::new(90, 90, 100);
const GHOST: Rgb = Rgb::new(140, 140, 140);
const BORDER: Rgb = Rgb::new(200, 200, 200);

/// Minimum panel width needed to show the side panel.
const PANEL_MIN_WIDTH: u16 = 12;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board frame placement inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Terminal renderer for a game snapshot.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(viewport);
        self.draw_border(fb, frame);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match snap.board[y as usize][x as usize] {
                    Some(kind) => self.draw_block(fb, frame, x as i8, y as i8, kind),
                    None => self.fill_cell(
                        fb,
                        frame,
                        x as i8,
                        y as i8,
                        '·',
                        CellStyle::new(GRID_DOT, WELL_BG).dim(),
                    ),
                }
            }
        }

        if let Some(active) = &snap.active {
            if let Some(ghost_y) = snap.ghost_y.filter(|&gy| gy != active.y) {
                let style = CellStyle::new(GHOST, WELL_BG).dim();
                for (x, y) in active.cells_at(ghost_y) {
                    self.fill_cell(fb, frame, x, y, '░', style);
                }
            }
            for (x, y) in active.cells_at(active.y) {
                self.draw_block(fb, frame, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
        self.draw_overlay(fb, snap, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(BORDER, BACKGROUND);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(f.x + f.w - 1, f.y, '┐', style);
        fb.put_char(f.x, f.y + f.h - 1, '└', style);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(kind.color(), WELL_BG).bold();
        self.fill_cell(fb, f, x, y, '█', style);
    }

    /// Fill one board cell; cells off the board are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = f.x + 1 + x as u16 * self.cell_w;
        let py = f.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        f: Frame,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = f.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "MODE", label);
        fb.put_str(panel_x, y + 1, snap.difficulty.as_str(), value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if let Some(next) = &snap.next {
            self.draw_preview(fb, panel_x, y, next);
        }
    }

    /// Draw the next piece from its own shape, using only rows that hold cells.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot) {
        let style = CellStyle::new(piece.color(), BACKGROUND).bold();
        let top = first_filled_row(&piece.shape);
        for (dx, dy) in piece.shape.filled_cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + (dy as u16).saturating_sub(top) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, f: Frame) {
        let (title, hint) = if snap.game_over {
            ("GAME OVER", "S: RESTART")
        } else if snap.paused {
            ("PAUSED", "P: RESUME")
        } else if !snap.running {
            ("BLOCKFALL", "S: START")
        } else {
            return;
        };

        let mid_y = f.y.saturating_add(f.h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), BACKGROUND).bold();
        self.put_centered(fb, f, mid_y.saturating_sub(1), title, style);
        self.put_centered(fb, f, mid_y, hint, CellStyle::new(TEXT, BACKGROUND));
        if !snap.running && !snap.game_over {
            self.put_centered(fb, f, mid_y + 1, "1/2/3: MODE", CellStyle::new(TEXT, BACKGROUND));
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, f: Frame, y: u16, text: &str, style: CellStyle) {
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn first_filled_row(shape: &Shape) -> u16 {
    shape
        .filled_cells()
        .map(|(_, dy)| dy as u16)
        .min()
        .unwrap_or(0)
}
