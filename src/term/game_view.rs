//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PowerUpKind, Speed, PANEL_COLS, TILE_H, TILE_W};

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

/// Renders the snake board and side panel.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render a snapshot into a framebuffer covering the viewport.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (snap.cols as u16) * TILE_W;
        let board_px_h = (snap.rows as u16) * TILE_H;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // Center the frame-plus-panel block.
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_COLS) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 24, 28),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Play area background and border.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Food.
        self.fill_cell(
            &mut fb,
            start_x,
            start_y,
            snap.food.x as u16,
            snap.food.y as u16,
            '●',
            CellStyle {
                fg: Rgb::new(230, 80, 70),
                ..bg
            },
        );

        // Power-up, one glyph and color per kind.
        if let Some(power_up) = snap.power_up {
            let (ch, fg) = match power_up.kind {
                PowerUpKind::Speed => ('»', Rgb::new(240, 220, 80)),
                PowerUpKind::Invincible => ('@', Rgb::new(80, 220, 220)),
                PowerUpKind::Double => ('$', Rgb::new(200, 120, 220)),
            };
            self.fill_cell(
                &mut fb,
                start_x,
                start_y,
                power_up.pos.x as u16,
                power_up.pos.y as u16,
                ch,
                CellStyle {
                    fg,
                    bold: true,
                    ..bg
                },
            );
        }

        // Snake, alternate color while invincible, head emphasized.
        let body_fg = if snap.invincible() {
            Rgb::new(80, 200, 220)
        } else {
            Rgb::new(100, 220, 120)
        };
        for (i, segment) in snap.snake.iter().enumerate() {
            // Wrapped coordinates are always in-bounds; skip anything that
            // is not (a resize can momentarily strand segments).
            if segment.x < 0
                || segment.y < 0
                || segment.x >= snap.cols
                || segment.y >= snap.rows
            {
                continue;
            }
            self.fill_cell(
                &mut fb,
                start_x,
                start_y,
                segment.x as u16,
                segment.y as u16,
                '█',
                CellStyle {
                    fg: body_fg,
                    bold: i == 0,
                    ..bg
                },
            );
        }

        self.draw_panel(&mut fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            fb.dim_rect(start_x, start_y, frame_w, frame_h);
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * TILE_W;
        let py = start_y + 1 + cell_y * TILE_H;
        fb.fill_rect(px, py, TILE_W, TILE_H, ch, style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let effect = CellStyle {
            fg: Rgb::new(240, 220, 80),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "POINTS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.points), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.high_score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        let speed_text = match snap.speed {
            Speed::Normal => "normal",
            Speed::Fast => "FAST",
        };
        fb.put_str(panel_x, y, speed_text, value);
        y = y.saturating_add(2);

        if snap.invincible_ticks > 0 {
            fb.put_str(
                panel_x,
                y,
                &format!("invincible {}", snap.invincible_ticks),
                effect,
            );
            y = y.saturating_add(1);
        }
        if snap.double_points_ticks > 0 {
            fb.put_str(
                panel_x,
                y,
                &format!("double x2 {}", snap.double_points_ticks),
                effect,
            );
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let hint = CellStyle {
            fg: Rgb::new(180, 180, 180),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mid_y = start_y.saturating_add(h / 2);
        self.put_centered(fb, start_x, mid_y, w, "GAME OVER", style);
        self.put_centered(
            fb,
            start_x,
            mid_y.saturating_add(1),
            w,
            "enter or click to play",
            hint,
        );
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        y: u16,
        w: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
