//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The world is drawn at a fixed 16x15 tile window that scrolls with the
//! camera. One tile covers `2 * scale` columns and `scale` rows, which keeps
//! tiles roughly square with typical terminal glyphs.

use crate::core::{Actor, GameSession, SessionState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::Palette;
use crate::types::{TILE_SIZE, VIEW_COLUMNS, VIEW_ROWS};

pub const MIN_SCALE: u16 = 1;
pub const MAX_SCALE: u16 = 4;

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

/// Top-left corner and size of the play area inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlayArea {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Renders a game session into a framebuffer.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(1, Palette::default())
    }
}

impl GameView {
    /// `scale` is clamped to `MIN_SCALE..=MAX_SCALE`.
    pub fn new(scale: u16, palette: Palette) -> Self {
        let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        Self {
            cell_w: 2 * scale,
            cell_h: scale,
            palette,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Terminal size needed to show the whole play area and its border.
    pub fn required_size(&self) -> Viewport {
        Viewport::new(
            VIEW_COLUMNS as u16 * self.cell_w + 2,
            VIEW_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let need = self.required_size();
        if viewport.width < need.width || viewport.height < need.height {
            self.draw_too_small(fb, viewport, need);
            return;
        }

        let frame_x = (viewport.width - need.width) / 2;
        let frame_y = (viewport.height - need.height) / 2;
        let area = PlayArea {
            x: frame_x + 1,
            y: frame_y + 1,
            w: need.width - 2,
            h: need.height - 2,
        };

        let border = CellStyle::text(Rgb::new(200, 200, 200), Rgb::BLACK);
        draw_border(fb, frame_x, frame_y, need.width, need.height, border);
        fb.fill_rect(
            area.x,
            area.y,
            area.w,
            area.h,
            ' ',
            CellStyle::solid(self.palette.background),
        );

        self.draw_tiles(fb, session, area);
        for enemy in session.enemies() {
            self.draw_actor(fb, session, area, &enemy.body, self.palette.enemy);
        }
        self.draw_actor(fb, session, area, session.player(), self.palette.player);

        let text = CellStyle::text(self.palette.text, self.palette.background).bold();
        fb.put_str(area.x + 1, area.y, "Score: ", text);
        fb.put_u32(area.x + 8, area.y, session.score(), text);

        if session.state() == SessionState::LevelComplete {
            let line = "LEVEL COMPLETE";
            let w = line.len() as u16;
            let x = area.x + area.w.saturating_sub(w) / 2;
            fb.put_str(x, area.y + area.h / 2, line, text);
        }

        let hint_y = frame_y + need.height;
        if hint_y < viewport.height {
            let hint = CellStyle::text(Rgb::new(140, 140, 140), Rgb::BLACK);
            fb.put_str(frame_x, hint_y, "←/→ move  space jump  q quit", hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, session: &GameSession, area: PlayArea) {
        let level = session.level();
        let offset = session.camera_offset();
        let first_col = (offset / TILE_SIZE).floor() as i64;

        // One extra column covers the partially scrolled-in tile.
        for ty in 0..VIEW_ROWS as i64 {
            for tx in first_col..=first_col + VIEW_COLUMNS as i64 {
                let Some(color) = level.get(tx, ty).and_then(|t| self.palette.tile(t)) else {
                    continue;
                };
                let x = tx as f32 * TILE_SIZE - offset;
                let y = ty as f32 * TILE_SIZE;
                self.fill_world_rect(fb, area, x, y, CellStyle::solid(color));
            }
        }
    }

    fn draw_actor(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        area: PlayArea,
        actor: &Actor,
        color: Rgb,
    ) {
        let x = session.camera().to_view_x(actor.x);
        self.fill_world_rect(fb, area, x, actor.y, CellStyle::solid(color));
    }

    /// Fill the cells covered by a tile-sized box at view pixel `(x, y)`,
    /// clipped to the play area.
    fn fill_world_rect(&self, fb: &mut FrameBuffer, area: PlayArea, x: f32, y: f32, style: CellStyle) {
        let (c0, c1) = pixel_span(x, self.cell_w, area.w);
        let (r0, r1) = pixel_span(y, self.cell_h, area.h);
        if c0 >= c1 || r0 >= r1 {
            return;
        }
        fb.fill_rect(area.x + c0, area.y + r0, c1 - c0, r1 - r0, ' ', style);
    }

    fn draw_too_small(&self, fb: &mut FrameBuffer, viewport: Viewport, need: Viewport) {
        let style = CellStyle::text(Rgb::WHITE, Rgb::BLACK).bold();
        let msg = "Terminal too small: need ";
        fb.put_str(0, 0, msg, style);
        let x = fb.put_u32(msg.len() as u16, 0, need.width.into(), style);
        fb.put_char(x, 0, 'x', style);
        fb.put_u32(x.saturating_add(1), 0, need.height.into(), style);
        if viewport.height > 1 {
            fb.put_str(0, 1, "Resize or press q to quit", CellStyle::default());
        }
    }
}

/// Terminal cell range `[start, end)` covered by a tile-sized span starting
/// at pixel `p`, clipped to `0..limit`.
fn pixel_span(p: f32, cells_per_tile: u16, limit: u16) -> (u16, u16) {
    let scale = cells_per_tile as f32 / TILE_SIZE;
    let start = (p * scale).floor();
    let end = ((p + TILE_SIZE) * scale).floor();
    let clip = |v: f32| v.clamp(0.0, limit as f32) as u16;
    (clip(start), clip(end))
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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
