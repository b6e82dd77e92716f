//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The playfield is scaled from pixels to cells (default 12 px per column,
//! 40 px per row, so 600 x 800 becomes 50 x 20) and framed by a border.

use crate::core::{draw_scene, Align, Canvas, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, Rect};

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

/// Terminal presentation of the rhythm game.
pub struct GameView {
    /// Playfield pixels per terminal column.
    px_per_col: i32,
    /// Playfield pixels per terminal row.
    px_per_row: i32,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            px_per_col: 12,
            px_per_row: 40,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(px_per_col: i32, px_per_row: i32) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Playfield size in cells for `snap`.
    pub fn field_cells(&self, snap: &GameSnapshot) -> (u16, u16) {
        let cols = ceil_div(snap.playfield.width, self.px_per_col);
        let rows = ceil_div(snap.playfield.height, self.px_per_row);
        (clamp_u16(cols), clamp_u16(rows))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (cols, rows) = self.field_cells(snap);
        let frame_w = cols.saturating_add(2);
        let frame_h = rows.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            cols,
            rows,
            ' ',
            CellStyle::new(Rgb::BLACK, Rgb::LIGHT_GRAY),
        );

        let mut canvas = FieldCanvas {
            fb: &mut *fb,
            origin_x: start_x + 1,
            origin_y: start_y + 1,
            cols,
            rows,
            px_per_col: self.px_per_col,
            px_per_row: self.px_per_row,
        };
        draw_scene(snap, &mut canvas);

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = start_y;
        fb.put_str(panel_x, y, "COMBO", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.combo, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEFT", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.spawns_remaining, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "W A S D", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "ESC quits", CellStyle { dim: true, ..value });
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    box_outline(fb, x, y, w, h, ['┌', '┐', '└', '┘', '─', '│'], |fb, cx, cy, ch| {
        fb.put_char(cx, cy, ch, style)
    });
}

/// Walk the outline of a box, handing each position and glyph to `put`.
///
/// `glyphs` is `[top-left, top-right, bottom-left, bottom-right, horizontal, vertical]`.
fn box_outline(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    glyphs: [char; 6],
    mut put: impl FnMut(&mut FrameBuffer, u16, u16, char),
) {
    let [tl, tr, bl, br, horiz, vert] = glyphs;
    let (right, bottom) = (x + w - 1, y + h - 1);
    put(fb, x, y, tl);
    put(fb, right, y, tr);
    put(fb, x, bottom, bl);
    put(fb, right, bottom, br);
    for cx in x + 1..right {
        put(fb, cx, y, horiz);
        put(fb, cx, bottom, horiz);
    }
    for cy in y + 1..bottom {
        put(fb, x, cy, vert);
        put(fb, right, cy, vert);
    }
}

/// Cell span covered by a pixel rectangle, clipped to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellSpan {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
}

impl CellSpan {
    fn w(&self) -> u16 {
        self.x1 - self.x0
    }

    fn h(&self) -> u16 {
        self.y1 - self.y0
    }
}

/// [`Canvas`] over the playfield area of a framebuffer.
struct FieldCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    cols: u16,
    rows: u16,
    px_per_col: i32,
    px_per_row: i32,
}

impl FieldCanvas<'_> {
    fn span(&self, rect: Rect) -> Option<CellSpan> {
        let x0 = rect.x.div_euclid(self.px_per_col).max(0);
        let y0 = rect.y.div_euclid(self.px_per_row).max(0);
        let x1 = ceil_div(rect.x + rect.w, self.px_per_col).min(self.cols as i32);
        let y1 = ceil_div(rect.y + rect.h, self.px_per_row).min(self.rows as i32);
        (x0 < x1 && y0 < y1).then(|| CellSpan {
            x0: x0 as u16,
            y0: y0 as u16,
            x1: x1 as u16,
            y1: y1 as u16,
        })
    }

    fn fill_span(&mut self, span: CellSpan, color: Rgb, round: bool) {
        let style = CellStyle::new(color, color);
        let rounded = round && span.w() >= 4 && span.h() >= 3;
        for cy in span.y0..span.y1 {
            for cx in span.x0..span.x1 {
                let corner = (cx == span.x0 || cx + 1 == span.x1)
                    && (cy == span.y0 || cy + 1 == span.y1);
                if rounded && corner {
                    continue;
                }
                self.fb
                    .put_char(self.origin_x + cx, self.origin_y + cy, ' ', style);
            }
        }
    }
}

impl Canvas for FieldCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        if let Some(span) = self.span(rect) {
            self.fill_span(span, color, false);
        }
    }

    fn fill_oval(&mut self, rect: Rect, color: Rgb) {
        if let Some(span) = self.span(rect) {
            self.fill_span(span, color, true);
        }
    }

    fn stroke_oval(&mut self, rect: Rect, color: Rgb) {
        let Some(span) = self.span(rect) else {
            return;
        };
        let (ox, oy) = (self.origin_x, self.origin_y);
        if span.w() < 2 || span.h() < 2 {
            self.fb
                .overlay_char(ox + span.x0, oy + span.y0, 'o', color, false);
            return;
        }
        box_outline(
            self.fb,
            ox + span.x0,
            oy + span.y0,
            span.w(),
            span.h(),
            ['╭', '╮', '╰', '╯', '─', '│'],
            |fb, cx, cy, ch| fb.overlay_char(cx, cy, ch, color, false),
        );
    }

    fn text(&mut self, anchor: Position, text: &str, color: Rgb, align: Align) {
        let row = anchor.y.div_euclid(self.px_per_row);
        if row < 0 || row >= self.rows as i32 {
            return;
        }
        let len = text.chars().count() as i32;
        let mut col = anchor.x.div_euclid(self.px_per_col);
        if align == Align::Center {
            col -= len / 2;
        }
        for (i, ch) in text.chars().enumerate() {
            let c = col + i as i32;
            if c < 0 {
                continue;
            }
            if c >= self.cols as i32 {
                break;
            }
            self.fb.overlay_char(
                self.origin_x + c as u16,
                self.origin_y + row as u16,
                ch,
                color,
                true,
            );
        }
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    (a + b - 1).div_euclid(b)
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}
