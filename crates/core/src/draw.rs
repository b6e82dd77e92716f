//! Draw contract between the game and whatever presents it.
//!
//! Coordinates are playfield pixels. A [`Canvas`] decides how shapes map to
//! its output (terminal cells, a pixel buffer, a recording in tests).

use crate::config::Playfield;
use crate::snapshot::{FeedbackSnapshot, GameSnapshot, OverlaySnapshot, SymbolSnapshot};
use crate::types::{Position, Rect, Rgb, SCORE_TOP_OFFSET};

/// Background of the overlay panel.
pub const OVERLAY_COLOR: Rgb = Rgb::new(118, 35, 35);

/// Horizontal anchoring of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Render sink for shapes and text.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn fill_oval(&mut self, rect: Rect, color: Rgb);
    fn stroke_oval(&mut self, rect: Rect, color: Rgb);
    fn text(&mut self, anchor: Position, text: &str, color: Rgb, align: Align);
}

/// Something that knows how to put itself on a canvas.
pub trait Draw {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C);
}

impl Draw for SymbolSnapshot {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_oval(self.bounds, self.glyph.color());
        let mut buf = [0u8; 4];
        let label = self.glyph.as_char().encode_utf8(&mut buf);
        canvas.text(
            Position::new(self.bounds.center_x(), self.bounds.center_y()),
            label,
            Rgb::BLACK,
            Align::Center,
        );
    }
}

impl Draw for FeedbackSnapshot {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let color = if self.is_fading() {
            self.color.mix(Rgb::LIGHT_GRAY, 1, 2)
        } else {
            self.color
        };
        canvas.text(self.pos, &self.message, color, Align::Left);
    }
}

impl Draw for OverlaySnapshot {
    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let b = self.bounds;
        canvas.fill_rect(b, OVERLAY_COLOR);
        canvas.text(
            Position::new(b.center_x(), b.y + 30),
            &self.line1,
            Rgb::BLACK,
            Align::Center,
        );
        canvas.text(
            Position::new(b.center_x(), b.y + 60),
            &self.line2,
            Rgb::BLACK,
            Align::Center,
        );
    }
}

/// Target-zone markers: one ring per symbol width along the perfect line.
pub fn target_markers(playfield: &Playfield) -> impl Iterator<Item = Rect> + '_ {
    let size = playfield.symbol_size.max(1);
    let y = playfield.perfect_line();
    (1..)
        .map(move |i| i * size)
        .take_while(move |x| *x < playfield.width - size)
        .map(move |x| Rect::new(x, y, size, size))
}

/// Draw a full frame.
pub fn draw_scene<C: Canvas + ?Sized>(snap: &GameSnapshot, canvas: &mut C) {
    if snap.playing() {
        for symbol in &snap.symbols {
            symbol.draw(canvas);
        }
        for text in &snap.feedback {
            text.draw(canvas);
        }
    } else {
        snap.overlay.draw(canvas);
    }

    for rect in target_markers(&snap.playfield) {
        canvas.stroke_oval(rect, Rgb::BLACK);
    }

    let score = snap.score.to_string();
    canvas.text(
        Position::new(snap.playfield.width / 2, SCORE_TOP_OFFSET),
        &score,
        Rgb::BLACK,
        Align::Center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::types::Key;

    #[derive(Debug, PartialEq)]
    enum Op {
        FillRect(Rect),
        FillOval(Rect, Rgb),
        StrokeOval(Rect),
        Text(Position, String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Canvas for Recorder {
        fn fill_rect(&mut self, rect: Rect, _color: Rgb) {
            self.0.push(Op::FillRect(rect));
        }
        fn fill_oval(&mut self, rect: Rect, color: Rgb) {
            self.0.push(Op::FillOval(rect, color));
        }
        fn stroke_oval(&mut self, rect: Rect, _color: Rgb) {
            self.0.push(Op::StrokeOval(rect));
        }
        fn text(&mut self, anchor: Position, text: &str, _color: Rgb, _align: Align) {
            self.0.push(Op::Text(anchor, text.to_string()));
        }
    }

    #[test]
    fn markers_span_inner_columns() {
        let xs: Vec<i32> = target_markers(&Playfield::default()).map(|r| r.x).collect();
        assert_eq!(xs, vec![100, 200, 300, 400]);
        assert!(target_markers(&Playfield::default()).all(|r| r.y == 650));
    }

    #[test]
    fn ready_frame_draws_overlay_markers_and_score() {
        let snap = Game::default().snapshot();
        let mut rec = Recorder::default();
        draw_scene(&snap, &mut rec);

        assert_eq!(rec.0[0], Op::FillRect(Rect::new(0, 350, 600, 70)));
        assert_eq!(
            rec.0[1],
            Op::Text(Position::new(300, 380), "Press SPACE to start!".into())
        );
        let rings = rec
            .0
            .iter()
            .filter(|op| matches!(op, Op::StrokeOval(_)))
            .count();
        assert_eq!(rings, 4);
        assert_eq!(
            rec.0.last(),
            Some(&Op::Text(Position::new(300, 40), "0".into()))
        );
    }

    #[test]
    fn playing_frame_draws_symbols_not_overlay() {
        let mut game = Game::new(crate::GameConfig {
            spawn_interval_ms: 30,
            ..crate::GameConfig::default()
        });
        game.handle_input(Key::Start);
        game.update();
        let snap = game.snapshot();
        let mut rec = Recorder::default();
        draw_scene(&snap, &mut rec);

        let symbol = game.symbols()[0];
        assert_eq!(rec.0[0], Op::FillOval(symbol.bounds(), symbol.color()));
        assert!(!rec.0.iter().any(|op| matches!(op, Op::FillRect(_))));
    }
}
