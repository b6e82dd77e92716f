//! Falling symbol entity.

use crate::types::{Glyph, Position, Rect, Rgb};

/// One spawned target.
///
/// `x` is fixed at spawn; `y` only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingSymbol {
    pos: Position,
    size: i32,
    glyph: Glyph,
    /// Spawn sequence number within the current game.
    id: u32,
}

impl FallingSymbol {
    pub fn new(id: u32, pos: Position, size: i32, glyph: Glyph) -> Self {
        Self {
            pos,
            size,
            glyph,
            id,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, self.size, self.size)
    }

    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    pub fn color(&self) -> Rgb {
        self.glyph.color()
    }

    /// Move down by `dy` pixels. Negative values are ignored.
    pub fn advance(&mut self, dy: i32) {
        self.pos.y += dy.max(0);
    }

    /// Whether `key` is this symbol's character.
    pub fn matches(&self, key: char) -> bool {
        key.to_ascii_uppercase() == self.glyph.as_char()
    }

    /// Whether `key` takes part in judging at all.
    ///
    /// With `accept_any` every character counts (and will usually be judged
    /// incorrect).
    pub fn is_valid_key(key: char, accept_any: bool) -> bool {
        accept_any || Glyph::from_char(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(glyph: Glyph) -> FallingSymbol {
        FallingSymbol::new(1, Position::new(200, -100), 100, glyph)
    }

    #[test]
    fn advance_only_moves_down() {
        let mut s = symbol(Glyph::W);
        s.advance(6);
        s.advance(6);
        assert_eq!(s.position(), Position::new(200, -88));
        s.advance(-50);
        assert_eq!(s.y(), -88);
    }

    #[test]
    fn matches_is_case_insensitive() {
        let s = symbol(Glyph::A);
        assert!(s.matches('A'));
        assert!(s.matches('a'));
        assert!(!s.matches('W'));
    }

    #[test]
    fn valid_keys_follow_alphabet_unless_accepting_all() {
        for c in ['W', 'A', 'S', 'D'] {
            assert!(FallingSymbol::is_valid_key(c, false));
        }
        assert!(!FallingSymbol::is_valid_key('X', false));
        assert!(FallingSymbol::is_valid_key('X', true));
    }

    #[test]
    fn color_follows_glyph() {
        assert_eq!(symbol(Glyph::S).color(), Glyph::S.color());
        assert_eq!(symbol(Glyph::D).bounds(), Rect::new(200, -100, 100, 100));
    }
}
