//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Playfield Dimensions
//!
//! Positions are expressed in playfield pixels. The terminal view scales them
//! down to character cells.
//!
//! - **Width**: 600 px
//! - **Height**: 800 px
//! - **Symbol size**: 100 px square
//! - **Perfect line**: `HEIGHT - SIZE - 50` = 650 px
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 30 | Fixed timestep interval |
//! | `SPAWN_INTERVAL_MS` | 500 | Time between symbol spawns |
//! | `SPEED_FACTOR` | 5 | Fall distance per tick is `TICK_MS / SPEED_FACTOR` |
//! | `FEEDBACK_LIFETIME_MS` | 1000 | Lifetime of a judgment message |
//! | `TOTAL_SPAWNS` | 100 | Symbols per game |
//!
//! # Examples
//!
//! ```
//! use rhythm_master_types::{Glyph, Key, Verdict, PERFECT_LINE_HEIGHT};
//!
//! // Parse a glyph from a key character (case-insensitive)
//! let glyph = Glyph::from_char('w').unwrap();
//! assert_eq!(glyph, Glyph::W);
//! assert_eq!(glyph.as_char(), 'W');
//!
//! // Keys carry upper-case characters
//! assert_eq!(Key::Char('A').as_char(), Some('A'));
//!
//! // Verdicts know whether they keep the combo alive
//! assert!(Verdict::Perfect.is_hit());
//! assert!(!Verdict::TooSoon.is_hit());
//!
//! assert_eq!(PERFECT_LINE_HEIGHT, 650);
//! ```

/// Playfield width in pixels
pub const GAME_WIDTH: i32 = 600;

/// Playfield height in pixels
pub const GAME_HEIGHT: i32 = 800;

/// Edge length of a falling symbol in pixels
pub const SYMBOL_SIZE: i32 = 100;

/// Distance from the playfield bottom to the lowest judgeable position.
///
/// Symbols at or below `GAME_HEIGHT - JUDGE_MARGIN` are no longer targeted.
pub const JUDGE_MARGIN: i32 = 50;

/// Top of the target-zone markers (`GAME_HEIGHT - SYMBOL_SIZE - 50`)
pub const PERFECT_LINE_HEIGHT: i32 = GAME_HEIGHT - SYMBOL_SIZE - 50;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 30;

/// Time between spawns in milliseconds
pub const SPAWN_INTERVAL_MS: u32 = 500;

/// Divisor applied to the tick interval to get the per-tick fall distance
pub const SPEED_FACTOR: u32 = 5;

/// Number of symbols spawned in one game
pub const TOTAL_SPAWNS: u32 = 100;

/// Initial lifetime of a feedback message
pub const FEEDBACK_LIFETIME_MS: u32 = 1000;

/// Base points for a correct press (before combo and perfect bonus)
pub const BASE_HIT_POINTS: u32 = 10;

/// Multiplier applied to a perfect hit
pub const PERFECT_MULTIPLIER: u32 = 2;

/// Vertical offset of the score line from the top of the playfield
pub const SCORE_TOP_OFFSET: i32 = 40;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playfield_geometry_defaults() {
        assert_eq!(PERFECT_LINE_HEIGHT, 650);
        assert_eq!(GAME_HEIGHT - JUDGE_MARGIN, 750);
        assert_eq!(TICK_MS / SPEED_FACTOR, 6);
    }

    #[test]
    fn glyph_round_trips_through_char() {
        for glyph in Glyph::ALL {
            assert_eq!(Glyph::from_char(glyph.as_char()), Some(glyph));
        }
        assert_eq!(Glyph::from_char('x'), None);
    }

    #[test]
    fn glyph_colors_are_distinct() {
        for (i, a) in Glyph::ALL.iter().enumerate() {
            for b in &Glyph::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward `other` by `num / den`.
    pub fn mix(self, other: Rgb, num: u32, den: u32) -> Rgb {
        if den == 0 {
            return self;
        }
        let num = num.min(den);
        let ch = |a: u8, b: u8| -> u8 {
            ((a as u32 * (den - num) + b as u32 * num) / den) as u8
        };
        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }
}

/// A point in playfield pixels. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in playfield pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn at(pos: Position, w: i32, h: i32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }

    pub const fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub const fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }
}

/// The characters a symbol can carry, each paired with its fill color.
///
/// Variant order is the spawn table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    W,
    A,
    S,
    D,
}

impl Glyph {
    pub const ALL: [Glyph; 4] = [Glyph::W, Glyph::A, Glyph::S, Glyph::D];

    /// Parse a glyph from a key character (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use rhythm_master_types::Glyph;
    ///
    /// assert_eq!(Glyph::from_char('d'), Some(Glyph::D));
    /// assert_eq!(Glyph::from_char('S'), Some(Glyph::S));
    /// assert_eq!(Glyph::from_char('q'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Glyph::W),
            'A' => Some(Glyph::A),
            'S' => Some(Glyph::S),
            'D' => Some(Glyph::D),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glyph::W => 'W',
            Glyph::A => 'A',
            Glyph::S => 'S',
            Glyph::D => 'D',
        }
    }

    /// Fill color of a symbol carrying this glyph.
    pub fn color(self) -> Rgb {
        match self {
            Glyph::W => Rgb::new(255, 0, 0),
            Glyph::A => Rgb::new(0, 255, 0),
            Glyph::S => Rgb::new(0, 0, 255),
            Glyph::D => Rgb::new(186, 152, 28),
        }
    }
}

/// A key press as seen by the game.
///
/// The input layer folds terminal events into this small set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Leave the program from any state
    Quit,
    /// Start a game / return to the ready screen
    Start,
    /// A character key, upper-cased
    Char(char),
    /// Anything else
    Other,
}

impl Key {
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Char(c) => Some(c),
            _ => None,
        }
    }
}

/// Top-level game phase
///
/// - **Ready**: waiting for the start key
/// - **Playing**: symbols fall and key presses are judged
/// - **GameEnded**: final score shown, waiting for the start key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Ready,
    Playing,
    GameEnded,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::GameEnded => "ended",
        }
    }
}

/// Outcome of judging one key press against the target symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Target still in the upper half of the playfield
    TooSoon,
    /// Wrong key for the target
    Incorrect,
    /// Correct key inside the perfect band
    Perfect,
    /// Correct key outside the perfect band
    Nice,
}

impl Verdict {
    /// Whether this verdict extends the combo streak.
    pub fn is_hit(&self) -> bool {
        matches!(self, Verdict::Perfect | Verdict::Nice)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::TooSoon => "TOO SOON!",
            Verdict::Incorrect => "INCORRECT!",
            Verdict::Perfect => "PERFECT!",
            Verdict::Nice => "NICE!",
        }
    }

    /// Display color of the feedback text.
    pub fn color(&self) -> Rgb {
        match self {
            Verdict::TooSoon => Rgb::new(38, 216, 239),
            Verdict::Incorrect => Rgb::new(128, 0, 0),
            Verdict::Perfect => Rgb::new(255, 207, 61),
            Verdict::Nice => Rgb::new(0, 62, 49),
        }
    }
}
