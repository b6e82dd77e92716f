//! Render-side copy of the game state.
//!
//! The view only ever reads a [`GameSnapshot`], so a frame never shows a
//! half-applied tick. Entities live in fixed-capacity vectors; a snapshot that
//! is reused across frames does not allocate for them.

use arrayvec::{ArrayString, ArrayVec};

use crate::config::Playfield;
use crate::feedback::FeedbackText;
use crate::overlay::MessageOverlay;
use crate::scoreboard::Scoreboard;
use crate::symbol::FallingSymbol;
use crate::types::{GamePhase, Glyph, Position, Rect, Rgb};

/// Symbols beyond this many are not drawn.
pub const MAX_SNAPSHOT_SYMBOLS: usize = 64;

/// Feedback texts beyond this many are not drawn.
pub const MAX_SNAPSHOT_TEXTS: usize = 32;

/// Longest feedback message kept in a snapshot (bytes).
pub const FEEDBACK_MESSAGE_CAP: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSnapshot {
    pub bounds: Rect,
    pub glyph: Glyph,
}

impl From<&FallingSymbol> for SymbolSnapshot {
    fn from(value: &FallingSymbol) -> Self {
        Self {
            bounds: value.bounds(),
            glyph: value.glyph(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackSnapshot {
    pub pos: Position,
    pub color: Rgb,
    pub remaining_ms: i32,
    pub lifetime_ms: i32,
    pub message: ArrayString<FEEDBACK_MESSAGE_CAP>,
}

impl From<&FeedbackText> for FeedbackSnapshot {
    fn from(value: &FeedbackText) -> Self {
        Self {
            pos: value.position(),
            color: value.color(),
            remaining_ms: value.remaining_ms(),
            lifetime_ms: value.lifetime_ms(),
            message: truncated(value.message()),
        }
    }
}

impl FeedbackSnapshot {
    /// In the last third of its lifetime.
    pub fn is_fading(&self) -> bool {
        self.remaining_ms.saturating_mul(3) < self.lifetime_ms
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlaySnapshot {
    pub bounds: Rect,
    pub line1: String,
    pub line2: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub combo: u32,
    pub spawns_remaining: u32,
    pub total_spawns: u32,
    pub game_number: u32,
    pub playfield: Playfield,
    pub symbols: ArrayVec<SymbolSnapshot, MAX_SNAPSHOT_SYMBOLS>,
    pub feedback: ArrayVec<FeedbackSnapshot, MAX_SNAPSHOT_TEXTS>,
    pub overlay: OverlaySnapshot,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let playfield = Playfield::default();
        Self {
            phase: GamePhase::Ready,
            score: 0,
            combo: 0,
            spawns_remaining: 0,
            total_spawns: 0,
            game_number: 0,
            playfield,
            symbols: ArrayVec::new(),
            feedback: ArrayVec::new(),
            overlay: OverlaySnapshot {
                bounds: playfield.overlay_rect(),
                ..OverlaySnapshot::default()
            },
        }
    }
}

impl GameSnapshot {
    pub fn playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn fill_from(
        &mut self,
        phase: GamePhase,
        scoreboard: &Scoreboard,
        game_number: u32,
        playfield: Playfield,
        symbols: &[FallingSymbol],
        feedback: &[FeedbackText],
        overlay: &MessageOverlay,
    ) {
        self.phase = phase;
        self.score = scoreboard.score();
        self.combo = scoreboard.combo();
        self.spawns_remaining = scoreboard.spawns_remaining();
        self.total_spawns = scoreboard.total_spawns();
        self.game_number = game_number;
        self.playfield = playfield;

        self.symbols.clear();
        self.symbols.extend(
            symbols
                .iter()
                .take(MAX_SNAPSHOT_SYMBOLS)
                .map(SymbolSnapshot::from),
        );

        self.feedback.clear();
        self.feedback.extend(
            feedback
                .iter()
                .take(MAX_SNAPSHOT_TEXTS)
                .map(FeedbackSnapshot::from),
        );

        self.overlay.bounds = playfield.overlay_rect();
        self.overlay.line1.clear();
        self.overlay.line1.push_str(overlay.line1());
        self.overlay.line2.clear();
        self.overlay.line2.push_str(overlay.line2());
    }
}

fn truncated<const CAP: usize>(s: &str) -> ArrayString<CAP> {
    let mut out = ArrayString::new();
    for ch in s.chars() {
        if out.try_push(ch).is_err() {
            break;
        }
    }
    out
}
