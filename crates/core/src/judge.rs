//! Hit judging - pure target selection and verdict calculation
//!
//! Nothing here mutates game state. [`crate::Game`] selects a target, asks
//! [`judge`] for a [`Judgment`], then applies it to the scoreboard.
//!
//! # Verdict Cascade
//!
//! Checked in order, first match wins:
//!
//! | Condition | Verdict | Points |
//! |-----------|---------|--------|
//! | `y < midpoint` | TooSoon | 0 |
//! | key does not match | Incorrect | 0 |
//! | `y > perfect_line - size/2` | Perfect | `(10 + combo) * 2` |
//! | otherwise | Nice | `10 + combo` |

use crate::config::Playfield;
use crate::symbol::FallingSymbol;
use crate::types::{Verdict, BASE_HIT_POINTS, PERFECT_MULTIPLIER};

/// A verdict plus the score it awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Judgment {
    pub verdict: Verdict,
    pub points: u32,
}

impl Judgment {
    pub fn miss(verdict: Verdict) -> Self {
        Self { verdict, points: 0 }
    }

    /// Feedback text shown for this judgment.
    ///
    /// ```
    /// use rhythm_master_core::Judgment;
    /// use rhythm_master_types::Verdict;
    ///
    /// let j = Judgment { verdict: Verdict::Perfect, points: 24 };
    /// assert_eq!(j.message(), "PERFECT! +24");
    /// assert_eq!(Judgment::miss(Verdict::TooSoon).message(), "TOO SOON!");
    /// ```
    pub fn message(&self) -> String {
        if self.verdict.is_hit() {
            format!("{} +{}", self.verdict.label(), self.points)
        } else {
            self.verdict.label().to_string()
        }
    }
}

/// Points for a correct press with the given streak.
pub fn hit_points(verdict: Verdict, combo: u32) -> u32 {
    let base = BASE_HIT_POINTS.saturating_add(combo);
    match verdict {
        Verdict::Perfect => base.saturating_mul(PERFECT_MULTIPLIER),
        Verdict::Nice => base,
        Verdict::TooSoon | Verdict::Incorrect => 0,
    }
}

/// Index of the symbol a key press applies to.
///
/// The oldest symbol still above the judge limit. Symbols that already fell
/// past it are left for expiry.
pub fn select_target(symbols: &[FallingSymbol], playfield: &Playfield) -> Option<usize> {
    let limit = playfield.judge_limit();
    symbols.iter().position(|s| s.y() < limit)
}

/// Judge `key` against `target` given the current combo streak.
pub fn judge(target: &FallingSymbol, key: char, combo: u32, playfield: &Playfield) -> Judgment {
    let y = target.y();
    let verdict = if y < playfield.midpoint() {
        Verdict::TooSoon
    } else if !target.matches(key) {
        Verdict::Incorrect
    } else if y > playfield.perfect_threshold() {
        Verdict::Perfect
    } else {
        Verdict::Nice
    };

    Judgment {
        verdict,
        points: hit_points(verdict, combo),
    }
}
