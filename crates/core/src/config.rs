//! Game configuration and playfield geometry.
//!
//! Plain data only; loading from the environment happens in the binary.

use crate::types::{
    Position, Rect, FEEDBACK_LIFETIME_MS, GAME_HEIGHT, GAME_WIDTH, JUDGE_MARGIN, SPAWN_INTERVAL_MS,
    SPEED_FACTOR, SYMBOL_SIZE, TICK_MS, TOTAL_SPAWNS,
};

/// Playfield dimensions and the judging lines derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub symbol_size: i32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            symbol_size: SYMBOL_SIZE,
        }
    }
}

impl Playfield {
    /// Presses on a target above this line are too soon.
    pub fn midpoint(&self) -> i32 {
        self.height / 2
    }

    /// Top of the target-zone markers.
    pub fn perfect_line(&self) -> i32 {
        self.height - self.symbol_size - 50
    }

    /// A correct press on a target strictly below this line is perfect.
    pub fn perfect_threshold(&self) -> i32 {
        self.perfect_line() - self.symbol_size / 2
    }

    /// Targets must be strictly above this line to be judged.
    pub fn judge_limit(&self) -> i32 {
        self.height - JUDGE_MARGIN
    }

    /// Number of grid columns a symbol can spawn in.
    ///
    /// The outermost column on each side is kept free.
    pub fn spawn_columns(&self) -> u32 {
        if self.symbol_size <= 0 {
            return 0;
        }
        ((self.width - 2 * self.symbol_size) / self.symbol_size).max(0) as u32
    }

    /// Spawn position for grid column `col`.
    pub fn spawn_position(&self, col: u32) -> Position {
        Position::new(
            col as i32 * self.symbol_size + self.symbol_size,
            -self.symbol_size,
        )
    }

    /// Overlay panel bounds (full width, centered vertically).
    pub fn overlay_rect(&self) -> Rect {
        Rect::new(0, self.height / 2 - 50, self.width, 70)
    }
}

/// Tunables for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for spawn column and glyph selection.
    pub seed: u64,
    pub total_spawns: u32,
    pub tick_ms: u32,
    pub spawn_interval_ms: u32,
    pub speed_factor: u32,
    pub feedback_lifetime_ms: u32,
    /// Treat every character key as a game key.
    pub accept_any_key: bool,
    pub playfield: Playfield,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            total_spawns: TOTAL_SPAWNS,
            tick_ms: TICK_MS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            speed_factor: SPEED_FACTOR,
            feedback_lifetime_ms: FEEDBACK_LIFETIME_MS,
            accept_any_key: false,
            playfield: Playfield::default(),
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_total_spawns(mut self, total_spawns: u32) -> Self {
        self.total_spawns = total_spawns;
        self
    }

    /// Distance every symbol falls per tick (truncating).
    pub fn fall_per_tick(&self) -> i32 {
        (self.tick_ms / self.speed_factor.max(1)) as i32
    }

    /// Check values that would stall or break the loop.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.tick_ms == 0 {
            return Err("tick interval must be positive");
        }
        if self.speed_factor == 0 {
            return Err("speed factor must be positive");
        }
        if self.fall_per_tick() == 0 {
            return Err("speed factor must not exceed the tick interval");
        }
        if self.spawn_interval_ms == 0 {
            return Err("spawn interval must be positive");
        }
        if self.playfield.spawn_columns() == 0 {
            return Err("playfield is too narrow to spawn symbols");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_playfield_lines() {
        let p = Playfield::default();
        assert_eq!(p.midpoint(), 400);
        assert_eq!(p.perfect_line(), 650);
        assert_eq!(p.perfect_threshold(), 600);
        assert_eq!(p.judge_limit(), 750);
    }

    #[test]
    fn spawn_positions_are_grid_aligned() {
        let p = Playfield::default();
        assert_eq!(p.spawn_columns(), 4);
        let xs: Vec<i32> = (0..p.spawn_columns())
            .map(|c| p.spawn_position(c).x)
            .collect();
        assert_eq!(xs, vec![100, 200, 300, 400]);
        assert_eq!(p.spawn_position(0).y, -100);
    }

    #[test]
    fn fall_per_tick_truncates() {
        let cfg = GameConfig {
            tick_ms: 30,
            speed_factor: 4,
            ..GameConfig::default()
        };
        assert_eq!(cfg.fall_per_tick(), 7);
        assert_eq!(GameConfig::default().fall_per_tick(), 6);
    }

    #[test]
    fn validate_rejects_zero_intervals() {
        assert!(GameConfig::default().validate().is_ok());
        let cfg = GameConfig {
            speed_factor: 0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = GameConfig {
            tick_ms: 0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_symbols_that_never_fall() {
        let cfg = GameConfig {
            speed_factor: 31,
            ..GameConfig::default()
        };
        assert_eq!(cfg.fall_per_tick(), 0);
        assert_eq!(
            cfg.validate(),
            Err("speed factor must not exceed the tick interval")
        );

        let cfg = GameConfig {
            speed_factor: 30,
            ..GameConfig::default()
        };
        assert_eq!(cfg.fall_per_tick(), 1);
        assert!(cfg.validate().is_ok());
    }
}
