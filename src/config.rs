//! Runtime configuration loaded from `RHYTHM_*` environment variables.
//!
//! Unset variables keep their defaults. A value that does not parse is logged
//! and ignored, so a typo never prevents the game from starting.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::core::GameConfig;

pub const ENV_SEED: &str = "RHYTHM_SEED";
pub const ENV_TOTAL_SPAWNS: &str = "RHYTHM_TOTAL_SPAWNS";
pub const ENV_TICK_MS: &str = "RHYTHM_TICK_MS";
pub const ENV_SPAWN_INTERVAL_MS: &str = "RHYTHM_SPAWN_INTERVAL_MS";
pub const ENV_SPEED_FACTOR: &str = "RHYTHM_SPEED_FACTOR";
pub const ENV_ACCEPT_ANY_KEY: &str = "RHYTHM_ACCEPT_ANY_KEY";
pub const ENV_LOG_PATH: &str = "RHYTHM_LOG_PATH";

/// Everything the binary needs before the terminal is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub game: GameConfig,
    /// Log file; `None` keeps logging on stderr at error level.
    pub log_path: Option<String>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = parsed(&get, ENV_SEED).unwrap_or_else(clock_seed);
        let game = GameConfig {
            seed,
            total_spawns: parsed(&get, ENV_TOTAL_SPAWNS).unwrap_or(defaults.total_spawns),
            tick_ms: parsed(&get, ENV_TICK_MS).unwrap_or(defaults.tick_ms),
            spawn_interval_ms: parsed(&get, ENV_SPAWN_INTERVAL_MS)
                .unwrap_or(defaults.spawn_interval_ms),
            speed_factor: parsed(&get, ENV_SPEED_FACTOR).unwrap_or(defaults.speed_factor),
            accept_any_key: get(ENV_ACCEPT_ANY_KEY)
                .map(|s| parse_flag(&s))
                .unwrap_or(defaults.accept_any_key),
            ..defaults
        };

        Self {
            game,
            log_path: get(ENV_LOG_PATH),
        }
    }

    /// Reject configurations that would stall the game loop.
    pub fn validate(&self) -> Result<()> {
        self.game
            .validate()
            .map_err(|reason| anyhow!("invalid game configuration: {reason}"))
    }
}

fn parsed<T: FromStr>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = get(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
