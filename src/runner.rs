//! One pass of the terminal loop, minus the terminal.
//!
//! Time that passed while waiting for input is fed to the game before the
//! input itself is handled. A start press therefore begins with a fresh tick
//! interval instead of being charged for the idle wait on the ready screen.

use crate::core::{Flow, Game};
use crate::types::Key;

/// Advance `game` by `elapsed_ms`, then apply `key` if one was read.
///
/// Returns the flow decided by the key, or `Flow::Continue` without one.
pub fn step(game: &mut Game, elapsed_ms: u32, key: Option<Key>) -> Flow {
    game.pump(elapsed_ms);
    match key {
        Some(key) => game.handle_input(key),
        None => Flow::Continue,
    }
}
