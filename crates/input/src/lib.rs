//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Key`]. Everything the game
//! cares about is a single press; repeats and releases are filtered by the
//! runner.

pub mod map;

pub use rhythm_master_types as types;

pub use map::{map_key_event, should_quit};
