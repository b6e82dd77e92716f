//! Rhythm Master (workspace facade crate).
//!
//! Re-exports the game crates under `rhythm_master::{core,input,term,types}`
//! and holds the binary's environment config, logging setup and loop step.

pub mod config;
pub mod logging;
pub mod runner;

pub use rhythm_master_core as core;
pub use rhythm_master_input as input;
pub use rhythm_master_term as term;
pub use rhythm_master_types as types;
