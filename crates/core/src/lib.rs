//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, windows, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule is exercised without a clock or a screen
//! - **Portable**: Any [`Canvas`] can present it
//!
//! # Module Structure
//!
//! - [`config`]: Tunables and playfield geometry
//! - [`game`]: The controller: state machine, spawning, motion, expiry
//! - [`symbol`]: Falling symbol entity
//! - [`feedback`]: Self-expiring judgment messages
//! - [`judge`]: Target selection and the verdict cascade
//! - [`scoreboard`]: Score, combo streak, spawn budget
//! - [`overlay`]: Two-line message panel
//! - [`ticker`]: Fixed-interval tick source
//! - [`snapshot`]: Render-side copy of the state
//! - [`draw`]: Canvas contract and scene drawing
//!
//! # Game Rules
//!
//! - A symbol spawns every 500ms at a random grid column until the budget runs out
//! - Symbols fall `tick / speed_factor` pixels per tick
//! - A press judges the oldest symbol still above the judge limit:
//!   too soon, incorrect, perfect, or nice
//! - Symbols that fall off the bottom are silent misses
//! - The game ends once the budget is spent and the field is empty
//!
//! # Example
//!
//! ```
//! use rhythm_master_core::{Flow, Game, GameConfig};
//! use rhythm_master_types::{GamePhase, Key};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7).with_total_spawns(1));
//! assert_eq!(game.handle_input(Key::Start), Flow::Continue);
//! assert_eq!(game.phase(), GamePhase::Playing);
//!
//! // Run until the single symbol has fallen through.
//! while game.phase() == GamePhase::Playing {
//!     game.update();
//! }
//! assert_eq!(game.phase(), GamePhase::GameEnded);
//! assert_eq!(game.score(), 0);
//! ```

pub mod config;
pub mod draw;
pub mod feedback;
pub mod game;
pub mod judge;
pub mod overlay;
pub mod scoreboard;
pub mod snapshot;
pub mod symbol;
pub mod ticker;

pub use rhythm_master_types as types;

pub use config::{GameConfig, Playfield};
pub use draw::{draw_scene, Align, Canvas, Draw};
pub use feedback::FeedbackText;
pub use game::{Flow, Game};
pub use judge::{judge, select_target, Judgment};
pub use overlay::MessageOverlay;
pub use scoreboard::Scoreboard;
pub use snapshot::{FeedbackSnapshot, GameSnapshot, OverlaySnapshot, SymbolSnapshot};
pub use symbol::FallingSymbol;
pub use ticker::{Ticker, MAX_CATCHUP_TICKS};
