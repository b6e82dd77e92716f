//! Terminal presentation for the rhythm game.
//!
//! Frames are drawn into a plain framebuffer from a `core::GameSnapshot` and
//! flushed with a diffing renderer. No widget toolkit is involved, so cell
//! aspect ratio and colors stay under direct control.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use rhythm_master_core as core;
pub use rhythm_master_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
