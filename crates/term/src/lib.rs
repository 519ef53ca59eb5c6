//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! No widget/layout libraries: everything is drawn into a simple framebuffer
//! that is then flushed to a terminal backend.
//!
//! - [`GameView`] turns a snapshot (grid + score) into a framebuffer. Pure.
//! - [`palette`] gives every tile value its own stable colour.
//! - [`TerminalRenderer`] writes framebuffers to the terminal, diffing
//!   against the previous frame.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, PlayerStatusView, Viewport};
pub use palette::tile_style;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
