//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events (arrows, WASD) and mouse drags (swipes) into
//! [`crate::types::GameAction`]. Nothing here draws or touches game state.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{classify_swipe, terminal_swipe_tracker, SwipeTracker};
