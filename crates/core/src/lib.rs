//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board transform, merge rules, spawning and session
//! lifecycle. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a 4x4 grid
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, the single left-slide merge primitive and the
//!   transpose/reverse mappings for the other directions
//! - [`spawn`]: random tile placement (uniform cell, 2 or 4)
//! - [`game_state`]: one session: score, phase, move → spawn → terminal check
//! - [`snapshot`]: plain-data copy of a session for renderers
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes; equal neighbours merge into
//!   one tile of double the value, and each tile merges at most once per move
//! - Merges add the new tile's value to the score
//! - A move that changes nothing is ignored: no spawn, no game-over check
//! - After a move that does change the board, one tile (2 at 90%, 4 at 10%)
//!   appears on a random empty cell
//! - The game ends when the board is full and no neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.board().count_tiles(), 2);
//!
//! game.apply_action(GameAction::Move(Direction::Left));
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! assert!(game.score() % 2 == 0);
//! ```

pub mod board;
pub mod game_state;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{slide_row_left, Board, Row};
pub use game_state::{GameState, MoveOutcome};
pub use snapshot::GameSnapshot;
pub use spawn::{random_tile_value, spawn_tile};
