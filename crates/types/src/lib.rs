//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, input mapping, reporting).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid indexed as `grid[row][col]`, with row 0 at
//! the top and column 0 at the left. A cell value of `0` is empty; every other
//! value is a power of two.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Rows and columns |
//! | `INITIAL_TILES` | 2 | Tiles placed by a fresh game |
//! | `SPAWN_FOUR_PROBABILITY` | 0.1 | Chance a spawned tile is a 4 |
//! | `SWIPE_MIN_DISTANCE` | 50.0 | Minimum swipe travel (touch units) |
//! | `TERMINAL_SWIPE_MIN_CELLS` | 4.0 | Minimum drag travel (terminal columns) |
//! | `TICK_MS` | 50 | Input poll interval of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, BOARD_SIZE};
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(
//!     GameAction::from_str("ArrowUp"),
//!     Some(GameAction::Move(Direction::Up))
//! );
//! assert_eq!(GameAction::from_str("F5"), None);
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Rows and columns of the (square) board.
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles placed when a game is initialized.
pub const INITIAL_TILES: usize = 2;

/// Value of a freshly spawned tile in 90% of spawns.
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of a freshly spawned tile in 10% of spawns.
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Probability that a spawned tile is [`SPAWN_HIGH_VALUE`].
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

/// Minimum swipe displacement along the dominant axis, in touch units.
pub const SWIPE_MIN_DISTANCE: f32 = 50.0;

/// Minimum mouse-drag displacement along the dominant axis, in terminal columns.
///
/// Terminal rows are roughly twice as tall as columns are wide; vertical drags
/// are scaled by [`TERMINAL_ROW_ASPECT`] before comparing against this.
pub const TERMINAL_SWIPE_MIN_CELLS: f32 = 4.0;

/// Column-widths per terminal row.
pub const TERMINAL_ROW_ASPECT: f32 = 2.0;

/// Input poll interval of the terminal loop in milliseconds.
pub const TICK_MS: u32 = 50;

/// The 4x4 grid of tile values, row-major (`grid[row][col]`).
pub type Grid = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// A (row, col) coordinate on the board.
pub type Pos = (usize, usize);

/// The four directions tiles can slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from its name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Actions that can be applied to a game session.
///
/// Both keyboard and swipe input resolve to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw away the current game and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse an action from a key name.
    ///
    /// Accepts browser-style key names (`ArrowLeft`), WASD letters and the
    /// plain direction names. Anything else is not an action.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("ArrowDown"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("a"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("Enter"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let dir = match s.to_lowercase().as_str() {
            "arrowup" | "up" | "w" => Direction::Up,
            "arrowdown" | "down" | "s" => Direction::Down,
            "arrowleft" | "left" | "a" => Direction::Left,
            "arrowright" | "right" | "d" => Direction::Right,
            "restart" | "r" => return Some(GameAction::Restart),
            _ => return None,
        };
        Some(GameAction::Move(dir))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle of a game session.
///
/// `Uninitialized -> Active -> Terminal`, and back to `Active` only through a
/// restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    Active,
    Terminal,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Active => "active",
            Phase::Terminal => "terminal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_constants_match_classic_rules() {
        assert_eq!(SPAWN_LOW_VALUE, 2);
        assert_eq!(SPAWN_HIGH_VALUE, 4);
        assert!((SPAWN_FOUR_PROBABILITY - 0.1).abs() < f64::EPSILON);
        assert_eq!(CELL_COUNT, 16);
    }

    #[test]
    fn direction_round_trips_through_names() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn wasd_and_arrow_names_map_to_moves() {
        assert_eq!(
            GameAction::from_str("W"),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(
            GameAction::from_str("arrowright"),
            Some(GameAction::Move(Direction::Right))
        );
        assert_eq!(
            GameAction::from_str("s"),
            Some(GameAction::Move(Direction::Down))
        );
        assert_eq!(GameAction::from_str("x"), None);
        assert_eq!(GameAction::from_str(""), None);
    }

    #[test]
    fn default_phase_is_uninitialized() {
        assert_eq!(Phase::default(), Phase::Uninitialized);
        assert_eq!(Phase::Terminal.as_str(), "terminal");
    }
}
