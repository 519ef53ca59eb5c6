//! Game state module - one game session
//!
//! Ties the board, score and spawn RNG together and enforces the session
//! lifecycle:
//!
//! ```text
//! Uninitialized --start--> Active --(no legal move after spawn)--> Terminal
//!                            ^  |                                     |
//!                            |  +-- move (effective or not) ----------+
//!                            +------------- restart ------------------+
//! ```
//!
//! An effective move is always followed by exactly one spawn and a terminal
//! check. An ineffective move changes nothing and does neither.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::snapshot::GameSnapshot;
use crate::spawn::spawn_tile;
use crate::types::{Direction, GameAction, Phase, Pos, INITIAL_TILES};

/// What a single move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The board changed (the move was "effective").
    pub moved: bool,
    /// Score added by merges in this move.
    pub score_gained: u32,
    /// Where the follow-up tile landed, if one was spawned.
    pub spawned: Option<Pos>,
    /// This move ended the game.
    pub game_over: bool,
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    phase: Phase,
    rng: StdRng,
    seed: u64,
    /// Monotonic episode id (increments on every initialization).
    episode_id: u32,
    /// Effective moves in the current episode.
    moves: u32,
    last_spawn: Option<Pos>,
}

impl GameState {
    /// Create an uninitialized session with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            score: 0,
            phase: Phase::Uninitialized,
            rng: StdRng::seed_from_u64(seed),
            seed,
            episode_id: 0,
            moves: 0,
            last_spawn: None,
        }
    }

    /// Create an active session from an existing board and score.
    ///
    /// The phase is derived from the board, so a packed board with no legal
    /// move starts out terminal.
    pub fn from_board(board: Board, score: u32, seed: u64) -> Self {
        let mut state = Self::new(seed);
        state.board = board;
        state.score = score;
        state.episode_id = 1;
        state.phase = if board.is_terminal() {
            Phase::Terminal
        } else {
            Phase::Active
        };
        state
    }

    /// Start the game if it has not been started yet.
    pub fn start(&mut self) {
        if self.phase != Phase::Uninitialized {
            return;
        }
        self.initialize();
    }

    /// Clear the board, reset the score and place the opening tiles.
    ///
    /// Works from any phase and carries nothing over from the previous game.
    pub fn initialize(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.last_spawn = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        for _ in 0..INITIAL_TILES {
            self.spawn();
        }
        self.phase = Phase::Active;
    }

    /// Alias for [`GameState::initialize`], for the restart control.
    pub fn restart(&mut self) {
        self.initialize();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Uninitialized
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Terminal
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn last_spawn(&self) -> Option<Pos> {
        self.last_spawn
    }

    /// True iff no move can change the board.
    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// Place one random tile on an empty cell; no-op on a full board.
    pub fn spawn(&mut self) -> Option<Pos> {
        let placed = spawn_tile(&mut self.board, &mut self.rng).map(|(pos, _)| pos);
        if placed.is_some() {
            self.last_spawn = placed;
        }
        placed
    }

    /// Slide the board in `dir`.
    ///
    /// If the board changed: adds the merge score, spawns one tile and checks
    /// for game over. If it did not change, nothing happens. Moves outside the
    /// `Active` phase are ignored.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.phase != Phase::Active {
            return MoveOutcome::default();
        }

        let before = self.board;
        let gained = self.board.shift(dir);
        if self.board == before {
            return MoveOutcome::default();
        }

        self.score = self.score.saturating_add(gained);
        self.moves = self.moves.wrapping_add(1);
        let spawned = self.spawn();

        let game_over = self.board.is_terminal();
        if game_over {
            self.phase = Phase::Terminal;
        }

        MoveOutcome {
            moved: true,
            score_gained: gained,
            spawned,
            game_over,
        }
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.apply_move(dir).moved,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Apply an action named by a key string (`"ArrowLeft"`, `"w"`, ...).
    ///
    /// Unrecognized names are a no-op.
    pub fn apply_key(&mut self, key: &str) -> bool {
        match GameAction::from_str(key) {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.board.rows();
        out.score = self.score;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.last_spawn = self.last_spawn;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
