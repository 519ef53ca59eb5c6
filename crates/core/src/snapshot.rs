use crate::types::{Grid, Phase, Pos, BOARD_SIZE};

/// Plain-data copy of a session, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub phase: Phase,
    pub episode_id: u32,
    pub moves: u32,
    pub max_tile: u32,
    pub last_spawn: Option<Pos>,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.score = 0;
        self.phase = Phase::Uninitialized;
        self.episode_id = 0;
        self.moves = 0;
        self.max_tile = 0;
        self.last_spawn = None;
        self.seed = 0;
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Terminal
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Active
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            phase: Phase::Uninitialized,
            episode_id: 0,
            moves: 0,
            max_tile: 0,
            last_spawn: None,
            seed: 0,
        }
    }
}
