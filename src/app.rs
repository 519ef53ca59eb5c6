//! Session controller.
//!
//! Owns one [`GameState`] and routes actions into it. When a move ends the
//! game, the final score goes to the score sink exactly once; a restart arms
//! reporting again for the next game.

use log::info;

use crate::core::{GameSnapshot, GameState, MoveOutcome};
use crate::reporter::ScoreSink;
use crate::term::PlayerStatusView;
use crate::types::{Direction, GameAction};

pub struct Session<S: ScoreSink> {
    state: GameState,
    sink: S,
    identity: Option<String>,
    reporting_enabled: bool,
    reported: bool,
}

impl<S: ScoreSink> Session<S> {
    /// Create a session and start its first game.
    pub fn new(seed: u64, identity: Option<String>, sink: S) -> Self {
        Self::from_state(GameState::new(seed), identity, sink)
    }

    /// Wrap an existing game state; starts it if it is still uninitialized.
    pub fn from_state(mut state: GameState, identity: Option<String>, sink: S) -> Self {
        state.start();
        info!(
            "game {} started (seed {})",
            state.episode_id(),
            state.seed()
        );
        Self {
            state,
            sink,
            identity: identity.filter(|s| !s.trim().is_empty()),
            reporting_enabled: true,
            reported: false,
        }
    }

    /// Shown in the side panel as "reporting off".
    pub fn with_reporting_enabled(mut self, enabled: bool) -> Self {
        self.reporting_enabled = enabled;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn reported(&self) -> bool {
        self.reported
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn player_status(&self) -> PlayerStatusView<'_> {
        PlayerStatusView {
            identity: self.identity(),
            reporting_enabled: self.reporting_enabled,
            reported: self.reported,
        }
    }

    /// Apply one input action.
    pub fn handle(&mut self, action: GameAction) -> MoveOutcome {
        match action {
            GameAction::Move(dir) => self.handle_move(dir),
            GameAction::Restart => {
                self.restart();
                MoveOutcome::default()
            }
        }
    }

    pub fn restart(&mut self) {
        let previous = self.state.score();
        self.state.restart();
        self.reported = false;
        info!(
            "game {} started (previous score {previous})",
            self.state.episode_id()
        );
    }

    fn handle_move(&mut self, dir: Direction) -> MoveOutcome {
        let outcome = self.state.apply_move(dir);
        if outcome.game_over && !self.reported {
            self.reported = true;
            let score = self.state.score();
            info!(
                "game {} over: score {score}, best tile {}, {} moves",
                self.state.episode_id(),
                self.state.board().max_tile(),
                self.state.moves()
            );
            self.sink.report(self.identity.as_deref(), score);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Option<String>, u32)>,
    }

    impl ScoreSink for Recorder {
        fn report(&mut self, identity: Option<&str>, score: u32) -> bool {
            self.calls.push((identity.map(str::to_string), score));
            identity.is_some()
        }
    }

    // One Left move merges the top-left pair and leaves a single hole; any
    // spawn into that hole (2 or 4) leaves the board without legal moves.
    fn one_move_from_game_over() -> GameState {
        let board = Board::from_rows([
            [16, 16, 8, 32],
            [64, 128, 256, 512],
            [8, 32, 64, 128],
            [256, 512, 1024, 8],
        ]);
        GameState::from_board(board, 1000, 9)
    }

    #[test]
    fn game_over_reports_once_with_identity() {
        let mut session = Session::from_state(
            one_move_from_game_over(),
            Some("mai".into()),
            Recorder::default(),
        );

        let outcome = session.handle(GameAction::Move(Direction::Left));
        assert!(outcome.moved);
        assert!(outcome.game_over);
        assert!(session.reported());
        assert_eq!(session.sink().calls, vec![(Some("mai".to_string()), 1032)]);

        // Further input in the terminal phase neither moves nor reports again.
        for dir in Direction::ALL {
            assert!(!session.handle(GameAction::Move(dir)).moved);
        }
        assert_eq!(session.sink().calls.len(), 1);
    }

    #[test]
    fn restart_rearms_reporting() {
        let mut session = Session::from_state(one_move_from_game_over(), None, Recorder::default());
        session.handle(GameAction::Move(Direction::Left));
        assert_eq!(session.sink().calls, vec![(None, 1032)]);

        session.handle(GameAction::Restart);
        assert!(!session.reported());
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.state().board().count_tiles(), 2);
    }

    #[test]
    fn blank_identity_counts_as_absent() {
        let session = Session::new(1, Some("  ".into()), Recorder::default());
        assert_eq!(session.identity(), None);
        assert!(session.state().started());
    }

    #[test]
    fn ordinary_moves_do_not_report() {
        let mut session = Session::new(5, Some("mai".into()), Recorder::default());
        session.handle(GameAction::Move(Direction::Left));
        session.handle(GameAction::Move(Direction::Right));
        assert!(session.sink().calls.is_empty());
    }
}
