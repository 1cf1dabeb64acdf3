//! Game controller: the state machine mediating all transitions.
//!
//! The controller owns the single [`GameState`] instance, validates
//! every intent against it, and re-evaluates the outcome inside the
//! same transition that mutates the board, so a reader never observes
//! a board with a stale outcome.

use crate::intent::Intent;
use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Board, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Phase
// ─────────────────────────────────────────────────────────────

/// Phase of the controller state machine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Pre-first-game: the view shows a start prompt.
    #[display("idle")]
    Idle,
    /// A game is running and cell selections are accepted.
    #[display("in progress")]
    InProgress,
    /// The game ended; only a reset intent applies.
    #[display("ended")]
    Ended,
}

// ─────────────────────────────────────────────────────────────
//  GameState
// ─────────────────────────────────────────────────────────────

/// Aggregate game state owned by the controller.
///
/// A reset replaces the whole value; nothing survives across it.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Index of the player to move (0 or 1; index 0 plays X).
    active_player_index: usize,
    /// Outcome derived from the board after the latest placement.
    outcome: Outcome,
}

impl GameState {
    /// Creates the initial state: empty board, player 0 to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player_index: 0,
            outcome: Outcome::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Snapshot
// ─────────────────────────────────────────────────────────────

/// Read-only view of the engine after a transition.
///
/// A detached copy: it stays valid however the controller moves on,
/// so the view can render from it at leisure.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Snapshot {
    /// The board to render.
    board: Board,
    /// Index of the player to move.
    active_player_index: usize,
    /// Current outcome.
    outcome: Outcome,
    /// Current phase.
    phase: Phase,
    /// Mark of the player to move.
    active_mark: Mark,
    /// Display name of the player to move.
    active_player_name: String,
}

// ─────────────────────────────────────────────────────────────
//  GameController
// ─────────────────────────────────────────────────────────────

/// The engine's state machine.
///
/// Holds the two fixed players and the current [`GameState`], and is
/// the only writer of either. All invalid intents are silent no-ops:
/// the view is expected to only offer acceptable intents, but the
/// controller re-validates rather than trust it.
#[derive(Debug, Clone)]
pub struct GameController {
    phase: Phase,
    state: GameState,
    players: [Player; 2],
}

impl GameController {
    /// Creates a controller in the idle phase with default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(
            Player::new("Player 1", Mark::X),
            Player::new("Player 2", Mark::O),
        )
    }

    /// Creates a controller with custom players.
    ///
    /// Index 0 plays X and moves first. The pair is fixed for the
    /// controller's lifetime; resets do not touch it.
    pub fn with_players(first: Player, second: Player) -> Self {
        Self {
            phase: Phase::Idle,
            state: GameState::new(),
            players: [first, second],
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Intent dispatch
    // ─────────────────────────────────────────────────────────

    /// Applies an intent and returns the resulting snapshot.
    ///
    /// The snapshot is returned whether or not the intent applied;
    /// a no-op returns the unchanged state.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Snapshot {
        match intent {
            Intent::SelectCell { row, col } => self.select_cell(row, col),
            Intent::Restart => self.restart(),
            Intent::StartNewGame => self.start_new_game(),
        }
        self.snapshot()
    }

    /// Starts a fresh game: empty board, player 0 to move.
    ///
    /// Valid from any phase. Replaces the [`GameState`] wholesale.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        self.state = GameState::new();
        self.phase = Phase::InProgress;
        debug!("new game started");
    }

    /// Resets the game mid- or post-game.
    ///
    /// Identical in effect to [`GameController::start_new_game`].
    pub fn restart(&mut self) {
        self.start_new_game();
    }

    /// Places the active player's mark at `(row, col)`.
    ///
    /// Applies only when a game is in progress, the coordinates are in
    /// range, and the target cell is empty. Otherwise the call is a
    /// silent no-op: no mutation, no turn advance, no log.
    pub fn select_cell(&mut self, row: usize, col: usize) {
        if self.phase != Phase::InProgress {
            return;
        }
        let Some(pos) = Position::from_row_col(row, col) else {
            return;
        };
        if !self.state.board.is_empty(pos) {
            return;
        }

        let mark = *self.active_player().mark();
        let board = self.state.board.place(pos, mark);
        let outcome = rules::evaluate(&board);

        if outcome.is_over() {
            self.phase = Phase::Ended;
            self.state = GameState {
                board,
                active_player_index: self.state.active_player_index,
                outcome,
            };
            debug!(%pos, %mark, %outcome, "game over");
        } else {
            self.state = GameState {
                board,
                active_player_index: (self.state.active_player_index + 1) % 2,
                outcome,
            };
            debug!(%pos, %mark, "mark placed");
        }
    }

    // ─────────────────────────────────────────────────────────
    //  Read side
    // ─────────────────────────────────────────────────────────

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the two players (index 0 plays X).
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> &Player {
        &self.players[self.state.active_player_index]
    }

    /// Returns a read-only snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        let active = self.active_player();
        Snapshot {
            board: self.state.board,
            active_player_index: self.state.active_player_index,
            outcome: self.state.outcome,
            phase: self.phase,
            active_mark: *active.mark(),
            active_player_name: active.name().clone(),
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
