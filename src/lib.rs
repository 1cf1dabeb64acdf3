//! Pure tic-tac-toe game engine: board state, rules, and turn controller.
//!
//! The engine is a state-and-rules module consumed by a view layer. The
//! view forwards user intents (cell selection, restart, new game); the
//! engine validates them, updates the board, evaluates the outcome, and
//! hands back a read-only snapshot to render from.
//!
//! # Architecture
//!
//! - **Board**: value-semantics 3x3 grid (`place` returns a new board)
//! - **Rules**: pure outcome evaluation over the 8 winnable lines
//! - **Controller**: state machine mediating all transitions
//!
//! Invalid intents (occupied cell, game already over) are silent no-ops,
//! never errors: the engine re-validates everything the view sends.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameController, Intent, Outcome};
//!
//! let mut game = GameController::new();
//! game.apply(Intent::StartNewGame);
//!
//! let snapshot = game.apply(Intent::SelectCell { row: 0, col: 0 });
//! assert_eq!(*snapshot.outcome(), Outcome::InProgress);
//! assert_eq!(*snapshot.active_player_index(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod intent;
mod position;
mod rules;
mod types;

// Crate-level exports - Controller and view boundary
pub use controller::{GameController, GameState, Phase, Snapshot};

// Crate-level exports - Intents
pub use intent::Intent;

// Crate-level exports - Rules
pub use rules::{Outcome, check_winner, evaluate};

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Cell, Mark, Player};
