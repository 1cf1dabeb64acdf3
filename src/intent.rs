//! First-class user intents.
//!
//! Intents are domain events, not method calls: the view emits them,
//! the controller validates and applies them. An intent that cannot
//! apply is ignored rather than rejected with an error.

use serde::{Deserialize, Serialize};

/// A user-initiated request to change game state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Intent {
    /// Place the active player's mark at the given cell.
    ///
    /// Coordinates come straight from the view and are re-validated by
    /// the controller; out-of-range values make the intent a no-op.
    #[display("select cell ({row}, {col})")]
    SelectCell {
        /// Row coordinate (0-2).
        row: usize,
        /// Column coordinate (0-2).
        col: usize,
    },
    /// Reset the game mid- or post-game.
    #[display("restart")]
    Restart,
    /// Start the first game from the idle screen.
    ///
    /// Same effect as [`Intent::Restart`]; the two differ only in when
    /// the view offers them.
    #[display("start new game")]
    StartNewGame,
}
