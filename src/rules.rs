//! Outcome evaluation for the board.
//!
//! `evaluate` is the sole authority on game-ending conditions: the
//! controller calls it after every placement and never inspects lines
//! itself.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// Outcome of evaluating a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
    derive_more::Display,
)]
pub enum Outcome {
    /// No line is complete and the board has empty cells.
    #[display("In progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Mark),
    /// The board is full with no complete line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// The 8 winnable lines: rows, then columns, then diagonals.
///
/// Evaluation checks them in this order and the first complete line
/// wins; in a game reached through valid moves at most one line can be
/// newly complete, so the ordering is unobservable there.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether a mark has completed a line.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return cell.mark();
        }
    }
    None
}

/// Computes the outcome of a board.
///
/// Pure and deterministic: the same board always yields the same
/// outcome, and no state outside the argument is read.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Won(winner);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
