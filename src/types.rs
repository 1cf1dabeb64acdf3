//! Core domain types for the tic-tac-toe engine.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// X (moves first).
    #[display("X")]
    X,
    /// O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One cell of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A value type: `place` consumes `self` by copy and returns the
/// successor board, so prior boards stay valid for inspection. Cells
/// fill one at a time and never revert to empty; a fresh board is the
/// only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns true if the cell at the given position is unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns a new board with `mark` placed at `pos`.
    ///
    /// The target cell must be empty. The controller guards this before
    /// calling; placing on an occupied cell is a contract violation, not
    /// a recoverable condition.
    pub fn place(self, pos: Position, mark: Mark) -> Self {
        debug_assert!(self.is_empty(pos), "place on occupied cell {pos}");
        let mut next = self;
        next.cells[pos.to_index()] = Cell::Occupied(mark);
        next
    }

    /// Returns true if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the unoccupied positions, in board order.
    ///
    /// Views use this to decide which cells still accept a selection.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the two fixed players: a display name plus a mark.
///
/// Exactly two players exist for the lifetime of the controller; they do
/// not change between games.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct Player {
    /// Display name shown by the view.
    name: String,
    /// The mark this player places.
    mark: Mark,
}

impl Player {
    /// Creates a player with the given display name and mark.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|cell| cell.is_empty()));
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(Position::Center, Mark::X);

        // Prior board unchanged
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board = board.place(*pos, mark);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_empty_positions_shrink() {
        let board = Board::new().place(Position::TopLeft, Mark::X);
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&Position::TopLeft));
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_board_display() {
        let board = Board::new().place(Position::Center, Mark::O);
        assert_eq!(board.display(), ".|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
    }
}
