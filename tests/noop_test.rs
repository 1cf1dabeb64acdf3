//! No-op guarantees: invalid intents leave state bit-for-bit unchanged.

use tictactoe_engine::{GameController, Intent, Mark, Outcome, Phase, Position};

#[test]
fn test_select_cell_before_start_is_noop() {
    let mut game = GameController::new();
    let before = game.snapshot();

    let after = game.apply(Intent::SelectCell { row: 1, col: 1 });

    assert_eq!(before, after);
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_select_occupied_cell_is_noop() {
    let mut game = GameController::new();
    game.apply(Intent::StartNewGame);
    let before = game.apply(Intent::SelectCell { row: 0, col: 0 }); // X

    // O tries the same cell
    let after = game.apply(Intent::SelectCell { row: 0, col: 0 });

    assert_eq!(before, after);
    // Cell keeps the first player's mark and the turn did not advance twice
    assert_eq!(after.board().get(Position::TopLeft).mark(), Some(Mark::X));
    assert_eq!(*after.active_player_index(), 1);
}

#[test]
fn test_out_of_range_coordinates_are_noop() {
    let mut game = GameController::new();
    game.apply(Intent::StartNewGame);
    let before = game.snapshot();

    for (row, col) in [(3, 0), (0, 3), (3, 3), (usize::MAX, 0), (0, usize::MAX)] {
        let after = game.apply(Intent::SelectCell { row, col });
        assert_eq!(before, after, "({row}, {col}) must not apply");
    }
}

#[test]
fn test_select_after_game_over_is_noop() {
    let mut game = GameController::new();
    game.apply(Intent::StartNewGame);
    game.apply(Intent::SelectCell { row: 0, col: 0 }); // X
    game.apply(Intent::SelectCell { row: 1, col: 0 }); // O
    game.apply(Intent::SelectCell { row: 0, col: 1 }); // X
    game.apply(Intent::SelectCell { row: 1, col: 1 }); // O
    let won = game.apply(Intent::SelectCell { row: 0, col: 2 }); // X wins
    assert_eq!(*won.outcome(), Outcome::Won(Mark::X));

    // Every remaining cell is refused
    for row in 0..3 {
        for col in 0..3 {
            let after = game.apply(Intent::SelectCell { row, col });
            assert_eq!(won, after);
        }
    }
}

#[test]
fn test_noop_never_advances_turn() {
    let mut game = GameController::new();
    game.apply(Intent::StartNewGame);
    game.apply(Intent::SelectCell { row: 0, col: 0 });
    assert_eq!(*game.state().active_player_index(), 1);

    // Occupied cell, then out-of-range: index frozen both times
    game.apply(Intent::SelectCell { row: 0, col: 0 });
    assert_eq!(*game.state().active_player_index(), 1);
    game.apply(Intent::SelectCell { row: 9, col: 9 });
    assert_eq!(*game.state().active_player_index(), 1);

    // A valid placement advances it again
    game.apply(Intent::SelectCell { row: 2, col: 2 });
    assert_eq!(*game.state().active_player_index(), 0);
}

#[test]
fn test_noop_returns_current_snapshot() {
    let mut game = GameController::new();
    game.apply(Intent::StartNewGame);
    game.apply(Intent::SelectCell { row: 1, col: 1 });

    // apply always hands back a snapshot, applied or not
    let snapshot = game.apply(Intent::SelectCell { row: 1, col: 1 });
    assert_eq!(snapshot, game.snapshot());
}
