//! Tests for the checkers session rules.

use parlor_games::{checkers, CheckersSnapshot, GameState, Move, MoveError, MoveOutcome, Team};
use serde_json::json;

/// Builds a session from a sparse wire snapshot.
fn game_from(snapshot: serde_json::Value) -> checkers::Game {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let snapshot: CheckersSnapshot =
        serde_json::from_value(snapshot).expect("snapshot parses");
    snapshot.into_game()
}

#[test]
fn test_opening_position() {
    let game = checkers::Game::new();
    assert_eq!(game.board().occupied(), 24);
    assert_eq!(game.turn(), Team::Primary);
    assert_eq!(game.state(), GameState::Active);
    // Primary men on the row-5 diagonals, Secondary on row 2.
    assert!(game.board().has_piece(41));
    assert!(game.board().has_piece(18));
    assert!(game.board().is_empty(27));
}

#[test]
fn test_man_steps_diagonally_forward_only() {
    let game = checkers::Game::new();
    let range = game.threat_range(43);
    assert_eq!(range, vec![34, 36]);
    // No backward or straight moves.
    assert!(!range.contains(&51));
    assert!(!range.contains(&35));
}

#[test]
fn test_jump_removes_midpoint_piece() {
    let game = game_from(json!({
        "cell41": "PRIMARY_MAN",
        "cell34": "SECONDARY_MAN",
        "cell63": "SECONDARY_MAN",
        "turn": true,
    }));

    let mut game = game;
    assert!(game.threat_range(41).contains(&27));
    let outcome = game.apply_move(Move::new(41, 27)).expect("legal jump");

    assert_eq!(outcome, MoveOutcome::Completed(GameState::Active));
    assert!(game.board().is_empty(34));
    assert!(game.board().is_empty(41));
    assert!(game.board().has_piece(27));
    assert_eq!(game.turn(), Team::Secondary);
}

#[test]
fn test_chain_jump_keeps_turn() {
    // After jumping 41 -> 27 over 34, a second jump over 20 to 13 is
    // open, so the turn stays with Primary.
    let mut game = game_from(json!({
        "cell41": "PRIMARY_MAN",
        "cell34": "SECONDARY_MAN",
        "cell20": "SECONDARY_MAN",
        "turn": true,
    }));

    let outcome = game.apply_move(Move::new(41, 27)).expect("legal jump");
    assert_eq!(outcome, MoveOutcome::JumpContinues { from: 27 });
    assert_eq!(game.turn(), Team::Primary);
    assert!(game.board().is_empty(34));

    // Completing the chain captures the last piece and ends the game.
    let outcome = game.apply_move(Move::new(27, 13)).expect("legal jump");
    assert_eq!(outcome, MoveOutcome::Completed(GameState::PrimaryWins));
    assert!(game.board().is_empty(20));
}

#[test]
fn test_man_is_crowned_on_far_row() {
    let mut game = game_from(json!({
        "cell9": "PRIMARY_MAN",
        "cell63": "SECONDARY_MAN",
        "turn": true,
    }));

    game.apply_move(Move::new(9, 0)).expect("legal step");
    let piece = game.board().get(0).expect("crowned piece");
    assert_eq!(piece.rank, checkers::Rank::King);
    assert_eq!(piece.team, Team::Primary);
    assert_eq!(game.turn(), Team::Secondary);
}

#[test]
fn test_king_moves_in_all_four_diagonals() {
    let game = game_from(json!({
        "cell27": "SECONDARY_KING",
        "cell63": "PRIMARY_MAN",
        "turn": false,
    }));

    let mut range = game.threat_range(27);
    range.sort_unstable();
    assert_eq!(range, vec![18, 20, 34, 36]);
}

#[test]
fn test_win_when_opponent_has_no_pieces() {
    let mut game = game_from(json!({
        "cell41": "PRIMARY_MAN",
        "cell34": "SECONDARY_MAN",
        "turn": true,
    }));

    let outcome = game.apply_move(Move::new(41, 27)).expect("legal jump");
    assert_eq!(outcome, MoveOutcome::Completed(GameState::PrimaryWins));
    assert_eq!(game.apply_move(Move::new(27, 18)), Err(MoveError::GameOver));
}

#[test]
fn test_rejected_moves_leave_session_unchanged() {
    let mut game = checkers::Game::new();
    let before = game.clone();

    // Secondary piece while it is Primary's turn.
    assert_eq!(
        game.apply_move(Move::new(18, 27)),
        Err(MoveError::NotYourTurn(Team::Primary))
    );
    // Destination outside the threat range.
    assert_eq!(
        game.apply_move(Move::new(41, 25)),
        Err(MoveError::IllegalDestination { from: 41, to: 25 })
    );
    // Empty origin.
    assert_eq!(game.apply_move(Move::new(27, 20)), Err(MoveError::EmptyCell(27)));

    assert_eq!(game, before);
}

#[test]
fn test_reset_restores_opening_position() {
    let mut game = game_from(json!({
        "cell9": "PRIMARY_KING",
        "turn": false,
        "state": "PRIMARY_WINS",
    }));
    assert_eq!(game.state(), GameState::PrimaryWins);

    game.reset();
    assert_eq!(game.board().occupied(), 24);
    assert_eq!(game.turn(), Team::Primary);
    assert_eq!(game.state(), GameState::Active);
}
