//! Tests for the string-keyed snapshot boundary.

use parlor_games::{
    checkers, chess, tictactoe, CheckersSnapshot, ChessSnapshot, GameState, Move,
    TicTacToeSnapshot, Team,
};
use serde_json::json;

#[test]
fn test_chess_snapshot_uses_cell_keys() {
    let mut game = chess::Game::new();
    game.apply_move(Move::new(52, 36)).expect("legal move");

    let value = serde_json::to_value(ChessSnapshot::from_game(&game)).expect("serializes");

    assert_eq!(value["cell36"], json!({ "type": "PAWN", "team": "PRIMARY" }));
    assert_eq!(value["cell4"], json!({ "type": "KING", "team": "SECONDARY" }));
    // Vacated cell is absent, not a NONE/NONE record.
    assert!(value.get("cell52").is_none());
    assert_eq!(value["turn"], json!(false));
    assert_eq!(value["state"], json!("ACTIVE"));
    assert_eq!(value["primaryKingMoved"], json!(false));
}

#[test]
fn test_chess_snapshot_round_trip() {
    let mut game = chess::Game::new();
    game.register_player("a", "Ann").expect("seat free");
    game.apply_move(Move::new(52, 36)).expect("legal move");
    game.apply_move(Move::new(6, 21)).expect("legal move");

    let text = serde_json::to_string(&ChessSnapshot::from_game(&game)).expect("serializes");
    let parsed: ChessSnapshot = serde_json::from_str(&text).expect("parses");
    let restored = parsed.into_game();

    assert_eq!(restored, game);
}

#[test]
fn test_checkers_snapshot_round_trip() {
    let mut game = checkers::Game::new();
    game.apply_move(Move::new(43, 36)).expect("legal move");

    let text = serde_json::to_string(&CheckersSnapshot::from_game(&game)).expect("serializes");
    let parsed: CheckersSnapshot = serde_json::from_str(&text).expect("parses");

    assert_eq!(parsed.into_game(), game);
}

#[test]
fn test_checkers_snapshot_uses_flat_codes() {
    let game = checkers::Game::new();
    let value = serde_json::to_value(CheckersSnapshot::from_game(&game)).expect("serializes");

    assert_eq!(value["cell41"], json!("PRIMARY_MAN"));
    assert_eq!(value["cell18"], json!("SECONDARY_MAN"));
    assert_eq!(value["turn"], json!(true));
}

#[test]
fn test_tictactoe_snapshot_round_trip() {
    let mut game = tictactoe::Game::new();
    game.place(4).expect("valid move");
    game.place(0).expect("valid move");

    let value = serde_json::to_value(TicTacToeSnapshot::from_game(&game)).expect("serializes");
    assert_eq!(value["cell4"], json!({ "type": "NONE", "team": "PRIMARY" }));

    let parsed: TicTacToeSnapshot = serde_json::from_value(value).expect("parses");
    let restored = parsed.into_game();
    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.turn(), game.turn());
    assert_eq!(restored.state(), game.state());
}

#[test]
fn test_malformed_cells_read_as_empty() {
    let snapshot: ChessSnapshot = serde_json::from_value(json!({
        "cell3": { "type": "BANANA", "team": "PRIMARY" },
        "cell5": { "type": "NONE", "team": "NONE" },
        "cell99": { "type": "ROOK", "team": "PRIMARY" },
        "cellxyz": 17,
        "somethingElse": true,
        "cell7": "not a record",
    }))
    .expect("lenient parse");

    let game = snapshot.into_game();
    assert_eq!(game.board().occupied(), 0);
    // Missing fields take defaults: Primary to move, game active.
    assert_eq!(game.turn(), Team::Primary);
    assert_eq!(game.state(), GameState::Active);
}

#[test]
fn test_missing_board_reads_as_empty_board() {
    let snapshot: CheckersSnapshot =
        serde_json::from_value(json!({ "turn": false })).expect("lenient parse");
    let game = snapshot.into_game();

    assert_eq!(game.board().occupied(), 0);
    assert_eq!(game.turn(), Team::Secondary);
}

#[test]
fn test_players_survive_the_boundary() {
    let mut game = tictactoe::Game::new();
    game.register_player("a", "Ann").expect("seat free");
    game.register_player("b", "Ben").expect("seat free");

    let snapshot = TicTacToeSnapshot::from_game(&game);
    assert_eq!(snapshot.players.len(), 2);

    let restored = snapshot.into_game();
    assert_eq!(restored.roster().player(Team::Primary).map(|p| p.name().as_str()), Some("Ann"));
    assert_eq!(restored.roster().player(Team::Secondary).map(|p| p.name().as_str()), Some("Ben"));
}
