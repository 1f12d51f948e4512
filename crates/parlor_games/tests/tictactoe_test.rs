//! Tests for the tic-tac-toe session rules.

use parlor_games::{tictactoe, GameState, MoveError, Team};

#[test]
fn test_left_column_wins_for_primary() {
    let mut game = tictactoe::Game::new();

    // Primary: 0, 3, 6. Secondary: 1, 4.
    game.place(0).expect("valid move");
    game.place(1).expect("valid move");
    game.place(3).expect("valid move");
    game.place(4).expect("valid move");
    let state = game.place(6).expect("valid move");

    assert_eq!(state, GameState::PrimaryWins);
    assert_eq!(game.state(), GameState::PrimaryWins);
}

#[test]
fn test_full_board_without_line_ties() {
    let mut game = tictactoe::Game::new();

    // Alternating placements that fill the grid with no line of 3.
    for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.place(cell).expect("valid move");
    }

    assert_eq!(game.state(), GameState::Tie);
}

#[test]
fn test_no_moves_accepted_after_win() {
    let mut game = tictactoe::Game::new();
    for cell in [0, 1, 3, 4, 6] {
        game.place(cell).expect("valid move");
    }
    assert_eq!(game.state(), GameState::PrimaryWins);

    assert_eq!(game.place(8), Err(MoveError::GameOver));
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = tictactoe::Game::new();
    game.place(4).expect("valid move");

    let before = game.clone();
    assert_eq!(game.place(4), Err(MoveError::CellOccupied(4)));
    assert_eq!(game, before);
}

#[test]
fn test_reset_alternates_opener() {
    let mut game = tictactoe::Game::new();
    assert_eq!(game.opener(), Team::Primary);

    for cell in [0, 1, 3, 4, 6] {
        game.place(cell).expect("valid move");
    }
    assert_eq!(game.state(), GameState::PrimaryWins);

    game.reset();
    assert_eq!(game.opener(), Team::Secondary);
    assert_eq!(game.turn(), Team::Secondary);
    assert_eq!(game.state(), GameState::Active);
    assert_eq!(game.board().occupied(), 0);

    game.reset();
    assert_eq!(game.opener(), Team::Primary);
}

#[test]
fn test_open_cells_shrink_with_placements() {
    let mut game = tictactoe::Game::new();
    assert_eq!(game.open_cells().len(), 9);

    game.place(0).expect("valid move");
    game.place(4).expect("valid move");

    let open = game.open_cells();
    assert_eq!(open.len(), 7);
    assert!(!open.contains(&0));
    assert!(!open.contains(&4));
}

#[test]
fn test_roster_seats_two_players() {
    let mut game = tictactoe::Game::new();
    assert_eq!(game.register_player("a", "Ann"), Ok(Team::Primary));
    assert_eq!(game.register_player("b", "Ben"), Ok(Team::Secondary));
    assert!(game.register_player("c", "Cam").is_err());
    assert_eq!(game.roster().find("b").map(|p| *p.team()), Some(Team::Secondary));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_out_of_range_cell_panics() {
    let mut game = tictactoe::Game::new();
    let _ = game.place(9);
}
