//! Parlor games - rule engine for the chat app's board games
//!
//! This crate is the deterministic core behind Parlor's turn-based
//! two-player games: tic-tac-toe, checkers, and chess. Given a board
//! and a move request it decides legality, applies side effects
//! (captures, chain jumps, kinging, castling, promotion), and
//! evaluates whether the game has ended. Everything around it —
//! screens, realtime sync, notifications — lives in the app and talks
//! to this crate through plain values.
//!
//! # Architecture
//!
//! - **Board**: dense fixed-size cell storage shared by all games
//! - **Games**: per-game piece catalogs, threat ranges, and session
//!   rules under [`tictactoe`], [`checkers`], and [`chess`]
//! - **Snapshot**: the string-keyed wire format exchanged with the
//!   realtime store
//!
//! # Example
//!
//! ```
//! use parlor_games::{chess, Move, MoveOutcome};
//!
//! let mut game = chess::Game::new();
//! // Primary opens with a double pawn step.
//! let outcome = game.apply_move(Move::new(52, 36)).expect("legal move");
//! assert!(matches!(outcome, MoveOutcome::Completed(_)));
//! ```
//!
//! Every operation is synchronous and pure: a move request either
//! applies in full or leaves the session exactly as it was.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod games;
mod snapshot;
mod types;

pub use board::Board;
pub use games::{checkers, chess, tictactoe};
pub use snapshot::{CheckersSnapshot, ChessSnapshot, TicTacToeSnapshot};
pub use types::{
    GameState, Move, MoveError, MoveOutcome, Player, Promotion, Roster, RosterError, Team,
};
