//! Chess: sliding pieces, castling, and pawn promotion.
//!
//! Check and checkmate detection are not implemented; a game is won by
//! actually capturing the opposing king (see
//! [`Game::king_in_check`]).

mod range;
mod rules;
mod types;

pub use range::threat_range;
pub use rules::Game;
pub use types::{CastlingFlags, ChessBoard, ChessKind, ChessPiece, Wing, CELLS};
