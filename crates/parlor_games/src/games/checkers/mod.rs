//! Checkers: diagonal steps, jump captures, chain jumps, and kinging.

mod range;
mod rules;
mod types;

pub use range::threat_range;
pub use rules::Game;
pub use types::{CheckersBoard, CheckersPiece, Rank, CELLS};
