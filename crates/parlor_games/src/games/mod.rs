//! The turn-based games shipped with the chat application.
//!
//! Each game owns its piece catalog, threat-range calculation, and
//! session rules; they share the dense [`Board`](crate::board::Board)
//! storage and the core types in [`types`](crate::types).

pub mod checkers;
pub mod chess;
pub mod tictactoe;
