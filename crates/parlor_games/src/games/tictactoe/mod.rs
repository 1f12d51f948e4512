//! Tic-tac-toe: the 3×3 placement game.

mod rules;

pub use rules::{Game, CELLS, LINES};

/// A mark on the grid is just the team that placed it.
pub type Mark = crate::types::Team;

/// The 3×3 grid.
pub type Grid = crate::board::Board<Mark, CELLS>;
