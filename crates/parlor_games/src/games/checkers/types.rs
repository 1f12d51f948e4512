//! Piece catalog for checkers.

use crate::types::Team;

/// Number of cells on the checkers board.
pub const CELLS: usize = 64;

/// The checkers board: 8×8, row-major.
pub type CheckersBoard = crate::board::Board<CheckersPiece, CELLS>;

/// Rank of a checkers piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Rank {
    /// A regular piece; moves diagonally toward the opponent only.
    Man,
    /// A crowned piece; moves diagonally in all four directions.
    King,
}

/// A checkers piece: rank plus owning team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckersPiece {
    /// The piece's rank.
    pub rank: Rank,
    /// The owning team.
    pub team: Team,
}

impl CheckersPiece {
    /// A regular piece for `team`.
    pub fn man(team: Team) -> Self {
        Self { rank: Rank::Man, team }
    }

    /// A crowned piece for `team`.
    pub fn king(team: Team) -> Self {
        Self { rank: Rank::King, team }
    }

    /// Diagonal directions this piece may move in, as (row, col)
    /// deltas. Primary men move toward row 0, secondary men toward
    /// row 7; kings move both ways.
    pub fn directions(&self) -> &'static [(isize, isize)] {
        const UP: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
        const DOWN: [(isize, isize); 2] = [(1, -1), (1, 1)];
        const BOTH: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        match (self.rank, self.team) {
            (Rank::King, _) => &BOTH,
            (Rank::Man, Team::Primary) => &UP,
            (Rank::Man, Team::Secondary) => &DOWN,
        }
    }

    /// The row on which this piece's team crowns its men.
    pub fn crowning_row(&self) -> usize {
        match self.team {
            Team::Primary => 0,
            Team::Secondary => 7,
        }
    }
}
