//! Piece catalog and castling metadata for chess.

use crate::types::{Promotion, Team};
use serde::{Deserialize, Serialize};

/// Number of cells on the chess board.
pub const CELLS: usize = 64;

/// The chess board: 8×8, row-major, Secondary's back rank on row 0
/// and Primary's on row 7.
pub type ChessBoard = crate::board::Board<ChessPiece, CELLS>;

/// Kind of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum ChessKind {
    /// The king.
    King,
    /// The queen.
    Queen,
    /// A bishop.
    Bishop,
    /// A knight.
    Knight,
    /// A rook.
    Rook,
    /// A pawn.
    Pawn,
}

impl From<Promotion> for ChessKind {
    fn from(choice: Promotion) -> Self {
        match choice {
            Promotion::Queen => ChessKind::Queen,
            Promotion::Rook => ChessKind::Rook,
            Promotion::Bishop => ChessKind::Bishop,
            Promotion::Knight => ChessKind::Knight,
        }
    }
}

/// A chess piece: kind plus owning team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessPiece {
    /// The piece's kind.
    pub kind: ChessKind,
    /// The owning team.
    pub team: Team,
}

impl ChessPiece {
    /// A piece of `kind` for `team`.
    pub fn new(kind: ChessKind, team: Team) -> Self {
        Self { kind, team }
    }
}

/// Side of the board a castle happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wing {
    /// Toward the rook on the king's short side.
    KingSide,
    /// Toward the rook on the queen's long side.
    QueenSide,
}

/// Home cell of `team`'s king.
pub const fn king_home(team: Team) -> usize {
    match team {
        Team::Primary => 60,
        Team::Secondary => 4,
    }
}

/// Home corner of `team`'s rook on `wing`.
pub const fn rook_home(team: Team, wing: Wing) -> usize {
    match (team, wing) {
        (Team::Primary, Wing::KingSide) => 63,
        (Team::Primary, Wing::QueenSide) => 56,
        (Team::Secondary, Wing::KingSide) => 7,
        (Team::Secondary, Wing::QueenSide) => 0,
    }
}

/// Row on which `team`'s pawns promote.
pub const fn last_rank(team: Team) -> usize {
    match team {
        Team::Primary => 0,
        Team::Secondary => 7,
    }
}

/// Row on which `team`'s pawns start.
pub const fn pawn_rank(team: Team) -> usize {
    match team {
        Team::Primary => 6,
        Team::Secondary => 1,
    }
}

/// The six castling-eligibility flags, synced with the session.
///
/// A flag flips to `true` the first time the tracked piece moves, or
/// when a rook is captured on its home corner, and never flips back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CastlingFlags {
    /// Primary's king has moved.
    pub primary_king_moved: bool,
    /// Primary's king-side rook has moved.
    pub primary_king_side_rook_moved: bool,
    /// Primary's queen-side rook has moved.
    pub primary_queen_side_rook_moved: bool,
    /// Secondary's king has moved.
    pub secondary_king_moved: bool,
    /// Secondary's king-side rook has moved.
    pub secondary_king_side_rook_moved: bool,
    /// Secondary's queen-side rook has moved.
    pub secondary_queen_side_rook_moved: bool,
}

impl CastlingFlags {
    /// Whether `team`'s king has moved.
    pub fn king_moved(&self, team: Team) -> bool {
        match team {
            Team::Primary => self.primary_king_moved,
            Team::Secondary => self.secondary_king_moved,
        }
    }

    /// Whether `team`'s rook on `wing` has moved (or been captured on
    /// its home corner).
    pub fn rook_moved(&self, team: Team, wing: Wing) -> bool {
        match (team, wing) {
            (Team::Primary, Wing::KingSide) => self.primary_king_side_rook_moved,
            (Team::Primary, Wing::QueenSide) => self.primary_queen_side_rook_moved,
            (Team::Secondary, Wing::KingSide) => self.secondary_king_side_rook_moved,
            (Team::Secondary, Wing::QueenSide) => self.secondary_queen_side_rook_moved,
        }
    }

    /// Records a move of `team`'s king.
    pub fn note_king_move(&mut self, team: Team) {
        match team {
            Team::Primary => self.primary_king_moved = true,
            Team::Secondary => self.secondary_king_moved = true,
        }
    }

    /// Records that the rook belonging on `cell` moved away or was
    /// captured there. Cells other than the four home corners are
    /// ignored.
    pub fn note_rook_event(&mut self, cell: usize) {
        match cell {
            63 => self.primary_king_side_rook_moved = true,
            56 => self.primary_queen_side_rook_moved = true,
            7 => self.secondary_king_side_rook_moved = true,
            0 => self.secondary_queen_side_rook_moved = true,
            _ => {}
        }
    }
}
