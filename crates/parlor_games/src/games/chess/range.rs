//! Threat-range calculation for chess.
//!
//! One pure algorithm per piece kind; no search across pieces. All
//! geometry runs in (row, column) coordinates so a step can never
//! wrap around a board edge.

use super::types::{
    king_home, pawn_rank, rook_home, CastlingFlags, ChessBoard, ChessKind, Wing,
};
use crate::types::Team;

const ROOK_DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Computes the set of legal destination cells for the piece at
/// `from`. An empty origin yields an empty range.
///
/// Castling destinations are included for an unmoved king whose rook
/// is unmoved on its home corner with only empty cells between them.
/// Whether the king's path is attacked is not checked — the app has
/// no check detection (see [`super::Game::king_in_check`]).
pub fn threat_range(board: &ChessBoard, flags: &CastlingFlags, from: usize) -> Vec<usize> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut range = Vec::new();
    match piece.kind {
        ChessKind::Rook => slide(board, piece.team, from, &ROOK_DIRS, &mut range),
        ChessKind::Bishop => slide(board, piece.team, from, &BISHOP_DIRS, &mut range),
        ChessKind::Queen => {
            slide(board, piece.team, from, &ROOK_DIRS, &mut range);
            slide(board, piece.team, from, &BISHOP_DIRS, &mut range);
        }
        ChessKind::Knight => steps(board, piece.team, from, &KNIGHT_JUMPS, &mut range),
        ChessKind::King => {
            steps(board, piece.team, from, &KING_STEPS, &mut range);
            castling(board, flags, piece.team, from, &mut range);
        }
        ChessKind::Pawn => pawn(board, piece.team, from, &mut range),
    }
    range
}

/// Slides along each direction: stop at the edge, stop after taking
/// an enemy, stop before a friend.
fn slide(
    board: &ChessBoard,
    team: Team,
    from: usize,
    dirs: &[(isize, isize)],
    range: &mut Vec<usize>,
) {
    let (row, col) = coords(from);
    for &(dr, dc) in dirs {
        let mut step = 1;
        while let Some(cell) = cell_at(row + step * dr, col + step * dc) {
            match board.get(cell) {
                None => range.push(cell),
                Some(occupant) => {
                    if occupant.team != team {
                        range.push(cell);
                    }
                    break;
                }
            }
            step += 1;
        }
    }
}

/// Fixed-offset movers (knight, king): each candidate is kept when it
/// stays on the board and does not land on a friend.
fn steps(
    board: &ChessBoard,
    team: Team,
    from: usize,
    offsets: &[(isize, isize)],
    range: &mut Vec<usize>,
) {
    let (row, col) = coords(from);
    for &(dr, dc) in offsets {
        if let Some(cell) = cell_at(row + dr, col + dc)
            && board.get(cell).is_none_or(|occupant| occupant.team != team)
        {
            range.push(cell);
        }
    }
}

/// Pawn moves: forward one into an empty cell, forward two from the
/// start rank when both cells are empty, diagonal-forward onto an
/// enemy only. Promotion is the executor's concern.
fn pawn(board: &ChessBoard, team: Team, from: usize, range: &mut Vec<usize>) {
    let (row, col) = coords(from);
    let dir: isize = match team {
        Team::Primary => -1,
        Team::Secondary => 1,
    };

    if let Some(ahead) = cell_at(row + dir, col) {
        if board.is_empty(ahead) {
            range.push(ahead);
            if row as usize == pawn_rank(team)
                && let Some(double) = cell_at(row + 2 * dir, col)
                && board.is_empty(double)
            {
                range.push(double);
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(capture) = cell_at(row + dir, col + dc)
            && board
                .get(capture)
                .is_some_and(|occupant| occupant.team != team)
        {
            range.push(capture);
        }
    }
}

/// Appends castling destinations for `team`'s king standing on its
/// home cell.
fn castling(
    board: &ChessBoard,
    flags: &CastlingFlags,
    team: Team,
    from: usize,
    range: &mut Vec<usize>,
) {
    if from != king_home(team) || flags.king_moved(team) {
        return;
    }
    for wing in [Wing::KingSide, Wing::QueenSide] {
        if flags.rook_moved(team, wing) {
            continue;
        }
        let corner = rook_home(team, wing);
        let rook_present = board
            .get(corner)
            .is_some_and(|p| p.kind == ChessKind::Rook && p.team == team);
        if !rook_present {
            continue;
        }
        let between = match wing {
            Wing::KingSide => from + 1..corner,
            Wing::QueenSide => corner + 1..from,
        };
        if between.clone().all(|cell| board.is_empty(cell)) {
            let destination = match wing {
                Wing::KingSide => from + 2,
                Wing::QueenSide => from - 2,
            };
            range.push(destination);
        }
    }
}

fn coords(index: usize) -> (isize, isize) {
    ((index / 8) as isize, (index % 8) as isize)
}

fn cell_at(row: isize, col: isize) -> Option<usize> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row * 8 + col) as usize)
    } else {
        None
    }
}
