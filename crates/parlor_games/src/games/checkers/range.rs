//! Threat-range calculation for checkers.

use super::types::{CheckersBoard, CheckersPiece};

/// Computes the set of legal destination cells for the piece at
/// `from`: single diagonal steps into empty cells plus jumps over an
/// adjacent enemy into the empty cell beyond. An empty origin yields
/// an empty range.
///
/// The result is stable for an unchanged board, never leaves the
/// board, and never includes a friendly-occupied cell.
pub fn threat_range(board: &CheckersBoard, from: usize) -> Vec<usize> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut range = Vec::new();
    let (row, col) = coords(from);
    for &(dr, dc) in piece.directions() {
        if let Some(step) = cell_at(row + dr, col + dc)
            && board.is_empty(step)
        {
            range.push(step);
        }
    }
    range.extend(jump_targets(board, from, piece));
    range
}

/// Jump destinations for `piece` standing on `from`: two diagonal
/// cells away, over an enemy, into an empty landing cell. Used both
/// for range calculation and for the chain-jump probe after a jump.
pub(crate) fn jump_targets(
    board: &CheckersBoard,
    from: usize,
    piece: CheckersPiece,
) -> Vec<usize> {
    let mut targets = Vec::new();
    let (row, col) = coords(from);
    for &(dr, dc) in piece.directions() {
        let Some(over) = cell_at(row + dr, col + dc) else {
            continue;
        };
        let Some(landing) = cell_at(row + 2 * dr, col + 2 * dc) else {
            continue;
        };
        let jumped_enemy = board
            .get(over)
            .is_some_and(|occupant| occupant.team != piece.team);
        if jumped_enemy && board.is_empty(landing) {
            targets.push(landing);
        }
    }
    targets
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
