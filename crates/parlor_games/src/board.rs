//! Dense fixed-capacity board storage.
//!
//! The sync layer speaks in sparse string-keyed cell maps; inside the
//! engine every game works on a dense row-major array so move
//! generation never touches string keys. Conversion happens once at
//! the snapshot boundary.

/// A fixed-size board mapping cell indices to optional pieces.
///
/// `N` is the cell count (9 for tic-tac-toe, 64 for checkers and
/// chess); indices are row-major `0..N`. An absent piece and an empty
/// cell are the same thing: only real pieces are stored.
///
/// Passing an index outside `0..N` is a caller bug and panics rather
/// than clamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<P, const N: usize> {
    cells: [Option<P>; N],
}

impl<P: Copy, const N: usize> Board<P, N> {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self { cells: [None; N] }
    }

    /// Number of cells on the board.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Places a piece, replacing any previous occupant.
    pub fn add(&mut self, index: usize, piece: P) {
        assert!(index < N, "cell index {index} out of range for {N}-cell board");
        self.cells[index] = Some(piece);
    }

    /// Removes and returns the piece at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<P> {
        assert!(index < N, "cell index {index} out of range for {N}-cell board");
        self.cells[index].take()
    }

    /// Returns the piece at `index`, if any.
    pub fn get(&self, index: usize) -> Option<P> {
        assert!(index < N, "cell index {index} out of range for {N}-cell board");
        self.cells[index]
    }

    /// Checks whether a piece occupies `index`.
    pub fn has_piece(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Checks whether `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// Iterates over occupied cells as `(index, piece)` pairs.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, P)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|piece| (index, piece)))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl<P: Copy, const N: usize> Default for Board<P, N> {
    fn default() -> Self {
        Self::new()
    }
}
