//! Game logic and rules for tic-tac-toe.

use super::{Grid, Mark};
use crate::types::{GameState, MoveError, Roster, RosterError, Team};
use tracing::{info, instrument, warn};

/// Number of cells on the grid.
pub const CELLS: usize = 9;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A tic-tac-toe session.
///
/// Unlike checkers and chess, moves are placements: a request names
/// only the destination cell. The opener alternates between games —
/// after a reset, the team that did not open the previous game goes
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Grid,
    turn: Mark,
    state: GameState,
    opener: Mark,
    roster: Roster,
}

impl Game {
    /// Creates a fresh session with `Primary` to open.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Grid::new(),
            turn: Team::Primary,
            state: GameState::Active,
            opener: Team::Primary,
            roster: Roster::new(),
        }
    }

    /// Returns the grid.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Returns the team on turn.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the session state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the team that opened the current game.
    pub fn opener(&self) -> Mark {
        self.opener
    }

    /// Returns the player roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Registers a player in the first free seat.
    pub fn register_player(
        &mut self,
        id: impl Into<String> + std::fmt::Debug,
        name: impl Into<String> + std::fmt::Debug,
    ) -> Result<Team, RosterError> {
        self.roster.register(id, name)
    }

    /// Cells still open for placement.
    pub fn open_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&cell| self.board.is_empty(cell)).collect()
    }

    /// Places the on-turn mark at `cell`.
    ///
    /// Rejection leaves the session untouched. Indices outside the
    /// grid are a caller bug and panic.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn place(&mut self, cell: usize) -> Result<GameState, MoveError> {
        if !self.state.admits_moves() {
            warn!(state = ?self.state, "Move rejected: game is over");
            return Err(MoveError::GameOver);
        }
        if self.board.has_piece(cell) {
            warn!(cell, "Move rejected: cell occupied");
            return Err(MoveError::CellOccupied(cell));
        }

        self.board.add(cell, self.turn);
        self.state = self.evaluate();
        self.turn = self.turn.opponent();

        info!(cell, state = ?self.state, "Mark placed");
        Ok(self.state)
    }

    /// Evaluates the terminal state of the current grid.
    ///
    /// A line of three identical marks wins; a full grid with no line
    /// ties; anything else is active.
    pub fn evaluate(&self) -> GameState {
        for [a, b, c] in LINES {
            if let Some(mark) = self.board.get(a)
                && self.board.get(b) == Some(mark)
                && self.board.get(c) == Some(mark)
            {
                return GameState::win_for(mark);
            }
        }
        if self.board.occupied() == CELLS {
            return GameState::Tie;
        }
        GameState::Active
    }

    /// Starts a new game on the same session.
    ///
    /// The grid clears and the opener flips: the team that did not
    /// open the previous game moves first.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.opener = self.opener.opponent();
        self.board = Grid::new();
        self.turn = self.opener;
        self.state = GameState::Active;
        info!(opener = ?self.opener, "New game started");
    }

    /// Rebuilds a session from synced fields.
    pub(crate) fn from_parts(board: Grid, turn: Mark, state: GameState, roster: Roster) -> Self {
        // The opener is not synced; on a fresh board the side on turn
        // opened, otherwise fall back to Primary.
        let opener = if board.occupied() == 0 { turn } else { Team::Primary };
        Self {
            board,
            turn,
            state,
            opener,
            roster,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
