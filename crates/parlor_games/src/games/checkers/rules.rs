//! Session rules for checkers: validation, execution, and terminal
//! evaluation.

use super::range::{jump_targets, threat_range};
use super::types::{CheckersBoard, CheckersPiece, Rank};
use crate::types::{GameState, Move, MoveError, MoveOutcome, Roster, RosterError, Team};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// A checkers session.
///
/// Primary occupies rows 5-7 and moves toward row 0; Secondary
/// occupies rows 0-2 and moves toward row 7. Pieces live on the
/// diagonal squares where row + column is even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: CheckersBoard,
    turn: Team,
    state: GameState,
    roster: Roster,
}

impl Game {
    /// Creates a session with the standard opening position: twelve
    /// men per side on the playable diagonals of the three rows
    /// nearest each player.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: opening_board(),
            turn: Team::Primary,
            state: GameState::Active,
            roster: Roster::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &CheckersBoard {
        &self.board
    }

    /// Returns the team on turn.
    pub fn turn(&self) -> Team {
        self.turn
    }

    /// Returns the session state.
    pub fn state(&self) -> GameState {
        self.state
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

    /// Legal destinations for the piece at `from`.
    pub fn threat_range(&self, from: usize) -> Vec<usize> {
        threat_range(&self.board, from)
    }

    /// Applies one move.
    ///
    /// A jump removes the piece at the midpoint; if the jumping piece
    /// can jump again from its landing cell the turn stays with the
    /// same team and the outcome is [`MoveOutcome::JumpContinues`]. A
    /// man reaching its crowning row becomes a king on the same move.
    /// Rejection leaves the session untouched.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if !self.state.admits_moves() {
            warn!(state = ?self.state, "Move rejected: game is over");
            return Err(MoveError::GameOver);
        }
        let mut piece = self
            .board
            .get(mv.from)
            .ok_or(MoveError::EmptyCell(mv.from))?;
        if piece.team != self.turn {
            warn!(?piece.team, "Move rejected: not this team's turn");
            return Err(MoveError::NotYourTurn(self.turn));
        }
        if !threat_range(&self.board, mv.from).contains(&mv.to) {
            warn!(%mv, "Move rejected: destination out of range");
            return Err(MoveError::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }

        // A diagonal two-row move is a jump; its victim sits halfway
        // between origin and landing.
        let jumped = (mv.from / 8).abs_diff(mv.to / 8) == 2;
        if jumped {
            let midpoint = (mv.from + mv.to) / 2;
            let captured = self.board.remove(midpoint);
            debug!(midpoint, ?captured, "Jumped piece removed");
        }

        self.board.remove(mv.from);
        if piece.rank == Rank::Man && mv.to / 8 == piece.crowning_row() {
            piece = CheckersPiece::king(piece.team);
            info!(cell = mv.to, "Man crowned");
        }
        self.board.add(mv.to, piece);

        self.state = self.evaluate();
        if self.state.is_terminal() {
            info!(state = ?self.state, "Game over");
            return Ok(MoveOutcome::Completed(self.state));
        }

        if jumped && !jump_targets(&self.board, mv.to, piece).is_empty() {
            info!(from = mv.to, "Chain jump available, turn retained");
            return Ok(MoveOutcome::JumpContinues { from: mv.to });
        }

        self.turn = self.turn.opponent();
        info!(%mv, state = ?self.state, "Move completed");
        Ok(MoveOutcome::Completed(self.state))
    }

    /// Evaluates the terminal state: a team with no pieces left has
    /// lost; otherwise the game is active.
    pub fn evaluate(&self) -> GameState {
        for team in Team::iter() {
            let alive = self.board.pieces().any(|(_, piece)| piece.team == team);
            if !alive {
                return GameState::win_for(team.opponent());
            }
        }
        GameState::Active
    }

    /// Starts a new game on the same session, Primary to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = opening_board();
        self.turn = Team::Primary;
        self.state = GameState::Active;
        info!("New game started");
    }

    /// Rebuilds a session from synced fields.
    pub(crate) fn from_parts(
        board: CheckersBoard,
        turn: Team,
        state: GameState,
        roster: Roster,
    ) -> Self {
        Self {
            board,
            turn,
            state,
            roster,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn opening_board() -> CheckersBoard {
    let mut board = CheckersBoard::new();
    for index in 0..super::types::CELLS {
        let (row, col) = (index / 8, index % 8);
        if (row + col) % 2 != 0 {
            continue;
        }
        if row < 3 {
            board.add(index, CheckersPiece::man(Team::Secondary));
        } else if row > 4 {
            board.add(index, CheckersPiece::man(Team::Primary));
        }
    }
    board
}
