//! Core domain types shared by every game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// One of the two sides of a game.
///
/// `Primary` is the side that moves first in a fresh session (X in
/// tic-tac-toe, the bottom side in checkers and chess).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    /// The side that opens a fresh session.
    Primary,
    /// The responding side.
    Secondary,
}

impl Team {
    /// Returns the opposing team.
    pub fn opponent(self) -> Self {
        match self {
            Team::Primary => Team::Secondary,
            Team::Secondary => Team::Primary,
        }
    }
}

/// Lifecycle state of a game session.
///
/// Any `*Wins` state and `Tie` are terminal: no further moves are
/// accepted until the session is reset. `Pending` means a chess move
/// is held open waiting for a promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Game in progress.
    #[default]
    Active,
    /// Game in progress with a king under attack. Kept for wire
    /// compatibility; the engine never produces it (check detection is
    /// unimplemented, see `chess::Game::king_in_check`).
    Check,
    /// Primary has won.
    PrimaryWins,
    /// Secondary has won.
    SecondaryWins,
    /// Drawn game.
    Tie,
    /// A move is held open awaiting a promotion choice.
    Pending,
}

impl GameState {
    /// The winning state for `team`.
    pub fn win_for(team: Team) -> Self {
        match team {
            Team::Primary => GameState::PrimaryWins,
            Team::Secondary => GameState::SecondaryWins,
        }
    }

    /// Whether the game has ended (win or tie).
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::PrimaryWins | GameState::SecondaryWins | GameState::Tie
        )
    }

    /// Whether the session still accepts move requests.
    pub fn admits_moves(self) -> bool {
        matches!(self, GameState::Active | GameState::Check)
    }
}

/// Replacement piece for a pawn reaching the last rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Promotion {
    /// Promote to a queen.
    Queen,
    /// Promote to a rook.
    Rook,
    /// Promote to a bishop.
    Bishop,
    /// Promote to a knight.
    Knight,
}

/// A move request: origin cell, destination cell, and an optional
/// promotion choice for chess pawn moves that reach the last rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Move {
    /// Origin cell index.
    pub from: usize,
    /// Destination cell index.
    pub to: usize,
    /// Replacement piece, when the move promotes a pawn.
    #[new(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Promotion>,
}

impl Move {
    /// Attaches a promotion choice to the request.
    pub fn promoting(mut self, choice: Promotion) -> Self {
        self.promotion = Some(choice);
        self
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Result of an accepted move.
///
/// Chain-jump and held-promotion obligations are reported here rather
/// than stored in the session: the caller carries them into its next
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move finished; the turn has passed (or the game ended).
    Completed(GameState),
    /// A checkers jump landed with another jump available: the same
    /// team must move again from the given cell.
    JumpContinues {
        /// Cell the jumping piece landed on.
        from: usize,
    },
    /// A pawn reached the last rank without a promotion choice; the
    /// move is held until `resolve_promotion` supplies one.
    PromotionPending {
        /// Cell the pawn is waiting on.
        at: usize,
    },
}

/// Reason a move request was rejected.
///
/// Rejection never mutates the session: board, turn, and state are
/// exactly as they were before the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
    /// The moving piece does not belong to the team on turn.
    #[display("It is {:?}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Team),
    /// There is no piece on the origin cell.
    #[display("Cell {} is empty", _0)]
    EmptyCell(#[error(not(source))] usize),
    /// The destination cell is already occupied (tic-tac-toe).
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),
    /// The destination is not in the piece's threat range.
    #[display("Cell {} is not reachable from cell {}", to, from)]
    IllegalDestination {
        /// Origin cell of the rejected request.
        from: usize,
        /// Destination cell of the rejected request.
        to: usize,
    },
    /// A held promotion must be resolved before any other move.
    #[display("A promotion choice is outstanding")]
    AwaitingPromotion,
    /// `resolve_promotion` was called with no promotion held.
    #[display("No promotion is pending")]
    NoPendingPromotion,
}

/// A registered participant in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Player's unique id.
    id: String,
    /// Player's display name.
    name: String,
    /// Which side the player controls.
    team: Team,
}

/// Registration error for a session roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RosterError {
    /// Both seats are taken.
    #[display("Session already has 2 players")]
    Full,
}

/// The two player seats of a session.
///
/// Seats are handed out first come, first served: the first
/// registration takes `Primary`, the second `Secondary`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    seats: [Option<Player>; 2],
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a player in the first free seat and returns the team
    /// assigned to them.
    #[instrument(skip(self))]
    pub fn register(&mut self, id: impl Into<String> + std::fmt::Debug, name: impl Into<String> + std::fmt::Debug) -> Result<Team, RosterError> {
        let team = match &self.seats {
            [None, _] => Team::Primary,
            [_, None] => Team::Secondary,
            _ => {
                warn!("Session already has 2 players");
                return Err(RosterError::Full);
            }
        };
        let seat = match team {
            Team::Primary => &mut self.seats[0],
            Team::Secondary => &mut self.seats[1],
        };
        *seat = Some(Player::new(id.into(), name.into(), team));
        Ok(team)
    }

    /// Returns the player seated for `team`, if any.
    pub fn player(&self, team: Team) -> Option<&Player> {
        match team {
            Team::Primary => self.seats[0].as_ref(),
            Team::Secondary => self.seats[1].as_ref(),
        }
    }

    /// Finds a player by id.
    pub fn find(&self, id: &str) -> Option<&Player> {
        self.iter().find(|player| player.id() == id)
    }

    /// Iterates over the seated players.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().filter_map(Option::as_ref)
    }

    /// Rebuilds a roster from a synced player list; players with a
    /// duplicate team keep the first occurrence.
    pub fn from_players(players: Vec<Player>) -> Self {
        let mut roster = Self::new();
        for player in players {
            let seat = match player.team() {
                Team::Primary => &mut roster.seats[0],
                Team::Secondary => &mut roster.seats[1],
            };
            if seat.is_none() {
                *seat = Some(player);
            }
        }
        roster
    }
}
