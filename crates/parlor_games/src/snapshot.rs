//! The string-keyed board snapshot exchanged with the realtime store.
//!
//! The sync layer stores each occupied cell under the key
//! `"cell" + index` (e.g. `"cell27"`) next to the session fields.
//! Import is lenient: malformed or unparsable cell entries, unknown
//! keys, and out-of-range indices read as empty cells, and missing
//! session fields take their defaults. Export writes only occupied
//! cells.

use crate::games::checkers::{self, CheckersPiece, Rank};
use crate::games::chess::{self, CastlingFlags, ChessKind, ChessPiece};
use crate::games::tictactoe;
use crate::types::{GameState, Player, Roster, Team};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

fn cell_key(index: usize) -> String {
    format!("cell{index}")
}

fn cell_index(key: &str, cells: usize) -> Option<usize> {
    let index: usize = key.strip_prefix("cell")?.parse().ok()?;
    (index < cells).then_some(index)
}

fn primary_to_move() -> bool {
    true
}

fn turn_flag(turn: Team) -> bool {
    turn == Team::Primary
}

fn turn_team(flag: bool) -> Team {
    if flag { Team::Primary } else { Team::Secondary }
}

/// Wire code for a team; `NONE` paired with a `NONE` piece type marks
/// an empty cell and reads the same as an absent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum TeamCode {
    None,
    Primary,
    Secondary,
}

impl TeamCode {
    fn team(self) -> Option<Team> {
        match self {
            TeamCode::None => None,
            TeamCode::Primary => Some(Team::Primary),
            TeamCode::Secondary => Some(Team::Secondary),
        }
    }

    fn of(team: Team) -> Self {
        match team {
            Team::Primary => TeamCode::Primary,
            Team::Secondary => TeamCode::Secondary,
        }
    }
}

/// Wire code for a chess piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum KindCode {
    None,
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl KindCode {
    fn kind(self) -> Option<ChessKind> {
        match self {
            KindCode::None => None,
            KindCode::King => Some(ChessKind::King),
            KindCode::Queen => Some(ChessKind::Queen),
            KindCode::Bishop => Some(ChessKind::Bishop),
            KindCode::Knight => Some(ChessKind::Knight),
            KindCode::Rook => Some(ChessKind::Rook),
            KindCode::Pawn => Some(ChessKind::Pawn),
        }
    }

    fn of(kind: ChessKind) -> Self {
        match kind {
            ChessKind::King => KindCode::King,
            ChessKind::Queen => KindCode::Queen,
            ChessKind::Bishop => KindCode::Bishop,
            ChessKind::Knight => KindCode::Knight,
            ChessKind::Rook => KindCode::Rook,
            ChessKind::Pawn => KindCode::Pawn,
        }
    }
}

/// Cell record for chess and tic-tac-toe: `{"type": …, "team": …}`.
/// Tic-tac-toe marks carry `type: "NONE"` — the mark is the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct PieceRecord {
    #[serde(rename = "type")]
    kind: KindCode,
    team: TeamCode,
}

fn record_value(record: PieceRecord) -> Value {
    serde_json::to_value(record).expect("piece record serializes")
}

/// Snapshot of a chess session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChessSnapshot {
    /// True when Primary is to move.
    #[serde(default = "primary_to_move")]
    pub turn: bool,
    /// Session state.
    #[serde(default)]
    pub state: GameState,
    /// Castling-eligibility flags.
    #[serde(flatten)]
    pub castling: CastlingFlags,
    /// Registered players.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Occupied cells under `"cell" + index` keys, plus any unknown
    /// fields the store may carry.
    #[serde(flatten)]
    pub cells: BTreeMap<String, Value>,
}

impl ChessSnapshot {
    /// Exports a session.
    #[instrument(skip(game))]
    pub fn from_game(game: &chess::Game) -> Self {
        let cells = game
            .board()
            .pieces()
            .map(|(index, piece)| {
                let record = PieceRecord {
                    kind: KindCode::of(piece.kind),
                    team: TeamCode::of(piece.team),
                };
                (cell_key(index), record_value(record))
            })
            .collect();
        Self {
            turn: turn_flag(game.turn()),
            state: game.state(),
            castling: *game.castling_flags(),
            players: game.roster().iter().cloned().collect(),
            cells,
        }
    }

    /// Imports a session, dropping anything unreadable.
    #[instrument(skip(self))]
    pub fn into_game(self) -> chess::Game {
        let mut board = chess::ChessBoard::new();
        for (key, value) in &self.cells {
            let Some(index) = cell_index(key, chess::CELLS) else {
                continue;
            };
            let Some(piece) = parse_chess_cell(value) else {
                debug!(key, "Dropping unreadable cell entry");
                continue;
            };
            board.add(index, piece);
        }
        chess::Game::from_parts(
            board,
            turn_team(self.turn),
            self.state,
            self.castling,
            Roster::from_players(self.players),
        )
    }
}

fn parse_chess_cell(value: &Value) -> Option<ChessPiece> {
    let record: PieceRecord = serde_json::from_value(value.clone()).ok()?;
    Some(ChessPiece::new(record.kind.kind()?, record.team.team()?))
}

/// Snapshot of a checkers session. Cell values are flat string codes
/// (`"PRIMARY_MAN"`, `"SECONDARY_KING"`, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckersSnapshot {
    /// True when Primary is to move.
    #[serde(default = "primary_to_move")]
    pub turn: bool,
    /// Session state.
    #[serde(default)]
    pub state: GameState,
    /// Registered players.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Occupied cells under `"cell" + index` keys.
    #[serde(flatten)]
    pub cells: BTreeMap<String, Value>,
}

impl CheckersSnapshot {
    /// Exports a session.
    #[instrument(skip(game))]
    pub fn from_game(game: &checkers::Game) -> Self {
        let cells = game
            .board()
            .pieces()
            .map(|(index, piece)| (cell_key(index), Value::from(checkers_code(piece))))
            .collect();
        Self {
            turn: turn_flag(game.turn()),
            state: game.state(),
            players: game.roster().iter().cloned().collect(),
            cells,
        }
    }

    /// Imports a session, dropping anything unreadable.
    #[instrument(skip(self))]
    pub fn into_game(self) -> checkers::Game {
        let mut board = checkers::CheckersBoard::new();
        for (key, value) in &self.cells {
            let Some(index) = cell_index(key, checkers::CELLS) else {
                continue;
            };
            let Some(piece) = value.as_str().and_then(parse_checkers_code) else {
                debug!(key, "Dropping unreadable cell entry");
                continue;
            };
            board.add(index, piece);
        }
        checkers::Game::from_parts(
            board,
            turn_team(self.turn),
            self.state,
            Roster::from_players(self.players),
        )
    }
}

fn checkers_code(piece: CheckersPiece) -> &'static str {
    match (piece.team, piece.rank) {
        (Team::Primary, Rank::Man) => "PRIMARY_MAN",
        (Team::Primary, Rank::King) => "PRIMARY_KING",
        (Team::Secondary, Rank::Man) => "SECONDARY_MAN",
        (Team::Secondary, Rank::King) => "SECONDARY_KING",
    }
}

fn parse_checkers_code(code: &str) -> Option<CheckersPiece> {
    match code {
        "PRIMARY_MAN" => Some(CheckersPiece::man(Team::Primary)),
        "PRIMARY_KING" => Some(CheckersPiece::king(Team::Primary)),
        "SECONDARY_MAN" => Some(CheckersPiece::man(Team::Secondary)),
        "SECONDARY_KING" => Some(CheckersPiece::king(Team::Secondary)),
        _ => None,
    }
}

/// Snapshot of a tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeSnapshot {
    /// True when Primary is to move.
    #[serde(default = "primary_to_move")]
    pub turn: bool,
    /// Session state.
    #[serde(default)]
    pub state: GameState,
    /// Registered players.
    #[serde(default)]
    pub players: Vec<Player>,
    /// Occupied cells under `"cell" + index` keys.
    #[serde(flatten)]
    pub cells: BTreeMap<String, Value>,
}

impl TicTacToeSnapshot {
    /// Exports a session.
    #[instrument(skip(game))]
    pub fn from_game(game: &tictactoe::Game) -> Self {
        let cells = game
            .board()
            .pieces()
            .map(|(index, mark)| {
                let record = PieceRecord {
                    kind: KindCode::None,
                    team: TeamCode::of(mark),
                };
                (cell_key(index), record_value(record))
            })
            .collect();
        Self {
            turn: turn_flag(game.turn()),
            state: game.state(),
            players: game.roster().iter().cloned().collect(),
            cells,
        }
    }

    /// Imports a session, dropping anything unreadable.
    #[instrument(skip(self))]
    pub fn into_game(self) -> tictactoe::Game {
        let mut board = tictactoe::Grid::new();
        for (key, value) in &self.cells {
            let Some(index) = cell_index(key, tictactoe::CELLS) else {
                continue;
            };
            let record: Option<PieceRecord> = serde_json::from_value(value.clone()).ok();
            let Some(mark) = record.and_then(|r| r.team.team()) else {
                debug!(key, "Dropping unreadable cell entry");
                continue;
            };
            board.add(index, mark);
        }
        tictactoe::Game::from_parts(
            board,
            turn_team(self.turn),
            self.state,
            Roster::from_players(self.players),
        )
    }
}
