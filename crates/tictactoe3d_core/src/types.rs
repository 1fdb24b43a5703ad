//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::scores::Scores;
use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// X is player 1 and always opens a round, O is player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 1, marks with X.
    X,
    /// Player 2, marks with O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Seat label used in score boards ("Player 1" / "Player 2").
    pub fn label(self) -> &'static str {
        match self {
            Player::X => "Player 1",
            Player::O => "Player 2",
        }
    }

    /// The mark this player places on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as plain text, showing empty cells by their index (0-8).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&pos.to_string()),
                    Square::Occupied(player) => result.push(player.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing; the only status that accepts moves.
    InProgress,
    /// Round ended with three in a row.
    Won(Player),
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state: the current round plus the running tally.
///
/// Serializable for snapshots, but only the transition code builds one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) scores: Scores,
    pub(crate) history: Vec<Position>,
}

impl GameState {
    /// Creates the session start state: empty board, X to move, no wins.
    pub fn new() -> Self {
        Self::with_scores(Scores::default())
    }

    /// Creates a fresh round that carries the given tally.
    pub(crate) fn with_scores(scores: Scores) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            scores,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// In a finished round this stays on the player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the running win tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The most recently marked position this round.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
