//! Core domain types for tic-tac-toe.

use super::error::BoardError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, warn};

/// A side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The person at the keyboard, marker `X`, moves first.
    Human,
    /// The engine, marker `O`.
    Automated,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Automated,
            Player::Automated => Player::Human,
        }
    }

    /// Marker drawn on the board for this side.
    pub fn marker(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Automated => 'O',
        }
    }

    /// Parses a marker character (case-insensitive).
    pub fn from_marker(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'X' => Some(Player::Human),
            'O' => Some(Player::Automated),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human (X)"),
            Player::Automated => write!(f, "Automated (O)"),
        }
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
    /// Compact one-character form used by [`Board`]'s `Display`.
    fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(player) => player.marker(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Builds a board from an untrusted slice of squares.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::WrongLength`] unless exactly nine squares are given.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: &[Square]) -> Result<Self, BoardError> {
        let squares: [Square; 9] = squares.try_into().map_err(|_| {
            warn!("Rejected malformed board");
            BoardError::WrongLength(squares.len())
        })?;
        Ok(Self { squares })
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places a square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Empties the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of markers the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Whether the marker counts could arise from alternating play with the
    /// human moving first.
    pub fn is_consistent(&self) -> bool {
        let humans = self.count(Player::Human);
        let automated = self.count(Player::Automated);
        let valid = humans == automated || humans == automated + 1;
        if !valid {
            warn!(humans, automated, "Board consistency violated");
        }
        valid
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show the key (1-9) that selects them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from(b'1' + pos as u8),
                    Square::Occupied(player) => player.marker(),
                };
                result.push(symbol);
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

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses `X`, `O` and `_`/`.`/`-`/space for empty, row-major.
    ///
    /// Row separators (`|`, `/`, newlines) are skipped, so `"OO_/XX_/___"`
    /// and `"OO_XX____"` are the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars() {
            let square = match c {
                '|' | '/' | '\n' | '\r' | '\t' => continue,
                '_' | '.' | '-' | ' ' => Square::Empty,
                other => Square::Occupied(
                    Player::from_marker(other).ok_or(BoardError::UnknownSymbol(other))?,
                ),
            };
            squares.push(square);
        }
        Self::from_squares(&squares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_and_separated_forms_agree() {
        let compact: Board = "OO_XX____".parse().unwrap();
        let separated: Board = "oo_/xx_/...".parse().unwrap();
        assert_eq!(compact, separated);
        assert_eq!(compact.get(Position::TopLeft), Square::Occupied(Player::Automated));
        assert_eq!(compact.get(Position::Center), Square::Occupied(Player::Human));
        assert!(compact.is_empty(Position::TopRight));
    }

    #[test]
    fn test_display_round_trips() {
        let board: Board = "X_O_X_O_X".parse().unwrap();
        assert_eq!(board.to_string(), "X_O_X_O_X");
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!("XO_".parse::<Board>(), Err(BoardError::WrongLength(3)));
        assert_eq!(
            "__________".parse::<Board>(),
            Err(BoardError::WrongLength(10))
        );
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        assert_eq!(
            "XOZ______".parse::<Board>(),
            Err(BoardError::UnknownSymbol('Z'))
        );
    }

    #[test]
    fn test_grid_display_shows_keys_for_empty_squares() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_consistency() {
        assert!(Board::new().is_consistent());
        assert!("X________".parse::<Board>().unwrap().is_consistent());
        assert!("XO_______".parse::<Board>().unwrap().is_consistent());
        assert!(!"O________".parse::<Board>().unwrap().is_consistent());
        assert!(!"XX_______".parse::<Board>().unwrap().is_consistent());
    }

    #[test]
    fn test_serde_shape() {
        let board: Board = "X________".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
