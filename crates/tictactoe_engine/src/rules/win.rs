//! Win detection logic for tic-tac-toe.

use super::super::position::Position;
use super::super::types::{Board, Player, Square};

/// Every three-in-a-row: rows, then columns, then diagonals.
pub static LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and who owns it.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::TopCenter, Square::Occupied(Player::Human));
        board.set(Position::TopRight, Square::Occupied(Player::Human));
        assert_eq!(check_winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_anti_diagonal_reports_line() {
        let board: Board = "X_O_O_OX_".parse().unwrap();
        assert_eq!(
            winning_line(&board),
            Some((
                Player::Automated,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::Automated));
            }
            assert_eq!(check_winner(&board), Some(Player::Automated), "{line:?}");
        }
    }
}
