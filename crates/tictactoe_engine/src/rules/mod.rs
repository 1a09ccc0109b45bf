//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; nothing here mutates or remembers state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::outcome::Outcome;
use super::types::Board;
use tracing::instrument;

/// Determines whether the game has ended and how.
///
/// A winning line takes precedence over a full board, so a board that is
/// completely occupied and contains three in a row reports the win.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::won_by(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        // O O O / X X O / X O X
        assert_eq!(evaluate(&board("OOOXXOXOX")), Outcome::AutomatedWins);
        // X X X / O O X / X O O
        assert_eq!(evaluate(&board("XXXOOXXOO")), Outcome::HumanWins);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X / O X X / O X O
        assert_eq!(evaluate(&board("XOXOXXOXO")), Outcome::Draw);
    }

    #[test]
    fn test_partial_board_in_progress() {
        assert_eq!(evaluate(&board("XX_O_____")), Outcome::InProgress);
    }
}
