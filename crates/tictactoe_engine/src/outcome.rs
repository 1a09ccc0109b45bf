//! Result of evaluating a board.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Where a game stands. Always derived from the board, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// No winning line and at least one empty square.
    #[display("In progress")]
    InProgress,
    /// Three X markers in a line.
    #[display("Human wins")]
    HumanWins,
    /// Three O markers in a line.
    #[display("Automated wins")]
    AutomatedWins,
    /// Full board with no winning line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Outcome for a game won by the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => Outcome::HumanWins,
            Player::Automated => Outcome::AutomatedWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::HumanWins => Some(Player::Human),
            Outcome::AutomatedWins => Some(Player::Automated),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True once the game has concluded.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
