//! Player trait and implementations.

mod minimax;
mod scripted;

pub use minimax::MinimaxPlayer;
pub use scripted::ScriptedPlayer;

use anyhow::Result;
use tictactoe_engine::{Board, Position};

/// What a player does with their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Place a marker.
    Place(Position),
    /// Abandon the game.
    Quit,
}

/// Maps a key press to a turn: `1`-`9` select a cell, `q` quits.
///
/// Any other key is ignored.
pub fn parse_key(key: char) -> Option<Turn> {
    match key {
        'q' | 'Q' => Some(Turn::Quit),
        c => c
            .to_digit(10)
            .and_then(|digit| Position::from_key(digit as u8))
            .map(Turn::Place),
    }
}

/// Trait for the side that plays against the engine.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's next turn for the given board.
    async fn next_turn(&mut self, board: &Board) -> Result<Turn>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
