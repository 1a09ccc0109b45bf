//! Player that replays a fixed key sequence.

use super::{Player, Turn, parse_key};
use anyhow::Result;
use std::collections::VecDeque;
use tictactoe_engine::Board;
use tracing::debug;

/// Plays pre-recorded turns in order.
pub struct ScriptedPlayer {
    name: String,
    turns: VecDeque<Turn>,
}

impl ScriptedPlayer {
    /// Creates a player from a list of turns.
    pub fn new(name: impl Into<String>, turns: impl IntoIterator<Item = Turn>) -> Self {
        Self {
            name: name.into(),
            turns: turns.into_iter().collect(),
        }
    }

    /// Creates a player from typed keys, e.g. `"1 9 q"`. Unknown keys are skipped.
    pub fn from_keys(name: impl Into<String>, keys: &str) -> Self {
        Self::new(name, keys.chars().filter_map(parse_key))
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn next_turn(&mut self, _board: &Board) -> Result<Turn> {
        let turn = self
            .turns
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("{} ran out of scripted moves", self.name))?;
        debug!(player = %self.name, ?turn, "Scripted turn");
        Ok(turn)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Position;

    #[tokio::test]
    async fn test_plays_keys_in_order() {
        let mut player = ScriptedPlayer::from_keys("Tester", "1, 5 z q");
        let board = Board::new();
        assert_eq!(
            player.next_turn(&board).await.unwrap(),
            Turn::Place(Position::TopLeft)
        );
        assert_eq!(
            player.next_turn(&board).await.unwrap(),
            Turn::Place(Position::Center)
        );
        assert_eq!(player.next_turn(&board).await.unwrap(), Turn::Quit);
        assert!(player.next_turn(&board).await.is_err());
    }
}
