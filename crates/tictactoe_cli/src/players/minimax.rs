//! Perfect-play player for the human side.

use super::{Player, Turn};
use crate::scheduler::TurnScheduler;
use anyhow::Result;
use tictactoe_engine::{Board, Player as Side};
use tracing::debug;

/// Plays the given side with the engine's own search.
///
/// Pitting it against the automated side shows that perfect play on both
/// sides ends in a draw.
pub struct MinimaxPlayer {
    name: String,
    side: Side,
    scheduler: TurnScheduler,
}

impl MinimaxPlayer {
    /// Creates a minimax player for `side`.
    pub fn new(name: impl Into<String>, side: Side, scheduler: TurnScheduler) -> Self {
        Self {
            name: name.into(),
            side,
            scheduler,
        }
    }
}

#[async_trait::async_trait]
impl Player for MinimaxPlayer {
    async fn next_turn(&mut self, board: &Board) -> Result<Turn> {
        let position = self.scheduler.choose(board, self.side).await?;
        debug!(player = %self.name, %position, "Minimax player chose position");
        Ok(Turn::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
