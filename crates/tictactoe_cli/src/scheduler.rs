//! Cosmetic pause before the engine moves.

use std::time::Duration;
use tictactoe_engine::{Board, EngineError, Player, Position, Session, SessionError};
use tracing::{debug, instrument};

/// Waits a fixed, human-perceptible delay before consulting the engine.
///
/// The search itself is synchronous and finishes in well under the delay;
/// the pause only exists so a person can follow the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnScheduler {
    thinking_delay: Duration,
}

impl TurnScheduler {
    /// Creates a scheduler with the given delay.
    pub fn new(thinking_delay: Duration) -> Self {
        Self { thinking_delay }
    }

    /// A scheduler that never sleeps.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Returns the configured delay.
    pub fn thinking_delay(&self) -> Duration {
        self.thinking_delay
    }

    async fn think(&self) {
        if !self.thinking_delay.is_zero() {
            debug!(delay = ?self.thinking_delay, "Thinking");
            tokio::time::sleep(self.thinking_delay).await;
        }
    }

    /// Plays the automated side's turn in `session` after the delay.
    #[instrument(skip_all, fields(delay = ?self.thinking_delay))]
    pub async fn play_automated(&self, session: &mut Session) -> Result<Position, SessionError> {
        self.think().await;
        session.play_automated()
    }

    /// Chooses the best move for `side` after the delay.
    #[instrument(skip(self, board), fields(board = %board))]
    pub async fn choose(&self, board: &Board, side: Player) -> Result<Position, EngineError> {
        self.think().await;
        tictactoe_engine::best_move(board, side)
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::immediate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayConfig;

    #[tokio::test(start_paused = true)]
    async fn test_waits_before_moving() {
        let scheduler = TurnScheduler::new(Duration::from_millis(500));
        let mut session = Session::new();
        session.start().unwrap();
        session.play_human(Position::TopLeft).unwrap();

        let started = tokio::time::Instant::now();
        let position = scheduler.play_automated(&mut session).await.unwrap();
        assert_eq!(position, Position::Center);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_disabled_delay_matches_immediate() {
        let config = PlayConfig::default().with_thinking_delay_ms(0);
        let scheduler = TurnScheduler::new(config.thinking_delay());
        assert_eq!(scheduler, TurnScheduler::immediate());
        assert!(scheduler.thinking_delay().is_zero());
        assert_eq!(
            TurnScheduler::new(PlayConfig::default().thinking_delay()).thinking_delay(),
            Duration::from_millis(500)
        );
    }

    #[tokio::test]
    async fn test_choose_reports_finished_board() {
        let board: Board = "XXXOO____".parse().unwrap();
        let result = TurnScheduler::immediate().choose(&board, Player::Automated).await;
        assert!(matches!(result, Err(EngineError::GameOver(_))));
    }
}
