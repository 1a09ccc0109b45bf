//! Game orchestration between a player and the engine.

use crate::players::{Player, Turn};
use crate::scheduler::TurnScheduler;
use anyhow::{Context, Result};
use tictactoe_engine::{Move, Outcome, Phase, Position, Session, SessionError};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to whoever renders the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is ready.
    Started,
    /// The engine is about to move.
    Thinking,
    /// Move was made.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// The move.
        action: Move,
    },
    /// The player picked a square that was not available.
    Rejected {
        /// The requested square.
        position: Position,
        /// Why it was refused.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final result.
        outcome: Outcome,
    },
    /// The player quit.
    Aborted,
}

/// Drives one [`Session`] from start to finish.
pub struct Orchestrator {
    session: Session,
    player: Box<dyn Player>,
    scheduler: TurnScheduler,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player: Box<dyn Player>,
        scheduler: TurnScheduler,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: Session::new(),
            player,
            scheduler,
            event_tx,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the game loop until the game ends or the player quits.
    ///
    /// Returns the terminal phase.
    #[instrument(skip(self), fields(player = %self.player.name()))]
    pub async fn run(&mut self) -> Result<Phase> {
        info!("Starting game orchestration");
        self.session.start()?;
        self.event_tx.send(GameEvent::Started)?;

        loop {
            match self.session.phase() {
                Phase::HumanTurn => self.human_turn().await?,
                Phase::AutomatedTurn => self.automated_turn().await?,
                Phase::Ended(outcome) => {
                    info!(%outcome, "Game finished");
                    self.event_tx.send(GameEvent::GameOver { outcome })?;
                    return Ok(self.session.phase());
                }
                Phase::Aborted => {
                    self.event_tx.send(GameEvent::Aborted)?;
                    return Ok(Phase::Aborted);
                }
                Phase::NotStarted => anyhow::bail!("Session left unstarted"),
            }
        }
    }

    async fn human_turn(&mut self) -> Result<()> {
        let name = self.player.name().to_string();
        debug!(player = %name, "Waiting for move");
        let turn = self
            .player
            .next_turn(self.session.board())
            .await
            .with_context(|| format!("{} failed to produce a move", name))?;

        match turn {
            Turn::Quit => {
                info!(player = %name, "Player quit");
                self.session.abort()?;
            }
            Turn::Place(position) => match self.session.play_human(position) {
                Ok(_) => self.announce_last_move(name)?,
                Err(e @ SessionError::SquareOccupied(_)) => {
                    warn!(error = %e, "Move rejected");
                    self.event_tx.send(GameEvent::Rejected {
                        position,
                        reason: e.to_string(),
                    })?;
                }
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }

    async fn automated_turn(&mut self) -> Result<()> {
        self.event_tx.send(GameEvent::Thinking)?;
        self.scheduler.play_automated(&mut self.session).await?;
        self.announce_last_move("Engine".to_string())
    }

    fn announce_last_move(&self, player: String) -> Result<()> {
        if let Some(&action) = self.session.history().last() {
            self.event_tx.send(GameEvent::MoveMade { player, action })?;
        }
        Ok(())
    }
}
