//! Exhaustive check that the engine cannot be beaten.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_engine::{Outcome, Phase, Position, Session, SessionError};
use tracing::{info, instrument};

/// Failure while exploring the game tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum VerifyError {
    /// A session operation failed during exploration.
    #[display("{}", _0)]
    Session(SessionError),

    /// A session reported a finished game without a final result.
    #[display("Game ended while still in progress")]
    UnfinishedGame,
}

impl From<SessionError> for VerifyError {
    fn from(err: SessionError) -> Self {
        VerifyError::Session(err)
    }
}

/// Outcome counts over every game the human side can play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    /// Distinct complete games explored.
    pub games: usize,
    /// Games the human won. Zero for a correct engine.
    pub human_wins: usize,
    /// Games the engine won.
    pub automated_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl VerifyReport {
    /// True when no line of play lets the human win.
    pub fn is_unbeatable(&self) -> bool {
        self.human_wins == 0
    }

    fn record(&mut self, outcome: Outcome) -> Result<(), VerifyError> {
        match outcome {
            Outcome::HumanWins => self.human_wins += 1,
            Outcome::AutomatedWins => self.automated_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return Err(VerifyError::UnfinishedGame),
        }
        self.games += 1;
        Ok(())
    }
}

/// Plays every human move sequence from the empty board against the engine.
///
/// # Errors
///
/// Propagates any session error, which would indicate an engine bug such
/// as choosing an occupied square.
#[instrument]
pub fn verify_unbeatable() -> Result<VerifyReport, VerifyError> {
    let mut session = Session::new();
    session.start()?;
    let mut report = VerifyReport::default();
    explore(session, &mut report)?;
    info!(
        games = report.games,
        human_wins = report.human_wins,
        automated_wins = report.automated_wins,
        draws = report.draws,
        "Verification finished"
    );
    Ok(report)
}

fn explore(session: Session, report: &mut VerifyReport) -> Result<(), VerifyError> {
    match session.phase() {
        Phase::Ended(outcome) => report.record(outcome)?,
        Phase::HumanTurn => {
            for position in Position::valid_moves(session.board()) {
                let mut next = session.clone();
                next.play_human(position)?;
                explore(next, report)?;
            }
        }
        Phase::AutomatedTurn => {
            let mut next = session;
            next.play_automated()?;
            explore(next, report)?;
        }
        Phase::NotStarted => return Err(SessionError::NotStarted.into()),
        Phase::Aborted => return Err(SessionError::AlreadyFinished(Phase::Aborted).into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tallies_finished_games() {
        let mut report = VerifyReport::default();
        report.record(Outcome::Draw).unwrap();
        report.record(Outcome::AutomatedWins).unwrap();
        assert_eq!(report.games, 2);
        assert_eq!(report.draws, 1);
        assert_eq!(report.automated_wins, 1);
    }

    #[test]
    fn test_record_refuses_unfinished_game() {
        let mut report = VerifyReport::default();
        assert_eq!(
            report.record(Outcome::InProgress),
            Err(VerifyError::UnfinishedGame)
        );
        assert_eq!(report, VerifyReport::default());
    }
}
