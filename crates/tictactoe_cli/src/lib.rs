//! Command-line driver for the unbeatable tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with defaults ([`PlayConfig`])
//! - **Scheduler**: cosmetic thinking delay before engine moves ([`TurnScheduler`])
//! - **Players**: the side facing the engine ([`Player`] trait)
//! - **Orchestrator**: runs a [`tictactoe_engine::Session`] and emits [`GameEvent`]s
//! - **Verify**: exhaustive unbeatability check

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;
mod scheduler;
mod verify;

pub use config::{ConfigError, PlayConfig};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{MinimaxPlayer, Player, ScriptedPlayer, Turn, parse_key};
pub use scheduler::TurnScheduler;
pub use verify::{VerifyError, VerifyReport, verify_unbeatable};
