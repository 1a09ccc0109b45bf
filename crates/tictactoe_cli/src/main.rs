//! Tictactoe - command-line driver
//!
//! Batch subcommands around the unbeatable engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_cli::{
    GameEvent, MinimaxPlayer, Orchestrator, PlayConfig, Player, ScriptedPlayer, TurnScheduler,
    verify_unbeatable,
};
use tictactoe_engine::{Board, Phase, Player as Side, analyze, evaluate};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(
        path = %cli.config.display(),
        delay_ms = config.thinking_delay_ms(),
        player = %config.player_name(),
        "Config loaded"
    );

    match cli.command {
        Command::Evaluate { board } => run_evaluate(&board),
        Command::BestMove { board, side, json } => run_best_move(&board, side.into(), json),
        Command::Play { keys, no_delay } => {
            let player = ScriptedPlayer::from_keys(config.player_name().clone(), &keys);
            run_game(Box::new(player), scheduler(config, no_delay)).await
        }
        Command::Demo { no_delay } => {
            let scheduler = scheduler(config, no_delay);
            let player = MinimaxPlayer::new("Minimax", Side::Human, scheduler);
            run_game(Box::new(player), scheduler).await
        }
        Command::Verify => run_verify(),
    }
}

fn scheduler(config: PlayConfig, no_delay: bool) -> TurnScheduler {
    let config = if no_delay {
        config.with_thinking_delay_ms(0)
    } else {
        config
    };
    TurnScheduler::new(config.thinking_delay())
}

fn run_evaluate(board: &Board) -> Result<()> {
    println!("{}\n", board.display());
    println!("{}", evaluate(board));
    Ok(())
}

#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: &Board, side: Side, json: bool) -> Result<()> {
    let analysis = analyze(board, side)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let best = analysis.best.position;
    println!("{}\n", board.display());
    println!("{} plays {} ({})", side, best.key(), best.label());
    println!(
        "Forced result: {} ({} positions searched)",
        analysis.forced_outcome(),
        analysis.nodes
    );
    Ok(())
}

/// Runs one game and prints its events as they arrive.
async fn run_game(player: Box<dyn Player>, scheduler: TurnScheduler) -> Result<()> {
    info!(delay = ?scheduler.thinking_delay(), "Starting game");
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(player, scheduler, event_tx);

    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            print_event(&event);
        }
    });

    let result = orchestrator.run().await;
    let board = *orchestrator.session().board();
    // Dropping the orchestrator closes the channel so the printer finishes.
    drop(orchestrator);
    printer.await?;

    let phase = result?;
    println!("\n{}\n", board.display());
    info!(%phase, "Game complete");
    if let Phase::Ended(outcome) = phase {
        println!("{}", outcome);
    } else {
        println!("{}", phase);
    }
    Ok(())
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::Started => println!("New game. You are X; press 1-9 to move, q to quit."),
        GameEvent::Thinking => println!("Engine is thinking..."),
        GameEvent::MoveMade { player, action } => println!("{}: {}", player, action),
        GameEvent::Rejected { position, reason } => {
            println!("Key {} refused: {}", position.key(), reason)
        }
        GameEvent::GameOver { outcome } => println!("Game over: {}", outcome),
        GameEvent::Aborted => println!("Game aborted."),
    }
}

fn run_verify() -> Result<()> {
    let report = verify_unbeatable()?;
    println!(
        "{} games: {} engine wins, {} draws, {} human wins",
        report.games, report.automated_wins, report.draws, report.human_wins
    );
    if !report.is_unbeatable() {
        anyhow::bail!("Engine lost {} games", report.human_wins);
    }
    Ok(())
}
