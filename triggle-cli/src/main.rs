//! Triggle CLI - Command-line interface
//!
//! Commands:
//! - play: Play an interactive game, optionally against the engine
//! - moves: List the legal moves of a starting position
//! - match: Pit the engine against a random mover

mod input;
mod match_cmd;
mod moves_cmd;
mod play_cmd;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "triggle")]
#[command(about = "Triggle: capture triangles on a hexagonal peg board")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game at the terminal
    Play(play_cmd::PlayArgs),
    /// List all legal moves of a starting position
    Moves(moves_cmd::MovesArgs),
    /// Play the engine against a random mover
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Moves(args) => moves_cmd::run(args),
        Commands::Match(args) => match_cmd::run(args),
    }
}
