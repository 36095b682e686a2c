//! Moves command - list every legal move of a starting position

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use triggle_core::movegen::successors;
use triggle_core::{GameConfig, GameState, Move, Player};

use crate::render::render_board;

#[derive(Args, Debug, Default)]
pub struct MovesArgs {
    /// JSON game config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pegs per side of the hexagon (4-8)
    #[arg(long)]
    pub side: Option<u8>,

    /// Side to move (X or O)
    #[arg(long)]
    pub first: Option<Player>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Legal moves and successor count for one position
#[derive(Debug, serde::Serialize)]
struct MoveListing {
    side_length: u8,
    player: Player,
    moves: Vec<Move>,
    successor_states: usize,
}

pub fn run(args: MovesArgs) -> Result<()> {
    let state = initial_state(&args)?;
    let listing = list_moves(&state);

    tracing::info!(
        moves = listing.moves.len(),
        successors = listing.successor_states,
        "generated moves"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", render_board(&state));
        println!("\nCurrent player: {}", listing.player);
        println!("Total possible moves: {}", listing.moves.len());
        let names: Vec<String> = listing.moves.iter().map(|m| m.to_string()).collect();
        println!("{}", names.join(", "));
        println!("Total possible game states: {}", listing.successor_states);
    }
    Ok(())
}

fn initial_state(args: &MovesArgs) -> Result<GameState> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(side) = args.side {
        config.side_length = side;
    }
    if let Some(first) = args.first {
        config.first_player = first;
    }
    Ok(config.new_game()?)
}

fn list_moves(state: &GameState) -> MoveListing {
    MoveListing {
        side_length: state.side_length(),
        player: state.current_player(),
        moves: state.legal_moves(),
        successor_states: successors(state).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_counts_agree() {
        let args = MovesArgs {
            side: Some(5),
            first: Some(Player::O),
            ..MovesArgs::default()
        };
        let state = initial_state(&args).unwrap();
        let listing = list_moves(&state);
        assert_eq!(listing.side_length, 5);
        assert_eq!(listing.player, Player::O);
        assert!(!listing.moves.is_empty());
        assert_eq!(listing.moves.len(), listing.successor_states);
    }

    #[test]
    fn test_rejects_bad_side() {
        let args = MovesArgs {
            side: Some(2),
            ..MovesArgs::default()
        };
        assert!(initial_state(&args).is_err());
    }
}
