//! Match command - play the engine against a random mover
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rayon::prelude::*;

use triggle_core::{AlphaBetaAI, GameResult, GameState, Move, MoveSelector, Player, RandomAI};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Clone, Debug)]
pub struct MatchArgs {
    /// Number of games to play (the engine alternates X and O)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Pegs per side of the hexagon (4-8)
    #[arg(long, default_value = "4")]
    pub side: u8,

    /// Engine search depth
    #[arg(long, default_value = "2")]
    pub depth: u32,

    /// Base seed for the random mover
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Play games one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    engine_side: Player,
    result: GameResult,
    scores: (u32, u32),
    moves: Vec<Move>,
}

impl GameRecord {
    fn engine_won(&self) -> bool {
        matches!(
            (self.engine_side, self.result),
            (Player::X, GameResult::XWins) | (Player::O, GameResult::OWins)
        )
    }

    fn random_won(&self) -> bool {
        matches!(
            (self.engine_side, self.result),
            (Player::X, GameResult::OWins) | (Player::O, GameResult::XWins)
        )
    }
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    engine_wins: usize,
    random_wins: usize,
    draws: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: MatchArgs) -> Result<()> {
    // Reject bad settings before spawning games
    GameState::new(args.side, Player::X)?;

    tracing::info!(
        "Starting match: engine depth {} vs random ({} games, side {})",
        args.depth,
        args.games,
        args.side
    );

    let results = play_match(&args)?;
    report_results(&results, &args)?;
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_match(args: &MatchArgs) -> Result<MatchResults> {
    let numbers: Vec<usize> = (1..=args.games).collect();

    let games: Result<Vec<GameRecord>> = if args.sequential {
        numbers.iter().map(|&n| play_single_game(n, args)).collect()
    } else {
        numbers.par_iter().map(|&n| play_single_game(n, args)).collect()
    };
    let games = games?;

    for record in &games {
        tracing::info!(
            "Game {}: engine as {} -> {:?} {:?} ({} moves)",
            record.game_number,
            record.engine_side,
            record.result,
            record.scores,
            record.moves.len()
        );
    }

    Ok(compute_statistics(games))
}

fn report_results(results: &MatchResults, args: &MatchArgs) -> Result<()> {
    if args.json {
        print_json_results(results)
    } else {
        print_text_results(results);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Engine plays X in odd-numbered games and O in even ones; X always starts
fn play_single_game(game_number: usize, args: &MatchArgs) -> Result<GameRecord> {
    let engine_side = if game_number % 2 == 1 { Player::X } else { Player::O };
    let mut engine = AlphaBetaAI::new(args.depth);
    let mut random = RandomAI::with_seed(args.seed.wrapping_add(game_number as u64));

    let mut state = GameState::new(args.side, Player::X)?;
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let selector: &mut dyn MoveSelector = if state.current_player() == engine_side {
            &mut engine
        } else {
            &mut random
        };
        let mv = selector.select_move(&state)?;
        state.apply_move(mv)?;
        moves.push(mv);
    }

    Ok(GameRecord {
        game_number,
        engine_side,
        result: state.result(),
        scores: state.scores(),
        moves,
    })
}

fn compute_statistics(games: Vec<GameRecord>) -> MatchResults {
    let engine_wins = games.iter().filter(|g| g.engine_won()).count();
    let random_wins = games.iter().filter(|g| g.random_won()).count();
    let draws = games.iter().filter(|g| g.result == GameResult::Draw).count();

    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        engine_wins,
        random_wins,
        draws,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_json_results(results: &MatchResults) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        engine_side: Player,
        result: GameResult,
        x_score: u32,
        o_score: u32,
        moves: usize,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        engine_wins: usize,
        random_wins: usize,
        draws: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        engine_wins: results.engine_wins,
        random_wins: results.random_wins,
        draws: results.draws,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                engine_side: g.engine_side,
                result: g.result,
                x_score: g.scores.0,
                o_score: g.scores.1,
                moves: g.moves.len(),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games:  {}", total);
    println!("Engine wins:  {} ({:.1}%)", results.engine_wins, percent(results.engine_wins, total));
    println!("Random wins:  {} ({:.1}%)", results.random_wins, percent(results.random_wins, total));
    println!("Draws:        {} ({:.1}%)", results.draws, percent(results.draws, total));
    println!("Avg moves:    {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: engine as {}, {:?}, X {} - O {} in {} moves",
            game.game_number,
            game.engine_side,
            game.result,
            game.scores.0,
            game.scores.1,
            game.moves.len()
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
