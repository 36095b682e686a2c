//! Play command - interactive game at the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_config(), run_session()
//! - Level 3: engine_turn(), human_turn()
//! - Level 4: prompt and report helpers

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use triggle_core::{AlphaBetaAI, GameConfig, GameResult, GameState, Player};

use crate::input::{parse_command, Command};
use crate::render::{render_board, render_scoreboard};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// JSON game config; flags below override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pegs per side of the hexagon (4-8)
    #[arg(long)]
    pub side: Option<u8>,

    /// Who moves first (X or O)
    #[arg(long)]
    pub first: Option<Player>,

    /// Let the engine play this side (X or O)
    #[arg(long)]
    pub ai: Option<Player>,

    /// Engine search depth in plies
    #[arg(long)]
    pub depth: Option<u32>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
pub fn run(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;

    tracing::info!(
        side = config.side_length,
        first = %config.first_player,
        depth = config.depth,
        "starting game"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let final_state = run_session(&config, stdin.lock(), stdout.lock())?;

    tracing::info!(result = ?final_state.result(), scores = ?final_state.scores(), "game finished");
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Merge the optional config file with command-line overrides
pub fn resolve_config(args: &PlayArgs) -> Result<GameConfig> {
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
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if args.ai.is_some() {
        config.ai_player = args.ai;
    }

    config.validate().context("Invalid game settings")?;
    Ok(config)
}

/// Play one game, reading moves from `input` and writing the board to
/// `output`. Returns the state when the game ends or the player quits.
pub fn run_session<R: BufRead, W: Write>(config: &GameConfig, mut input: R, mut output: W) -> Result<GameState> {
    let mut state = config.new_game()?;
    let engine = AlphaBetaAI::new(config.depth);

    while !state.is_terminal() {
        write!(output, "\n{}", render_board(&state))?;
        write!(output, "{}", render_scoreboard(&state))?;
        writeln!(output, "\n{}'s turn.", state.current_player())?;

        let keep_playing = if config.ai_player == Some(state.current_player()) {
            engine_turn(&mut state, &engine, &mut output)?
        } else {
            human_turn(&mut state, &engine, &mut input, &mut output)?
        };

        if !keep_playing {
            writeln!(output, "Game abandoned.")?;
            return Ok(state);
        }
    }

    write!(output, "\n{}", render_board(&state))?;
    write!(output, "{}", render_scoreboard(&state))?;
    report_outcome(&state, &mut output)?;
    Ok(state)
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn engine_turn<W: Write>(state: &mut GameState, engine: &AlphaBetaAI, output: &mut W) -> Result<bool> {
    let mv = engine.best_move(state)?;
    let captured = state.apply_move(mv)?;
    writeln!(output, "Engine plays {}{}", mv, capture_note(captured))?;
    Ok(true)
}

/// Prompt until a move is accepted. Returns `false` on quit or end of input.
fn human_turn<R: BufRead, W: Write>(
    state: &mut GameState,
    engine: &AlphaBetaAI,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    loop {
        write!(output, "Enter your move (format: row column direction): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(false),
            Ok(Command::Hint) => match engine.best_move(state) {
                Ok(mv) => writeln!(output, "Hint: {}", mv)?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            Ok(Command::Moves) => {
                let moves: Vec<String> = state.legal_moves().iter().map(|m| m.to_string()).collect();
                writeln!(output, "{} legal moves: {}", moves.len(), moves.join(", "))?;
            }
            Ok(Command::Play(mv)) => match state.apply_move(mv) {
                Ok(captured) => {
                    tracing::debug!(%mv, captured, "move applied");
                    writeln!(output, "Played {}{}", mv, capture_note(captured))?;
                    return Ok(true);
                }
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            Err(e) => writeln!(output, "Error: {}", e)?,
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn capture_note(captured: u32) -> String {
    match captured {
        0 => String::new(),
        1 => " (captured 1 triangle)".to_string(),
        n => format!(" (captured {} triangles)", n),
    }
}

fn report_outcome<W: Write>(state: &GameState, output: &mut W) -> Result<()> {
    if let Some(reason) = state.termination() {
        writeln!(output, "Game over: {}.", reason)?;
    }
    let verdict = match state.result() {
        GameResult::XWins => "Player X wins!",
        GameResult::OWins => "Player O wins!",
        GameResult::Draw => "It's a draw.",
        GameResult::Ongoing => "Game still in progress.",
    };
    writeln!(output, "{}", verdict)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(config: &GameConfig, script: &str) -> (GameState, String) {
        let mut out = Vec::new();
        let state = run_session(config, script.as_bytes(), &mut out).unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_scripted_moves_and_errors() {
        let config = GameConfig::default();
        let script = "A 1 D\nA 1 D\nZ 9 D\nnonsense\nA 1 DR\nquit\n";
        let (state, out) = session(&config, script);

        assert_eq!(state.edges().len(), 6);
        assert_eq!(state.current_player(), Player::X);
        assert!(out.contains("Played A1 D"));
        assert!(out.contains("already placed"));
        assert!(out.contains("out of bounds"));
        assert!(out.contains("Game abandoned."));
    }

    #[test]
    fn test_capture_reported() {
        let config = GameConfig::default();
        let script = "A 1 D\nA 1 DR\nA 2 DL\n";
        let (state, out) = session(&config, script);
        assert_eq!(state.scores(), (1, 0));
        assert!(out.contains("captured 1 triangle"));
    }

    #[test]
    fn test_engine_seat_moves() {
        let config = GameConfig {
            ai_player: Some(Player::X),
            depth: 1,
            ..GameConfig::default()
        };
        let (state, out) = session(&config, "");
        assert!(out.contains("Engine plays"));
        assert_eq!(state.edges().len(), 3);
        assert_eq!(state.current_player(), Player::O);
    }

    #[test]
    fn test_hint_and_moves_commands() {
        let config = GameConfig {
            ai_player: Some(Player::O),
            depth: 1,
            ..GameConfig::default()
        };
        let (state, out) = session(&config, "hint\nmoves\nA 1 D\n");
        assert!(out.contains("Hint: "));
        assert!(out.contains("legal moves"));
        assert_eq!(state.edges().len(), 6);
    }

    #[test]
    fn test_resolve_config_overrides() {
        let args = PlayArgs {
            side: Some(6),
            first: Some(Player::O),
            ai: Some(Player::X),
            depth: Some(3),
            ..PlayArgs::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.side_length, 6);
        assert_eq!(config.first_player, Player::O);
        assert_eq!(config.ai_player, Some(Player::X));
        assert_eq!(config.depth, 3);

        let bad = PlayArgs {
            side: Some(3),
            ..PlayArgs::default()
        };
        assert!(resolve_config(&bad).is_err());
    }
}
