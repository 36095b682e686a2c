//! Computer opponents: minimax with alpha-beta pruning, and a seeded random
//! mover for sparring

use crate::error::{Result, TriggleError};
use crate::eval::{evaluate, is_maximizing};
use crate::game::{GameResult, GameState, Move};
use crate::movegen::legal_moves;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default search depth in plies
pub const DEFAULT_DEPTH: u32 = 2;

// ============================================================================
// MOVE SELECTORS
// ============================================================================

/// Anything that can pick a move for the side to play
pub trait MoveSelector {
    fn select_move(&mut self, state: &GameState) -> Result<Move>;

    /// Short label for logs and reports
    fn name(&self) -> String;
}

/// Alpha-Beta AI player
#[derive(Clone, Debug)]
pub struct AlphaBetaAI {
    pub depth: u32,
}

impl AlphaBetaAI {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    /// Get best move for current position
    pub fn best_move(&self, state: &GameState) -> Result<Move> {
        best_move(state, self.depth)
    }

    /// Play against itself until the game ends
    pub fn play_game(&self, initial: GameState) -> (GameState, Vec<Move>) {
        let mut state = initial;
        let mut history = Vec::new();

        while state.result() == GameResult::Ongoing {
            let Ok(mv) = self.best_move(&state) else {
                break;
            };
            if state.apply_move(mv).is_err() {
                break;
            }
            history.push(mv);
        }

        (state, history)
    }
}

impl Default for AlphaBetaAI {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MoveSelector for AlphaBetaAI {
    fn select_move(&mut self, state: &GameState) -> Result<Move> {
        self.best_move(state)
    }

    fn name(&self) -> String {
        format!("alpha-beta(depth={})", self.depth)
    }
}

/// Picks uniformly among legal moves
pub struct RandomAI {
    rng: ChaCha8Rng,
}

impl RandomAI {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomAI {
    fn select_move(&mut self, state: &GameState) -> Result<Move> {
        if state.is_terminal() {
            return Err(TriggleError::NoLegalMove);
        }
        legal_moves(state)
            .choose(&mut self.rng)
            .copied()
            .ok_or(TriggleError::NoLegalMove)
    }

    fn name(&self) -> String {
        "random".to_string()
    }
}

// ============================================================================
// MINIMAX WITH ALPHA-BETA
// ============================================================================

/// Value of `state` searched `depth` plies deep within `[alpha, beta]`
pub fn minimax(state: &GameState, depth: u32, alpha: i32, beta: i32) -> i32 {
    let mut working = state.clone();
    let mut nodes = 0;
    search(&mut working, depth, alpha, beta, &mut nodes)
}

/// Make/unmake recursion over one working state
fn search(state: &mut GameState, depth: u32, mut alpha: i32, mut beta: i32, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if depth == 0 || state.is_terminal() {
        return evaluate(state);
    }

    let moves = legal_moves(state);
    if moves.is_empty() {
        return evaluate(state);
    }

    let maximizing = is_maximizing(state.current_player());
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let Ok(played) = state.play(mv) else {
            continue;
        };
        let score = search(state, depth - 1, alpha, beta, nodes);
        state.unplay(played);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}

/// Best move for the side to play.
///
/// Ties keep the earliest move in generation order. Fails with
/// `NoLegalMove` when the game is over or nothing can be played.
pub fn best_move(state: &GameState, depth: u32) -> Result<Move> {
    if state.is_terminal() {
        return Err(TriggleError::NoLegalMove);
    }

    let moves = legal_moves(state);
    if moves.is_empty() {
        tracing::warn!("no legal move on a non-terminal board");
        return Err(TriggleError::NoLegalMove);
    }

    let maximizing = is_maximizing(state.current_player());
    let mut working = state.clone();
    let mut nodes = 0u64;
    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let played = working.play(mv)?;
        let score = search(&mut working, depth.saturating_sub(1), alpha, beta, &mut nodes);
        working.unplay(played);

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }
    }

    let (mv, score) = best.ok_or(TriggleError::NoLegalMove)?;
    tracing::debug!(
        player = %state.current_player(),
        depth,
        nodes,
        score,
        best = %mv,
        "search complete"
    );
    Ok(mv)
}

// ============================================================================
// TESTS
// ============================================================================
