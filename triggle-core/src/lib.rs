//! Triggle Core - Game engine and AI
//!
//! This crate provides the core game logic for Triggle:
//! - Lattice geometry (hexagon of pegs on a triangular grid)
//! - Edge set and triangle ownership
//! - Game state, move validation and termination
//! - Legal move generation
//! - Minimax AI with alpha-beta pruning

pub mod lattice;
pub mod edges;
pub mod triangles;
pub mod game;
pub mod movegen;
pub mod eval;
pub mod ai;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use lattice::{Direction, Half, Lattice, TriangleKey, Vertex, MAX_SIDE_LENGTH, MIN_SIDE_LENGTH};
pub use edges::EdgeSet;
pub use triangles::TriangleLedger;
pub use game::{GameResult, GameState, Move, Player, Termination};
pub use movegen::legal_moves;
pub use eval::evaluate;
pub use ai::{best_move, minimax, AlphaBetaAI, MoveSelector, RandomAI, DEFAULT_DEPTH};
pub use config::GameConfig;
pub use error::{Result, TriggleError};
