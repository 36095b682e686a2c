//! Position evaluation

use crate::game::{GameState, Player};

/// Score differential from O's point of view.
///
/// O maximizes this value and X minimizes it. Only meaningful at leaves of
/// the search; there is no positional term.
pub fn evaluate(state: &GameState) -> i32 {
    state.score(Player::O) as i32 - state.score(Player::X) as i32
}

/// Whether `player` wants `evaluate` to go up
pub fn is_maximizing(player: Player) -> bool {
    player == Player::O
}
