//! Legal move enumeration

use crate::game::{GameState, Move};
use crate::lattice::Direction;

/// Every move `validate_move` accepts.
///
/// Pegs are visited row-major and directions in `Direction::ALL` order. The
/// order is stable; search tie-breaks depend on it.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let lattice = state.lattice();
    let mut moves = Vec::new();

    for start in lattice.vertices() {
        for direction in Direction::ALL {
            let mv = Move::new(start, direction);
            if state.validate_move(mv).is_ok() {
                moves.push(mv);
            }
        }
    }

    moves
}

/// Every state reachable in one move, paired with the move that reaches it
pub fn successors(state: &GameState) -> Vec<(Move, GameState)> {
    legal_moves(state)
        .into_iter()
        .filter_map(|mv| state.with_move(mv).ok().map(|next| (mv, next)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crate::lattice::Vertex;

    #[test]
    fn test_opening_move_count() {
        // On an empty board every in-bounds stick is legal
        let game = GameState::new(4, Player::X).unwrap();
        let lattice = game.lattice();
        let expected = lattice
            .vertices()
            .flat_map(|v| Direction::ALL.into_iter().map(move |d| (v, d)))
            .filter(|&(v, d)| {
                let mut cur = Some(v);
                for _ in 0..3 {
                    cur = cur.and_then(|c| lattice.step(c, d));
                }
                cur.is_some()
            })
            .count();
        let moves = legal_moves(&game);
        assert_eq!(moves.len(), expected);
        assert_eq!(moves[0], Move::new(Vertex::new(0, 0), Direction::Forward));
    }

    #[test]
    fn test_order_is_deterministic() {
        let mut game = GameState::new(5, Player::O).unwrap();
        game.apply_move(Move::new(Vertex::new(2, 1), Direction::DownLeft)).unwrap();
        assert_eq!(legal_moves(&game), legal_moves(&game.clone()));
    }

    #[test]
    fn test_fully_placed_move_excluded() {
        let mut game = GameState::new(4, Player::X).unwrap();
        let first = Move::new(Vertex::new(0, 0), Direction::Forward);
        let before = legal_moves(&game).len();
        game.apply_move(first).unwrap();
        let after = legal_moves(&game);
        assert!(!after.contains(&first));
        assert_eq!(after.len(), before - 1);
    }

    #[test]
    fn test_successors_match_moves() {
        let game = GameState::new(4, Player::X).unwrap();
        let states = successors(&game);
        assert_eq!(states.len(), legal_moves(&game).len());
        assert!(states.iter().all(|(_, s)| s.edges().len() == 3 && s.current_player() == Player::O));
    }
}
