//! Triangle ownership and capture detection

use rustc_hash::FxHashMap;

use crate::edges::EdgeSet;
use crate::game::Player;
use crate::lattice::{Lattice, TriangleKey};

/// Owner of every captured unit triangle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangleLedger {
    owners: FxHashMap<TriangleKey, Player>,
    /// Captured counts indexed by `Player as usize`
    counts: [u32; 2],
}

impl TriangleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self, key: &TriangleKey) -> Option<Player> {
        self.owners.get(key).copied()
    }

    pub fn captured(&self, player: Player) -> u32 {
        self.counts[player as usize]
    }

    /// Total captured triangles
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TriangleKey, Player)> + '_ {
        self.owners.iter().map(|(&key, &owner)| (key, owner))
    }

    /// Claim every complete, unowned triangle for `player`.
    ///
    /// Rescans the whole board in row-major order, up triangle before down
    /// triangle at each peg. Returns the newly claimed keys in that order.
    pub fn capture_scan(&mut self, lattice: &Lattice, edges: &EdgeSet, player: Player) -> Vec<TriangleKey> {
        let mut claimed = Vec::new();

        for v in lattice.vertices() {
            for corners in lattice.unit_triangles(v) {
                if !corners.iter().all(|&c| lattice.is_valid(c)) {
                    continue;
                }
                let key = TriangleKey::new(corners[0], corners[1], corners[2]);
                if self.owners.contains_key(&key) {
                    continue;
                }
                if key.edges().iter().all(|&(a, b)| edges.contains(a, b)) {
                    tracing::trace!(?key, ?player, "triangle captured");
                    self.owners.insert(key, player);
                    self.counts[player as usize] += 1;
                    claimed.push(key);
                }
            }
        }

        claimed
    }

    /// Drop a claim made during search; only the search's undo calls this
    pub(crate) fn release(&mut self, key: &TriangleKey) {
        if let Some(owner) = self.owners.remove(key) {
            self.counts[owner as usize] -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Vertex;

    fn draw(edges: &mut EdgeSet, corners: [Vertex; 3]) {
        edges.add(corners[0], corners[1]);
        edges.add(corners[1], corners[2]);
        edges.add(corners[0], corners[2]);
    }

    #[test]
    fn test_incomplete_triangle_not_captured() {
        let lattice = Lattice::new(4).unwrap();
        let mut edges = EdgeSet::new();
        edges.add(Vertex::new(0, 0), Vertex::new(0, 1));
        edges.add(Vertex::new(0, 0), Vertex::new(1, 1));
        let mut ledger = TriangleLedger::new();
        assert!(ledger.capture_scan(&lattice, &edges, Player::X).is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_capture_is_permanent() {
        let lattice = Lattice::new(4).unwrap();
        let mut edges = EdgeSet::new();
        let corners = [Vertex::new(0, 0), Vertex::new(0, 1), Vertex::new(1, 1)];
        draw(&mut edges, corners);

        let mut ledger = TriangleLedger::new();
        let claimed = ledger.capture_scan(&lattice, &edges, Player::O);
        let key = TriangleKey::new(corners[0], corners[1], corners[2]);
        assert_eq!(claimed, vec![key]);
        assert_eq!(ledger.owner(&key), Some(Player::O));

        // Re-observing an owned triangle changes nothing
        assert!(ledger.capture_scan(&lattice, &edges, Player::X).is_empty());
        assert_eq!(ledger.owner(&key), Some(Player::O));
        assert_eq!(ledger.captured(Player::O), 1);
        assert_eq!(ledger.captured(Player::X), 0);
    }

    #[test]
    fn test_scan_order_is_row_major_up_before_down() {
        let lattice = Lattice::new(4).unwrap();
        let mut edges = EdgeSet::new();
        // Up and down triangles at (1,1) plus the up triangle at (0,0)
        let up_11 = [Vertex::new(1, 1), Vertex::new(2, 1), Vertex::new(2, 2)];
        let down_11 = [Vertex::new(1, 1), Vertex::new(1, 2), Vertex::new(2, 2)];
        let up_00 = [Vertex::new(0, 0), Vertex::new(1, 0), Vertex::new(1, 1)];
        draw(&mut edges, down_11);
        draw(&mut edges, up_11);
        draw(&mut edges, up_00);

        let key = |c: [Vertex; 3]| TriangleKey::new(c[0], c[1], c[2]);
        let expected = vec![key(up_00), key(up_11), key(down_11)];

        for _ in 0..3 {
            let mut ledger = TriangleLedger::new();
            assert_eq!(ledger.capture_scan(&lattice, &edges, Player::X), expected);
        }
    }

    #[test]
    fn test_lower_half_triangles() {
        let lattice = Lattice::new(4).unwrap();
        let mut edges = EdgeSet::new();
        // Up triangle anchored on the equator uses the shifted column
        let up = [Vertex::new(3, 1), Vertex::new(4, 0), Vertex::new(4, 1)];
        draw(&mut edges, up);
        let mut ledger = TriangleLedger::new();
        let claimed = ledger.capture_scan(&lattice, &edges, Player::X);
        assert_eq!(claimed, vec![TriangleKey::new(up[0], up[1], up[2])]);
    }

    #[test]
    fn test_release_restores_counts() {
        let lattice = Lattice::new(4).unwrap();
        let mut edges = EdgeSet::new();
        draw(&mut edges, [Vertex::new(0, 0), Vertex::new(0, 1), Vertex::new(1, 1)]);
        let mut ledger = TriangleLedger::new();
        let claimed = ledger.capture_scan(&lattice, &edges, Player::X);
        ledger.release(&claimed[0]);
        assert_eq!(ledger, TriangleLedger::new());
    }
}
