//! Placed unit edges

use rustc_hash::FxHashSet;

use crate::lattice::Vertex;

/// Set of unit edges drawn on the board. Pairs are stored sorted so
/// membership is symmetric.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: FxHashSet<(Vertex, Vertex)>,
}

fn canonical(a: Vertex, b: Vertex) -> (Vertex, Vertex) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the edge; returns `true` if it was not already present
    pub fn add(&mut self, a: Vertex, b: Vertex) -> bool {
        self.edges.insert(canonical(a, b))
    }

    pub fn contains(&self, a: Vertex, b: Vertex) -> bool {
        self.edges.contains(&canonical(a, b))
    }

    pub(crate) fn remove(&mut self, a: Vertex, b: Vertex) -> bool {
        self.edges.remove(&canonical(a, b))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in unspecified order, each as a sorted pair
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.edges.iter().copied()
    }
}
