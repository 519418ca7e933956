//! Edge type: an ordered pair of vertices.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vertex::VertexId;

/// Edge identifier: the edge's creation index within its graph.
pub type EdgeId = usize;

/// A directed edge from `origin` to `target`.
///
/// Carries no weight or label beyond existence; the gmatch encoding is a
/// plain 0/1 adjacency relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Creation index within the owning graph.
    pub id: EdgeId,
    /// Vertex this edge leaves.
    pub origin: VertexId,
    /// Vertex this edge enters.
    pub target: VertexId,
}

impl Edge {
    /// Create a new edge between two vertices.
    pub fn new(id: EdgeId, origin: VertexId, target: VertexId) -> Self {
        Self { id, origin, target }
    }

    /// Whether this edge is a self-loop.
    pub fn is_loop(&self) -> bool {
        self.origin == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.origin, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_detection() {
        assert!(Edge::new(0, 2, 2).is_loop());
        assert!(!Edge::new(1, 0, 2).is_loop());
    }

    #[test]
    fn display_shows_endpoints() {
        assert_eq!(Edge::new(0, 1, 4).to_string(), "Edge(1 -> 4)");
    }
}
