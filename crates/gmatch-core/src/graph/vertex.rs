//! Vertex type: a labeled graph node with its incident edge lists.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge::EdgeId;

/// Vertex identifier: the vertex's creation index within its graph.
pub type VertexId = usize;

/// A vertex in a directed graph.
///
/// Tracks the edges leaving and entering it, in edge-creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Creation index within the owning graph.
    pub id: VertexId,
    /// Human-readable label (for matrix-derived graphs, the index as text).
    pub label: String,
    /// Edges with this vertex as origin.
    pub outgoing: Vec<EdgeId>,
    /// Edges with this vertex as target.
    pub incoming: Vec<EdgeId>,
}

impl Vertex {
    /// Create a vertex with no incident edges.
    pub fn new(id: VertexId, label: String) -> Self {
        Self {
            id,
            label,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Number of edges leaving this vertex.
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of edges entering this vertex.
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({}: {})", self.id, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_vertex_has_no_edges() {
        let v = Vertex::new(3, "3".to_string());
        assert_eq!(v.id, 3);
        assert_eq!(v.out_degree(), 0);
        assert_eq!(v.in_degree(), 0);
    }

    #[test]
    fn display_shows_id_and_label() {
        let v = Vertex::new(0, "start".to_string());
        assert_eq!(v.to_string(), "Vertex(0: start)");
    }
}
