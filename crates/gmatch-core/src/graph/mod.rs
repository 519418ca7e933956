//! The directed graph container.
//!
//! Vertices and edges are stored in creation order and addressed by dense
//! indices. For a graph decoded from an N×N adjacency matrix, vertex `i` is
//! the matrix's row/column `i`, and an edge (i, j) exists iff cell (i, j)
//! was 1.

pub mod edge;
pub mod vertex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::edge::{Edge, EdgeId};
use self::vertex::{Vertex, VertexId};

/// Errors that can occur during graph construction.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),

    #[error("dangling edge: origin {origin} or target {target} not in graph")]
    DanglingEdge { origin: VertexId, target: VertexId },
}

/// An owned directed graph.
///
/// Construction is append-only: vertices and edges keep the index they were
/// created with. `add_edge` registers the edge on both endpoints, so the
/// per-vertex `outgoing`/`incoming` lists always agree with the edge set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    /// Graph identifier (e.g. "graph_0" for the first block of a pair file).
    id: String,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create an empty graph sized for `vertex_count` vertices.
    pub fn with_capacity(id: impl Into<String>, vertex_count: usize) -> Self {
        Self {
            id: id.into(),
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::new(),
        }
    }

    /// The graph's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    // === Construction ===

    /// Add a vertex; its id is its creation index.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(id, label.into()));
        id
    }

    /// Add a directed edge and register it on both endpoints.
    pub fn add_edge(&mut self, origin: VertexId, target: VertexId) -> Result<EdgeId, GraphError> {
        if origin >= self.vertices.len() || target >= self.vertices.len() {
            return Err(GraphError::DanglingEdge { origin, target });
        }
        let id = self.edges.len();
        self.edges.push(Edge::new(id, origin, target));
        self.vertices[origin].outgoing.push(id);
        self.vertices[target].incoming.push(id);
        Ok(id)
    }

    // === Lookup ===

    /// Get a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over all vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Iterate over all edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    // === Adjacency queries ===

    /// Whether a directed edge (origin, target) exists.
    pub fn has_edge(&self, origin: VertexId, target: VertexId) -> bool {
        self.vertices.get(origin).is_some_and(|v| {
            v.outgoing
                .iter()
                .any(|&eid| self.edges[eid].target == target)
        })
    }

    /// Out-degree of a vertex, or an error if it does not exist.
    pub fn out_degree(&self, id: VertexId) -> Result<usize, GraphError> {
        self.vertices
            .get(id)
            .map(Vertex::out_degree)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// In-degree of a vertex, or an error if it does not exist.
    pub fn in_degree(&self, id: VertexId) -> Result<usize, GraphError> {
        self.vertices
            .get(id)
            .map(Vertex::in_degree)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Vertices reachable from `id` along one outgoing edge.
    pub fn successors(&self, id: VertexId) -> Vec<VertexId> {
        match self.vertices.get(id) {
            Some(v) => v.outgoing.iter().map(|&eid| self.edges[eid].target).collect(),
            None => Vec::new(),
        }
    }

    /// Vertices with an edge into `id`.
    pub fn predecessors(&self, id: VertexId) -> Vec<VertexId> {
        match self.vertices.get(id) {
            Some(v) => v.incoming.iter().map(|&eid| self.edges[eid].origin).collect(),
            None => Vec::new(),
        }
    }

    /// Edges leaving `id`, in creation order.
    pub fn outgoing_edges(&self, id: VertexId) -> Vec<&Edge> {
        match self.vertices.get(id) {
            Some(v) => v.outgoing.iter().map(|&eid| &self.edges[eid]).collect(),
            None => Vec::new(),
        }
    }

    /// Edges entering `id`, in creation order.
    pub fn incoming_edges(&self, id: VertexId) -> Vec<&Edge> {
        match self.vertices.get(id) {
            Some(v) => v.incoming.iter().map(|&eid| &self.edges[eid]).collect(),
            None => Vec::new(),
        }
    }

    /// Reconstruct the 0/1 adjacency matrix.
    ///
    /// Cell (i, j) is 1 iff at least one edge (i, j) exists.
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let n = self.vertices.len();
        let mut matrix = vec![vec![0u8; n]; n];
        for edge in &self.edges {
            matrix[edge.origin][edge.target] = 1;
        }
        matrix
    }
}
