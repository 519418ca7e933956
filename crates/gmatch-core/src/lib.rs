//! Core directed-graph data model for the gmatch toolkit.
//!
//! A graph owns its vertices and edges; vertices are addressed by their
//! creation index (0..N-1) and each vertex tracks its incident outgoing and
//! incoming edges. Matching engines and format readers build on this model.

pub mod graph;

pub use graph::edge::{Edge, EdgeId};
pub use graph::vertex::{Vertex, VertexId};
pub use graph::{Graph, GraphError};
