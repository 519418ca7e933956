//! Adjacency-matrix graph-pair text format.
//!
//! Reads and writes the line-oriented competition format that encodes two
//! directed graphs back-to-back as 0/1 adjacency matrices.
//!
//! ## File Layout
//!
//! ```text
//! <N1>                       vertex count of the query graph
//! <row 0: N1 0/1 values>     adjacency matrix, space-separated
//! ...
//! <row N1-1>
//! <N2>                       vertex count of the target graph
//! <row 0: N2 0/1 values>
//! ...
//! <row N2-1>
//! [optional trailing data, ignored]
//! ```

mod format;

pub use format::{
    parse_graph_pair, parse_graph_pair_as, parse_graph_pair_from_file, write_graph_pair,
    GraphSink, ParseError,
};
