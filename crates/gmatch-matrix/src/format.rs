//! Graph-pair format implementation.
//!
//! The reader tokenizes the input into trimmed lines, drops blank lines at
//! the very end of the stream, and then extracts two graph blocks (a vertex
//! count line followed by that many matrix rows) through an explicit line
//! cursor: the second block starts exactly where the first ends. Every
//! failure is fatal and carries the 1-indexed block, row, and column needed
//! to locate it in the input.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use gmatch_core::{Graph, GraphError};

/// Errors that can occur while parsing a graph-pair file.
///
/// Block, row, and column fields are 1-indexed, matching the user-facing
/// messages.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input must contain at least two lines (vertex count and matrix data)")]
    MalformedInput,

    #[error("unexpected end of input while parsing graph {block}")]
    UnexpectedEndOfInput { block: usize },

    #[error("invalid vertex count '{token}' for graph {block}")]
    InvalidVertexCount { block: usize, token: String },

    #[error(
        "not enough lines for the adjacency matrix of graph {block}: \
         expected {expected} rows, found {available}"
    )]
    InsufficientMatrixRows {
        block: usize,
        expected: usize,
        available: usize,
    },

    #[error("adjacency matrix row {row} of graph {block} has {actual} values, expected {expected}")]
    RowLengthMismatch {
        block: usize,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid adjacency matrix value '{token}' at position ({row},{column}) in graph {block}")]
    InvalidMatrixValue {
        block: usize,
        row: usize,
        column: usize,
        token: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("graph construction error: {0}")]
    Graph(#[from] GraphError),
}

/// Capability contract the parser needs from a graph implementation.
///
/// The parser only ever creates a graph, appends vertices in index order,
/// and adds directed edges between existing indices, so it can be tested
/// against a stub sink without the concrete graph model.
pub trait GraphSink: Sized {
    /// Create an empty graph with the given identifier.
    fn with_id(id: String) -> Self;

    /// Append a vertex; the parser adds vertices in index order 0..N-1.
    fn add_vertex(&mut self, label: String);

    /// Add a directed edge between two previously added vertices.
    fn add_edge(&mut self, origin: usize, target: usize) -> Result<(), GraphError>;
}

impl GraphSink for Graph {
    fn with_id(id: String) -> Self {
        Graph::new(id)
    }

    fn add_vertex(&mut self, label: String) {
        Graph::add_vertex(self, label);
    }

    fn add_edge(&mut self, origin: usize, target: usize) -> Result<(), GraphError> {
        Graph::add_edge(self, origin, target).map(|_| ())
    }
}

/// Parse a graph pair from text.
///
/// Returns the two graphs in file order: (query, target). Any lines after
/// the second block are ignored; competition files sometimes carry
/// ground-truth metadata there.
pub fn parse_graph_pair(text: &str) -> Result<(Graph, Graph), ParseError> {
    parse_graph_pair_as::<Graph>(text)
}

/// Parse a graph pair into any [`GraphSink`] implementation.
pub fn parse_graph_pair_as<S: GraphSink>(text: &str) -> Result<(S, S), ParseError> {
    let mut lines: Vec<&str> = text.split('\n').map(str::trim).collect();

    // Blank lines are tolerated only at the very end of the stream; interior
    // blanks stay in place and fail downstream with a precise diagnostic.
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.len() < 2 {
        return Err(ParseError::MalformedInput);
    }

    let (query, cursor) = parse_block(&lines, 0, 0)?;
    let (target, _) = parse_block(&lines, cursor, 1)?;

    Ok((query, target))
}

/// Parse a graph pair from a file. Thin wrapper: loads the text and
/// delegates to [`parse_graph_pair`].
pub fn parse_graph_pair_from_file(path: impl AsRef<Path>) -> Result<(Graph, Graph), ParseError> {
    let text = fs::read_to_string(path)?;
    parse_graph_pair(&text)
}

/// Parse one graph block starting at `start`, returning the graph and the
/// line index immediately after its last matrix row.
///
/// `index` is the 0-based block index; it names the graph (`graph_<index>`)
/// and is reported 1-based in diagnostics.
fn parse_block<S: GraphSink>(
    lines: &[&str],
    start: usize,
    index: usize,
) -> Result<(S, usize), ParseError> {
    let block = index + 1;

    let count_line = lines
        .get(start)
        .ok_or(ParseError::UnexpectedEndOfInput { block })?;

    let vertex_count = match count_line.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(ParseError::InvalidVertexCount {
                block,
                token: (*count_line).to_string(),
            })
        }
    };

    let matrix_start = start + 1;
    let available = lines.len() - matrix_start;
    if available < vertex_count {
        return Err(ParseError::InsufficientMatrixRows {
            block,
            expected: vertex_count,
            available,
        });
    }

    let mut graph = S::with_id(format!("graph_{index}"));
    for i in 0..vertex_count {
        graph.add_vertex(i.to_string());
    }

    for i in 0..vertex_count {
        // Runs of spaces collapse to a single delimiter; other whitespace is
        // not a delimiter and ends up inside a token.
        let tokens: Vec<&str> = lines[matrix_start + i]
            .split(' ')
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.len() != vertex_count {
            return Err(ParseError::RowLengthMismatch {
                block,
                row: i + 1,
                expected: vertex_count,
                actual: tokens.len(),
            });
        }

        for (j, token) in tokens.iter().enumerate() {
            match token.parse::<i64>() {
                Ok(0) => {}
                Ok(1) => graph.add_edge(i, j)?,
                // Non-integers and integers outside {0,1} alike: the format
                // has no weighted or multigraph semantics.
                _ => {
                    return Err(ParseError::InvalidMatrixValue {
                        block,
                        row: i + 1,
                        column: j + 1,
                        token: (*token).to_string(),
                    })
                }
            }
        }
    }

    Ok((graph, matrix_start + vertex_count))
}

/// Serialize a graph pair back to the text format.
///
/// Emits each block as its vertex count followed by the 0/1 matrix rows with
/// single-space separators; re-parsing the result yields the same vertex and
/// edge sets.
pub fn write_graph_pair(query: &Graph, target: &Graph) -> String {
    let mut out = String::new();
    write_block(&mut out, query);
    write_block(&mut out, target);
    out
}

fn write_block(out: &mut String, graph: &Graph) {
    out.push_str(&graph.vertex_count().to_string());
    out.push('\n');
    for row in graph.adjacency_matrix() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
}
