//! `gmatch validate` — check that a graph-pair file parses.

use std::path::Path;

use anyhow::{Context, Result};
use gmatch_matrix::parse_graph_pair_from_file;

/// Parse the file and report both graphs, or fail with the parse diagnostic.
pub fn run(file: &Path) -> Result<()> {
    let (query, target) = parse_graph_pair_from_file(file)
        .with_context(|| format!("parsing {}", file.display()))?;

    println!("{}: ok", file.display());
    println!(
        "  query:  {} vertices, {} edges",
        query.vertex_count(),
        query.edge_count()
    );
    println!(
        "  target: {} vertices, {} edges",
        target.vertex_count(),
        target.edge_count()
    );

    Ok(())
}
