//! `gmatch inspect` — per-graph statistics for a pair file.

use std::path::Path;

use anyhow::{Context, Result};
use gmatch_core::Graph;
use gmatch_matrix::parse_graph_pair_from_file;

/// Print statistics for both graphs, or dump them as JSON with
/// `--export json`.
pub fn run(file: &Path, export: Option<&str>) -> Result<()> {
    let (query, target) = parse_graph_pair_from_file(file)
        .with_context(|| format!("parsing {}", file.display()))?;

    match export {
        Some("json") => {
            let doc = serde_json::json!({ "query": query, "target": target });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Some(other) => anyhow::bail!("unknown export format '{other}' (expected: json)"),
        None => {
            print_stats("query", &query);
            println!();
            print_stats("target", &target);
        }
    }

    Ok(())
}

fn print_stats(role: &str, graph: &Graph) {
    let n = graph.vertex_count();
    // Directed density over all n^2 cells, self-loops included.
    let density = graph.edge_count() as f64 / (n * n) as f64;
    let max_out = graph.vertices().map(|v| v.out_degree()).max().unwrap_or(0);
    let max_in = graph.vertices().map(|v| v.in_degree()).max().unwrap_or(0);
    let loops = graph.edges().filter(|e| e.is_loop()).count();

    println!("--- {role} ({}) ---", graph.id());
    println!("  Vertices:       {n}");
    println!("  Edges:          {}", graph.edge_count());
    println!("  Density:        {density:.3}");
    println!("  Max out-degree: {max_out}");
    println!("  Max in-degree:  {max_in}");
    println!("  Self-loops:     {loops}");
}
