//! `gmatch normalize` — re-emit a pair file in canonical form.
//!
//! Canonical form uses single-space separators, one trailing newline per
//! row, and drops any trailing data after the second block.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gmatch_matrix::{parse_graph_pair_from_file, write_graph_pair};

/// Parse the file and write its canonical form to `output` or stdout.
pub fn run(file: &Path, output: Option<&Path>) -> Result<()> {
    let (query, target) = parse_graph_pair_from_file(file)
        .with_context(|| format!("parsing {}", file.display()))?;

    let text = write_graph_pair(&query, &target);
    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?
        }
        None => print!("{text}"),
    }

    Ok(())
}
