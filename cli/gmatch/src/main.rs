//! gmatch CLI — command-line front end for adjacency-matrix graph-pair files.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gmatch", version, about = "Adjacency-matrix graph-pair tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a graph-pair file parses
    Validate {
        /// Input pair file
        file: PathBuf,
    },
    /// Show statistics for both graphs in a pair file
    Inspect {
        /// Input pair file
        file: PathBuf,
        /// Output format (json)
        #[arg(long)]
        export: Option<String>,
    },
    /// Re-emit a pair file in canonical form
    Normalize {
        /// Input pair file
        file: PathBuf,
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Inspect { file, export } => commands::inspect::run(&file, export.as_deref()),
        Commands::Normalize { file, output } => {
            commands::normalize::run(&file, output.as_deref())
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_pair(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn validate_accepts_a_well_formed_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pair(dir.path(), "pair.txt", "2\n0 1\n0 0\n1\n0\n");
        commands::validate::run(&path).unwrap();
    }

    #[test]
    fn validate_rejects_a_malformed_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pair(dir.path(), "bad.txt", "2\n1 0\n0\n");
        let err = commands::validate::run(&path).unwrap_err();
        // The parse diagnostic must survive the CLI context chain.
        assert!(format!("{err:#}").contains("row 2"));
    }

    #[test]
    fn validate_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(commands::validate::run(&dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn inspect_text_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pair(dir.path(), "pair.txt", "2\n0 1\n1 0\n1\n1\n");
        commands::inspect::run(&path, None).unwrap();
        commands::inspect::run(&path, Some("json")).unwrap();
    }

    #[test]
    fn inspect_rejects_unknown_export_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pair(dir.path(), "pair.txt", "1\n0\n1\n0\n");
        assert!(commands::inspect::run(&path, Some("xml")).is_err());
    }

    #[test]
    fn normalize_writes_canonical_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pair(
            dir.path(),
            "messy.txt",
            "2\n 0   1\n1  0 \n1\n0\ntrailing metadata\n\n",
        );
        let out = dir.path().join("clean.txt");
        commands::normalize::run(&path, Some(&out)).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text, "2\n0 1\n1 0\n1\n0\n");
    }

    #[test]
    fn normalize_to_stdout_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pair(dir.path(), "pair.txt", "1\n0\n1\n0\n");
        commands::normalize::run(&path, None).unwrap();
    }
}
