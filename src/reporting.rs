//! Ranking files and run summaries.
//!
//! Ranking files hold one `key \t rank \t score` line per entry, best first,
//! with ranks counting up from 1. Floating-point scores are written with a
//! fixed number of decimals; integer counts ignore the precision.

use crate::error::{RankError, Result};
use crate::graph::{GraphStats, LoadStats};
use crate::pipeline::RunSummary;
use colored::Colorize;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes ranked entries to any writer.
///
/// # Errors
/// Returns error if the writer fails.
pub fn write_ranking<W, K, S>(
    out: &mut W,
    entries: &[(K, S)],
    precision: usize,
) -> std::io::Result<()>
where
    W: Write,
    K: Display,
    S: Display,
{
    for (i, (key, score)) in entries.iter().enumerate() {
        writeln!(out, "{key}\t{}\t{score:.precision$}", i + 1)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the ranking to it.
///
/// # Errors
/// Returns `RankError::Io` naming the path if creation or writing fails.
pub fn write_ranking_file<K, S>(path: &Path, entries: &[(K, S)], precision: usize) -> Result<()>
where
    K: Display,
    S: Display,
{
    let file = File::create(path).map_err(|e| RankError::io(e, path))?;
    let mut out = BufWriter::new(file);
    write_ranking(&mut out, entries, precision)
        .and_then(|()| out.flush())
        .map_err(|e| RankError::io(e, path))
}

/// Prints the human-readable run summary to stdout.
pub fn print_summary(summary: &RunSummary) {
    print_graph(&summary.input, &summary.load, &summary.graph);

    let outcome = if summary.converged {
        format!("converged after {} iterations", summary.iterations).green()
    } else {
        format!("stopped at iteration cap ({})", summary.iterations).yellow()
    };
    println!(
        "{} {} ({} delta {:.3e})",
        "PageRank:".bold(),
        outcome,
        summary.norm,
        summary.delta
    );

    println!(
        "  {} {} entries -> {}",
        "-->".blue(),
        summary.pagerank_entries,
        summary.pagerank_path.display()
    );
    println!(
        "  {} {} entries -> {}",
        "-->".blue(),
        summary.inlink_entries,
        summary.inlinks_path.display()
    );
    println!(
        "{}",
        format!("[OK] Done in {:.2}s", summary.elapsed_secs).green().bold()
    );
}

/// Prints graph statistics to stdout.
pub fn print_graph(input: &Path, load: &LoadStats, graph: &GraphStats) {
    println!("{} {}", "Input:".bold(), input.display());
    println!(
        "  {} lines read, {} edges, {} skipped",
        load.lines, load.edges, load.skipped
    );
    println!(
        "  {} nodes, {} dangling, {} distinct targets, {} self-loops",
        graph.nodes, graph.dangling, graph.distinct_targets, graph.self_loops
    );
    if load.skipped > 0 {
        println!(
            "  {}",
            format!("{} malformed lines ignored", load.skipped).dimmed()
        );
    }
}

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
