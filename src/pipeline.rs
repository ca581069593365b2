// src/pipeline.rs
//! Load, rank, select, write.

use crate::config::Config;
use crate::error::Result;
use crate::graph::{self, GraphIndex, GraphStats, LoadStats};
use crate::rank::{top_k, ConvergenceNorm, Outcome, PageRankEngine, PageRankParams, PageRankResult};
use crate::reporting;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Both top-K selections, borrowing URLs from the graph.
#[derive(Debug, Clone)]
pub struct Rankings<'a> {
    pub pagerank: Vec<(&'a str, f64)>,
    pub inlinks: Vec<(&'a str, u64)>,
}

/// What a finished run reports.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub load: LoadStats,
    pub graph: GraphStats,
    pub iterations: usize,
    pub delta: f64,
    pub norm: ConvergenceNorm,
    pub outcome: Outcome,
    pub converged: bool,
    pub pagerank_path: PathBuf,
    pub pagerank_entries: usize,
    pub inlinks_path: PathBuf,
    pub inlink_entries: usize,
    pub elapsed_secs: f64,
}

/// Runs `PageRank` over `graph` and selects the top `k` by score and by
/// inlink count.
#[must_use]
pub fn rank_graph<'a>(
    graph: &'a GraphIndex,
    params: PageRankParams,
    k: usize,
) -> (PageRankResult, Rankings<'a>) {
    let result = PageRankEngine::new(params).run(graph.adjacency());
    let pagerank = top_k(graph.label(&result.scores), k);
    let inlinks = top_k(graph.inlink_counts(), k);
    (result, Rankings { pagerank, inlinks })
}

/// Executes a full batch run as described by `config`.
///
/// # Errors
/// Returns error on invalid parameters, unreadable input or failed writes.
/// Failing to converge is not an error.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;
    let started = Instant::now();

    let (graph, load) = graph::load_path(&config.input)?;
    let (result, rankings) = rank_graph(&graph, config.params(), config.rank.top_k);

    let out = &config.output;
    reporting::write_ranking_file(&out.pagerank_path, &rankings.pagerank, out.precision)?;
    reporting::write_ranking_file(&out.inlinks_path, &rankings.inlinks, out.precision)?;
    info!(
        pagerank = %out.pagerank_path.display(),
        inlinks = %out.inlinks_path.display(),
        "rankings written"
    );

    Ok(RunSummary {
        input: config.input.clone(),
        load,
        graph: graph.stats(),
        iterations: result.iterations,
        delta: result.delta,
        norm: config.rank.norm,
        outcome: result.outcome,
        converged: result.converged(),
        pagerank_path: out.pagerank_path.clone(),
        pagerank_entries: rankings.pagerank.len(),
        inlinks_path: out.inlinks_path.clone(),
        inlink_entries: rankings.inlinks.len(),
        elapsed_secs: started.elapsed().as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_graph_orders_both_lists() {
        let mut g = GraphIndex::new();
        for (s, t) in [("a", "hub"), ("b", "hub"), ("c", "hub"), ("hub", "a"), ("a", "b")] {
            g.add_edge(s, t);
        }
        let (result, rankings) = rank_graph(&g, PageRankParams::default(), 2);
        assert!(result.converged());
        assert_eq!(rankings.pagerank.len(), 2);
        assert_eq!(rankings.pagerank[0].0, "hub");
        assert_eq!(rankings.inlinks[0], ("hub", 3));
        assert_eq!(rankings.inlinks.len(), 2);
    }

    #[test]
    fn test_k_zero_selects_nothing() {
        let mut g = GraphIndex::new();
        g.add_edge("a", "b");
        let (_, rankings) = rank_graph(&g, PageRankParams::default(), 0);
        assert!(rankings.pagerank.is_empty());
        assert!(rankings.inlinks.is_empty());
    }
}
