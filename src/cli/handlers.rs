// src/cli/handlers.rs
use crate::cli::args::RankArgs;
use crate::config::Config;
use crate::exit::LinkRankExit;
use crate::graph::{self, GraphStats, LoadStats};
use crate::pipeline;
use crate::reporting;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Layers command-line flags over file configuration.
pub fn apply_overrides(config: &mut Config, args: &RankArgs) {
    if let Some(input) = &args.input {
        config.input.clone_from(input);
    }
    if let Some(lambda) = args.lambda {
        config.rank.lambda = lambda;
    }
    if let Some(tau) = args.tau {
        config.rank.tau = tau;
    }
    if let Some(k) = args.top_k {
        config.rank.top_k = k;
    }
    if let Some(max) = args.max_iterations {
        config.rank.max_iterations = max;
    }
    if let Some(norm) = args.norm {
        config.rank.norm = norm;
    }
    if args.parallel {
        config.rank.parallel = true;
    }
    if let Some(path) = &args.pagerank_out {
        config.output.pagerank_path.clone_from(path);
    }
    if let Some(path) = &args.inlinks_out {
        config.output.inlinks_path.clone_from(path);
    }
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if configuration, loading or writing fails.
pub fn handle_rank(args: &RankArgs) -> Result<LinkRankExit> {
    let mut config = Config::load(args.config.as_deref())?;
    apply_overrides(&mut config, args);

    let summary = pipeline::run(&config)
        .with_context(|| format!("Ranking {} failed", config.input.display()))?;

    if args.json {
        reporting::print_json(&summary)?;
    } else {
        reporting::print_summary(&summary);
    }
    Ok(LinkRankExit::Success)
}

#[derive(Serialize)]
struct StatsReport {
    input: PathBuf,
    load: LoadStats,
    graph: GraphStats,
}

/// Handles the stats command.
///
/// # Errors
/// Returns error if the input cannot be read.
pub fn handle_stats(
    input: Option<PathBuf>,
    config: Option<&Path>,
    json: bool,
) -> Result<LinkRankExit> {
    let input = match input {
        Some(path) => path,
        None => Config::load(config)?.input,
    };

    let (graph, load) = graph::load_path(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    let report = StatsReport {
        input,
        load,
        graph: graph.stats(),
    };

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_graph(&report.input, &report.load, &report.graph);
    }
    Ok(LinkRankExit::Success)
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the configuration file is unreadable or invalid.
pub fn handle_config(config: Option<&Path>) -> Result<LinkRankExit> {
    let config = Config::load(config)?;
    config.validate()?;
    print!("{}", config.to_toml_string()?);
    Ok(LinkRankExit::Success)
}
