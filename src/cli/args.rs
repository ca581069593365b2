use crate::rank::ConvergenceNorm;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank and inlink rankings for web link graphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute PageRank and write both top-K rankings
    Rank(RankArgs),
    /// Load the edge list and print graph statistics
    Stats {
        /// Edge list (`source<TAB>target` per line, gzip or plain)
        input: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config {
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RankArgs {
    /// Edge list (`source<TAB>target` per line, gzip or plain)
    pub input: Option<PathBuf>,
    /// Random-jump probability
    #[arg(long)]
    pub lambda: Option<f64>,
    /// Convergence threshold
    #[arg(long)]
    pub tau: Option<f64>,
    /// Entries per ranking
    #[arg(long, short = 'k')]
    pub top_k: Option<usize>,
    /// Hard iteration cap
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Convergence norm: l1 or l2
    #[arg(long)]
    pub norm: Option<ConvergenceNorm>,
    /// Distribute link mass across threads
    #[arg(long)]
    pub parallel: bool,
    #[arg(long, value_name = "FILE")]
    pub pagerank_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub inlinks_out: Option<PathBuf>,
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}
