use crate::rank::ConvergenceNorm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_lambda")]
    pub lambda: f64,
    #[serde(default = "default_tau")]
    pub tau: f64,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub norm: ConvergenceNorm,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            lambda: default_lambda(),
            tau: default_tau(),
            top_k: default_top_k(),
            max_iterations: default_max_iterations(),
            norm: ConvergenceNorm::default(),
            parallel: false,
        }
    }
}

const fn default_lambda() -> f64 { 0.15 }
const fn default_tau() -> f64 { 0.0001 }
const fn default_top_k() -> usize { 75 }
const fn default_max_iterations() -> usize { 1000 }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_pagerank_path")]
    pub pagerank_path: PathBuf,
    #[serde(default = "default_inlinks_path")]
    pub inlinks_path: PathBuf,
    /// Decimal places for `PageRank` scores.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pagerank_path: default_pagerank_path(),
            inlinks_path: default_inlinks_path(),
            precision: default_precision(),
        }
    }
}

fn default_pagerank_path() -> PathBuf { PathBuf::from("pagerank.txt") }
fn default_inlinks_path() -> PathBuf { PathBuf::from("inlinks.txt") }
const fn default_precision() -> usize { 6 }

/// Contents of `linkrank.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            rank: RankConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_input() -> PathBuf { PathBuf::from("data/links.srt.gz") }
