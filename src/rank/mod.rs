// src/rank/mod.rs
//! Scoring and selection over a loaded link graph.

pub mod norm;
pub mod pagerank;
pub mod topk;

pub use norm::ConvergenceNorm;
pub use pagerank::{compute, Outcome, PageRankEngine, PageRankParams, PageRankResult};
pub use topk::{top_k, Score, TopK};
