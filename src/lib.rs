pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod pipeline;
pub mod rank;
pub mod reporting;

pub use crate::graph::{GraphIndex, NodeId};
pub use crate::rank::{PageRankEngine, PageRankParams};
