// src/graph/mod.rs
pub mod index;
pub mod loader;

pub use index::{GraphIndex, GraphStats, NodeId};
pub use loader::{load_path, load_reader, LoadStats};
