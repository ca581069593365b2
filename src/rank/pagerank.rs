// src/rank/pagerank.rs
//! `PageRank` by power iteration with random jumps and dangling-mass
//! redistribution.

use super::norm::ConvergenceNorm;
use crate::error::{RankError, Result};
use crate::graph::NodeId;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Tuning knobs for one `PageRank` run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankParams {
    /// Probability of a random jump (teleportation).
    pub lambda: f64,
    /// Convergence threshold on the distance between successive estimates.
    pub tau: f64,
    /// Hard iteration cap; never exceeded.
    pub max_iterations: usize,
    pub norm: ConvergenceNorm,
    /// Distribute out-link mass on the rayon pool.
    pub parallel: bool,
}

impl Default for PageRankParams {
    fn default() -> Self {
        Self {
            lambda: 0.15,
            tau: 0.0001,
            max_iterations: 1000,
            norm: ConvergenceNorm::L2,
            parallel: false,
        }
    }
}

impl PageRankParams {
    #[must_use]
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    #[must_use]
    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_norm(mut self, norm: ConvergenceNorm) -> Self {
        self.norm = norm;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects parameters the iteration cannot honor.
    ///
    /// # Errors
    /// Returns `RankError::InvalidParameter` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.lambda) {
            return Err(invalid("lambda", format!("{} is outside [0, 1]", self.lambda)));
        }
        if !self.tau.is_finite() || self.tau <= 0.0 {
            return Err(invalid("tau", format!("{} must be a positive number", self.tau)));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations", "must be at least 1".into()));
        }
        Ok(())
    }
}

fn invalid(name: &'static str, reason: String) -> RankError {
    RankError::InvalidParameter { name, reason }
}

/// How the iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The distance fell to `tau` or below.
    Converged,
    /// The iteration cap was reached first.
    Exhausted,
}

/// Final scores plus diagnostics.
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores indexed by node id.
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// Distance measured on the last iteration.
    pub delta: f64,
    pub outcome: Outcome,
}

impl PageRankResult {
    #[must_use]
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

enum IterationState {
    Iterating { completed: usize, delta: f64 },
    Converged { iterations: usize, delta: f64 },
    Exhausted { iterations: usize, delta: f64 },
}

/// Power-iteration engine over an adjacency table.
#[derive(Debug, Clone, Default)]
pub struct PageRankEngine {
    params: PageRankParams,
}

impl PageRankEngine {
    #[must_use]
    pub fn new(params: PageRankParams) -> Self {
        Self { params }
    }

    /// Runs on a full adjacency table (one entry per node).
    #[must_use]
    pub fn run(&self, adjacency: &[Vec<NodeId>]) -> PageRankResult {
        self.run_nodes(adjacency.len(), adjacency)
    }

    /// Runs over `node_count` nodes. Nodes without an adjacency entry are
    /// treated as dangling.
    ///
    /// Always returns a usable score vector; hitting the cap is reported
    /// through `outcome`, not as an error.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn run_nodes(&self, node_count: usize, adjacency: &[Vec<NodeId>]) -> PageRankResult {
        if node_count == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                outcome: Outcome::Converged,
            };
        }

        let n = node_count as f64;
        // The latest estimate always lives in `current`.
        let mut current = vec![1.0 / n; node_count];
        let mut next = vec![0.0; node_count];
        let mut state = IterationState::Iterating {
            completed: 0,
            delta: f64::INFINITY,
        };

        let (iterations, delta, outcome) = loop {
            state = match state {
                IterationState::Iterating { completed, delta }
                    if completed >= self.params.max_iterations =>
                {
                    IterationState::Exhausted {
                        iterations: completed,
                        delta,
                    }
                }
                IterationState::Iterating { completed, .. } => {
                    self.step(&current, &mut next, adjacency);
                    let delta = self.params.norm.distance(&current, &next);
                    std::mem::swap(&mut current, &mut next);

                    let completed = completed + 1;
                    debug!(iteration = completed, delta, "pagerank iteration");

                    if delta <= self.params.tau {
                        IterationState::Converged {
                            iterations: completed,
                            delta,
                        }
                    } else {
                        IterationState::Iterating { completed, delta }
                    }
                }
                IterationState::Converged { iterations, delta } => {
                    info!(iterations, delta, "pagerank converged");
                    break (iterations, delta, Outcome::Converged);
                }
                IterationState::Exhausted { iterations, delta } => {
                    let tau = self.params.tau;
                    info!(iterations, delta, tau, "pagerank hit iteration cap");
                    break (iterations, delta, Outcome::Exhausted);
                }
            };
        };

        PageRankResult {
            scores: current,
            iterations,
            delta,
            outcome,
        }
    }

    /// Computes one estimate `next` from `current`.
    #[allow(clippy::cast_precision_loss)]
    fn step(&self, current: &[f64], next: &mut [f64], adjacency: &[Vec<NodeId>]) {
        let n = current.len() as f64;
        let teleport = self.params.lambda / n;
        let follow = 1.0 - self.params.lambda;

        if self.params.parallel {
            let (spread, dangling) = distribute_parallel(current, adjacency, follow);
            for (slot, gained) in next.iter_mut().zip(&spread) {
                *slot = teleport + gained + dangling;
            }
            return;
        }

        next.fill(teleport);
        let mut dangling = 0.0;
        for (p, &mass) in current.iter().enumerate() {
            let weight = follow * mass;
            let targets = out_links(adjacency, p);
            if targets.is_empty() {
                dangling += weight / n;
            } else {
                let share = weight / targets.len() as f64;
                for &q in targets {
                    if let Some(slot) = next.get_mut(q) {
                        *slot += share;
                    }
                }
            }
        }

        for slot in next.iter_mut() {
            *slot += dangling;
        }
    }
}

fn out_links(adjacency: &[Vec<NodeId>], node: NodeId) -> &[NodeId] {
    adjacency.get(node).map_or(&[], Vec::as_slice)
}

/// Nodes per parallel chunk: one chunk per pool thread.
fn chunk_len(len: usize) -> usize {
    let workers = rayon::current_num_threads().max(1);
    ((len + workers - 1) / workers).max(1)
}

/// One `(spread, dangling)` partial per chunk of `current`.
#[allow(clippy::cast_precision_loss)]
fn chunk_partials(current: &[f64], adjacency: &[Vec<NodeId>], follow: f64) -> Vec<(Vec<f64>, f64)> {
    let len = current.len();
    let n = len as f64;
    let chunk = chunk_len(len);

    current
        .par_chunks(chunk)
        .enumerate()
        .map(|(c, masses)| {
            let base = c * chunk;
            let mut acc = vec![0.0; len];
            let mut dangling = 0.0;
            for (offset, &mass) in masses.iter().enumerate() {
                let weight = follow * mass;
                let targets = out_links(adjacency, base + offset);
                if targets.is_empty() {
                    dangling += weight / n;
                } else {
                    let share = weight / targets.len() as f64;
                    for &q in targets {
                        if let Some(slot) = acc.get_mut(q) {
                            *slot += share;
                        }
                    }
                }
            }
            (acc, dangling)
        })
        .collect()
}

/// Sums the chunk partials in chunk order.
/// Returns the link-following mass per node and the per-node dangling share.
fn distribute_parallel(current: &[f64], adjacency: &[Vec<NodeId>], follow: f64) -> (Vec<f64>, f64) {
    let mut partials = chunk_partials(current, adjacency, follow).into_iter();
    let Some((mut spread, mut dangling)) = partials.next() else {
        return (vec![0.0; current.len()], 0.0);
    };
    for (acc, d) in partials {
        for (x, y) in spread.iter_mut().zip(&acc) {
            *x += y;
        }
        dangling += d;
    }
    (spread, dangling)
}

/// Plain contract: scores aligned to node ids, converged or not.
#[must_use]
pub fn compute(
    node_count: usize,
    adjacency: &[Vec<NodeId>],
    lambda: f64,
    tau: f64,
    max_iterations: usize,
) -> Vec<f64> {
    let params = PageRankParams::default()
        .with_lambda(lambda)
        .with_tau(tau)
        .with_max_iterations(max_iterations);
    PageRankEngine::new(params).run_nodes(node_count, adjacency).scores
}
