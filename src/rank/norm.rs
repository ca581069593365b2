// src/rank/norm.rs
//! Distance between successive score estimates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which vector norm decides convergence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvergenceNorm {
    /// Sum of absolute differences.
    L1,
    /// Euclidean distance.
    #[default]
    L2,
}

impl ConvergenceNorm {
    /// Distance between `a` and `b`. Extra entries in the longer slice are ignored.
    #[must_use]
    pub fn distance(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Self::L1 => l1_distance(a, b),
            Self::L2 => l2_distance(a, b),
        }
    }
}

impl fmt::Display for ConvergenceNorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L1 => write!(f, "l1"),
            Self::L2 => write!(f, "l2"),
        }
    }
}

impl FromStr for ConvergenceNorm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l1" => Ok(Self::L1),
            "l2" => Ok(Self::L2),
            other => Err(format!("unknown norm '{other}' (expected l1 or l2)")),
        }
    }
}

#[must_use]
pub fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

#[must_use]
pub fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
