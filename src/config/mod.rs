// src/config/mod.rs
pub mod types;

pub use self::types::{Config, OutputConfig, RankConfig};

use crate::error::{RankError, Result};
use crate::rank::PageRankParams;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "linkrank.toml";

/// Widest precision an `f64` can meaningfully print.
const MAX_PRECISION: usize = 17;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, `linkrank.toml` is read when
    /// present and defaults are used otherwise.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::read(p),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::read(local)
                } else {
                    Ok(Self::new())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RankError::io(e, path))?;
        Self::parse_toml(&content, path)
    }

    /// Parses TOML content; `origin` is only used in error messages.
    ///
    /// # Errors
    /// Returns `RankError::Config` on malformed TOML or mistyped fields.
    pub fn parse_toml(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| RankError::Config {
            path: origin.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Renders the effective configuration as TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Engine parameters derived from the `[rank]` table.
    #[must_use]
    pub fn params(&self) -> PageRankParams {
        PageRankParams {
            lambda: self.rank.lambda,
            tau: self.rank.tau,
            max_iterations: self.rank.max_iterations,
            norm: self.rank.norm,
            parallel: self.rank.parallel,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `RankError::InvalidParameter` for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.params().validate()?;
        if self.output.precision > MAX_PRECISION {
            return Err(RankError::InvalidParameter {
                name: "precision",
                reason: format!("{} exceeds {MAX_PRECISION}", self.output.precision),
            });
        }
        Ok(())
    }
}
