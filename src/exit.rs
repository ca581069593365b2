// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and batch schedulers.

use crate::error::RankError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Run completed and both rankings were written.
    Success = 0,
    /// Generic error (unreadable input, failed write).
    Error = 1,
    /// Operator input was rejected (bad parameter, invalid config file).
    InvalidInput = 2,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_distinct() {
        assert_eq!(LinkRankExit::Success.code(), 0);
        assert_eq!(LinkRankExit::Error.code(), 1);
        assert_eq!(LinkRankExit::InvalidInput.code(), 2);
    }

    #[test]
    fn test_invalid_parameter_maps_to_invalid_input() {
        let err = anyhow::Error::new(RankError::InvalidParameter {
            name: "tau",
            reason: "must be positive".into(),
        });
        assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::InvalidInput);
    }

    #[test]
    fn test_context_keeps_invalid_input() {
        use anyhow::Context;

        let err = Err::<(), _>(RankError::InvalidParameter {
            name: "lambda",
            reason: "must be within [0, 1]".into(),
        })
        .context("Ranking links.gz failed")
        .unwrap_err();
        assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::InvalidInput);
    }

    #[test]
    fn test_io_maps_to_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = anyhow::Error::new(RankError::io(io, "links.gz"));
        assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::Error);
    }
}
