// src/exit.rs
//! Standardized process exit codes for `pagerank`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::RankError;
use crate::rank::RankStatus;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankExit {
    /// Ranks converged.
    Success = 0,
    /// Generic error (e.g. IO).
    Error = 1,
    /// Input validation failed (link file, config, empty graph).
    InvalidInput = 2,
    /// The iteration cap was reached before equilibrium.
    NotConverged = 3,
}

impl RankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed command.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(e) if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl From<RankStatus> for RankExit {
    fn from(status: RankStatus) -> Self {
        match status {
            RankStatus::Converged => Self::Success,
            RankStatus::CapReached => Self::NotConverged,
        }
    }
}

impl Termination for RankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
