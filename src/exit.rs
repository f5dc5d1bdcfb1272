// src/exit.rs
//! Standardized process exit codes for `hoproute`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::HopRouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum HopRouteExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, config parse).
    Error = 1,
    /// Input validation failed (bad node count, out-of-range query ids).
    InvalidInput = 2,
    /// Edge or degree budget cannot support a strongly connected topology.
    BudgetExceeded = 3,
    /// Verification failed (connectivity or budget check on a built graph).
    VerifyFailed = 6,
}

impl HopRouteExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a library error to the exit code contract.
    #[must_use]
    pub fn from_error(e: &HopRouteError) -> Self {
        match e {
            HopRouteError::InvalidInput(_) | HopRouteError::InvalidQuery { .. } => {
                Self::InvalidInput
            }
            HopRouteError::BudgetExceeded(_) => Self::BudgetExceeded,
            _ => Self::Error,
        }
    }
}

impl Termination for HopRouteExit {
    fn report(self) -> std::process::ExitCode {
        // Exit codes stay within the portable 0..255 range.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
