//! Simulator error definitions.
//!
//! Every error is fatal to the run that raised it: a replay over malformed input
//! has no meaningful partial result, so nothing here is retried or recovered.
//! 1. **Input errors:** Unreadable paths and unparsable trace records.
//! 2. **Argument errors:** Frame counts, algorithm names, and pre-load flags.
//! 3. **Driver misuse:** Out-of-order phases and double admissions (library API only).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::page::PageId;

/// Errors raised while configuring or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A trace or page-list path could not be opened or read.
    #[error("cannot read '{}': {source}", path.display())]
    TraceNotFound {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A record could not be parsed as a page id.
    #[error("malformed record in '{}' at line {line}: {record:?} is not a page id", path.display())]
    MalformedTrace {
        /// File the record came from.
        path: PathBuf,
        /// 1-based line number of the record.
        line: usize,
        /// The record text after trimming.
        record: String,
    },

    /// A run parameter is out of range or unrecognized.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A driver operation was issued in a phase that does not allow it.
    #[error("cannot {operation} while the simulator is {phase}")]
    InvalidPhase {
        /// Phase the driver was in.
        phase: &'static str,
        /// Operation that was attempted.
        operation: &'static str,
    },

    /// A page was admitted while already resident.
    #[error("page {0} is already resident")]
    AlreadyResident(PageId),
}

impl SimError {
    /// Builds an `InvalidArgument` from anything printable.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns `true` for errors caused by the input files rather than the arguments.
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::TraceNotFound { .. } | Self::MalformedTrace { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
