//! Run statistics collection.
//!
//! This module tracks the outcome of one simulation run. It provides:
//! 1. **Counters:** Hits, faults, and evictions of the measured replay.
//! 2. **Warm-up counters:** Admissions and evictions performed while pre-loading.
//! 3. **Report:** The counters frozen together with the echoed run parameters.

use serde::{Deserialize, Serialize};

use crate::config::{Algorithm, PreloadMode};

/// Counters accumulated while a run is in progress.
///
/// Pre-load activity is kept apart from the measured counters so that
/// `hits + faults` always equals the trace length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// References that found their page resident.
    pub hits: u64,
    /// References that required an admission.
    pub faults: u64,
    /// Admissions during replay that displaced a resident page.
    pub evictions: u64,
    /// Pages admitted during pre-loading.
    pub preloaded: u64,
    /// Evictions caused by pre-loading more pages than frames.
    pub preload_evictions: u64,
}

impl RunStats {
    /// Total measured references.
    pub const fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Fraction of measured references that faulted, or 0 for an empty trace.
    pub fn fault_rate(&self) -> f64 {
        match self.references() {
            0 => 0.0,
            total => self.faults as f64 / total as f64,
        }
    }

    /// Fraction of measured references that hit, or 0 for an empty trace.
    pub fn hit_rate(&self) -> f64 {
        match self.references() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

/// Final, read-only result of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Frame count of the run.
    pub frames: usize,
    /// Eviction algorithm of the run.
    pub algorithm: Algorithm,
    /// Pre-load mode of the run.
    pub preload: PreloadMode,
    /// Number of trace references replayed.
    pub references: u64,
    /// Final counters.
    #[serde(flatten)]
    pub stats: RunStats,
    /// Measured fault rate.
    pub fault_rate: f64,
}

impl RunReport {
    /// Freezes `stats` together with the run parameters.
    pub fn new(frames: usize, algorithm: Algorithm, preload: PreloadMode, stats: RunStats) -> Self {
        Self {
            frames,
            algorithm,
            preload,
            references: stats.references(),
            stats,
            fault_rate: stats.fault_rate(),
        }
    }

    /// Hits of the measured replay.
    pub const fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Faults of the measured replay.
    pub const fn faults(&self) -> u64 {
        self.stats.faults
    }

    /// Evictions of the measured replay.
    pub const fn evictions(&self) -> u64 {
        self.stats.evictions
    }
}
