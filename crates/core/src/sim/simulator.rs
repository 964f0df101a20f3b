//! Simulation Driver.
//!
//! A run moves through `Init → (Preloading) → Replaying → Done`:
//! 1. **Init:** Empty frame table and policy state, zeroed counters.
//! 2. **Preloading:** Page-list admissions that warm the table without touching
//!    the measured counters. Only allowed in `PreloadMode::Preload`.
//! 3. **Replaying:** Each reference is a hit (policy notified) or a fault
//!    (admission, possibly evicting a victim).
//! 4. **Done:** Counters are frozen into a `RunReport`.
//!
//! Each `Simulator` owns all of its state, so independent runs never interact.

use std::fmt;

use tracing::{debug, info, trace};

use crate::common::{PageId, PageRef, Result, SimError};
use crate::config::{Algorithm, PreloadMode, SimConfig};
use crate::frame::FrameTable;
use crate::policy::{EvictionPolicy, ReplacementPolicy};
use crate::stats::{RunReport, RunStats};
use crate::trace::{read_page_list, read_trace};

/// Driver phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, nothing admitted.
    Init,
    /// Admitting the page list.
    Preloading,
    /// Replaying the measured trace.
    Replaying,
    /// Finished; counters are final.
    Done,
}

impl Phase {
    /// Lower-case phase name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "initializing",
            Self::Preloading => "preloading",
            Self::Replaying => "replaying",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The page was resident.
    Hit,
    /// The page was admitted, displacing `evicted` if the table was full.
    Fault {
        /// Page evicted to make room.
        evicted: Option<PageId>,
    },
}

impl AccessOutcome {
    /// Returns `true` for a hit.
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }

    /// Evicted page, if the reference caused an eviction.
    pub const fn evicted(self) -> Option<PageId> {
        match self {
            Self::Hit => None,
            Self::Fault { evicted } => evicted,
        }
    }
}

/// Page-replacement simulator for one run.
#[derive(Debug, Clone)]
pub struct Simulator {
    table: FrameTable,
    policy: EvictionPolicy,
    preload_mode: PreloadMode,
    stats: RunStats,
    phase: Phase,
}

impl Simulator {
    /// Creates a simulator with `frames` empty frames.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidArgument` if `frames` is zero.
    pub fn new(frames: usize, algorithm: Algorithm, preload_mode: PreloadMode) -> Result<Self> {
        Ok(Self {
            table: FrameTable::new(frames)?,
            policy: EvictionPolicy::new(algorithm, frames),
            preload_mode,
            stats: RunStats::default(),
            phase: Phase::Init,
        })
    }

    /// Creates a simulator from a run configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidArgument` if the configuration is invalid.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.frames, config.algorithm, config.preload)
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Counters so far.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Frame table of the run.
    pub const fn table(&self) -> &FrameTable {
        &self.table
    }

    /// Policy state of the run.
    pub const fn policy(&self) -> &EvictionPolicy {
        &self.policy
    }

    /// Admits `pages` in order without counting them as hits or faults.
    ///
    /// A page listed twice is treated as a reference to a resident page. More
    /// pages than frames evict earlier ones under the policy's normal rule.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidPhase` once replay has started or the run is done, and
    /// `SimError::InvalidArgument` if the run is demand-paged.
    pub fn preload(&mut self, pages: &[PageId]) -> Result<()> {
        match self.phase {
            Phase::Init | Phase::Preloading => {}
            phase => {
                return Err(SimError::InvalidPhase {
                    phase: phase.name(),
                    operation: "pre-load",
                });
            }
        }
        if !self.preload_mode.is_preload() {
            return Err(SimError::invalid_argument(
                "pre-loading requires the + pre-load mode",
            ));
        }

        self.phase = Phase::Preloading;
        debug!(pages = pages.len(), "pre-loading working set");
        for &page in pages {
            if let AccessOutcome::Fault { evicted } = self.step(page)? {
                self.stats.preloaded += 1;
                if evicted.is_some() {
                    self.stats.preload_evictions += 1;
                }
            }
        }
        Ok(())
    }

    /// Replays one measured reference.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidPhase` once the run is done.
    pub fn access(&mut self, page: PageId) -> Result<AccessOutcome> {
        if self.phase == Phase::Done {
            return Err(SimError::InvalidPhase {
                phase: self.phase.name(),
                operation: "replay a reference",
            });
        }
        if self.phase != Phase::Replaying {
            debug!(
                resident = self.table.occupied(),
                preloaded = self.stats.preloaded,
                "replaying trace"
            );
            self.phase = Phase::Replaying;
        }

        let outcome = self.step(page)?;
        match outcome {
            AccessOutcome::Hit => self.stats.hits += 1,
            AccessOutcome::Fault { evicted } => {
                self.stats.faults += 1;
                if evicted.is_some() {
                    self.stats.evictions += 1;
                }
            }
        }
        Ok(outcome)
    }

    /// Replays every reference of `trace` in order.
    ///
    /// # Errors
    ///
    /// Same as [`Simulator::access`].
    pub fn replay(&mut self, trace: &[PageRef]) -> Result<()> {
        for reference in trace {
            let outcome = self.access(reference.page)?;
            trace!(%reference, ?outcome, "reference");
        }
        Ok(())
    }

    /// Ends the run and returns its report. Further references are rejected.
    pub fn finish(&mut self) -> RunReport {
        self.phase = Phase::Done;
        RunReport::new(
            self.table.capacity(),
            self.policy.algorithm(),
            self.preload_mode,
            self.stats,
        )
    }

    /// Returns `true` if the policy tracks exactly the resident pages.
    pub fn is_consistent(&self) -> bool {
        let resident = self.table.resident_pages();
        self.policy.tracked() == resident.len()
            && resident.iter().all(|&page| self.policy.contains(page))
    }

    fn step(&mut self, page: PageId) -> Result<AccessOutcome> {
        if self.table.touch(page, &mut self.policy) {
            return Ok(AccessOutcome::Hit);
        }
        let admitted = self.table.admit(page, &mut self.policy)?;
        self.policy.on_admit(page);
        self.policy.on_access(page);
        Ok(AccessOutcome::Fault {
            evicted: admitted.evicted,
        })
    }
}

/// Runs one complete simulation described by `config`.
///
/// Reads the page list (pre-load mode only) and the trace, replays them, and
/// returns the report. The page list is never opened in demand mode.
///
/// # Errors
///
/// Any `SimError` from validation, reading, or the driver; the run is abandoned.
pub fn run(config: &SimConfig) -> Result<RunReport> {
    config.validate()?;
    info!(
        trace = %config.trace.display(),
        frames = config.frames,
        algorithm = %config.algorithm,
        preload = %config.preload,
        "starting run"
    );

    let working_set = match (&config.preload, &config.page_list) {
        (PreloadMode::Preload, Some(path)) => Some(read_page_list(path)?),
        _ => None,
    };
    let references = read_trace(&config.trace)?;

    let mut sim = Simulator::from_config(config)?;
    if let Some(pages) = working_set {
        sim.preload(&pages)?;
    }
    sim.replay(&references)?;
    let report = sim.finish();

    info!(
        hits = report.hits(),
        faults = report.faults(),
        evictions = report.evictions(),
        "run complete"
    );
    Ok(report)
}
