//! Page-replacement cache simulator library.
//!
//! This crate replays a page-reference trace against a fixed number of frames and
//! counts hits, faults, and evictions under a selectable eviction policy:
//! 1. **Trace:** Reads page-reference traces and pre-load page lists.
//! 2. **Frames:** Fixed-capacity frame table with O(1) residency lookup.
//! 3. **Policies:** FIFO, LRU, and Clock (second-chance) victim selection.
//! 4. **Simulation:** Pre-load and replay phases driven by a small state machine.
//! 5. **Reporting:** Run statistics and their text/JSON renderings.

/// Common types (page and frame identifiers) and the error taxonomy.
pub mod common;
/// Run configuration (algorithm, frame count, pre-load mode, input paths).
pub mod config;
/// Fixed-capacity frame table.
pub mod frame;
/// Eviction policies and the policy capability trait.
pub mod policy;
/// Run report formatting.
pub mod report;
/// Simulation driver.
pub mod sim;
/// Run statistics.
pub mod stats;
/// Trace and page-list reader.
pub mod trace;

/// Error type shared by every fallible operation in the crate.
pub use crate::common::{Result, SimError};
/// Validated run parameters; build with `SimConfig::from_args` or deserialize.
pub use crate::config::{Algorithm, PreloadMode, SimConfig};
/// Simulation driver and its one-shot entry point.
pub use crate::sim::{Simulator, run};
/// Finalized run output.
pub use crate::stats::{RunReport, RunStats};
