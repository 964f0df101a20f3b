//! Run configuration for the simulator.
//!
//! This module defines the parameters of a single simulation run. It provides:
//! 1. **Defaults:** Sweep frame sizes and fallback values for deserialized configs.
//! 2. **Enums:** Eviction algorithm and pre-load mode, spelled exactly as on the command line.
//! 3. **Structures:** `SimConfig`, built from positional arguments or deserialized from JSON.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Result, SimError};

/// Default configuration constants.
pub mod defaults {
    /// Frame counts swept by the external benchmark harness.
    pub const SWEEP_FRAME_SIZES: [usize; 6] = [1, 2, 4, 8, 16, 32];

    /// Frame count used when a deserialized config omits one.
    pub const FRAMES: usize = 8;

    /// Most frames whose bookkeeping is reserved up front. Larger tables grow on admission.
    pub const PRESIZED_FRAMES: usize = 64;
}

/// Eviction algorithm selected for a run.
///
/// Names are case-sensitive and must match exactly: `FIFO`, `LRU`, `Clock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-in, first-out. Ignores recency.
    #[serde(rename = "FIFO")]
    Fifo,
    /// Least recently used.
    #[default]
    #[serde(rename = "LRU")]
    Lru,
    /// Second-chance clock.
    #[serde(rename = "Clock")]
    Clock,
}

impl Algorithm {
    /// All algorithms in harness sweep order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Lru, Self::Clock];

    /// Command-line spelling of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Clock => "Clock",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == s)
            .ok_or_else(|| {
                SimError::invalid_argument(format!(
                    "unknown algorithm {s:?}, expected one of FIFO, LRU, Clock"
                ))
            })
    }
}

/// Whether the page list is admitted before the measured replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PreloadMode {
    /// `+`: admit the page list before replaying the trace.
    #[serde(rename = "+")]
    Preload,
    /// `-`: start cold; the page list is never read.
    #[default]
    #[serde(rename = "-")]
    Demand,
}

impl PreloadMode {
    /// Command-line flag for the mode.
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Preload => "+",
            Self::Demand => "-",
        }
    }

    /// Returns `true` if the page list is consumed.
    pub const fn is_preload(self) -> bool {
        matches!(self, Self::Preload)
    }
}

impl fmt::Display for PreloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

impl FromStr for PreloadMode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Self::Preload),
            "-" => Ok(Self::Demand),
            other => Err(SimError::invalid_argument(format!(
                "unrecognized pre-load flag {other:?}, expected + or -"
            ))),
        }
    }
}

/// Parameters of one simulation run.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{Algorithm, PreloadMode, SimConfig};
///
/// let json = r#"{
///     "trace": "ptrace",
///     "page_list": "plist",
///     "frames": 16,
///     "algorithm": "Clock",
///     "preload": "+"
/// }"#;
///
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.frames, 16);
/// assert_eq!(config.algorithm, Algorithm::Clock);
/// assert_eq!(config.preload, PreloadMode::Preload);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Page-reference trace to replay.
    pub trace: PathBuf,

    /// Working set admitted before replay; only read in `PreloadMode::Preload`.
    #[serde(default)]
    pub page_list: Option<PathBuf>,

    /// Number of frames (table capacity).
    #[serde(default = "SimConfig::default_frames")]
    pub frames: usize,

    /// Eviction algorithm.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Pre-load mode.
    #[serde(default)]
    pub preload: PreloadMode,
}

impl SimConfig {
    /// Returns the default frame count.
    const fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Creates a demand-paged config for `trace` with the given frame count and algorithm.
    pub fn new(trace: impl Into<PathBuf>, frames: usize, algorithm: Algorithm) -> Self {
        Self {
            trace: trace.into(),
            page_list: None,
            frames,
            algorithm,
            preload: PreloadMode::Demand,
        }
    }

    /// Enables pre-loading from `page_list`.
    #[must_use]
    pub fn with_preload(mut self, page_list: impl Into<PathBuf>) -> Self {
        self.page_list = Some(page_list.into());
        self.preload = PreloadMode::Preload;
        self
    }

    /// Builds a validated config from the harness's positional arguments.
    ///
    /// # Arguments
    ///
    /// * `page_list` - Page-list path (kept even for `-`, but never opened).
    /// * `trace` - Trace path.
    /// * `frames` - Frame count text; must be a positive integer.
    /// * `algorithm` - `FIFO`, `LRU`, or `Clock`.
    /// * `preload` - `+` or `-`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidArgument` naming the offending argument.
    pub fn from_args(
        page_list: impl Into<PathBuf>,
        trace: impl Into<PathBuf>,
        frames: &str,
        algorithm: &str,
        preload: &str,
    ) -> Result<Self> {
        let config = Self {
            trace: trace.into(),
            page_list: Some(page_list.into()),
            frames: parse_frames(frames)?,
            algorithm: algorithm.parse()?,
            preload: preload.parse()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants a deserialized config may violate.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidArgument` if the frame count is zero or pre-loading
    /// is requested without a page list.
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(SimError::invalid_argument(
                "frame count must be a positive integer, got 0",
            ));
        }
        if self.preload.is_preload() && self.page_list.is_none() {
            return Err(SimError::invalid_argument(
                "pre-loading (+) requires a page list",
            ));
        }
        Ok(())
    }

    /// Returns `true` if `frames` is one of the harness sweep sizes.
    pub fn is_sweep_size(&self) -> bool {
        defaults::SWEEP_FRAME_SIZES.contains(&self.frames)
    }
}

/// Parses a frame count, rejecting zero, negatives, and non-numeric text.
///
/// # Errors
///
/// Returns `SimError::InvalidArgument` quoting the rejected text.
pub fn parse_frames(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SimError::invalid_argument(format!(
            "frame count must be a positive integer, got {s:?}"
        ))),
    }
}
