//! Run report formatting.
//!
//! The text form is a single line of `key=value` pairs in a fixed order so that
//! every invocation of a sweep can be parsed the same way:
//!
//! ```text
//! frames=4 algorithm=LRU preload=- hits=12 faults=8 evictions=4
//! ```
//!
//! The JSON form carries the same fields plus the reference count, pre-load
//! counters, and fault rate.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::common::SimError;
use crate::stats::RunReport;

/// Output encoding of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line of `key=value` pairs.
    #[default]
    Text,
    /// One line of JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(SimError::invalid_argument(format!(
                "unknown output format {other:?}, expected text or json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Renders the text form of `report` (no trailing newline).
pub fn format_text(report: &RunReport) -> String {
    format!(
        "frames={} algorithm={} preload={} hits={} faults={} evictions={}",
        report.frames,
        report.algorithm,
        report.preload,
        report.hits(),
        report.faults(),
        report.evictions(),
    )
}

/// Renders the JSON form of `report` (no trailing newline).
///
/// # Errors
///
/// Propagates serializer failures.
pub fn format_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

/// Writes `report` followed by a newline.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", format_text(report)),
        OutputFormat::Json => {
            let line = format_json(report).map_err(io::Error::other)?;
            writeln!(out, "{line}")
        }
    }
}
