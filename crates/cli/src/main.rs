//! Page-replacement simulator CLI.
//!
//! This binary is the command the sweep harness invokes once per
//! (frame count, algorithm, pre-load flag) combination:
//!
//! ```text
//! main <page-list> <trace> <frame-count> <FIFO|LRU|Clock> <+|->
//! ```
//!
//! It prints one report line to stdout and exits 0, or prints `Error: ...` to
//! stderr and exits 1 when an argument or input file is rejected. Diagnostics go
//! to stderr through `tracing`; `RUST_LOG` overrides the `-v` level.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use pagesim_core::SimConfig;
use pagesim_core::report::{OutputFormat, write_report};

#[derive(Parser, Debug)]
#[command(
    name = "main",
    version,
    about = "Page-replacement cache simulator (FIFO, LRU, Clock)",
    long_about = "Replays a page-reference trace against a fixed number of frames and reports hits, faults, and evictions.\n\nExamples:\n  main plist ptrace 8 LRU -\n  main plist ptrace 4 Clock + --format json"
)]
struct Cli {
    /// Page list (working set) admitted before replay when the pre-load flag is `+`.
    page_list: PathBuf,

    /// Page-reference trace, one page id per line.
    trace: PathBuf,

    /// Number of frames (positive integer).
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    frames: String,

    /// Eviction algorithm: FIFO, LRU, or Clock (case-sensitive).
    algorithm: String,

    /// `+` to pre-load the page list, `-` to start cold.
    #[arg(allow_hyphen_values = true)]
    preload: String,

    /// Report format: text or json.
    #[arg(long, default_value = "text")]
    format: String,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Validates the arguments, runs the simulation, and prints the report.
fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let format: OutputFormat = cli.format.parse()?;
    let config = SimConfig::from_args(
        cli.page_list.clone(),
        cli.trace.clone(),
        &cli.frames,
        &cli.algorithm,
        &cli.preload,
    )?;

    let report = pagesim_core::run(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, format)?;
    out.flush()?;
    Ok(())
}
