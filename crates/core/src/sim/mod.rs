//! Simulation driver.
//!
//! Provides the `Simulator` state machine that replays references against a
//! frame table and the one-shot `run` entry point used by the command line.

pub mod simulator;

pub use simulator::{AccessOutcome, Phase, Simulator, run};
