//! Page Replacement Policies.
//!
//! Implements the algorithms that choose which resident page to evict when a
//! fault occurs on a full frame table.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Clock`: Second-chance clock with one reference bit per page.
//!
//! # Call protocol
//!
//! The simulation driver and frame table call the hooks in this order:
//! `on_admit` when a page enters a frame, `on_access` on every reference to a
//! resident page (including the one that just admitted it), and, when the table
//! is full, `select_victim` followed by `on_evict` for the chosen page. After
//! every complete access the set of tracked pages equals the set of resident pages.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Second-chance clock replacement policy.
pub mod clock;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::common::PageId;
use crate::config::Algorithm;

/// Trait for page replacement policies.
///
/// Defines the hooks for tracking resident pages and selecting victims.
pub trait ReplacementPolicy: Send + Sync {
    /// Starts tracking a page that has just been placed in a frame.
    fn on_admit(&mut self, page: PageId);

    /// Records a reference to a resident page.
    fn on_access(&mut self, page: PageId);

    /// Chooses the page to evict.
    ///
    /// Only called when the table is full. Returns `None` if nothing is tracked.
    fn select_victim(&mut self) -> Option<PageId>;

    /// Stops tracking an evicted page.
    fn on_evict(&mut self, page: PageId);

    /// Number of pages currently tracked.
    fn tracked(&self) -> usize;

    /// Returns `true` if `page` is tracked.
    fn contains(&self, page: PageId) -> bool;
}

/// The eviction policy of a run, fixed at construction.
#[derive(Debug, Clone)]
pub enum EvictionPolicy {
    /// FIFO state.
    Fifo(FifoPolicy),
    /// LRU state.
    Lru(LruPolicy),
    /// Clock state.
    Clock(ClockPolicy),
}

impl EvictionPolicy {
    /// Creates empty policy state for `algorithm`, sized for `capacity` frames.
    pub fn new(algorithm: Algorithm, capacity: usize) -> Self {
        match algorithm {
            Algorithm::Fifo => Self::Fifo(FifoPolicy::new(capacity)),
            Algorithm::Lru => Self::Lru(LruPolicy::new(capacity)),
            Algorithm::Clock => Self::Clock(ClockPolicy::new(capacity)),
        }
    }

    /// Algorithm this policy implements.
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Fifo(_) => Algorithm::Fifo,
            Self::Lru(_) => Algorithm::Lru,
            Self::Clock(_) => Algorithm::Clock,
        }
    }
}

impl ReplacementPolicy for EvictionPolicy {
    fn on_admit(&mut self, page: PageId) {
        match self {
            Self::Fifo(p) => p.on_admit(page),
            Self::Lru(p) => p.on_admit(page),
            Self::Clock(p) => p.on_admit(page),
        }
    }

    fn on_access(&mut self, page: PageId) {
        match self {
            Self::Fifo(p) => p.on_access(page),
            Self::Lru(p) => p.on_access(page),
            Self::Clock(p) => p.on_access(page),
        }
    }

    fn select_victim(&mut self) -> Option<PageId> {
        match self {
            Self::Fifo(p) => p.select_victim(),
            Self::Lru(p) => p.select_victim(),
            Self::Clock(p) => p.select_victim(),
        }
    }

    fn on_evict(&mut self, page: PageId) {
        match self {
            Self::Fifo(p) => p.on_evict(page),
            Self::Lru(p) => p.on_evict(page),
            Self::Clock(p) => p.on_evict(page),
        }
    }

    fn tracked(&self) -> usize {
        match self {
            Self::Fifo(p) => p.tracked(),
            Self::Lru(p) => p.tracked(),
            Self::Clock(p) => p.tracked(),
        }
    }

    fn contains(&self, page: PageId) -> bool {
        match self {
            Self::Fifo(p) => p.contains(page),
            Self::Lru(p) => p.contains(page),
            Self::Clock(p) => p.contains(page),
        }
    }
}
