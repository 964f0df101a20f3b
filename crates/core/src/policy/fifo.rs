//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the page that entered the frame table earliest, regardless
//! of how recently or how often it was referenced. Admissions are appended to
//! an insertion queue; the victim is always the queue head.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_admit()` / `on_access()`: O(1)
//!   - `select_victim()`: O(1)
//!   - `on_evict()`: O(1) for the head, O(N) otherwise
//! - **Space Complexity:** O(N) where N is the number of frames
//! - **Worst Case:** Workloads with strong temporal locality (evicts hot pages)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::config::defaults::PRESIZED_FRAMES;

/// FIFO Policy state.
#[derive(Debug, Clone, Default)]
pub struct FifoPolicy {
    /// Resident pages in admission order; front is the oldest.
    queue: VecDeque<PageId>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of frames; bounds the up-front reservation for the queue.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity.min(PRESIZED_FRAMES)),
        }
    }

    /// Pages in eviction order (oldest first).
    pub fn order(&self) -> impl Iterator<Item = PageId> + '_ {
        self.queue.iter().copied()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn on_admit(&mut self, page: PageId) {
        if !self.contains(page) {
            self.queue.push_back(page);
        }
    }

    /// References do not affect FIFO order.
    fn on_access(&mut self, _page: PageId) {}

    fn select_victim(&mut self) -> Option<PageId> {
        self.queue.front().copied()
    }

    fn on_evict(&mut self, page: PageId) {
        if self.queue.front() == Some(&page) {
            let _ = self.queue.pop_front();
        } else if let Some(pos) = self.queue.iter().position(|&p| p == page) {
            let _ = self.queue.remove(pos);
        }
    }

    fn tracked(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.queue.contains(&page)
    }
}
