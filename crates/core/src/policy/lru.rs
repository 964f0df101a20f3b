//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has not been referenced for the longest time.
//! It maintains a usage stack of resident pages. When a page is referenced, it is
//! moved to the top (Most Recently Used position). The bottom of the stack is the
//! Least Recently Used page.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_access()`: O(N) where N is the number of frames
//!   - `select_victim()`: O(1)
//! - **Space Complexity:** O(N)
//! - **Worst Case:** Cyclic scans one page larger than the table (every reference faults)

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::config::defaults::PRESIZED_FRAMES;

/// LRU Policy state.
#[derive(Debug, Clone, Default)]
pub struct LruPolicy {
    /// Usage stack. Index 0 is MRU, last index is LRU.
    usage: Vec<PageId>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of frames; bounds the up-front reservation for the stack.
    pub fn new(capacity: usize) -> Self {
        Self {
            usage: Vec::with_capacity(capacity.min(PRESIZED_FRAMES)),
        }
    }

    /// Pages from most to least recently used.
    pub fn recency(&self) -> &[PageId] {
        &self.usage
    }

    fn position(&self, page: PageId) -> Option<usize> {
        self.usage.iter().position(|&p| p == page)
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Places a newly admitted page at the MRU position.
    fn on_admit(&mut self, page: PageId) {
        self.on_access(page);
    }

    /// Moves `page` to the front of the usage stack, shifting the others down.
    fn on_access(&mut self, page: PageId) {
        if let Some(pos) = self.position(page) {
            self.usage[..=pos].rotate_right(1);
        } else {
            self.usage.insert(0, page);
        }
    }

    /// Returns the page at the bottom of the usage stack.
    fn select_victim(&mut self) -> Option<PageId> {
        self.usage.last().copied()
    }

    fn on_evict(&mut self, page: PageId) {
        if let Some(pos) = self.position(page) {
            let _ = self.usage.remove(pos);
        }
    }

    fn tracked(&self) -> usize {
        self.usage.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.usage.contains(&page)
    }
}
