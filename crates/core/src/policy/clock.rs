//! Clock (Second-Chance) Replacement Policy.
//!
//! Resident pages sit in a ring of slots, one slot per frame, with a scan pointer
//! (the "hand") and one reference bit per page. A reference sets the bit. On a
//! fault the hand sweeps forward: a page with its bit set is spared and the bit
//! cleared; the first page found with a clear bit is the victim, and the hand
//! stops just past its slot. The incoming page takes over that slot, so it is the
//! last page the next sweep will examine.
//!
//! The hand is never reset between faults; each sweep resumes where the previous
//! one stopped.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_admit()` / `on_access()`: O(1)
//!   - `select_victim()`: O(N) worst case (one full sweep plus one slot)
//! - **Space Complexity:** O(N)

use std::collections::HashMap;

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::config::defaults::PRESIZED_FRAMES;

/// One occupied position on the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSlot {
    page: PageId,
    referenced: bool,
}

/// Clock Policy state.
#[derive(Debug, Clone, Default)]
pub struct ClockPolicy {
    /// Clock face. `None` marks a slot vacated by an eviction and not yet refilled.
    ring: Vec<Option<ClockSlot>>,
    /// Page → slot index.
    slots: HashMap<PageId, usize>,
    /// Next slot the sweep examines.
    hand: usize,
    /// Slots freed by `on_evict`, reused by the next admission.
    vacant: Vec<usize>,
}

impl ClockPolicy {
    /// Creates a new Clock policy instance.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of frames; the ring never grows past this once full.
    pub fn new(capacity: usize) -> Self {
        let reserved = capacity.min(PRESIZED_FRAMES);
        Self {
            ring: Vec::with_capacity(reserved),
            slots: HashMap::with_capacity(reserved),
            hand: 0,
            vacant: Vec::new(),
        }
    }

    /// Current hand position (slot index).
    pub const fn hand(&self) -> usize {
        self.hand
    }

    /// Reference bit of `page`, or `None` if it is not tracked.
    pub fn is_referenced(&self, page: PageId) -> Option<bool> {
        let idx = *self.slots.get(&page)?;
        self.ring[idx].map(|slot| slot.referenced)
    }

    /// Pages in slot order, skipping vacant slots.
    pub fn ring(&self) -> impl Iterator<Item = PageId> + '_ {
        self.ring.iter().flatten().map(|slot| slot.page)
    }
}

impl ReplacementPolicy for ClockPolicy {
    /// Places `page` in the most recently vacated slot, or a new slot while filling.
    ///
    /// The reference bit starts clear; the access that caused the admission sets it.
    fn on_admit(&mut self, page: PageId) {
        if self.slots.contains_key(&page) {
            return;
        }
        let slot = ClockSlot {
            page,
            referenced: false,
        };
        let idx = if let Some(idx) = self.vacant.pop() {
            self.ring[idx] = Some(slot);
            idx
        } else {
            self.ring.push(Some(slot));
            self.ring.len() - 1
        };
        let _ = self.slots.insert(page, idx);
    }

    fn on_access(&mut self, page: PageId) {
        let Some(&idx) = self.slots.get(&page) else {
            return;
        };
        if let Some(slot) = self.ring[idx].as_mut() {
            slot.referenced = true;
        }
    }

    /// Sweeps from the hand, clearing set bits, until a clear bit is found.
    ///
    /// Every set bit passed over is cleared, so a victim is always found within
    /// two laps of the ring.
    fn select_victim(&mut self) -> Option<PageId> {
        let len = self.ring.len();
        if self.slots.is_empty() || len == 0 {
            return None;
        }
        for _ in 0..2 * len {
            let idx = self.hand % len;
            self.hand = (idx + 1) % len;
            match self.ring[idx].as_mut() {
                Some(slot) if slot.referenced => slot.referenced = false,
                Some(slot) => return Some(slot.page),
                None => {}
            }
        }
        None
    }

    fn on_evict(&mut self, page: PageId) {
        if let Some(idx) = self.slots.remove(&page) {
            self.ring[idx] = None;
            self.vacant.push(idx);
        }
    }

    fn tracked(&self) -> usize {
        self.slots.len()
    }

    fn contains(&self, page: PageId) -> bool {
        self.slots.contains_key(&page)
    }
}
