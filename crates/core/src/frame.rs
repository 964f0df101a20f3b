//! Fixed-capacity frame table.
//!
//! The frame table owns the frames of one run. It answers residency queries in
//! O(1) through a page → frame map and delegates victim choice to the run's
//! eviction policy when a miss finds every frame occupied. Frames are created as
//! pages are admitted, so the capacity only bounds growth.
//!
//! Invariants:
//! - occupied frames ≤ capacity at all times;
//! - a page id occupies at most one frame;
//! - once a caller completes each access with `on_admit`/`on_access`, the
//!   policy tracks exactly the resident pages.

use std::collections::HashMap;

use tracing::trace;

use crate::common::{FrameId, PageId, Result, SimError};
use crate::config::defaults::PRESIZED_FRAMES;
use crate::policy::ReplacementPolicy;

/// A slot holding at most one resident page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// Resident page, if any.
    pub page: Option<PageId>,
}

/// Outcome of placing a page in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmitResult {
    /// Frame the page now occupies.
    pub frame: FrameId,
    /// Page displaced to make room, if the table was full.
    pub evicted: Option<PageId>,
}

/// Fixed-capacity page → frame container.
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Frames created so far; never longer than `capacity`.
    frames: Vec<Frame>,
    resident: HashMap<PageId, FrameId>,
    capacity: usize,
}

impl FrameTable {
    /// Creates a table of `capacity` empty frames.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SimError::invalid_argument(
                "frame table capacity must be positive",
            ));
        }
        let reserved = capacity.min(PRESIZED_FRAMES);
        Ok(Self {
            frames: Vec::with_capacity(reserved),
            resident: HashMap::with_capacity(reserved),
            capacity,
        })
    }

    /// Number of frames.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied frames.
    pub fn occupied(&self) -> usize {
        self.resident.len()
    }

    /// Returns `true` if every frame is occupied.
    pub fn is_full(&self) -> bool {
        self.resident.len() == self.capacity
    }

    /// Returns `true` iff `page` currently occupies a frame.
    #[inline]
    pub fn is_resident(&self, page: PageId) -> bool {
        self.resident.contains_key(&page)
    }

    /// Frame holding `page`, if resident.
    pub fn frame_of(&self, page: PageId) -> Option<FrameId> {
        self.resident.get(&page).copied()
    }

    /// Frames created so far, in index order. Frames never used are not listed.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Resident pages ordered by frame index.
    pub fn resident_pages(&self) -> Vec<PageId> {
        self.frames.iter().filter_map(|f| f.page).collect()
    }

    /// Places `page` in a frame, evicting the policy's victim if the table is full.
    ///
    /// The policy is asked for a victim and told of the eviction here; the caller
    /// is responsible for `on_admit`/`on_access` on the admitted page.
    ///
    /// # Errors
    ///
    /// Returns `SimError::AlreadyResident` if `page` is already in the table, and
    /// `SimError::InvalidArgument` if the table is full but the policy offers no
    /// resident victim (policy and table out of sync).
    pub fn admit<P>(&mut self, page: PageId, policy: &mut P) -> Result<AdmitResult>
    where
        P: ReplacementPolicy + ?Sized,
    {
        if self.is_resident(page) {
            return Err(SimError::AlreadyResident(page));
        }

        if self.frames.len() < self.capacity {
            let frame = self.frames.len();
            self.frames.push(Frame { page: Some(page) });
            let _ = self.resident.insert(page, frame);
            return Ok(AdmitResult {
                frame,
                evicted: None,
            });
        }

        let victim = policy
            .select_victim()
            .filter(|v| self.is_resident(*v))
            .ok_or_else(|| SimError::invalid_argument("eviction policy has no resident victim"))?;
        policy.on_evict(victim);
        let frame = self
            .resident
            .remove(&victim)
            .ok_or_else(|| SimError::invalid_argument("victim has no frame"))?;
        trace!(victim, page, frame, "evict");
        self.occupy(frame, page);
        Ok(AdmitResult {
            frame,
            evicted: Some(victim),
        })
    }

    /// Records a reference to a resident page; only policy metadata changes.
    ///
    /// Returns `false` (and does nothing) if `page` is not resident.
    pub fn touch<P>(&self, page: PageId, policy: &mut P) -> bool
    where
        P: ReplacementPolicy + ?Sized,
    {
        if self.is_resident(page) {
            policy.on_access(page);
            true
        } else {
            false
        }
    }

    fn occupy(&mut self, frame: FrameId, page: PageId) {
        self.frames[frame].page = Some(page);
        let _ = self.resident.insert(page, frame);
    }
}
