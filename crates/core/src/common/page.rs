//! Page and frame identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque page identifier as it appears in a trace.
pub type PageId = u64;

/// Index of a frame within the frame table.
pub type FrameId = usize;

/// A single reference read from a trace.
///
/// Immutable once read; `index` is the zero-based position in the trace
/// after blank lines are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRef {
    /// Referenced page.
    pub page: PageId,
    /// Position of the reference in the trace.
    pub index: usize,
}

impl PageRef {
    /// Creates a reference to `page` at trace position `index`.
    #[inline]
    pub const fn new(page: PageId, index: usize) -> Self {
        Self { page, index }
    }

    /// Builds an indexed reference sequence from bare page ids.
    pub fn sequence(pages: &[PageId]) -> Vec<Self> {
        pages
            .iter()
            .enumerate()
            .map(|(index, &page)| Self::new(page, index))
            .collect()
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.index, self.page)
    }
}
