//! Common types shared across the simulator.
//!
//! 1. **Identifiers:** Page and frame identifiers and the positioned page reference.
//! 2. **Error Handling:** The `SimError` taxonomy and the crate `Result` alias.

/// Error types for trace reading, argument validation, and driver misuse.
pub mod error;

/// Page identifier and page reference types.
pub mod page;

pub use error::{Result, SimError};
pub use page::{FrameId, PageId, PageRef};
