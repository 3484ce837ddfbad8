//! Parallel arrays.
//!
//! All per-view state lives in these arrays. Each array index corresponds to
//! one view handle.
//!
//! # Array Categories
//!
//! - **core**: Kind, parent, ordered children, lifecycle
//! - **visual**: Background, text content, text color, font

pub mod core;
pub mod visual;

use self::core as core_arrays;
use self::visual as visual_arrays;

/// Ensure all arrays have capacity for the given index.
///
/// Called by registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core_arrays::ensure_capacity(index);
    visual_arrays::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core_arrays::clear_at_index(index);
    visual_arrays::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
pub fn reset_all_arrays() {
    core_arrays::reset();
    visual_arrays::reset();
}
