//! Core arrays: kind, parent, ordered children, lifecycle.
//!
//! The parent array is the lookup-only back-reference. The children array is
//! the owning side: destroying a view walks it.

use std::cell::RefCell;

use crate::types::{Lifecycle, ViewKind};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// View kind (None for free slots).
    static KIND: RefCell<Vec<ViewKind>> = const { RefCell::new(Vec::new()) };

    /// Attaching parent, if any.
    static PARENT: RefCell<Vec<Option<usize>>> = const { RefCell::new(Vec::new()) };

    /// Children in attachment order.
    static CHILDREN: RefCell<Vec<Vec<usize>>> = const { RefCell::new(Vec::new()) };

    /// Lifecycle state.
    static LIFECYCLE: RefCell<Vec<Lifecycle>> = const { RefCell::new(Vec::new()) };
}

fn grow<T: Default>(arr: &mut Vec<T>, index: usize) {
    if arr.len() <= index {
        arr.resize_with(index + 1, T::default);
    }
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    KIND.with(|arr| grow(&mut arr.borrow_mut(), index));
    PARENT.with(|arr| grow(&mut arr.borrow_mut(), index));
    CHILDREN.with(|arr| grow(&mut arr.borrow_mut(), index));
    LIFECYCLE.with(|arr| grow(&mut arr.borrow_mut(), index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    KIND.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = ViewKind::None;
        }
    });
    PARENT.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = None;
        }
    });
    CHILDREN.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            slot.clear();
        }
    });
    LIFECYCLE.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = Lifecycle::Unattached;
        }
    });
}

/// Reset all arrays.
pub fn reset() {
    KIND.with(|arr| arr.borrow_mut().clear());
    PARENT.with(|arr| arr.borrow_mut().clear());
    CHILDREN.with(|arr| arr.borrow_mut().clear());
    LIFECYCLE.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Kind
// =============================================================================

pub fn get_kind(index: usize) -> ViewKind {
    KIND.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub fn set_kind(index: usize, kind: ViewKind) {
    KIND.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, index);
        arr[index] = kind;
    });
}

// =============================================================================
// Parent / Children
// =============================================================================

/// Get the attaching parent of a view.
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT.with(|arr| arr.borrow().get(index).copied().flatten())
}

/// Children of a view, in attachment order.
pub fn get_children(index: usize) -> Vec<usize> {
    CHILDREN.with(|arr| arr.borrow().get(index).cloned().unwrap_or_default())
}

/// Position of `child` among its parent's children.
pub fn child_position(parent: usize, child: usize) -> Option<usize> {
    CHILDREN.with(|arr| {
        arr.borrow()
            .get(parent)
            .and_then(|children| children.iter().position(|&c| c == child))
    })
}

/// Link `child` under `parent`, appending to the parent's children.
///
/// Callers validate first; this only writes.
pub(crate) fn link_child(parent: usize, child: usize) {
    PARENT.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, child);
        arr[child] = Some(parent);
    });
    CHILDREN.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, parent);
        arr[parent].push(child);
    });
}

/// Ancestors of a view, nearest first.
pub fn get_ancestors(index: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut current = get_parent_index(index);
    while let Some(parent) = current {
        out.push(parent);
        current = get_parent_index(parent);
    }
    out
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Raw lifecycle slot. Use [`crate::engine::lifecycle`] for the liveness-aware view.
pub(crate) fn get_lifecycle(index: usize) -> Lifecycle {
    LIFECYCLE.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub(crate) fn set_lifecycle(index: usize, state: Lifecycle) {
    LIFECYCLE.with(|arr| {
        let mut arr = arr.borrow_mut();
        grow(&mut arr, index);
        arr[index] = state;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_appends_in_order() {
        reset();
        ensure_capacity(2);

        link_child(0, 1);
        link_child(0, 2);
        assert_eq!(get_children(0), vec![1, 2]);
        assert_eq!(get_parent_index(2), Some(0));
        assert_eq!(child_position(0, 2), Some(1));
        assert_eq!(child_position(0, 0), None);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        reset();
        link_child(0, 1);
        link_child(1, 2);
        assert_eq!(get_ancestors(2), vec![1, 0]);
        assert!(get_ancestors(0).is_empty());
    }

    #[test]
    fn test_out_of_range_reads_default() {
        reset();
        assert_eq!(get_kind(42), ViewKind::None);
        assert_eq!(get_parent_index(42), None);
        assert!(get_children(42).is_empty());
    }
}
