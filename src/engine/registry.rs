//! View Registry - Handle allocation for parallel arrays.
//!
//! Manages the lifecycle of view handles:
//! - ID ↔ Index bidirectional mapping
//! - Monotonic handles: a destroyed handle is never handed out again
//! - Parent context stack for nested composition
//! - Cascading destruction from a root

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use super::arrays;
use super::arrays::core;
use crate::constraints;
use crate::error::HierarchyError;
use crate::types::Lifecycle;

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Map view ID to array index.
    static ID_TO_INDEX: RefCell<HashMap<String, usize>> = RefCell::new(HashMap::new());

    /// Map array index to view ID.
    static INDEX_TO_ID: RefCell<HashMap<usize, String>> = RefCell::new(HashMap::new());

    /// Set of currently allocated indices.
    static ALLOCATED_INDICES: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());

    /// Next index to allocate. Never rewound outside `reset_registry`.
    static NEXT_INDEX: RefCell<usize> = const { RefCell::new(0) };

    /// Counter for generating unique IDs.
    static ID_COUNTER: RefCell<usize> = const { RefCell::new(0) };

    /// Stack of parent indices while a composition is being applied.
    static PARENT_STACK: RefCell<Vec<usize>> = const { RefCell::new(Vec::new()) };

    /// Destroy callbacks registered per index.
    static DESTROY_CALLBACKS: RefCell<HashMap<usize, Vec<Box<dyn FnOnce()>>>> = RefCell::new(HashMap::new());
}

// =============================================================================
// Parent Context Stack
// =============================================================================

/// Get the parent views are currently being attached to.
pub fn get_current_parent_index() -> Option<usize> {
    PARENT_STACK.with(|stack| stack.borrow().last().copied())
}

/// Push a parent index onto the stack.
pub fn push_parent_context(index: usize) {
    PARENT_STACK.with(|stack| stack.borrow_mut().push(index))
}

/// Pop a parent index from the stack.
pub fn pop_parent_context() {
    PARENT_STACK.with(|stack| {
        stack.borrow_mut().pop();
    })
}

/// A pushed parent context, popped when dropped.
///
/// Keeps the stack balanced when the code running under the context panics.
#[must_use = "the parent context is popped as soon as the guard is dropped"]
pub struct ParentContextGuard {
    index: usize,
}

impl ParentContextGuard {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Drop for ParentContextGuard {
    fn drop(&mut self) {
        pop_parent_context();
    }
}

/// Push `index` as the current parent for the lifetime of the returned guard.
pub fn enter_parent_context(index: usize) -> ParentContextGuard {
    push_parent_context(index);
    ParentContextGuard { index }
}

/// True while a composition is being applied.
///
/// The constraint phase refuses to run while this holds.
pub fn is_composing() -> bool {
    PARENT_STACK.with(|stack| !stack.borrow().is_empty())
}

// =============================================================================
// Index Allocation
// =============================================================================

/// Allocate a handle for a new view.
///
/// # Arguments
/// * `id` - Optional view ID. If not provided, one is generated.
///
/// # Returns
/// The allocated index. If `id` names a live view, that view's index.
pub fn allocate_view(id: Option<&str>) -> usize {
    let view_id = match id {
        Some(id) => id.to_string(),
        None => ID_COUNTER.with(|counter| {
            let mut counter = counter.borrow_mut();
            let id = format!("v{}", *counter);
            *counter += 1;
            id
        }),
    };

    let existing = ID_TO_INDEX.with(|map| map.borrow().get(&view_id).copied());
    if let Some(index) = existing {
        return index;
    }

    let index = NEXT_INDEX.with(|next| {
        let mut next = next.borrow_mut();
        let index = *next;
        *next += 1;
        index
    });

    ID_TO_INDEX.with(|map| {
        map.borrow_mut().insert(view_id.clone(), index);
    });
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().insert(index);
    });

    arrays::ensure_all_capacity(index);
    core::set_lifecycle(index, Lifecycle::Unattached);

    trace!(index, id = %view_id, "allocated view");
    INDEX_TO_ID.with(|map| {
        map.borrow_mut().insert(index, view_id);
    });

    index
}

/// Allocate a handle for a view that must not exist yet.
///
/// Unlike [`allocate_view`], a live `id` is an error rather than a lookup,
/// so a second primitive can never take over an existing view.
pub fn create_view(id: Option<&str>) -> Result<usize, HierarchyError> {
    if let Some(id) = id {
        if let Some(view) = get_index(id) {
            return Err(HierarchyError::DuplicateId {
                id: id.to_string(),
                view,
            });
        }
    }
    Ok(allocate_view(id))
}

/// Destroy a root view and everything it owns.
///
/// Attached views are owned by their parent and go away with it, so only a
/// view without a parent can be destroyed directly.
pub fn destroy_view(index: usize) -> Result<(), HierarchyError> {
    if !is_allocated(index) {
        return Err(HierarchyError::UnknownView { view: index });
    }
    if let Some(parent) = core::get_parent_index(index) {
        return Err(HierarchyError::NotARoot { view: index, parent });
    }

    let released = release_subtree(index);
    debug!(root = index, released, "destroyed view tree");
    Ok(())
}

/// Release a view and its descendants, children first. Returns the count.
fn release_subtree(index: usize) -> usize {
    let mut released = 0;
    for child in core::get_children(index) {
        released += release_subtree(child);
    }

    run_destroy_callbacks(index);
    constraints::clear_constraints(index);

    if let Some(id) = INDEX_TO_ID.with(|map| map.borrow_mut().remove(&index)) {
        ID_TO_INDEX.with(|map| {
            map.borrow_mut().remove(&id);
        });
    }
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().remove(&index);
    });

    arrays::clear_all_at_index(index);

    released + 1
}

// =============================================================================
// Destroy Callbacks
// =============================================================================

/// Register a callback to run when the view at `index` is destroyed.
pub fn on_destroy(index: usize, callback: impl FnOnce() + 'static) {
    DESTROY_CALLBACKS.with(|callbacks| {
        callbacks
            .borrow_mut()
            .entry(index)
            .or_default()
            .push(Box::new(callback));
    });
}

fn run_destroy_callbacks(index: usize) {
    let callbacks = DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().remove(&index));
    if let Some(callbacks) = callbacks {
        for callback in callbacks {
            callback();
        }
    }
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for a view ID.
pub fn get_index(id: &str) -> Option<usize> {
    ID_TO_INDEX.with(|map| map.borrow().get(id).copied())
}

/// Get ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    INDEX_TO_ID.with(|map| map.borrow().get(&index).cloned())
}

/// Check if an index is currently allocated.
pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.borrow().contains(&index))
}

/// Get the count of currently allocated views.
pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.borrow().len())
}

/// Lifecycle state of a handle. Handles that are not alive report `Destroyed`.
pub fn lifecycle(index: usize) -> Lifecycle {
    if is_allocated(index) {
        core::get_lifecycle(index)
    } else {
        Lifecycle::Destroyed
    }
}

/// Children of a view, in attachment order.
pub fn children(index: usize) -> Vec<usize> {
    core::get_children(index)
}

/// Attaching parent of a view.
pub fn parent(index: usize) -> Option<usize> {
    core::get_parent_index(index)
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state (for testing).
pub fn reset_registry() {
    ID_TO_INDEX.with(|map| map.borrow_mut().clear());
    INDEX_TO_ID.with(|map| map.borrow_mut().clear());
    ALLOCATED_INDICES.with(|set| set.borrow_mut().clear());
    NEXT_INDEX.with(|next| *next.borrow_mut() = 0);
    ID_COUNTER.with(|counter| *counter.borrow_mut() = 0);
    PARENT_STACK.with(|stack| stack.borrow_mut().clear());
    DESTROY_CALLBACKS.with(|callbacks| callbacks.borrow_mut().clear());
    constraints::reset_constraints();
    arrays::reset_all_arrays();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_view() {
        reset_registry();

        let idx1 = allocate_view(None);
        let idx2 = allocate_view(None);
        let idx3 = allocate_view(Some("header"));

        assert_eq!(idx1, 0);
        assert_eq!(idx2, 1);
        assert_eq!(idx3, 2);
        assert!(is_allocated(2));
        assert!(!is_allocated(3));
        assert_eq!(get_allocated_count(), 3);
        assert_eq!(lifecycle(idx1), Lifecycle::Unattached);
    }

    #[test]
    fn test_live_id_returns_same_view() {
        reset_registry();

        let a = allocate_view(Some("title"));
        let b = allocate_view(Some("title"));
        assert_eq!(a, b);
        assert_eq!(get_allocated_count(), 1);
    }

    #[test]
    fn test_create_view_rejects_live_id() {
        reset_registry();

        let title = create_view(Some("title")).unwrap();
        let err = create_view(Some("title")).unwrap_err();
        assert_eq!(
            err,
            HierarchyError::DuplicateId {
                id: "title".to_string(),
                view: title
            }
        );
        assert_eq!(get_allocated_count(), 1);

        // Free again once the holder is gone
        destroy_view(title).unwrap();
        let again = create_view(Some("title")).unwrap();
        assert_ne!(again, title);
    }

    #[test]
    fn test_id_mapping() {
        reset_registry();

        let idx = allocate_view(Some("avatar"));
        assert_eq!(get_index("avatar"), Some(idx));
        assert_eq!(get_id(idx), Some("avatar".to_string()));

        let auto = allocate_view(None);
        assert_eq!(get_id(auto), Some("v0".to_string()));
    }

    #[test]
    fn test_destroyed_handle_stays_dead() {
        reset_registry();

        let keep = allocate_view(None);
        let gone = allocate_view(None);

        destroy_view(gone).unwrap();
        assert!(!is_allocated(gone));
        assert_eq!(lifecycle(gone), Lifecycle::Destroyed);
        assert!(is_allocated(keep));

        let fresh = allocate_view(None);
        assert_ne!(fresh, gone);
        assert!(!is_allocated(gone));
        assert_eq!(lifecycle(fresh), Lifecycle::Unattached);
    }

    #[test]
    fn test_handles_not_rewound_when_registry_empties() {
        reset_registry();

        let only = allocate_view(None);
        destroy_view(only).unwrap();
        assert_eq!(get_allocated_count(), 0);

        let next = allocate_view(None);
        assert_ne!(next, only);
        assert_eq!(lifecycle(only), Lifecycle::Destroyed);
    }

    #[test]
    fn test_destroy_cascades_to_children() {
        reset_registry();

        let root = allocate_view(None);
        let child = allocate_view(None);
        let grandchild = allocate_view(None);
        core::link_child(root, child);
        core::link_child(child, grandchild);

        destroy_view(root).unwrap();
        assert_eq!(get_allocated_count(), 0);
        assert_eq!(lifecycle(grandchild), Lifecycle::Destroyed);
    }

    #[test]
    fn test_destroy_attached_view_is_rejected() {
        reset_registry();

        let root = allocate_view(None);
        let child = allocate_view(None);
        core::link_child(root, child);

        let err = destroy_view(child).unwrap_err();
        assert_eq!(err, HierarchyError::NotARoot { view: child, parent: root });
        assert!(is_allocated(child));
        assert_eq!(children(root), vec![child]);
    }

    #[test]
    fn test_destroy_unknown_view() {
        reset_registry();
        assert_eq!(
            destroy_view(7).unwrap_err(),
            HierarchyError::UnknownView { view: 7 }
        );
    }

    #[test]
    fn test_parent_context() {
        reset_registry();

        assert_eq!(get_current_parent_index(), None);
        assert!(!is_composing());

        push_parent_context(5);
        push_parent_context(10);
        assert_eq!(get_current_parent_index(), Some(10));
        assert!(is_composing());

        pop_parent_context();
        assert_eq!(get_current_parent_index(), Some(5));

        pop_parent_context();
        assert_eq!(get_current_parent_index(), None);
        assert!(!is_composing());
    }

    #[test]
    fn test_parent_context_guard_pops_on_drop() {
        reset_registry();

        {
            let outer = enter_parent_context(3);
            let _inner = enter_parent_context(4);
            assert_eq!(outer.index(), 3);
            assert_eq!(get_current_parent_index(), Some(4));
        }
        assert!(!is_composing());
    }

    #[test]
    fn test_parent_context_guard_pops_on_panic() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        reset_registry();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = enter_parent_context(1);
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!is_composing());
    }

    #[test]
    fn test_destroy_callbacks_run_for_descendants() {
        use std::cell::Cell;
        use std::rc::Rc;

        reset_registry();

        let count = Rc::new(Cell::new(0));
        let root = allocate_view(None);
        let child = allocate_view(None);
        core::link_child(root, child);

        for idx in [root, child] {
            let count = count.clone();
            on_destroy(idx, move || count.set(count.get() + 1));
        }

        destroy_view(root).unwrap();
        assert_eq!(count.get(), 2);
    }
}
