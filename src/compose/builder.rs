//! Hierarchy Builder - attaches a composition spec under a parent view.
//!
//! Composition runs in two steps:
//!
//! 1. **Validate** the whole spec against the current tree. Any problem
//!    aborts before a single view is attached.
//! 2. **Apply** the spec in pre-order. A GROUP attaches its container, then
//!    pushes it as the parent context and expands its nested spec before the
//!    next sibling entry is touched.
//!
//! Constraint declaration is refused while step 2 runs (the parent context
//! stack is non-empty), so composition and constraints never interleave.

use std::collections::HashSet;

use tracing::debug;

use super::spec::{CompositionSpec, Entry};
use crate::engine::arrays::core;
use crate::engine::{enter_parent_context, get_current_parent_index, is_allocated};
use crate::error::HierarchyError;
use crate::types::Lifecycle;

// =============================================================================
// Entry Points
// =============================================================================

/// Attach every view described by `spec` under `parent`, in declaration order.
///
/// All-or-nothing: on error the tree is exactly as it was before the call.
pub fn compose(parent: usize, spec: &CompositionSpec) -> Result<(), HierarchyError> {
    let attached = validate(parent, spec)?;
    if attached == 0 {
        return Ok(());
    }

    {
        let _context = enter_parent_context(parent);
        apply(spec);
    }

    debug!(parent, attached, "composed subviews");
    Ok(())
}

/// Fluent front-end over [`compose`].
///
/// ```ignore
/// HierarchyBuilder::new(root)
///     .leaf(title)
///     .group(card, subviews![avatar, name])
///     .apply()?;
/// ```
#[derive(Debug, Clone)]
pub struct HierarchyBuilder {
    parent: usize,
    spec: CompositionSpec,
}

impl HierarchyBuilder {
    pub fn new(parent: usize) -> Self {
        Self {
            parent,
            spec: CompositionSpec::new(),
        }
    }

    pub fn leaf(mut self, view: usize) -> Self {
        self.spec.push(Entry::Leaf(view));
        self
    }

    pub fn group(mut self, container: usize, spec: impl Into<CompositionSpec>) -> Self {
        self.spec.push(Entry::group(container, spec));
        self
    }

    /// Append every entry of `spec` at this level.
    pub fn extend(mut self, spec: CompositionSpec) -> Self {
        for entry in spec.entries() {
            self.spec.push(entry.clone());
        }
        self
    }

    pub fn spec(&self) -> &CompositionSpec {
        &self.spec
    }

    pub fn apply(self) -> Result<(), HierarchyError> {
        compose(self.parent, &self.spec)
    }
}

// =============================================================================
// Closure Scope
// =============================================================================

/// Collects entries from nested closures.
///
/// Nothing is attached while the closures run; the collected spec is applied
/// by [`add_subviews`] once the outermost closure returns.
#[derive(Debug, Default)]
pub struct SubviewScope {
    spec: CompositionSpec,
}

impl SubviewScope {
    /// Add a direct child.
    pub fn add(&mut self, view: usize) -> &mut Self {
        self.spec.push(Entry::Leaf(view));
        self
    }

    /// Add `container` and describe its children in `children`.
    pub fn group(&mut self, container: usize, children: impl FnOnce(&mut SubviewScope)) -> &mut Self {
        let mut nested = SubviewScope::default();
        {
            let _context = enter_parent_context(container);
            children(&mut nested);
        }
        self.spec.push(Entry::group(container, nested.spec));
        self
    }
}

/// Closure-scoped composition.
///
/// ```ignore
/// add_subviews(root, |s| {
///     s.add(title);
///     s.group(card, |s| {
///         s.add(avatar).add(name);
///     });
/// })?;
/// ```
///
/// The parent context is held while the closures run, so declaring
/// constraints from inside them fails with
/// [`HierarchyError::CompositionInProgress`].
pub fn add_subviews(
    parent: usize,
    build: impl FnOnce(&mut SubviewScope),
) -> Result<(), HierarchyError> {
    let mut scope = SubviewScope::default();
    {
        let _context = enter_parent_context(parent);
        build(&mut scope);
    }
    compose(parent, &scope.spec)
}

// =============================================================================
// Validation
// =============================================================================

/// Check the whole spec before mutating anything. Returns the view count.
fn validate(parent: usize, spec: &CompositionSpec) -> Result<usize, HierarchyError> {
    if !is_allocated(parent) {
        return Err(HierarchyError::UnknownView { view: parent });
    }

    // Views that would end up above the entry being checked
    let mut lineage = core::get_ancestors(parent);
    lineage.push(parent);

    let mut seen = HashSet::new();
    validate_entries(spec, &mut lineage, &mut seen)?;
    Ok(seen.len())
}

fn validate_entries(
    spec: &CompositionSpec,
    lineage: &mut Vec<usize>,
    seen: &mut HashSet<usize>,
) -> Result<(), HierarchyError> {
    for entry in spec.entries() {
        let view = entry.view();

        if !is_allocated(view) {
            return Err(HierarchyError::UnknownView { view });
        }
        if lineage.contains(&view) {
            return Err(HierarchyError::Cycle { view });
        }
        if !seen.insert(view) {
            return Err(HierarchyError::DuplicateEntry { view });
        }
        if let Some(parent) = core::get_parent_index(view) {
            return Err(HierarchyError::AlreadyAttached { view, parent });
        }

        if let Entry::Group { container, spec } = entry {
            lineage.push(*container);
            validate_entries(spec, lineage, seen)?;
            lineage.pop();
        }
    }
    Ok(())
}

// =============================================================================
// Application
// =============================================================================

fn apply(spec: &CompositionSpec) {
    for entry in spec.entries() {
        attach(entry.view());

        if let Entry::Group { container, spec } = entry {
            let _context = enter_parent_context(*container);
            apply(spec);
        }
    }
}

fn attach(view: usize) {
    if let Some(parent) = get_current_parent_index() {
        core::link_child(parent, view);
        core::set_lifecycle(view, Lifecycle::Attached);
    }
}

// =============================================================================
// Tests
// =============================================================================
