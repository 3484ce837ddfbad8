//! Constraint declaration phase.
//!
//! Once a view is attached, its spatial relationships are declared exactly
//! once through a [`ConstraintMaker`]:
//!
//! ```ignore
//! declare_constraints(title, |make| {
//!     make.edges_to_parent(Edges::TOP | Edges::HORIZONTAL, Grid::MARGIN)
//!         .height(24.0);
//! })?;
//! declare_constraints(body, |make| {
//!     make.below(title, Grid::GUTTER)
//!         .edges_to_parent(Edges::HORIZONTAL | Edges::BOTTOM, Grid::MARGIN);
//! })?;
//! ```
//!
//! Declarations only point from a view to its parent or to a sibling
//! attached before it. They are recorded here and interpreted by the layout
//! engine in [`crate::layout`].

mod maker;

pub use maker::ConstraintMaker;

use std::cell::RefCell;
use std::collections::HashMap;

use bitflags::bitflags;
use tracing::trace;

use crate::engine::arrays::core;
use crate::engine::{is_allocated, is_composing, lifecycle};
use crate::error::HierarchyError;
use crate::types::{Dimension, Lifecycle};

// =============================================================================
// Types
// =============================================================================

bitflags! {
    /// A set of view edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const RIGHT = 1 << 3;
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

impl Edges {
    /// The individual edges in this set, top-left-bottom-right.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |edge| self.contains(edge.flag()))
    }
}

/// A single view edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    pub fn flag(self) -> Edges {
        match self {
            Edge::Top => Edges::TOP,
            Edge::Left => Edges::LEFT,
            Edge::Bottom => Edges::BOTTOM,
            Edge::Right => Edges::RIGHT,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Left | Edge::Right => Axis::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// What a pinned edge is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The same edge of the parent, inset inward.
    Parent,
    /// The facing edge of a sibling attached earlier: `Top` sits below the
    /// sibling's bottom, `Left` to the right of its right edge, and so on.
    Sibling(usize),
}

/// One spatial declaration for a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    Pin {
        edge: Edge,
        target: Target,
        offset: f32,
    },
    Size {
        axis: Axis,
        value: Dimension,
    },
    /// Center on the parent along `axis`.
    Center { axis: Axis },
}

// =============================================================================
// Storage
// =============================================================================

thread_local! {
    static CONSTRAINTS: RefCell<HashMap<usize, Vec<Constraint>>> = RefCell::new(HashMap::new());
}

/// Constraints declared for a view, in declaration order.
pub fn constraints_of(view: usize) -> Vec<Constraint> {
    CONSTRAINTS.with(|map| map.borrow().get(&view).cloned().unwrap_or_default())
}

/// Drop the constraints of a released view.
pub(crate) fn clear_constraints(view: usize) {
    CONSTRAINTS.with(|map| {
        map.borrow_mut().remove(&view);
    });
}

pub(crate) fn reset_constraints() {
    CONSTRAINTS.with(|map| map.borrow_mut().clear());
}

// =============================================================================
// Declaration
// =============================================================================

/// Declare the constraints of an attached view.
///
/// Fails if a composition is still in progress, if the view is not attached,
/// if it was already constrained, or if the closure declares nothing. A view
/// that should stay in flow layout is simply never declared. Sibling targets must share the view's
/// parent and come before it in attachment order. On success the view moves
/// to [`Lifecycle::Constrained`].
pub fn declare_constraints(
    view: usize,
    declare: impl FnOnce(&mut ConstraintMaker),
) -> Result<(), HierarchyError> {
    if is_composing() {
        return Err(HierarchyError::CompositionInProgress);
    }

    match lifecycle(view) {
        Lifecycle::Attached => {}
        Lifecycle::Unattached => return Err(HierarchyError::NotAttached { view }),
        Lifecycle::Constrained => return Err(HierarchyError::AlreadyConstrained { view }),
        Lifecycle::Destroyed => return Err(HierarchyError::UnknownView { view }),
    }
    let Some(parent) = core::get_parent_index(view) else {
        return Err(HierarchyError::NotAttached { view });
    };

    let mut maker = ConstraintMaker::new(view);
    declare(&mut maker);
    let constraints = maker.into_constraints();
    if constraints.is_empty() {
        return Err(HierarchyError::EmptyDeclaration { view });
    }

    for constraint in &constraints {
        if let Constraint::Pin {
            target: Target::Sibling(sibling),
            ..
        } = *constraint
        {
            check_sibling(view, parent, sibling)?;
        }
    }

    trace!(view, count = constraints.len(), "declared constraints");
    CONSTRAINTS.with(|map| {
        map.borrow_mut().insert(view, constraints);
    });
    core::set_lifecycle(view, Lifecycle::Constrained);
    Ok(())
}

fn check_sibling(view: usize, parent: usize, sibling: usize) -> Result<(), HierarchyError> {
    let invalid = |reason| HierarchyError::InvalidAnchor {
        view,
        anchor: sibling,
        reason,
    };

    if sibling == view {
        return Err(invalid("a view cannot anchor to itself"));
    }
    if !is_allocated(sibling) || core::get_parent_index(sibling) != Some(parent) {
        return Err(invalid("anchor is not a sibling"));
    }
    let view_pos = core::child_position(parent, view);
    let sibling_pos = core::child_position(parent, sibling);
    if sibling_pos > view_pos {
        return Err(invalid("sibling is attached after the view"));
    }
    Ok(())
}
