//! # spark-compose
//!
//! Declarative view-hierarchy composition.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! reactive appearance and [Taffy](https://github.com/DioxusLabs/taffy) for layout.
//!
//! ## Architecture
//!
//! Views are indices into columnar arrays rather than objects. Building a
//! screen is three phases, in order:
//!
//! ```text
//! create views → compose (attach, pre-order, all-or-nothing) → declare constraints → compute_layout
//! ```
//!
//! Composition either attaches every view in a [`CompositionSpec`] or none of
//! them. Re-attaching a view or making a view its own ancestor is rejected
//! with an [`ErrorKind::InvalidState`] error.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Dimension, ViewKind, Lifecycle)
//! - [`engine`] - View registry and parallel arrays
//! - [`compose`] - Composition specs and the hierarchy builder
//! - [`constraints`] - Constraint declaration
//! - [`layout`] - Taffy bridge that turns constraints into frames
//! - [`appearance`] - Spacing grid, palettes and fonts
//! - [`primitives`] - `view` and `label`

pub mod appearance;
pub mod compose;
pub mod constraints;
pub mod engine;
pub mod error;
pub mod layout;
pub mod primitives;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{ErrorKind, HierarchyError};

pub use engine::{
    allocate_view, children, create_view, destroy_view, get_allocated_count, get_id, get_index,
    is_allocated, is_composing, lifecycle, on_destroy, parent, reset_registry,
};

pub use compose::{add_subviews, compose, CompositionSpec, Entry, HierarchyBuilder, SubviewScope};

pub use constraints::{
    constraints_of, declare_constraints, Axis, Constraint, ConstraintMaker, Edge, Edges, Target,
};

pub use layout::{compute_layout, measure_text, ComputedLayout, Frame, LayoutError};

pub use appearance::{
    active_appearance, appearance_signal, reset_appearance, set_appearance,
    set_custom_appearance, Appearance, Font, FontWeight, Grid,
};

pub use primitives::{label, view, LabelProps, Then, ViewProps};
