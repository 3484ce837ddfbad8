//! Hierarchical subview composition.
//!
//! A [`CompositionSpec`] lists the children of a view as LEAF entries (attach
//! directly) and GROUP entries (attach a container, then its own children).
//! [`compose`] validates the whole spec and then attaches it in pre-order:
//!
//! ```text
//! subviews![x, y => [a, b], z]   applied to root
//!
//! root ─┬─ x
//!       ├─ y ─┬─ a
//!       │     └─ b
//!       └─ z
//! ```
//!
//! Constraints are declared afterwards, see [`crate::constraints`].

mod builder;
mod spec;

pub use builder::{add_subviews, compose, HierarchyBuilder, SubviewScope};
pub use spec::{CompositionSpec, Entry};
