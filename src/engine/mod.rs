//! View engine - registry and parallel arrays.
//!
//! The engine manages the core data structures:
//! - Registry: Handle allocation, ID mapping, parent context, destruction
//! - Arrays: Parallel arrays for per-view state
//!
//! # Architecture
//!
//! Views are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: View  (parent=None, children=[1, 2], lifecycle=Unattached)
//! Index 1: Label (parent=0,    children=[],     lifecycle=Constrained)
//! Index 2: View  (parent=0,    children=[],     lifecycle=Attached)
//! ```
//!
//! All state is thread-local. A tree lives on the thread that built it.

mod registry;
pub mod arrays;

pub use registry::*;
