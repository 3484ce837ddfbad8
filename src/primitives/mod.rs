//! Primitives - the two kinds of view the tree is built from.
//!
//! - [`view`] - Plain container with a background
//! - [`label`] - Text, measured by its content at layout time
//!
//! # Architecture
//!
//! Views are indices into parallel arrays. Each primitive:
//! 1. Allocates a fresh index from the registry (a live id is an error)
//! 2. Sets its kind in the core arrays
//! 3. Writes its visual props, falling back to the active appearance
//! 4. Returns the handle, unattached
//!
//! Attaching is the job of [`compose`](crate::compose::compose); a primitive
//! never looks at the current parent context.
//!
//! ```ignore
//! use spark_compose::primitives::{label, view, LabelProps, Then, ViewProps};
//!
//! let card = view(ViewProps::default())?;
//! let title = label(LabelProps::default().then(|p| p.text = "Hello".into()))?;
//! ```

mod label;
mod then;
mod types;
mod view;

pub use label::label;
pub use then::Then;
pub use types::*;
pub use view::view;
