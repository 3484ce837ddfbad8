//! Layout - hands the composed, constrained tree to the layout engine.
//!
//! # Architecture
//!
//! The engine is [Taffy](https://github.com/DioxusLabs/taffy). The bridge:
//!
//! 1. Builds a Taffy node per view under the root, children in attachment order
//! 2. Turns each view's declared constraints into a Taffy style
//! 3. Measures labels by their text
//! 4. Resolves sibling pins against computed sibling frames
//! 5. Extracts frames back into parallel arrays
//!
//! # Example
//!
//! ```ignore
//! use spark_compose::layout::compute_layout;
//!
//! let layout = compute_layout(root, 375.0, 667.0)?;
//! let title_frame = layout.frame(title);
//! ```

mod taffy_bridge;
mod text_measure;
mod types;

pub use taffy_bridge::compute_layout;
pub use text_measure::*;
pub use types::*;
