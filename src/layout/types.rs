//! Layout output types.

use thiserror::Error;

use crate::constraints::Axis;

/// A view's rectangle relative to its parent's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Result of one layout pass, as parallel arrays indexed by view handle.
///
/// Only views inside the laid-out subtree have `laid_out[i] == true`; the
/// other slots are zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputedLayout {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub width: Vec<f32>,
    pub height: Vec<f32>,
    pub laid_out: Vec<bool>,
    /// Size of the root.
    pub content_width: f32,
    pub content_height: f32,
}

impl ComputedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(len: usize) -> Self {
        Self {
            x: vec![0.0; len],
            y: vec![0.0; len],
            width: vec![0.0; len],
            height: vec![0.0; len],
            laid_out: vec![false; len],
            content_width: 0.0,
            content_height: 0.0,
        }
    }

    /// Frame of a laid-out view.
    pub fn frame(&self, index: usize) -> Option<Frame> {
        if !self.laid_out.get(index).copied().unwrap_or(false) {
            return None;
        }
        Some(Frame {
            x: self.x[index],
            y: self.y[index],
            width: self.width[index],
            height: self.height[index],
        })
    }
}

/// Errors raised while handing the tree to the layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("view {0} is not allocated")]
    UnknownView(usize),

    #[error("layout cannot run while a composition is in progress")]
    CompositionInProgress,

    #[error("view {view} is centered on the {axis:?} axis but has no size on it")]
    UnresolvableCenter { view: usize, axis: Axis },

    #[error("layout engine error: {0}")]
    Engine(taffy::TaffyError),
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(err: taffy::TaffyError) -> Self {
        Self::Engine(err)
    }
}
