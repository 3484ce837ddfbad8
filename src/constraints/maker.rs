//! Constraint Maker - the fluent surface handed to `declare_constraints`.

use super::{Axis, Constraint, Edge, Edges, Target};
use crate::types::Dimension;

/// Collects the declarations for one view.
#[derive(Debug)]
pub struct ConstraintMaker {
    view: usize,
    constraints: Vec<Constraint>,
}

impl ConstraintMaker {
    pub(super) fn new(view: usize) -> Self {
        Self {
            view,
            constraints: Vec::new(),
        }
    }

    /// The view being constrained.
    pub fn view(&self) -> usize {
        self.view
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub(super) fn into_constraints(self) -> Vec<Constraint> {
        self.constraints
    }

    /// Pin `edge` to `target`, `offset` away from it.
    pub fn pin(&mut self, edge: Edge, target: Target, offset: f32) -> &mut Self {
        self.constraints.push(Constraint::Pin { edge, target, offset });
        self
    }

    /// Pin each edge in `edges` to the same edge of the parent, inset by `inset`.
    pub fn edges_to_parent(&mut self, edges: Edges, inset: f32) -> &mut Self {
        for edge in edges.edges() {
            self.pin(edge, Target::Parent, inset);
        }
        self
    }

    /// Top edge `spacing` below the bottom of an earlier sibling.
    pub fn below(&mut self, sibling: usize, spacing: f32) -> &mut Self {
        self.pin(Edge::Top, Target::Sibling(sibling), spacing)
    }

    /// Left edge `spacing` after the right edge of an earlier sibling.
    pub fn after(&mut self, sibling: usize, spacing: f32) -> &mut Self {
        self.pin(Edge::Left, Target::Sibling(sibling), spacing)
    }

    /// Bottom edge `spacing` above the top of an earlier sibling.
    pub fn above(&mut self, sibling: usize, spacing: f32) -> &mut Self {
        self.pin(Edge::Bottom, Target::Sibling(sibling), spacing)
    }

    /// Right edge `spacing` before the left edge of an earlier sibling.
    pub fn before(&mut self, sibling: usize, spacing: f32) -> &mut Self {
        self.pin(Edge::Right, Target::Sibling(sibling), spacing)
    }

    pub fn width(&mut self, value: impl Into<Dimension>) -> &mut Self {
        self.constraints.push(Constraint::Size {
            axis: Axis::Horizontal,
            value: value.into(),
        });
        self
    }

    pub fn height(&mut self, value: impl Into<Dimension>) -> &mut Self {
        self.constraints.push(Constraint::Size {
            axis: Axis::Vertical,
            value: value.into(),
        });
        self
    }

    pub fn size(&mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> &mut Self {
        self.width(width).height(height)
    }

    /// Center on the parent horizontally.
    pub fn center_x(&mut self) -> &mut Self {
        self.constraints.push(Constraint::Center {
            axis: Axis::Horizontal,
        });
        self
    }

    /// Center on the parent vertically.
    pub fn center_y(&mut self) -> &mut Self {
        self.constraints.push(Constraint::Center {
            axis: Axis::Vertical,
        });
        self
    }

    /// Center on the parent on both axes.
    pub fn center_in_parent(&mut self) -> &mut Self {
        self.center_x().center_y()
    }
}
