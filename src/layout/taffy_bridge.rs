//! Taffy Bridge - Integration with the Taffy layout engine
//!
//! Converts declared constraints to Taffy styles, runs layout computation,
//! and extracts results back to ComputedLayout.
//!
//! Mapping:
//! - A constrained view is absolutely positioned inside its parent.
//! - Parent pins become insets; sizes become sizes.
//! - Centering becomes a 50% inset pulled back by half the view's size.
//! - Sibling pins need the sibling's frame, so they are filled in after a
//!   first pass, one view at a time in attachment order, re-running the
//!   engine after each.
//! - Unconstrained views stay in flow and stack in a column.

use std::collections::HashMap;

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection, LengthPercentageAuto,
    NodeId, Position, Size, Style, TaffyTree,
};
use tracing::trace;

use crate::appearance::active_appearance;
use crate::constraints::{constraints_of, Axis, Constraint, Edge, Target};
use crate::engine::arrays::{core, visual};
use crate::engine::{is_allocated, is_composing};
use crate::types::{Dimension, ViewKind};

use super::text_measure::measure_text;
use super::types::{ComputedLayout, LayoutError};

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

/// Convert our Dimension to Taffy's Dimension.
fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Points(n) => TaffyDimension::Length(n),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn set_inset(style: &mut Style, edge: Edge, value: LengthPercentageAuto) {
    match edge {
        Edge::Top => style.inset.top = value,
        Edge::Left => style.inset.left = value,
        Edge::Bottom => style.inset.bottom = value,
        Edge::Right => style.inset.right = value,
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

fn root_style(width: f32, height: f32) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        size: Size {
            width: TaffyDimension::Length(width),
            height: TaffyDimension::Length(height),
        },
        ..Default::default()
    }
}

/// Build a Taffy Style from a view's declared constraints.
fn build_style(idx: usize) -> Result<Style, LayoutError> {
    let constraints = constraints_of(idx);

    let mut style = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        ..Default::default()
    };
    if constraints.is_empty() {
        return Ok(style);
    }
    style.position = Position::Absolute;

    let mut width = Dimension::Auto;
    let mut height = Dimension::Auto;
    let mut center = Vec::new();

    for constraint in constraints {
        match constraint {
            Constraint::Pin {
                edge,
                target: Target::Parent,
                offset,
            } => set_inset(&mut style, edge, LengthPercentageAuto::Length(offset)),
            // Filled in once the sibling has a frame
            Constraint::Pin {
                target: Target::Sibling(_),
                ..
            } => {}
            Constraint::Size { axis, value } => match axis {
                Axis::Horizontal => width = value,
                Axis::Vertical => height = value,
            },
            Constraint::Center { axis } => center.push(axis),
        }
    }

    style.size = Size {
        width: to_taffy_dimension(width),
        height: to_taffy_dimension(height),
    };

    for axis in center {
        let extent = match axis {
            Axis::Horizontal => width,
            Axis::Vertical => height,
        };
        let (inset, margin) = match extent {
            Dimension::Points(n) => (
                LengthPercentageAuto::Percent(0.5),
                LengthPercentageAuto::Length(-n / 2.0),
            ),
            Dimension::Percent(p) => (
                LengthPercentageAuto::Percent((50.0 - p / 2.0) / 100.0),
                LengthPercentageAuto::Length(0.0),
            ),
            Dimension::Auto => return Err(LayoutError::UnresolvableCenter { view: idx, axis }),
        };
        match axis {
            Axis::Horizontal => {
                style.inset.left = inset;
                style.margin.left = margin;
            }
            Axis::Vertical => {
                style.inset.top = inset;
                style.margin.top = margin;
            }
        }
    }

    Ok(style)
}

// =============================================================================
// TEXT MEASUREMENT
// =============================================================================

/// Measure function for label content.
fn measure_label(idx: usize, known_dimensions: Size<Option<f32>>) -> Size<f32> {
    let content = visual::get_text_content(idx);
    let font_size = visual::get_font(idx)
        .map(|font| font.size)
        .unwrap_or_else(|| active_appearance().body.size);
    let (width, height) = measure_text(&content, font_size);

    Size {
        width: known_dimensions.width.unwrap_or(width),
        height: known_dimensions.height.unwrap_or(height),
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Views under `root` in pre-order, root first.
fn subtree(root: usize) -> Vec<usize> {
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(idx) = stack.pop() {
        order.push(idx);
        stack.extend(core::get_children(idx).into_iter().rev());
    }
    order
}

/// Compute frames for every view under `root`.
///
/// # Arguments
///
/// * `root` - View whose subtree is laid out; it fills the available space
/// * `width` - Available width
/// * `height` - Available height
///
/// # Returns
///
/// Frames relative to each view's parent.
pub fn compute_layout(root: usize, width: f32, height: f32) -> Result<ComputedLayout, LayoutError> {
    if is_composing() {
        return Err(LayoutError::CompositionInProgress);
    }
    if !is_allocated(root) {
        return Err(LayoutError::UnknownView(root));
    }

    let order = subtree(root);
    let array_size = order.iter().max().copied().unwrap_or(root) + 1;
    let mut result = ComputedLayout::with_capacity(array_size);

    let mut tree: TaffyTree<usize> = TaffyTree::new();
    let mut index_to_node: HashMap<usize, NodeId> = HashMap::new();

    // First pass: Create all nodes (without children)
    for &idx in &order {
        let style = if idx == root {
            root_style(width, height)
        } else {
            build_style(idx)?
        };

        let node_id = if core::get_kind(idx) == ViewKind::Label {
            tree.new_leaf_with_context(style, idx)?
        } else {
            tree.new_leaf(style)?
        };
        index_to_node.insert(idx, node_id);
    }

    // Second pass: Parent-child relationships in attachment order
    for &idx in &order {
        let parent_node = index_to_node[&idx];
        for child in core::get_children(idx) {
            tree.add_child(parent_node, index_to_node[&child])?;
        }
    }

    let available = Size {
        width: AvailableSpace::Definite(width),
        height: AvailableSpace::Definite(height),
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          _available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        if let Some(&mut idx) = context {
            measure_label(idx, known_dimensions)
        } else {
            Size::ZERO
        }
    };

    let root_node = index_to_node[&root];
    tree.compute_layout_with_measure(root_node, available, &mut measure_fn)?;

    // Sibling pins, in attachment order
    let mut passes = 1;
    for &idx in order.iter().skip(1) {
        let pins: Vec<(Edge, usize, f32)> = constraints_of(idx)
            .into_iter()
            .filter_map(|constraint| match constraint {
                Constraint::Pin {
                    edge,
                    target: Target::Sibling(sibling),
                    offset,
                } => Some((edge, sibling, offset)),
                _ => None,
            })
            .collect();
        if pins.is_empty() {
            continue;
        }
        let Some(parent) = core::get_parent_index(idx) else {
            continue;
        };

        let node_id = index_to_node[&idx];
        let parent_size = tree.layout(index_to_node[&parent])?.size;
        let mut style = tree.style(node_id)?.clone();

        for (edge, sibling, offset) in pins {
            let Some(&sibling_node) = index_to_node.get(&sibling) else {
                continue;
            };
            let sib = tree.layout(sibling_node)?;
            let value = match edge {
                Edge::Top => sib.location.y + sib.size.height + offset,
                Edge::Left => sib.location.x + sib.size.width + offset,
                Edge::Bottom => parent_size.height - sib.location.y + offset,
                Edge::Right => parent_size.width - sib.location.x + offset,
            };
            set_inset(&mut style, edge, LengthPercentageAuto::Length(value));
        }

        tree.set_style(node_id, style)?;
        tree.compute_layout_with_measure(root_node, available, &mut measure_fn)?;
        passes += 1;
    }

    // Extract results
    for &idx in &order {
        let layout = tree.layout(index_to_node[&idx])?;
        result.x[idx] = layout.location.x;
        result.y[idx] = layout.location.y;
        result.width[idx] = layout.size.width;
        result.height[idx] = layout.size.height;
        result.laid_out[idx] = true;
    }
    result.content_width = result.width[root];
    result.content_height = result.height[root];

    trace!(root, views = order.len(), passes, "computed layout");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::constraints::{declare_constraints, Edges};
    use crate::engine::{allocate_view, push_parent_context, pop_parent_context, reset_registry};
    use crate::primitives::{label, LabelProps};
    use crate::subviews;

    fn setup() -> usize {
        reset_registry();
        allocate_view(Some("root"))
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_root_fills_available_space() {
        let root = setup();

        let layout = compute_layout(root, 320.0, 480.0).unwrap();
        assert_eq!(layout.content_width, 320.0);
        assert_eq!(layout.content_height, 480.0);
        assert_eq!(layout.frame(root).map(|f| f.x), Some(0.0));
    }

    #[test]
    fn test_edges_to_parent_with_inset() {
        let root = setup();
        let card = allocate_view(None);
        compose(root, &subviews![card]).unwrap();

        declare_constraints(card, |make| {
            make.edges_to_parent(Edges::ALL, 16.0);
        })
        .unwrap();

        let frame = compute_layout(root, 320.0, 480.0).unwrap().frame(card).unwrap();
        assert!(approx(frame.x, 16.0));
        assert!(approx(frame.y, 16.0));
        assert!(approx(frame.width, 288.0));
        assert!(approx(frame.height, 448.0));
    }

    #[test]
    fn test_fixed_size_pinned_bottom_right() {
        let root = setup();
        let badge = allocate_view(None);
        compose(root, &subviews![badge]).unwrap();

        declare_constraints(badge, |make| {
            make.edges_to_parent(Edges::BOTTOM | Edges::RIGHT, 8.0).size(40.0, 20.0);
        })
        .unwrap();

        let frame = compute_layout(root, 200.0, 100.0).unwrap().frame(badge).unwrap();
        assert!(approx(frame.x, 152.0));
        assert!(approx(frame.y, 72.0));
        assert!(approx(frame.width, 40.0));
    }

    #[test]
    fn test_center_in_parent() {
        let root = setup();
        let spinner = allocate_view(None);
        let banner = allocate_view(None);
        compose(root, &subviews![spinner, banner]).unwrap();

        declare_constraints(spinner, |make| {
            make.size(40.0, 40.0).center_in_parent();
        })
        .unwrap();
        declare_constraints(banner, |make| {
            make.width(Dimension::Percent(50.0)).height(10.0).center_x();
        })
        .unwrap();

        let layout = compute_layout(root, 200.0, 100.0).unwrap();
        let spinner = layout.frame(spinner).unwrap();
        assert!(approx(spinner.x, 80.0));
        assert!(approx(spinner.y, 30.0));

        let banner = layout.frame(banner).unwrap();
        assert!(approx(banner.x, 50.0));
        assert!(approx(banner.width, 100.0));
    }

    #[test]
    fn test_center_without_size_is_error() {
        let root = setup();
        let view = allocate_view(None);
        compose(root, &subviews![view]).unwrap();
        declare_constraints(view, |make| {
            make.center_x();
        })
        .unwrap();

        let err = compute_layout(root, 100.0, 100.0).unwrap_err();
        assert!(matches!(err, LayoutError::UnresolvableCenter { axis: Axis::Horizontal, .. }));
    }

    #[test]
    fn test_sibling_chain() {
        let root = setup();
        let header = allocate_view(None);
        let body = allocate_view(None);
        let footer = allocate_view(None);
        compose(root, &subviews![header, body, footer]).unwrap();

        declare_constraints(header, |make| {
            make.edges_to_parent(Edges::TOP | Edges::HORIZONTAL, 0.0).height(50.0);
        })
        .unwrap();
        declare_constraints(body, |make| {
            make.below(header, 8.0)
                .edges_to_parent(Edges::HORIZONTAL, 0.0)
                .height(100.0);
        })
        .unwrap();
        declare_constraints(footer, |make| {
            make.below(body, 4.0).width(30.0).height(10.0);
        })
        .unwrap();

        let layout = compute_layout(root, 300.0, 600.0).unwrap();
        assert!(approx(layout.frame(body).unwrap().y, 58.0));
        assert!(approx(layout.frame(footer).unwrap().y, 162.0));
    }

    #[test]
    fn test_after_sibling() {
        let root = setup();
        let icon = allocate_view(None);
        let text = allocate_view(None);
        compose(root, &subviews![icon, text]).unwrap();

        declare_constraints(icon, |make| {
            make.edges_to_parent(Edges::TOP | Edges::LEFT, 10.0).size(24.0, 24.0);
        })
        .unwrap();
        declare_constraints(text, |make| {
            make.after(icon, 6.0).edges_to_parent(Edges::TOP, 10.0).size(50.0, 24.0);
        })
        .unwrap();

        let frame = compute_layout(root, 200.0, 100.0).unwrap().frame(text).unwrap();
        assert!(approx(frame.x, 40.0));
    }

    #[test]
    fn test_above_and_before_sibling() {
        let root = setup();
        let footer = allocate_view(None);
        let above = allocate_view(None);
        let beside = allocate_view(None);
        compose(root, &subviews![footer, above, beside]).unwrap();

        declare_constraints(footer, |make| {
            make.edges_to_parent(Edges::BOTTOM | Edges::RIGHT, 10.0).size(60.0, 20.0);
        })
        .unwrap();
        declare_constraints(above, |make| {
            make.above(footer, 5.0).edges_to_parent(Edges::RIGHT, 10.0).size(60.0, 30.0);
        })
        .unwrap();
        declare_constraints(beside, |make| {
            make.before(footer, 5.0).edges_to_parent(Edges::BOTTOM, 10.0).size(40.0, 20.0);
        })
        .unwrap();

        let layout = compute_layout(root, 300.0, 200.0).unwrap();
        let footer = layout.frame(footer).unwrap();
        let above = layout.frame(above).unwrap();
        let beside = layout.frame(beside).unwrap();

        assert!(approx(footer.x, 230.0));
        assert!(approx(footer.y, 170.0));
        assert!(approx(above.bottom(), footer.y - 5.0));
        assert!(approx(above.y, 135.0));
        assert!(approx(beside.right(), footer.x - 5.0));
        assert!(approx(beside.x, 185.0));
    }

    #[test]
    fn test_nested_frames_are_parent_relative() {
        let root = setup();
        let card = allocate_view(None);
        let inner = allocate_view(None);
        compose(root, &subviews![card => [inner]]).unwrap();

        declare_constraints(card, |make| {
            make.edges_to_parent(Edges::TOP | Edges::LEFT, 20.0).size(100.0, 100.0);
        })
        .unwrap();
        declare_constraints(inner, |make| {
            make.edges_to_parent(Edges::ALL, 5.0);
        })
        .unwrap();

        let frame = compute_layout(root, 300.0, 300.0).unwrap().frame(inner).unwrap();
        assert!(approx(frame.x, 5.0));
        assert!(approx(frame.width, 90.0));
    }

    #[test]
    fn test_unconstrained_views_stack_in_column() {
        let root = setup();
        let a = label(LabelProps {
            text: "first".to_string(),
            ..Default::default()
        })
        .unwrap();
        let b = label(LabelProps {
            text: "second".to_string(),
            ..Default::default()
        })
        .unwrap();
        compose(root, &subviews![a, b]).unwrap();

        let layout = compute_layout(root, 300.0, 300.0).unwrap();
        let first = layout.frame(a).unwrap();
        let second = layout.frame(b).unwrap();
        assert!(approx(second.y, first.bottom()));
    }

    #[test]
    fn test_label_intrinsic_size() {
        let root = setup();
        let title = label(LabelProps {
            text: "Title".to_string(),
            ..Default::default()
        })
        .unwrap();
        compose(root, &subviews![title]).unwrap();
        declare_constraints(title, |make| {
            make.edges_to_parent(Edges::TOP | Edges::LEFT, 0.0);
        })
        .unwrap();

        let font = crate::engine::arrays::visual::get_font(title).unwrap();
        let (w, h) = measure_text("Title", font.size);

        let frame = compute_layout(root, 300.0, 300.0).unwrap().frame(title).unwrap();
        assert!(approx(frame.width, w));
        assert!(approx(frame.height, h));
    }

    #[test]
    fn test_outside_subtree_not_laid_out() {
        let root = setup();
        let stray = allocate_view(None);

        let layout = compute_layout(root, 10.0, 10.0).unwrap();
        assert_eq!(layout.frame(stray), None);
    }

    #[test]
    fn test_layout_errors() {
        let root = setup();
        assert!(matches!(compute_layout(42, 1.0, 1.0), Err(LayoutError::UnknownView(42))));

        push_parent_context(root);
        let err = compute_layout(root, 1.0, 1.0).unwrap_err();
        pop_parent_context();
        assert!(matches!(err, LayoutError::CompositionInProgress));
    }
}
