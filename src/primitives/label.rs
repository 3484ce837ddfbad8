//! Label primitive - a line (or lines) of text.
//!
//! The layout bridge sizes labels from their text and font unless a size
//! constraint says otherwise.

use tracing::trace;

use super::types::LabelProps;
use crate::appearance::active_appearance;
use crate::engine::create_view;
use crate::engine::arrays::{core, visual};
use crate::error::HierarchyError;
use crate::types::ViewKind;

/// Create a label. The returned handle is unattached.
///
/// Color defaults to the appearance's text color and font to its body font.
/// Fails with [`HierarchyError::DuplicateId`] if `props.id` names a live view.
pub fn label(props: LabelProps) -> Result<usize, HierarchyError> {
    let index = create_view(props.id.as_deref())?;
    core::set_kind(index, ViewKind::Label);

    let appearance = active_appearance();
    visual::set_text_content(index, props.text);
    visual::set_text_color(index, props.color.unwrap_or(appearance.text));
    visual::set_font(index, props.font.unwrap_or(appearance.body));

    trace!(index, "label created");
    Ok(index)
}
