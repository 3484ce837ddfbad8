//! View primitive - a plain rectangular container.

use tracing::trace;

use super::types::ViewProps;
use crate::appearance::active_appearance;
use crate::engine::create_view;
use crate::engine::arrays::{core, visual};
use crate::error::HierarchyError;
use crate::types::ViewKind;

/// Create a container view. The returned handle is unattached.
///
/// Fails with [`HierarchyError::DuplicateId`] if `props.id` names a live view.
pub fn view(props: ViewProps) -> Result<usize, HierarchyError> {
    let index = create_view(props.id.as_deref())?;
    core::set_kind(index, ViewKind::View);

    let background = props
        .background
        .unwrap_or_else(|| active_appearance().background);
    visual::set_background(index, background);

    trace!(index, "view created");
    Ok(index)
}
