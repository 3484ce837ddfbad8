//! Primitive props.
//!
//! Every visual field is optional. `None` means "take it from the active
//! appearance when the view is created".

use crate::appearance::Font;
use crate::types::Rgba;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewProps {
    /// Optional stable id, resolvable with `get_index`.
    pub id: Option<String>,
    pub background: Option<Rgba>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelProps {
    pub id: Option<String>,
    pub text: String,
    pub color: Option<Rgba>,
    pub font: Option<Font>,
}

impl LabelProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}
