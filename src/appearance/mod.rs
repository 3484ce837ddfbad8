//! Appearance - static lookup tables for spacing, colors and fonts.
//!
//! The [`Grid`] holds spacing constants. An [`Appearance`] holds a palette
//! and a type scale; presets are selected by name. The active appearance
//! lives in a signal so that code reading it inside an effect re-runs when
//! it changes.
//!
//! # Example
//!
//! ```ignore
//! use spark_compose::appearance::{active_appearance, set_appearance, Grid};
//!
//! set_appearance("dark");
//! let body = active_appearance().body;
//! let inset = Grid::MARGIN;
//! ```

mod grid;
pub mod presets;

pub use grid::Grid;
pub use presets::{dark, get_preset, high_contrast, light, preset_names};

use spark_signals::{signal, Signal};
use tracing::debug;

use crate::types::Rgba;

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size,
            weight,
        }
    }

    /// Same family and weight at another size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

/// A palette plus a type scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub name: String,
    // Palette
    pub background: Rgba,
    pub surface: Rgba,
    pub primary: Rgba,
    pub text: Rgba,
    pub text_secondary: Rgba,
    pub separator: Rgba,
    // Type scale
    pub title: Font,
    pub body: Font,
    pub caption: Font,
}

impl Default for Appearance {
    fn default() -> Self {
        light()
    }
}

// =============================================================================
// Active Appearance
// =============================================================================

thread_local! {
    static ACTIVE: Signal<Appearance> = signal(light());
}

/// Signal holding the active appearance.
pub fn appearance_signal() -> Signal<Appearance> {
    ACTIVE.with(|active| active.clone())
}

/// Snapshot of the active appearance.
pub fn active_appearance() -> Appearance {
    ACTIVE.with(|active| active.get())
}

/// Activate a preset by name. Returns false if no preset has that name.
pub fn set_appearance(name: &str) -> bool {
    let Some(appearance) = get_preset(name) else {
        return false;
    };
    debug!(name = %appearance.name, "appearance changed");
    ACTIVE.with(|active| active.set(appearance));
    true
}

/// Activate an appearance that is not one of the presets.
pub fn set_custom_appearance(appearance: Appearance) {
    debug!(name = %appearance.name, "custom appearance set");
    ACTIVE.with(|active| active.set(appearance));
}

/// Back to the light preset (for testing).
pub fn reset_appearance() {
    ACTIVE.with(|active| active.set(light()));
}
