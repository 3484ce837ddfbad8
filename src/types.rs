//! Core types for spark-compose.
//!
//! These types are shared by the registry, the composition builder, the
//! constraint phase and the layout bridge.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from `0xRRGGBB`.
    pub const fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// A length handed to the layout engine.
///
/// `Percent` is expressed in 0-100 and resolves against the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Auto,
    Points(f32),
    Percent(f32),
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<f32> for Dimension {
    fn from(value: f32) -> Self {
        Self::Points(value)
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Self::Points(value as f32)
    }
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        Self::Points(value as f32)
    }
}

impl From<i32> for Dimension {
    fn from(value: i32) -> Self {
        Self::Points(value as f32)
    }
}

// =============================================================================
// View kind & lifecycle
// =============================================================================

/// What a view handle displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// Unallocated slot.
    #[default]
    None,
    /// Plain container view.
    View,
    /// Text view measured by its content.
    Label,
}

/// Per-view state machine.
///
/// Transitions only move forward:
/// ```text
/// Unattached → Attached → Constrained → Destroyed
/// ```
/// A view may skip `Constrained` (it is then laid out in flow), and any live
/// view reaches `Destroyed` when its root is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Lifecycle {
    #[default]
    Unattached,
    Attached,
    Constrained,
    Destroyed,
}

impl Lifecycle {
    /// True once the view has a parent.
    pub fn is_attached(self) -> bool {
        matches!(self, Self::Attached | Self::Constrained)
    }
}
