//! Spacing grid.
//!
//! All spacing is a multiple of an 8-point unit. Use these instead of
//! literal numbers when declaring insets and offsets.

/// Spacing constants.
pub struct Grid;

impl Grid {
    /// Base unit.
    pub const UNIT: f32 = 8.0;
    pub const HALF: f32 = Self::UNIT / 2.0;
    /// Inset from a screen or card edge.
    pub const MARGIN: f32 = Self::UNIT * 2.0;
    /// Space between stacked siblings.
    pub const GUTTER: f32 = Self::UNIT;
    /// Minimum side of a touch target.
    pub const TOUCH_TARGET: f32 = 44.0;

    /// `n` grid units.
    pub fn units(n: u16) -> f32 {
        f32::from(n) * Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(Grid::units(0), 0.0);
        assert_eq!(Grid::units(3), 24.0);
        assert_eq!(Grid::MARGIN, Grid::units(2));
        assert_eq!(Grid::HALF * 2.0, Grid::UNIT);
    }
}
