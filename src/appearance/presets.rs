//! Appearance presets.
//!
//! - light (default)
//! - dark
//! - high_contrast

use super::{Appearance, Font, FontWeight};
use crate::types::Rgba;

const SYSTEM_FAMILY: &str = "system-ui";

fn fonts() -> (Font, Font, Font) {
    (
        Font::new(SYSTEM_FAMILY, 22.0, FontWeight::Bold),
        Font::new(SYSTEM_FAMILY, 16.0, FontWeight::Regular),
        Font::new(SYSTEM_FAMILY, 12.0, FontWeight::Regular),
    )
}

// =============================================================================
// Light (Default)
// =============================================================================

pub fn light() -> Appearance {
    let (title, body, caption) = fonts();
    Appearance {
        name: "light".to_string(),
        background: Rgba::WHITE,
        surface: Rgba::hex(0xF2F2F7),
        primary: Rgba::hex(0x007AFF),
        text: Rgba::BLACK,
        text_secondary: Rgba::hex(0x6C6C70),
        separator: Rgba::hex(0xC6C6C8),
        title,
        body,
        caption,
    }
}

// =============================================================================
// Dark
// =============================================================================

pub fn dark() -> Appearance {
    let (title, body, caption) = fonts();
    Appearance {
        name: "dark".to_string(),
        background: Rgba::BLACK,
        surface: Rgba::hex(0x1C1C1E),
        primary: Rgba::hex(0x0A84FF),
        text: Rgba::WHITE,
        text_secondary: Rgba::hex(0xAEAEB2),
        separator: Rgba::hex(0x38383A),
        title,
        body,
        caption,
    }
}

// =============================================================================
// High Contrast
// =============================================================================

/// Larger type, pure black on white.
pub fn high_contrast() -> Appearance {
    Appearance {
        name: "high_contrast".to_string(),
        background: Rgba::WHITE,
        surface: Rgba::WHITE,
        primary: Rgba::hex(0x0040DD),
        text: Rgba::BLACK,
        text_secondary: Rgba::BLACK,
        separator: Rgba::BLACK,
        title: Font::new(SYSTEM_FAMILY, 28.0, FontWeight::Bold),
        body: Font::new(SYSTEM_FAMILY, 20.0, FontWeight::Medium),
        caption: Font::new(SYSTEM_FAMILY, 16.0, FontWeight::Medium),
    }
}

/// Look up a preset by name. Case and underscores are ignored.
pub fn get_preset(name: &str) -> Option<Appearance> {
    match name.to_lowercase().replace('_', "").as_str() {
        "light" => Some(light()),
        "dark" => Some(dark()),
        "highcontrast" => Some(high_contrast()),
        _ => None,
    }
}

pub fn preset_names() -> &'static [&'static str] {
    &["light", "dark", "high_contrast"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in preset_names() {
            let preset = get_preset(name).unwrap();
            assert_eq!(preset.name, *name);
        }
    }

    #[test]
    fn test_lookup_is_lenient() {
        assert_eq!(get_preset("DARK"), Some(dark()));
        assert_eq!(get_preset("highContrast"), Some(high_contrast()));
        assert_eq!(get_preset("sepia"), None);
    }

    #[test]
    fn test_light_and_dark_share_type_scale() {
        assert_eq!(light().body, dark().body);
        assert_ne!(light().background, dark().background);
    }
}
