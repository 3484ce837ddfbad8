//! Visual arrays: background, text content, text color, font.
//!
//! Nothing in the layout bridge reads these except text content, which
//! labels are measured by. They are written once at construction.

use std::cell::RefCell;

use crate::appearance::Font;
use crate::types::Rgba;

thread_local! {
    static BACKGROUND: RefCell<Vec<Rgba>> = const { RefCell::new(Vec::new()) };
    static TEXT_CONTENT: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static TEXT_COLOR: RefCell<Vec<Rgba>> = const { RefCell::new(Vec::new()) };
    static FONT: RefCell<Vec<Option<Font>>> = const { RefCell::new(Vec::new()) };
}

fn write<T: Default>(arr: &RefCell<Vec<T>>, index: usize, value: T) {
    let mut arr = arr.borrow_mut();
    if arr.len() <= index {
        arr.resize_with(index + 1, T::default);
    }
    arr[index] = value;
}

fn read<T: Default + Clone>(arr: &RefCell<Vec<T>>, index: usize) -> T {
    arr.borrow().get(index).cloned().unwrap_or_default()
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    BACKGROUND.with(|arr| {
        if arr.borrow().len() <= index {
            write(arr, index, Rgba::TRANSPARENT);
        }
    });
    TEXT_CONTENT.with(|arr| {
        if arr.borrow().len() <= index {
            write(arr, index, String::new());
        }
    });
    TEXT_COLOR.with(|arr| {
        if arr.borrow().len() <= index {
            write(arr, index, Rgba::TRANSPARENT);
        }
    });
    FONT.with(|arr| {
        if arr.borrow().len() <= index {
            write(arr, index, None);
        }
    });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    BACKGROUND.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = Rgba::TRANSPARENT;
        }
    });
    TEXT_CONTENT.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            slot.clear();
        }
    });
    TEXT_COLOR.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = Rgba::TRANSPARENT;
        }
    });
    FONT.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = None;
        }
    });
}

/// Reset all arrays.
pub fn reset() {
    BACKGROUND.with(|arr| arr.borrow_mut().clear());
    TEXT_CONTENT.with(|arr| arr.borrow_mut().clear());
    TEXT_COLOR.with(|arr| arr.borrow_mut().clear());
    FONT.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Accessors
// =============================================================================

pub fn get_background(index: usize) -> Rgba {
    BACKGROUND.with(|arr| read(arr, index))
}

pub fn set_background(index: usize, color: Rgba) {
    BACKGROUND.with(|arr| write(arr, index, color));
}

pub fn get_text_content(index: usize) -> String {
    TEXT_CONTENT.with(|arr| read(arr, index))
}

pub fn set_text_content(index: usize, content: String) {
    TEXT_CONTENT.with(|arr| write(arr, index, content));
}

pub fn get_text_color(index: usize) -> Rgba {
    TEXT_COLOR.with(|arr| read(arr, index))
}

pub fn set_text_color(index: usize, color: Rgba) {
    TEXT_COLOR.with(|arr| write(arr, index, color));
}

pub fn get_font(index: usize) -> Option<Font> {
    FONT.with(|arr| read(arr, index))
}

pub fn set_font(index: usize, font: Font) {
    FONT.with(|arr| write(arr, index, Some(font)));
}
