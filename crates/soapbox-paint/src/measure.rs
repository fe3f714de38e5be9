//! Text measurement capability.
//!
//! Widgets never talk to a font system directly. They are handed a
//! [`TextMeasurer`] at construction time and use it for every width query:
//! word wrapping, caret placement, and pointer-to-offset mapping. The host
//! application supplies an implementation backed by its real text stack;
//! [`FixedAdvanceMeasurer`] covers headless use and tests.

use std::sync::Arc;

/// Measures rendered text for layout purposes.
///
/// Implementations must return a defined width for any string, including
/// the empty string (which measures 0). The line height is fixed for the
/// lifetime of the measurer.
pub trait TextMeasurer: Send + Sync {
    /// The rendered pixel width of `text` on a single line.
    fn measure_width(&self, text: &str) -> f32;

    /// The fixed height of one rendered line, in pixels.
    fn line_height(&self) -> f32;
}

/// Shared handle to a text measurer.
pub type SharedMeasurer = Arc<dyn TextMeasurer>;

/// A deterministic measurer where every character has the same advance.
///
/// Useful for headless rendering and for tests that need exact pixel
/// arithmetic without a font system.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    /// Horizontal advance per character, in pixels.
    advance: f32,
    /// Line height, in pixels.
    line_height: f32,
}

impl FixedAdvanceMeasurer {
    /// Create a measurer with the given per-character advance and line height.
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
