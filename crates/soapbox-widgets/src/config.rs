//! Widget construction parameters.

use soapbox_paint::Rect;

/// Default line height in pixels.
pub const DEFAULT_LINE_HEIGHT: f32 = 30.0;

/// Default interior padding in pixels.
pub const DEFAULT_PADDING: f32 = 10.0;

/// Default number of visible lines used to seed scrollbar geometry before
/// any content has been added.
pub const DEFAULT_MAX_VISIBLE_LINES: usize = 10;

/// Geometry and text-layout parameters for a panel or input field.
///
/// The position and size are in window coordinates. The remaining options
/// have defaults matching the game's layout constants and can be adjusted
/// with the `with_*` builders:
///
/// ```
/// use soapbox_widgets::PanelConfig;
///
/// let config = PanelConfig::new(50.0, 200.0, 600.0, 400.0)
///     .with_max_visible_lines(20)
///     .with_line_height(30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    /// Left edge, in window coordinates.
    pub x: f32,
    /// Top edge, in window coordinates.
    pub y: f32,
    /// Total width including any scrollbar.
    pub width: f32,
    /// Total height.
    pub height: f32,
    /// Expected visible line count, used to seed scrollbar geometry.
    pub max_visible_lines: usize,
    /// Height of one text line in pixels.
    pub line_height: f32,
    /// Interior padding between the border and the text, in pixels.
    pub padding: f32,
}

impl PanelConfig {
    /// Create a config with the given geometry and default layout options.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            max_visible_lines: DEFAULT_MAX_VISIBLE_LINES,
            line_height: DEFAULT_LINE_HEIGHT,
            padding: DEFAULT_PADDING,
        }
    }

    /// Set the expected visible line count.
    pub fn with_max_visible_lines(mut self, lines: usize) -> Self {
        self.max_visible_lines = lines;
        self
    }

    /// Set the line height in pixels.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the interior padding in pixels.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// The widget's bounding rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
