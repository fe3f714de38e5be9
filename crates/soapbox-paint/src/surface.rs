//! Render-target capability.
//!
//! Widgets paint through the [`Surface`] trait rather than any concrete
//! backend. The host wraps its renderer (GPU, software, whatever) in this
//! trait; [`RecordingSurface`] is a backend-free implementation that records
//! draw commands, used for headless verification and tests.

use crate::types::{Color, Point, Rect};

/// Stroke style for outlined shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A drawing target with the primitives the widgets need.
///
/// Clip rectangles nest: `push_clip` intersects with the current clip and
/// `pop_clip` restores the previous one. Implementations are expected to
/// silently ignore draws that fall entirely outside the clip.
pub trait Surface {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a single line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Point, color: Color);

    /// Push a clip rectangle. Subsequent draws are clipped to the
    /// intersection of all pushed rectangles.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the most recently pushed clip rectangle.
    fn pop_clip(&mut self);
}

/// A recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect { rect: Rect, color: Color },
    /// An outlined rectangle.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// A line of text at a position.
    Text {
        text: String,
        pos: Point,
        color: Color,
    },
    /// A clip rectangle was pushed.
    PushClip { rect: Rect },
    /// A clip rectangle was popped.
    PopClip,
}

/// A surface that records every draw command instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    clip_depth: usize,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }

    /// Current clip nesting depth. Zero after a balanced paint pass.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// The text of every recorded text command, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            pos,
            color,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(DrawCommand::PopClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        surface.draw_text("hi", Point::new(1.0, 2.0), Color::BLACK);

        assert_eq!(surface.commands().len(), 2);
        assert_eq!(surface.texts(), vec!["hi"]);
    }

    #[test]
    fn test_recording_surface_clip_depth() {
        let mut surface = RecordingSurface::new();
        surface.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(surface.clip_depth(), 1);
        surface.pop_clip();
        assert_eq!(surface.clip_depth(), 0);
        // Unbalanced pop does not underflow.
        surface.pop_clip();
        assert_eq!(surface.clip_depth(), 0);
    }
}
