//! Scrollable transcript panel.
//!
//! [`TextPanel`] shows an append-only transcript inside a fixed viewport:
//! each added line is word-wrapped against the panel's interior width, and
//! the panel scrolls vertically with the wheel or by dragging the scrollbar
//! handle. New content auto-scrolls the panel to the bottom, so a live
//! transcript defaults to showing the newest line.

use soapbox_paint::{Color, Point, Rect, SharedMeasurer, Stroke};

use crate::config::PanelConfig;
use crate::drag::{Drag, HandleGrab};
use crate::events::{MouseButton, WidgetEvent};
use crate::painting::PaintContext;
use crate::traits::Widget;
use crate::wrap::wrap_text;

/// Width of the scrollbar track, in pixels.
pub const SCROLLBAR_WIDTH: f32 = 20.0;

/// Minimum height of the scrollbar handle, in pixels.
pub const MIN_HANDLE_HEIGHT: f32 = 20.0;

/// A scrollable, auto-wrapping text viewport.
///
/// The panel owns its wrapped display lines and its scroll state. Content
/// arrives through [`add_line`](Self::add_line) as logical lines (one
/// transcript entry each); wrapping against the interior width happens on
/// the way in. All operations are total: out-of-range scroll requests clamp
/// silently and pointer events outside the panel are ignored.
pub struct TextPanel {
    /// Bounding rectangle in window coordinates.
    rect: Rect,
    /// Interior padding between border and text.
    padding: f32,
    /// Height of one display line.
    line_height: f32,
    /// Width available to text: panel width minus scrollbar and padding.
    text_width: f32,

    /// Wrapped display lines, in transcript order.
    lines: Vec<String>,
    /// Current scroll offset from the top of the content, in pixels.
    /// Invariant: `0 <= scroll_offset <= max_scroll()`.
    scroll_offset: f32,
    /// Total content height: line count times line height.
    content_height: f32,

    /// Current scrollbar handle height.
    handle_height: f32,
    /// Current scrollbar handle top edge, in window coordinates.
    handle_top: f32,
    /// Scrollbar-handle drag interaction.
    drag: Drag<HandleGrab>,

    /// Injected width-measurement capability.
    measurer: SharedMeasurer,

    /// Panel background color.
    background_color: Color,
    /// Panel border color.
    border_color: Color,
    /// Text color.
    text_color: Color,
    /// Scrollbar track color.
    track_color: Color,
    /// Scrollbar handle color.
    handle_color: Color,
}

impl TextPanel {
    /// Create a panel with the given geometry and measurer.
    pub fn new(config: PanelConfig, measurer: SharedMeasurer) -> Self {
        let rect = config.rect();
        // Seed the handle from the expected line count; real geometry is
        // recomputed as soon as content arrives.
        let expected_content = config.max_visible_lines as f32 * config.line_height;
        let seed_ratio = if expected_content > 0.0 {
            rect.height() / expected_content
        } else {
            1.0
        };
        let handle_height = (rect.height() * seed_ratio).max(MIN_HANDLE_HEIGHT);

        Self {
            rect,
            padding: config.padding,
            line_height: config.line_height,
            text_width: rect.width() - SCROLLBAR_WIDTH - 2.0 * config.padding,
            lines: Vec::new(),
            scroll_offset: 0.0,
            content_height: 0.0,
            handle_height,
            handle_top: rect.top(),
            drag: Drag::Idle,
            measurer,
            background_color: Color::from_rgb8(240, 240, 240),
            border_color: Color::BLACK,
            text_color: Color::BLACK,
            track_color: Color::from_rgb8(200, 200, 200),
            handle_color: Color::from_rgb8(100, 100, 100),
        }
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Append one logical line to the transcript.
    ///
    /// The text is wrapped against the interior width and the resulting
    /// display lines are appended. If the content now exceeds the viewport,
    /// the panel scrolls to the bottom so the new line is in view.
    pub fn add_line(&mut self, text: &str) {
        let wrapped = wrap_text(text, self.measurer.as_ref(), self.text_width);
        self.lines.extend(wrapped);
        self.content_height = self.lines.len() as f32 * self.line_height;

        if self.content_height > self.rect.height() {
            self.scroll_offset = self.content_height - self.rect.height();
        }
        self.update_scrollbar();
    }

    /// Remove all content and reset the scroll position.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_offset = 0.0;
        self.content_height = 0.0;
        self.update_scrollbar();
    }

    /// The wrapped display lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of wrapped display lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    // =========================================================================
    // Scroll State
    // =========================================================================

    /// Current scroll offset in pixels from the top of the content.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Total content height in pixels.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Maximum legal scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.rect.height()).max(0.0)
    }

    /// True when the content is taller than the viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.rect.height()
    }

    /// Scroll by a number of lines. Positive scrolls toward the end of the
    /// content. The result clamps to the legal range.
    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll_offset =
            (self.scroll_offset + lines * self.line_height).clamp(0.0, self.max_scroll());
        self.update_scrollbar();
    }

    /// The scrollbar track rectangle.
    pub fn scrollbar_rect(&self) -> Rect {
        Rect::new(
            self.rect.right() - SCROLLBAR_WIDTH,
            self.rect.top(),
            SCROLLBAR_WIDTH,
            self.rect.height(),
        )
    }

    /// The scrollbar handle rectangle. Only meaningful while
    /// [`is_scrollable`](Self::is_scrollable) is true.
    pub fn handle_rect(&self) -> Rect {
        Rect::new(
            self.rect.right() - SCROLLBAR_WIDTH,
            self.handle_top,
            SCROLLBAR_WIDTH,
            self.handle_height,
        )
    }

    /// Recompute handle geometry from the current scroll state.
    fn update_scrollbar(&mut self) {
        if !self.is_scrollable() {
            return;
        }

        let visible_ratio = self.rect.height() / self.content_height;
        self.handle_height = (self.rect.height() * visible_ratio).max(MIN_HANDLE_HEIGHT);

        let max_scroll = self.max_scroll();
        if max_scroll > 0.0 {
            let scroll_ratio = self.scroll_offset / max_scroll;
            self.handle_top =
                self.rect.top() + (self.rect.height() - self.handle_height) * scroll_ratio;
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Begin a handle drag if the press lands on the handle.
    fn handle_mouse_press(&mut self, pos: Point) -> bool {
        if self.is_scrollable() && self.handle_rect().contains(pos) {
            self.drag.begin(HandleGrab {
                grab_offset: pos.y - self.handle_top,
            });
            return true;
        }
        false
    }

    /// End any active handle drag.
    fn handle_mouse_release(&mut self) -> bool {
        let was_active = self.drag.is_active();
        self.drag.end();
        was_active
    }

    /// Track an active handle drag: map the pointer's vertical position
    /// through the draggable range to a scroll position.
    fn handle_mouse_move(&mut self, pos: Point) -> bool {
        let Some(grab) = self.drag.active().copied() else {
            return false;
        };
        if !self.is_scrollable() {
            return false;
        }

        let draggable_range = self.rect.height() - self.handle_height;
        if draggable_range <= 0.0 {
            return true;
        }

        let new_top = (pos.y - grab.grab_offset)
            .clamp(self.rect.top(), self.rect.top() + draggable_range);
        let scroll_ratio = (new_top - self.rect.top()) / draggable_range;
        self.scroll_offset = (scroll_ratio * self.content_height).min(self.max_scroll());
        self.update_scrollbar();
        true
    }

    /// Scroll one step per wheel line when the pointer is over the panel.
    fn handle_wheel(&mut self, pos: Point, delta_lines: f32) -> bool {
        if !self.rect.contains(pos) {
            return false;
        }
        // Wheel-up (positive delta) reveals earlier content.
        self.scroll_lines(-delta_lines);
        true
    }

    /// Forcibly cancel an in-progress handle drag, e.g. when the pointer
    /// leaves the window.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}

impl Widget for TextPanel {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn event(&mut self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) if e.button == MouseButton::Left => {
                self.handle_mouse_press(e.pos)
            }
            WidgetEvent::MouseRelease(e) if e.button == MouseButton::Left => {
                self.handle_mouse_release()
            }
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e.pos),
            WidgetEvent::Wheel(e) => self.handle_wheel(e.pos, e.delta_lines),
            _ => false,
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let surface = ctx.surface();

        surface.fill_rect(self.rect, self.background_color);
        surface.stroke_rect(self.rect, &Stroke::new(self.border_color, 2.0));

        // Text is clipped to the body, excluding the scrollbar column.
        let clip_rect = Rect::new(
            self.rect.left(),
            self.rect.top(),
            self.rect.width() - SCROLLBAR_WIDTH,
            self.rect.height(),
        );
        surface.push_clip(clip_rect);

        let visible_height = self.rect.height() - 2.0 * self.padding;
        let visible_lines =
            (((visible_height / self.line_height) as usize) + 1).min(self.lines.len());
        let start_index = (self.scroll_offset / self.line_height).floor() as usize;
        let phase = self.scroll_offset % self.line_height;

        for i in 0..visible_lines {
            let line_index = start_index + i;
            if line_index >= self.lines.len() {
                break;
            }
            let y = self.rect.top() + i as f32 * self.line_height - phase + self.padding;
            if y >= self.rect.top() && y <= self.rect.bottom() - self.line_height {
                surface.draw_text(
                    &self.lines[line_index],
                    Point::new(self.rect.left() + self.padding, y),
                    self.text_color,
                );
            }
        }

        surface.pop_clip();

        surface.fill_rect(self.scrollbar_rect(), self.track_color);
        if self.is_scrollable() {
            surface.fill_rect(self.handle_rect(), self.handle_color);
            surface.stroke_rect(self.handle_rect(), &Stroke::new(self.border_color, 1.0));
        }
    }
}

static_assertions::assert_impl_all!(TextPanel: Send, Sync);
