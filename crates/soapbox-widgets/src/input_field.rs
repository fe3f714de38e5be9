//! Multi-line text input field.
//!
//! [`InputField`] is the box the player types their argument into. It
//! provides text editing with cursor and selection, wrap-while-typing
//! display, placeholder text, clipboard integration, and submit-on-Enter
//! (Shift+Enter inserts a newline instead).
//!
//! The authoritative state is the raw text plus byte offsets into it
//! (cursor and optional selection anchor). The wrapped display lines are a
//! derived projection, recomputed by an explicit relayout step after every
//! mutation, so rendering always observes lines consistent with the buffer.
//!
//! # Keyboard Shortcuts
//!
//! - Arrow keys: Move cursor
//! - Shift+Arrow keys: Extend selection
//! - Home/End: Move to start/end of text
//! - Backspace/Delete: Delete before/after cursor, or the selection
//! - Enter: Submit; Shift+Enter: insert newline
//! - Ctrl+A / Cmd+A: Select all
//! - Ctrl+C / Cmd+C: Copy selection
//! - Ctrl+X / Cmd+X: Cut selection
//! - Ctrl+V / Cmd+V: Paste

use unicode_segmentation::UnicodeSegmentation;

use soapbox_paint::{Color, Point, Rect, SharedMeasurer, Stroke};

use crate::clipboard::Clipboard;
use crate::config::PanelConfig;
use crate::drag::{Drag, SelectionDrag};
use crate::events::{KeyPressEvent, Key, MouseButton, MousePressEvent, WidgetEvent};
use crate::painting::PaintContext;
use crate::traits::Widget;
use crate::wrap::{wrap_text_indexed, DisplayLine};

/// Caret blink half-period, in frames.
const CURSOR_BLINK_FRAMES: u64 = 30;

/// Cursor movement direction for [`InputField::move_cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorDirection {
    Left,
    Right,
}

/// A focusable, multi-line text input box.
///
/// Editing operations are total over the buffer invariants: the cursor
/// stays within `0..=text.len()` on a grapheme boundary, and a selection,
/// when present, spans `[min(cursor, anchor), max(cursor, anchor))`.
/// Clipboard unavailability degrades copy/cut/paste to no-ops.
///
/// Focus follows pointer presses: a press inside the field focuses it, a
/// press outside unfocuses it. Keyboard events are ignored while
/// unfocused.
pub struct InputField {
    /// Bounding rectangle in window coordinates.
    rect: Rect,
    /// Interior padding between border and text.
    padding: f32,
    /// Height of one display line.
    line_height: f32,
    /// Width available to text: field width minus padding.
    text_width: f32,

    /// The authoritative text content. May contain literal newlines
    /// (Shift+Enter); they display as spaces.
    text: String,
    /// Cursor position as a byte offset into `text`, grapheme aligned.
    cursor: usize,
    /// Selection anchor byte offset. `Some` while a selection is being
    /// made; the selection spans from the anchor to the cursor.
    selection_anchor: Option<usize>,
    /// Derived wrapped lines; recomputed after every text mutation.
    display_lines: Vec<DisplayLine>,

    /// Whether the field currently has focus.
    focused: bool,
    /// Text-selection drag interaction.
    drag: Drag<SelectionDrag>,
    /// Submission produced by the last Enter key press, if any.
    pending_submission: Option<String>,

    /// Placeholder shown while empty and unfocused.
    placeholder: String,

    /// Injected width-measurement capability.
    measurer: SharedMeasurer,

    /// Field background color.
    background_color: Color,
    /// Border color while unfocused.
    border_color: Color,
    /// Border color while focused.
    focus_border_color: Color,
    /// Text color.
    text_color: Color,
    /// Placeholder text color.
    placeholder_color: Color,
    /// Selection highlight color.
    selection_color: Color,
}

impl InputField {
    /// Create a field with the given geometry and measurer.
    pub fn new(config: PanelConfig, measurer: SharedMeasurer) -> Self {
        let rect = config.rect();
        Self {
            rect,
            padding: config.padding,
            line_height: config.line_height,
            text_width: rect.width() - 2.0 * config.padding,
            text: String::new(),
            cursor: 0,
            selection_anchor: None,
            display_lines: Vec::new(),
            focused: false,
            drag: Drag::Idle,
            pending_submission: None,
            placeholder: String::new(),
            measurer,
            background_color: Color::from_rgb8(240, 240, 240),
            border_color: Color::BLACK,
            focus_border_color: Color::from_rgb8(51, 153, 255),
            text_color: Color::BLACK,
            placeholder_color: Color::from_rgb8(160, 160, 160),
            selection_color: Color::from_rgba8(51, 153, 255, 128),
        }
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // =========================================================================
    // Text Access
    // =========================================================================

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text content, moving the cursor to the end and clearing
    /// any selection.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
        self.selection_anchor = None;
        self.relayout();
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The derived wrapped display lines.
    pub fn display_lines(&self) -> &[DisplayLine] {
        &self.display_lines
    }

    /// Current cursor position as a byte offset into the text.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Whether the field has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Give or take focus programmatically. Losing focus cancels any
    /// selection drag in progress.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.drag.cancel();
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// True while a non-empty selection exists.
    pub fn has_selection(&self) -> bool {
        self.selection_anchor.is_some_and(|anchor| anchor != self.cursor)
    }

    /// The selection as an ordered `(start, end)` byte range, if non-empty.
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some((anchor.min(self.cursor), anchor.max(self.cursor)))
    }

    /// The selected text, or an empty string without a selection.
    pub fn selected_text(&self) -> &str {
        match self.selection_range() {
            Some((start, end)) => &self.text[start..end],
            None => "",
        }
    }

    /// Select the whole text.
    pub fn select_all(&mut self) {
        self.selection_anchor = Some(0);
        self.cursor = self.text.len();
    }

    /// Select a byte range. Offsets clamp to the text and snap back to
    /// char boundaries; the cursor lands at the end of the range.
    pub fn select_range(&mut self, start: usize, end: usize) {
        let start = self.snap_to_boundary(start);
        let end = self.snap_to_boundary(end);
        self.selection_anchor = Some(start.min(end));
        self.cursor = start.max(end);
    }

    /// Clear the selection without moving the cursor.
    pub fn deselect(&mut self) {
        self.selection_anchor = None;
    }

    /// Delete the selected text, collapsing the cursor to the selection
    /// start. No-op without a selection.
    pub fn delete_selection(&mut self) {
        if let Some((start, end)) = self.selection_range() {
            self.text.replace_range(start..end, "");
            self.cursor = start;
            self.selection_anchor = None;
            self.relayout();
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Insert text at the cursor. A selection, if present, is replaced and
    /// the cursor lands after the inserted text.
    pub fn insert_text(&mut self, s: &str) {
        if let Some((start, end)) = self.selection_range() {
            self.text.replace_range(start..end, s);
            self.cursor = start + s.len();
            self.selection_anchor = None;
        } else {
            self.text.insert_str(self.cursor, s);
            self.cursor += s.len();
        }
        self.relayout();
    }

    /// Delete the selection, or one grapheme before the cursor.
    pub fn delete_char_before(&mut self) {
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        if self.cursor > 0 {
            let start = self.prev_grapheme_boundary(self.cursor);
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
            self.relayout();
        }
    }

    /// Delete the selection, or one grapheme after the cursor.
    pub fn delete_char_after(&mut self) {
        if self.has_selection() {
            self.delete_selection();
            return;
        }
        if self.cursor < self.text.len() {
            let end = self.next_grapheme_boundary(self.cursor);
            self.text.replace_range(self.cursor..end, "");
            self.relayout();
        }
    }

    /// Move the cursor one grapheme in the given direction.
    ///
    /// With `extend`, the selection anchor is established at the current
    /// cursor on first extension and only the cursor moves. Without
    /// `extend`, an existing selection collapses to its boundary in the
    /// movement direction (no extra single-step move).
    pub fn move_cursor(&mut self, direction: CursorDirection, extend: bool) {
        match direction {
            CursorDirection::Left => self.move_cursor_left(extend),
            CursorDirection::Right => self.move_cursor_right(extend),
        }
    }

    /// Move the cursor one grapheme left. See [`move_cursor`](Self::move_cursor).
    pub fn move_cursor_left(&mut self, extend: bool) {
        if extend {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else if let Some((start, _)) = self.selection_range() {
            self.cursor = start;
            self.selection_anchor = None;
            return;
        } else {
            self.selection_anchor = None;
        }

        if self.cursor > 0 {
            self.cursor = self.prev_grapheme_boundary(self.cursor);
        }
    }

    /// Move the cursor one grapheme right. See [`move_cursor`](Self::move_cursor).
    pub fn move_cursor_right(&mut self, extend: bool) {
        if extend {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else if let Some((_, end)) = self.selection_range() {
            self.cursor = end;
            self.selection_anchor = None;
            return;
        } else {
            self.selection_anchor = None;
        }

        if self.cursor < self.text.len() {
            self.cursor = self.next_grapheme_boundary(self.cursor);
        }
    }

    /// Move the cursor to the start of the text.
    pub fn move_cursor_to_start(&mut self, extend: bool) {
        if extend {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = None;
        }
        self.cursor = 0;
    }

    /// Move the cursor to the end of the text.
    pub fn move_cursor_to_end(&mut self, extend: bool) {
        if extend {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = None;
        }
        self.cursor = self.text.len();
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Handle the Enter key.
    ///
    /// With Shift held, inserts a literal newline and submits nothing.
    /// Otherwise, if the trimmed text is non-empty, returns the text as a
    /// completed submission and resets the buffer. Whitespace-only text is
    /// a no-op.
    pub fn submit_on_enter(&mut self, shift_held: bool) -> Option<String> {
        if shift_held {
            self.insert_text("\n");
            return None;
        }
        if self.text.trim().is_empty() {
            return None;
        }

        let submitted = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.selection_anchor = None;
        self.relayout();
        Some(submitted)
    }

    /// Retrieve the submission produced by the last Enter key event, if
    /// any. The host calls this after feeding events for the frame.
    pub fn take_submission(&mut self) -> Option<String> {
        self.pending_submission.take()
    }

    // =========================================================================
    // Clipboard Operations
    // =========================================================================

    /// Return a copy of the selected text. No-op without a selection.
    pub fn copy_selection(&self) -> Option<String> {
        self.selection_range()
            .map(|(start, end)| self.text[start..end].to_owned())
    }

    /// Remove and return the selected text. No-op without a selection.
    pub fn cut_selection(&mut self) -> Option<String> {
        let selected = self.copy_selection()?;
        self.delete_selection();
        Some(selected)
    }

    /// Insert clipboard text at the cursor, replacing any selection.
    /// Control characters other than newline and tab are filtered out.
    pub fn paste(&mut self, text: &str) {
        let filtered: String = text
            .chars()
            .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
            .collect();
        if !filtered.is_empty() {
            self.insert_text(&filtered);
        }
    }

    /// Copy the selection to the system clipboard. Degrades to a no-op
    /// when the clipboard is unavailable.
    fn copy_to_clipboard(&mut self) -> bool {
        let Some(selected) = self.copy_selection() else {
            return false;
        };
        match Clipboard::new() {
            Ok(mut clipboard) => clipboard.set_text(&selected).is_ok(),
            Err(err) => {
                tracing::debug!(target: "soapbox::clipboard", %err, "copy dropped");
                false
            }
        }
    }

    /// Cut the selection to the system clipboard. The text is only removed
    /// when the clipboard write succeeds.
    fn cut_to_clipboard(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        if self.copy_to_clipboard() {
            self.delete_selection();
            true
        } else {
            false
        }
    }

    /// Paste from the system clipboard. Degrades to a no-op when the
    /// clipboard is unavailable or holds no text.
    fn paste_from_clipboard(&mut self) -> bool {
        match Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => {
                self.paste(&text);
                true
            }
            Err(err) => {
                tracing::debug!(target: "soapbox::clipboard", %err, "paste dropped");
                false
            }
        }
    }

    // =========================================================================
    // Offset <-> Pixel Mapping
    // =========================================================================

    /// Map a pointer position to a byte offset into the text.
    ///
    /// The display line is located by the pointer's y position (clamped to
    /// the last line); within that line, the offset is the first character
    /// whose cumulative rendered prefix width exceeds the pointer's x,
    /// falling back to end-of-line.
    pub fn pointer_to_offset(&self, pos: Point) -> usize {
        if self.display_lines.is_empty() {
            return 0;
        }

        let rel_y = pos.y - self.rect.top() - self.padding;
        let line_index = ((rel_y / self.line_height).floor() as isize)
            .clamp(0, self.display_lines.len() as isize - 1) as usize;
        let line = &self.display_lines[line_index];

        let rel_x = pos.x - self.rect.left() - self.padding;
        for (i, grapheme) in line.text.grapheme_indices(true) {
            let prefix = &line.text[..i + grapheme.len()];
            if self.measurer.measure_width(prefix) > rel_x {
                return line.start + i;
            }
        }
        line.end()
    }

    /// The caret's pixel position for the current cursor offset.
    fn caret_position(&self) -> Point {
        let (line_index, line_start) = match self.line_containing(self.cursor) {
            Some(line) => line,
            None => {
                return Point::new(
                    self.rect.left() + self.padding,
                    self.rect.top() + self.padding,
                );
            }
        };

        let line = &self.display_lines[line_index];
        let prefix = &line.text[..self.cursor - line_start];
        Point::new(
            self.rect.left() + self.padding + self.measurer.measure_width(prefix),
            self.rect.top() + self.padding + line_index as f32 * self.line_height,
        )
    }

    /// Find the display line containing a byte offset. Offsets on a line
    /// boundary resolve to the earlier line, so a cursor at a line's end
    /// draws there rather than at the start of the next line.
    fn line_containing(&self, offset: usize) -> Option<(usize, usize)> {
        self.display_lines
            .iter()
            .enumerate()
            .find(|(_, line)| offset <= line.end())
            .map(|(i, line)| (i, line.start))
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Recompute the display lines from the buffer. Newlines display as
    /// spaces; the wrapper itself is newline-agnostic.
    fn relayout(&mut self) {
        let collapsed = self.text.replace('\n', " ");
        self.display_lines =
            wrap_text_indexed(&collapsed, self.measurer.as_ref(), self.text_width);
    }

    /// The previous grapheme boundary before `pos`.
    fn prev_grapheme_boundary(&self, pos: usize) -> usize {
        self.text[..pos]
            .grapheme_indices(true)
            .last()
            .map_or(0, |(i, _)| i)
    }

    /// The next grapheme boundary after `pos`.
    fn next_grapheme_boundary(&self, pos: usize) -> usize {
        self.text[pos..]
            .graphemes(true)
            .next()
            .map_or(self.text.len(), |g| pos + g.len())
    }

    /// Clamp an offset to the text and snap it back to a char boundary.
    fn snap_to_boundary(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a key press. Only called while focused.
    fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let shift = event.modifiers.shift;
        let command = event.modifiers.command();

        match event.key {
            Key::ArrowLeft => {
                self.move_cursor_left(shift);
                true
            }
            Key::ArrowRight => {
                self.move_cursor_right(shift);
                true
            }
            Key::Home => {
                self.move_cursor_to_start(shift);
                true
            }
            Key::End => {
                self.move_cursor_to_end(shift);
                true
            }
            Key::Backspace => {
                self.delete_char_before();
                true
            }
            Key::Delete => {
                self.delete_char_after();
                true
            }
            Key::Enter => {
                if let Some(text) = self.submit_on_enter(shift) {
                    tracing::debug!(
                        target: "soapbox::input",
                        chars = text.chars().count(),
                        "submission"
                    );
                    self.pending_submission = Some(text);
                }
                true
            }
            Key::A if command => {
                self.select_all();
                true
            }
            Key::C if command => {
                self.copy_to_clipboard();
                true
            }
            Key::X if command => {
                self.cut_to_clipboard();
                true
            }
            Key::V if command => {
                self.paste_from_clipboard();
                true
            }
            _ => {
                if !event.text.is_empty() && !command && !event.modifiers.alt {
                    self.insert_text(&event.text);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Handle a mouse press: focus tracking, caret placement, selection
    /// start.
    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if !self.rect.contains(event.pos) {
            self.set_focused(false);
            return false;
        }

        self.focused = true;
        let offset = self.pointer_to_offset(event.pos);

        if event.modifiers.shift {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.cursor);
            }
        } else {
            self.selection_anchor = Some(offset);
        }

        self.cursor = offset;
        self.drag.begin(SelectionDrag);
        true
    }

    /// Handle a mouse release: end a selection drag, dropping an empty
    /// selection left by a plain click.
    fn handle_mouse_release(&mut self) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        self.drag.end();
        if self.selection_anchor == Some(self.cursor) {
            self.selection_anchor = None;
        }
        true
    }

    /// Handle pointer motion: extend the selection while dragging.
    fn handle_mouse_move(&mut self, pos: Point) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        self.cursor = self.pointer_to_offset(pos);
        true
    }

    /// Forcibly cancel an in-progress selection drag.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}

impl Widget for InputField {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn event(&mut self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) if e.button == MouseButton::Left => {
                self.handle_mouse_release()
            }
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e.pos),
            // Keyboard input only reaches a focused field.
            WidgetEvent::KeyPress(e) if self.focused => self.handle_key_press(e),
            _ => false,
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let frame = ctx.frame();
        let surface = ctx.surface();

        surface.fill_rect(self.rect, self.background_color);
        let border = if self.focused {
            self.focus_border_color
        } else {
            self.border_color
        };
        surface.stroke_rect(self.rect, &Stroke::new(border, 2.0));

        let origin = Point::new(self.rect.left() + self.padding, self.rect.top() + self.padding);

        if self.text.is_empty() && !self.focused && !self.placeholder.is_empty() {
            surface.draw_text(&self.placeholder, origin, self.placeholder_color);
            return;
        }

        // Selection highlight: one rectangle per display line, from the
        // intersection of the selection with that line's offset range.
        if self.focused {
            if let Some((sel_start, sel_end)) = self.selection_range() {
                for (i, line) in self.display_lines.iter().enumerate() {
                    let start = sel_start.max(line.start);
                    let end = sel_end.min(line.end());
                    if start >= end {
                        continue;
                    }
                    let x0 = self.measurer.measure_width(&line.text[..start - line.start]);
                    let x1 = self.measurer.measure_width(&line.text[..end - line.start]);
                    surface.fill_rect(
                        Rect::new(
                            origin.x + x0,
                            origin.y + i as f32 * self.line_height,
                            x1 - x0,
                            self.line_height,
                        ),
                        self.selection_color,
                    );
                }
            }
        }

        for (i, line) in self.display_lines.iter().enumerate() {
            surface.draw_text(
                &line.text,
                Point::new(origin.x, origin.y + i as f32 * self.line_height),
                self.text_color,
            );
        }

        // Blinking caret: visible for the first half of each blink cycle.
        if self.focused && (frame / CURSOR_BLINK_FRAMES) % 2 == 0 {
            let caret = self.caret_position();
            surface.fill_rect(
                Rect::new(caret.x, caret.y, 1.5, self.line_height),
                self.text_color,
            );
        }
    }
}

static_assertions::assert_impl_all!(InputField: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::KeyboardModifiers;
    use soapbox_paint::{DrawCommand, FixedAdvanceMeasurer, RecordingSurface};
    use std::sync::Arc;

    fn field() -> InputField {
        // 10px per char, 200px of interior width (220 - 2*10).
        let measurer = Arc::new(FixedAdvanceMeasurer::new(10.0, 30.0));
        InputField::new(
            PanelConfig::new(0.0, 0.0, 220.0, 100.0).with_line_height(30.0),
            measurer,
        )
    }

    fn assert_buffer_invariant(field: &InputField) {
        assert!(field.cursor_position() <= field.text().len());
        assert!(field.text().is_char_boundary(field.cursor_position()));
        if let Some((start, end)) = field.selection_range() {
            assert!(start < end);
            assert!(end <= field.text().len());
        }
    }

    #[test]
    fn test_creation() {
        let field = field();
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor_position(), 0);
        assert!(!field.has_selection());
        assert!(!field.is_focused());
    }

    #[test]
    fn test_insert_advances_cursor() {
        let mut field = field();
        field.insert_text("hi");
        field.insert_text("!");
        assert_eq!(field.text(), "hi!");
        assert_eq!(field.cursor_position(), 3);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut field = field();
        field.set_text("hello world");
        field.select_range(0, 5);
        field.insert_text("goodbye");
        assert_eq!(field.text(), "goodbye world");
        assert_eq!(field.cursor_position(), 7);
        assert!(!field.has_selection());
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut field = field();
        field.set_text("abc");
        field.delete_char_before();
        assert_eq!(field.text(), "ab");

        field.move_cursor_to_start(false);
        field.delete_char_after();
        assert_eq!(field.text(), "b");

        // At the boundaries both are no-ops.
        field.move_cursor_to_start(false);
        field.delete_char_before();
        field.move_cursor_to_end(false);
        field.delete_char_after();
        assert_eq!(field.text(), "b");
    }

    #[test]
    fn test_backspace_deletes_selection() {
        let mut field = field();
        field.set_text("hello world");
        field.select_range(5, 11);
        field.delete_char_before();
        assert_eq!(field.text(), "hello");
        assert_eq!(field.cursor_position(), 5);
    }

    #[test]
    fn test_grapheme_aware_backspace() {
        let mut field = field();
        field.set_text("héllo");
        field.move_cursor_to_end(false);
        for expected in ["héll", "hél", "hé", "h", ""] {
            field.delete_char_before();
            assert_eq!(field.text(), expected);
            assert_buffer_invariant(&field);
        }
    }

    #[test]
    fn test_move_collapses_selection_without_extra_step() {
        let mut field = field();
        field.set_text("hello");
        field.select_range(1, 4);

        // Collapse left lands on the selection start, not start - 1.
        field.move_cursor_left(false);
        assert_eq!(field.cursor_position(), 1);
        assert!(!field.has_selection());

        field.select_range(1, 4);
        field.move_cursor_right(false);
        assert_eq!(field.cursor_position(), 4);
        assert!(!field.has_selection());
    }

    #[test]
    fn test_shift_movement_extends_selection() {
        let mut field = field();
        field.set_text("hello");
        field.move_cursor_to_start(false);
        field.move_cursor_right(true);
        field.move_cursor_right(true);
        assert_eq!(field.selected_text(), "he");
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn test_select_all() {
        let mut field = field();
        field.set_text("hello world");
        field.select_all();
        assert_eq!(field.selected_text(), "hello world");
        assert_eq!(field.cursor_position(), 11);
    }

    #[test]
    fn test_submit_resets_buffer() {
        let mut field = field();
        field.set_text("hi");
        assert_eq!(field.submit_on_enter(false), Some("hi".to_owned()));
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor_position(), 0);
        assert!(field.display_lines().is_empty());
    }

    #[test]
    fn test_submit_whitespace_only_is_noop() {
        let mut field = field();
        field.set_text("   ");
        assert_eq!(field.submit_on_enter(false), None);
        assert_eq!(field.text(), "   ");
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let mut field = field();
        field.set_text("line one");
        assert_eq!(field.submit_on_enter(true), None);
        assert_eq!(field.text(), "line one\n");
        // The newline displays as a space.
        assert_eq!(field.display_lines()[0].text, "line one ");
    }

    #[test]
    fn test_cut_copy_paste() {
        let mut field = field();
        field.set_text("hello world");

        assert_eq!(field.copy_selection(), None);
        assert_eq!(field.cut_selection(), None);

        field.select_range(0, 5);
        assert_eq!(field.copy_selection(), Some("hello".to_owned()));
        assert_eq!(field.text(), "hello world");

        assert_eq!(field.cut_selection(), Some("hello".to_owned()));
        assert_eq!(field.text(), " world");
        assert_eq!(field.cursor_position(), 0);

        field.select_range(0, 1);
        field.paste("goodbye,");
        assert_eq!(field.text(), "goodbye,world");
    }

    #[test]
    fn test_paste_filters_control_characters() {
        let mut field = field();
        field.paste("a\u{7}b\nc\td");
        assert_eq!(field.text(), "ab\nc\td");
    }

    #[test]
    fn test_wrap_while_typing() {
        let mut field = field();
        // 30 chars at 10px against 200px interior width.
        field.insert_text("words that are going to wrap ok");
        assert!(field.display_lines().len() > 1);
        for line in field.display_lines() {
            assert!(line.text.chars().count() <= 20);
        }
    }

    #[test]
    fn test_buffer_invariant_under_mixed_operations() {
        let mut field = field();
        let ops: &[&dyn Fn(&mut InputField)] = &[
            &|f| f.insert_text("hello "),
            &|f| f.move_cursor_left(true),
            &|f| f.move_cursor_left(false),
            &|f| f.delete_char_before(),
            &|f| f.insert_text("wörld"),
            &|f| f.move_cursor_right(true),
            &|f| f.delete_char_after(),
            &|f| f.select_all(),
            &|f| f.insert_text("x"),
            &|f| f.move_cursor_to_start(true),
            &|f| f.delete_char_before(),
        ];
        for op in ops {
            op(&mut field);
            assert_buffer_invariant(&field);
        }
    }

    #[test]
    fn test_pointer_to_offset_boundary() {
        let mut field = field();
        field.set_text("hello world");
        // 10px per char, padding 10: the end of character i sits at
        // x = 10 + (i + 1) * 10. Clicking exactly there yields i + 1.
        for i in 0..5 {
            let x = 10.0 + (i + 1) as f32 * 10.0;
            let offset = field.pointer_to_offset(Point::new(x, 15.0));
            assert_eq!(offset, i + 1, "click at end of char {i}");
        }
        // Past the end of the line falls back to end-of-line.
        assert_eq!(field.pointer_to_offset(Point::new(1000.0, 15.0)), 11);
        // Left of the first character lands at the line start.
        assert_eq!(field.pointer_to_offset(Point::new(0.0, 15.0)), 0);
    }

    #[test]
    fn test_pointer_to_offset_clamps_to_last_line() {
        let mut field = field();
        field.set_text("words that are going to wrap ok");
        let last = field.display_lines().last().unwrap().clone();
        // Far below the field: clamps to the last display line.
        let offset = field.pointer_to_offset(Point::new(10.0, 5000.0));
        assert_eq!(offset, last.start);
        assert_eq!(field.pointer_to_offset(Point::new(5000.0, 5000.0)), last.end());
    }

    #[test]
    fn test_focus_follows_pointer() {
        let mut field = field();
        assert!(!field.is_focused());

        field.event(&WidgetEvent::left_press(Point::new(50.0, 50.0)));
        assert!(field.is_focused());

        field.event(&WidgetEvent::left_press(Point::new(500.0, 500.0)));
        assert!(!field.is_focused());
    }

    #[test]
    fn test_keyboard_ignored_while_unfocused() {
        let mut field = field();
        let typed = WidgetEvent::KeyPress(KeyPressEvent::text("a"));
        assert!(!field.event(&typed));
        assert_eq!(field.text(), "");

        field.set_focused(true);
        assert!(field.event(&typed));
        assert_eq!(field.text(), "a");
    }

    #[test]
    fn test_enter_event_produces_submission() {
        let mut field = field();
        field.set_focused(true);
        field.event(&WidgetEvent::KeyPress(KeyPressEvent::text("hi")));
        field.event(&WidgetEvent::KeyPress(KeyPressEvent::key(
            Key::Enter,
            KeyboardModifiers::NONE,
        )));
        assert_eq!(field.take_submission(), Some("hi".to_owned()));
        assert_eq!(field.take_submission(), None);
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_click_places_cursor_and_drag_selects() {
        let mut field = field();
        field.set_text("hello world");

        // Press at the end of "hello" (x = 10 + 5*10).
        field.event(&WidgetEvent::left_press(Point::new(60.0, 15.0)));
        assert_eq!(field.cursor_position(), 5);

        // Drag to the end of the text.
        field.event(&WidgetEvent::pointer_move(Point::new(1000.0, 15.0)));
        assert_eq!(field.selected_text(), " world");

        field.event(&WidgetEvent::left_release(Point::new(1000.0, 15.0)));
        assert_eq!(field.selected_text(), " world");

        // A plain click drops the empty selection on release.
        field.event(&WidgetEvent::left_press(Point::new(60.0, 15.0)));
        field.event(&WidgetEvent::left_release(Point::new(60.0, 15.0)));
        assert!(!field.has_selection());
    }

    #[test]
    fn test_paint_placeholder_when_empty_and_unfocused() {
        let field = field().with_placeholder("Type your argument...");
        let mut surface = RecordingSurface::new();
        field.paint(&mut PaintContext::new(&mut surface, 0));
        assert_eq!(surface.texts(), vec!["Type your argument..."]);
    }

    #[test]
    fn test_paint_caret_blinks_on_frame_count() {
        let mut field = field();
        field.set_focused(true);
        field.insert_text("hi");

        let caret_rects = |frame: u64| {
            let mut surface = RecordingSurface::new();
            field.paint(&mut PaintContext::new(&mut surface, frame));
            surface
                .commands()
                .iter()
                .filter(|cmd| {
                    matches!(cmd, DrawCommand::FillRect { rect, .. } if rect.width() == 1.5)
                })
                .count()
        };

        assert_eq!(caret_rects(0), 1);
        assert_eq!(caret_rects(30), 0);
        assert_eq!(caret_rects(60), 1);
    }

    #[test]
    fn test_paint_selection_highlight_rect() {
        let mut field = field();
        field.set_focused(true);
        field.set_text("hello");
        field.select_range(1, 3);

        let mut surface = RecordingSurface::new();
        field.paint(&mut PaintContext::new(&mut surface, 0));

        let highlight = surface.commands().iter().find_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, color }
                if *color == Color::from_rgba8(51, 153, 255, 128) =>
            {
                Some(*rect)
            }
            _ => None,
        });
        // Chars 1..3 at 10px per char, origin at padding 10.
        assert_eq!(highlight, Some(Rect::new(20.0, 10.0, 20.0, 30.0)));
    }

    #[test]
    fn test_caret_sits_at_end_of_wrapped_line() {
        let mut field = field();
        field.set_focused(true);
        field.insert_text("words that are going to wrap ok");
        let first = &field.display_lines()[0];
        // A cursor exactly at a line's end draws on that line, not at the
        // start of the next one.
        field.select_range(first.end(), first.end());
        let caret = field.caret_position();
        assert_eq!(caret.y, 10.0);
    }
}
