//! Text display and editing widgets for Soapbox.
//!
//! This crate provides the two interactive text widgets the game is built
//! around, plus the event and layout plumbing they share:
//!
//! - [`TextPanel`]: a scrollable transcript with a draggable scrollbar
//! - [`InputField`]: a focusable multi-line input with cursor, selection,
//!   clipboard shortcuts, and submit-on-Enter
//!
//! Both widgets are backend-free. They measure text through the
//! [`TextMeasurer`] capability and paint through the [`Surface`] trait from
//! `soapbox-paint`, so the host decides how glyphs are actually measured
//! and rasterized. Word wrapping ([`wrap_text`]) is greedy at word
//! boundaries under a pixel-width budget.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use soapbox_paint::{FixedAdvanceMeasurer, Point, RecordingSurface};
//! use soapbox_widgets::{InputField, PaintContext, PanelConfig, TextPanel, Widget, WidgetEvent};
//!
//! let measurer = Arc::new(FixedAdvanceMeasurer::new(10.0, 30.0));
//!
//! let mut panel = TextPanel::new(PanelConfig::new(50.0, 50.0, 600.0, 300.0), measurer.clone());
//! panel.add_line("AI: State your argument.");
//!
//! let mut input = InputField::new(PanelConfig::new(50.0, 370.0, 600.0, 100.0), measurer)
//!     .with_placeholder("Type your argument...");
//! input.event(&WidgetEvent::left_press(Point::new(60.0, 380.0)));
//! assert!(input.is_focused());
//!
//! let mut surface = RecordingSurface::new();
//! let mut ctx = PaintContext::new(&mut surface, 0);
//! panel.paint(&mut ctx);
//! input.paint(&mut ctx);
//! ```
//!
//! [`TextMeasurer`]: soapbox_paint::TextMeasurer
//! [`Surface`]: soapbox_paint::Surface

pub mod clipboard;
pub mod config;
pub mod drag;
pub mod events;
pub mod input_field;
pub mod painting;
pub mod text_panel;
pub mod traits;
pub mod wrap;

pub use clipboard::{Clipboard, ClipboardError};
pub use config::{PanelConfig, DEFAULT_LINE_HEIGHT, DEFAULT_MAX_VISIBLE_LINES, DEFAULT_PADDING};
pub use drag::{Drag, HandleGrab, SelectionDrag};
pub use events::{
    Key, KeyPressEvent, KeyboardModifiers, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WheelEvent, WidgetEvent,
};
pub use input_field::{CursorDirection, InputField};
pub use painting::PaintContext;
pub use text_panel::TextPanel;
pub use traits::Widget;
pub use wrap::{wrap_text, wrap_text_indexed, DisplayLine};
