//! Drawing primitives and render-target capabilities for Soapbox.
//!
//! This crate defines the small vocabulary the widget crate speaks:
//! geometry and color types, the [`Surface`] trait the host's renderer
//! implements, and the [`TextMeasurer`] capability widgets use for every
//! width query. It deliberately contains no rendering backend; picking one
//! is the host application's job.

mod measure;
mod surface;
mod types;

pub use measure::{FixedAdvanceMeasurer, SharedMeasurer, TextMeasurer};
pub use surface::{DrawCommand, RecordingSurface, Stroke, Surface};
pub use types::{Color, Point, Rect, Size};

// The widget layer hands measurers across threads freely.
static_assertions::assert_obj_safe!(TextMeasurer);
static_assertions::assert_obj_safe!(Surface);
