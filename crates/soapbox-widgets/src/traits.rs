//! The widget trait.

use soapbox_paint::Rect;

use crate::events::WidgetEvent;
use crate::painting::PaintContext;

/// Common interface for the text widgets.
///
/// The host feeds every input event of a frame to each widget in arrival
/// order, then paints. Event handling is synchronous: when `event` returns,
/// the widget's state fully reflects the event, so a paint pass never
/// observes a half-applied mutation.
pub trait Widget {
    /// The widget's bounding rectangle in window coordinates.
    fn rect(&self) -> Rect;

    /// Handle one input event. Returns `true` if the widget consumed it.
    fn event(&mut self, event: &WidgetEvent) -> bool;

    /// Paint the widget into the context's surface.
    fn paint(&self, ctx: &mut PaintContext<'_>);
}
