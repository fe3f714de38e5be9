//! Paint pass context.

use soapbox_paint::Surface;

/// Everything a widget needs during a paint pass: the host's render target
/// and a monotonic frame counter.
///
/// The frame counter is the widgets' only time source; the input field uses
/// it to blink the caret. The host increments it once per rendered frame.
pub struct PaintContext<'a> {
    surface: &'a mut dyn Surface,
    frame: u64,
}

impl<'a> PaintContext<'a> {
    /// Create a paint context for one frame.
    pub fn new(surface: &'a mut dyn Surface, frame: u64) -> Self {
        Self { surface, frame }
    }

    /// The render target for this pass.
    pub fn surface(&mut self) -> &mut dyn Surface {
        self.surface
    }

    /// The current frame number.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
