//! The seam between the core and whatever draws it.

use palette::Srgba;

use crate::config::{PinConfig, PointerGuideConfig, TextStyle};
use crate::pins::PinPositions;
use crate::wheel::{Point, Segment};

/// Everything a renderer needs for one redraw: the ordered segment list with
/// resolved angles and display attributes, the current rotation, and marker
/// data. Borrowed from the wheel, so a renderer cannot mutate core state.
#[derive(Debug)]
pub struct Frame<'a> {
    pub segments: &'a [Segment],
    /// Raw rotation in degrees; not normalized.
    pub rotation_angle: f64,
    pub pointer_angle: f64,
    pub center: Option<Point>,
    pub outer_radius: Option<f64>,
    pub inner_radius: f64,
    pub draw_text: bool,
    pub text: &'a TextStyle,
    pub fill: Option<Srgba<f64>>,
    pub stroke: Option<Srgba<f64>>,
    pub line_width: f64,
    pub pins: &'a PinConfig,
    pub pointer_guide: &'a PointerGuideConfig,
}

impl Frame<'_> {
    /// Pin offsets around the wheel center, when pins are visible and the
    /// wheel knows its outer radius.
    pub fn pin_positions(&self) -> Option<PinPositions> {
        if !self.pins.visible {
            return None;
        }
        self.outer_radius
            .map(|radius| PinPositions::new(self.pins.number, radius, self.pins.outer_radius))
    }

    /// The guide-line configuration, when the host asked for it.
    pub fn pointer_guide(&self) -> Option<&PointerGuideConfig> {
        self.pointer_guide.display.then_some(self.pointer_guide)
    }
}

/// Pixel-output collaborator. The core calls it whenever state worth showing
/// has changed; implementations must not block, or the scheduler's next frame
/// is delayed.
pub trait Renderer {
    fn redraw(&mut self, frame: &Frame<'_>);
}

/// Renderer that draws nothing. Useful for headless hosts and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn redraw(&mut self, _frame: &Frame<'_>) {}
}
