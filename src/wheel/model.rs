//! Wheel state and the circle-partitioning layout pass.

use palette::Srgba;

use crate::angle::{self, FULL_TURN};
use crate::animation::Animation;
use crate::config::{
    PinConfig, PointerGuideConfig, SegmentConfig, SegmentText, TextStyle, TextStyleOverrides,
    WheelConfig,
};
use crate::wheel::frame::{Frame, Renderer};
use crate::wheel::{Point, WheelError};

/// One arc slice of the wheel.
///
/// Start and end angles are only ever written by the layout pass; callers
/// configure a `size` (or leave it to auto-fill) and read the result.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    pub size: Option<f64>,
    pub text: SegmentText,
    pub fill: Option<Srgba<f64>>,
    pub stroke: Option<Srgba<f64>>,
    pub line_width: Option<f64>,
    pub text_style: TextStyleOverrides,
    start_angle: f64,
    end_angle: f64,
}

impl Segment {
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Arc covered by this segment, in degrees.
    pub fn arc(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    // Both bounds inclusive: a position on a shared boundary matches the
    // earlier segment because the scan returns on first match.
    fn contains(&self, position: f64) -> bool {
        position >= self.start_angle && position <= self.end_angle
    }
}

impl From<SegmentConfig> for Segment {
    fn from(config: SegmentConfig) -> Self {
        Self {
            size: config.size,
            text: config.text,
            fill: config.fill,
            stroke: config.stroke,
            line_width: config.line_width,
            text_style: config.text_style,
            start_angle: 0.0,
            end_angle: 0.0,
        }
    }
}

/// A segmented wheel and its single owned animation.
pub struct Wheel {
    pub(crate) segments: Vec<Segment>,
    pub(crate) rotation_angle: f64,
    pub(crate) pointer_angle: f64,
    pub(crate) center: Option<Point>,
    pub(crate) outer_radius: Option<f64>,
    pub(crate) inner_radius: f64,
    pub(crate) draw_text: bool,
    pub(crate) text: TextStyle,
    pub(crate) fill: Option<Srgba<f64>>,
    pub(crate) stroke: Option<Srgba<f64>>,
    pub(crate) line_width: f64,
    pub(crate) pins: PinConfig,
    pub(crate) pointer_guide: PointerGuideConfig,
    pub(crate) animation: Animation,
}

impl Wheel {
    /// Builds a wheel from its configuration and runs the first layout pass.
    ///
    /// Fails if the animation duration is zero frames.
    pub fn new(config: WheelConfig) -> Result<Self, WheelError> {
        if config.animation.duration == 0 {
            return Err(WheelError::InvalidDuration);
        }

        let segments = (0..config.num_segments)
            .map(|i| {
                config
                    .segments
                    .get(i)
                    .cloned()
                    .map(Segment::from)
                    .unwrap_or_default()
            })
            .collect();

        let mut wheel = Self {
            segments,
            rotation_angle: config.rotation_angle,
            pointer_angle: config.pointer_angle,
            center: config.center,
            outer_radius: config.outer_radius,
            inner_radius: config.inner_radius,
            draw_text: config.draw_text,
            text: config.text,
            fill: config.fill,
            stroke: config.stroke,
            line_width: config.line_width,
            pins: config.pins,
            pointer_guide: config.pointer_guide,
            animation: Animation::new(config.animation),
        };
        wheel.update_layout();
        Ok(wheel)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    /// Raw rotation in degrees; unbounded, not normalized.
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn pointer_angle(&self) -> f64 {
        self.pointer_angle
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    /// Recomputes every segment's start and end angle.
    ///
    /// Explicit sizes are used exactly; the arc left over is split evenly
    /// among segments without one, accumulating from 0 in sequence order.
    /// When explicit sizes already cover the full circle they are used as-is
    /// (auto segments then get 0 degrees) — the pass does not check that they
    /// sum to 360, so an over- or undershooting wheel is possible and left to
    /// the caller.
    pub(crate) fn update_layout(&mut self) {
        let arc_used: f64 = self.segments.iter().filter_map(|s| s.size).sum();
        let auto_count = self.segments.iter().filter(|s| s.size.is_none()).count();
        let arc_left = FULL_TURN - arc_used;

        let arc_each = if arc_left > 0.0 && auto_count > 0 {
            arc_left / auto_count as f64
        } else {
            0.0
        };

        let mut current = 0.0;
        for segment in &mut self.segments {
            segment.start_angle = current;
            current += segment.size.unwrap_or(arc_each);
            segment.end_angle = current;
        }
    }

    /// Inserts a segment built from `config` at a 1-based `position`,
    /// shifting later segments along. `None` or an out-of-range position
    /// appends at the end. The wheel is fully repartitioned before this
    /// returns.
    pub fn insert_segment(&mut self, config: SegmentConfig, position: Option<usize>) {
        let end = self.segments.len() + 1;
        let position = match position {
            Some(p) if (1..=end).contains(&p) => p,
            Some(p) => {
                log::debug!("insert position {p} out of range, appending at {end}");
                end
            }
            None => end,
        };

        self.segments.insert(position - 1, Segment::from(config));
        self.update_layout();
    }

    /// Deletes the segment at a 1-based `position` and repartitions. An
    /// out-of-range position reports an error and leaves the wheel untouched.
    pub fn delete_segment(&mut self, position: usize) -> Result<(), WheelError> {
        if position == 0 || position > self.segments.len() {
            return Err(WheelError::SegmentOutOfRange {
                position,
                count: self.segments.len(),
            });
        }

        self.segments.remove(position - 1);
        self.update_layout();
        Ok(())
    }

    /// Current rotation normalized into `[0, 360)`.
    pub fn rotation_position(&self) -> f64 {
        angle::normalize(self.rotation_angle)
    }

    /// 0-based index of the segment under the pointer, resolved from the raw
    /// rotation alone.
    ///
    /// `pointer_angle` is deliberately not part of this lookup: the classic
    /// widget resolves against rotation only while drawing its pointer guide
    /// at `pointer_angle` independently. That asymmetry is preserved here
    /// rather than silently fixed. A position exactly on a shared boundary
    /// resolves to the earlier segment (first match wins).
    pub fn indicated_segment_index(&self) -> Option<usize> {
        let position = self.rotation_position();
        self.segments.iter().position(|s| s.contains(position))
    }

    /// 1-based number of the segment under the pointer, `0` when nothing
    /// matches.
    pub fn indicated_segment_number(&self) -> usize {
        self.indicated_segment_index().map_or(0, |i| i + 1)
    }

    pub fn indicated_segment(&self) -> Option<&Segment> {
        self.indicated_segment_index().map(|i| &self.segments[i])
    }

    /// Adjusts the rotation by `delta` degrees and redraws.
    ///
    /// Intended for use outside a run: animation state is untouched, and the
    /// next tick of a running animation recomputes rotation from its own
    /// snapshot anyway.
    pub fn rotate_by(&mut self, delta: f64, renderer: &mut dyn Renderer) {
        self.rotation_angle += delta;
        renderer.redraw(&self.frame());
    }

    /// Snapshot view handed to the renderer.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            segments: &self.segments,
            rotation_angle: self.rotation_angle,
            pointer_angle: self.pointer_angle,
            center: self.center,
            outer_radius: self.outer_radius,
            inner_radius: self.inner_radius,
            draw_text: self.draw_text,
            text: &self.text,
            fill: self.fill,
            stroke: self.stroke,
            line_width: self.line_width,
            pins: &self.pins,
            pointer_guide: &self.pointer_guide,
        }
    }
}
