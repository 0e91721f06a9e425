//! The wheel itself: segment layout, the indicated-segment resolver, and the
//! renderer-facing frame view.

pub mod frame;
pub mod model;

pub use frame::{Frame, NullRenderer, Renderer};
pub use model::{Segment, Wheel};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An offset or position in the renderer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error)]
pub enum WheelError {
    /// A zero-frame animation could never advance a run.
    #[error("animation duration must be at least one frame")]
    InvalidDuration,
    /// Structural segment operations take 1-based positions.
    #[error("segment position {position} is out of range (1..={count})")]
    SegmentOutOfRange { position: usize, count: usize },
}
