//! Core of a segmented prize wheel: circle partitioning, the indicated-segment
//! resolver, and a deterministic frame-stepped spin animation.
//!
//! The crate draws nothing itself. A [`Wheel`] owns the geometry and animation
//! state; on every change worth showing it hands a borrowed [`Frame`] to
//! whatever [`Renderer`] the host plugs in, and the host's scheduler drives
//! [`Wheel::tick`] once per display frame while a run is active.
//!
//! ```
//! use spinwheel::{NullRenderer, Wheel, WheelConfig};
//!
//! let mut config = WheelConfig {
//!     num_segments: 8,
//!     ..WheelConfig::default()
//! };
//! config.animation.stop_angle = Some(230.0);
//! config.animation.spins = 4;
//!
//! let mut wheel = Wheel::new(config)?;
//! let mut renderer = NullRenderer;
//!
//! wheel.start_animation();
//! while wheel.animation().is_running() {
//!     wheel.tick(&mut renderer);
//! }
//! assert_eq!(wheel.rotation_position(), 230.0);
//! # Ok::<(), spinwheel::WheelError>(())
//! ```

pub mod angle;
pub mod animation;
pub mod config;
pub mod easing;
pub mod pins;
pub mod wheel;

pub use angle::SpinDirection;
pub use animation::{Animation, Callback, Phase, TickOutcome, TriggerCallback};
pub use config::{
    AnimationConfig, AnimationKind, PinConfig, PointerGuideConfig, SegmentConfig, SegmentText,
    SoundTrigger, TextAlignment, TextDirection, TextOrientation, TextStyle, TextStyleOverrides,
    WheelConfig,
};
pub use easing::{Curve, Easing};
pub use pins::PinPositions;
pub use wheel::{Frame, NullRenderer, Point, Renderer, Segment, Wheel, WheelError};
