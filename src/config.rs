//! Wheel configuration. Each entity gets its own struct with explicit field
//! defaults; a [`WheelConfig`] is an in-memory value the embedding
//! application builds (or deserializes) and hands to [`Wheel::new`].
//!
//! Display attributes — colors, fonts, text layout — are carried through to
//! the renderer untouched; the core never validates them.
//!
//! [`Wheel::new`]: crate::wheel::Wheel::new

use derive_more::{AsRef, Deref, Display, From, Into};
use palette::Srgba;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

use crate::angle::SpinDirection;
use crate::easing::Easing;
use crate::wheel::Point;

/// Display text for one segment.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct SegmentText(String);

impl SegmentText {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TextOrientation {
    #[default]
    #[strum(serialize = "horizontal")]
    Horizontal,
    #[strum(serialize = "vertical")]
    Vertical,
    #[strum(serialize = "curved")]
    Curved,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[strum(serialize = "inner")]
    Inner,
    #[default]
    #[strum(serialize = "center")]
    Center,
    #[strum(serialize = "outer")]
    Outer,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "reversed")]
    Reversed,
}

/// What a run is trying to do. Purely descriptive for `SpinOngoing`;
/// `SpinToStop` is expected to carry a `stop_angle`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    #[default]
    #[strum(serialize = "spinOngoing")]
    SpinOngoing,
    #[strum(serialize = "spinToStop")]
    SpinToStop,
}

/// What the sound callback watches for edge changes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, DeserializeFromStr, EnumString, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SoundTrigger {
    #[default]
    #[strum(serialize = "segment")]
    Segment,
    #[strum(serialize = "pin")]
    Pin,
}

/// Wheel-level text styling, applied to every segment that does not override
/// it. Opaque to the core's math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: String,
    pub orientation: TextOrientation,
    pub alignment: TextAlignment,
    pub direction: TextDirection,
    /// Distance between the text and the radius it aligns against.
    /// `None` means "just over half the font size".
    pub margin: Option<f64>,
    pub fill: Option<Srgba<f64>>,
    pub stroke: Option<Srgba<f64>>,
    pub line_width: f64,
}

impl TextStyle {
    pub fn effective_margin(&self) -> f64 {
        self.margin.unwrap_or(self.font_size / 1.7)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_owned(),
            font_size: 20.0,
            font_weight: "bold".to_owned(),
            orientation: TextOrientation::default(),
            alignment: TextAlignment::default(),
            direction: TextDirection::default(),
            margin: None,
            fill: Some(black()),
            stroke: None,
            line_width: 1.0,
        }
    }
}

/// Per-segment text overrides; anything unset falls back to the wheel style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextStyleOverrides {
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
    pub orientation: Option<TextOrientation>,
    pub alignment: Option<TextAlignment>,
    pub direction: Option<TextDirection>,
    pub margin: Option<f64>,
    pub fill: Option<Srgba<f64>>,
    pub stroke: Option<Srgba<f64>>,
    pub line_width: Option<f64>,
}

impl TextStyleOverrides {
    /// The wheel-level style with this segment's overrides applied. A helper
    /// for renderers; the core never calls it.
    pub fn resolve(&self, base: &TextStyle) -> TextStyle {
        TextStyle {
            font_family: self
                .font_family
                .clone()
                .unwrap_or_else(|| base.font_family.clone()),
            font_size: self.font_size.unwrap_or(base.font_size),
            font_weight: self
                .font_weight
                .clone()
                .unwrap_or_else(|| base.font_weight.clone()),
            orientation: self.orientation.unwrap_or(base.orientation),
            alignment: self.alignment.unwrap_or(base.alignment),
            direction: self.direction.unwrap_or(base.direction),
            margin: self.margin.or(base.margin),
            fill: self.fill.or(base.fill),
            stroke: self.stroke.or(base.stroke),
            line_width: self.line_width.unwrap_or(base.line_width),
        }
    }
}

/// Configuration for one segment. Every attribute is optional; omitted ones
/// fall back to the wheel-level value at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentConfig {
    /// Explicit arc size in degrees. Unset means "share the remaining arc
    /// evenly with the other auto-sized segments".
    pub size: Option<f64>,
    pub text: SegmentText,
    pub fill: Option<Srgba<f64>>,
    pub stroke: Option<Srgba<f64>>,
    pub line_width: Option<f64>,
    pub text_style: TextStyleOverrides,
}

/// Run parameters for the wheel's single animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    pub direction: SpinDirection,
    /// Run length in frames. Must be at least 1.
    pub duration: u32,
    /// Whole turns per run. With a `stop_angle`, a value of 0 is treated
    /// as 1.
    pub spins: u32,
    /// Target resting angle in degrees. When set, the total travel is
    /// adjusted so the run lands exactly here.
    pub stop_angle: Option<f64>,
    pub easing: Easing,
    /// Extra cycles after the first, `-1` for unbounded.
    pub repeat: i32,
    /// Reverse direction on each repeat cycle.
    pub yoyo: bool,
    pub sound_trigger: SoundTrigger,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            kind: AnimationKind::default(),
            direction: SpinDirection::default(),
            duration: 10,
            spins: 1,
            stop_angle: None,
            easing: Easing::default(),
            repeat: 0,
            yoyo: false,
            sound_trigger: SoundTrigger::default(),
        }
    }
}

/// Pin marker configuration. Positions come from
/// [`PinPositions`](crate::pins::PinPositions); everything else is renderer
/// styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PinConfig {
    pub visible: bool,
    pub number: u32,
    /// Radius of each pin head, not of the ring they sit on.
    pub outer_radius: f64,
    pub fill: Option<Srgba<f64>>,
    pub stroke: Option<Srgba<f64>>,
    pub line_width: f64,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            visible: false,
            number: 36,
            outer_radius: 3.0,
            fill: Some(grey()),
            stroke: Some(black()),
            line_width: 1.0,
        }
    }
}

/// Renderer-only toggle for a guide line drawn from the center out at the
/// pointer angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointerGuideConfig {
    pub display: bool,
    pub stroke: Srgba<f64>,
    pub line_width: f64,
}

impl Default for PointerGuideConfig {
    fn default() -> Self {
        Self {
            display: false,
            stroke: red(),
            line_width: 3.0,
        }
    }
}

/// Top-level wheel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WheelConfig {
    /// Number of segments the wheel is built with. Entries in `segments`
    /// beyond this count are ignored; missing entries get defaults.
    pub num_segments: usize,
    pub segments: Vec<SegmentConfig>,
    /// Wheel center in the renderer's coordinate space. `None` lets the
    /// renderer pick (typically the surface center).
    pub center: Option<Point>,
    pub outer_radius: Option<f64>,
    pub inner_radius: f64,
    /// Initial rotation in degrees; unbounded, not pre-normalized.
    pub rotation_angle: f64,
    /// Fixed reference angle for the rendered pointer. Not used by the
    /// indicated-segment resolver; see
    /// [`Wheel::indicated_segment_index`](crate::wheel::Wheel::indicated_segment_index).
    pub pointer_angle: f64,
    pub draw_text: bool,
    pub text: TextStyle,
    pub fill: Option<Srgba<f64>>,
    pub stroke: Option<Srgba<f64>>,
    pub line_width: f64,
    pub animation: AnimationConfig,
    pub pins: PinConfig,
    pub pointer_guide: PointerGuideConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            num_segments: 1,
            segments: Vec::new(),
            center: None,
            outer_radius: None,
            inner_radius: 0.0,
            rotation_angle: 0.0,
            pointer_angle: 0.0,
            draw_text: true,
            text: TextStyle::default(),
            fill: Some(silver()),
            stroke: Some(black()),
            line_width: 1.0,
            animation: AnimationConfig::default(),
            pins: PinConfig::default(),
            pointer_guide: PointerGuideConfig::default(),
        }
    }
}

fn silver() -> Srgba<f64> {
    Srgba::new(0.75, 0.75, 0.75, 1.0)
}

fn grey() -> Srgba<f64> {
    Srgba::new(0.5, 0.5, 0.5, 1.0)
}

fn black() -> Srgba<f64> {
    Srgba::new(0.0, 0.0, 0.0, 1.0)
}

fn red() -> Srgba<f64> {
    Srgba::new(0.8, 0.0, 0.0, 1.0)
}
