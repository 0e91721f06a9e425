//! Pure angular arithmetic in degrees. All wheel math stays in degrees and
//! only converts to radians at the rendering seam.

use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

/// Full circle in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Direction the wheel rotates in. Clockwise increases the rotation angle,
/// counterclockwise decreases it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SpinDirection {
    #[default]
    #[strum(serialize = "clockwise", serialize = "cw")]
    Clockwise,
    #[strum(serialize = "counterclockwise", serialize = "ccw")]
    Counterclockwise,
}

impl SpinDirection {
    pub fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
        }
    }

    /// Sign applied to angular travel in this direction.
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::Counterclockwise => -1.0,
        }
    }
}

/// Normalizes an angle into `[0, 360)`, adding one period back for negative
/// input. Idempotent.
pub fn normalize(angle: f64) -> f64 {
    let wrapped = angle % FULL_TURN;
    if wrapped < 0.0 { wrapped + FULL_TURN } else { wrapped }
}

/// Extra travel beyond whole turns needed to land on `stop` when walking from
/// `start` in `direction`.
///
/// Clockwise runs lengthen by the forward distance to the target;
/// counterclockwise runs shorten by it. Either way,
/// `360 * spins + signed_delta(start, stop, direction)` parks a wheel that
/// started at `start` exactly on `stop`. Used only for target-angle
/// resolution, never for indicated-segment lookup.
pub fn signed_delta(start: f64, stop: f64, direction: SpinDirection) -> f64 {
    direction.sign() * normalize(stop - start)
}
