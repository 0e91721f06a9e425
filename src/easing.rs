//! Easing curves for the spin animation.
//!
//! A curve maps normalized elapsed time in `[0, 1]` to normalized progress in
//! `[0, 1]`. Named curves keep the GSAP-style names wheel configurations have
//! historically used (`Power3.easeOut` and friends); hosts can also hand in
//! any closure.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Named polynomial progress curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, EnumIter, StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Curve {
    #[strum(serialize = "linear")]
    Linear,
    #[strum(serialize = "Power1.easeIn")]
    QuadIn,
    #[strum(serialize = "Power1.easeOut")]
    QuadOut,
    #[strum(serialize = "Power1.easeInOut")]
    QuadInOut,
    #[strum(serialize = "Power2.easeIn")]
    CubicIn,
    #[strum(serialize = "Power2.easeOut")]
    CubicOut,
    #[strum(serialize = "Power2.easeInOut")]
    CubicInOut,
    #[strum(serialize = "easeIn", serialize = "Power3.easeIn")]
    QuartIn,
    /// The default spin curve, `1 - (1 - t)^4`.
    #[default]
    #[strum(serialize = "easeOut", serialize = "Power3.easeOut")]
    QuartOut,
    #[strum(serialize = "easeInOut", serialize = "Power3.easeInOut")]
    QuartInOut,
    #[strum(serialize = "Power4.easeOut")]
    QuintOut,
}

impl Curve {
    /// Eased progress for normalized time `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => ease_in(t, 2),
            Self::QuadOut => ease_out(t, 2),
            Self::QuadInOut => ease_in_out(t, 2),
            Self::CubicIn => ease_in(t, 3),
            Self::CubicOut => ease_out(t, 3),
            Self::CubicInOut => ease_in_out(t, 3),
            Self::QuartIn => ease_in(t, 4),
            Self::QuartOut => ease_out(t, 4),
            Self::QuartInOut => ease_in_out(t, 4),
            Self::QuintOut => ease_out(t, 5),
        }
    }
}

fn ease_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn ease_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        ease_in(2.0 * t, power) / 2.0
    } else {
        1.0 - ease_in(2.0 - 2.0 * t, power) / 2.0
    }
}

/// How a wheel specifies its progress curve: a known curve, a name looked up
/// when a run starts, or an arbitrary closure.
#[derive(Clone, SerializeDisplay, DeserializeFromStr)]
pub enum Easing {
    Curve(Curve),
    /// Resolved at run start; unknown names degrade to the default curve.
    Named(String),
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Easing {
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Resolves to a callable curve. An unrecognized name substitutes the
    /// default curve rather than failing the run.
    pub fn resolve(&self) -> ResolvedEasing {
        match self {
            Self::Curve(curve) => ResolvedEasing::Curve(*curve),
            Self::Named(name) => match Curve::from_str(name) {
                Ok(curve) => ResolvedEasing::Curve(curve),
                Err(_) => {
                    log::warn!(
                        "unknown easing curve '{name}', falling back to {}",
                        Curve::default()
                    );
                    ResolvedEasing::Curve(Curve::default())
                }
            },
            Self::Custom(f) => ResolvedEasing::Custom(f.clone()),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::Curve(Curve::default())
    }
}

impl FromStr for Easing {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match Curve::from_str(s) {
            Ok(curve) => Self::Curve(curve),
            Err(_) => Self::Named(s.to_owned()),
        })
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve(curve) => curve.fmt(f),
            Self::Named(name) => f.write_str(name),
            Self::Custom(_) => f.write_str("custom"),
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curve(curve) => f.debug_tuple("Curve").field(curve).finish(),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A resolved, callable curve held by a running animation.
#[derive(Clone)]
pub enum ResolvedEasing {
    Curve(Curve),
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl ResolvedEasing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Curve(curve) => curve.apply(t),
            Self::Custom(f) => f(t.clamp(0.0, 1.0)),
        }
    }
}

impl Default for ResolvedEasing {
    fn default() -> Self {
        Self::Curve(Curve::default())
    }
}
