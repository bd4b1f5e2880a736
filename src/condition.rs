//! Weather condition classification

use std::fmt;

use rand::Rng;

use crate::constants::*;

/// Top and bottom stops of the vertical sky gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub top: &'static str,
    pub bottom: &'static str,
}

impl Gradient {
    const fn from_pair((top, bottom): (&'static str, &'static str)) -> Self {
        Self { top, bottom }
    }
}

/// Kind of falling particle a condition produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precipitation {
    Rain,
    Snow,
}

impl Precipitation {
    pub fn count(self) -> usize {
        match self {
            Self::Rain => RAIN_PARTICLE_COUNT,
            Self::Snow => SNOW_PARTICLE_COUNT,
        }
    }

    pub fn size_range(self) -> (f64, f64) {
        match self {
            Self::Rain => RAIN_SIZE,
            Self::Snow => SNOW_SIZE,
        }
    }

    pub fn speed_range(self) -> (f64, f64) {
        match self {
            Self::Rain => RAIN_SPEED_Y,
            Self::Snow => SNOW_SPEED_Y,
        }
    }
}

/// Primary weather category reported upstream.
///
/// Anything the renderer does not recognise (mist, fog, haze, ...) is
/// treated as [`Condition::Clear`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Condition {
    #[default]
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Self::Clear,
        Self::Clouds,
        Self::Rain,
        Self::Drizzle,
        Self::Snow,
        Self::Thunderstorm,
    ];

    /// Normalizes an optional upstream label, case-insensitively.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return Self::Clear;
        };

        match label.to_ascii_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "snow" => Self::Snow,
            "thunderstorm" => Self::Thunderstorm,
            other => {
                log::debug!("unrecognized condition {other:?}, using clear sky");
                Self::Clear
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Drizzle => "drizzle",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
        }
    }

    pub fn gradient(self) -> Gradient {
        Gradient::from_pair(match self {
            Self::Clear => CLEAR_GRADIENT,
            Self::Clouds => CLOUDS_GRADIENT,
            Self::Rain | Self::Drizzle => RAIN_GRADIENT,
            Self::Snow => SNOW_GRADIENT,
            Self::Thunderstorm => THUNDERSTORM_GRADIENT,
        })
    }

    pub fn precipitation(self) -> Option<Precipitation> {
        match self {
            Self::Rain | Self::Drizzle => Some(Precipitation::Rain),
            Self::Snow => Some(Precipitation::Snow),
            Self::Clear | Self::Clouds | Self::Thunderstorm => None,
        }
    }

    pub fn has_clouds(self) -> bool {
        self != Self::Clear
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform sample in `[lo, hi)`. Collapses to `lo` for an empty range, so a
/// zero-sized surface never panics.
pub(crate) fn uniform(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}
