use std::fmt;
use std::str::FromStr;

use gust_math::TriangularDistribution;
use serde::{Deserialize, Serialize};

use crate::error::{WindError, WindResult};

/// A weather-linked wind regime governing the range of sampled speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindState {
    /// Light breeze, most likely at its lowest speed.
    #[default]
    Calm,
    /// Steady wind.
    Windy,
    /// Strong gusts during thunderstorms.
    Stormy,
}

impl WindState {
    /// All states, ordered from weakest to strongest.
    pub const ALL: [WindState; 3] = [WindState::Calm, WindState::Windy, WindState::Stormy];

    /// Upper bound of wind speed across every state.
    pub const MAX_SPEED: f32 = 1.1;

    /// Speed parameters as `(min_speed, likely_speed, max_speed)`.
    pub fn speed_range(self) -> (f32, f32, f32) {
        match self {
            WindState::Calm => (0.05, 0.05, 0.2),
            WindState::Windy => (0.05, 0.3, 0.7),
            WindState::Stormy => (0.05, 0.6, 1.1),
        }
    }

    /// Build the triangular speed distribution for this state.
    pub fn velocity_distribution(self) -> WindResult<TriangularDistribution> {
        let (min, likely, max) = self.speed_range();
        TriangularDistribution::new(min, likely, max).map_err(WindError::from)
    }

    /// Position of this state in [`WindState::ALL`].
    pub fn index(self) -> usize {
        match self {
            WindState::Calm => 0,
            WindState::Windy => 1,
            WindState::Stormy => 2,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            WindState::Calm => "calm",
            WindState::Windy => "windy",
            WindState::Stormy => "stormy",
        }
    }
}

impl fmt::Display for WindState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindState {
    type Err = WindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindState::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WindError::UnknownName {
                kind: "wind state",
                name: s.to_string(),
            })
    }
}
