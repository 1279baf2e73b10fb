use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WindError;

/// Per-tick view of the weather and dimension the wind is simulated in.
///
/// Implemented by the host; [`Environment`] is a plain value implementation.
pub trait WeatherContext {
    /// Whether it is raining (thunder implies rain in most hosts).
    fn is_raining(&self) -> bool;

    /// Whether a thunderstorm is active.
    fn is_thundering(&self) -> bool;

    /// Whether the dimension has a natural day/night sky.
    fn is_natural_dimension(&self) -> bool;

    /// Whether the dimension is enclosed by a ceiling.
    fn has_ceiling(&self) -> bool;

    /// Whether the dimension is hot enough to drive its own air currents.
    fn is_ultrawarm(&self) -> bool;

    /// Natural wind is absent in unnatural or enclosed dimensions.
    fn suppresses_wind(&self) -> bool {
        !self.is_natural_dimension() || self.has_ceiling()
    }
}

/// Sky weather as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    /// No precipitation.
    #[default]
    Clear,
    /// Rain without thunder.
    Rain,
    /// Thunderstorm; also counts as rain.
    Thunder,
}

impl Weather {
    /// All weather kinds.
    pub const ALL: [Weather; 3] = [Weather::Clear, Weather::Rain, Weather::Thunder];

    /// Whether precipitation is falling.
    pub fn is_raining(self) -> bool {
        matches!(self, Weather::Rain | Weather::Thunder)
    }

    /// Whether thunder is active.
    pub fn is_thundering(self) -> bool {
        self == Weather::Thunder
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Thunder => "thunder",
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weather {
    type Err = WindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weather::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WindError::UnknownName {
                kind: "weather",
                name: s.to_string(),
            })
    }
}

/// Dimension presets matching the three vanilla dimension kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Natural surface world with an open sky.
    #[default]
    Overworld,
    /// Enclosed, ultrawarm underworld.
    Nether,
    /// Unnatural void dimension without a ceiling.
    End,
}

impl Dimension {
    /// All dimension presets.
    pub const ALL: [Dimension; 3] = [Dimension::Overworld, Dimension::Nether, Dimension::End];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Overworld => "overworld",
            Dimension::Nether => "nether",
            Dimension::End => "end",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = WindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WindError::UnknownName {
                kind: "dimension",
                name: s.to_string(),
            })
    }
}

/// A concrete weather and dimension snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Current sky weather.
    pub weather: Weather,
    /// Whether the dimension is natural.
    pub natural: bool,
    /// Whether the dimension has a ceiling.
    pub ceiling: bool,
    /// Whether the dimension is ultrawarm.
    pub ultrawarm: bool,
}

impl Environment {
    /// Build an environment from a dimension preset with clear weather.
    pub fn new(dimension: Dimension) -> Self {
        let (natural, ceiling, ultrawarm) = match dimension {
            Dimension::Overworld => (true, false, false),
            Dimension::Nether => (false, true, true),
            Dimension::End => (false, false, false),
        };
        Self {
            weather: Weather::Clear,
            natural,
            ceiling,
            ultrawarm,
        }
    }

    /// The natural surface world under a clear sky.
    pub fn overworld() -> Self {
        Self::new(Dimension::Overworld)
    }

    /// The enclosed, ultrawarm underworld.
    pub fn nether() -> Self {
        Self::new(Dimension::Nether)
    }

    /// The unnatural void dimension.
    pub fn end() -> Self {
        Self::new(Dimension::End)
    }

    /// Replace the weather.
    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = weather;
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::overworld()
    }
}

impl WeatherContext for Environment {
    fn is_raining(&self) -> bool {
        self.weather.is_raining()
    }

    fn is_thundering(&self) -> bool {
        self.weather.is_thundering()
    }

    fn is_natural_dimension(&self) -> bool {
        self.natural
    }

    fn has_ceiling(&self) -> bool {
        self.ceiling
    }

    fn is_ultrawarm(&self) -> bool {
        self.ultrawarm
    }
}
