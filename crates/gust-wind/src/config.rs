use crate::error::{WindError, WindResult};

/// Simulation ticks per real-time second.
pub const TICKS_PER_SECOND: u32 = 20;

/// Configuration for a wind simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct WindConfig {
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Ticks between wind speed resamples.
    pub velocity_period: u32,
    /// Ticks between resamples of the slow direction trend.
    pub direction_trend_period: u32,
    /// Ticks between resamples of the short-term direction offset.
    pub direction_period: u32,
    /// Ticks a wind state lasts before it is re-rolled.
    pub state_duration: u32,
    /// Maximum transition log size (oldest dropped when exceeded). 0 = unlimited.
    pub max_transitions: usize,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            velocity_period: 2 * TICKS_PER_SECOND,
            direction_trend_period: 30 * 60 * TICKS_PER_SECOND,
            direction_period: 10 * TICKS_PER_SECOND,
            state_duration: 6 * 60 * TICKS_PER_SECOND,
            max_transitions: 256,
        }
    }
}

impl WindConfig {
    /// Set the RNG seed for deterministic simulation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the wind speed resample period, in ticks.
    pub fn with_velocity_period(mut self, ticks: u32) -> Self {
        self.velocity_period = ticks;
        self
    }

    /// Set the direction trend resample period, in ticks.
    pub fn with_direction_trend_period(mut self, ticks: u32) -> Self {
        self.direction_trend_period = ticks;
        self
    }

    /// Set the short-term direction resample period, in ticks.
    pub fn with_direction_period(mut self, ticks: u32) -> Self {
        self.direction_period = ticks;
        self
    }

    /// Set how long a wind state lasts, in ticks.
    pub fn with_state_duration(mut self, ticks: u32) -> Self {
        self.state_duration = ticks;
        self
    }

    /// Set the maximum transition log size (0 = unlimited).
    pub fn with_max_transitions(mut self, max: usize) -> Self {
        self.max_transitions = max;
        self
    }

    /// Check that every period and duration is at least one tick.
    pub fn validate(&self) -> WindResult<()> {
        let fields = [
            ("velocity_period", self.velocity_period),
            ("direction_trend_period", self.direction_trend_period),
            ("direction_period", self.direction_period),
            ("state_duration", self.state_duration),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(WindError::InvalidConfig(format!(
                    "{name} must be at least one tick"
                )));
            }
        }
        Ok(())
    }
}
