use std::f32::consts::TAU;

use gust_math::{SmoothNoise, TriangularDistribution};
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::WindConfig;
use crate::environment::WeatherContext;
use crate::error::WindResult;
use crate::shared::{SharedWind, WindVector};
use crate::state::WindState;
use crate::transition::{StateTransition, TransitionCause, TransitionLog};

/// Randomness and the active speed distribution, lent to noise tracks when they resample.
struct Sampling<'a> {
    rng: &'a mut StdRng,
    velocity: &'a TriangularDistribution,
}

impl Sampling<'_> {
    fn uniform(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn speed(&mut self) -> f32 {
        self.velocity.sample(&mut *self.rng)
    }
}

type ResampleFn = fn(f32, &mut Sampling<'_>) -> f32;

fn resample_velocity(_previous: f32, sampling: &mut Sampling<'_>) -> f32 {
    sampling.speed()
}

fn resample_direction_trend(_previous: f32, sampling: &mut Sampling<'_>) -> f32 {
    sampling.uniform() * TAU
}

fn resample_direction(_previous: f32, sampling: &mut Sampling<'_>) -> f32 {
    (2.0 * sampling.uniform() - 1.0) * TAU / 8.0
}

/// Ambient wind driven by weather and dimension.
///
/// Call [`Wind::tick`] once per simulation tick with the current
/// [`WeatherContext`], then read the vector through the getters. Ticking
/// must not run concurrently with itself; hand a [`SharedWind`] to readers
/// on other threads instead of sharing the simulation.
pub struct Wind {
    config: WindConfig,
    rng: StdRng,
    distributions: [TriangularDistribution; 3],

    wind_x: f32,
    wind_z: f32,
    velocity_noise: SmoothNoise<ResampleFn>,
    direction_trend_noise: SmoothNoise<ResampleFn>,
    direction_noise: SmoothNoise<ResampleFn>,

    was_raining: bool,
    was_thundering: bool,
    state: WindState,
    original_state: Option<WindState>,
    /// Ticks until the state is re-rolled; keeps counting down below zero
    /// while a dimension override is active.
    state_duration: i64,

    ticks: u64,
    transitions: TransitionLog,
}

impl std::fmt::Debug for Wind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wind")
            .field("tick", &self.ticks)
            .field("state", &self.state)
            .field("original_state", &self.original_state)
            .field("state_duration", &self.state_duration)
            .field("wind_x", &self.wind_x)
            .field("wind_z", &self.wind_z)
            .finish()
    }
}

impl Wind {
    /// Create a wind simulation in the calm state with a zero vector.
    pub fn new(config: WindConfig) -> WindResult<Self> {
        config.validate()?;

        let distributions = [
            WindState::Calm.velocity_distribution()?,
            WindState::Windy.velocity_distribution()?,
            WindState::Stormy.velocity_distribution()?,
        ];
        let mut rng = StdRng::seed_from_u64(config.seed);
        let trend_start = rng.random::<f32>() * TAU;

        let velocity_noise =
            SmoothNoise::new(config.velocity_period, 0.0, resample_velocity as ResampleFn)?;
        let direction_trend_noise = SmoothNoise::new(
            config.direction_trend_period,
            trend_start,
            resample_direction_trend as ResampleFn,
        )?;
        let direction_noise =
            SmoothNoise::new(config.direction_period, 0.0, resample_direction as ResampleFn)?;

        Ok(Self {
            transitions: TransitionLog::new(config.max_transitions),
            config,
            rng,
            distributions,
            wind_x: 0.0,
            wind_z: 0.0,
            velocity_noise,
            direction_trend_noise,
            direction_noise,
            was_raining: false,
            was_thundering: false,
            state: WindState::Calm,
            original_state: None,
            state_duration: 0,
            ticks: 0,
        })
    }

    /// Return to the calm state with a zero vector and fresh noise tracks.
    ///
    /// Meant for world changes. The RNG keeps its position, so a reset
    /// instance behaves like a fresh one statistically but not bitwise.
    pub fn reset(&mut self) {
        self.state = WindState::Calm;
        self.original_state = None;
        self.state_duration = 0;
        self.was_raining = false;
        self.was_thundering = false;
        self.wind_x = 0.0;
        self.wind_z = 0.0;
        self.ticks = 0;
        self.transitions.clear();

        let trend_start = self.rng.random::<f32>() * TAU;
        self.velocity_noise.reset(0.0);
        self.direction_trend_noise.reset(trend_start);
        self.direction_noise.reset(0.0);
        tracing::debug!("wind reset");
    }

    /// Advance one tick under the given weather and dimension.
    ///
    /// Returns the state transition this tick caused, if any.
    pub fn tick(&mut self, ctx: &impl WeatherContext) -> Option<StateTransition> {
        self.ticks += 1;
        let before = self.state;
        let cause = self.tick_state(ctx);

        let mut sampling = Sampling {
            rng: &mut self.rng,
            velocity: &self.distributions[self.state.index()],
        };
        self.velocity_noise.tick(&mut sampling);
        self.direction_trend_noise.tick(&mut sampling);
        self.direction_noise.tick(&mut sampling);

        let strength = self.speed();
        let direction = self.direction();
        self.wind_x = strength * direction.cos();
        self.wind_z = strength * direction.sin();

        let cause = cause.filter(|_| before != self.state)?;
        let transition = StateTransition {
            tick: self.ticks,
            from: before,
            to: self.state,
            cause,
        };
        tracing::debug!(
            tick = transition.tick,
            from = %transition.from,
            to = %transition.to,
            cause = %transition.cause,
            "wind state changed"
        );
        self.transitions.push(transition);
        Some(transition)
    }

    /// Update the state machine, returning what last changed the state.
    fn tick_state(&mut self, ctx: &impl WeatherContext) -> Option<TransitionCause> {
        self.state_duration -= 1;

        if ctx.suppresses_wind() {
            // Only the first suppressed tick saves; later ones would save the forced state.
            if self.original_state.is_none() {
                self.original_state = Some(self.state);
            }
            self.state = if ctx.is_ultrawarm() {
                WindState::Windy
            } else {
                WindState::Calm
            };
            return Some(TransitionCause::DimensionOverride);
        }

        let mut cause = None;
        if let Some(saved) = self.original_state.take() {
            self.state = saved;
            cause = Some(TransitionCause::DimensionRestored);
        }

        let raining = ctx.is_raining();
        let thundering = ctx.is_thundering();
        let weather_changed = self.was_raining != raining || self.was_thundering != thundering;

        if weather_changed || self.state_duration <= 0 {
            self.state = if thundering {
                WindState::Stormy
            } else {
                // Calm or windy when dry, windy or stormy when raining.
                let index = self.rng.random_range(0..2) + usize::from(raining);
                WindState::ALL[index]
            };
            self.state_duration = i64::from(self.config.state_duration);
            cause = Some(if weather_changed {
                TransitionCause::Weather
            } else {
                TransitionCause::Expired
            });
        }

        self.was_raining = raining;
        self.was_thundering = thundering;
        cause
    }

    /// East-west wind component.
    pub fn wind_x(&self) -> f32 {
        self.wind_x
    }

    /// North-south wind component.
    pub fn wind_z(&self) -> f32 {
        self.wind_z
    }

    /// The current wind vector.
    pub fn vector(&self) -> WindVector {
        WindVector::new(self.wind_x, self.wind_z)
    }

    /// Publish the current vector for readers on other threads.
    pub fn publish_to(&self, shared: &SharedWind) {
        shared.publish(self.vector());
    }

    /// Current wind speed, before it is split into components.
    pub fn speed(&self) -> f32 {
        self.velocity_noise.noise()
    }

    /// Current heading in radians (not wrapped into a single turn).
    pub fn direction(&self) -> f32 {
        self.direction_noise.lerp() + self.direction_noise.noise()
    }

    /// Slowly drifting heading, in `[0, TAU)` at resample points.
    pub fn direction_trend(&self) -> f32 {
        self.direction_trend_noise.noise()
    }

    /// The effective wind state.
    pub fn state(&self) -> WindState {
        self.state
    }

    /// The state saved while a dimension override is active.
    pub fn original_state(&self) -> Option<WindState> {
        self.original_state
    }

    /// Ticks left before the state is re-rolled.
    pub fn state_duration(&self) -> i64 {
        self.state_duration
    }

    /// Ticks since construction or the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Recorded state transitions.
    pub fn transitions(&self) -> &TransitionLog {
        &self.transitions
    }

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &WindConfig {
        &self.config
    }
}
