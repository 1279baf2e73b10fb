//! Tick-based ambient wind simulation for Gust.
//!
//! A [`Wind`] combines three smoothed-noise tracks with a weather-driven
//! state machine ([`WindState`]) and produces a 2D wind vector once per
//! tick. The host supplies weather and dimension information through the
//! [`WeatherContext`] trait; renderers on other threads can read the
//! latest vector through a [`SharedWind`] handle.

/// Configuration for a wind simulation.
pub mod config;
/// Weather and dimension context consumed each tick.
pub mod environment;
/// Error types for the wind crate.
pub mod error;
/// Lock-free snapshot publication of the wind vector.
pub mod shared;
/// Wind regimes and their speed distributions.
pub mod state;
/// State transition records and their bounded log.
pub mod transition;
/// The wind simulation itself.
pub mod wind;

/// Re-exports of [`config::WindConfig`] and [`config::TICKS_PER_SECOND`].
pub use config::{TICKS_PER_SECOND, WindConfig};
/// Re-exports of the environment types.
pub use environment::{Dimension, Environment, Weather, WeatherContext};
/// Re-exports of [`error::WindError`] and [`error::WindResult`].
pub use error::{WindError, WindResult};
/// Re-exports of [`shared::SharedWind`] and [`shared::WindVector`].
pub use shared::{SharedWind, WindVector};
/// Re-export of [`state::WindState`].
pub use state::WindState;
/// Re-exports of the transition types.
pub use transition::{StateTransition, TransitionCause, TransitionLog};
/// Re-export of [`wind::Wind`].
pub use wind::Wind;
