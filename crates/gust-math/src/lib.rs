//! Sampling and smoothed-noise primitives for Gust.
//!
//! Provides a triangular speed distribution and a periodically resampled,
//! linearly interpolated noise track. Both are independent of any wind
//! semantics; the `gust-wind` crate composes them into a simulation.

/// Error types for the math crate.
pub mod error;
/// Periodically resampled, linearly interpolated noise.
pub mod smooth_noise;
/// Triangular probability distribution.
pub mod triangular;

/// Re-exports of [`error::MathError`] and [`error::MathResult`].
pub use error::{MathError, MathResult};
/// Re-exports of [`smooth_noise::SmoothNoise`] and [`smooth_noise::Resample`].
pub use smooth_noise::{Resample, SmoothNoise};
/// Re-export of [`triangular::TriangularDistribution`].
pub use triangular::TriangularDistribution;
