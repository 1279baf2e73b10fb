//! Error types for the math primitives.

/// Errors raised when constructing a distribution or noise track.
///
/// These indicate a misconfigured caller, never a runtime condition:
/// sampling and ticking are infallible once construction succeeded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// Triangular parameters violate `min <= mode <= max` or are not finite.
    #[error("invalid triangular distribution: min={min}, mode={mode}, max={max}")]
    InvalidDistribution {
        /// Lower bound.
        min: f32,
        /// Most likely value.
        mode: f32,
        /// Upper bound.
        max: f32,
    },

    /// A noise track was given a period of zero ticks.
    #[error("noise period must be at least one tick")]
    ZeroPeriod,
}

/// Convenience result type for math operations.
pub type MathResult<T> = Result<T, MathError>;
