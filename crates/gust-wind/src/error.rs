use gust_math::MathError;

/// Errors raised while building a wind simulation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindError {
    /// A noise track or speed distribution rejected its parameters.
    #[error(transparent)]
    Math(#[from] MathError),

    /// A configuration value is out of range.
    #[error("invalid wind config: {0}")]
    InvalidConfig(String),

    /// A name did not match any known state, weather, or dimension.
    #[error("unknown {kind}: '{name}'")]
    UnknownName {
        /// What was being parsed.
        kind: &'static str,
        /// The rejected input.
        name: String,
    },
}

/// Convenience result type for wind operations.
pub type WindResult<T> = Result<T, WindError>;
