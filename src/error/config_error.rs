use crate::config::{MAX_EXPONENT_LIMIT, MAX_PRECISION};

/// Represents all errors that can occur while building a
/// [`Config`](crate::config::Config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Precision outside `1..=MAX_PRECISION`.
    #[error("precision must be between 1 and {} digits, got {precision}", MAX_PRECISION)]
    InvalidPrecision {
        /// The rejected precision.
        precision: u32,
    },
    /// Exponent limit outside `1..=MAX_EXPONENT_LIMIT`.
    #[error("maximum exponent must be between 1 and {}, got {max_exponent}", MAX_EXPONENT_LIMIT)]
    InvalidMaxExponent {
        /// The rejected limit.
        max_exponent: i64,
    },
    /// A nesting depth of zero.
    #[error("maximum nesting depth must be at least 1")]
    InvalidMaxDepth,
}
