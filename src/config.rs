use crate::error::ConfigError;

/// Number of significant digits kept by arithmetic results unless configured
/// otherwise.
pub const DEFAULT_PRECISION: u32 = 28;
/// Largest adjusted exponent a result may have before it overflows.
pub const DEFAULT_MAX_EXPONENT: i64 = 999_999;
/// Deepest nesting of sub-expressions, and tallest syntax tree, the parser
/// accepts.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Upper bound accepted for [`Config::with_precision`].
pub const MAX_PRECISION: u32 = 1_000_000;
/// Upper bound accepted for [`Config::with_max_exponent`].
pub const MAX_EXPONENT_LIMIT: i64 = 999_999_999_999_999_999;

/// Evaluation settings shared by the parser and the evaluator.
///
/// A `Config` is built once (the command-line front end builds it at startup
/// from its arguments) and passed by reference into every evaluation. There is
/// no global precision state: two evaluations with different configurations
/// can run side by side.
///
/// ## Example
/// ```
/// use minicalc::config::Config;
///
/// let config = Config::default().with_precision(10).unwrap();
///
/// assert_eq!(config.precision(), 10);
/// assert_eq!(config.max_exponent(), 999_999);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    precision:    u32,
    max_exponent: i64,
    max_depth:    usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration holding the default limits: 28 significant
    /// digits, adjusted exponents within `±999_999` and a nesting depth of 512.
    #[must_use]
    pub const fn new() -> Self {
        Self { precision:    DEFAULT_PRECISION,
               max_exponent: DEFAULT_MAX_EXPONENT,
               max_depth:    DEFAULT_MAX_DEPTH, }
    }

    /// Returns a copy of `self` keeping `precision` significant digits.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidPrecision`] when `precision` is zero or
    /// larger than [`MAX_PRECISION`].
    pub const fn with_precision(self, precision: u32) -> Result<Self, ConfigError> {
        if precision == 0 || precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision { precision });
        }
        Ok(Self { precision, ..self })
    }

    /// Returns a copy of `self` with results limited to adjusted exponents in
    /// `-max_exponent..=max_exponent`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidMaxExponent`] when `max_exponent` is not
    /// in `1..=MAX_EXPONENT_LIMIT`.
    pub const fn with_max_exponent(self, max_exponent: i64) -> Result<Self, ConfigError> {
        if max_exponent < 1 || max_exponent > MAX_EXPONENT_LIMIT {
            return Err(ConfigError::InvalidMaxExponent { max_exponent });
        }
        Ok(Self { max_exponent, ..self })
    }

    /// Returns a copy of `self` accepting at most `max_depth` nested
    /// sub-expressions and trees at most `max_depth` operators tall.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidMaxDepth`] when `max_depth` is zero.
    pub const fn with_max_depth(self, max_depth: usize) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth);
        }
        Ok(Self { max_depth, ..self })
    }

    /// Number of significant digits kept by arithmetic results.
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Largest adjusted exponent a result may have.
    #[must_use]
    pub const fn max_exponent(&self) -> i64 {
        self.max_exponent
    }

    /// Deepest nesting and tallest tree the parser accepts.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}
