/// Tokenizing errors.
///
/// Raised while splitting source text into tokens, before any structure is
/// known. Positions count characters, not bytes.
pub mod tokenize_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens: unexpected or missing tokens, unbalanced parentheses, nesting that
/// exceeds the configured depth and malformed number literals. Positions are
/// token indices.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the syntax tree:
/// division by zero, factorials outside their domain, undefined powers and
/// results beyond the exponent range. Each variant carries the operands that
/// caused it.
pub mod eval_error;
/// Configuration errors.
///
/// Raised when a precision, exponent limit or nesting depth is out of range.
pub mod config_error;

pub use config_error::ConfigError;
pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use tokenize_error::TokenizeError;

/// Any failure on the way from source text to a value.
///
/// Each phase has its own error type; this wrapper lets the whole pipeline
/// compose with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The text contained a character that starts no token.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    /// The tokens do not form an expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression has no value.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
