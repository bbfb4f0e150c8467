use crate::interpreter::lexer::Token;

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token sequence was empty.
    #[error("empty expression")]
    EmptyInput,
    /// Found a token where an operand was expected.
    #[error("unexpected token '{token}' at position {position}")]
    UnexpectedToken {
        /// The token encountered.
        token:    Token,
        /// Index of the token in the token sequence.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput {
        /// Index one past the last token.
        position: usize,
    },
    /// A `(` was never closed.
    #[error("unclosed parenthesis at position {position}")]
    UnclosedParenthesis {
        /// Index of the opening parenthesis.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("unexpected trailing token '{token}' at position {position}")]
    UnexpectedTrailingToken {
        /// The first extra token.
        token:    Token,
        /// Index of the token in the token sequence.
        position: usize,
    },
    /// Sub-expressions were nested deeper, or operators chained longer, than
    /// the configured limit.
    #[error("expression nested deeper than {limit} levels at position {position}")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Index of the token where the limit was hit.
        position: usize,
    },
    /// A number token whose text is not a decimal literal.
    #[error("invalid number '{literal}' at position {position}")]
    InvalidNumber {
        /// The literal text.
        literal:  String,
        /// Index of the token in the token sequence.
        position: usize,
    },
}
