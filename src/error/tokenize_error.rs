/// Represents all errors that can occur while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// A character that is neither whitespace, part of a number, an operator
    /// nor a parenthesis.
    #[error("unrecognized character '{character}' at position {position}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character offset into the source text.
        position:  usize,
    },
}
