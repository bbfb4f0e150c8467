use std::fmt;

use logos::Logos;

use crate::{error::TokenizeError, trace_categories};

/// Represents a lexical token in the source input.
///
/// Whitespace separates tokens and is otherwise dropped. Tokens carry no
/// offsets; the parser reports positions as indices into the token sequence.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `2.50`. The text is kept as
    /// written so no digits are lost before the parser converts it.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// A single operator character. Whether it is prefix, infix or postfix is
    /// decided by the parser from its position.
    #[regex(r"[-+*/%^@$&~!]", |lex| lex.slice().chars().next())]
    Symbol(char),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Splits `source` into tokens.
///
/// Numbers match `[0-9]+(\.[0-9]+)?` greedily, so `1.5.2` is the number
/// `1.5` followed by an unrecognized `.`.
///
/// # Errors
/// Returns [`TokenizeError::UnrecognizedCharacter`] for the first character
/// that cannot start a token. Its position counts characters, not bytes.
///
/// ## Example
/// ```
/// use minicalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 * (3.5 - 1)").unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::Number("2".to_string()),
///                 Token::Symbol('*'),
///                 Token::LeftParen,
///                 Token::Number("3.5".to_string()),
///                 Token::Symbol('-'),
///                 Token::Number("1".to_string()),
///                 Token::RightParen]);
///
/// assert!(tokenize("2 # 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push(token);
        } else {
            let start = lexer.span().start;
            let character = source[start..].chars().next().unwrap_or_default();
            let position = source[..start].chars().count();
            tracing::debug!(target: trace_categories::TOKENIZE,
                            "unrecognized {character:?} at {position}");
            return Err(TokenizeError::UnrecognizedCharacter { character, position });
        }
    }

    tracing::debug!(target: trace_categories::TOKENIZE,
                    "{} token(s) from {source:?}",
                    tokens.len());
    Ok(tokens)
}
