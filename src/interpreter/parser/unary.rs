use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        operators::{Fixing, lookup},
        parser::core::{ParseResult, Parser, Subtree},
        value::decimal::Decimal,
    },
};

impl Parser<'_> {
    /// Parses a chain of prefix operators followed by a primary.
    ///
    /// Prefix operators recurse straight into another prefix term, so they
    /// bind tighter than any infix operator: `~2^2` is `(~2)^2`.
    ///
    /// Grammar:
    /// ```text
    ///     prefix_term := prefix_op prefix_term
    ///                  | primary
    /// ```
    pub(crate) fn parse_prefix_term(&mut self) -> ParseResult<Subtree> {
        if let Some(Token::Symbol(symbol)) = self.peek()
           && let Some(op) = lookup(*symbol, Fixing::Prefix)
        {
            self.advance();
            let operand = self.nested(Self::parse_prefix_term)?;
            return self.unary_node(op, operand);
        }
        self.parse_primary()
    }

    /// Parses a number literal or a parenthesized expression.
    ///
    /// # Errors
    /// - [`ParseError::UnexpectedEndOfInput`] when no token is left.
    /// - [`ParseError::UnexpectedToken`] for an operator or `)`.
    /// - [`ParseError::UnclosedParenthesis`] when the sub-expression is not
    ///   followed by `)`; the position is that of the `(`.
    /// - [`ParseError::InvalidNumber`] for a number token that is not a
    ///   decimal literal.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Subtree> {
        let position = self.position();

        match self.advance() {
            Some(Token::Number(literal)) => {
                literal.parse::<Decimal>()
                       .map(|value| Subtree::leaf(Node::Number(value)))
                       .map_err(|_| ParseError::InvalidNumber { literal: literal.clone(),
                                                                position })
            },
            Some(Token::LeftParen) => {
                let inner = self.parse_expression(0)?;
                if let Some(Token::RightParen) = self.peek() {
                    self.advance();
                    Ok(inner)
                } else {
                    Err(ParseError::UnclosedParenthesis { position })
                }
            },
            Some(token) => Err(ParseError::UnexpectedToken { token: token.clone(),
                                                             position }),
            None => Err(ParseError::UnexpectedEndOfInput { position }),
        }
    }
}
