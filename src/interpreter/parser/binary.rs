use crate::{
    interpreter::{
        lexer::Token,
        operators::{Fixing, lookup},
        parser::core::{ParseResult, Parser, Subtree},
    },
    trace_categories,
};

impl Parser<'_> {
    /// Parses an expression whose infix operators all bind at least as tightly
    /// as `min_precedence`.
    ///
    /// After the leading prefix term, the loop
    /// - wraps the current node in every postfix operator it meets, so `3!+1`
    ///   applies `!` before looking at `+`;
    /// - folds an infix operator with `precedence >= min_precedence`, parsing
    ///   its right operand at the operator's next minimum precedence;
    /// - stops at anything else, leaving it for the caller.
    ///
    /// Rule: `expr(min) := prefix_term { infix_op expr(next_min) | postfix_op
    /// }*`
    ///
    /// # Parameters
    /// - `min_precedence`: Lowest infix precedence this call may consume.
    ///
    /// # Returns
    /// The folded expression tree and its height.
    pub(crate) fn parse_expression(&mut self, min_precedence: u8) -> ParseResult<Subtree> {
        self.nested(|parser| {
                let mut left = parser.parse_prefix_term()?;

                while let Some(Token::Symbol(symbol)) = parser.peek() {
                    if let Some(op) = lookup(*symbol, Fixing::Postfix) {
                        parser.advance();
                        left = parser.unary_node(op, left)?;
                        continue;
                    }

                    let Some(op) = lookup(*symbol, Fixing::Infix) else {
                        break;
                    };
                    if op.precedence() < min_precedence {
                        break;
                    }

                    parser.advance();
                    tracing::trace!(target: trace_categories::PARSE,
                                    "infix '{op}' at {} (min {min_precedence})",
                                    parser.position() - 1);
                    let right = parser.parse_expression(op.next_min_precedence())?;
                    left = parser.binary_node(op, left, right)?;
                }

                Ok(left)
            })
    }
}
