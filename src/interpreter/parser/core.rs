use crate::{
    ast::Node,
    config::Config,
    error::ParseError,
    interpreter::{lexer::Token, operators::Operator},
    trace_categories,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed node together with the height of the tree below it.
///
/// Literals have height 0; every operator node is one above its tallest
/// operand.
#[derive(Debug)]
pub(crate) struct Subtree {
    pub(crate) node:   Node,
    pub(crate) height: usize,
}

impl Subtree {
    pub(crate) const fn leaf(node: Node) -> Self {
        Self { node, height: 0 }
    }
}

/// Precedence-climbing parser over a token slice.
///
/// The cursor only moves forward. Every recursive step goes through
/// [`Parser::nested`], and every operator node checks the height of the tree
/// it completes, so deeply nested input and long flat chains such as
/// `1+1+...+1` fail with [`ParseError::NestingTooDeep`] instead of exhausting
/// the stack while the tree is parsed, evaluated, rendered or dropped.
///
/// Grammar:
/// ```text
///     expr(min)  := prefix_term { infix_op expr(next_min) | postfix_op }*
///     prefix_term := prefix_op prefix_term | primary
///     primary    := NUMBER | "(" expr(0) ")"
/// ```
///
/// ## Example
/// ```
/// use minicalc::{
///     config::Config,
///     interpreter::{lexer::tokenize, parser::core::Parser},
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let tree = Parser::new(&tokens, &Config::default()).parse().unwrap();
///
/// assert_eq!(tree.to_string(), "1+(2*3)");
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    tokens:    &'a [Token],
    position:  usize,
    depth:     usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token], config: &Config) -> Self {
        Self { tokens,
               position: 0,
               depth: 0,
               max_depth: config.max_depth() }
    }

    /// Parses the whole token slice as one expression.
    ///
    /// # Errors
    /// - [`ParseError::EmptyInput`] if there are no tokens.
    /// - [`ParseError::UnexpectedTrailingToken`] if tokens remain after a
    ///   complete expression.
    /// - Any error raised while parsing the expression itself.
    pub fn parse(mut self) -> ParseResult<Node> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let tree = self.parse_expression(0)?.node;
        if let Some(token) = self.peek() {
            return Err(ParseError::UnexpectedTrailingToken { token:    token.clone(),
                                                             position: self.position, });
        }

        tracing::debug!(target: trace_categories::PARSE, "parsed {tree}");
        Ok(tree)
    }

    /// Index of the next unconsumed token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] when the configured depth is
    /// already reached, otherwise whatever `parse` returns.
    pub(crate) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.max_depth,
                                                    position: self.position, });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Applies a prefix or postfix operator to `operand`.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] when the new node would be taller
    /// than the configured depth.
    pub(crate) fn unary_node(&self,
                             op: &'static Operator,
                             operand: Subtree)
                             -> ParseResult<Subtree> {
        let height = self.bounded_height(operand.height)?;
        Ok(Subtree { node: Node::unary(op, operand.node),
                     height })
    }

    /// Applies an infix operator to `left` and `right`.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] when the new node would be taller
    /// than the configured depth.
    pub(crate) fn binary_node(&self,
                              op: &'static Operator,
                              left: Subtree,
                              right: Subtree)
                              -> ParseResult<Subtree> {
        let height = self.bounded_height(left.height.max(right.height))?;
        Ok(Subtree { node: Node::binary(op, left.node, right.node),
                     height })
    }

    /// Height of a node above an operand of height `tallest`.
    const fn bounded_height(&self, tallest: usize) -> ParseResult<usize> {
        let height = tallest + 1;
        if height > self.max_depth {
            return Err(ParseError::NestingTooDeep { limit:    self.max_depth,
                                                    position: self.position, });
        }
        Ok(height)
    }
}
