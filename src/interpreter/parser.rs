/// Parser state and the top-level entry point.
///
/// Holds the token cursor and the nesting guard, and checks that a complete
/// expression consumes every token.
pub mod core;

/// Infix and postfix operators.
///
/// Implements the precedence-climbing loop that folds infix operators by
/// precedence and associativity and wraps operands in postfix operators.
pub mod binary;

/// Prefix operators and primary expressions.
///
/// Parses number literals, parenthesized sub-expressions and chains of prefix
/// operators.
pub mod unary;
