use std::fmt;

use crate::interpreter::{
    operators::{Fixing, Operator},
    value::decimal::Decimal,
};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Each node owns its children; there is no sharing between subtrees.
/// Operators are references into the static operator table.
///
/// The `Display` implementation renders a canonical form: literals as written
/// and every compound operand in parentheses. Parsing the rendering of a parsed
/// tree yields an equal tree. The parser never produces negative literals; a
/// hand-built one is parenthesized as an operand, so `2 - (-5)` renders as
/// `2-(-5)` and re-parses to a negation of the same value.
///
/// ## Example
/// ```
/// use minicalc::parse;
///
/// let tree = parse("-(1 + 2) * 3!").unwrap();
///
/// assert_eq!(tree.to_string(), "(-(1+2))*(3!)");
/// assert_eq!(parse(&tree.to_string()).unwrap(), tree);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A number literal, held exactly as written.
    Number(Decimal),
    /// A prefix or postfix operator applied to one operand.
    UnaryOp {
        /// The operator descriptor.
        op:      &'static Operator,
        /// The operand.
        operand: Box<Self>,
    },
    /// An infix operator applied to two operands.
    BinaryOp {
        /// The operator descriptor.
        op:    &'static Operator,
        /// Left-hand side operand.
        left:  Box<Self>,
        /// Right-hand side operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Builds a [`Node::UnaryOp`].
    #[must_use]
    pub fn unary(op: &'static Operator, operand: Self) -> Self {
        Self::UnaryOp { op,
                        operand: Box::new(operand) }
    }

    /// Builds a [`Node::BinaryOp`].
    #[must_use]
    pub fn binary(op: &'static Operator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }
}

/// Formats `node`, wrapping it in parentheses unless it is a non-negative
/// literal.
struct Operand<'a>(&'a Node);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Node::Number(value) if !value.is_negative() => write!(f, "{}", self.0),
            compound => write!(f, "({compound})"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&value.to_plain_string()),
            Self::UnaryOp { op, operand } if op.fixing() == Fixing::Postfix => {
                write!(f, "{}{op}", Operand(operand))
            },
            Self::UnaryOp { op, operand } => write!(f, "{op}{}", Operand(operand)),
            Self::BinaryOp { op, left, right } => {
                write!(f, "{}{op}{}", Operand(left), Operand(right))
            },
        }
    }
}
