/// Core evaluation logic.
///
/// Contains the `Evaluator` type and the recursive walk over the syntax tree.
/// Operands are evaluated left to right; the first error stops the walk.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and factorial, including the domain checks for
/// factorial.
pub mod unary;

/// Binary operator evaluation.
///
/// Dispatches infix operators to the decimal arithmetic and turns arithmetic
/// failures into evaluation errors that name the operator and operands.
pub mod binary;
