/// Dispatch for all infix operators.
pub mod core;

/// Exponentiation and its undefined cases.
pub mod power;
