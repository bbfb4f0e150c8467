use crate::interpreter::value::decimal::Decimal;

/// Represents all errors that can occur while evaluating a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The right operand of `/` or `%` was zero, or zero was raised to a
    /// negative power.
    #[error("division by zero applying '{operator}' to {dividend}")]
    DivisionByZero {
        /// Symbol of the operator that divided.
        operator: char,
        /// The left operand of the operator.
        dividend: Decimal,
    },
    /// Factorial of a value below zero.
    #[error("factorial of negative number {operand}")]
    FactorialOfNegative {
        /// The operand of `!`.
        operand: Decimal,
    },
    /// Factorial of a value with a fractional part.
    #[error("factorial of non-integer {operand}")]
    FactorialOfFraction {
        /// The operand of `!`.
        operand: Decimal,
    },
    /// `0^0`, or a negative base raised to a fractional power.
    #[error("{base} ^ {exponent} is undefined")]
    UndefinedPower {
        /// The left operand of `^`.
        base:     Decimal,
        /// The right operand of `^`.
        exponent: Decimal,
    },
    /// The result's adjusted exponent exceeded the configured maximum.
    #[error("result of '{operator}' is out of range")]
    Overflow {
        /// Symbol of the operator whose result overflowed.
        operator: char,
    },
    /// A unary node holding a binary operator, or the other way round.
    #[error("operator '{operator}' takes {expected} operand(s), got {found}")]
    ArityMismatch {
        /// Symbol of the misplaced operator.
        operator: char,
        /// The operator's arity.
        expected: usize,
        /// Number of operands in the node.
        found:    usize,
    },
}
