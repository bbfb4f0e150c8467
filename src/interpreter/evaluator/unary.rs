use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        operators::{Operation, Operator},
        value::decimal::Decimal,
    },
    trace_categories,
};

impl Evaluator {
    /// Applies a prefix or postfix operator to an evaluated operand.
    ///
    /// Supported operations:
    /// - `Negate` (`-x`, `~x`): flips the sign.
    /// - `Factorial` (`x!`): requires a non-negative integer operand.
    ///
    /// # Parameters
    /// - `op`: The operator descriptor.
    /// - `value`: The operand.
    ///
    /// # Returns
    /// The result rounded to the configured precision.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     config::Config,
    ///     interpreter::{
    ///         evaluator::core::Evaluator,
    ///         operators::{Fixing, lookup},
    ///         value::decimal::Decimal,
    ///     },
    /// };
    ///
    /// let evaluator = Evaluator::new(Config::default());
    /// let bang = lookup('!', Fixing::Postfix).unwrap();
    ///
    /// let value = evaluator.eval_unary(bang, &Decimal::from(4)).unwrap();
    /// assert_eq!(value, Decimal::from(24));
    /// ```
    pub fn eval_unary(&self, op: &Operator, value: &Decimal) -> EvalResult<Decimal> {
        let result = match op.operation() {
            Operation::Negate => {
                (-value).round(self.config())
                        .map_err(|_| EvalError::Overflow { operator: op.symbol() })
            },
            Operation::Factorial => self.eval_factorial(op, value),
            _ => Err(EvalError::ArityMismatch { operator: op.symbol(),
                                                expected: op.arity(),
                                                found:    1, }),
        };

        tracing::trace!(target: trace_categories::EVAL, "{op}({value}) = {result:?}");
        result
    }

    /// Computes `value!` for a non-negative integral `value`.
    ///
    /// The sign is checked before integrality, so `-2.5!` reports a negative
    /// operand.
    fn eval_factorial(&self, op: &Operator, value: &Decimal) -> EvalResult<Decimal> {
        if value.is_negative() {
            return Err(EvalError::FactorialOfNegative { operand: value.clone() });
        }
        if !value.is_integer() {
            return Err(EvalError::FactorialOfFraction { operand: value.clone() });
        }

        let overflow = EvalError::Overflow { operator: op.symbol() };
        let n = value.to_u64().ok_or_else(|| overflow.clone())?;
        Decimal::factorial(n, self.config()).map_err(|_| overflow)
    }
}
