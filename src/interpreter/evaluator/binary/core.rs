use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        operators::{Operation, Operator},
        value::decimal::{ArithmeticError, Decimal},
    },
    trace_categories,
};

impl Evaluator {
    /// Applies an infix operator to two evaluated operands.
    ///
    /// Every result is rounded half-even to the configured precision.
    /// Division and modulo reject a zero divisor; power delegates to
    /// [`Evaluator::eval_power`]; maximum and minimum return the left operand
    /// when both are equal.
    ///
    /// # Parameters
    /// - `op`: The operator descriptor.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Decimal>` containing the evaluated result.
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
    /// let average = lookup('@', Fixing::Infix).unwrap();
    ///
    /// let result = evaluator.eval_binary(average, &Decimal::from(10), &Decimal::from(4));
    /// assert_eq!(result.unwrap(), Decimal::from(7));
    /// ```
    pub fn eval_binary(&self, op: &Operator, left: &Decimal, right: &Decimal) -> EvalResult<Decimal> {
        let config = self.config();
        let result = match op.operation() {
            Operation::Add => left.add(right, config),
            Operation::Subtract => left.sub(right, config),
            Operation::Multiply => left.mul(right, config),
            Operation::Divide => left.div(right, config),
            Operation::Modulo => left.rem(right, config),
            Operation::Average => left.average(right, config),
            Operation::Maximum => left.max(right, config),
            Operation::Minimum => left.min(right, config),
            Operation::Power => return self.eval_power(op, left, right),
            Operation::Negate | Operation::Factorial => {
                return Err(EvalError::ArityMismatch { operator: op.symbol(),
                                                      expected: op.arity(),
                                                      found:    2, });
            },
        };

        tracing::trace!(target: trace_categories::EVAL, "{left} {op} {right} = {result:?}");
        result.map_err(|error| arithmetic_error(op, left, right, error))
    }
}

/// Attaches the operator and operands to a failed decimal operation.
pub(crate) fn arithmetic_error(op: &Operator,
                               left: &Decimal,
                               right: &Decimal,
                               error: ArithmeticError)
                               -> EvalError {
    match error {
        ArithmeticError::DivisionByZero => EvalError::DivisionByZero { operator: op.symbol(),
                                                                        dividend: left.clone(), },
        ArithmeticError::Overflow => EvalError::Overflow { operator: op.symbol() },
        ArithmeticError::Undefined => EvalError::UndefinedPower { base:     left.clone(),
                                                                   exponent: right.clone(), },
    }
}
