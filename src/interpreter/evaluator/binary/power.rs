use crate::{
    interpreter::{
        evaluator::{
            binary::core::arithmetic_error,
            core::{EvalResult, Evaluator},
        },
        operators::Operator,
        value::decimal::Decimal,
    },
    trace_categories,
};

impl Evaluator {
    /// Evaluates an exponentiation operation.
    ///
    /// Integral exponents are computed exactly whenever the result fits in the
    /// configured precision; negative ones go through the reciprocal.
    /// Fractional exponents are computed as `exp(exponent × ln base)`.
    ///
    /// Undefined cases:
    /// - `0 ^ 0` and a negative base with a fractional exponent are
    ///   [`EvalError::UndefinedPower`](crate::error::EvalError::UndefinedPower).
    /// - Zero to a negative power is
    ///   [`EvalError::DivisionByZero`](crate::error::EvalError::DivisionByZero).
    ///
    /// # Parameters
    /// - `op`: The power operator.
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    ///
    /// # Returns
    /// An `EvalResult<Decimal>` containing the result of `base ^ exponent`.
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
    /// let caret = lookup('^', Fixing::Infix).unwrap();
    ///
    /// let result = evaluator.eval_power(caret, &Decimal::from(2), &Decimal::from(-2)).unwrap();
    /// assert_eq!(result.to_string(), "0.25");
    ///
    /// assert!(evaluator.eval_power(caret, &Decimal::from(0), &Decimal::from(0)).is_err());
    /// ```
    pub fn eval_power(&self,
                      op: &Operator,
                      base: &Decimal,
                      exponent: &Decimal)
                      -> EvalResult<Decimal> {
        let result = base.pow(exponent, self.config());

        tracing::trace!(target: trace_categories::EVAL, "{base} {op} {exponent} = {result:?}");
        result.map_err(|error| arithmetic_error(op, base, exponent, error))
    }
}
