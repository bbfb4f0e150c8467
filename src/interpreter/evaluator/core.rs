use crate::{
    ast::Node,
    config::Config,
    error::EvalError,
    interpreter::value::decimal::Decimal,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Tree-walking evaluator.
///
/// Holds the [`Config`] that every operation rounds against. The evaluator
/// keeps no other state, so one instance can evaluate any number of trees.
///
/// ## Example
/// ```
/// use minicalc::{config::Config, interpreter::evaluator::core::Evaluator, parse};
///
/// let tree = parse("2 ^ 10 - 24").unwrap();
/// let value = Evaluator::new(Config::default()).eval(&tree).unwrap();
///
/// assert_eq!(value.to_string(), "1000");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: Config,
}

impl Evaluator {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates `node` and returns its value.
    ///
    /// - `Number` yields the literal unchanged.
    /// - `UnaryOp` evaluates its operand, then applies the operator.
    /// - `BinaryOp` evaluates the left operand, then the right one, then
    ///   applies the operator. An error on the left wins.
    ///
    /// # Parameters
    /// - `node`: Root of the tree to evaluate.
    ///
    /// # Returns
    /// The value of the expression, rounded to the configured precision
    /// unless it is a bare literal.
    pub fn eval(&self, node: &Node) -> EvalResult<Decimal> {
        match node {
            Node::Number(value) => Ok(value.clone()),
            Node::UnaryOp { op, operand } => {
                let value = self.eval(operand)?;
                self.eval_unary(op, &value)
            },
            Node::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                self.eval_binary(op, &left, &right)
            },
        }
    }
}
