use crate::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};

impl Evaluator<'_> {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Division is real division (`7 / 2` is `3.5`) and is not checked for a
    /// zero divisor.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use calx::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 7.0, 2.0), 3.5);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}
