use crate::{ast::Expr, error::EvaluationError, interpreter::parser::core::Parser};

/// Result type used by the evaluator.
///
/// Evaluating a tree cannot fail; errors come from parsing the input.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// Runs one expression through the parser and folds the tree into a value.
///
/// An evaluator owns its parser and is used once.
///
/// ## Example
/// ```
/// use calx::interpreter::{evaluator::core::Evaluator, parser::core::Parser, scanner::Scanner};
///
/// let parser = Parser::new(Scanner::new("2 + 3 * 4")).unwrap();
///
/// assert_eq!(Evaluator::new(parser).interpret().unwrap(), 14.0);
/// ```
pub struct Evaluator<'source> {
    parser: Parser<'source>,
}

impl<'source> Evaluator<'source> {
    /// Creates an evaluator for the expression `parser` reads.
    #[must_use]
    pub const fn new(parser: Parser<'source>) -> Self {
        Self { parser }
    }

    /// Parses the input and evaluates the tree.
    ///
    /// # Errors
    /// Returns the first scanning or parsing error.
    pub fn interpret(self) -> EvalResult<f64> {
        let tree = self.parser.parse()?;
        Ok(Self::visit(&tree))
    }

    /// Evaluates a tree and returns its value.
    ///
    /// Division follows `f64` rules, so dividing by zero gives an infinity or
    /// NaN rather than an error.
    ///
    /// Recursion goes one call per tree level; trees built by the parser are
    /// at most [`MAX_HEIGHT`](crate::interpreter::parser::core::MAX_HEIGHT) levels
    /// tall.
    ///
    /// # Example
    /// ```
    /// use calx::{
    ///     ast::{BinaryOperator, Expr, UnaryOperator},
    ///     interpreter::evaluator::core::Evaluator,
    /// };
    ///
    /// let tree = Expr::unary(UnaryOperator::Negate,
    ///                        Expr::binary(Expr::literal(7.0), BinaryOperator::Div, Expr::literal(2.0)));
    ///
    /// assert_eq!(Evaluator::visit(&tree), -3.5);
    /// ```
    #[must_use]
    pub fn visit(node: &Expr) -> f64 {
        match node {
            Expr::Literal { value } => *value,
            Expr::UnaryOp { op, expr } => Self::eval_unary(*op, Self::visit(expr)),
            Expr::BinaryOp { left, op, right } => {
                Self::eval_binary(*op, Self::visit(left), Self::visit(right))
            },
        }
    }
}
