//! # calx
//!
//! calx evaluates arithmetic expressions written as a single line of text.
//! It supports integer literals, the binary operators `+ - * /`, prefix `+`
//! and `-`, and parentheses, with the usual precedence and left-to-right
//! associativity.
//!
//! The work happens in three stages: a scanner producing tokens on demand, a
//! recursive-descent parser building a tree, and an evaluator folding that
//! tree into an `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::EvaluationError,
    interpreter::{evaluator::core::Evaluator, parser::core::Parser, scanner::Scanner},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser and traversed by
/// the evaluator.
pub mod ast;
/// Provides the error type shared by every stage.
///
/// Scanning and parsing failures are both reported as an
/// [`error::EvaluationError`], carrying the failure class and the byte
/// position it was detected at.
pub mod error;
/// Runs the scan, parse and evaluate stages.
///
/// # Responsibilities
/// - Tokenizes the input lazily.
/// - Parses tokens into a tree.
/// - Evaluates the tree.
pub mod interpreter;
/// Settings for evaluation.
pub mod options;

pub use error::EvaluationError as Error;
pub use options::Options;

/// Evaluates an expression with the default, strict options.
///
/// # Errors
/// Returns [`EvaluationError::InvalidCharacter`] for text outside the
/// language and [`EvaluationError::UnexpectedToken`] for input that does not
/// follow the grammar, including anything after a complete expression.
///
/// # Examples
/// ```
/// use calx::{error::EvaluationError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("7 / 2"), Ok(3.5));
///
/// assert!(matches!(evaluate("2 & 3"), Err(EvaluationError::InvalidCharacter { .. })));
/// assert!(matches!(evaluate("1 +"), Err(EvaluationError::UnexpectedToken { .. })));
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvaluationError> {
    evaluate_with(source, &Options::default())
}

/// Evaluates an expression with the given options.
///
/// # Examples
/// ```
/// use calx::{Options, evaluate_with};
///
/// assert!(evaluate_with("1 + 1 )", &Options::default()).is_err());
/// assert_eq!(evaluate_with("1 + 1 )", &Options::lenient()), Ok(2.0));
/// ```
pub fn evaluate_with(source: &str, options: &Options) -> Result<f64, EvaluationError> {
    let parser = Parser::with_options(Scanner::new(source), options)?;
    Evaluator::new(parser).interpret()
}

/// Parses an expression into a tree without evaluating it.
///
/// # Examples
/// ```
/// use calx::{Options, parse};
///
/// let tree = parse("1 - 2 - 3", &Options::default()).unwrap();
///
/// assert_eq!(tree.to_string(), "((1 - 2) - 3)");
/// ```
pub fn parse(source: &str, options: &Options) -> Result<Expr, EvaluationError> {
    Parser::with_options(Scanner::new(source), options)?.parse()
}
