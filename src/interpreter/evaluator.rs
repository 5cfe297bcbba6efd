/// Binary operator evaluation logic.
///
/// Applies `+ - * /` with `f64` semantics.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the identity and negation prefix operators.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], which drives the parser and folds the
/// resulting tree into a number.
pub mod core;
