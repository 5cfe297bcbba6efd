/// The evaluator module folds a parsed tree into a number.
///
/// The evaluator drives the parser, then walks the resulting tree once,
/// applying each operator with `f64` arithmetic.
///
/// # Responsibilities
/// - Runs the scan/parse/evaluate pipeline for one input.
/// - Evaluates every node kind by exhaustive matching.
pub mod evaluator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the scanner one at a time and constructs an
/// AST following the precedence levels of the grammar.
///
/// # Responsibilities
/// - Implements recursive descent with a single token of lookahead.
/// - Reports the first grammar violation with its position.
pub mod parser;
/// The scanner module tokenizes source text on demand.
///
/// The scanner reads raw text and produces tokens lazily: integer literals,
/// the four operators and parentheses, and a final end-of-input token.
///
/// # Responsibilities
/// - Skips spaces between tokens.
/// - Reports the first character that does not belong to the language.
pub mod scanner;
