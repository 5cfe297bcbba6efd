/// Parser state and the token-consuming primitives.
///
/// Holds the [`core::Parser`] type, the single-token lookahead, the `eat`
/// primitive and the `parse` entry point.
pub mod core;

/// Binary expression parsing.
///
/// Implements the two left-associative precedence levels: `+`/`-` and
/// `*`/`/`.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix `+`/`-`, integer literals and parenthesized groups.
pub mod unary;
