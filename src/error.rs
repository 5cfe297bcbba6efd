use thiserror::Error;

/// Represents all errors that can occur while evaluating an expression.
///
/// Both kinds are fatal: scanning or parsing stops at the first one, and it
/// reaches the caller unchanged. Positions are byte offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The scanner met a character outside digits, spaces and `( ) + - * /`.
    #[error("Error at position {position}: Invalid character '{character}'.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character starts.
        position:  usize,
    },
    /// The parser's lookahead did not fit the grammar rule being parsed.
    #[error("Error at position {position}: Unexpected token: expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where the token starts.
        position: usize,
    },
}

impl EvaluationError {
    /// Gets the byte offset the error points at.
    /// ## Example
    /// ```
    /// use calx::evaluate;
    ///
    /// let error = evaluate("12 + x").unwrap_err();
    ///
    /// assert_eq!(error.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::UnexpectedToken { position, .. } => {
                *position
            },
        }
    }
}
