use std::fmt;

use logos::{Lexer, Logos};

use crate::error::EvaluationError;

/// Result type used by the scanner.
pub type ScanResult<T> = Result<T, EvaluationError>;

/// A token paired with the byte offset where it starts.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
///
/// Only [`Token::Integer`] carries a payload; every other variant is fully
/// described by its kind.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// Integer literal tokens, such as `42`. The digit run is read as a
    /// non-negative `f64`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never matched by the lexer; [`Scanner`] produces it once
    /// the source is exhausted.
    End,
}

/// The kind of a [`Token`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Divide,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    End,
}

impl Token {
    /// Gets the kind of `self`.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Mul,
            Self::Slash => TokenKind::Divide,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::End => TokenKind::End,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Integer => "integer",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Mul => "'*'",
            Self::Divide => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::End => "end of input",
        };
        write!(f, "{kind}")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "integer {value}"),
            token => write!(f, "{}", token.kind()),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// A run of ASCII digits always parses as an `f64`; runs beyond `f64`
/// precision are rounded.
fn parse_integer(lex: &Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Turns source text into tokens, one per call to [`Scanner::next_token`].
///
/// The scanner only moves forward. Scanning the same text again takes a new
/// scanner.
///
/// ## Example
/// ```
/// use calx::interpreter::scanner::{Scanner, Token};
///
/// let mut scanner = Scanner::new("12 *(");
///
/// assert_eq!(scanner.next_token(), Ok((Token::Integer(12.0), 0)));
/// assert_eq!(scanner.next_token(), Ok((Token::Star, 3)));
/// assert_eq!(scanner.next_token(), Ok((Token::LParen, 4)));
/// assert_eq!(scanner.next_token(), Ok((Token::End, 5)));
/// ```
pub struct Scanner<'source> {
    lexer: Lexer<'source, Token>,
}

impl<'source> Scanner<'source> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Returns the next token and its position.
    ///
    /// Once the source is exhausted every call returns [`Token::End`].
    ///
    /// # Errors
    /// Returns [`EvaluationError::InvalidCharacter`] for any character that
    /// does not start a token.
    pub fn next_token(&mut self) -> ScanResult<Spanned> {
        match self.lexer.next() {
            Some(Ok(token)) => Ok((token, self.lexer.span().start)),
            Some(Err(())) => {
                let position = self.lexer.span().start;
                let character = self.lexer
                                    .source()
                                    .get(position..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(EvaluationError::InvalidCharacter { character, position })
            },
            None => Ok((Token::End, self.lexer.source().len())),
        }
    }
}

/// Scans all of `source`, up to and including the [`Token::End`] token.
///
/// # Errors
/// Returns the first [`EvaluationError::InvalidCharacter`] met.
pub fn tokenize(source: &str) -> ScanResult<Vec<Spanned>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let spanned = scanner.next_token()?;
        let done = spanned.0 == Token::End;
        tokens.push(spanned);
        if done {
            return Ok(tokens);
        }
    }
}
