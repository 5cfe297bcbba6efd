use crate::{
    ast::Expr,
    error::EvaluationError,
    interpreter::scanner::{Scanner, Spanned, Token, TokenKind},
    options::Options,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, EvaluationError>;

/// Deepest run of prefix operators and parentheses the parser descends into.
pub const MAX_NESTING: usize = 256;

/// Tallest tree the parser builds, counting a literal as height 1.
///
/// Evaluating, rendering and dropping a tree all recurse once per level.
pub const MAX_HEIGHT: usize = 2_048;

/// A parsed subtree together with its height.
pub(in crate::interpreter::parser) type Subtree = (Expr, usize);

/// Recursive-descent parser with one token of lookahead.
///
/// The parser pulls tokens from its [`Scanner`] only as the grammar needs
/// them:
///
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := ("+" | "-") factor
///             | integer
///             | "(" expr ")"
/// ```
///
/// ## Example
/// ```
/// use calx::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{parser::core::Parser, scanner::Scanner},
/// };
///
/// let parser = Parser::new(Scanner::new("1 + 2")).unwrap();
///
/// assert_eq!(parser.parse().unwrap(),
///            Expr::binary(Expr::literal(1.0), BinaryOperator::Add, Expr::literal(2.0)));
/// ```
pub struct Parser<'source> {
    scanner:        Scanner<'source>,
    lookahead:      Spanned,
    allow_trailing: bool,
    nesting:        usize,
}

impl<'source> Parser<'source> {
    /// Creates a strict parser and reads the first token.
    ///
    /// # Errors
    /// Returns [`EvaluationError::InvalidCharacter`] if the first token cannot
    /// be scanned.
    pub fn new(scanner: Scanner<'source>) -> ParseResult<Self> {
        Self::with_options(scanner, &Options::default())
    }

    /// Creates a parser configured by `options` and reads the first token.
    ///
    /// # Errors
    /// Returns [`EvaluationError::InvalidCharacter`] if the first token cannot
    /// be scanned.
    pub fn with_options(mut scanner: Scanner<'source>, options: &Options) -> ParseResult<Self> {
        let lookahead = scanner.next_token()?;
        Ok(Self { scanner,
                  lookahead,
                  allow_trailing: options.allow_trailing_tokens,
                  nesting: 0 })
    }

    /// Parses the whole input into a tree.
    ///
    /// Unless trailing tokens are allowed, the expression must be followed by
    /// the end of input.
    ///
    /// # Errors
    /// Returns the first scanning or grammar error met, including input
    /// nested deeper than [`MAX_NESTING`] or yielding a tree taller than
    /// [`MAX_HEIGHT`]. No partial tree is produced.
    pub fn parse(mut self) -> ParseResult<Expr> {
        let (expr, _) = self.parse_expr()?;
        if !self.allow_trailing {
            self.eat(TokenKind::End)?;
        }
        Ok(expr)
    }

    /// Gets the lookahead token.
    pub(in crate::interpreter::parser) const fn peek(&self) -> Token {
        self.lookahead.0
    }

    /// Consumes the lookahead if it is of the `expected` kind.
    ///
    /// On a match the consumed token is returned and the next one is pulled
    /// from the scanner.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead is of another kind.
    /// - `InvalidCharacter` if the following token cannot be scanned.
    pub(in crate::interpreter::parser) fn eat(&mut self,
                                              expected: TokenKind)
                                              -> ParseResult<Token> {
        let (token, position) = self.lookahead;
        if token.kind() != expected {
            return Err(EvaluationError::UnexpectedToken { expected: expected.to_string(),
                                                          found: token.to_string(),
                                                          position });
        }
        self.lookahead = self.scanner.next_token()?;
        Ok(token)
    }

    /// Builds the error for a lookahead that fits none of the alternatives of
    /// a rule.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> EvaluationError {
        let (token, position) = self.lookahead;
        EvaluationError::UnexpectedToken { expected: expected.to_string(),
                                           found: token.to_string(),
                                           position }
    }

    /// Runs `rule` one nesting level deeper, failing past [`MAX_NESTING`].
    pub(in crate::interpreter::parser) fn nested(&mut self,
                                                 rule: impl FnOnce(&mut Self) -> ParseResult<Subtree>)
                                                 -> ParseResult<Subtree> {
        if self.nesting >= MAX_NESTING {
            return Err(self.unexpected("shallower nesting"));
        }
        self.nesting += 1;
        let subtree = rule(self);
        self.nesting -= 1;
        subtree
    }

    /// Checks the height of a node about to be built against [`MAX_HEIGHT`].
    pub(in crate::interpreter::parser) fn checked_height(&self, height: usize) -> ParseResult<usize> {
        if height > MAX_HEIGHT {
            return Err(self.unexpected("shallower nesting"));
        }
        Ok(height)
    }
}
