use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        parser::core::{ParseResult, Parser, Subtree},
        scanner::{Token, TokenKind},
    },
};

impl Parser<'_> {
    /// Parses a factor: a prefixed factor, an integer or a group.
    ///
    /// Prefix operators are right-recursive, so `- - - 5` nests three
    /// [`Expr::UnaryOp`] nodes around the literal.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | integer
    ///             | "(" expr ")"
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead cannot start an operand, a group
    ///   is not closed, or prefixes and groups nest past `MAX_NESTING`.
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Subtree> {
        self.nested(|parser| match parser.peek() {
                        Token::Plus => parser.parse_prefixed(TokenKind::Plus, UnaryOperator::Plus),
                        Token::Minus => {
                            parser.parse_prefixed(TokenKind::Minus, UnaryOperator::Negate)
                        },
                        Token::Integer(value) => {
                            parser.eat(TokenKind::Integer)?;
                            Ok((Expr::literal(value), 1))
                        },
                        Token::LParen => parser.parse_grouping(),
                        _ => Err(parser.unexpected("an operand")),
                    })
    }

    /// Parses a prefix operator and the factor it applies to.
    fn parse_prefixed(&mut self, kind: TokenKind, op: UnaryOperator) -> ParseResult<Subtree> {
        self.eat(kind)?;
        let (operand, height) = self.parse_factor()?;
        let height = self.checked_height(height + 1)?;
        Ok((Expr::unary(op, operand), height))
    }

    /// Parses a parenthesized expression.
    ///
    /// The group adds no node of its own; it only resets precedence.
    fn parse_grouping(&mut self) -> ParseResult<Subtree> {
        self.eat(TokenKind::LParen)?;
        let subtree = self.parse_expr()?;
        self.eat(TokenKind::RParen)?;
        Ok(subtree)
    }
}
