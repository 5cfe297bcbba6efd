use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::core::{ParseResult, Parser, Subtree},
        scanner::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`, so `10 - 2 - 3`
    /// becomes `(10 - 2) - 3`.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` chain, or the single term when no operator follows,
    /// with its height. A chain taller than `MAX_HEIGHT` is an
    /// `UnexpectedToken` error.
    pub(in crate::interpreter::parser) fn parse_expr(&mut self) -> ParseResult<Subtree> {
        let (mut left, mut height) = self.parse_term()?;
        loop {
            let kind = self.peek().kind();
            if let Some(op) = token_to_binary_operator(kind)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.eat(kind)?;
                let (right, right_height) = self.parse_term()?;
                height = self.checked_height(height.max(right_height) + 1)?;
                left = Expr::binary(left, op, right);
                continue;
            }
            break;
        }
        Ok((left, height))
    }

    /// Parses multiplication-level expressions.
    ///
    /// Same shape as [`Parser::parse_expr`] one level deeper, which is what
    /// makes `*` and `/` bind tighter than `+` and `-`.
    ///
    /// The rule is: `term := factor (("*" | "/") factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Subtree> {
        let (mut left, mut height) = self.parse_factor()?;
        loop {
            let kind = self.peek().kind();
            if let Some(op) = token_to_binary_operator(kind)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
            {
                self.eat(kind)?;
                let (right, right_height) = self.parse_factor()?;
                height = self.checked_height(height.max(right_height) + 1)?;
                left = Expr::binary(left, op, right);
                continue;
            }
            break;
        }
        Ok((left, height))
    }
}

/// Maps a token kind to the binary operator it spells, if any.
const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
