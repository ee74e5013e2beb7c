//! Binary expression parsing with operator precedence

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;

impl Parser {
    /// Binary operator at the current token, if it is one of `accepted`
    fn match_binary_op(&mut self, accepted: &[TokenType]) -> Option<BinaryOp> {
        if !accepted.contains(&self.peek()) {
            return None;
        }
        let op = BinaryOp::from_token(self.peek())?;
        self.advance();
        Some(op)
    }

    /// Left-associative level: `operand {op operand}`
    fn parse_left_assoc(
        &mut self,
        accepted: &[TokenType],
        operand: fn(&mut Parser) -> Option<Expr>,
    ) -> Option<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = self.match_binary_op(accepted) {
            let right = operand(self)?;
            left = Expr::binary(op, left, right);
        }

        Some(left)
    }

    /// Non-associative level: `operand [op operand]`
    fn parse_single(
        &mut self,
        accepted: &[TokenType],
        operand: fn(&mut Parser) -> Option<Expr>,
    ) -> Option<Expr> {
        let left = operand(self)?;

        match self.match_binary_op(accepted) {
            Some(op) => {
                let right = operand(self)?;
                Some(Expr::binary(op, left, right))
            }
            None => Some(left),
        }
    }

    /// Parse logical OR expression
    pub fn parse_disjunction(&mut self) -> Option<Expr> {
        self.parse_left_assoc(&[TokenType::Or], Parser::parse_conjunction)
    }

    /// Parse logical AND expression
    pub fn parse_conjunction(&mut self) -> Option<Expr> {
        self.parse_left_assoc(&[TokenType::And], Parser::parse_equality)
    }

    /// Parse `==` / `!=`, at most once
    pub fn parse_equality(&mut self) -> Option<Expr> {
        self.parse_single(
            &[TokenType::Equals, TokenType::NotEqual],
            Parser::parse_relation,
        )
    }

    /// Parse `<` `<=` `>` `>=`, at most once
    pub fn parse_relation(&mut self) -> Option<Expr> {
        self.parse_single(
            &[
                TokenType::Less,
                TokenType::LessEqual,
                TokenType::Greater,
                TokenType::GreaterEqual,
            ],
            Parser::parse_addition,
        )
    }

    /// Parse additive expression
    pub fn parse_addition(&mut self) -> Option<Expr> {
        self.parse_left_assoc(&[TokenType::Plus, TokenType::Minus], Parser::parse_term)
    }

    /// Parse multiplicative expression
    pub fn parse_term(&mut self) -> Option<Expr> {
        self.parse_left_assoc(&[TokenType::Multiply, TokenType::Divide], Parser::parse_factor)
    }

    /// Parse `[! | -] Primary`
    pub fn parse_factor(&mut self) -> Option<Expr> {
        match UnaryOp::from_token(self.peek()) {
            Some(op) => {
                self.advance();
                let operand = self.parse_primary()?;
                Some(Expr::unary(op, operand))
            }
            None => self.parse_primary(),
        }
    }
}
