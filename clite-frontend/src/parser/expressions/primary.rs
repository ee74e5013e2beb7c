//! Primary expression parsing

use crate::ast::*;
use crate::lexer::{Token, TokenType};
use crate::parser::errors::ParseError;
use crate::parser::Parser;

impl Parser {
    /// Parse primary expression:
    /// identifier, literal, `( Expr )` or a conversion `Type ( Expr )`
    pub fn parse_primary(&mut self) -> Option<Expr> {
        match self.peek() {
            TokenType::Identifier => {
                let token = self.advance();
                Some(Expr::var(token.lexeme))
            }

            TokenType::IntLiteral
            | TokenType::FloatLiteral
            | TokenType::CharLiteral
            | TokenType::True
            | TokenType::False => {
                let token = self.advance();
                self.parse_literal(token).map(Expr::Value)
            }

            TokenType::LeftParen => self.nested(|parser| {
                parser.advance();
                let expr = parser.parse_expression()?;
                parser.expect(TokenType::RightParen, "parenthesized expression");
                Some(expr)
            }),

            token_type if token_type.is_type_keyword() => self.nested(|parser| {
                let target = parser.parse_type()?;
                parser.expect(TokenType::LeftParen, "type conversion");
                let operand = parser.parse_expression()?;
                parser.expect(TokenType::RightParen, "type conversion");
                Some(Expr::unary(UnaryOp::Convert(target), operand))
            }),

            _ => {
                self.report(ParseError::ExpectedPrimary {
                    found: self.current.clone(),
                });
                None
            }
        }
    }

    /// Convert a literal token into its value
    pub(crate) fn parse_literal(&mut self, token: Token) -> Option<Value> {
        let value = match token.token_type {
            TokenType::True => Some(Value::Bool(true)),
            TokenType::False => Some(Value::Bool(false)),
            TokenType::IntLiteral => token.lexeme.parse::<i32>().ok().map(Value::Int),
            TokenType::FloatLiteral => token.lexeme.parse::<f64>().ok().map(Value::Float),
            TokenType::CharLiteral => token.lexeme.chars().next().map(Value::Char),
            _ => None,
        };

        if value.is_none() {
            self.report(ParseError::InvalidLiteral {
                kind: token.token_type,
                text: token.lexeme,
                position: token.position,
            });
        }

        value
    }
}
