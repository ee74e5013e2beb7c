//! Statement parsing for clite
//!
//! This module handles parsing of all statement types.

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::{ParseError, Parser};

impl Parser {
    /// Parse statements up to a closing brace or end of input
    pub fn parse_statements(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.check(TokenType::RightBrace) && !self.check(TokenType::EndOfFile) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
        }

        statements
    }

    /// Parse statement. `None` means the statement was malformed and has
    /// already been reported.
    pub fn parse_statement(&mut self) -> Option<Stmt> {
        match self.peek() {
            TokenType::Semicolon => {
                self.advance();
                Some(Stmt::Skip)
            }
            TokenType::LeftBrace => self.nested(|parser| Some(parser.parse_block())),
            TokenType::If => self.nested(Parser::parse_conditional),
            TokenType::While => self.nested(Parser::parse_loop),
            TokenType::Identifier => self.parse_assignment(),
            _ => {
                self.report(ParseError::ExpectedStatement {
                    found: self.current.clone(),
                });
                // always make progress, but leave closers for the enclosing list
                if !self.check(TokenType::RightBrace) && !self.check(TokenType::EndOfFile) {
                    self.advance();
                }
                None
            }
        }
    }

    /// Parse block: `{ {Stmt} }`
    pub(crate) fn parse_block(&mut self) -> Stmt {
        self.expect(TokenType::LeftBrace, "block");
        let members = self.parse_statements();
        self.expect(TokenType::RightBrace, "block");

        Stmt::Block { members }
    }

    /// Parse the parenthesised test of `if` and `while`
    fn parse_test(&mut self, context: &'static str) -> Option<Expr> {
        self.expect(TokenType::LeftParen, context);
        let test = self.parse_expression();
        self.expect(TokenType::RightParen, context);
        test
    }

    /// Parse if statement: `if ( Expr ) Stmt [else Stmt]`
    pub(crate) fn parse_conditional(&mut self) -> Option<Stmt> {
        self.expect(TokenType::If, "if statement");

        let test = self.parse_test("if statement");
        let then_branch = self.parse_statement();
        let else_branch = if self.match_token(TokenType::Else) {
            Some(self.parse_statement()?)
        } else {
            None
        };

        Some(Stmt::Conditional {
            test: test?,
            then_branch: Box::new(then_branch?),
            else_branch: else_branch.map(Box::new),
        })
    }

    /// Parse while statement: `while ( Expr ) Stmt`
    pub(crate) fn parse_loop(&mut self) -> Option<Stmt> {
        self.expect(TokenType::While, "while statement");

        let test = self.parse_test("while statement");
        let body = self.parse_statement();

        Some(Stmt::Loop {
            test: test?,
            body: Box::new(body?),
        })
    }

    /// Parse assignment: `ident = Expr`. The `;` that normally follows is
    /// left for the statement list, where it becomes a `Skip`.
    pub(crate) fn parse_assignment(&mut self) -> Option<Stmt> {
        let target = self.expect(TokenType::Identifier, "assignment")?;
        self.expect(TokenType::Assign, "assignment")?;
        let source = self.parse_expression()?;

        Some(Stmt::Assignment {
            target: Variable::new(target.lexeme),
            source,
        })
    }
}
