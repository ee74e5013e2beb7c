//! clite Recursive Descent Parser
//!
//! Parses clite tokens into an Abstract Syntax Tree (AST). One procedure
//! per nonterminal; tokens are pulled from the lexer on demand.
//!
//! Errors never abort the parse. A mismatched token is reported and the
//! stream stays where it is, so one mistake can cascade into several
//! diagnostics. Statements or expressions that cannot start at the current
//! token are reported and dropped from the tree.

pub mod errors;
pub mod declarations;
pub mod statements;
pub mod expressions;

use crate::ast::Program;
use crate::lexer::{Lexer, Token, TokenType};
use clite_common::{Diagnostic, ErrorReporter};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

pub use errors::ParseError;

/// Deepest nesting of parentheses, conversions and compound statements
pub const MAX_NESTING_DEPTH: usize = 64;

/// clite Parser
pub struct Parser {
    lexer: Lexer,
    pub(crate) current: Token,
    /// Shared with the lexer so diagnostics stay in report order
    reporter: Rc<RefCell<ErrorReporter>>,
    syntax_errors: usize,
    /// Open parentheses, conversions and compound statements
    depth: usize,
}

impl Parser {
    /// Create a parser over `lexer`, appending to its diagnostic log
    pub fn new(mut lexer: Lexer) -> Self {
        let reporter = lexer.reporter();
        let current = lexer.next_token();

        Self {
            lexer,
            current,
            reporter,
            syntax_errors: 0,
            depth: 0,
        }
    }

    /// Type of the current token
    pub(crate) fn peek(&self) -> TokenType {
        self.current.token_type
    }

    /// Consume the current token and pull the next one
    pub(crate) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(&mut self.current, next)
    }

    /// Check if current token matches expected type
    pub(crate) fn check(&self, token_type: TokenType) -> bool {
        self.current.token_type == token_type
    }

    /// Consume token if it matches expected type
    pub(crate) fn match_token(&mut self, token_type: TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect and consume a specific token type. On mismatch the error is
    /// reported and nothing is consumed.
    pub(crate) fn expect(&mut self, token_type: TokenType, context: &'static str) -> Option<Token> {
        if self.check(token_type) {
            Some(self.advance())
        } else {
            self.report(ParseError::UnexpectedToken {
                expected: token_type,
                context,
                found: self.current.clone(),
            });
            None
        }
    }

    pub(crate) fn report(&mut self, err: ParseError) {
        debug!("syntax error at {}: {}", err.position(), err);
        self.syntax_errors += 1;
        self.reporter
            .borrow_mut()
            .error(err.to_string(), Some(err.position()));
    }

    /// Run `parse` one nesting level deeper. Past `MAX_NESTING_DEPTH` the
    /// rest of the statement is skipped and nothing is parsed.
    pub(crate) fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.report(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                position: self.current.position,
            });
            while !matches!(
                self.peek(),
                TokenType::Semicolon | TokenType::RightBrace | TokenType::EndOfFile
            ) {
                self.advance();
            }
            return None;
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parse a complete program:
    /// `int main ( ) { {Decl} {Stmt} }`
    pub fn parse_program(&mut self) -> Program {
        for header in [
            TokenType::Int,
            TokenType::Main,
            TokenType::LeftParen,
            TokenType::RightParen,
        ] {
            self.expect(header, "program header");
        }
        self.expect(TokenType::LeftBrace, "program body");

        let declarations = self.parse_declarations();
        let body = self.parse_statements();

        self.expect(TokenType::RightBrace, "program body");
        self.expect(TokenType::EndOfFile, "program");

        debug!(
            "parsed program: {} declarations, {} statements, {}",
            declarations.len(),
            body.len(),
            self.reporter.borrow().summary()
        );

        Program { declarations, body }
    }

    /// Lexical plus syntax errors reported so far
    pub fn error_count(&self) -> usize {
        self.lexer.error_count() + self.syntax_errors
    }

    /// Lexical and syntax diagnostics, in the order they were reported
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.reporter.borrow().diagnostics().to_vec()
    }

    pub fn lexer_error_count(&self) -> usize {
        self.lexer.error_count()
    }
}
