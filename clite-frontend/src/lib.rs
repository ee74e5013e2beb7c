//! clite compiler - Frontend
//!
//! This crate provides the frontend components for the clite compiler:
//! - Lexer: tokenizes clite source code
//! - Parser: builds AST from tokens
//! - AST: abstract syntax tree definitions and the generic traversal
//! - Type checker: builds the variable type map and validates the program

pub mod lexer;
pub mod parser;
pub mod ast;
pub mod types;
pub mod type_checker;

pub use lexer::{Lexer, Token, TokenType};
pub use parser::{ParseError, Parser};
pub use ast::{
    inspect, walk, BinaryOp, Decl, Expr, Node, OpClass, Program, Stmt, UnaryOp, Value, Variable,
    VisitControl, Visitor,
};
pub use types::Type;
pub use type_checker::{CheckReport, TypeChecker, TypeError, TypeMap};

use clite_common::{default_handler, CompilerError, ErrorHandler, Stage};

/// High-level frontend interface
pub struct Frontend;

impl Frontend {
    /// Tokenize source code, failing if any lexical error was reported
    pub fn tokenize_source(source: &str) -> Result<Vec<Token>, CompilerError> {
        Self::tokenize_source_with_handler(source, default_handler())
    }

    pub fn tokenize_source_with_handler(
        source: &str,
        handler: ErrorHandler,
    ) -> Result<Vec<Token>, CompilerError> {
        let mut lexer = Lexer::with_handler(source, handler);
        let tokens = lexer.tokenize();

        match lexer.error_count() {
            0 => Ok(tokens),
            errors => Err(CompilerError::rejected(Stage::Lex, errors)),
        }
    }

    /// Parse clite source code into an AST
    pub fn parse_source(source: &str) -> Result<Program, CompilerError> {
        Self::parse_source_with_handler(source, default_handler())
    }

    pub fn parse_source_with_handler(
        source: &str,
        handler: ErrorHandler,
    ) -> Result<Program, CompilerError> {
        let mut parser = Parser::new(Lexer::with_handler(source, handler));
        let program = parser.parse_program();

        match parser.error_count() {
            0 => Ok(program),
            errors => Err(CompilerError::rejected(Stage::Parse, errors)),
        }
    }

    /// Parse and type-check clite source code
    pub fn check_source(source: &str) -> Result<Program, CompilerError> {
        Self::check_source_with_handler(source, default_handler())
    }

    pub fn check_source_with_handler(
        source: &str,
        handler: ErrorHandler,
    ) -> Result<Program, CompilerError> {
        let program = Self::parse_source_with_handler(source, handler.clone())?;

        let mut checker = TypeChecker::with_handler(&program, handler)?;
        let report = checker.check(&program);

        if report.is_valid() {
            Ok(program)
        } else {
            Err(CompilerError::rejected(Stage::TypeCheck, report.error_count))
        }
    }
}
