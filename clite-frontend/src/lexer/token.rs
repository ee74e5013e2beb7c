//! Token definitions for the clite lexer
//!
//! This module defines the closed token vocabulary, keyword lookup and the
//! Token struct handed to the parser.

use clite_common::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// clite token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    EndOfFile,

    // Keywords
    Bool,
    Char,
    Else,
    False,
    Float,
    If,
    Int,
    Main,
    True,
    While,

    // Delimiters
    LeftBrace,      // {
    RightBrace,     // }
    LeftBracket,    // [
    RightBracket,   // ]
    LeftParen,      // (
    RightParen,     // )
    Semicolon,      // ;
    Comma,          // ,
    Assign,         // =

    // Operators
    Equals,         // ==
    Less,           // <
    LessEqual,      // <=
    Greater,        // >
    GreaterEqual,   // >=
    Not,            // !
    NotEqual,       // !=
    Plus,           // +
    Minus,          // -
    Multiply,       // *
    Divide,         // /
    And,            // &&
    Or,             // ||

    Identifier,

    // Literals
    IntLiteral,
    FloatLiteral,
    CharLiteral,
}

const RESERVED: [TokenType; 10] = [
    TokenType::Bool,
    TokenType::Char,
    TokenType::Else,
    TokenType::False,
    TokenType::Float,
    TokenType::If,
    TokenType::Int,
    TokenType::Main,
    TokenType::True,
    TokenType::While,
];

static KEYWORDS: LazyLock<HashMap<&'static str, TokenType>> = LazyLock::new(|| {
    RESERVED
        .iter()
        .map(|&token_type| (token_type.as_str(), token_type))
        .collect()
});

impl TokenType {
    /// Map a word to its keyword token, or `Identifier` if it is not reserved
    pub fn lookup(word: &str) -> TokenType {
        KEYWORDS.get(word).copied().unwrap_or(TokenType::Identifier)
    }

    /// Canonical text of the token
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::EndOfFile => "<EOF>",

            TokenType::Bool => "bool",
            TokenType::Char => "char",
            TokenType::Else => "else",
            TokenType::False => "false",
            TokenType::Float => "float",
            TokenType::If => "if",
            TokenType::Int => "int",
            TokenType::Main => "main",
            TokenType::True => "true",
            TokenType::While => "while",

            TokenType::LeftBrace => "{",
            TokenType::RightBrace => "}",
            TokenType::LeftBracket => "[",
            TokenType::RightBracket => "]",
            TokenType::LeftParen => "(",
            TokenType::RightParen => ")",
            TokenType::Semicolon => ";",
            TokenType::Comma => ",",
            TokenType::Assign => "=",

            TokenType::Equals => "==",
            TokenType::Less => "<",
            TokenType::LessEqual => "<=",
            TokenType::Greater => ">",
            TokenType::GreaterEqual => ">=",
            TokenType::Not => "!",
            TokenType::NotEqual => "!=",
            TokenType::Plus => "+",
            TokenType::Minus => "-",
            TokenType::Multiply => "*",
            TokenType::Divide => "/",
            TokenType::And => "&&",
            TokenType::Or => "||",

            TokenType::Identifier => "IDENT",

            TokenType::IntLiteral => "INT",
            TokenType::FloatLiteral => "FLOAT",
            TokenType::CharLiteral => "CHAR",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED.contains(self)
    }

    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenType::Equals
                | TokenType::Less
                | TokenType::LessEqual
                | TokenType::Greater
                | TokenType::GreaterEqual
                | TokenType::Not
                | TokenType::NotEqual
                | TokenType::Plus
                | TokenType::Minus
                | TokenType::Multiply
                | TokenType::Divide
                | TokenType::And
                | TokenType::Or
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenType::IntLiteral | TokenType::FloatLiteral | TokenType::CharLiteral
        )
    }

    /// Keywords that name one of the four primitive types
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenType::Int | TokenType::Float | TokenType::Char | TokenType::Bool
        )
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A token with its position and source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub position: Position,
    pub token_type: TokenType,
    pub lexeme: String,
}

impl Token {
    pub fn new(position: Position, token_type: TokenType, lexeme: impl Into<String>) -> Self {
        Self {
            position,
            token_type,
            lexeme: lexeme.into(),
        }
    }

    pub fn eof(position: Position) -> Self {
        Self::new(position, TokenType::EndOfFile, "")
    }
}

/// Token kind, plus the source text for identifiers and literals
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token_type {
            TokenType::Identifier
            | TokenType::IntLiteral
            | TokenType::FloatLiteral
            | TokenType::CharLiteral => write!(f, "{} `{}`", self.token_type, self.lexeme),
            _ => write!(f, "{}", self.token_type),
        }
    }
}
