//! clite Lexer
//!
//! Tokenizes clite source code into a stream of tokens, pulled one at a
//! time by the parser. Handles keywords, operators, literals, identifiers
//! and line comments. Lexical errors are reported and skipped; the lexer
//! never stops early.

pub mod token;
pub mod literals;
pub mod operators;

pub use token::{Token, TokenType};

use clite_common::{ErrorHandler, ErrorReporter, Position, SourceTracker};
use log::{debug, trace};
use std::cell::RefCell;
use std::rc::Rc;

/// clite Lexer
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) tracker: SourceTracker,
    reporter: Rc<RefCell<ErrorReporter>>,
    error_count: usize,
}

impl Lexer {
    /// Create a new lexer reporting to stderr
    pub fn new(input: &str) -> Self {
        Self::with_reporter(input, ErrorReporter::new())
    }

    /// Create a new lexer reporting through `handler`
    pub fn with_handler(input: &str, handler: ErrorHandler) -> Self {
        Self::with_reporter(input, ErrorReporter::with_handler(handler))
    }

    fn with_reporter(input: &str, reporter: ErrorReporter) -> Self {
        let mut lexer = Self {
            input: Vec::new(),
            position: 0,
            tracker: SourceTracker::new(),
            reporter: Rc::new(RefCell::new(reporter)),
            error_count: 0,
        };
        lexer.init(input);
        lexer
    }

    /// Reset the lexer onto a new source buffer
    pub fn init(&mut self, input: &str) {
        self.input = input.chars().collect();
        self.position = 0;
        self.tracker = SourceTracker::new();
        self.error_count = 0;
        self.reporter.borrow_mut().clear();
        debug!("lexer initialised with {} characters", self.input.len());
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.position += 1;
        self.tracker.advance(ch);
        Some(ch)
    }

    /// Consume the current character if it is `expected`
    pub(crate) fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Get current location
    pub(crate) fn current_location(&self) -> Position {
        self.tracker.position()
    }

    /// Report a lexical error at `position`
    pub(crate) fn error(&mut self, message: String, position: Position) {
        debug!("lexical error at {}: {}", position, message);
        self.error_count += 1;
        self.reporter.borrow_mut().error(message, Some(position));
    }

    /// Skip spaces, tabs, newlines and carriage returns
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.current_char() {
            self.advance();
        }
    }

    /// Get next token. Returns `EndOfFile` forever once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let start_location = self.current_location();

            let scanned = match self.current_char() {
                None => return Token::eof(start_location),

                Some(ch) if ch.is_ascii_alphabetic() => Some(self.tokenize_identifier()),

                Some(ch) if ch.is_ascii_digit() => Some(self.tokenize_number()),

                Some('\'') => self.tokenize_char_literal(),

                Some('/') if self.peek_char(1) == Some('/') => {
                    self.skip_line_comment();
                    None
                }

                Some(_) => self.tokenize_operator(),
            };

            // None means a comment or a reported error: scan again
            if let Some((token_type, lexeme)) = scanned {
                let token = Token::new(start_location, token_type, lexeme);
                trace!("scanned {} at {}", token, token.position);
                return token;
            }
        }
    }

    /// Tokenize entire input into a vector of tokens, ending with `EndOfFile`
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.token_type == TokenType::EndOfFile;
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }

    /// True once every character has been consumed
    pub fn at_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Number of lexical errors since the last `init`
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Diagnostic log this lexer reports into. Later stages append to the
    /// same log so diagnostics stay in report order.
    pub fn reporter(&self) -> Rc<RefCell<ErrorReporter>> {
        Rc::clone(&self.reporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clite_common::Diagnostic;

    fn quiet_lexer(input: &str) -> Lexer {
        Lexer::with_handler(input, Rc::new(|_: &Diagnostic| {}))
    }

    fn first_token(input: &str) -> Token {
        quiet_lexer(input).next_token()
    }

    #[test]
    fn test_token_fixtures() {
        let fixtures = [
            ("alphabet", TokenType::Identifier, "alphabet"),
            ("while", TokenType::While, "while"),
            ("=", TokenType::Assign, "="),
            ("==", TokenType::Equals, "=="),
            ("||", TokenType::Or, "||"),
            ("&&", TokenType::And, "&&"),
            ("12345", TokenType::IntLiteral, "12345"),
            ("3.14159", TokenType::FloatLiteral, "3.14159"),
            (" \n \talphabet", TokenType::Identifier, "alphabet"),
            (";", TokenType::Semicolon, ""),
            ("'a'", TokenType::CharLiteral, "a"),
            ("// some comments \n alpha", TokenType::Identifier, "alpha"),
        ];

        for (source, expected_type, expected_lexeme) in fixtures {
            let token = first_token(source);
            assert_eq!(token.token_type, expected_type, "token type for {:?}", source);
            assert_eq!(token.lexeme, expected_lexeme, "lexeme for {:?}", source);
        }
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let mut lexer = quiet_lexer("int main bool x whiles if else true false");
        let types: Vec<TokenType> = lexer.tokenize().iter().map(|t| t.token_type).collect();

        assert_eq!(
            types,
            vec![
                TokenType::Int,
                TokenType::Main,
                TokenType::Bool,
                TokenType::Identifier,
                TokenType::Identifier,
                TokenType::If,
                TokenType::Else,
                TokenType::True,
                TokenType::False,
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_operators() {
        let mut lexer = quiet_lexer("= == < <= > >= ! != + - * / && ||");
        let tokens = lexer.tokenize();

        let expected = [
            TokenType::Assign, TokenType::Equals, TokenType::Less, TokenType::LessEqual,
            TokenType::Greater, TokenType::GreaterEqual, TokenType::Not, TokenType::NotEqual,
            TokenType::Plus, TokenType::Minus, TokenType::Multiply, TokenType::Divide,
            TokenType::And, TokenType::Or, TokenType::EndOfFile,
        ];

        assert_eq!(tokens.len(), expected.len());
        for (token, expected_type) in tokens.iter().zip(expected) {
            assert_eq!(token.token_type, expected_type);
        }
        assert_eq!(tokens[3].lexeme, "<=");
        assert_eq!(tokens[6].lexeme, "!");
    }

    #[test]
    fn test_punctuation() {
        let mut lexer = quiet_lexer("{}[](),;");
        let types: Vec<TokenType> = lexer.tokenize().iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::LeftBrace,
                TokenType::RightBrace,
                TokenType::LeftBracket,
                TokenType::RightBracket,
                TokenType::LeftParen,
                TokenType::RightParen,
                TokenType::Comma,
                TokenType::Semicolon,
                TokenType::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_negative_number_is_two_tokens() {
        let mut lexer = quiet_lexer("-42");
        let tokens = lexer.tokenize();
        assert_eq!(tokens[0].token_type, TokenType::Minus);
        assert_eq!(tokens[1].token_type, TokenType::IntLiteral);
        assert_eq!(tokens[1].lexeme, "42");
    }

    #[test]
    fn test_float_with_trailing_dot() {
        let token = first_token("7.");
        assert_eq!(token.token_type, TokenType::FloatLiteral);
        assert_eq!(token.lexeme, "7.");
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = quiet_lexer("x");
        assert_eq!(lexer.next_token().token_type, TokenType::Identifier);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert_eq!(token.token_type, TokenType::EndOfFile);
            assert_eq!(token.lexeme, "");
        }
        assert!(lexer.at_eof());
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let mut lexer = quiet_lexer("a // trailing");
        let tokens = lexer.tokenize();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].token_type, TokenType::EndOfFile);
    }

    #[test]
    fn test_positions() {
        let mut lexer = quiet_lexer("int\n  x = 1;");
        let tokens = lexer.tokenize();

        assert_eq!(tokens[0].position, Position::new(0, 1, 1));
        assert_eq!(tokens[1].position, Position::new(6, 2, 3));
        assert_eq!(tokens[2].position, Position::new(8, 2, 5));
        assert_eq!(tokens[4].position.column, 8);
    }

    #[test]
    fn test_illegal_character_resynchronises() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut lexer = Lexer::with_handler(
            "a # b",
            Rc::new(move |d: &Diagnostic| sink.borrow_mut().push(d.position)),
        );

        let tokens = lexer.tokenize();
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();

        assert_eq!(lexemes, vec!["a", "b", ""]);
        assert_eq!(lexer.error_count(), 1);
        assert_eq!(*seen.borrow(), vec![Some(Position::new(2, 1, 3))]);
    }

    #[test]
    fn test_lone_ampersand_and_pipe_are_errors() {
        let mut lexer = quiet_lexer("a & b | c");
        let tokens = lexer.tokenize();

        assert_eq!(lexer.error_count(), 2);
        assert!(tokens
            .iter()
            .all(|t| matches!(t.token_type, TokenType::Identifier | TokenType::EndOfFile)));
    }

    #[test]
    fn test_unterminated_char_literal() {
        let mut lexer = quiet_lexer("'ab");
        let tokens = lexer.tokenize();

        assert_eq!(lexer.error_count(), 1);
        assert_eq!(tokens[0].token_type, TokenType::CharLiteral);
        assert_eq!(tokens[0].lexeme, "a");
        assert_eq!(tokens[1].token_type, TokenType::Identifier);
        assert_eq!(tokens[1].lexeme, "b");

        let mut lexer = quiet_lexer("'");
        assert_eq!(lexer.next_token().token_type, TokenType::EndOfFile);
        assert_eq!(lexer.error_count(), 1);
    }

    #[test]
    fn test_init_resets_state() {
        let mut lexer = quiet_lexer("$");
        let log = lexer.reporter();
        lexer.tokenize();
        assert_eq!(lexer.error_count(), 1);
        assert_eq!(log.borrow().diagnostics()[0].message, "Illegal character: '$'");

        lexer.init("while");
        assert_eq!(lexer.error_count(), 0);
        assert!(log.borrow().diagnostics().is_empty());
        let token = lexer.next_token();
        assert_eq!(token.token_type, TokenType::While);
        assert_eq!(token.position, Position::new(0, 1, 1));
    }
}
