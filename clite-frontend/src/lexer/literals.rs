//! Identifier and literal scanning for the clite lexer
//!
//! This module handles identifiers/keywords, integer and float literals,
//! and character literals.

use crate::lexer::{Lexer, TokenType};

impl Lexer {
    /// Collect characters while `accept` holds
    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.current_char() {
            if !accept(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    /// Tokenize an identifier or keyword
    pub(crate) fn tokenize_identifier(&mut self) -> (TokenType, String) {
        let identifier = self.take_while(|ch| ch.is_ascii_alphanumeric());

        // no keyword is a single letter
        let token_type = if identifier.len() > 1 {
            TokenType::lookup(&identifier)
        } else {
            TokenType::Identifier
        };

        (token_type, identifier)
    }

    /// Tokenize an integer or float literal
    pub(crate) fn tokenize_number(&mut self) -> (TokenType, String) {
        let mut number = self.take_while(|ch| ch.is_ascii_digit());

        if self.match_char('.') {
            number.push('.');
            number.push_str(&self.take_while(|ch| ch.is_ascii_digit()));
            return (TokenType::FloatLiteral, number);
        }

        (TokenType::IntLiteral, number)
    }

    /// Tokenize a character literal: exactly one character between quotes
    pub(crate) fn tokenize_char_literal(&mut self) -> Option<(TokenType, String)> {
        let start_location = self.current_location();
        self.advance(); // Skip opening quote

        let ch = match self.current_char() {
            None => {
                self.error("Unterminated character literal".to_string(), start_location);
                return None;
            }
            Some('\'') => {
                self.advance();
                self.error("Empty character literal".to_string(), start_location);
                return None;
            }
            Some(ch) => {
                self.advance();
                ch
            }
        };

        if !self.match_char('\'') {
            let location = self.current_location();
            self.error("Expected ' to close character literal".to_string(), location);
        }

        Some((TokenType::CharLiteral, ch.to_string()))
    }
}
