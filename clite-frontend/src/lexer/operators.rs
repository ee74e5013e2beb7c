//! Operator, punctuation and comment scanning for the clite lexer

use crate::lexer::{Lexer, TokenType};

impl Lexer {
    /// Skip a `//` comment up to (not including) the end of line
    pub(crate) fn skip_line_comment(&mut self) {
        self.advance(); // Skip first '/'
        self.advance(); // Skip second '/'

        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Pick the two-character form if the next character is `second`
    fn switch2(&mut self, single: TokenType, second: char, double: TokenType) -> TokenType {
        if self.match_char(second) {
            double
        } else {
            single
        }
    }

    /// Tokenize punctuation or an operator. Reports and returns `None` for
    /// characters that start no token; the offending character is consumed.
    pub(crate) fn tokenize_operator(&mut self) -> Option<(TokenType, String)> {
        let start_location = self.current_location();
        let ch = self.advance()?;

        let token_type = match ch {
            '{' => TokenType::LeftBrace,
            '}' => TokenType::RightBrace,
            '[' => TokenType::LeftBracket,
            ']' => TokenType::RightBracket,
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            ';' => TokenType::Semicolon,
            ',' => TokenType::Comma,

            '+' => TokenType::Plus,
            '-' => TokenType::Minus,
            '*' => TokenType::Multiply,
            '/' => TokenType::Divide,

            '=' => self.switch2(TokenType::Assign, '=', TokenType::Equals),
            '<' => self.switch2(TokenType::Less, '=', TokenType::LessEqual),
            '>' => self.switch2(TokenType::Greater, '=', TokenType::GreaterEqual),
            '!' => self.switch2(TokenType::Not, '=', TokenType::NotEqual),

            '&' | '|' => {
                if !self.match_char(ch) {
                    self.error(format!("Expected '{ch}{ch}', found lone '{ch}'"), start_location);
                    return None;
                }
                if ch == '&' {
                    TokenType::And
                } else {
                    TokenType::Or
                }
            }

            '\0' => {
                self.error("Illegal character NUL".to_string(), start_location);
                return None;
            }

            other => {
                self.error(format!("Illegal character: {other:?}"), start_location);
                return None;
            }
        };

        // Punctuation carries no lexeme
        let lexeme = if token_type.is_operator() || token_type == TokenType::Assign {
            token_type.as_str().to_string()
        } else {
            String::new()
        };

        Some((token_type, lexeme))
    }
}
