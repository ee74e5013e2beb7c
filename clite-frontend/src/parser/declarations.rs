//! Declaration parsing for clite
//!
//! Declarations come first in the body of `main`; each names one or more
//! variables of a single primitive type.

use crate::ast::Decl;
use crate::lexer::TokenType;
use crate::parser::{ParseError, Parser};
use crate::types::Type;

impl Parser {
    /// Parse the declaration section: every leading `Type ident {, ident} ;`
    pub fn parse_declarations(&mut self) -> Vec<Decl> {
        let mut declarations = Vec::new();

        while self.peek().is_type_keyword() {
            self.parse_declaration(&mut declarations);
        }

        declarations
    }

    /// Parse one declaration, appending a `Decl` per declared name
    pub(crate) fn parse_declaration(&mut self, declarations: &mut Vec<Decl>) {
        let Some(ty) = self.parse_type() else {
            return;
        };

        loop {
            match self.expect(TokenType::Identifier, "declaration") {
                Some(name) => declarations.push(Decl::variable(name.lexeme, ty)),
                None => break,
            }

            if !self.match_token(TokenType::Comma) {
                break;
            }
        }

        self.expect(TokenType::Semicolon, "declaration");
    }

    /// Parse one of the four type keywords
    pub(crate) fn parse_type(&mut self) -> Option<Type> {
        match Type::from_token(self.peek()) {
            Some(ty) => {
                self.advance();
                Some(ty)
            }
            None => {
                self.report(ParseError::ExpectedType {
                    found: self.current.clone(),
                });
                None
            }
        }
    }
}
