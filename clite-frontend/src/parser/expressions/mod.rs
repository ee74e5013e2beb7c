//! Expression parsing for clite
//!
//! One procedure per precedence level, loosest first:
//! `||`, `&&`, equality, relation, additive, multiplicative, unary, primary.

mod binary;
mod primary;

use crate::ast::*;
use crate::parser::Parser;

impl Parser {
    /// Parse expression (top level)
    pub fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_disjunction()
    }
}
