//! clite primitive types
//!
//! The language has exactly four scalar types and no composite ones.

use crate::lexer::TokenType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Int,
    Char,
    Float,
    Bool,
}

impl Type {
    /// Type named by a type keyword token
    pub fn from_token(token_type: TokenType) -> Option<Type> {
        match token_type {
            TokenType::Int => Some(Type::Int),
            TokenType::Char => Some(Type::Char),
            TokenType::Float => Some(Type::Float),
            TokenType::Bool => Some(Type::Bool),
            _ => None,
        }
    }

    /// Operand types accepted by arithmetic and negation
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Int | Type::Float)
    }

    /// Whether a value of type `source` may be assigned to this type.
    /// int widens to float and char widens to int; nothing else converts.
    pub fn accepts(&self, source: Type) -> bool {
        match self {
            Type::Float => matches!(source, Type::Float | Type::Int),
            Type::Int => matches!(source, Type::Int | Type::Char),
            _ => *self == source,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Int => "int",
            Type::Char => "char",
            Type::Float => "float",
            Type::Bool => "bool",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(Type::from_token(TokenType::Float), Some(Type::Float));
        assert_eq!(Type::from_token(TokenType::Main), None);
    }

    #[test]
    fn test_assignment_coercions() {
        assert!(Type::Float.accepts(Type::Int));
        assert!(Type::Float.accepts(Type::Float));
        assert!(!Type::Float.accepts(Type::Char));

        assert!(Type::Int.accepts(Type::Char));
        assert!(!Type::Int.accepts(Type::Float));

        assert!(Type::Char.accepts(Type::Char));
        assert!(!Type::Char.accepts(Type::Int));
        assert!(Type::Bool.accepts(Type::Bool));
        assert!(!Type::Bool.accepts(Type::Int));
    }
}
