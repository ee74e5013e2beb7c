//! Literal values
//!
//! Values are the leaf expressions of the tree; each knows its own type.

use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i32),
    Char(char),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Intrinsic type of the value
    pub fn value_type(&self) -> Type {
        match self {
            Value::Int(_) => Type::Int,
            Value::Char(_) => Type::Char,
            Value::Float(_) => Type::Float,
            Value::Bool(_) => Type::Bool,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Char(c) => write!(f, "'{}'", c),
            Value::Float(v) => write!(f, "{:?}", v),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_values() {
        let cases = [
            (Value::Int(1337), Type::Int),
            (Value::Char('q'), Type::Char),
            (Value::Bool(true), Type::Bool),
            (Value::Float(0.25), Type::Float),
        ];

        for (value, expected) in cases {
            assert_eq!(value.value_type(), expected);
        }
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Char('a').to_string(), "'a'");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }
}
