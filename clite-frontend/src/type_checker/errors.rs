//! Type checking error definitions

use crate::ast::{BinaryOp, UnaryOp};
use crate::types::Type;
use clite_common::CompilerError;
use thiserror::Error;

/// Type checking errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeError {
    #[error("Duplicate declaration of `{name}`")]
    DuplicateDeclaration { name: String },

    #[error("Undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("Operator `{op}` cannot be applied to {left} and {right}")]
    OperandMismatch { op: BinaryOp, left: Type, right: Type },

    #[error("Invalid operand of type {operand} for `{op}`")]
    InvalidOperand { op: UnaryOp, operand: Type },

    #[error("Cannot assign {found} to `{target}` of type {expected}")]
    AssignmentMismatch {
        target: String,
        expected: Type,
        found: Type,
    },

    #[error("Test of {construct} must be bool, found {found}")]
    NonBooleanTest {
        construct: &'static str,
        found: Type,
    },
}

impl From<TypeError> for CompilerError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::DuplicateDeclaration { name } => {
                CompilerError::DuplicateDeclaration { name }
            }
            other => CompilerError::type_error(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = TypeError::OperandMismatch {
            op: BinaryOp::Less,
            left: Type::Int,
            right: Type::Bool,
        };
        assert_eq!(err.to_string(), "Operator `<` cannot be applied to int and bool");

        let err = TypeError::AssignmentMismatch {
            target: "c".to_string(),
            expected: Type::Char,
            found: Type::Int,
        };
        assert_eq!(err.to_string(), "Cannot assign int to `c` of type char");

        let err = TypeError::InvalidOperand {
            op: UnaryOp::Convert(Type::Int),
            operand: Type::Bool,
        };
        assert_eq!(err.to_string(), "Invalid operand of type bool for `int`");
    }

    #[test]
    fn test_conversion_to_compiler_error() {
        let err: CompilerError = TypeError::DuplicateDeclaration { name: "a".to_string() }.into();
        assert_eq!(err, CompilerError::DuplicateDeclaration { name: "a".to_string() });

        let err: CompilerError = TypeError::UndefinedVariable { name: "x".to_string() }.into();
        assert_eq!(err, CompilerError::type_error("Undefined variable `x`".to_string()));
    }
}
