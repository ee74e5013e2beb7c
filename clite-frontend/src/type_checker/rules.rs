//! Operator typing rules
//!
//! Pure functions over operand types; shared by `TypeMap::checked_type`
//! and the checking visitor.

use super::errors::TypeError;
use crate::ast::{BinaryOp, OpClass, UnaryOp};
use crate::types::Type;

/// Result type of a binary operator applied to known operand types
pub fn binary_result(op: BinaryOp, left: Type, right: Type) -> Type {
    match op.class() {
        OpClass::Arithmetic if left == Type::Float || right == Type::Float => Type::Float,
        OpClass::Arithmetic => Type::Int,
        OpClass::Relational | OpClass::Equality | OpClass::Boolean => Type::Bool,
    }
}

/// Result type of a unary operator or conversion
pub fn unary_result(op: UnaryOp, operand: Type) -> Type {
    match op {
        UnaryOp::Not => Type::Bool,
        UnaryOp::Negate => operand,
        UnaryOp::Convert(target) => target,
    }
}

/// Check the operand types of a binary operator
pub fn check_binary(op: BinaryOp, left: Type, right: Type) -> Result<(), TypeError> {
    let ok = match op.class() {
        OpClass::Arithmetic => left.is_numeric() && right.is_numeric(),
        OpClass::Relational | OpClass::Equality => left == right,
        OpClass::Boolean => left == Type::Bool && right == Type::Bool,
    };

    if ok {
        Ok(())
    } else {
        Err(TypeError::OperandMismatch { op, left, right })
    }
}

/// Check the operand type of a unary operator or conversion
pub fn check_unary(op: UnaryOp, operand: Type) -> Result<(), TypeError> {
    let ok = match op {
        UnaryOp::Not => operand == Type::Bool,
        UnaryOp::Negate => operand.is_numeric(),
        UnaryOp::Convert(Type::Float | Type::Char) => operand == Type::Int,
        UnaryOp::Convert(Type::Int) => matches!(operand, Type::Float | Type::Char),
        UnaryOp::Convert(Type::Bool) => false,
    };

    if ok {
        Ok(())
    } else {
        Err(TypeError::InvalidOperand { op, operand })
    }
}

/// Result of a binary operator over well-typed operands; `None` when an
/// operand is unknown or the operator rejects it
pub fn checked_binary(op: BinaryOp, left: Option<Type>, right: Option<Type>) -> Option<Type> {
    let (left, right) = (left?, right?);
    check_binary(op, left, right).ok()?;
    Some(binary_result(op, left, right))
}

/// Unary counterpart of `checked_binary`
pub fn checked_unary(op: UnaryOp, operand: Option<Type>) -> Option<Type> {
    let operand = operand?;
    check_unary(op, operand).ok()?;
    Some(unary_result(op, operand))
}
