//! Variable type map
//!
//! The only symbol table in clite: one flat scope, built from the
//! declaration section and never modified afterwards.

use super::errors::TypeError;
use super::rules::{binary_result, checked_binary, checked_unary};
use crate::ast::{Decl, Expr, OpClass, Program, UnaryOp};
use crate::types::Type;
use indexmap::IndexMap;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Declared variables and their types, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeMap {
    types: IndexMap<String, Type>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from a program's declarations, failing on the first
    /// name declared twice
    pub fn build(program: &Program) -> Result<Self, TypeError> {
        let mut map = TypeMap::new();

        for decl in &program.declarations {
            match decl {
                Decl::Variable { name, ty } => map.declare(name.name(), *ty)?,
            }
        }

        debug!("type map built: {}", map);
        Ok(map)
    }

    /// Add a variable; a name may only be declared once
    pub fn declare(&mut self, name: &str, ty: Type) -> Result<(), TypeError> {
        if self.types.contains_key(name) {
            return Err(TypeError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }
        self.types.insert(name.to_string(), ty);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Type> {
        self.types.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Type)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    /// Static type of an expression. `None` when it depends on an
    /// undeclared variable.
    pub fn type_of(&self, expr: &Expr) -> Option<Type> {
        match expr {
            Expr::Variable(var) => self.get(var.name()),
            Expr::Value(value) => Some(value.value_type()),
            Expr::Binary { op, left, right } => match op.class() {
                OpClass::Arithmetic => {
                    let left = self.type_of(left)?;
                    let right = self.type_of(right)?;
                    Some(binary_result(*op, left, right))
                }
                OpClass::Relational | OpClass::Equality | OpClass::Boolean => Some(Type::Bool),
            },
            Expr::Unary { op, operand } => match op {
                UnaryOp::Not => Some(Type::Bool),
                UnaryOp::Negate => self.type_of(operand),
                UnaryOp::Convert(target) => Some(*target),
            },
        }
    }

    /// Type of `expr` if every variable in it is declared and every
    /// operator gets operands it accepts. One bottom-up pass.
    pub fn checked_type(&self, expr: &Expr) -> Option<Type> {
        match expr {
            Expr::Variable(var) => self.get(var.name()),
            Expr::Value(value) => Some(value.value_type()),
            Expr::Binary { op, left, right } => {
                checked_binary(*op, self.checked_type(left), self.checked_type(right))
            }
            Expr::Unary { op, operand } => checked_unary(*op, self.checked_type(operand)),
        }
    }

    pub fn is_valid(&self, expr: &Expr) -> bool {
        self.checked_type(expr).is_some()
    }
}

/// `{a: int, b: float}`
impl fmt::Display for TypeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, ty)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, ty)?;
        }
        write!(f, "}}")
    }
}
