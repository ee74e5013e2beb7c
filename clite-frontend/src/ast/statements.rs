//! Statement, declaration and program nodes for clite

use super::expressions::{Expr, Variable};
use crate::types::Type;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Empty statement (just semicolon)
    Skip,

    Block {
        members: Vec<Stmt>,
    },

    Assignment {
        target: Variable,
        source: Expr,
    },

    Conditional {
        test: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    Loop {
        test: Expr,
        body: Box<Stmt>,
    },
}

impl Stmt {
    pub fn assign(target: impl Into<String>, source: Expr) -> Stmt {
        Stmt::Assignment {
            target: Variable::new(target),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Variable { name: Variable, ty: Type },
}

impl Decl {
    pub fn variable(name: impl Into<String>, ty: Type) -> Decl {
        Decl::Variable {
            name: Variable::new(name),
            ty,
        }
    }
}

/// Root of the tree: the declarations and body of `main`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub declarations: Vec<Decl>,
    pub body: Vec<Stmt>,
}
