//! Abstract Syntax Tree definitions for clite
//!
//! This module defines the AST nodes that represent clite language constructs.
//! The AST is built once by the parser and never mutated; the type checker
//! and any other consumer read it through the traversal in [`visit`].

pub mod ops;
pub mod values;
pub mod expressions;
pub mod statements;
pub mod visit;

// Re-export commonly used types at module level
pub use ops::{BinaryOp, OpClass, UnaryOp};
pub use values::Value;
pub use expressions::{Expr, Variable};
pub use statements::{Decl, Program, Stmt};
pub use visit::{inspect, walk, Node, VisitControl, Visitor};
