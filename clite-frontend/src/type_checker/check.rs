//! The checking pass over a parsed program

use super::errors::TypeError;
use super::rules::{check_binary, check_unary, checked_binary, checked_unary};
use super::typemap::TypeMap;
use crate::ast::{walk, Expr, Node, Program, Stmt, VisitControl, Visitor};
use crate::types::Type;
use clite_common::{Diagnostic, ErrorHandler, ErrorReporter};
use log::{debug, trace};
use std::collections::HashMap;

/// Outcome of one `TypeChecker::check` run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub error_count: usize,
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }
}

/// Type checker for a single program
pub struct TypeChecker {
    types: TypeMap,
    reporter: ErrorReporter,
}

impl TypeChecker {
    /// Build the type map for `program`, reporting to stderr
    pub fn new(program: &Program) -> Result<Self, TypeError> {
        Self::with_reporter(program, ErrorReporter::new())
    }

    /// Build the type map for `program`, reporting through `handler`
    pub fn with_handler(program: &Program, handler: ErrorHandler) -> Result<Self, TypeError> {
        Self::with_reporter(program, ErrorReporter::with_handler(handler))
    }

    fn with_reporter(program: &Program, reporter: ErrorReporter) -> Result<Self, TypeError> {
        Ok(Self {
            types: TypeMap::build(program)?,
            reporter,
        })
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.types
    }

    /// Check every statement of `program`. Diagnostics and the error count
    /// start from zero on each call.
    pub fn check(&mut self, program: &Program) -> CheckReport {
        self.reporter.clear();

        let mut visitor = RuleVisitor {
            types: &self.types,
            reporter: &mut self.reporter,
            checked: HashMap::new(),
        };
        walk(&mut visitor, Node::Program(program));

        debug!("type check finished with {}", self.reporter.summary());
        CheckReport {
            error_count: self.reporter.error_count(),
        }
    }

    /// Diagnostics from the last `check`
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.reporter.diagnostics()
    }
}

/// Applies each node's own rule; operands that are already invalid are
/// left to the node where they fail.
struct RuleVisitor<'c> {
    types: &'c TypeMap,
    reporter: &'c mut ErrorReporter,
    /// Checked type of every subexpression seen so far, keyed by address.
    /// Only valid while the walked program is borrowed.
    checked: HashMap<*const Expr, Option<Type>>,
}

impl RuleVisitor<'_> {
    /// Type of a well-typed subexpression, `None` if it fails somewhere.
    /// Each subexpression is typed once per walk.
    fn known(&mut self, expr: &Expr) -> Option<Type> {
        let key: *const Expr = expr;
        if let Some(ty) = self.checked.get(&key) {
            return *ty;
        }

        let ty = match expr {
            Expr::Variable(var) => self.types.get(var.name()),
            Expr::Value(value) => Some(value.value_type()),
            Expr::Binary { op, left, right } => {
                let (left, right) = (self.known(left), self.known(right));
                checked_binary(*op, left, right)
            }
            Expr::Unary { op, operand } => {
                let operand = self.known(operand);
                checked_unary(*op, operand)
            }
        };

        self.checked.insert(key, ty);
        ty
    }

    fn declared(&self, name: &str) -> Result<(), TypeError> {
        if self.types.contains(name) {
            Ok(())
        } else {
            Err(TypeError::UndefinedVariable {
                name: name.to_string(),
            })
        }
    }

    fn boolean_test(&mut self, test: &Expr, construct: &'static str) -> Result<(), TypeError> {
        match self.known(test) {
            Some(found) if found != Type::Bool => {
                Err(TypeError::NonBooleanTest { construct, found })
            }
            _ => Ok(()),
        }
    }

    fn check_node(&mut self, node: Node<'_>) -> Result<(), TypeError> {
        match node {
            Node::Variable(target) => self.declared(target.name()),
            Node::Expr(Expr::Variable(var)) => self.declared(var.name()),

            Node::Expr(Expr::Binary { op, left, right }) => {
                match (self.known(left), self.known(right)) {
                    (Some(l), Some(r)) => check_binary(*op, l, r),
                    _ => Ok(()),
                }
            }

            Node::Expr(Expr::Unary { op, operand }) => match self.known(operand) {
                Some(ty) => check_unary(*op, ty),
                None => Ok(()),
            },

            Node::Stmt(Stmt::Assignment { target, source }) => {
                match (self.types.get(target.name()), self.known(source)) {
                    (Some(expected), Some(found)) if !expected.accepts(found) => {
                        Err(TypeError::AssignmentMismatch {
                            target: target.name().to_string(),
                            expected,
                            found,
                        })
                    }
                    _ => Ok(()),
                }
            }

            Node::Stmt(Stmt::Conditional { test, .. }) => self.boolean_test(test, "if statement"),
            Node::Stmt(Stmt::Loop { test, .. }) => self.boolean_test(test, "while loop"),

            Node::Program(_)
            | Node::Decl(_)
            | Node::Stmt(Stmt::Skip | Stmt::Block { .. })
            | Node::Expr(Expr::Value(_)) => Ok(()),
        }
    }
}

impl<'a> Visitor<'a> for RuleVisitor<'_> {
    fn visit(&mut self, node: Node<'a>) -> VisitControl {
        trace!("checking {}", node.kind_name());

        if let Err(err) = self.check_node(node) {
            debug!("type error: {}", err);
            self.reporter.error(err.to_string(), None);
        }

        VisitControl::Continue
    }
}
