//! Generic tree traversal
//!
//! `walk` is the single descent over the AST shared by every analysis.
//! A visitor is invoked on each node and decides whether the walk goes
//! on into that node's children.

use super::expressions::{Expr, Variable};
use super::statements::{Decl, Program, Stmt};

/// Borrowed view of any node in the tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Program(&'a Program),
    Decl(&'a Decl),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    /// Assignment target
    Variable(&'a Variable),
}

impl<'a> Node<'a> {
    /// Short name of the node kind, e.g. "Conditional"
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::Decl(Decl::Variable { .. }) => "VariableDecl",
            Node::Stmt(Stmt::Skip) => "Skip",
            Node::Stmt(Stmt::Block { .. }) => "Block",
            Node::Stmt(Stmt::Assignment { .. }) => "Assignment",
            Node::Stmt(Stmt::Conditional { .. }) => "Conditional",
            Node::Stmt(Stmt::Loop { .. }) => "Loop",
            Node::Expr(Expr::Variable(_)) | Node::Variable(_) => "Variable",
            Node::Expr(Expr::Value(_)) => "Value",
            Node::Expr(Expr::Binary { .. }) => "Binary",
            Node::Expr(Expr::Unary { .. }) => "Unary",
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Stmt(stmt)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expr(expr)
    }
}

/// What the walk does after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitControl {
    /// Descend into the node's children
    Continue,
    /// Skip the node's children
    Stop,
}

pub trait Visitor<'a> {
    fn visit(&mut self, node: Node<'a>) -> VisitControl;
}

impl<'a, F> Visitor<'a> for F
where
    F: FnMut(Node<'a>) -> VisitControl,
{
    fn visit(&mut self, node: Node<'a>) -> VisitControl {
        self(node)
    }
}

/// Visit `node`, then its children in source order unless the visitor stops.
///
/// Children order: declarations before statements for a program, test then
/// branches for conditionals and loops, target then source for assignments,
/// left then right for binary expressions.
pub fn walk<'a, V>(visitor: &mut V, node: Node<'a>)
where
    V: Visitor<'a> + ?Sized,
{
    if visitor.visit(node) == VisitControl::Stop {
        return;
    }

    match node {
        Node::Program(program) => {
            for decl in &program.declarations {
                walk(visitor, Node::Decl(decl));
            }
            walk_stmts(visitor, &program.body);
        }
        Node::Stmt(stmt) => match stmt {
            Stmt::Skip => {}
            Stmt::Block { members } => walk_stmts(visitor, members),
            Stmt::Assignment { target, source } => {
                walk(visitor, Node::Variable(target));
                walk(visitor, Node::Expr(source));
            }
            Stmt::Conditional { test, then_branch, else_branch } => {
                walk(visitor, Node::Expr(test));
                walk(visitor, Node::Stmt(then_branch));
                if let Some(else_branch) = else_branch {
                    walk(visitor, Node::Stmt(else_branch));
                }
            }
            Stmt::Loop { test, body } => {
                walk(visitor, Node::Expr(test));
                walk(visitor, Node::Stmt(body));
            }
        },
        Node::Expr(expr) => match expr {
            Expr::Binary { left, right, .. } => {
                walk(visitor, Node::Expr(left));
                walk(visitor, Node::Expr(right));
            }
            Expr::Unary { operand, .. } => walk(visitor, Node::Expr(operand)),
            Expr::Variable(_) | Expr::Value(_) => {}
        },
        Node::Decl(_) | Node::Variable(_) => {}
    }
}

fn walk_stmts<'a, V>(visitor: &mut V, stmts: &'a [Stmt])
where
    V: Visitor<'a> + ?Sized,
{
    for stmt in stmts {
        walk(visitor, Node::Stmt(stmt));
    }
}

/// Depth-first traversal with a predicate: children are visited only
/// when `f` returns true for their parent.
pub fn inspect<'a, F>(node: Node<'a>, mut f: F)
where
    F: FnMut(Node<'a>) -> bool,
{
    let mut visitor = |node: Node<'a>| {
        if f(node) {
            VisitControl::Continue
        } else {
            VisitControl::Stop
        }
    };
    walk(&mut visitor, node);
}
