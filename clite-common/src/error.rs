//! Error handling for the clite compiler
//!
//! This module defines the crate-boundary error type and the diagnostic
//! reporter every stage writes its non-fatal errors into.

use crate::source_loc::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Pipeline stage a rejection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Lex,
    Parse,
    TypeCheck,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "lexing"),
            Stage::Parse => write!(f, "parsing"),
            Stage::TypeCheck => write!(f, "type checking"),
        }
    }
}

/// Main compiler error type that encompasses all phases of compilation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Duplicate declaration of `{name}`")]
    DuplicateDeclaration { name: String },

    #[error("Type error: {message}")]
    TypeError { message: String },

    #[error("{stage} failed with {}", plural(*error_count, "error"))]
    Rejected { stage: Stage, error_count: usize },
}

impl CompilerError {
    /// Create a type error
    pub fn type_error(message: String) -> Self {
        CompilerError::TypeError { message }
    }

    /// Create a rejection for a stage that reported errors
    pub fn rejected(stage: Stage, error_count: usize) -> Self {
        CompilerError::Rejected { stage, error_count }
    }
}

/// An error message with an optional source position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub position: Option<Position>,
}

impl Diagnostic {
    pub fn new(message: String, position: Option<Position>) -> Self {
        Self { message, position }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;
        if let Some(position) = &self.position {
            write!(f, " at {}", position)?;
        }
        Ok(())
    }
}

/// Callback every reported diagnostic is forwarded to
pub type ErrorHandler = Rc<dyn Fn(&Diagnostic)>;

/// Handler used when none is configured: prints to stderr
pub fn default_handler() -> ErrorHandler {
    Rc::new(|diagnostic: &Diagnostic| eprintln!("{}", diagnostic))
}

/// Error reporter for collecting and forwarding diagnostics, in the order
/// they were reported
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    handler: ErrorHandler,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::with_handler(default_handler())
    }

    pub fn with_handler(handler: ErrorHandler) -> Self {
        Self {
            diagnostics: Vec::new(),
            handler,
        }
    }

    /// Record a diagnostic and forward it to the handler
    pub fn report(&mut self, diagnostic: Diagnostic) {
        (self.handler)(&diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Report an error at an optional position
    pub fn error(&mut self, message: String, position: Option<Position>) {
        self.report(Diagnostic::new(message, position));
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Clear all diagnostics, keeping the handler
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        match self.error_count() {
            0 => "no errors".to_string(),
            count => plural(count, "error"),
        }
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReporter")
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

fn plural(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}
