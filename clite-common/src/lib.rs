//! clite compiler - Common Types and Utilities
//!
//! This crate contains the source position model, the compiler error type
//! and the diagnostic reporter shared by every stage of the clite front end.

pub mod error;
pub mod source_loc;

pub use error::{
    default_handler, CompilerError, Diagnostic, ErrorHandler, ErrorReporter, Stage,
};
pub use source_loc::{Position, SourceTracker};
