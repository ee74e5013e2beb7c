//! Type checking for clite
//!
//! Two phases: build the `TypeMap` from the declarations (a duplicate name
//! is a hard failure), then walk the tree reporting every rule violation.

pub mod errors;
pub mod rules;
pub mod typemap;
pub mod check;

pub use check::{CheckReport, TypeChecker};
pub use errors::TypeError;
pub use typemap::TypeMap;
