//! Public API surface for the reqattr library
//!
//! This crate provides the requirement-expression types, the error types,
//! and the traits hosts and their attribute values implement. The checker
//! itself lives in `reqattr-validate`.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{check, Error, MissingReader, Result, TypeList, Usage, Violation};
pub use types::{Entry, Expr, Operand, TypeRef};
pub use types::{BOOLEAN, FLOAT, INTEGER, LIST, NUMERIC, STRING};

// Re-export the traits hosts implement
pub use traits::{Attributes, Kind, Value};
