//! # reqattr
//!
//! Defensive attribute requirement checks: a method states a precondition
//! about one of its own object's attributes and gets back a descriptive
//! failure that tells a bad object state apart from a misuse of the check
//! itself.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! reqattr = "0.4"
//! ```
//!
//! A host exposes its attributes through [`Attributes`](prelude::Attributes)
//! and states requirements where it relies on them:
//!
//! ```
//! use reqattr::prelude::*;
//!
//! struct Person {
//!     name: Option<String>,
//!     age: Option<i64>,
//!     jobs: Option<Vec<String>>,
//! }
//!
//! impl Attributes for Person {
//!     fn attr(&self, name: &str) -> Result<&dyn Value, MissingReader> {
//!         match name {
//!             "name" => Ok(&self.name),
//!             "age" => Ok(&self.age),
//!             "jobs" => Ok(&self.jobs),
//!             _ => Err(MissingReader::new(name)),
//!         }
//!     }
//! }
//!
//! impl Person {
//!     fn summary(&self) -> Result<String> {
//!         self.require_attr("name", &Expr::not_to_be("empty"))?;
//!         self.require_attr("age", &Expr::to_be_a(INTEGER))?;
//!         self.require_attr("jobs", &Expr::to_respond_to("each"))?;
//!
//!         Ok(format!("{} ({})", self.name.as_deref().unwrap(), self.age.unwrap()))
//!     }
//! }
//!
//! let person = Person {
//!     name: Some("Ada".to_string()),
//!     age: Some(36),
//!     jobs: Some(vec!["engines".to_string()]),
//! };
//! assert_eq!(person.summary().unwrap(), "Ada (36)");
//!
//! let unnamed = Person {
//!     name: Some(String::new()),
//!     age: Some(36),
//!     jobs: None,
//! };
//! let err = unnamed.summary().unwrap_err();
//! assert_eq!(err.to_string(), "Attribute `name` must not be empty (value:\"\")");
//! assert!(err.is_violation());
//! ```
//!
//! Failures come in two pattern-matchable severities: a
//! [`Violation`](prelude::Violation) means the object's state breaks the
//! stated contract, a [`Usage`](prelude::Usage) error means the check
//! itself was invoked incorrectly. A host's own missing-reader failure
//! passes through untouched.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`reqattr-api`]: expression types, errors, and the host/value traits
//! - [`reqattr-validate`]: the requirement checker
//!
//! [`reqattr-api`]: api
//! [`reqattr-validate`]: validate

// Core re-exports
pub use reqattr_api as api;
pub use reqattr_validate as validate;

pub use reqattr_api::{Error, Expr, Result};
pub use reqattr_validate::{require_attr, RequireAttr};

/// Common imports for reqattr users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, MissingReader, Result, Usage, Violation};

    // Re-export the expression model
    pub use crate::api::{Entry, Expr, Operand, TypeRef};

    // Re-export the built-in type references
    pub use crate::api::{BOOLEAN, FLOAT, INTEGER, LIST, NUMERIC, STRING};

    // Re-export the host and value traits
    pub use crate::api::{Attributes, Kind, Value};

    // Re-export the checker
    pub use crate::validate::{require_attr, RequireAttr};
}
