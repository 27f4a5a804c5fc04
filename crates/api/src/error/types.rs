//! Error type definitions for attribute requirement checks

use std::fmt;

use thiserror::Error;

use crate::types::TypeRef;

/// Domain violation: the attribute's current value breaks its declared
/// contract. The message names the attribute, the expectation, and the
/// value's printable representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The attribute is unset and no predicate was given.
    #[error("Attribute must be set: {attr}")]
    Unset {
        /// Name of the checked attribute
        attr: String,
    },

    /// `to_be_a` failed: the value is not an instance of any expected type.
    #[error("Attribute `{attr}` must be a {expected} (value:{value})")]
    WrongType {
        /// Name of the checked attribute
        attr: String,
        /// Expected type names, in the order given at the call site
        expected: TypeList,
        /// Printable representation of the actual value
        value: String,
    },

    /// `to_respond_to` failed: the value does not expose the capability.
    #[error("Attribute `{attr}` must respond to `{capability}` (value:{value})")]
    NotResponding {
        /// Name of the checked attribute
        attr: String,
        /// The missing capability name
        capability: String,
        /// Printable representation of the actual value
        value: String,
    },

    /// `to_be` failed: the condition predicate returned false.
    #[error("Attribute `{attr}` must be {condition} (value:{value})")]
    NotSatisfied {
        /// Name of the checked attribute
        attr: String,
        /// The condition that had to hold
        condition: String,
        /// Printable representation of the actual value
        value: String,
    },

    /// `not_to_be` failed: the forbidden condition predicate returned true.
    #[error("Attribute `{attr}` must not be {condition} (value:{value})")]
    Forbidden {
        /// Name of the checked attribute
        attr: String,
        /// The condition that had to stay false
        condition: String,
        /// Printable representation of the actual value
        value: String,
    },
}

/// Programmer error: the requirement call itself is malformed.
///
/// Each variant carries the full expression rendering so the message shows
/// what was actually passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Usage {
    /// The expression is not a key-value mapping at all.
    #[error("Expression must be a map: {expr}")]
    NotAMap {
        /// Rendering of the offending expression
        expr: String,
    },

    /// The expression carries more than one entry.
    #[error("Expression too long: {expr}")]
    TooManyEntries {
        /// Rendering of the offending expression
        expr: String,
    },

    /// The expression's single entry is not a recognized requirement.
    #[error("Invalid expression: {expr}")]
    UnknownKey {
        /// Rendering of the offending expression
        expr: String,
    },
}

/// The host exposes no reader for the named attribute.
///
/// Hosts construct this themselves from [`Attributes::attr`]; requirement
/// checks pass it through unmodified rather than wrapping it.
///
/// [`Attributes::attr`]: crate::traits::Attributes::attr
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no reader for attribute `{attr}`")]
pub struct MissingReader {
    /// The attribute name no reader exists for
    pub attr: String,
}

impl MissingReader {
    /// Create a missing-reader failure for the given attribute name.
    pub fn new(attr: impl Into<String>) -> Self {
        Self { attr: attr.into() }
    }
}

/// Primary error type for attribute requirement checks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The attribute's value failed its declared requirement
    #[error(transparent)]
    Violation(#[from] Violation),

    /// The requirement call itself was malformed
    #[error(transparent)]
    Usage(#[from] Usage),

    /// The host has no reader for the attribute; passed through as-is
    #[error(transparent)]
    MissingReader(#[from] MissingReader),
}

impl Error {
    /// Whether this is a domain violation of the attribute's contract.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }

    /// Whether this is a misuse of the requirement call itself.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Result type for attribute requirement checks
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Ordered list of expected type names, joined with " or " in messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeList(pub Vec<&'static str>);

impl fmt::Display for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" or "))
    }
}

impl From<&[TypeRef]> for TypeList {
    fn from(types: &[TypeRef]) -> Self {
        TypeList(types.iter().map(TypeRef::name).collect())
    }
}
