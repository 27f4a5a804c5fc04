//! The requirement checker.
//!
//! One attribute, one predicate per call. Malformed expressions are usage
//! errors, a missing reader is the host's own failure passed through, and
//! everything else is a violation of the attribute's contract. Nothing is
//! retried or recovered internally.

use std::slice;

use reqattr_api::check::ensure;
use reqattr_api::{
    Attributes, Entry, Expr, Operand, Result, TypeRef, Usage, Value, Violation,
};

/// Classified form of a well-formed, non-empty expression.
///
/// Exactly the recognized requirement shapes, matched exhaustively; any
/// entry outside them routes to [`Usage::UnknownKey`] before evaluation
/// starts.
#[derive(Debug)]
enum Requirement<'e> {
    InstanceOf(&'e [TypeRef]),
    RespondsTo(&'e str),
    Satisfies(&'e str),
    Refutes(&'e str),
}

fn classify(entry: &Entry) -> Option<Requirement<'_>> {
    match (entry.key.as_ref(), &entry.operand) {
        ("to_be_a", Operand::Type(ty)) => Some(Requirement::InstanceOf(slice::from_ref(ty))),
        ("to_be_a", Operand::Types(types)) => Some(Requirement::InstanceOf(types.as_slice())),
        ("to_respond_to", Operand::Name(name)) => Some(Requirement::RespondsTo(name)),
        ("to_be", Operand::Name(condition)) => Some(Requirement::Satisfies(condition)),
        ("not_to_be", Operand::Name(condition)) => Some(Requirement::Refutes(condition)),
        _ => None,
    }
}

/// Check that `host`'s attribute `attr` satisfies `expr`.
///
/// Evaluation order: non-mapping expressions are rejected first, then the
/// attribute is read, then an empty expression reduces to a set-ness check,
/// a multi-entry expression is rejected listing its full content, and
/// finally the single entry is classified and evaluated.
///
/// ```
/// use reqattr_api::{Attributes, Expr, MissingReader, Value, INTEGER};
/// use reqattr_validate::require_attr;
///
/// struct Job {
///     retries: Option<i64>,
/// }
///
/// impl Attributes for Job {
///     fn attr(&self, name: &str) -> Result<&dyn Value, MissingReader> {
///         match name {
///             "retries" => Ok(&self.retries),
///             _ => Err(MissingReader::new(name)),
///         }
///     }
/// }
///
/// let job = Job { retries: Some(3) };
/// assert!(require_attr(&job, "retries", &Expr::to_be_a(INTEGER)).is_ok());
/// assert!(require_attr(&job, "retries", &Expr::to_be("odd")).is_ok());
///
/// let err = require_attr(&job, "retries", &Expr::to_be("even")).unwrap_err();
/// assert_eq!(err.to_string(), "Attribute `retries` must be even (value:3)");
/// ```
pub fn require_attr<H>(host: &H, attr: &str, expr: &Expr) -> Result<()>
where
    H: Attributes + ?Sized,
{
    // Reject non-mapping payloads before touching the attribute.
    let Some(entries) = expr.entries() else {
        return Err(Usage::NotAMap { expr: expr.to_string() }.into());
    };

    let value = host.attr(attr)?;

    if entries.is_empty() {
        // Trivial case: the attribute only has to be set.
        return ensure(!value.is_nil(), || Violation::Unset { attr: attr.to_string() });
    }

    if entries.len() > 1 {
        // Report the whole expression before looking at any key.
        return Err(Usage::TooManyEntries { expr: expr.to_string() }.into());
    }

    let Some(requirement) = classify(&entries[0]) else {
        return Err(Usage::UnknownKey { expr: expr.to_string() }.into());
    };

    match requirement {
        Requirement::InstanceOf(types) => {
            ensure(types.iter().any(|ty| value.is_a(ty)), || Violation::WrongType {
                attr: attr.to_string(),
                expected: types.into(),
                value: value.inspect(),
            })
        }
        Requirement::RespondsTo(name) => require_responds(attr, value, name),
        Requirement::Satisfies(condition) => {
            let predicate = predicate_name(condition);
            require_responds(attr, value, &predicate)?;
            ensure(value.predicate(&predicate) == Some(true), || Violation::NotSatisfied {
                attr: attr.to_string(),
                condition: condition.to_string(),
                value: value.inspect(),
            })
        }
        Requirement::Refutes(condition) => {
            let predicate = predicate_name(condition);
            require_responds(attr, value, &predicate)?;
            ensure(value.predicate(&predicate) != Some(true), || Violation::Forbidden {
                attr: attr.to_string(),
                condition: condition.to_string(),
                value: value.inspect(),
            })
        }
    }
}

// Shared by `to_respond_to` and the responder pre-check both condition
// forms run before invoking their predicate.
fn require_responds(attr: &str, value: &dyn Value, name: &str) -> Result<()> {
    ensure(value.responds_to(name), || Violation::NotResponding {
        attr: attr.to_string(),
        capability: name.to_string(),
        value: value.inspect(),
    })
}

/// Derive the predicate a condition checks, e.g. `even` into `even?`.
fn predicate_name(condition: &str) -> String {
    format!("{condition}?")
}

/// Extension that makes the check callable in method position.
///
/// Blanket-implemented for every [`Attributes`] host, so a method can state
/// preconditions about its own object's state directly:
///
/// ```
/// use reqattr_api::{Attributes, Expr, MissingReader, Result, Value, INTEGER};
/// use reqattr_validate::RequireAttr;
///
/// struct Job {
///     retries: Option<i64>,
/// }
///
/// impl Attributes for Job {
///     fn attr(&self, name: &str) -> Result<&dyn Value, MissingReader> {
///         match name {
///             "retries" => Ok(&self.retries),
///             _ => Err(MissingReader::new(name)),
///         }
///     }
/// }
///
/// impl Job {
///     fn run(&self) -> Result<()> {
///         self.require_attr("retries", &Expr::to_be_a(INTEGER))?;
///         self.require_attr("retries", &Expr::not_to_be("negative"))?;
///         Ok(())
///     }
/// }
///
/// assert!(Job { retries: Some(3) }.run().is_ok());
/// assert!(Job { retries: None }.run().is_err());
/// ```
pub trait RequireAttr: Attributes {
    /// Check that the named attribute satisfies the requirement.
    fn require_attr(&self, attr: &str, expr: &Expr) -> Result<()> {
        require_attr(self, attr, expr)
    }
}

impl<H: Attributes + ?Sized> RequireAttr for H {}
