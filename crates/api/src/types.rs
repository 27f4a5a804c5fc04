//! Requirement expressions and runtime type references
//!
//! This module provides the data model of a requirement call: the open
//! [`Expr`] shape built at the call site, and the [`TypeRef`] references
//! `to_be_a` requirements test against.

use std::borrow::Cow;
use std::fmt;

use crate::traits::{Kind, Value};

/// A named runtime type reference used by `to_be_a` requirements.
///
/// A reference carries a display name and an instance test over erased
/// values. The built-in references classify by [`Kind`]; host code defines
/// its own with [`TypeRef::new`] and a downcast:
///
/// ```
/// use std::any::Any;
/// use reqattr_api::{Kind, TypeRef, Value};
///
/// struct UserId(u64);
///
/// impl Value for UserId {
///     fn kind(&self) -> Kind {
///         Kind::Other
///     }
///     fn is_a(&self, ty: &TypeRef) -> bool {
///         ty.matches(self)
///     }
///     fn inspect(&self) -> String {
///         format!("UserId({})", self.0)
///     }
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// const USER_ID: TypeRef = TypeRef::new("UserId", |v| v.as_any().is::<UserId>());
///
/// assert!(USER_ID.matches(&UserId(7)));
/// assert!(!USER_ID.matches(&7i64));
/// ```
#[derive(Clone, Copy)]
pub struct TypeRef {
    name: &'static str,
    test: fn(&dyn Value) -> bool,
}

impl TypeRef {
    /// Create a type reference from a display name and an instance test.
    pub const fn new(name: &'static str, test: fn(&dyn Value) -> bool) -> Self {
        Self { name, test }
    }

    /// The display name used in failure messages.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Run the instance test against a value.
    pub fn matches(&self, value: &dyn Value) -> bool {
        (self.test)(value)
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.name).finish()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Equality compares display names; the instance test is not observable.
impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeRef {}

/// Matches any integer value.
pub const INTEGER: TypeRef = TypeRef::new("Integer", |v| matches!(v.kind(), Kind::Int));

/// Matches any float value.
pub const FLOAT: TypeRef = TypeRef::new("Float", |v| matches!(v.kind(), Kind::Float));

/// Matches integers and floats; the supertype of the numeric references.
pub const NUMERIC: TypeRef = TypeRef::new("Numeric", |v| {
    matches!(v.kind(), Kind::Int | Kind::Float)
});

/// Matches string values.
pub const STRING: TypeRef = TypeRef::new("String", |v| matches!(v.kind(), Kind::Str));

/// Matches boolean values.
pub const BOOLEAN: TypeRef = TypeRef::new("Boolean", |v| matches!(v.kind(), Kind::Bool));

/// Matches list values.
pub const LIST: TypeRef = TypeRef::new("List", |v| matches!(v.kind(), Kind::List));

/// A requirement expression as passed at the call site.
///
/// Structurally open: anything a caller can write is representable,
/// including the shapes evaluation rejects as usage errors. A well-formed
/// expression is an empty map or a map with exactly one recognized entry;
/// the checker reports everything else, it is not prevented here.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Key-value form, ordered as written.
    Map(Vec<Entry>),
    /// Any non-mapping payload. Always rejected as a usage error.
    Opaque(Cow<'static, str>),
}

/// One key-value entry of a requirement expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Requirement key, e.g. `to_be_a`. Open so unrecognized keys stay
    /// representable.
    pub key: Cow<'static, str>,
    /// The key's operand.
    pub operand: Operand,
}

/// Operand of one expression entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A single type reference.
    Type(TypeRef),
    /// An ordered list of type references.
    Types(Vec<TypeRef>),
    /// A capability or condition name.
    Name(Cow<'static, str>),
    /// Any other payload, carried for diagnostics only.
    Raw(Cow<'static, str>),
}

impl Expr {
    /// No requirement beyond the attribute being set.
    pub fn none() -> Self {
        Expr::Map(Vec::new())
    }

    /// Require the value to be an instance of `ty`.
    pub fn to_be_a(ty: TypeRef) -> Self {
        Self::entry("to_be_a", Operand::Type(ty))
    }

    /// Require the value to be an instance of at least one listed type.
    ///
    /// Order is preserved into the failure message. Duplicate or
    /// overlapping references are permitted.
    pub fn to_be_one_of<I>(types: I) -> Self
    where
        I: IntoIterator<Item = TypeRef>,
    {
        Self::entry("to_be_a", Operand::Types(types.into_iter().collect()))
    }

    /// Require the value to expose the named zero-argument capability.
    pub fn to_respond_to(name: impl Into<Cow<'static, str>>) -> Self {
        Self::entry("to_respond_to", Operand::Name(name.into()))
    }

    /// Require the condition predicate `<condition>?` to hold.
    pub fn to_be(condition: impl Into<Cow<'static, str>>) -> Self {
        Self::entry("to_be", Operand::Name(condition.into()))
    }

    /// Require the condition predicate `<condition>?` not to hold.
    pub fn not_to_be(condition: impl Into<Cow<'static, str>>) -> Self {
        Self::entry("not_to_be", Operand::Name(condition.into()))
    }

    /// A single-entry map with an arbitrary key.
    pub fn entry(key: impl Into<Cow<'static, str>>, operand: Operand) -> Self {
        Expr::Map(vec![Entry { key: key.into(), operand }])
    }

    /// A map with arbitrary entries, order preserved.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (K, Operand)>,
    {
        Expr::Map(
            entries
                .into_iter()
                .map(|(key, operand)| Entry { key: key.into(), operand })
                .collect(),
        )
    }

    /// A non-mapping payload.
    pub fn opaque(payload: impl Into<Cow<'static, str>>) -> Self {
        Expr::Opaque(payload.into())
    }

    /// The entries of the map form; `None` for non-mapping payloads.
    pub fn entries(&self) -> Option<&[Entry]> {
        match self {
            Expr::Map(entries) => Some(entries),
            Expr::Opaque(_) => None,
        }
    }
}

impl Default for Expr {
    fn default() -> Self {
        Expr::none()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Map(entries) => {
                f.write_str("{")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", entry.key, entry.operand)?;
                }
                f.write_str("}")
            }
            Expr::Opaque(payload) => f.write_str(payload),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Type(ty) => f.write_str(ty.name()),
            Operand::Types(types) => {
                f.write_str("[")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(ty.name())?;
                }
                f.write_str("]")
            }
            Operand::Name(name) => f.write_str(name),
            Operand::Raw(payload) => f.write_str(payload),
        }
    }
}
