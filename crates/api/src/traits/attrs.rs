//! The host-side attribute reader seam.

use crate::error::MissingReader;
use crate::traits::Value;

/// Read access to named attribute values.
///
/// Hosts expose each checked attribute through [`attr`](Self::attr),
/// composing the capability in explicitly instead of having it injected.
/// An unknown attribute name is the host's own failure, reported as
/// [`MissingReader`]; requirement checks pass it through untouched.
pub trait Attributes {
    /// The current value of the named attribute.
    fn attr(&self, name: &str) -> Result<&dyn Value, MissingReader>;
}
