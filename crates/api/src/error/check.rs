//! Check helpers shared by requirement evaluation

use super::types::{Result, Violation};

/// Check a requirement condition.
///
/// The violation is only built on failure, keeping the passing path cheap.
#[inline(always)]
pub fn ensure(condition: bool, violation: impl FnOnce() -> Violation) -> Result<()> {
    if !condition {
        return Err(violation().into());
    }
    Ok(())
}
