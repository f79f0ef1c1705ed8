//! Problem Trait
//!
//! Capability contract for one detected issue. Concrete variants are created
//! by their owning scanner during `scan()` and replaced wholesale on the next
//! cycle, so they carry no identity beyond the equality they define
//! themselves.

use crate::problem::error::{FixError, FixResult};
use std::any::Any;

/// One detected issue, reported by a scanner and shown in the panel list.
///
/// Variants decide their own equality for the dedup pass and must state
/// explicitly whether an automatic fix exists. The capability flag is never
/// inferred from which methods a variant provides.
pub trait Problem: Send + Sync {
    /// Short description of the problem, directly visible in the panel list
    fn label(&self) -> String;

    /// Detailed description of how to fix the problem, shown when the user
    /// clicks the item in the list
    fn fix_description(&self) -> String {
        "No fix or suggestion description available.".to_string()
    }

    /// Whether `auto_fix` implements an automatic solution for this variant
    fn can_auto_fix(&self) -> bool;

    /// Apply the automatic solution, if this variant provides one.
    ///
    /// Only called when `can_auto_fix` returns true; the default refuses so
    /// a variant that forgets to override it fails loudly instead of
    /// silently "fixing" nothing.
    fn auto_fix(&self) -> FixResult<()> {
        Err(FixError::NotSupported {
            problem: self.label(),
        })
    }

    /// Focus the responsible entity in the host (selection change only,
    /// never a mutation)
    fn select(&self) {}

    /// Variant-defined equality used by the dedup pass.
    ///
    /// Implementations typically downcast `other` through `as_any` and
    /// compare their own fields; unrelated variants are never equal.
    fn same_problem(&self, other: &dyn Problem) -> bool;

    /// Access to the concrete type for `same_problem` downcasts
    fn as_any(&self) -> &dyn Any;
}
