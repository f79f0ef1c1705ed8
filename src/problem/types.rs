//! Convenience Problem Variants

use crate::problem::traits::Problem;
use std::any::Any;

/// Text-only problem: a label plus a long description, with no automatic fix.
///
/// Use this to surface purely informational findings without writing a
/// dedicated `Problem` variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInfo {
    summary: String,
    detail: String,
}

impl ProblemInfo {
    /// Create a text-only problem from a list label and a long description
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl Problem for ProblemInfo {
    fn label(&self) -> String {
        self.summary.clone()
    }

    fn fix_description(&self) -> String {
        self.detail.clone()
    }

    fn can_auto_fix(&self) -> bool {
        false
    }

    fn same_problem(&self, other: &dyn Problem) -> bool {
        other
            .as_any()
            .downcast_ref::<ProblemInfo>()
            .is_some_and(|o| o == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
