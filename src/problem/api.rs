//! Public API for the problem system
//!
//! This module provides the complete public API for problem variants.
//! External modules should import from here rather than directly from
//! internal modules.

pub use crate::problem::error::{FixError, FixResult};
pub use crate::problem::traits::Problem;
pub use crate::problem::types::ProblemInfo;
