//! Public API for remediation
//!
//! This module provides the complete public API for the remediation
//! workflow. External modules should import from here rather than directly
//! from internal modules.

pub use crate::remediation::controller::{
    FixConfirmation, RemediationController, RemediationOutcome, RemediationResponse,
};
pub use crate::remediation::error::{RemediationError, RemediationResult};
