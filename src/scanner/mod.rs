//! Scanner Component
//!
//! This module provides the pluggable scanner layer of the problem finder:
//! the `ProblemScanner` capability contract with its default dedup pass, the
//! append-only `ScannerRegistry` populated once at process start, and the
//! link-time discovery hook scanner crates use to register themselves.
//!
//! ## Core Features
//!
//! - **ProblemScanner trait**: owns its problem list and knows how to
//!   (re)compute it; dedup policy is overridable per scanner
//! - **ScannerRegistry**: stable registration order, no removal by design -
//!   a scanner that is no longer wanted simply stops reporting problems
//! - **SharedScannerRegistry**: cheaply clonable process-wide handle
//! - **Discovery**: `problem_scanner!` registration via inventory

// Internal modules - all access should go through api module
pub(crate) mod discovery;
pub(crate) mod error;
pub(crate) mod registry;
pub(crate) mod traits;

// Public API module - the only public interface for the scanner system
pub mod api;

#[cfg(test)]
pub(crate) mod tests;
