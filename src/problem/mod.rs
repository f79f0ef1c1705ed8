//! Problem Capability Module
//!
//! Defines the capability contract for one detected issue: a label for the
//! panel list, a fix description, and the optional automatic remedy with
//! its explicit capability flag.

// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the problem system
pub mod api;
