//! Remediation Module
//!
//! Applies a chosen problem's automatic fix through the host's confirmation
//! seam and forces an immediate resynchronizing rescan afterwards. Every
//! outcome reports whether the problem lists were replaced so callers stop
//! iterating stale snapshots (abort-after-mutate).

// Internal modules - all access should go through api module
pub(crate) mod controller;
pub(crate) mod error;

// Public API module - the only public interface for remediation
pub mod api;
