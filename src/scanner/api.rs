//! Scanner API
//!
//! This module provides the public API for the scanner system, consolidating
//! all external exports and providing a controlled interface for accessing
//! scanner functionality.
//!
//! This follows the same pattern as the problem::api and scan::api modules to
//! maintain consistent architecture across the crate.

use std::sync::LazyLock;

// Scanner capability contract
pub use crate::scanner::traits::ProblemScanner;

// Registry and per-scanner display state
pub use crate::scanner::registry::{
    ScannerDisplay, ScannerEntry, ScannerRegistry, SharedScannerRegistry,
};

// Link-time discovery
pub use crate::scanner::discovery::{discover_scanners, register_discovered_scanners, ScannerInfo};

// Error handling
pub use crate::scanner::error::{ScanError, ScanResult};

/// Process-wide scanner registry instance
static SCANNER_REGISTRY: LazyLock<SharedScannerRegistry> = LazyLock::new(|| {
    log::trace!("Initializing process-wide scanner registry");
    SharedScannerRegistry::new()
});

/// Access the process-wide scanner registry.
///
/// Every call returns a handle to the same shared instance, so external
/// modules can perform their one-time registration at startup while the
/// controllers receive the registry by injection. Embedders that want full
/// isolation (tests, multiple independent panels) construct their own
/// `SharedScannerRegistry` instead.
pub fn get_scanner_registry() -> SharedScannerRegistry {
    SCANNER_REGISTRY.clone()
}
