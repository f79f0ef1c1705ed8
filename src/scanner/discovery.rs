//! Scanner Discovery
//!
//! Link-time scanner registration via inventory. Scanner crates submit a
//! factory with the `problem_scanner!` macro; the host calls
//! `register_discovered_scanners` exactly once at startup to append every
//! submitted scanner to a registry.

use crate::scanner::registry::SharedScannerRegistry;
use crate::scanner::traits::ProblemScanner;

/// Scanner registration information for link-time discovery
pub struct ScannerInfo {
    pub name: &'static str,
    pub factory: fn() -> Box<dyn ProblemScanner>,
}

// Register ScannerInfo with inventory for link-time discovery
inventory::collect!(ScannerInfo);

/// Macro for registering problem scanners with the inventory system.
///
/// The scanner type must provide a `new()` constructor. Registration order
/// within one process is stable across cycles, which is all the registry
/// guarantees; order between unrelated scanner crates follows link order.
#[macro_export]
macro_rules! problem_scanner {
    ($scanner_type:ty, $name:expr) => {
        inventory::submit! {
            $crate::scanner::api::ScannerInfo {
                name: $name,
                factory: || Box::new(<$scanner_type>::new()) as Box<dyn $crate::scanner::api::ProblemScanner>,
            }
        }
    };
}

/// Helper function to discover all submitted scanners
pub fn discover_scanners() -> Vec<&'static ScannerInfo> {
    inventory::iter::<ScannerInfo>().collect()
}

/// Append every discovered scanner to the given registry.
///
/// Returns the number of scanners registered. Call once at startup;
/// calling again would register duplicates since the registry is
/// append-only.
pub fn register_discovered_scanners(registry: &SharedScannerRegistry) -> usize {
    let discovered = discover_scanners();
    log::info!(
        "Registering {} discovered scanner(s), api version {}",
        discovered.len(),
        crate::core::version::get_api_version()
    );

    for info in &discovered {
        log::debug!("Discovered scanner '{}'", info.name);
        registry.register((info.factory)());
    }

    discovered.len()
}
