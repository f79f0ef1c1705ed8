//! Public API for the scan cycle
//!
//! This module provides the complete public API for the scan cycle
//! controller. External modules should import from here rather than
//! directly from internal modules.

// Controller and cycle outcomes
pub use crate::scan::controller::{
    CycleSummary, ScanController, ScanOutcome, ScannerFault, SkipReason, THROTTLE_INTERVAL,
};

// Aggregate state and badge
pub use crate::scan::state::{Badge, ScanState};

// Trigger sources and host gates
pub use crate::scan::events::RefreshTrigger;
pub use crate::scan::gates::{HostGates, HostStateFlags};

// Panel read model
pub use crate::scan::views::{badge_title, snapshot, ProblemView, ScannerView};
