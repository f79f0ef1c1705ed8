//! Scan State and Badge

use std::time::Instant;

/// Two-state badge derived from the aggregate problem count after each
/// completed cycle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Badge {
    #[strum(serialize = "OK")]
    Ok,
    #[strum(serialize = "PROBLEM")]
    Problem,
}

impl Badge {
    /// Derive the badge from a completed cycle's aggregate problem count
    pub fn from_count(total_problems: usize) -> Self {
        if total_problems > 0 {
            Badge::Problem
        } else {
            Badge::Ok
        }
    }
}

/// Aggregate scan state, mutated only by the scan cycle controller.
///
/// `total_problems` equals the sum of problem-list lengths across all
/// scanners immediately after a completed cycle and is stale (reflecting
/// the previous cycle) at all other times.
#[derive(Debug, Clone)]
pub struct ScanState {
    pub(crate) last_scan: Option<Instant>,
    pub(crate) total_problems: usize,
    pub(crate) badge: Badge,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            last_scan: None,
            total_problems: 0,
            badge: Badge::Ok,
        }
    }

    /// Moment the last cycle completed; None before the first cycle
    pub fn last_scan(&self) -> Option<Instant> {
        self.last_scan
    }

    /// Aggregate problem count of the last completed cycle
    pub fn total_problems(&self) -> usize {
        self.total_problems
    }

    pub fn badge(&self) -> Badge {
        self.badge
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
