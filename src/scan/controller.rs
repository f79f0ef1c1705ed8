//! Scan Cycle Controller
//!
//! Single entry point for running a scan cycle. Host gates and the throttle
//! decide whether a trigger proceeds; a permitted cycle runs every scanner's
//! scan and dedup pass synchronously, in registration order, then recomputes
//! the aggregate count and badge. Cycles never overlap and cannot be
//! cancelled mid-flight, only skipped before they start.

use crate::core::config::FinderConfig;
use crate::core::time::{SystemTimeProvider, TimeProvider};
use crate::scan::events::RefreshTrigger;
use crate::scan::gates::HostGates;
use crate::scan::state::{Badge, ScanState};
use crate::scan::views::{self, ScannerView};
use crate::scanner::error::ScanError;
use crate::scanner::registry::SharedScannerRegistry;
use std::sync::Arc;
use std::time::Duration;

/// Minimum wall-clock time between two non-forced scan cycles
pub const THROTTLE_INTERVAL: Duration = Duration::from_secs(1);

/// Why a trigger did not run a cycle. Skips are deliberate no-ops, not
/// errors; the request is dropped, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SkipReason {
    /// A non-forced request arrived within the throttle interval
    Throttled,
    /// The host reports a build in progress
    Building,
    /// The host reports play mode / simulation
    Playing,
    /// An automatic trigger arrived while auto-refresh is off
    AutoRefreshOff,
}

/// One scanner's failure during a cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ScannerFault {
    pub scanner: String,
    pub error: ScanError,
}

/// Result of a completed cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CycleSummary {
    pub total_problems: usize,
    pub badge: Badge,
    /// Scanners whose scan failed this cycle; their stale lists were
    /// discarded rather than counted
    pub faults: Vec<ScannerFault>,
}

/// Outcome of a scan trigger
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Completed(CycleSummary),
    Skipped(SkipReason),
}

impl ScanOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ScanOutcome::Completed(_))
    }

    pub fn summary(&self) -> Option<&CycleSummary> {
        match self {
            ScanOutcome::Completed(summary) => Some(summary),
            ScanOutcome::Skipped(_) => None,
        }
    }
}

/// Rate-limited orchestrator of scan cycles over one scanner registry
pub struct ScanController {
    registry: SharedScannerRegistry,
    gates: Arc<dyn HostGates>,
    time: Arc<dyn TimeProvider>,
    throttle: Duration,
    auto_refresh: bool,
    state: ScanState,
}

impl ScanController {
    /// Create a controller over the given registry, observing the given
    /// host gates, with the default one-second throttle
    pub fn new(registry: SharedScannerRegistry, gates: Arc<dyn HostGates>) -> Self {
        Self::with_time_provider(registry, gates, Arc::new(SystemTimeProvider))
    }

    /// Create a controller with an explicit time provider (tests)
    pub fn with_time_provider(
        registry: SharedScannerRegistry,
        gates: Arc<dyn HostGates>,
        time: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            registry,
            gates,
            time,
            throttle: THROTTLE_INTERVAL,
            auto_refresh: true,
            state: ScanState::new(),
        }
    }

    /// Apply host configuration (throttle interval, auto-refresh default)
    pub fn with_config(mut self, config: &FinderConfig) -> Self {
        self.throttle = config.throttle();
        self.auto_refresh = config.auto_refresh;
        self
    }

    /// The registry this controller scans
    pub fn registry(&self) -> &SharedScannerRegistry {
        &self.registry
    }

    /// Current aggregate state (stale between cycles by design)
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Badge read for the panel title
    pub fn badge(&self) -> (Badge, usize) {
        (self.state.badge, self.state.total_problems)
    }

    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    /// Toggle whether host change notifications trigger scans
    pub fn set_auto_refresh(&mut self, auto_refresh: bool) {
        self.auto_refresh = auto_refresh;
    }

    /// Ordered read-model snapshot for the panel
    pub fn read_model(&self) -> Vec<ScannerView> {
        views::snapshot(&self.registry)
    }

    /// Route a host notification to the throttle.
    ///
    /// Automatic triggers are dropped while auto-refresh is off; a manual
    /// request always reaches `trigger_scan` (and is still throttled and
    /// gated there).
    pub fn notify(&mut self, trigger: RefreshTrigger) -> ScanOutcome {
        if trigger.is_automatic() && !self.auto_refresh {
            log::trace!("Dropping {} notification, auto-refresh is off", trigger);
            return ScanOutcome::Skipped(SkipReason::AutoRefreshOff);
        }
        self.trigger_scan(false)
    }

    /// Run a scan cycle, unless gated or throttled.
    ///
    /// Gate flags win over `forced`: while the host builds or plays this is
    /// a no-op. Non-forced requests inside the throttle interval are
    /// silently dropped, not queued.
    pub fn trigger_scan(&mut self, forced: bool) -> ScanOutcome {
        if self.gates.is_building() {
            log::trace!("Skipping scan cycle, host build in progress");
            return ScanOutcome::Skipped(SkipReason::Building);
        }
        if self.gates.is_playing() {
            log::trace!("Skipping scan cycle, host is in play mode");
            return ScanOutcome::Skipped(SkipReason::Playing);
        }

        if !forced {
            if let Some(last) = self.state.last_scan {
                let elapsed = self.time.now().saturating_duration_since(last);
                if elapsed < self.throttle {
                    log::trace!("Skipping scan cycle, last scan completed {:?} ago", elapsed);
                    return ScanOutcome::Skipped(SkipReason::Throttled);
                }
            }
        }

        self.run_cycle()
    }

    /// Run one full cycle: every scanner scans and dedups to completion,
    /// in registration order, before the aggregate is recomputed.
    fn run_cycle(&mut self) -> ScanOutcome {
        let mut faults = Vec::new();
        let mut total_problems = 0;

        {
            let mut registry = self.registry.inner().write().unwrap();
            for entry in registry.entries_mut() {
                let scanner = entry.scanner_mut();
                let label = scanner.label();
                match scanner.scan() {
                    Ok(()) => {
                        scanner.remove_doubles();
                        total_problems += scanner.problems().len();
                    }
                    Err(error) => {
                        // The faulting scanner contributes nothing this
                        // cycle; its stale list must not be counted
                        log::warn!("Scanner '{}' failed: {}", label, error);
                        scanner.problems_mut().clear();
                        faults.push(ScannerFault {
                            scanner: label,
                            error,
                        });
                    }
                }
            }
        }

        self.state.total_problems = total_problems;
        self.state.badge = Badge::from_count(total_problems);
        self.state.last_scan = Some(self.time.now());

        log::debug!(
            "Scan cycle completed: {} problem(s), badge {}",
            total_problems,
            self.state.badge
        );

        ScanOutcome::Completed(CycleSummary {
            total_problems,
            badge: self.state.badge,
            faults,
        })
    }
}
