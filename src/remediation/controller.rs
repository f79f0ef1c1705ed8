//! Remediation Controller
//!
//! Drives the fix workflow for one problem picked from the panel: show the
//! fix description, ask for confirmation (or apply immediately), run the
//! fix, then force a rescan so every problem list reflects the mutated
//! host state. The outcome's `mutated` flag is the abort signal: once it is
//! true the caller's snapshot indices point into replaced lists and must
//! not be used again.

use crate::problem::error::FixError;
use crate::remediation::error::{RemediationError, RemediationResult};
use crate::scan::controller::{ScanController, ScanOutcome};

/// Confirmation seam between the engine and the host's dialog UI
pub trait FixConfirmation: Send + Sync {
    /// Present the fix description and ask whether to apply it
    fn confirm_fix(&self, problem_label: &str, fix_description: &str) -> bool;
}

impl<F> FixConfirmation for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn confirm_fix(&self, problem_label: &str, fix_description: &str) -> bool {
        self(problem_label, fix_description)
    }
}

/// What the panel should do after presenting a problem
#[derive(Debug, Clone, PartialEq)]
pub enum RemediationResponse {
    /// No automatic fix exists; show this description to the user
    Information(String),
    /// The user declined the fix
    Declined,
    /// The fix ran successfully
    Fixed,
    /// The fix ran and failed; report to the user, never retried here
    FixFailed(FixError),
}

/// Outcome of one remediation attempt.
///
/// `mutated == true` means the problem lists have been replaced by a forced
/// rescan; any in-progress enumeration of scanner or problem collections
/// must stop at this point.
#[derive(Debug, Clone, PartialEq)]
pub struct RemediationOutcome {
    pub mutated: bool,
    pub response: RemediationResponse,
    /// Outcome of the forced resynchronizing rescan, when one ran
    pub rescan: Option<ScanOutcome>,
}

impl RemediationOutcome {
    fn information(description: String) -> Self {
        Self {
            mutated: false,
            response: RemediationResponse::Information(description),
            rescan: None,
        }
    }

    fn declined() -> Self {
        Self {
            mutated: false,
            response: RemediationResponse::Declined,
            rescan: None,
        }
    }

    fn fixed(rescan: ScanOutcome) -> Self {
        Self {
            mutated: true,
            response: RemediationResponse::Fixed,
            rescan: Some(rescan),
        }
    }

    fn fix_failed(error: FixError, rescan: ScanOutcome) -> Self {
        Self {
            mutated: true,
            response: RemediationResponse::FixFailed(error),
            rescan: Some(rescan),
        }
    }
}

/// Applies automatic fixes and keeps scan state synchronized afterwards
pub struct RemediationController {
    confirm: Box<dyn FixConfirmation>,
}

impl RemediationController {
    /// Create a controller that asks the given seam before applying fixes
    pub fn new(confirm: Box<dyn FixConfirmation>) -> Self {
        Self { confirm }
    }

    /// Present the problem at the given snapshot position.
    ///
    /// Without an automatic fix this only hands back the fix description.
    /// With one, the fix runs after confirmation (or straight away when
    /// `force_immediate` is set), and a forced rescan follows regardless of
    /// whether the fix succeeded - the host state may have changed either
    /// way, and the lists must resynchronize.
    pub fn present(
        &self,
        scans: &mut ScanController,
        scanner_index: usize,
        problem_index: usize,
        force_immediate: bool,
    ) -> RemediationResult<RemediationOutcome> {
        let (label, description, can_auto_fix) =
            Self::problem_facts(scans, scanner_index, problem_index)?;

        if !can_auto_fix {
            return Ok(RemediationOutcome::information(description));
        }

        if !force_immediate && !self.confirm.confirm_fix(&label, &description) {
            log::debug!("Fix for '{}' declined", label);
            return Ok(RemediationOutcome::declined());
        }

        // Re-resolve after the confirmation dialog; the indices are typed
        // errors rather than panics if the snapshot went stale meanwhile
        let fix_result = {
            let registry = scans.registry().inner().read().unwrap();
            let entry =
                registry
                    .entry(scanner_index)
                    .ok_or(RemediationError::UnknownScanner {
                        index: scanner_index,
                    })?;
            let problem = entry.scanner().problems().get(problem_index).ok_or_else(|| {
                RemediationError::UnknownProblem {
                    scanner: entry.scanner().label(),
                    index: problem_index,
                }
            })?;
            problem.auto_fix()
        };

        // Resynchronize even after a failed fix: it may have mutated host
        // state before erroring, and the throttle must not delay that
        let rescan = scans.trigger_scan(true);

        match fix_result {
            Ok(()) => {
                log::info!("Applied fix for '{}'", label);
                Ok(RemediationOutcome::fixed(rescan))
            }
            Err(error) => {
                log::warn!("Fix for '{}' failed: {}", label, error);
                Ok(RemediationOutcome::fix_failed(error, rescan))
            }
        }
    }

    /// Focus the responsible entity for the problem at the given snapshot
    /// position. Pure read-side action: no rescan, no abort obligation.
    pub fn select(
        &self,
        scans: &ScanController,
        scanner_index: usize,
        problem_index: usize,
    ) -> RemediationResult<()> {
        let registry = scans.registry().inner().read().unwrap();
        let entry = registry
            .entry(scanner_index)
            .ok_or(RemediationError::UnknownScanner {
                index: scanner_index,
            })?;
        let problem = entry.scanner().problems().get(problem_index).ok_or_else(|| {
            RemediationError::UnknownProblem {
                scanner: entry.scanner().label(),
                index: problem_index,
            }
        })?;

        problem.select();
        Ok(())
    }

    fn problem_facts(
        scans: &ScanController,
        scanner_index: usize,
        problem_index: usize,
    ) -> RemediationResult<(String, String, bool)> {
        let registry = scans.registry().inner().read().unwrap();
        let entry = registry
            .entry(scanner_index)
            .ok_or(RemediationError::UnknownScanner {
                index: scanner_index,
            })?;
        let problem = entry.scanner().problems().get(problem_index).ok_or_else(|| {
            RemediationError::UnknownProblem {
                scanner: entry.scanner().label(),
                index: problem_index,
            }
        })?;

        Ok((
            problem.label(),
            problem.fix_description(),
            problem.can_auto_fix(),
        ))
    }
}
