//! Problem Scanner Trait
//!
//! Capability contract for a pluggable unit that produces zero or more
//! problems based on its own external detection logic. Scanners are
//! registered exactly once, for the lifetime of the process, and are never
//! unregistered.

use crate::problem::api::Problem;
use crate::scanner::error::ScanResult;

/// A pluggable problem scanner.
///
/// Each scanner exclusively owns its problem list: `scan` clears and
/// repopulates it, the scan cycle runs `remove_doubles` directly afterwards,
/// and everything else treats the list as read-only until the next cycle
/// replaces it.
pub trait ProblemScanner: Send + Sync {
    /// Label of the scanner's problem category, used as the group heading
    /// in the panel (e.g. "Character Setup", "Level Consistency")
    fn label(&self) -> String;

    /// Recompute the problem list.
    ///
    /// Implementations usually start by clearing `problems_mut()` and then
    /// push one `Problem` per finding. An error aborts this scanner's
    /// contribution for the cycle; the stale list is discarded by the
    /// controller rather than counted.
    fn scan(&mut self) -> ScanResult<()>;

    /// Problems found by the most recent scan, in detection order
    fn problems(&self) -> &[Box<dyn Problem>];

    /// Mutable access to the problem list, for `scan` and the dedup pass
    fn problems_mut(&mut self) -> &mut Vec<Box<dyn Problem>>;

    /// Remove redundant problems after a scan.
    ///
    /// The default walks the list from the end towards the start and drops
    /// any entry that an earlier entry reports as equal, so the first
    /// occurrence survives and later duplicates are removed. Pairwise on
    /// purpose: lists are tens of entries, and keeping the earliest
    /// occurrence's identity intact matters for select/fix actions bound to
    /// it. Scanners with different identity semantics may override the
    /// whole pass.
    fn remove_doubles(&mut self) {
        let problems = self.problems_mut();
        let mut i = problems.len();
        while i > 1 {
            i -= 1;
            if (0..i).any(|j| problems[j].same_problem(problems[i].as_ref())) {
                problems.remove(i);
            }
        }
    }
}
