//! Panel read model
//!
//! Serializable snapshot of scanner and problem state for the panel. A
//! snapshot is only valid for the current iteration pass: any remediation
//! outcome with `mutated == true` replaces the underlying lists, and the
//! panel must rebuild instead of indexing into the old snapshot.

use crate::scanner::registry::SharedScannerRegistry;

/// One problem as shown in the panel list.
///
/// `scanner_index`/`problem_index` form the handle used for the select and
/// remediation actions; they are positions in the snapshot's cycle and go
/// stale on any rescan.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProblemView {
    pub label: String,
    pub fix_description: String,
    pub can_auto_fix: bool,
    pub scanner_index: usize,
    pub problem_index: usize,
}

/// One scanner group as shown in the panel
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScannerView {
    pub label: String,
    pub expand: bool,
    pub problem_count: usize,
    pub problems: Vec<ProblemView>,
}

/// Build the ordered read model for the panel, in registration order
pub fn snapshot(registry: &SharedScannerRegistry) -> Vec<ScannerView> {
    let registry = registry.inner().read().unwrap();

    registry
        .entries()
        .iter()
        .enumerate()
        .map(|(scanner_index, entry)| {
            let scanner = entry.scanner();
            let problems = scanner
                .problems()
                .iter()
                .enumerate()
                .map(|(problem_index, problem)| ProblemView {
                    label: problem.label(),
                    fix_description: problem.fix_description(),
                    can_auto_fix: problem.can_auto_fix(),
                    scanner_index,
                    problem_index,
                })
                .collect::<Vec<_>>();

            ScannerView {
                label: scanner.label(),
                expand: entry.display().expand,
                problem_count: problems.len(),
                problems,
            }
        })
        .collect()
}

/// Panel title text for the badge, e.g. "Problems: 3"
pub fn badge_title(total_problems: usize) -> String {
    format!("Problems: {}", total_problems)
}
