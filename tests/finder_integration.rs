//! End-to-end problem finder workflow: registration, scan cycles, panel
//! read model and remediation with abort-after-mutate.

use problemscan::problem::api::{FixResult, Problem, ProblemInfo};
use problemscan::problem_scanner;
use problemscan::remediation::api::{RemediationController, RemediationResponse};
use problemscan::scan::api::{
    badge_title, Badge, HostStateFlags, RefreshTrigger, ScanController, ScanOutcome, SkipReason,
};
use problemscan::scanner::api::{
    register_discovered_scanners, ProblemScanner, ScanResult, SharedScannerRegistry,
};
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Fake host project the scanners inspect and the fixes mutate
#[derive(Clone, Default)]
struct FakeProject {
    state: Arc<Mutex<FakeProjectState>>,
}

#[derive(Default)]
struct FakeProjectState {
    unnamed_objects: Vec<String>,
    lighting_baked: bool,
}

impl FakeProject {
    fn with_issues(unnamed: &[&str]) -> Self {
        let project = Self::default();
        {
            let mut state = project.state.lock().unwrap();
            state.unnamed_objects = unnamed.iter().map(|s| s.to_string()).collect();
            state.lighting_baked = false;
        }
        project
    }
}

/// Fixable problem: baking the lighting updates the fake project
struct UnbakedLightingProblem {
    project: FakeProject,
}

impl Problem for UnbakedLightingProblem {
    fn label(&self) -> String {
        "Lighting is not baked".to_string()
    }

    fn fix_description(&self) -> String {
        "Bake lighting for the open scene.".to_string()
    }

    fn can_auto_fix(&self) -> bool {
        true
    }

    fn auto_fix(&self) -> FixResult<()> {
        self.project.state.lock().unwrap().lighting_baked = true;
        Ok(())
    }

    fn same_problem(&self, other: &dyn Problem) -> bool {
        other.as_any().is::<UnbakedLightingProblem>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct LightingScanner {
    project: FakeProject,
    problems: Vec<Box<dyn Problem>>,
}

impl ProblemScanner for LightingScanner {
    fn label(&self) -> String {
        "Lighting".to_string()
    }

    fn scan(&mut self) -> ScanResult<()> {
        self.problems.clear();
        if !self.project.state.lock().unwrap().lighting_baked {
            self.problems.push(Box::new(UnbakedLightingProblem {
                project: self.project.clone(),
            }));
        }
        Ok(())
    }

    fn problems(&self) -> &[Box<dyn Problem>] {
        &self.problems
    }

    fn problems_mut(&mut self) -> &mut Vec<Box<dyn Problem>> {
        &mut self.problems
    }
}

/// Text-only findings for objects without a proper name. Reports one
/// duplicate on purpose so the dedup pass has work to do.
struct NamingScanner {
    project: FakeProject,
    problems: Vec<Box<dyn Problem>>,
}

impl ProblemScanner for NamingScanner {
    fn label(&self) -> String {
        "Naming".to_string()
    }

    fn scan(&mut self) -> ScanResult<()> {
        self.problems.clear();
        for name in &self.project.state.lock().unwrap().unnamed_objects {
            self.problems.push(Box::new(ProblemInfo::new(
                format!("Object '{}' needs a descriptive name", name),
                "Rename the object in the hierarchy.",
            )));
        }
        Ok(())
    }

    fn problems(&self) -> &[Box<dyn Problem>] {
        &self.problems
    }

    fn problems_mut(&mut self) -> &mut Vec<Box<dyn Problem>> {
        &mut self.problems
    }
}

fn build_finder(project: &FakeProject) -> (ScanController, RemediationController) {
    let registry = SharedScannerRegistry::new();
    registry.register(Box::new(LightingScanner {
        project: project.clone(),
        problems: Vec::new(),
    }));
    registry.register(Box::new(NamingScanner {
        project: project.clone(),
        problems: Vec::new(),
    }));

    let scans = ScanController::new(registry, Arc::new(HostStateFlags::new()));
    let remediation = RemediationController::new(Box::new(|_: &str, _: &str| true));
    (scans, remediation)
}

#[test]
fn test_full_scan_fix_rescan_workflow() {
    // "GameObject" appears twice; the dedup pass keeps one finding
    let project = FakeProject::with_issues(&["GameObject", "GameObject", "Cube"]);
    let (mut scans, remediation) = build_finder(&project);

    // Manual scan from the panel toolbar
    let outcome = scans.notify(RefreshTrigger::Manual);
    let summary = outcome.summary().expect("first scan should run");

    // 1 lighting + 2 deduplicated naming problems
    assert_eq!(summary.total_problems, 3);
    assert_eq!(scans.badge(), (Badge::Problem, 3));
    assert_eq!(badge_title(3), "Problems: 3");

    // Panel pass: walk the snapshot, fix the first fixable problem, and
    // abort the iteration as soon as a fix mutates the lists
    let views = scans.read_model();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].label, "Lighting");
    assert_eq!(views[1].label, "Naming");
    assert_eq!(views[1].problem_count, 2);

    let mut aborted = false;
    'panel: for view in &views {
        for problem in &view.problems {
            if problem.can_auto_fix {
                let outcome = remediation
                    .present(
                        &mut scans,
                        problem.scanner_index,
                        problem.problem_index,
                        false,
                    )
                    .unwrap();
                assert_eq!(outcome.response, RemediationResponse::Fixed);
                if outcome.mutated {
                    aborted = true;
                    break 'panel;
                }
            }
        }
    }
    assert!(aborted, "a successful fix must abort the panel pass");

    // The forced rescan already resynchronized every list
    assert_eq!(scans.badge(), (Badge::Problem, 2));
    let views = scans.read_model();
    assert_eq!(views[0].problem_count, 0);
    assert_eq!(views[1].problem_count, 2);
    assert!(project.state.lock().unwrap().lighting_baked);

    // Right after the forced rescan a plain request is throttled again
    assert_eq!(
        scans.notify(RefreshTrigger::Manual),
        ScanOutcome::Skipped(SkipReason::Throttled)
    );
}

#[test]
fn test_badge_recovers_when_all_problems_fixed() {
    let project = FakeProject::with_issues(&[]);
    let (mut scans, remediation) = build_finder(&project);

    scans.trigger_scan(false);
    assert_eq!(scans.badge(), (Badge::Problem, 1));

    let views = scans.read_model();
    let fixable = &views[0].problems[0];
    let outcome = remediation
        .present(&mut scans, fixable.scanner_index, fixable.problem_index, true)
        .unwrap();

    assert!(outcome.mutated);
    assert_eq!(scans.badge(), (Badge::Ok, 0));
    assert_eq!(badge_title(0), "Problems: 0");
}

#[test]
fn test_read_model_serializes_for_the_panel() {
    let project = FakeProject::with_issues(&["Sphere"]);
    let (mut scans, _remediation) = build_finder(&project);
    scans.trigger_scan(false);

    let views = scans.read_model();
    let json = serde_json::to_value(&views).unwrap();

    assert_eq!(json[0]["label"], "Lighting");
    assert_eq!(json[0]["expand"], true);
    assert_eq!(json[0]["problems"][0]["can_auto_fix"], true);
    assert_eq!(
        json[1]["problems"][0]["label"],
        "Object 'Sphere' needs a descriptive name"
    );
    assert_eq!(json[1]["problems"][0]["scanner_index"], 1);
}

#[test]
fn test_gates_suppress_notification_storms() {
    let project = FakeProject::with_issues(&["Cube"]);
    let registry = SharedScannerRegistry::new();
    registry.register(Box::new(NamingScanner {
        project: project.clone(),
        problems: Vec::new(),
    }));
    let gates = HostStateFlags::new();
    let mut scans = ScanController::new(registry, Arc::new(gates.clone()));

    gates.set_building(true);
    for _ in 0..10 {
        assert_eq!(
            scans.notify(RefreshTrigger::ProjectChanged),
            ScanOutcome::Skipped(SkipReason::Building)
        );
    }
    assert!(scans.state().last_scan().is_none());

    gates.set_building(false);
    assert!(scans.notify(RefreshTrigger::ProjectChanged).is_completed());
}

// Link-time registration: the macro submits the scanner, startup collects it
struct RegisteredByMacroScanner {
    problems: Vec<Box<dyn Problem>>,
}

impl RegisteredByMacroScanner {
    fn new() -> Self {
        Self {
            problems: Vec::new(),
        }
    }
}

impl ProblemScanner for RegisteredByMacroScanner {
    fn label(&self) -> String {
        "Macro Registered".to_string()
    }

    fn scan(&mut self) -> ScanResult<()> {
        self.problems.clear();
        Ok(())
    }

    fn problems(&self) -> &[Box<dyn Problem>] {
        &self.problems
    }

    fn problems_mut(&mut self) -> &mut Vec<Box<dyn Problem>> {
        &mut self.problems
    }
}

problem_scanner!(RegisteredByMacroScanner, "macro-registered");

#[test]
fn test_discovery_registers_submitted_scanners() {
    let registry = SharedScannerRegistry::new();

    let count = register_discovered_scanners(&registry);

    assert_eq!(count, 1);
    assert_eq!(registry.labels(), vec!["Macro Registered"]);
}
