//! Test helpers for scanner, scan-cycle and remediation unit tests
//!
//! These fixtures stand in for scanner plugins: problems with tag-based
//! identity and scanners with scripted scan results, so tests can drive
//! cycles deterministically without any host detection logic.

use crate::problem::api::{FixError, FixResult, Problem};
use crate::scanner::api::{ProblemScanner, ScanError, ScanResult};
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Problem whose identity is its tag; the note is carried along but takes
/// no part in equality, so tests can tell duplicate instances apart.
pub struct TagProblem {
    tag: String,
    note: String,
    fixable: bool,
    fail_fix: bool,
    fix_log: Option<Arc<Mutex<Vec<String>>>>,
    select_counter: Option<Arc<AtomicUsize>>,
}

impl TagProblem {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            note: String::new(),
            fixable: false,
            fail_fix: false,
            fix_log: None,
            select_counter: None,
        }
    }

    pub fn with_note(tag: &str, note: &str) -> Self {
        Self {
            note: note.to_string(),
            ..Self::new(tag)
        }
    }

    /// A fixable problem that records applied fixes into the shared log
    pub fn fixable(tag: &str, fix_log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            fixable: true,
            fix_log: Some(fix_log),
            ..Self::new(tag)
        }
    }

    /// A fixable problem whose fix always fails
    pub fn broken_fix(tag: &str) -> Self {
        Self {
            fixable: true,
            fail_fix: true,
            ..Self::new(tag)
        }
    }

    /// Record select() calls into the shared counter
    pub fn track_selections(mut self, counter: Arc<AtomicUsize>) -> Self {
        self.select_counter = Some(counter);
        self
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

impl Problem for TagProblem {
    fn label(&self) -> String {
        self.tag.clone()
    }

    fn fix_description(&self) -> String {
        format!("Apply automatic fix for '{}'", self.tag)
    }

    fn can_auto_fix(&self) -> bool {
        self.fixable
    }

    fn auto_fix(&self) -> FixResult<()> {
        if self.fail_fix {
            return Err(FixError::Failed {
                problem: self.tag.clone(),
                cause: "scripted failure".to_string(),
            });
        }
        if let Some(log) = &self.fix_log {
            log.lock().unwrap().push(self.tag.clone());
        }
        Ok(())
    }

    fn select(&self) {
        if let Some(counter) = &self.select_counter {
            counter.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn same_problem(&self, other: &dyn Problem) -> bool {
        other
            .as_any()
            .downcast_ref::<TagProblem>()
            .is_some_and(|o| o.tag == self.tag)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Factory producing the problem list for the n-th scan (0-based)
pub type ProblemScript = Box<dyn Fn(usize) -> Vec<Box<dyn Problem>> + Send + Sync>;

/// Scanner that replays a scripted problem list on every scan and records
/// its invocations into an optional shared order log.
pub struct ScriptedScanner {
    label: String,
    problems: Vec<Box<dyn Problem>>,
    script: ProblemScript,
    scans: usize,
    order_log: Option<Arc<Mutex<Vec<String>>>>,
}

impl ScriptedScanner {
    pub fn new(label: &str, script: ProblemScript) -> Self {
        Self {
            label: label.to_string(),
            problems: Vec::new(),
            script,
            scans: 0,
            order_log: None,
        }
    }

    /// Scanner that reports the same tags on every scan
    pub fn reporting(label: &str, tags: &[&str]) -> Self {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        Self::new(
            label,
            Box::new(move |_| {
                tags.iter()
                    .map(|t| Box::new(TagProblem::new(t)) as Box<dyn Problem>)
                    .collect()
            }),
        )
    }

    /// Scanner that never reports anything
    pub fn silent(label: &str) -> Self {
        Self::new(label, Box::new(|_| Vec::new()))
    }

    pub fn with_order_log(mut self, order_log: Arc<Mutex<Vec<String>>>) -> Self {
        self.order_log = Some(order_log);
        self
    }
}

impl ProblemScanner for ScriptedScanner {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn scan(&mut self) -> ScanResult<()> {
        if let Some(log) = &self.order_log {
            log.lock().unwrap().push(self.label.clone());
        }
        self.problems = (self.script)(self.scans);
        self.scans += 1;
        Ok(())
    }

    fn problems(&self) -> &[Box<dyn Problem>] {
        &self.problems
    }

    fn problems_mut(&mut self) -> &mut Vec<Box<dyn Problem>> {
        &mut self.problems
    }
}

/// Scanner whose scan always fails, optionally pre-seeded with stale problems
pub struct FailingScanner {
    label: String,
    problems: Vec<Box<dyn Problem>>,
}

impl FailingScanner {
    pub fn with_stale(label: &str, stale_tags: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            problems: stale_tags
                .iter()
                .map(|t| Box::new(TagProblem::new(t)) as Box<dyn Problem>)
                .collect(),
        }
    }
}

impl ProblemScanner for FailingScanner {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn scan(&mut self) -> ScanResult<()> {
        Err(ScanError::ScanFailed {
            scanner: self.label.clone(),
            cause: "detection backend unavailable".to_string(),
        })
    }

    fn problems(&self) -> &[Box<dyn Problem>] {
        &self.problems
    }

    fn problems_mut(&mut self) -> &mut Vec<Box<dyn Problem>> {
        &mut self.problems
    }
}

/// Labels of a scanner's current problems, in list order
pub fn problem_tags(scanner: &dyn ProblemScanner) -> Vec<String> {
    scanner.problems().iter().map(|p| p.label()).collect()
}
