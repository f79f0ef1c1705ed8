//! Scanner Registry
//!
//! Append-only ordered collection of problem scanners, populated once at
//! process start by external registration. Iteration order across scan
//! cycles is stable and equals registration order; there is no removal
//! operation by design.

use crate::scanner::traits::ProblemScanner;
use std::sync::{Arc, RwLock};

/// Panel display state kept per registered scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerDisplay {
    /// Is this problem category currently expanded?
    pub expand: bool,
}

impl Default for ScannerDisplay {
    fn default() -> Self {
        Self { expand: true }
    }
}

/// One registered scanner together with its registry-held display state
pub struct ScannerEntry {
    scanner: Box<dyn ProblemScanner>,
    display: ScannerDisplay,
}

impl ScannerEntry {
    fn new(scanner: Box<dyn ProblemScanner>) -> Self {
        Self {
            scanner,
            display: ScannerDisplay::default(),
        }
    }

    pub fn scanner(&self) -> &dyn ProblemScanner {
        self.scanner.as_ref()
    }

    pub fn scanner_mut(&mut self) -> &mut dyn ProblemScanner {
        self.scanner.as_mut()
    }

    pub fn display(&self) -> ScannerDisplay {
        self.display
    }

    pub fn display_mut(&mut self) -> &mut ScannerDisplay {
        &mut self.display
    }
}

impl std::fmt::Debug for ScannerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerEntry")
            .field("scanner", &self.scanner.label())
            .field("display", &self.display)
            .finish()
    }
}

/// Scanner registry holding all registered scanners in registration order
pub struct ScannerRegistry {
    entries: Vec<ScannerEntry>,
}

impl std::fmt::Debug for ScannerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerRegistry")
            .field("scanners", &self.labels())
            .finish()
    }
}

impl ScannerRegistry {
    /// Create a new empty scanner registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a scanner in last position.
    ///
    /// No deduplication and no validation beyond the trait bound; the
    /// scanner becomes eligible for all future scan cycles.
    pub fn register(&mut self, scanner: Box<dyn ProblemScanner>) {
        log::debug!("Registering problem scanner '{}'", scanner.label());
        self.entries.push(ScannerEntry::new(scanner));
    }

    /// Number of registered scanners
    pub fn scanner_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order
    pub fn entries(&self) -> &[ScannerEntry] {
        &self.entries
    }

    /// Mutable entries in registration order, for the scan cycle
    pub fn entries_mut(&mut self) -> &mut [ScannerEntry] {
        &mut self.entries
    }

    /// Entry at the given registration position
    pub fn entry(&self, index: usize) -> Option<&ScannerEntry> {
        self.entries.get(index)
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut ScannerEntry> {
        self.entries.get_mut(index)
    }

    /// Scanner labels in registration order
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.scanner.label()).collect()
    }

    /// Sum of problem-list lengths across all registered scanners
    pub fn total_problems(&self) -> usize {
        self.entries.iter().map(|e| e.scanner.problems().len()).sum()
    }

    /// Set the expand flag of one scanner; false if the index is unknown
    pub fn set_expanded(&mut self, index: usize, expand: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.display.expand = expand;
                true
            }
            None => false,
        }
    }

    /// Expand every scanner group in the panel
    pub fn expand_all(&mut self) {
        for entry in &mut self.entries {
            entry.display.expand = true;
        }
    }

    /// Collapse every scanner group in the panel
    pub fn collapse_all(&mut self) {
        for entry in &mut self.entries {
            entry.display.expand = false;
        }
    }
}

impl Default for ScannerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared scanner registry handle.
///
/// The engine runs single-threaded and cooperative; the lock exists as a
/// shared-ownership cell for the process-wide instance, not for parallel
/// scanner execution.
#[derive(Debug, Clone)]
pub struct SharedScannerRegistry {
    inner: Arc<RwLock<ScannerRegistry>>,
}

impl SharedScannerRegistry {
    /// Create a new shared scanner registry
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ScannerRegistry::new())),
        }
    }

    /// Get access to the inner registry for read/write operations
    pub fn inner(&self) -> &Arc<RwLock<ScannerRegistry>> {
        &self.inner
    }

    /// Convenience method to register a scanner
    pub fn register(&self, scanner: Box<dyn ProblemScanner>) {
        self.inner.write().unwrap().register(scanner);
    }

    /// Convenience method to get the scanner count
    pub fn scanner_count(&self) -> usize {
        self.inner.read().unwrap().scanner_count()
    }

    /// Convenience method to get scanner labels in registration order
    pub fn labels(&self) -> Vec<String> {
        self.inner.read().unwrap().labels()
    }

    /// Convenience method to sum problem counts across scanners
    pub fn total_problems(&self) -> usize {
        self.inner.read().unwrap().total_problems()
    }

    /// Convenience method to set one scanner's expand flag
    pub fn set_expanded(&self, index: usize, expand: bool) -> bool {
        self.inner.write().unwrap().set_expanded(index, expand)
    }

    /// Convenience method to expand all scanner groups
    pub fn expand_all(&self) {
        self.inner.write().unwrap().expand_all();
    }

    /// Convenience method to collapse all scanner groups
    pub fn collapse_all(&self) {
        self.inner.write().unwrap().collapse_all();
    }
}

impl Default for SharedScannerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
