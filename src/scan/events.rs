//! Refresh trigger sources
//!
//! Hosts forward their change notifications as refresh triggers. Automatic
//! triggers pass through the auto-refresh toggle; a manual request always
//! reaches the throttle.

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum RefreshTrigger {
    /// Periodic editor/inspector tick
    InspectorTick,
    /// Project content changed
    ProjectChanged,
    /// Scene or object hierarchy changed
    HierarchyChanged,
    /// Explicit user request (the panel's Scan action)
    Manual,
}

impl RefreshTrigger {
    /// Automatic triggers are subject to the auto-refresh toggle;
    /// manual requests are not
    pub fn is_automatic(&self) -> bool {
        !matches!(self, RefreshTrigger::Manual)
    }
}
