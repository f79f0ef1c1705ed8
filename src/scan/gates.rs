//! Host gate flags
//!
//! Build and play state are observed, not owned: the host reports them and
//! the scan cycle controller treats any raised gate as a hard no-op,
//! forced or not.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Host-reported state that gates scan cycles
pub trait HostGates: Send + Sync {
    /// True while the host builds a player/artifact
    fn is_building(&self) -> bool;

    /// True while the host is simulating / in play mode
    fn is_playing(&self) -> bool;
}

/// Flag-holding `HostGates` implementation for hosts that surface build and
/// play state through callbacks (pre/post-build hooks, play-mode events).
/// Clones share the underlying flags.
#[derive(Debug, Default, Clone)]
pub struct HostStateFlags {
    building: Arc<AtomicBool>,
    playing: Arc<AtomicBool>,
}

impl HostStateFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_building(&self, building: bool) {
        self.building.store(building, Ordering::Relaxed);
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::Relaxed);
    }
}

impl HostGates for HostStateFlags {
    fn is_building(&self) -> bool {
        self.building.load(Ordering::Relaxed)
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }
}
