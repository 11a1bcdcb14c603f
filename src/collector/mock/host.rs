//! Scripted host statistics for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::collector::host::{FsSpace, HostStats, NetInterface, Uname};

/// Host statistics double: every query returns whatever the test set.
///
/// A default `MockHost` answers `None` to everything.
#[derive(Debug, Default)]
pub struct MockHost {
    pub physical_memory: Option<u64>,
    pub available_memory: Option<u64>,
    pub cpu_count: Option<u32>,
    pub cpu_frequency: Option<u64>,
    pub uname: Option<Uname>,
    /// Per-path filesystem answers; unknown paths fail.
    pub filesystems: HashMap<PathBuf, FsSpace>,
    pub properties: HashMap<String, String>,
    pub interfaces: Option<Vec<NetInterface>>,
    pub battery_level: Option<f64>,
    pub low_power_mode: Option<bool>,
    pub simulator: bool,
    battery_activations: AtomicUsize,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a platform property.
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets the filesystem answer for a path.
    pub fn with_filesystem(mut self, path: impl Into<PathBuf>, space: FsSpace) -> Self {
        self.filesystems.insert(path.into(), space);
        self
    }

    /// Number of times battery monitoring was activated.
    pub fn battery_activations(&self) -> usize {
        self.battery_activations.load(Ordering::Relaxed)
    }
}

impl HostStats for MockHost {
    fn physical_memory(&self) -> Option<u64> {
        self.physical_memory
    }

    fn available_memory(&self) -> Option<u64> {
        self.available_memory
    }

    fn cpu_count(&self) -> Option<u32> {
        self.cpu_count
    }

    fn cpu_frequency(&self) -> Option<u64> {
        self.cpu_frequency
    }

    fn uname(&self) -> Option<Uname> {
        self.uname.clone()
    }

    fn filesystem_space(&self, path: &Path) -> Option<FsSpace> {
        self.filesystems.get(path).copied()
    }

    fn system_property(&self, key: &str) -> Option<String> {
        self.properties.get(key).cloned()
    }

    fn network_interfaces(&self) -> Option<Vec<NetInterface>> {
        self.interfaces.clone()
    }

    fn battery_level(&self) -> Option<f64> {
        self.battery_level
    }

    fn low_power_mode(&self) -> Option<bool> {
        self.low_power_mode
    }

    fn enable_battery_monitoring(&self) {
        self.battery_activations.fetch_add(1, Ordering::Relaxed);
    }

    fn is_simulator_build(&self) -> bool {
        self.simulator
    }
}
