//! Snapshot assembler that combines collectors and classifiers into records.
//!
//! `DeviceInspector` exposes one operation per record group. Operations
//! are infallible: a failing source turns into `None` for that field and
//! the rest of the record is still filled. Nothing is cached between
//! calls; every operation re-reads its sources.

mod battery;
mod identity;
mod network;
mod performance;
mod security;

use std::collections::HashMap;

use crate::collector::host::HostStats;
use crate::collector::procfs::SystemCollector;
use crate::collector::procfs::parser::split_prop_list;
use crate::collector::traits::FileSystem;
use crate::config::{InspectorConfig, Platform};
use crate::error::absorb;
use crate::model::{CpuReport, CpuStats, MemoryStats, StorageReport, StorageStats};

pub use network::{classify_connection, vpn_active};

/// Assembles device records from pseudo-files and host statistics.
pub struct DeviceInspector<F: FileSystem + Clone, H: HostStats> {
    fs: F,
    host: H,
    system: SystemCollector<F>,
    config: InspectorConfig,
}

impl<F: FileSystem + Clone, H: HostStats> DeviceInspector<F, H> {
    /// Creates an inspector for the platform this binary was built for.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `host` - Native host queries (real or mock)
    pub fn new(fs: F, host: H) -> Self {
        Self::with_config(fs, host, InspectorConfig::default())
    }

    pub fn with_config(fs: F, host: H, config: InspectorConfig) -> Self {
        Self {
            system: SystemCollector::new(fs.clone(), &config.proc_path),
            fs,
            host,
            config,
        }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    pub fn platform(&self) -> Platform {
        self.config.platform
    }

    /// Total and available memory for the current platform.
    ///
    /// Android reads both values from `/proc/meminfo`. Available memory is
    /// `MemAvailable`, which counts reclaimable cache; the host query only
    /// reports free pages and is used when that line is missing.
    pub fn memory(&self) -> MemoryStats {
        match self.platform() {
            Platform::Android => MemoryStats {
                total: absorb("total memory", self.system.collect_total_memory()),
                available: absorb("available memory", self.system.collect_available_memory())
                    .or_else(|| self.host.available_memory()),
            },
            Platform::Ios => MemoryStats {
                total: self.host.physical_memory(),
                available: self.host.available_memory(),
            },
        }
    }

    /// Processor record for the current platform.
    pub fn cpu_report(&self) -> CpuReport {
        let architecture = self.host.uname().map(|u| u.machine);
        match self.platform() {
            Platform::Android => match self.system.collect_cpuinfo() {
                Ok(info) => CpuReport::Stats(CpuStats {
                    cores: Some(info.cores),
                    model_name: info.model_name,
                    frequency: info.frequency,
                    hardware: info.hardware,
                    architecture,
                }),
                Err(e) => {
                    tracing::debug!(error = %e, "cpuinfo unavailable");
                    CpuReport::unavailable()
                }
            },
            Platform::Ios => CpuReport::Stats(CpuStats {
                cores: self.host.cpu_count(),
                model_name: None,
                frequency: self.host.cpu_frequency().map(|hz| hz.to_string()),
                hardware: self.host.system_property("hw.model"),
                architecture,
            }),
        }
    }

    /// Capacity of the configured storage path.
    pub fn storage_report(&self) -> StorageReport {
        match self.host.filesystem_space(&self.config.storage_path) {
            Some(space) => StorageReport::Stats(StorageStats::from_parts(space.total, space.free)),
            None => {
                tracing::debug!(
                    path = %self.config.storage_path.display(),
                    "storage query failed"
                );
                StorageReport::unavailable()
            }
        }
    }

    /// Property lookup for this call: live properties first, then build files.
    fn properties(&self) -> Properties<'_, H> {
        let files = match self.platform() {
            Platform::Android => self.system.collect_build_props(&self.config.build_prop_paths),
            Platform::Ios => HashMap::new(),
        };
        Properties {
            host: &self.host,
            files,
        }
    }
}

/// Platform properties resolved for a single operation.
struct Properties<'a, H: HostStats> {
    host: &'a H,
    files: HashMap<String, String>,
}

impl<H: HostStats> Properties<'_, H> {
    /// Property value; empty strings count as unset.
    fn get(&self, key: &str) -> Option<String> {
        self.host
            .system_property(key)
            .or_else(|| self.files.get(key).cloned())
            .filter(|v| !v.trim().is_empty())
    }

    /// Comma separated property as a list.
    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.get(key).map(|v| split_prop_list(&v))
    }

    /// First non-empty entry of a per-SIM property ("Vodafone,").
    fn first(&self, key: &str) -> Option<String> {
        self.list(key).and_then(|values| values.into_iter().next())
    }

    fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }
}
