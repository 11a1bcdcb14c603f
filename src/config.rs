//! Inspector configuration: target platform and the paths each collector reads.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classify::{JAILBREAK_PATHS, ROOT_PATHS};

/// Target platform of the inspected device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux-kernel devices: `/proc`, sysfs and build properties.
    Android,
    /// Apple devices: host statistics, sysctl and the simulator build flag.
    Ios,
}

impl Platform {
    /// Returns the platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_vendor = "apple") {
            Platform::Ios
        } else {
            Platform::Android
        }
    }
}

/// Paths and platform settings for a `DeviceInspector`.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectorConfig {
    pub platform: Platform,
    /// Base path of the proc filesystem (usually "/proc").
    pub proc_path: PathBuf,
    /// Battery power supply directory in sysfs.
    pub power_supply_path: PathBuf,
    /// Thermal zone reported as the device temperature.
    pub thermal_zone_path: PathBuf,
    /// Build property files, searched in order.
    pub build_prop_paths: Vec<PathBuf>,
    /// Directories with system feature declarations.
    pub feature_dirs: Vec<PathBuf>,
    /// Filesystem whose capacity is reported as storage.
    pub storage_path: PathBuf,
    /// Paths whose presence marks the device as compromised.
    pub compromise_paths: Vec<PathBuf>,
}

impl InspectorConfig {
    /// Default configuration for the given platform.
    pub fn for_platform(platform: Platform) -> Self {
        let compromise_paths = match platform {
            Platform::Android => ROOT_PATHS,
            Platform::Ios => JAILBREAK_PATHS,
        };
        let storage_path = match platform {
            Platform::Android => PathBuf::from("/data"),
            Platform::Ios => std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/")),
        };

        Self {
            platform,
            proc_path: PathBuf::from("/proc"),
            power_supply_path: PathBuf::from("/sys/class/power_supply/battery"),
            thermal_zone_path: PathBuf::from("/sys/class/thermal/thermal_zone0"),
            build_prop_paths: vec![
                PathBuf::from("/system/build.prop"),
                PathBuf::from("/vendor/build.prop"),
            ],
            feature_dirs: vec![
                PathBuf::from("/system/etc/permissions"),
                PathBuf::from("/vendor/etc/permissions"),
            ],
            storage_path,
            compromise_paths: compromise_paths.iter().map(PathBuf::from).collect(),
        }
    }

    pub fn with_proc_path(mut self, proc_path: impl Into<PathBuf>) -> Self {
        self.proc_path = proc_path.into();
        self
    }

    pub fn with_storage_path(mut self, storage_path: impl Into<PathBuf>) -> Self {
        self.storage_path = storage_path.into();
        self
    }
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}
