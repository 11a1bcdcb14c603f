//! Host statistics that are not exposed through pseudo-files.
//!
//! The `HostStats` trait wraps native queries (memory counters, sysctl,
//! filesystem attributes, interface flags). Each accessor is independent
//! and returns `None` when its native call fails, so one failing query
//! never aborts the others.

mod native;

use std::path::Path;

pub use native::NativeHost;

/// Kernel identification from `uname(2)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Uname {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    pub version: String,
    pub machine: String,
}

impl Uname {
    /// Combined `sysname release version` string.
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.sysname, self.release, self.version)
    }
}

/// Network interface name and link state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterface {
    pub name: String,
    /// Interface is administratively up and running.
    pub is_up: bool,
}

impl NetInterface {
    pub fn new(name: impl Into<String>, is_up: bool) -> Self {
        Self {
            name: name.into(),
            is_up,
        }
    }
}

/// Raw filesystem capacity in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FsSpace {
    pub total: Option<u64>,
    pub free: Option<u64>,
}

/// Abstraction over native host queries.
pub trait HostStats: Send + Sync {
    /// Physical memory in bytes.
    fn physical_memory(&self) -> Option<u64>;

    /// Free memory in bytes.
    fn available_memory(&self) -> Option<u64>;

    /// Number of online logical processors.
    fn cpu_count(&self) -> Option<u32>;

    /// Nominal processor frequency in Hz.
    fn cpu_frequency(&self) -> Option<u64>;

    fn uname(&self) -> Option<Uname>;

    /// Capacity of the filesystem containing `path`.
    ///
    /// `None` means the query itself failed.
    fn filesystem_space(&self, path: &Path) -> Option<FsSpace>;

    /// Platform property by name: Android system properties, Apple sysctl strings.
    fn system_property(&self, key: &str) -> Option<String>;

    fn network_interfaces(&self) -> Option<Vec<NetInterface>>;

    /// Battery charge as a fraction, where the platform has a native query.
    fn battery_level(&self) -> Option<f64> {
        None
    }

    fn low_power_mode(&self) -> Option<bool> {
        None
    }

    /// Turns on battery monitoring before a battery read.
    ///
    /// Activation only; nothing needs to be turned off afterwards.
    fn enable_battery_monitoring(&self) {}

    /// Compile-time flag: built for a simulator target.
    fn is_simulator_build(&self) -> bool;
}

impl<H: HostStats + ?Sized> HostStats for &H {
    fn physical_memory(&self) -> Option<u64> {
        (**self).physical_memory()
    }

    fn available_memory(&self) -> Option<u64> {
        (**self).available_memory()
    }

    fn cpu_count(&self) -> Option<u32> {
        (**self).cpu_count()
    }

    fn cpu_frequency(&self) -> Option<u64> {
        (**self).cpu_frequency()
    }

    fn uname(&self) -> Option<Uname> {
        (**self).uname()
    }

    fn filesystem_space(&self, path: &Path) -> Option<FsSpace> {
        (**self).filesystem_space(path)
    }

    fn system_property(&self, key: &str) -> Option<String> {
        (**self).system_property(key)
    }

    fn network_interfaces(&self) -> Option<Vec<NetInterface>> {
        (**self).network_interfaces()
    }

    fn battery_level(&self) -> Option<f64> {
        (**self).battery_level()
    }

    fn low_power_mode(&self) -> Option<bool> {
        (**self).low_power_mode()
    }

    fn enable_battery_monitoring(&self) {
        (**self).enable_battery_monitoring()
    }

    fn is_simulator_build(&self) -> bool {
        (**self).is_simulator_build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_summary() {
        let uname = Uname {
            sysname: "Darwin".into(),
            nodename: "phone".into(),
            release: "23.0.0".into(),
            version: "Darwin Kernel Version 23.0.0".into(),
            machine: "iPhone14,2".into(),
        };
        assert_eq!(uname.summary(), "Darwin 23.0.0 Darwin Kernel Version 23.0.0");
    }
}
