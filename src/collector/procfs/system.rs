//! System collector for pseudo-files under `/proc`, sysfs and property files.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collector::procfs::parser::{
    CpuInfo, count_process_dirs, parse_battery_capacity, parse_battery_health,
    parse_battery_temperature, parse_build_prop, parse_cpuinfo, parse_feature_xml,
    parse_meminfo_field, parse_meminfo_total, parse_thermal_zone,
};
use crate::collector::traits::FileSystem;
use crate::error::CollectError;
use crate::model::BatteryState;

/// Collects device facts from kernel pseudo-files.
///
/// Every method reads its files within the call and returns an error for
/// that value only; callers decide how to degrade.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: PathBuf,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Total memory in bytes from the first line of `/proc/meminfo`.
    pub fn collect_total_memory(&self) -> Result<u64, CollectError> {
        let line = self.fs.read_first_line(&self.proc_path.join("meminfo"))?;
        Ok(parse_meminfo_total(&line)?)
    }

    /// Available memory in bytes from `MemAvailable` in `/proc/meminfo`.
    pub fn collect_available_memory(&self) -> Result<u64, CollectError> {
        let content = self.fs.read_to_string(&self.proc_path.join("meminfo"))?;
        Ok(parse_meminfo_field(&content, "MemAvailable")?)
    }

    /// Processor facts from `/proc/cpuinfo`.
    pub fn collect_cpuinfo(&self) -> Result<CpuInfo, CollectError> {
        let content = self.fs.read_to_string(&self.proc_path.join("cpuinfo"))?;
        Ok(parse_cpuinfo(&content))
    }

    /// Number of processes visible under `/proc`.
    ///
    /// Recent Android releases mount `/proc` with `hidepid`, so an app sees
    /// only its own processes.
    pub fn collect_process_count(&self) -> Result<u64, CollectError> {
        let entries = self.fs.read_dir(&self.proc_path)?;
        Ok(count_process_dirs(&entries))
    }

    /// Merged build properties; earlier files win for duplicate keys.
    ///
    /// Unreadable files are skipped.
    pub fn collect_build_props(&self, paths: &[PathBuf]) -> HashMap<String, String> {
        let mut merged = HashMap::new();
        for path in paths {
            match self.fs.read_to_string(path) {
                Ok(content) => {
                    for (key, value) in parse_build_prop(&content) {
                        merged.entry(key).or_insert(value);
                    }
                }
                Err(e) => debug!(path = %path.display(), error = %e, "build props unreadable"),
            }
        }
        merged
    }

    /// Declared system features from permission XML files.
    pub fn collect_features(&self, dirs: &[PathBuf]) -> BTreeMap<String, bool> {
        let mut features = BTreeMap::new();
        for dir in dirs {
            let Ok(mut entries) = self.fs.read_dir(dir) else {
                debug!(dir = %dir.display(), "feature directory unreadable");
                continue;
            };
            entries.sort();
            for entry in entries
                .iter()
                .filter(|p| p.extension().is_some_and(|ext| ext == "xml"))
            {
                match self.fs.read_to_string(entry) {
                    Ok(content) => {
                        for name in parse_feature_xml(&content) {
                            features.insert(name, true);
                        }
                    }
                    Err(e) => {
                        debug!(path = %entry.display(), error = %e, "feature file unreadable")
                    }
                }
            }
        }
        features
    }

    /// Battery charge level (0.0..=1.0) from the power supply `capacity`.
    pub fn collect_battery_level(&self, supply: &Path) -> Result<f64, CollectError> {
        let content = self.fs.read_to_string(&supply.join("capacity"))?;
        Ok(parse_battery_capacity(&content)?)
    }

    /// Charging state from the power supply `status`.
    pub fn collect_battery_state(&self, supply: &Path) -> Result<BatteryState, CollectError> {
        let content = self.fs.read_to_string(&supply.join("status"))?;
        Ok(BatteryState::from_sysfs(&content))
    }

    /// Battery temperature in degrees Celsius.
    pub fn collect_battery_temperature(&self, supply: &Path) -> Result<f64, CollectError> {
        let content = self.fs.read_to_string(&supply.join("temp"))?;
        Ok(parse_battery_temperature(&content)?)
    }

    /// Remaining capacity relative to design capacity.
    pub fn collect_battery_health(&self, supply: &Path) -> Result<f64, CollectError> {
        let full = self.fs.read_to_string(&supply.join("charge_full"))?;
        let design = self.fs.read_to_string(&supply.join("charge_full_design"))?;
        Ok(parse_battery_health(&full, &design)?)
    }

    /// Thermal zone temperature in degrees Celsius.
    pub fn collect_thermal(&self, zone: &Path) -> Result<f64, CollectError> {
        let content = self.fs.read_to_string(&zone.join("temp"))?;
        Ok(parse_thermal_zone(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    #[test]
    fn test_collect_total_memory() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal:        2048000 kB\nMemFree: 1 kB\n");
        let collector = SystemCollector::new(fs, "/proc");

        assert_eq!(collector.collect_total_memory().unwrap(), 2_097_152_000);
    }

    #[test]
    fn test_collect_total_memory_missing_or_empty() {
        let collector = SystemCollector::new(MockFs::new(), "/proc");
        assert!(matches!(
            collector.collect_total_memory(),
            Err(CollectError::Io(_))
        ));

        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "");
        let collector = SystemCollector::new(fs, "/proc");
        assert!(collector.collect_total_memory().is_err());
    }

    #[test]
    fn test_collect_total_memory_garbage() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/meminfo", "MemTotal: plenty\n");
        let collector = SystemCollector::new(fs, "/proc");
        assert!(matches!(
            collector.collect_total_memory(),
            Err(CollectError::Parse(_))
        ));
    }

    #[test]
    fn test_collect_cpuinfo() {
        let fs = MockFs::android_handset();
        let collector = SystemCollector::new(fs, "/proc");

        let info = collector.collect_cpuinfo().unwrap();
        assert_eq!(info.cores, 8);
        assert_eq!(info.hardware.as_deref(), Some("Qualcomm Technologies, Inc SM8250"));
    }

    #[test]
    fn test_collect_cpuinfo_unreadable() {
        let collector = SystemCollector::new(MockFs::new(), "/proc");
        assert!(collector.collect_cpuinfo().is_err());
    }

    #[test]
    fn test_collect_process_count() {
        let fs = MockFs::android_handset();
        let collector = SystemCollector::new(fs, "/proc");
        assert_eq!(collector.collect_process_count().unwrap(), 3);
    }

    #[test]
    fn test_collect_build_props_first_file_wins() {
        let mut fs = MockFs::new();
        fs.add_file("/system/build.prop", "ro.product.brand=google\n");
        fs.add_file(
            "/vendor/build.prop",
            "ro.product.brand=vendor\nro.hardware=tensor\n",
        );
        let collector = SystemCollector::new(fs, "/proc");

        let props = collector.collect_build_props(&[
            PathBuf::from("/system/build.prop"),
            PathBuf::from("/missing/build.prop"),
            PathBuf::from("/vendor/build.prop"),
        ]);
        assert_eq!(props["ro.product.brand"], "google");
        assert_eq!(props["ro.hardware"], "tensor");
    }

    #[test]
    fn test_collect_features() {
        let fs = MockFs::android_handset();
        let collector = SystemCollector::new(fs, "/proc");

        let features = collector.collect_features(&[
            PathBuf::from("/system/etc/permissions"),
            PathBuf::from("/vendor/etc/permissions"),
        ]);
        assert_eq!(features.get("android.hardware.wifi"), Some(&true));
        assert_eq!(features.get("android.hardware.camera"), Some(&true));
        assert!(!features.contains_key("platform.readme"));
    }

    #[test]
    fn test_collect_features_skips_unreadable_file() {
        let mut fs = MockFs::android_handset();
        fs.add_dir("/system/etc/permissions/broken.xml");
        let collector = SystemCollector::new(fs, "/proc");

        let features = collector.collect_features(&[PathBuf::from("/system/etc/permissions")]);
        assert_eq!(features.len(), 2);
        assert_eq!(features.get("android.hardware.wifi"), Some(&true));
    }

    #[test]
    fn test_collect_battery() {
        let fs = MockFs::android_handset();
        let collector = SystemCollector::new(fs, "/proc");
        let supply = Path::new("/sys/class/power_supply/battery");

        assert!((collector.collect_battery_level(supply).unwrap() - 0.76).abs() < 1e-9);
        assert_eq!(
            collector.collect_battery_state(supply).unwrap(),
            BatteryState::Charging
        );
        assert!((collector.collect_battery_temperature(supply).unwrap() - 29.5).abs() < 1e-9);
        assert!((collector.collect_battery_health(supply).unwrap() - 0.92).abs() < 1e-9);
    }

    #[test]
    fn test_collect_thermal() {
        let fs = MockFs::android_handset();
        let collector = SystemCollector::new(fs, "/proc");
        let temp = collector
            .collect_thermal(Path::new("/sys/class/thermal/thermal_zone0"))
            .unwrap();
        assert!((temp - 41.2).abs() < 1e-9);
    }
}
