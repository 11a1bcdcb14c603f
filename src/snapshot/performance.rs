//! Performance record.

use super::DeviceInspector;
use crate::collector::host::HostStats;
use crate::collector::traits::FileSystem;
use crate::config::Platform;
use crate::error::absorb;
use crate::model::{PerformanceSnapshot, ThermalState};

impl<F: FileSystem + Clone, H: HostStats> DeviceInspector<F, H> {
    /// Memory pressure, temperature and process count.
    pub fn performance_info(&self) -> PerformanceSnapshot {
        let memory = self.memory();

        let (temperature, running_processes) = match self.platform() {
            Platform::Android => (
                absorb(
                    "thermal zone",
                    self.system.collect_thermal(&self.config.thermal_zone_path),
                ),
                absorb("process count", self.system.collect_process_count()),
            ),
            Platform::Ios => (None, None),
        };

        PerformanceSnapshot {
            cpu_usage: None,
            memory_usage: memory.usage(),
            total_memory: memory.total,
            available_memory: memory.available,
            temperature,
            thermal_state: temperature.map(ThermalState::from_celsius),
            running_processes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::{MockFs, MockHost};
    use crate::config::InspectorConfig;

    #[test]
    fn test_android_performance() {
        let inspector = DeviceInspector::with_config(
            MockFs::android_handset(),
            MockHost::android_handset(),
            InspectorConfig::for_platform(Platform::Android),
        );
        let perf = inspector.performance_info();

        assert_eq!(perf.temperature, Some(41.2));
        assert_eq!(perf.thermal_state, Some(ThermalState::Normal));
        assert_eq!(perf.running_processes, Some(3));
        assert_eq!(perf.total_memory, Some(7_819_456 * 1024));
        let usage = perf.memory_usage.unwrap();
        assert!(usage > 0.0 && usage < 1.0);
        assert_eq!(perf.cpu_usage, None);
    }

    #[test]
    fn test_hot_device() {
        let mut fs = MockFs::android_handset();
        fs.add_file("/sys/class/thermal/thermal_zone0/temp", "83000\n");
        let inspector = DeviceInspector::with_config(
            fs,
            MockHost::new(),
            InspectorConfig::for_platform(Platform::Android),
        );
        assert_eq!(
            inspector.performance_info().thermal_state,
            Some(ThermalState::Critical)
        );
    }

    #[test]
    fn test_ios_performance() {
        let inspector = DeviceInspector::with_config(
            MockFs::ios_device(),
            MockHost::iphone(),
            InspectorConfig::for_platform(Platform::Ios),
        );
        let perf = inspector.performance_info();

        assert_eq!(perf.memory_usage, Some(0.75));
        assert_eq!(perf.temperature, None);
        assert_eq!(perf.thermal_state, None);
        assert_eq!(perf.running_processes, None);
    }

    #[test]
    fn test_nothing_readable() {
        let inspector = DeviceInspector::with_config(
            MockFs::new(),
            MockHost::new(),
            InspectorConfig::for_platform(Platform::Android),
        );
        assert_eq!(inspector.performance_info(), PerformanceSnapshot::default());
    }
}
