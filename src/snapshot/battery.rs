//! Battery record.

use super::DeviceInspector;
use crate::collector::host::HostStats;
use crate::collector::traits::FileSystem;
use crate::config::Platform;
use crate::error::absorb;
use crate::model::{BatterySnapshot, BatteryState};

impl<F: FileSystem + Clone, H: HostStats> DeviceInspector<F, H> {
    /// Current battery readings.
    ///
    /// Battery monitoring is switched on once per call before any value is
    /// read. Android reads the power supply class in sysfs; iOS only has
    /// the level and low power mode from the host.
    pub fn battery_info(&self) -> BatterySnapshot {
        self.host.enable_battery_monitoring();

        match self.platform() {
            Platform::Android => {
                let supply = self.config.power_supply_path.as_path();
                let state = absorb("battery state", self.system.collect_battery_state(supply))
                    .unwrap_or_default();

                BatterySnapshot {
                    level: absorb("battery level", self.system.collect_battery_level(supply))
                        .or_else(|| self.host.battery_level()),
                    state,
                    health: absorb("battery health", self.system.collect_battery_health(supply)),
                    temperature: absorb(
                        "battery temperature",
                        self.system.collect_battery_temperature(supply),
                    ),
                    is_charging: is_charging(state),
                    is_power_save_mode: self.host.low_power_mode(),
                }
            }
            Platform::Ios => BatterySnapshot {
                level: self.host.battery_level(),
                is_power_save_mode: self.host.low_power_mode(),
                ..Default::default()
            },
        }
    }
}

/// Charging flag derived from a known state.
fn is_charging(state: BatteryState) -> Option<bool> {
    match state {
        BatteryState::Unknown => None,
        other => Some(other == BatteryState::Charging),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::{MockFs, MockHost};
    use crate::config::InspectorConfig;

    fn inspector(
        platform: Platform,
        fs: MockFs,
        host: MockHost,
    ) -> DeviceInspector<MockFs, MockHost> {
        DeviceInspector::with_config(fs, host, InspectorConfig::for_platform(platform))
    }

    #[test]
    fn test_android_battery_from_sysfs() {
        let inspector = inspector(
            Platform::Android,
            MockFs::android_handset(),
            MockHost::android_handset(),
        );
        let battery = inspector.battery_info();

        assert_eq!(battery.level, Some(0.76));
        assert_eq!(battery.state, BatteryState::Charging);
        assert_eq!(battery.is_charging, Some(true));
        assert_eq!(battery.temperature, Some(29.5));
        assert_eq!(battery.health, Some(0.92));
        assert_eq!(battery.is_power_save_mode, None);
    }

    #[test]
    fn test_android_battery_not_charging() {
        let inspector = inspector(Platform::Android, MockFs::android_emulator(), MockHost::new());
        let battery = inspector.battery_info();

        assert_eq!(battery.level, Some(1.0));
        assert_eq!(battery.state, BatteryState::NotCharging);
        assert_eq!(battery.is_charging, Some(false));
        assert_eq!(battery.health, None);
        assert_eq!(battery.temperature, None);
    }

    #[test]
    fn test_android_battery_missing_supply() {
        let mut host = MockHost::new();
        host.battery_level = Some(0.5);
        let inspector = inspector(Platform::Android, MockFs::new(), host);
        let battery = inspector.battery_info();

        assert_eq!(battery.level, Some(0.5));
        assert_eq!(battery.state, BatteryState::Unknown);
        assert_eq!(battery.is_charging, None);
    }

    #[test]
    fn test_ios_battery() {
        let inspector = inspector(Platform::Ios, MockFs::ios_device(), MockHost::iphone());
        let battery = inspector.battery_info();

        assert_eq!(battery.level, Some(0.64));
        assert_eq!(battery.is_power_save_mode, Some(false));
        assert_eq!(battery.state, BatteryState::Unknown);
        assert_eq!(battery.health, None);
    }

    #[test]
    fn test_monitoring_enabled_once_per_call() {
        let inspector = inspector(Platform::Ios, MockFs::ios_device(), MockHost::iphone());
        inspector.battery_info();
        assert_eq!(inspector.host.battery_activations(), 1);
        inspector.battery_info();
        assert_eq!(inspector.host.battery_activations(), 2);
    }
}
