//! Battery record.

use serde::{Deserialize, Serialize};

/// Charging state as reported by the power supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BatteryState {
    Charging,
    Discharging,
    Full,
    NotCharging,
    #[default]
    Unknown,
}

impl BatteryState {
    /// Parses the sysfs `status` attribute ("Charging", "Not charging", ...).
    pub fn from_sysfs(status: &str) -> Self {
        match status.trim() {
            "Charging" => BatteryState::Charging,
            "Discharging" => BatteryState::Discharging,
            "Full" => BatteryState::Full,
            "Not charging" => BatteryState::NotCharging,
            _ => BatteryState::Unknown,
        }
    }
}

/// Point-in-time battery readings.
///
/// `level` and `health` are fractions in `0.0..=1.0`; `temperature` is in
/// degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatterySnapshot {
    pub level: Option<f64>,
    pub state: BatteryState,
    pub health: Option<f64>,
    pub temperature: Option<f64>,
    pub is_charging: Option<bool>,
    pub is_power_save_mode: Option<bool>,
}
