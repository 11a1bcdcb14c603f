//! Performance record.

use serde::{Deserialize, Serialize};

/// Coarse thermal pressure level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThermalState {
    Normal,
    Fair,
    Serious,
    Critical,
}

impl ThermalState {
    /// Maps a temperature in degrees Celsius to a thermal level.
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature >= 80.0 {
            ThermalState::Critical
        } else if temperature >= 65.0 {
            ThermalState::Serious
        } else if temperature >= 50.0 {
            ThermalState::Fair
        } else {
            ThermalState::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSnapshot {
    /// Needs two samples over an interval; a one-shot snapshot cannot provide it.
    pub cpu_usage: Option<f64>,
    pub memory_usage: Option<f64>,
    pub total_memory: Option<u64>,
    pub available_memory: Option<u64>,
    pub temperature: Option<f64>,
    pub thermal_state: Option<ThermalState>,
    pub running_processes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thermal_state_thresholds() {
        assert_eq!(ThermalState::from_celsius(35.0), ThermalState::Normal);
        assert_eq!(ThermalState::from_celsius(50.0), ThermalState::Fair);
        assert_eq!(ThermalState::from_celsius(70.5), ThermalState::Serious);
        assert_eq!(ThermalState::from_celsius(92.0), ThermalState::Critical);
    }
}
