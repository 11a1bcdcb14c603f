//! Serializable record groups returned to callers.
//!
//! Every record is a value type created fresh per call. Fields whose source
//! could not be read are `None` and serialize as an explicit `null`; no
//! field is ever filled with a placeholder number.

mod battery;
mod identity;
mod network;
mod performance;
mod security;

pub use battery::{BatterySnapshot, BatteryState};
pub use identity::{
    AndroidDeviceInfo, CpuReport, CpuStats, IosDeviceInfo, MemoryStats, StorageReport,
    StorageStats,
};
pub use network::{ConnectionType, NetworkSnapshot};
pub use performance::{PerformanceSnapshot, ThermalState};
pub use security::SecurityAssessment;
