//! Device identity records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Total and available memory in bytes.
///
/// Each value is read independently and may fail on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStats {
    pub total: Option<u64>,
    pub available: Option<u64>,
}

impl MemoryStats {
    /// Fraction of memory in use, present only when both sides are known.
    pub fn usage(&self) -> Option<f64> {
        match (self.total, self.available) {
            (Some(total), Some(available)) if total > 0 && available <= total => {
                Some(1.0 - available as f64 / total as f64)
            }
            _ => None,
        }
    }
}

/// Processor facts.
///
/// On Android `cores` is the tally of `processor` lines in `/proc/cpuinfo`;
/// on iOS it comes from `hw.ncpu`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuStats {
    pub cores: Option<u32>,
    pub model_name: Option<String>,
    pub frequency: Option<String>,
    pub hardware: Option<String>,
    pub architecture: Option<String>,
}

/// Processor record: either the stats or an explicit error marker.
///
/// A failed read never yields a partially filled `CpuStats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CpuReport {
    Stats(CpuStats),
    Unavailable { error: String },
}

impl CpuReport {
    pub const READ_ERROR: &'static str = "Unable to read CPU info";

    pub fn unavailable() -> Self {
        CpuReport::Unavailable {
            error: Self::READ_ERROR.to_string(),
        }
    }

    pub fn stats(&self) -> Option<&CpuStats> {
        match self {
            CpuReport::Stats(stats) => Some(stats),
            CpuReport::Unavailable { .. } => None,
        }
    }
}

impl Default for CpuReport {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// Filesystem capacity in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub total_space: Option<u64>,
    pub free_space: Option<u64>,
    pub used_space: Option<u64>,
}

impl StorageStats {
    /// Builds storage stats, deriving used space only from both sides.
    pub fn from_parts(total: Option<u64>, free: Option<u64>) -> Self {
        let used_space = match (total, free) {
            (Some(total), Some(free)) => total.checked_sub(free),
            _ => None,
        };
        Self {
            total_space: total,
            free_space: free,
            used_space,
        }
    }
}

/// Storage record: either the stats or an explicit error marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StorageReport {
    Stats(StorageStats),
    Unavailable { error: String },
}

impl StorageReport {
    pub const QUERY_ERROR: &'static str = "Unable to get storage info";

    pub fn unavailable() -> Self {
        StorageReport::Unavailable {
            error: Self::QUERY_ERROR.to_string(),
        }
    }
}

/// Static attributes of an Android device.
///
/// Build fields come from `ro.*` system properties. `serial_number` and
/// `android_id` require grants an unprivileged reader does not hold and are
/// usually `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidDeviceInfo {
    pub android_id: Option<String>,
    pub bootloader: Option<String>,
    pub brand: Option<String>,
    pub device: Option<String>,
    pub display: Option<String>,
    pub fingerprint: Option<String>,
    pub hardware: Option<String>,
    pub host: Option<String>,
    pub id: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub product: Option<String>,
    #[serde(rename = "supported32BitAbis")]
    pub supported_32_bit_abis: Vec<String>,
    #[serde(rename = "supported64BitAbis")]
    pub supported_64_bit_abis: Vec<String>,
    pub supported_abis: Vec<String>,
    pub tags: Option<String>,
    #[serde(rename = "type")]
    pub build_type: Option<String>,
    pub user: Option<String>,
    pub codename: Option<String>,
    pub incremental: Option<String>,
    pub release: Option<String>,
    pub sdk_int: Option<i64>,
    pub security_patch: Option<String>,
    pub preview_sdk_int: Option<i64>,
    pub board: Option<String>,
    pub radio_version: Option<String>,
    pub serial_number: Option<String>,
    pub is_physical_device: bool,
    pub system_features: BTreeMap<String, bool>,
    pub total_memory: Option<u64>,
    pub available_memory: Option<u64>,
    pub cpu_info: CpuReport,
    pub network_operator_name: Option<String>,
    pub sim_operator_name: Option<String>,
}

/// Static attributes of an iOS device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosDeviceInfo {
    pub name: Option<String>,
    pub system_name: Option<String>,
    pub system_version: Option<String>,
    pub model: Option<String>,
    pub localized_model: Option<String>,
    pub identifier_for_vendor: Option<String>,
    pub is_physical_device: bool,
    pub utsname: Option<String>,
    pub machine: Option<String>,
    pub nodename: Option<String>,
    pub release: Option<String>,
    pub sysname: Option<String>,
    pub version: Option<String>,
    pub total_memory: Option<u64>,
    pub available_memory: Option<u64>,
    pub cpu_info: CpuReport,
    pub screen_info: Option<BTreeMap<String, f64>>,
    pub battery_info: super::BatterySnapshot,
    pub storage_info: StorageReport,
}
