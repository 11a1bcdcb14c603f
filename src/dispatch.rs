//! Named operation dispatch.
//!
//! Callers address record groups by wire name. Each platform has its own
//! table of supported operations; anything outside that table, including
//! the identity operation of the other platform, is answered with
//! `Outcome::NotImplemented` rather than an error.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::collector::host::HostStats;
use crate::collector::traits::FileSystem;
use crate::config::Platform;
use crate::error::CollectError;
use crate::snapshot::DeviceInspector;

/// A record group addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AndroidDeviceInfo,
    IosDeviceInfo,
    BatteryInfo,
    NetworkInfo,
    SecurityInfo,
    PerformanceInfo,
}

const ANDROID_OPERATIONS: &[Operation] = &[
    Operation::AndroidDeviceInfo,
    Operation::BatteryInfo,
    Operation::NetworkInfo,
    Operation::SecurityInfo,
    Operation::PerformanceInfo,
];

const IOS_OPERATIONS: &[Operation] = &[
    Operation::IosDeviceInfo,
    Operation::BatteryInfo,
    Operation::NetworkInfo,
    Operation::SecurityInfo,
    Operation::PerformanceInfo,
];

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::AndroidDeviceInfo,
        Operation::IosDeviceInfo,
        Operation::BatteryInfo,
        Operation::NetworkInfo,
        Operation::SecurityInfo,
        Operation::PerformanceInfo,
    ];

    /// Wire name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::AndroidDeviceInfo => "getAndroidDeviceInfo",
            Operation::IosDeviceInfo => "getIosDeviceInfo",
            Operation::BatteryInfo => "getBatteryInfo",
            Operation::NetworkInfo => "getNetworkInfo",
            Operation::SecurityInfo => "getSecurityInfo",
            Operation::PerformanceInfo => "getPerformanceInfo",
        }
    }

    /// Looks up an operation by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Operations supported on `platform`, in listing order.
    pub fn supported(platform: Platform) -> &'static [Operation] {
        match platform {
            Platform::Android => ANDROID_OPERATIONS,
            Platform::Ios => IOS_OPERATIONS,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of dispatching a named operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The record group, encoded as a JSON map.
    Success(Value),
    NotImplemented,
}

type Handler<F, H> = fn(&DeviceInspector<F, H>) -> Result<Value, CollectError>;

fn encode<T: Serialize>(record: T) -> Result<Value, CollectError> {
    Ok(serde_json::to_value(record)?)
}

fn handler<F: FileSystem + Clone, H: HostStats>(op: Operation) -> Handler<F, H> {
    match op {
        Operation::AndroidDeviceInfo => |i| encode(i.android_device_info()),
        Operation::IosDeviceInfo => |i| encode(i.ios_device_info()),
        Operation::BatteryInfo => |i| encode(i.battery_info()),
        Operation::NetworkInfo => |i| encode(i.network_info()),
        Operation::SecurityInfo => |i| encode(i.security_info()),
        Operation::PerformanceInfo => |i| encode(i.performance_info()),
    }
}

impl<F: FileSystem + Clone, H: HostStats> DeviceInspector<F, H> {
    /// Runs the operation named `name` on this inspector's platform.
    ///
    /// Names are matched exactly. An unknown name, or one that belongs to
    /// the other platform, yields `Outcome::NotImplemented`.
    pub fn dispatch(&self, name: &str) -> Result<Outcome, CollectError> {
        let platform = self.platform();
        let Some(op) = Operation::from_name(name)
            .filter(|op| Operation::supported(platform).contains(op))
        else {
            debug!(operation = name, ?platform, "operation not implemented");
            return Ok(Outcome::NotImplemented);
        };

        debug!(operation = %op, ?platform, "dispatching");
        handler::<F, H>(op)(self).map(Outcome::Success)
    }
}
