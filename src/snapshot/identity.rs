//! Device identity records.

use super::DeviceInspector;
use crate::classify::{BuildIdentity, classify_emulator};
use crate::collector::host::HostStats;
use crate::collector::traits::FileSystem;
use crate::model::{AndroidDeviceInfo, IosDeviceInfo};

/// Family part of a model identifier: "iPhone14,2" -> "iPhone".
///
/// Simulator builds report the host architecture instead of an identifier,
/// which has no family.
fn model_family(machine: &str) -> Option<String> {
    if !machine.contains(',') {
        return None;
    }
    let family: String = machine
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    (!family.is_empty()).then_some(family)
}

impl<F: FileSystem + Clone, H: HostStats> DeviceInspector<F, H> {
    /// Android build identity, hardware facts and feature flags.
    pub fn android_device_info(&self) -> AndroidDeviceInfo {
        let props = self.properties();

        let build = BuildIdentity {
            fingerprint: props.get("ro.build.fingerprint"),
            model: props.get("ro.product.model"),
            manufacturer: props.get("ro.product.manufacturer"),
            brand: props.get("ro.product.brand"),
            device: props.get("ro.product.device"),
            product: props.get("ro.product.name"),
        };
        let is_emulator = classify_emulator(&build, None);

        let supported_abis = props.list("ro.product.cpu.abilist").unwrap_or_else(|| {
            ["ro.product.cpu.abi", "ro.product.cpu.abi2"]
                .iter()
                .filter_map(|key| props.get(key))
                .collect()
        });
        let memory = self.memory();

        AndroidDeviceInfo {
            android_id: None,
            bootloader: props.get("ro.bootloader"),
            brand: build.brand,
            device: build.device,
            display: props.get("ro.build.display.id"),
            fingerprint: build.fingerprint,
            hardware: props.get("ro.hardware"),
            host: props.get("ro.build.host"),
            id: props.get("ro.build.id"),
            manufacturer: build.manufacturer,
            model: build.model,
            product: build.product,
            supported_32_bit_abis: props.list("ro.product.cpu.abilist32").unwrap_or_default(),
            supported_64_bit_abis: props.list("ro.product.cpu.abilist64").unwrap_or_default(),
            supported_abis,
            tags: props.get("ro.build.tags"),
            build_type: props.get("ro.build.type"),
            user: props.get("ro.build.user"),
            codename: props.get("ro.build.version.codename"),
            incremental: props.get("ro.build.version.incremental"),
            release: props.get("ro.build.version.release"),
            sdk_int: props.parse("ro.build.version.sdk"),
            security_patch: props.get("ro.build.version.security_patch"),
            preview_sdk_int: props.parse("ro.build.version.preview_sdk"),
            board: props.get("ro.product.board"),
            radio_version: props.get("gsm.version.baseband"),
            serial_number: props.get("ro.serialno"),
            is_physical_device: !is_emulator,
            system_features: self.system.collect_features(&self.config.feature_dirs),
            total_memory: memory.total,
            available_memory: memory.available,
            cpu_info: self.cpu_report(),
            network_operator_name: props.first("gsm.operator.alpha"),
            sim_operator_name: props.first("gsm.sim.operator.alpha"),
        }
    }

    /// iOS identity, kernel facts, memory, battery and storage.
    ///
    /// Fields only UIKit can answer (device name, localized model, vendor
    /// identifier, screen metrics) are `None`.
    pub fn ios_device_info(&self) -> IosDeviceInfo {
        let uname = self.host.uname();
        let is_simulator = classify_emulator(
            &BuildIdentity::default(),
            Some(self.host.is_simulator_build()),
        );
        let memory = self.memory();

        IosDeviceInfo {
            name: None,
            system_name: Some("iOS".to_string()),
            system_version: self.host.system_property("kern.osproductversion"),
            model: uname.as_ref().and_then(|u| model_family(&u.machine)),
            localized_model: None,
            identifier_for_vendor: None,
            is_physical_device: !is_simulator,
            utsname: uname.as_ref().map(|u| u.summary()),
            machine: uname.as_ref().map(|u| u.machine.clone()),
            nodename: uname.as_ref().map(|u| u.nodename.clone()),
            release: uname.as_ref().map(|u| u.release.clone()),
            sysname: uname.as_ref().map(|u| u.sysname.clone()),
            version: uname.as_ref().map(|u| u.version.clone()),
            total_memory: memory.total,
            available_memory: memory.available,
            cpu_info: self.cpu_report(),
            screen_info: None,
            battery_info: self.battery_info(),
            storage_info: self.storage_report(),
        }
    }
}
